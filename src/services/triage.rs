use rand::Rng;

use crate::{
    catalog::Catalog,
    models::{ReferralReason, RoutineOutcome, SkinProfile},
    services::routine::build_routine,
};

/// More concerns than this on sensitive skin warrants a professional
pub const MAX_SELF_CARE_CONCERNS: usize = 2;

/// Decides whether a profile should be referred instead of served a routine
pub fn referral_reason(profile: &SkinProfile) -> Option<ReferralReason> {
    let safety = &profile.safety;
    if safety.pregnant || safety.prescription {
        return Some(ReferralReason::MedicalSupervision);
    }
    if safety.sensitive && profile.concerns.len() > MAX_SELF_CARE_CONCERNS {
        return Some(ReferralReason::ComplexConcerns);
    }
    None
}

/// Recommends a routine, or a referral when self-care isn't appropriate
pub fn recommend<R: Rng + ?Sized>(
    catalog: &Catalog,
    profile: &SkinProfile,
    rng: &mut R,
) -> RoutineOutcome {
    if let Some(reason) = referral_reason(profile) {
        tracing::info!(?reason, concerns = profile.concerns.len(), "Referring user");
        return RoutineOutcome::referral(reason);
    }

    RoutineOutcome::Routine(build_routine(catalog, profile, rng))
}
