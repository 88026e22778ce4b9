use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{Area, Concern, RoutineOutcome, SafetyFlags, SkinProfile, SkinType},
    routes::AppState,
    services::triage,
};

/// Questionnaire answers as submitted by a client
///
/// Mirrors `SkinProfile`, plus concerns given as questionnaire labels.
/// Unknown fields are rejected so a misspelled flag can't be dropped.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutineRequest {
    pub skin_type: SkinType,
    #[serde(default)]
    pub concerns: Vec<Concern>,
    /// Concerns given as questionnaire labels, e.g. "Acne / breakouts"
    #[serde(default)]
    pub concern_labels: Vec<String>,
    #[serde(default)]
    pub safety: SafetyFlags,
    #[serde(default)]
    pub area: Area,
}

impl TryFrom<RoutineRequest> for SkinProfile {
    type Error = AppError;

    fn try_from(request: RoutineRequest) -> AppResult<Self> {
        let mut profile = SkinProfile::new(request.skin_type)
            .with_area(request.area)
            .with_safety(request.safety);

        for concern in request.concerns {
            profile = profile.with_concern(concern);
        }

        for label in &request.concern_labels {
            match Concern::from_label(label) {
                Ok(Some(concern)) => profile = profile.with_concern(concern),
                Ok(None) => {}
                Err(unknown) => {
                    return Err(AppError::InvalidInput(format!(
                        "Unknown concern: {}",
                        unknown
                    )))
                }
            }
        }

        Ok(profile)
    }
}

/// Handler for the routine endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RoutineRequest>, JsonRejection>,
) -> AppResult<Json<RoutineOutcome>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(request_id = %request_id, error = %rejection.body_text(), "Rejected routine request");
        AppError::InvalidInput(rejection.body_text())
    })?;
    let profile = SkinProfile::try_from(request)?;

    tracing::info!(
        request_id = %request_id,
        skin_type = %profile.skin_type,
        concerns = profile.concerns.len(),
        area = ?profile.area,
        "Processing routine request"
    );

    let mut rng = state.rng();
    let outcome = triage::recommend(&state.catalog, &profile, &mut rng);

    Ok(Json(outcome))
}
