use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Product, ProductSummary};

pub const ROUTINE_TIP: &str = "Start slow • Patch test • Use what feels good";
pub const NO_MATCHES_MESSAGE: &str = "No specific matches this time — general advice is safe!";

/// One of the five fixed stages of a routine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoutineStep {
    Cleanse,
    ToneExfoliate,
    Treat,
    Moisturize,
    Protect,
}

impl RoutineStep {
    pub const ALL: [RoutineStep; 5] = [
        RoutineStep::Cleanse,
        RoutineStep::ToneExfoliate,
        RoutineStep::Treat,
        RoutineStep::Moisturize,
        RoutineStep::Protect,
    ];

    /// Value of the `step` column in the catalog
    pub fn catalog_label(&self) -> &'static str {
        match self {
            RoutineStep::Cleanse => "1. Cleanse",
            RoutineStep::ToneExfoliate => "2. Tone/Exfoliate",
            RoutineStep::Treat => "3. Treat",
            RoutineStep::Moisturize => "4. Moisturize",
            RoutineStep::Protect => "5. Protect",
        }
    }

    pub fn from_catalog_label(label: &str) -> Option<RoutineStep> {
        let label = label.trim();
        RoutineStep::ALL
            .into_iter()
            .find(|step| step.catalog_label() == label)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoutineStep::Cleanse => "Cleanse",
            RoutineStep::ToneExfoliate => "Tone",
            RoutineStep::Treat => "Treat",
            RoutineStep::Moisturize => "Moisturize",
            RoutineStep::Protect => "Protect",
        }
    }

    /// Generic advice used when no catalog product fits the step
    pub fn fallback(&self) -> &'static str {
        match self {
            RoutineStep::Cleanse => "Any gentle cleanser",
            RoutineStep::ToneExfoliate => "Any hydrating toner",
            RoutineStep::Treat => "Any serum",
            RoutineStep::Moisturize => "Any moisturizer",
            RoutineStep::Protect => "Any SPF 50+ in the morning",
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            RoutineStep::Cleanse => 1,
            RoutineStep::ToneExfoliate => 2,
            RoutineStep::Treat => 3,
            RoutineStep::Moisturize => 4,
            RoutineStep::Protect => 5,
        }
    }

    /// Whether the builder draws a catalog product for this step
    pub fn is_product_step(&self) -> bool {
        !matches!(self, RoutineStep::Protect)
    }
}

/// A single line of the rendered routine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutineEntry {
    pub step: RoutineStep,
    pub number: u8,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
}

impl RoutineEntry {
    pub fn with_product(step: RoutineStep, product: &Product) -> Self {
        Self {
            step,
            number: step.number(),
            name: step.display_name().to_string(),
            product: Some(ProductSummary::from(product)),
            advice: None,
        }
    }

    pub fn with_advice(step: RoutineStep) -> Self {
        Self {
            step,
            number: step.number(),
            name: step.display_name().to_string(),
            product: None,
            advice: Some(step.fallback().to_string()),
        }
    }
}

/// A complete five-step routine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Routine {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub steps: Vec<RoutineEntry>,
    /// Picked products without repeats, in step order
    pub products: Vec<ProductSummary>,
    pub tip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Routine {
    pub fn new(steps: Vec<RoutineEntry>, products: Vec<ProductSummary>) -> Self {
        let message = products
            .is_empty()
            .then(|| NO_MATCHES_MESSAGE.to_string());

        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            steps,
            products,
            tip: ROUTINE_TIP.to_string(),
            message,
        }
    }

    pub fn entry(&self, step: RoutineStep) -> Option<&RoutineEntry> {
        self.steps.iter().find(|e| e.step == step)
    }
}

/// Why a user was sent to a professional instead of receiving a routine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReferralReason {
    MedicalSupervision,
    ComplexConcerns,
}

impl ReferralReason {
    pub fn message(&self) -> &'static str {
        match self {
            ReferralReason::MedicalSupervision => "Safety first! Consult doctor.",
            ReferralReason::ComplexConcerns => "Complex concerns — seek professional advice.",
        }
    }
}

/// Result of a recommendation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RoutineOutcome {
    Routine(Routine),
    Referral {
        reason: ReferralReason,
        message: String,
    },
}

impl RoutineOutcome {
    pub fn referral(reason: ReferralReason) -> Self {
        RoutineOutcome::Referral {
            reason,
            message: reason.message().to_string(),
        }
    }
}
