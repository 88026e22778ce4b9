use axum::Json;
use serde::Serialize;

use crate::models::{Concern, SkinType};

#[derive(Debug, Serialize)]
pub struct SkinTypeGuide {
    pub skin_type: SkinType,
    pub explanation: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ConcernOption {
    pub concern: Concern,
    pub label: &'static str,
}

/// Quick guide for users unsure of their skin type
pub async fn skin_types() -> Json<Vec<SkinTypeGuide>> {
    Json(
        SkinType::ALL
            .into_iter()
            .map(|skin_type| SkinTypeGuide {
                skin_type,
                explanation: skin_type.explanation(),
            })
            .collect(),
    )
}

/// Concerns a client can offer in its questionnaire
pub async fn concerns() -> Json<Vec<ConcernOption>> {
    Json(
        Concern::ALL
            .into_iter()
            .map(|concern| ConcernOption {
                concern,
                label: concern.label(),
            })
            .collect(),
    )
}
