use serde::{Deserialize, Serialize};

use super::RoutineStep;

/// A catalog product as used by the routine builder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    /// Routine step the product belongs to; `None` for unrecognised labels
    pub step: Option<RoutineStep>,
    pub suitable_skin_types: Option<String>,
    pub primary_target: Option<String>,
    pub secondary_target: Option<String>,
    pub key_actives: Option<String>,
    pub contains_retinol: bool,
    pub contains_acid: bool,
    pub safe_for_sensitive: bool,
    pub prescription_only: bool,
    pub recommended_time: Option<String>,
    pub max_frequency: Option<String>,
}

impl Product {
    /// Creates a product with only identity and step set; every flag is off
    pub fn new(product_id: impl Into<String>, name: impl Into<String>, step: RoutineStep) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            step: Some(step),
            suitable_skin_types: None,
            primary_target: None,
            secondary_target: None,
            key_actives: None,
            contains_retinol: false,
            contains_acid: false,
            safe_for_sensitive: false,
            prescription_only: false,
            recommended_time: None,
            max_frequency: None,
        }
    }

    /// Fields searched for concern keywords
    pub fn concern_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.primary_target.as_deref(),
            self.secondary_target.as_deref(),
            self.key_actives.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// Raw catalog row as it appears in the CSV file
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub step: Option<String>,
    #[serde(default)]
    pub suitable_skin_types: Option<String>,
    #[serde(default)]
    pub primary_target: Option<String>,
    #[serde(default)]
    pub secondary_target: Option<String>,
    #[serde(default)]
    pub key_actives: Option<String>,
    #[serde(default)]
    pub contains_retinol: Option<String>,
    #[serde(default)]
    pub contains_acid: Option<String>,
    #[serde(default)]
    pub safe_for_sensitive: Option<String>,
    // Older exports spell this column "prescripition_only"
    #[serde(default, alias = "prescripition_only")]
    pub prescription_only: Option<String>,
    #[serde(default)]
    pub recommended_time: Option<String>,
    #[serde(default)]
    pub max_frequency: Option<String>,
}

/// Flags are set only by an exact `Yes`; surrounding whitespace is ignored
fn is_yes(flag: &Option<String>) -> bool {
    flag.as_deref().map(|v| v.trim() == "Yes").unwrap_or(false)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        let step = record
            .step
            .as_deref()
            .and_then(RoutineStep::from_catalog_label);

        Product {
            contains_retinol: is_yes(&record.contains_retinol),
            contains_acid: is_yes(&record.contains_acid),
            safe_for_sensitive: is_yes(&record.safe_for_sensitive),
            prescription_only: is_yes(&record.prescription_only),
            product_id: record.product_id.trim().to_string(),
            name: record.name.trim().to_string(),
            step,
            suitable_skin_types: non_blank(record.suitable_skin_types),
            primary_target: non_blank(record.primary_target),
            secondary_target: non_blank(record.secondary_target),
            key_actives: non_blank(record.key_actives),
            recommended_time: non_blank(record.recommended_time),
            max_frequency: non_blank(record.max_frequency),
        }
    }
}

/// Compact product card attached to a routine step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSummary {
    pub product_id: String,
    pub name: String,
    pub primary_target: Option<String>,
    pub key_actives: Option<String>,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.product_id.clone(),
            name: product.name.clone(),
            primary_target: product.primary_target.clone(),
            key_actives: product.key_actives.clone(),
        }
    }
}

/// Full product view returned by catalog browsing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetails {
    pub product_id: String,
    pub name: String,
    pub step: Option<RoutineStep>,
    pub primary_target: Option<String>,
    pub secondary_target: Option<String>,
    pub key_actives: Option<String>,
    pub recommended_time: Option<String>,
    pub max_frequency: Option<String>,
}

impl From<&Product> for ProductDetails {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.product_id.clone(),
            name: product.name.clone(),
            step: product.step,
            primary_target: product.primary_target.clone(),
            secondary_target: product.secondary_target.clone(),
            key_actives: product.key_actives.clone(),
            recommended_time: product.recommended_time.clone(),
            max_frequency: product.max_frequency.clone(),
        }
    }
}
