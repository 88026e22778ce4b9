use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod product;
pub mod routine;

pub use product::{Product, ProductDetails, ProductRecord, ProductSummary};
pub use routine::{ReferralReason, Routine, RoutineEntry, RoutineOutcome, RoutineStep};

/// Self-reported skin type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
    Normal,
}

impl SkinType {
    pub const ALL: [SkinType; 4] = [
        SkinType::Oily,
        SkinType::Dry,
        SkinType::Combination,
        SkinType::Normal,
    ];

    /// Short description shown to users who are unsure of their type
    pub fn explanation(&self) -> &'static str {
        match self {
            SkinType::Oily => {
                "Skin that gets shiny quickly, especially on the T-zone, and may be prone to breakouts."
            }
            SkinType::Dry => "Skin that feels tight, flaky, or rough and lacks moisture.",
            SkinType::Combination => {
                "Oily in some areas (usually forehead, nose, chin) and dry/normal in others (cheeks)."
            }
            SkinType::Normal => "Balanced — not too oily or dry, with few issues.",
        }
    }
}

impl Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SkinType::Oily => "Oily",
            SkinType::Dry => "Dry",
            SkinType::Combination => "Combination",
            SkinType::Normal => "Normal",
        };
        write!(f, "{}", name)
    }
}

/// A skin issue the user wants the routine to address
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Concern {
    Acne,
    DarkSpots,
    Dryness,
    Dull,
    Texture,
    Aging,
    Sensitivity,
    BarrierDamage,
}

const ACNE_KEYWORDS: &[&str] = &[
    "acne",
    "blemish",
    "pore",
    "salicylic",
    "benzoyl",
    "breakout",
    "niacinamide",
    "oil control",
];

const DARK_SPOT_KEYWORDS: &[&str] = &[
    "brightening",
    "even tone",
    "fade spots",
    "whitening",
    "hyperpigmentation",
    "dark spots",
    "melasma",
    "pigment",
    "arbutin",
    "kojic",
    "niacinamide",
    "vitamin c",
    "tranexamic",
];

const DRYNESS_KEYWORDS: &[&str] = &["hydration", "hyaluronic", "moisturizing", "dryness", "ceramide"];

impl Concern {
    pub const ALL: [Concern; 8] = [
        Concern::Acne,
        Concern::DarkSpots,
        Concern::Dryness,
        Concern::Dull,
        Concern::Texture,
        Concern::Aging,
        Concern::Sensitivity,
        Concern::BarrierDamage,
    ];

    /// Label used by the questionnaire
    pub fn label(&self) -> &'static str {
        match self {
            Concern::Acne => "Acne / breakouts",
            Concern::DarkSpots => "Dark spots / hyperpigmentation / melasma",
            Concern::Dryness => "Dryness / dehydration",
            Concern::Dull => "Dull skin",
            Concern::Texture => "Uneven texture / rough skin",
            Concern::Aging => "Aging / fine lines",
            Concern::Sensitivity => "Sensitivity / irritation",
            Concern::BarrierDamage => "Damaged barrier",
        }
    }

    /// Maps a questionnaire label onto a concern.
    ///
    /// Returns `Ok(None)` for the explicit "None" option and `Err` with the
    /// offending label when nothing matches.
    pub fn from_label(label: &str) -> Result<Option<Concern>, String> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        Concern::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
            .copied()
            .map(Some)
            .ok_or_else(|| label.to_string())
    }

    /// Lowercase keywords matched against product targets and actives
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Concern::Acne => ACNE_KEYWORDS,
            Concern::DarkSpots => DARK_SPOT_KEYWORDS,
            Concern::Dryness => DRYNESS_KEYWORDS,
            _ => &[],
        }
    }
}

/// Which part of the body the user is shopping for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    #[default]
    Face,
    Body,
    Both,
}

/// Conditions that rule products out regardless of preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct SafetyFlags {
    /// Skin reacts easily
    #[serde(default)]
    pub sensitive: bool,
    /// Pregnant or breastfeeding
    #[serde(default)]
    pub pregnant: bool,
    /// Currently using prescription skincare
    #[serde(default)]
    pub prescription: bool,
}

/// Everything the routine builder knows about the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkinProfile {
    pub skin_type: SkinType,
    #[serde(default)]
    pub concerns: Vec<Concern>,
    #[serde(default)]
    pub safety: SafetyFlags,
    #[serde(default)]
    pub area: Area,
}

impl SkinProfile {
    pub fn new(skin_type: SkinType) -> Self {
        Self {
            skin_type,
            concerns: Vec::new(),
            safety: SafetyFlags::default(),
            area: Area::default(),
        }
    }

    /// Adds a concern, ignoring repeats
    pub fn with_concern(mut self, concern: Concern) -> Self {
        if !self.concerns.contains(&concern) {
            self.concerns.push(concern);
        }
        self
    }

    pub fn with_safety(mut self, safety: SafetyFlags) -> Self {
        self.safety = safety;
        self
    }

    pub fn with_area(mut self, area: Area) -> Self {
        self.area = area;
        self
    }
}
