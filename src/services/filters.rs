use crate::models::{Area, Concern, Product, SkinType};

const FACE_EXCLUDED_NAMES: &[&str] = &["body wash", "shower gel"];
const BODY_NAME_MARKER: &str = "body";

/// Keeps products meant for the area the user is shopping for.
///
/// Face only drops heavy body cleansers; Body requires "body" in the name.
pub fn filter_by_area(products: Vec<&Product>, area: Area) -> Vec<&Product> {
    match area {
        Area::Both => products,
        Area::Face => products
            .into_iter()
            .filter(|p| {
                let name = p.name.to_lowercase();
                !FACE_EXCLUDED_NAMES.iter().any(|term| name.contains(term))
            })
            .collect(),
        Area::Body => products
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(BODY_NAME_MARKER))
            .collect(),
    }
}

/// Lowercase terms accepted in `suitable_skin_types` for a skin type
pub fn skin_type_terms(skin_type: SkinType) -> &'static [&'static str] {
    match skin_type {
        SkinType::Oily => &["all", "oily", "acne-prone"],
        SkinType::Dry => &["all", "dry"],
        SkinType::Combination | SkinType::Normal => &["all"],
    }
}

/// Keeps products compatible with the skin type. Products that don't state
/// their suitable skin types are kept.
pub fn filter_by_skin_type(products: Vec<&Product>, skin_type: SkinType) -> Vec<&Product> {
    let terms = skin_type_terms(skin_type);
    products
        .into_iter()
        .filter(|p| match p.suitable_skin_types.as_deref() {
            Some(types) => {
                let types = types.to_lowercase();
                terms.iter().any(|term| types.contains(term))
            }
            None => true,
        })
        .collect()
}

/// Concerns used for matching: the user's own, or a default for the skin type
pub fn effective_concerns(skin_type: SkinType, concerns: &[Concern]) -> Vec<Concern> {
    if !concerns.is_empty() {
        return concerns.to_vec();
    }

    match skin_type {
        SkinType::Oily => vec![Concern::Acne],
        SkinType::Dry => vec![Concern::Dryness],
        SkinType::Combination | SkinType::Normal => vec![Concern::Dull],
    }
}

/// Keeps products whose targets or actives mention any keyword of any concern.
///
/// Concerns without keywords match nothing, so a request made only of such
/// concerns leaves no products.
pub fn filter_by_concerns<'a>(products: Vec<&'a Product>, concerns: &[Concern]) -> Vec<&'a Product> {
    let keywords: Vec<&str> = concerns
        .iter()
        .flat_map(|c| c.keywords().iter().copied())
        .collect();

    if keywords.is_empty() {
        tracing::debug!(?concerns, "No keywords for concerns, nothing can match");
        return Vec::new();
    }

    products
        .into_iter()
        .filter(|p| {
            p.concern_fields().any(|field| {
                let field = field.to_lowercase();
                keywords.iter().any(|kw| field.contains(kw))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoutineStep;

    fn named(id: &str, name: &str) -> Product {
        Product::new(id, name, RoutineStep::Cleanse)
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.product_id.clone()).collect()
    }

    #[test]
    fn test_area_face_drops_body_cleansers_only() {
        let items = vec![
            named("1", "Gentle Face Wash"),
            named("2", "Citrus Body Wash"),
            named("3", "Lavender SHOWER GEL"),
            named("4", "Body Lotion"),
        ];
        let kept = filter_by_area(items.iter().collect(), Area::Face);
        assert_eq!(ids(&kept), vec!["1", "4"]);
    }

    #[test]
    fn test_area_body_requires_body_in_name() {
        let items = vec![named("1", "Gentle Face Wash"), named("2", "Citrus Body Wash")];
        let kept = filter_by_area(items.iter().collect(), Area::Body);
        assert_eq!(ids(&kept), vec!["2"]);
    }

    #[test]
    fn test_area_both_keeps_everything() {
        let items = vec![named("1", "Face Wash"), named("2", "Body Wash")];
        assert_eq!(filter_by_area(items.iter().collect(), Area::Both).len(), 2);
    }

    #[test]
    fn test_skin_type_filter() {
        let mut all = named("all", "A");
        all.suitable_skin_types = Some("All skin types".to_string());
        let mut oily = named("oily", "B");
        oily.suitable_skin_types = Some("Oily, Combination".to_string());
        let mut acne = named("acne", "C");
        acne.suitable_skin_types = Some("acne-prone".to_string());
        let mut dry = named("dry", "D");
        dry.suitable_skin_types = Some("Dry".to_string());
        let unknown = named("unknown", "E");
        let items = vec![all, oily, acne, dry, unknown];

        let oily_kept = filter_by_skin_type(items.iter().collect(), SkinType::Oily);
        assert_eq!(ids(&oily_kept), vec!["all", "oily", "acne", "unknown"]);

        let dry_kept = filter_by_skin_type(items.iter().collect(), SkinType::Dry);
        assert_eq!(ids(&dry_kept), vec!["all", "dry", "unknown"]);

        let normal_kept = filter_by_skin_type(items.iter().collect(), SkinType::Normal);
        assert_eq!(ids(&normal_kept), vec!["all", "unknown"]);
    }

    #[test]
    fn test_effective_concerns_defaults() {
        assert_eq!(effective_concerns(SkinType::Oily, &[]), vec![Concern::Acne]);
        assert_eq!(effective_concerns(SkinType::Dry, &[]), vec![Concern::Dryness]);
        assert_eq!(effective_concerns(SkinType::Normal, &[]), vec![Concern::Dull]);
        assert_eq!(
            effective_concerns(SkinType::Oily, &[Concern::Aging]),
            vec![Concern::Aging]
        );
    }

    #[test]
    fn test_concern_filter_matches_any_field() {
        let mut by_target = named("target", "A");
        by_target.primary_target = Some("Blemishes".to_string());
        let mut by_secondary = named("secondary", "B");
        by_secondary.secondary_target = Some("Enlarged PORES".to_string());
        let mut by_active = named("active", "C");
        by_active.key_actives = Some("Niacinamide 10%".to_string());
        let mut unrelated = named("other", "D");
        unrelated.primary_target = Some("Fine lines".to_string());
        let items = vec![by_target, by_secondary, by_active, unrelated];

        let kept = filter_by_concerns(items.iter().collect(), &[Concern::Acne]);
        assert_eq!(ids(&kept), vec!["target", "secondary", "active"]);
    }

    #[test]
    fn test_concern_filter_unions_concerns() {
        let mut hydrating = named("hydra", "A");
        hydrating.key_actives = Some("Hyaluronic acid".to_string());
        let mut brightening = named("bright", "B");
        brightening.primary_target = Some("Dark spots".to_string());
        let items = vec![hydrating, brightening];

        let kept = filter_by_concerns(items.iter().collect(), &[Concern::Dryness, Concern::DarkSpots]);
        assert_eq!(kept.len(), 2);

        let kept = filter_by_concerns(items.iter().collect(), &[Concern::Dryness, Concern::Aging]);
        assert_eq!(ids(&kept), vec!["hydra"]);
    }

    #[test]
    fn test_concern_filter_matches_nothing_without_keywords() {
        let mut dull = named("1", "A");
        dull.primary_target = Some("Dull skin".to_string());
        let mut aging = named("2", "B");
        aging.primary_target = Some("Aging".to_string());
        let items = vec![dull, aging];
        let kept = filter_by_concerns(items.iter().collect(), &[Concern::Dull, Concern::Aging]);
        assert!(kept.is_empty());
    }
}
