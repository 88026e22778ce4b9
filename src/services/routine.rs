use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};

use crate::{
    catalog::Catalog,
    models::{Product, ProductSummary, Routine, RoutineEntry, RoutineStep, SkinProfile},
    services::{filters, safety},
};

/// Builds a five-step routine for a profile.
///
/// Products go through the area, safety, skin type and concern filters in
/// that order. Each product step then draws one survivor at random; steps
/// with no survivors fall back to generic advice. Protect is always advice.
pub fn build_routine<R: Rng + ?Sized>(
    catalog: &Catalog,
    profile: &SkinProfile,
    rng: &mut R,
) -> Routine {
    let candidates = shortlist(catalog, profile);

    let mut steps = Vec::with_capacity(RoutineStep::ALL.len());
    let mut picked: Vec<&Product> = Vec::new();

    for step in RoutineStep::ALL {
        if !step.is_product_step() {
            steps.push(RoutineEntry::with_advice(step));
            continue;
        }

        let options: Vec<&Product> = candidates
            .iter()
            .copied()
            .filter(|p| p.step == Some(step))
            .collect();

        match options.choose(&mut *rng) {
            Some(&product) => {
                tracing::debug!(
                    step = step.display_name(),
                    product_id = %product.product_id,
                    options = options.len(),
                    "Picked product"
                );
                steps.push(RoutineEntry::with_product(step, product));
                picked.push(product);
            }
            None => {
                tracing::debug!(step = step.display_name(), "No product fits, using advice");
                steps.push(RoutineEntry::with_advice(step));
            }
        }
    }

    let products = dedupe_by_id(picked)
        .into_iter()
        .map(ProductSummary::from)
        .collect::<Vec<_>>();

    tracing::info!(
        skin_type = %profile.skin_type,
        candidates = candidates.len(),
        recommended = products.len(),
        "Routine built"
    );

    Routine::new(steps, products)
}

/// Runs every attribute filter and returns the surviving products
pub fn shortlist<'a>(catalog: &'a Catalog, profile: &SkinProfile) -> Vec<&'a Product> {
    let all: Vec<&Product> = catalog.products().iter().collect();
    let total = all.len();

    let by_area = filters::filter_by_area(all, profile.area);
    let after_area = by_area.len();

    let safe = safety::filter_by_safety(by_area, &profile.safety);
    let after_safety = safe.len();

    let by_type = filters::filter_by_skin_type(safe, profile.skin_type);
    let after_skin_type = by_type.len();

    let concerns = filters::effective_concerns(profile.skin_type, &profile.concerns);
    let shortlisted = filters::filter_by_concerns(by_type, &concerns);

    tracing::debug!(
        total,
        after_area,
        after_safety,
        after_skin_type,
        after_concerns = shortlisted.len(),
        ?concerns,
        "Catalog filtered"
    );

    shortlisted
}

/// Drops repeated products, keeping the first occurrence of each id
pub fn dedupe_by_id(products: Vec<&Product>) -> Vec<&Product> {
    let mut seen = HashSet::new();
    products
        .into_iter()
        .filter(|p| seen.insert(p.product_id.clone()))
        .collect()
}
