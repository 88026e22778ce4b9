use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::ProductDetails,
};

/// Finds products whose name contains the query, ignoring case
pub fn search_products(catalog: &Catalog, query: &str) -> AppResult<Vec<ProductDetails>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(AppError::InvalidInput(
            "Search query must not be empty".to_string(),
        ));
    }

    let matches: Vec<ProductDetails> = catalog
        .products()
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .map(ProductDetails::from)
        .collect();

    tracing::debug!(query = %needle, matches = matches.len(), "Product search");

    Ok(matches)
}

/// Looks up a single product by id
pub fn product_details(catalog: &Catalog, product_id: &str) -> AppResult<ProductDetails> {
    catalog
        .find(product_id)
        .map(ProductDetails::from)
        .ok_or_else(|| AppError::NotFound(format!("Product {}", product_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, RoutineStep};

    fn catalog() -> Catalog {
        Catalog::from_products(vec![
            Product::new("A", "Vitamin C Serum", RoutineStep::Treat),
            Product::new("B", "Hydrating Serum", RoutineStep::Treat),
            Product::new("C", "Cream Cleanser", RoutineStep::Cleanse),
        ])
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let results = search_products(&catalog(), "  SERUM ").unwrap();
        let ids: Vec<&str> = results.iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn test_search_without_matches_is_empty() {
        assert!(search_products(&catalog(), "sunscreen").unwrap().is_empty());
    }

    #[test]
    fn test_empty_query_rejected() {
        assert!(matches!(
            search_products(&catalog(), "   "),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_product_details() {
        let details = product_details(&catalog(), "C").unwrap();
        assert_eq!(details.name, "Cream Cleanser");
        assert_eq!(details.step, Some(RoutineStep::Cleanse));
        assert!(matches!(
            product_details(&catalog(), "Z"),
            Err(AppError::NotFound(_))
        ));
    }
}
