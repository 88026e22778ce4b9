use std::io::Read;
use std::path::PathBuf;

use crate::{
    catalog::CatalogSource,
    error::{AppError, AppResult},
    models::{Product, ProductRecord},
};

/// Catalog stored as a CSV file with a header row
#[derive(Debug, Clone)]
pub struct CsvCatalogSource {
    path: PathBuf,
}

impl CsvCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CatalogSource for CsvCatalogSource {
    async fn load(&self) -> AppResult<Vec<Product>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to read catalog");
            e
        })?;

        parse_products(bytes.as_slice())
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}

/// Parses catalog rows from any CSV reader
pub fn parse_products<R: Read>(reader: R) -> AppResult<Vec<Product>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for required in ["product_id", "name"] {
        if !headers.iter().any(|h| h == required) {
            return Err(AppError::InvalidInput(format!(
                "Catalog is missing required column '{}'",
                required
            )));
        }
    }

    let mut products = Vec::new();
    for (index, row) in csv_reader.deserialize::<ProductRecord>().enumerate() {
        let record = row.map_err(|e| {
            tracing::warn!(row = index + 1, error = %e, "Malformed catalog row");
            e
        })?;
        products.push(Product::from(record));
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoutineStep;

    const SAMPLE: &str = "\
product_id,name,step,suitable_skin_types,primary_target,secondary_target,key_actives,contains_retinol,contains_acid,safe_for_sensitive,prescripition_only,recommended_time,max_frequency
P001,Clear Pore Gel Cleanser,1. Cleanse,Oily|Acne-prone,Acne,Oil control,Salicylic acid,No,Yes,No,No,AM/PM,Daily
P002,Night Renewal Serum,3. Treat,All,Aging,,Retinol,Yes,No,No,Yes,PM,3x weekly
P003,Sheet Mask,6. Mask,,Hydration,,,No,No,Yes,No,,
";

    #[test]
    fn test_parse_sample() {
        let products = parse_products(SAMPLE.as_bytes()).unwrap();
        assert_eq!(products.len(), 3);

        let cleanser = &products[0];
        assert_eq!(cleanser.step, Some(RoutineStep::Cleanse));
        assert_eq!(cleanser.suitable_skin_types.as_deref(), Some("Oily|Acne-prone"));
        assert!(cleanser.contains_acid);

        let serum = &products[1];
        assert!(serum.contains_retinol);
        assert!(serum.prescription_only, "misspelled header must be honoured");
        assert_eq!(serum.secondary_target, None);

        let mask = &products[2];
        assert_eq!(mask.step, None);
        assert_eq!(mask.suitable_skin_types, None);
        assert!(mask.safe_for_sensitive);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "id,name\n1,Thing\n";
        let result = parse_products(csv.as_bytes());
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let csv = "product_id,name,step\nP9,Plain Balm,4. Moisturize\n";
        let products = parse_products(csv.as_bytes()).unwrap();
        assert_eq!(products[0].step, Some(RoutineStep::Moisturize));
        assert!(!products[0].safe_for_sensitive);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = CsvCatalogSource::new("/definitely/not/here.csv");
        let result = source.load().await;
        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(source.describe(), "csv:/definitely/not/here.csv");
    }
}
