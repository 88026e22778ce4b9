use crate::models::{Product, SafetyFlags};

/// Whether a product may be recommended given the user's safety flags
pub fn is_safe(product: &Product, flags: &SafetyFlags) -> bool {
    if flags.pregnant && (product.contains_retinol || product.prescription_only) {
        return false;
    }
    if flags.sensitive && !product.safe_for_sensitive {
        return false;
    }
    if flags.prescription && (product.contains_retinol || product.contains_acid) {
        return false;
    }
    true
}

pub fn filter_by_safety<'a>(products: Vec<&'a Product>, flags: &SafetyFlags) -> Vec<&'a Product> {
    products.into_iter().filter(|p| is_safe(p, flags)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoutineStep;

    fn product() -> Product {
        Product::new("P", "Serum", RoutineStep::Treat)
    }

    fn flags(sensitive: bool, pregnant: bool, prescription: bool) -> SafetyFlags {
        SafetyFlags {
            sensitive,
            pregnant,
            prescription,
        }
    }

    #[test]
    fn test_no_flags_allows_everything() {
        let mut p = product();
        p.contains_retinol = true;
        p.contains_acid = true;
        p.prescription_only = true;
        assert!(is_safe(&p, &SafetyFlags::default()));
    }

    #[test]
    fn test_pregnancy_excludes_retinol_and_prescription_only() {
        let mut retinol = product();
        retinol.contains_retinol = true;
        let mut rx = product();
        rx.prescription_only = true;
        let mut acid = product();
        acid.contains_acid = true;

        let pregnant = flags(false, true, false);
        assert!(!is_safe(&retinol, &pregnant));
        assert!(!is_safe(&rx, &pregnant));
        assert!(is_safe(&acid, &pregnant));
    }

    #[test]
    fn test_sensitive_requires_marking() {
        let mut marked = product();
        marked.safe_for_sensitive = true;
        let sensitive = flags(true, false, false);
        assert!(is_safe(&marked, &sensitive));
        assert!(!is_safe(&product(), &sensitive));
    }

    #[test]
    fn test_prescription_excludes_retinol_and_acids() {
        let mut retinol = product();
        retinol.contains_retinol = true;
        let mut acid = product();
        acid.contains_acid = true;
        let mut rx_only = product();
        rx_only.prescription_only = true;

        let on_prescription = flags(false, false, true);
        assert!(!is_safe(&retinol, &on_prescription));
        assert!(!is_safe(&acid, &on_prescription));
        assert!(is_safe(&rx_only, &on_prescription));
    }

    #[test]
    fn test_filter_by_safety() {
        let mut safe = product();
        safe.safe_for_sensitive = true;
        let unsafe_for_sensitive = product();
        let items = vec![safe, unsafe_for_sensitive];
        let kept = filter_by_safety(items.iter().collect(), &flags(true, false, false));
        assert_eq!(kept.len(), 1);
    }
}
