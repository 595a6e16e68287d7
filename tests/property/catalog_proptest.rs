//! Property-based tests for the generated catalog

use emarket::shared::catalog::{
    discount_percent, filter_by_category, generate_catalog, generate_product, Category,
    VisibleWindow, ALL_CATEGORIES,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_generation_is_deterministic(id in 1u32..10_000) {
        let first = serde_json::to_vec(&generate_product(id)).unwrap();
        let second = serde_json::to_vec(&generate_product(id)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_catalog_entries_match_ids(size in 0u32..200) {
        let catalog = generate_catalog(size);
        prop_assert_eq!(catalog.len(), size as usize);
        for (i, product) in catalog.iter().enumerate() {
            let expected = generate_product(i as u32 + 1);
            prop_assert_eq!(Some(product), expected.as_ref());
        }
    }

    #[test]
    fn test_product_fields_are_in_range(id in 1u32..10_000) {
        let product = generate_product(id).unwrap();
        prop_assert!((3.5..=4.9).contains(&product.rating));
        prop_assert!(product.price.ends_with(" RWF"));
        let img_suffix = format!("random={}", id);
        prop_assert!(product.img.ends_with(&img_suffix));
        match &product.original_price {
            Some(original) => {
                prop_assert_eq!(id % 4, 0);
                prop_assert_eq!(discount_percent(original, &product.price), Some(20));
            }
            None => prop_assert_ne!(id % 4, 0),
        }
    }

    #[test]
    fn test_category_filter_partitions_catalog(size in 0u32..200) {
        let catalog = generate_catalog(size);
        prop_assert_eq!(filter_by_category(&catalog, ALL_CATEGORIES).len(), catalog.len());

        let mut total = 0;
        for category in Category::ALL {
            let matching = filter_by_category(&catalog, category.as_str());
            prop_assert!(matching.iter().all(|p| p.category == category));
            total += matching.len();
        }
        prop_assert_eq!(total, catalog.len());
    }

    #[test]
    fn test_window_never_exceeds_total(page in 1usize..30, total in 0usize..300, loads in 0usize..20) {
        let mut window = VisibleWindow::new(page);
        for _ in 0..loads {
            window.load_more(total);
        }
        prop_assert!(window.visible(total) <= total);
        prop_assert_eq!(window.has_more(total), window.visible(total) < total);
    }

    #[test]
    fn test_window_reaches_the_end(page in 1usize..30, total in 0usize..300) {
        let mut window = VisibleWindow::new(page);
        let mut loads = 0;
        while window.load_more(total) {
            loads += 1;
        }
        prop_assert_eq!(window.visible(total), total);
        prop_assert_eq!(loads, total.saturating_sub(1) / page);
    }
}
