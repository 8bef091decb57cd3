//! Pure derivation of the visible listing from a fetched catalog and a query.

use core::cmp::Reverse;
use std::collections::HashSet;

use crate::product::Product;
use crate::query::{BrowseQuery, SortKey};

/// Filter `products` by `query`, then order by `query.sort`.
///
/// The input is never mutated; callers keep the fetched catalog pristine and
/// re-derive whenever the query changes. All orderings are stable, so products
/// that compare equal keep their catalog order.
pub fn derive(products: &[Product], query: &BrowseQuery) -> Vec<Product> {
    let mut listing: Vec<Product> = products
        .iter()
        .filter(|p| query.matches(p))
        .cloned()
        .collect();
    sort(&mut listing, query.sort);
    listing
}

/// Order `products` in place by `key`. `Default` leaves catalog order as-is.
pub fn sort(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Default => {}
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::NameAsc => products.sort_by_cached_key(|p| title_key(&p.title)),
        SortKey::NameDesc => products.sort_by_cached_key(|p| Reverse(title_key(&p.title))),
    }
}

// Lowercasing approximates locale-aware ordering closely enough for an
// ASCII-dominated catalog.
fn title_key(title: &str) -> String {
    title.to_lowercase()
}

/// Distinct categories in first-appearance order.
pub fn unique_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for product in products {
        if seen.insert(product.category.as_str()) {
            out.push(product.category.clone());
        }
    }
    out
}

/// Distinct brands in first-appearance order. Unbranded products contribute
/// nothing.
pub fn unique_brands(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for product in products {
        if let Some(brand) = product.brand.as_deref() {
            if seen.insert(brand) {
                out.push(brand.to_string());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{PriceRange, Selection};
    use vitrine_core::ProductId;

    fn product(id: u64, title: &str, price: f64, category: &str, brand: Option<&str>) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price,
            description: String::new(),
            category: category.to_string(),
            brand: brand.map(str::to_string),
            image: String::new(),
            rating: None,
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "Fjallraven Backpack", 109.95, "men's clothing", None),
            product(2, "Mens Casual Premium Slim Fit T-Shirts", 22.3, "men's clothing", None),
            product(3, "Mens Cotton Jacket", 55.99, "men's clothing", None),
            product(4, "John Hardy Chain Bracelet", 695.0, "jewelery", None),
            product(5, "WD 2TB External Hard Drive", 64.0, "electronics", Some("WD")),
            product(6, "SanDisk SSD Plus 1TB", 109.0, "electronics", Some("SanDisk")),
            product(7, "Silicon Power 256GB SSD", 109.0, "electronics", Some("Silicon Power")),
            product(8, "Acer 21.5 inch Monitor", 599.0, "electronics", Some("Acer")),
        ]
    }

    #[test]
    fn default_query_returns_whole_catalog_in_order() {
        let catalog = sample_catalog();
        let listing = derive(&catalog, &BrowseQuery::default());
        assert_eq!(listing, catalog);
    }

    #[test]
    fn search_narrows_by_title_substring() {
        let catalog = sample_catalog();
        let query = BrowseQuery {
            search: "ssd".to_string(),
            ..BrowseQuery::default()
        };
        let listing = derive(&catalog, &query);
        let ids: Vec<u64> = listing.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![6, 7]);
    }

    #[test]
    fn all_filters_compose() {
        // Searching "ssd" inside electronics priced 100..=600 keeps exactly
        // the two SSDs; the hard drive fails the search and the monitor does
        // too.
        let catalog = sample_catalog();
        let query = BrowseQuery {
            search: "ssd".to_string(),
            category: Selection::only("electronics"),
            brand: Selection::All,
            price: PriceRange::new(100.0, 600.0).unwrap(),
            sort: SortKey::Default,
        };
        let listing = derive(&catalog, &query);
        let ids: Vec<u64> = listing.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![6, 7]);
    }

    #[test]
    fn narrowing_brand_can_empty_the_listing() {
        let catalog = sample_catalog();
        let query = BrowseQuery {
            category: Selection::only("jewelery"),
            brand: Selection::only("WD"),
            ..BrowseQuery::default()
        };
        assert!(derive(&catalog, &query).is_empty());
    }

    #[test]
    fn price_asc_orders_cheapest_first() {
        let catalog = sample_catalog();
        let query = BrowseQuery {
            sort: SortKey::PriceAsc,
            ..BrowseQuery::default()
        };
        let listing = derive(&catalog, &query);
        let prices: Vec<f64> = listing.iter().map(|p| p.price).collect();
        let mut expected = prices.clone();
        expected.sort_by(f64::total_cmp);
        assert_eq!(prices, expected);
        assert_eq!(listing[0].id.get(), 2);
    }

    #[test]
    fn price_desc_orders_dearest_first() {
        let catalog = sample_catalog();
        let query = BrowseQuery {
            sort: SortKey::PriceDesc,
            ..BrowseQuery::default()
        };
        let listing = derive(&catalog, &query);
        assert_eq!(listing[0].id.get(), 4);
        assert_eq!(listing.last().unwrap().id.get(), 2);
    }

    #[test]
    fn name_sort_ignores_case() {
        let catalog = vec![
            product(1, "zebra print scarf", 10.0, "accessories", None),
            product(2, "Anchor bracelet", 10.0, "accessories", None),
            product(3, "mittens", 10.0, "accessories", None),
        ];
        let query = BrowseQuery {
            sort: SortKey::NameAsc,
            ..BrowseQuery::default()
        };
        let titles: Vec<String> = derive(&catalog, &query).into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Anchor bracelet", "mittens", "zebra print scarf"]);
    }

    #[test]
    fn electronics_by_ascending_price_ignores_inactive_filters() {
        // Empty search, all brands, and the default price range change
        // nothing; only the category filter and the ordering act.
        let catalog = vec![
            product(1, "Monitor", 599.0, "electronics", Some("Acer")),
            product(2, "SSD", 109.0, "electronics", None),
            product(3, "Hard Drive", 64.0, "electronics", Some("WD")),
        ];
        let query = BrowseQuery {
            search: String::new(),
            category: Selection::only("electronics"),
            brand: Selection::All,
            price: PriceRange::default(),
            sort: SortKey::PriceAsc,
        };
        let ids: Vec<u64> = derive(&catalog, &query).iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn equal_prices_keep_catalog_order() {
        // Products 6 and 7 share a price; ascending and descending sorts must
        // both keep 6 before 7.
        let catalog = sample_catalog();
        for key in [SortKey::PriceAsc, SortKey::PriceDesc] {
            let query = BrowseQuery {
                sort: key,
                ..BrowseQuery::default()
            };
            let listing = derive(&catalog, &query);
            let pos6 = listing.iter().position(|p| p.id.get() == 6).unwrap();
            let pos7 = listing.iter().position(|p| p.id.get() == 7).unwrap();
            assert!(pos6 < pos7, "tie broken out of catalog order for {key:?}");
        }
    }

    #[test]
    fn derive_does_not_mutate_input() {
        let catalog = sample_catalog();
        let before = catalog.clone();
        let query = BrowseQuery {
            sort: SortKey::PriceDesc,
            ..BrowseQuery::default()
        };
        let _ = derive(&catalog, &query);
        assert_eq!(catalog, before);
    }

    #[test]
    fn unique_categories_keep_first_appearance_order() {
        let catalog = sample_catalog();
        assert_eq!(
            unique_categories(&catalog),
            vec!["men's clothing", "jewelery", "electronics"]
        );
    }

    #[test]
    fn unique_brands_skip_unbranded_products() {
        let catalog = sample_catalog();
        assert_eq!(
            unique_brands(&catalog),
            vec!["WD", "SanDisk", "Silicon Power", "Acer"]
        );
    }

    #[test]
    fn unique_facets_of_empty_catalog_are_empty() {
        assert!(unique_categories(&[]).is_empty());
        assert!(unique_brands(&[]).is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                1u64..10_000,
                "[A-Za-z ]{0,16}",
                0.0f64..6_000.0,
                prop::sample::select(vec![
                    "electronics",
                    "jewelery",
                    "men's clothing",
                    "women's clothing",
                ]),
                prop::option::of(prop::sample::select(vec!["WD", "SanDisk", "Acer"])),
            )
                .prop_map(|(id, title, price, category, brand)| Product {
                    id: ProductId::new(id),
                    title,
                    price,
                    description: String::new(),
                    category: category.to_string(),
                    brand: brand.map(str::to_string),
                    image: String::new(),
                    rating: None,
                })
        }

        fn arb_query() -> impl Strategy<Value = BrowseQuery> {
            let category = prop_oneof![
                Just(Selection::All),
                prop::sample::select(vec!["electronics", "jewelery", "men's clothing"])
                    .prop_map(Selection::only),
            ];
            let brand = prop_oneof![
                Just(Selection::All),
                prop::sample::select(vec!["WD", "SanDisk"]).prop_map(Selection::only),
            ];
            let price = (0.0f64..3_000.0, 0.0f64..3_000.0)
                .prop_map(|(a, b)| PriceRange::new(a.min(b), a.max(b)).unwrap());
            let sort = prop::sample::select(vec![
                SortKey::Default,
                SortKey::PriceAsc,
                SortKey::PriceDesc,
                SortKey::NameAsc,
                SortKey::NameDesc,
            ]);
            ("[a-z]{0,4}", category, brand, price, sort).prop_map(
                |(search, category, brand, price, sort)| BrowseQuery {
                    search,
                    category,
                    brand,
                    price,
                    sort,
                },
            )
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: everything derived matches the query.
            #[test]
            fn derived_products_all_match(
                catalog in prop::collection::vec(arb_product(), 0..40),
                query in arb_query(),
            ) {
                for product in derive(&catalog, &query) {
                    prop_assert!(query.matches(&product));
                }
            }

            /// Property: nothing matching is dropped and nothing is invented;
            /// sorting only permutes the filtered set.
            #[test]
            fn derive_is_a_permutation_of_the_matching_subset(
                catalog in prop::collection::vec(arb_product(), 0..40),
                query in arb_query(),
            ) {
                let mut derived: Vec<Product> = derive(&catalog, &query);
                let mut matching: Vec<Product> =
                    catalog.iter().filter(|p| query.matches(p)).cloned().collect();

                let by_id = |a: &Product, b: &Product| a.id.cmp(&b.id);
                derived.sort_by(by_id);
                matching.sort_by(by_id);
                prop_assert_eq!(derived, matching);
            }

            /// Property: ascending price order is monotone.
            #[test]
            fn price_asc_is_monotone(
                catalog in prop::collection::vec(arb_product(), 0..40),
            ) {
                let query = BrowseQuery { sort: SortKey::PriceAsc, ..BrowseQuery::default() };
                let listing = derive(&catalog, &query);
                for pair in listing.windows(2) {
                    prop_assert!(pair[0].price <= pair[1].price);
                }
            }

            /// Property: ascending title order is monotone, case aside.
            #[test]
            fn name_asc_is_monotone_ignoring_case(
                catalog in prop::collection::vec(arb_product(), 0..40),
            ) {
                let query = BrowseQuery { sort: SortKey::NameAsc, ..BrowseQuery::default() };
                let listing = derive(&catalog, &query);
                for pair in listing.windows(2) {
                    prop_assert!(pair[0].title.to_lowercase() <= pair[1].title.to_lowercase());
                }
            }

            /// Property: the same inputs derive the same listing every time.
            #[test]
            fn derivation_is_repeatable(
                catalog in prop::collection::vec(arb_product(), 0..40),
                query in arb_query(),
            ) {
                prop_assert_eq!(derive(&catalog, &query), derive(&catalog, &query));
            }

            /// Property: default sort is exactly the filter, in catalog order.
            #[test]
            fn default_sort_preserves_catalog_order(
                catalog in prop::collection::vec(arb_product(), 0..40),
                query in arb_query(),
            ) {
                let query = BrowseQuery { sort: SortKey::Default, ..query };
                let listing = derive(&catalog, &query);
                let expected: Vec<Product> =
                    catalog.iter().filter(|p| query.matches(p)).cloned().collect();
                prop_assert_eq!(listing, expected);
            }
        }
    }
}
