// Unit tests for the query and assembly layer

use chrono::Utc;
use realty_api::core::{
    distinct_owner_ids, main_image, to_property_dto, OwnerLookup, PageRequest, PropertyFilter,
    PropertySearch,
};
use realty_api::models::{Owner, PaginationDto, Property, PropertyImage};
use realty_api::services::{InMemoryStore, ListingService};
use std::sync::Arc;

const NAMES: [&str; 4] = ["Villa", "Penthouse", "Casa de Campo", "Loft"];
const CITIES: [&str; 3] = ["Bogota", "Miami", "Cartagena"];

fn create_owner(n: u32) -> Owner {
    Owner {
        id: format!("{:024x}", 5000 + n),
        name: format!("Owner {}", n),
        address: "Calle 100".to_string(),
        photo: String::new(),
        birthday: Utc::now(),
    }
}

/// Deterministic synthetic dataset of `count` properties
fn synthetic_properties(count: u32) -> Vec<Property> {
    (0..count)
        .map(|i| Property {
            id: format!("{:024x}", i),
            name: format!("{} {}", NAMES[(i % 4) as usize], i),
            address: format!("{} Street, {}", i, CITIES[(i % 3) as usize]),
            price: 100_000.0 + (i as f64 * 37_500.0) % 2_000_000.0,
            code_internal: format!("S-{}", i),
            year: 1950 + (i % 70) as i32,
            owner_id: format!("{:024x}", 5000 + i % 7),
            images: vec![],
            trace: vec![],
        })
        .collect()
}

fn searches() -> Vec<PropertySearch> {
    let mut searches = vec![PropertySearch::default()];
    for name in [None, Some("villa"), Some("LOFT"), Some("casa de")] {
        for address in [None, Some("miami"), Some("BOGOTA")] {
            for (min, max) in [
                (None, None),
                (Some(500_000.0), None),
                (None, Some(900_000.0)),
                (Some(300_000.0), Some(1_200_000.0)),
            ] {
                searches.push(PropertySearch {
                    name: name.map(str::to_string),
                    address: address.map(str::to_string),
                    min_price: min,
                    max_price: max,
                });
            }
        }
    }
    searches
}

fn satisfies(search: &PropertySearch, name: &str, address: &str, price: f64) -> bool {
    search
        .name
        .as_ref()
        .map_or(true, |n| name.to_lowercase().contains(&n.to_lowercase()))
        && search
            .address
            .as_ref()
            .map_or(true, |a| address.to_lowercase().contains(&a.to_lowercase()))
        && search.min_price.map_or(true, |min| price >= min)
        && search.max_price.map_or(true, |max| price <= max)
}

#[test]
fn test_every_returned_item_satisfies_the_filter() {
    let properties = synthetic_properties(120);
    let owners: Vec<Owner> = (0..5).map(create_owner).collect();
    let service = ListingService::new(Arc::new(InMemoryStore::new(properties.clone(), owners)));

    for search in searches() {
        let expected = properties
            .iter()
            .filter(|p| satisfies(&search, &p.name, &p.address, p.price))
            .count() as u64;

        let mut page = 1;
        let mut seen = 0;
        loop {
            let result = tokio_test::block_on(
                service.list_properties(&search, PageRequest::new(page, 7)),
            )
            .unwrap();

            assert_eq!(result.pagination.total_items, expected, "{:?}", search);
            for item in &result.data {
                assert!(
                    satisfies(&search, &item.name, &item.address, item.price),
                    "{} does not satisfy {:?}",
                    item.name,
                    search
                );
            }

            seen += result.data.len() as u64;
            if !result.pagination.has_next {
                break;
            }
            page += 1;
        }

        assert_eq!(seen, expected, "{:?}", search);
    }
}

#[test]
fn test_pagination_metadata_invariants() {
    for total_items in [0_u64, 1, 9, 10, 11, 99, 100, 101, 1000] {
        for page_size in [1_u64, 2, 10, 33, 100] {
            for page in [1_u64, 2, 5, 50] {
                let pagination = PaginationDto::new(PageRequest::new(page, page_size), total_items);
                let total_pages = (total_items + page_size - 1) / page_size;

                assert_eq!(pagination.total_pages, total_pages);
                assert_eq!(pagination.has_next, page < total_pages);
                assert_eq!(pagination.has_previous, page > 1);
                assert_eq!(pagination.current_page, page);
                assert_eq!(pagination.page_size, page_size);
            }
        }
    }
}

#[test]
fn test_page_owner_ids_and_lookup_resolution() {
    let properties = synthetic_properties(14);
    let page = &properties[0..3];

    let ids = distinct_owner_ids(page);
    assert_eq!(ids.len(), 3);

    // The second property's owner is missing from the lookup
    let lookup = OwnerLookup::new(vec![create_owner(0), create_owner(2)]);
    let dtos: Vec<_> = page
        .iter()
        .cloned()
        .map(|p| to_property_dto(p, &lookup))
        .collect();

    assert_eq!(dtos[0].owner.name, "Owner 0");
    assert_eq!(dtos[1].owner.id, None);
    assert_eq!(dtos[2].owner.name, "Owner 2");
}

#[test]
fn test_main_image_skips_disabled_images() {
    let images = vec![
        PropertyImage {
            file: "draft.jpg".to_string(),
            enabled: false,
        },
        PropertyImage {
            file: "cover.jpg".to_string(),
            enabled: true,
        },
    ];
    assert_eq!(main_image(&images).as_deref(), Some("cover.jpg"));
}

#[test]
fn test_filter_from_search_ignores_absent_parameters() {
    let filter = PropertyFilter::from_search(&PropertySearch {
        name: None,
        address: Some("  ".to_string()),
        min_price: Some(0.0),
        max_price: None,
    });
    assert_eq!(filter.predicates().len(), 1);
}
