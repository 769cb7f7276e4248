use std::collections::{HashMap, HashSet};

use crate::models::{
    Owner, OwnerDetailDto, OwnerSummaryDto, Property, PropertyDetailDto, PropertyDto,
    PropertyImage, PropertyListDto,
};

/// Owners resolved for one page of properties, keyed by owner id
#[derive(Debug, Clone, Default)]
pub struct OwnerLookup {
    owners: HashMap<String, Owner>,
}

impl OwnerLookup {
    pub fn new(owners: Vec<Owner>) -> Self {
        Self {
            owners: owners.into_iter().map(|o| (o.id.clone(), o)).collect(),
        }
    }

    pub fn get(&self, owner_id: &str) -> Option<&Owner> {
        self.owners.get(owner_id)
    }
}

/// Distinct owner references of a page, in first-seen order
pub fn distinct_owner_ids(properties: &[Property]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut ids = Vec::new();
    for property in properties {
        if seen.insert(property.owner_id.as_str()) {
            ids.push(property.owner_id.clone());
        }
    }
    ids
}

/// File of the first enabled image, if any
pub fn main_image(images: &[PropertyImage]) -> Option<String> {
    images.iter().find(|img| img.enabled).map(|img| img.file.clone())
}

impl From<&Owner> for OwnerSummaryDto {
    fn from(owner: &Owner) -> Self {
        Self {
            id: Some(owner.id.clone()),
            name: owner.name.clone(),
            address: owner.address.clone(),
        }
    }
}

impl From<Owner> for OwnerDetailDto {
    fn from(owner: Owner) -> Self {
        Self {
            id: Some(owner.id),
            name: owner.name,
            address: owner.address,
            photo: owner.photo,
            birthday: owner.birthday,
        }
    }
}

/// Listing DTO with the owner summary taken from `owners`.
///
/// An owner reference missing from the lookup yields the empty summary.
pub fn to_property_dto(property: Property, owners: &OwnerLookup) -> PropertyDto {
    let owner = match owners.get(&property.owner_id) {
        Some(owner) => OwnerSummaryDto::from(owner),
        None => {
            tracing::debug!(
                "Owner {} of property {} not found, using empty owner",
                property.owner_id,
                property.id
            );
            OwnerSummaryDto::default()
        }
    };

    PropertyDto {
        id: property.id,
        name: property.name,
        address: property.address,
        price: property.price,
        code_internal: property.code_internal,
        year: property.year,
        owner,
        images: property.images.into_iter().map(Into::into).collect(),
        trace: property.trace.into_iter().map(Into::into).collect(),
    }
}

pub fn to_list_dto(property: Property) -> PropertyListDto {
    let main_image = main_image(&property.images);

    PropertyListDto {
        id: property.id,
        name: property.name,
        address: property.address,
        price: property.price,
        year: property.year,
        main_image,
    }
}

/// Detail DTO; a missing owner yields the empty owner detail
pub fn to_detail_dto(property: Property, owner: Option<Owner>) -> PropertyDetailDto {
    let owner = owner.map(OwnerDetailDto::from).unwrap_or_else(|| {
        tracing::debug!(
            "Owner {} of property {} not found, using empty owner",
            property.owner_id,
            property.id
        );
        OwnerDetailDto::default()
    });

    PropertyDetailDto {
        id: property.id,
        name: property.name,
        address: property.address,
        price: property.price,
        code_internal: property.code_internal,
        year: property.year,
        owner,
        images: property.images.into_iter().map(Into::into).collect(),
        trace: property.trace.into_iter().map(Into::into).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn owner(id: &str) -> Owner {
        Owner {
            id: id.to_string(),
            name: format!("Owner {}", id),
            address: "Somewhere".to_string(),
            photo: format!("{}.png", id),
            birthday: Utc.with_ymd_and_hms(1980, 5, 17, 0, 0, 0).unwrap(),
        }
    }

    fn property(id: &str, owner_id: &str, images: Vec<PropertyImage>) -> Property {
        Property {
            id: id.to_string(),
            name: format!("Property {}", id),
            address: "Street".to_string(),
            price: 1000.0,
            code_internal: format!("C-{}", id),
            year: 1999,
            owner_id: owner_id.to_string(),
            images,
            trace: vec![],
        }
    }

    fn image(file: &str, enabled: bool) -> PropertyImage {
        PropertyImage {
            file: file.to_string(),
            enabled,
        }
    }

    #[test]
    fn test_main_image_is_first_enabled() {
        let images = vec![image("a.jpg", false), image("b.jpg", true), image("c.jpg", true)];
        assert_eq!(main_image(&images), Some("b.jpg".to_string()));
        assert_eq!(main_image(&[image("a.jpg", false)]), None);
        assert_eq!(main_image(&[]), None);
    }

    #[test]
    fn test_distinct_owner_ids_keeps_first_seen_order() {
        let page = vec![
            property("1", "o2", vec![]),
            property("2", "o1", vec![]),
            property("3", "o2", vec![]),
        ];
        assert_eq!(distinct_owner_ids(&page), vec!["o2".to_string(), "o1".to_string()]);
    }

    #[test]
    fn test_property_dto_uses_owner_summary() {
        let lookup = OwnerLookup::new(vec![owner("o1")]);
        let dto = to_property_dto(property("1", "o1", vec![]), &lookup);

        assert_eq!(dto.owner.id.as_deref(), Some("o1"));
        assert_eq!(dto.owner.name, "Owner o1");
        assert_eq!(dto.code_internal, "C-1");
    }

    #[test]
    fn test_missing_owner_yields_empty_summary() {
        let lookup = OwnerLookup::new(vec![owner("o1")]);
        let dto = to_property_dto(property("1", "dangling", vec![]), &lookup);

        assert_eq!(dto.owner, OwnerSummaryDto::default());
    }

    #[test]
    fn test_detail_dto_with_and_without_owner() {
        let dto = to_detail_dto(property("1", "o1", vec![]), Some(owner("o1")));
        assert_eq!(dto.owner.photo, "o1.png");

        let dto = to_detail_dto(property("1", "o1", vec![]), None);
        assert_eq!(dto.owner, OwnerDetailDto::default());
    }

    #[test]
    fn test_list_dto_projection() {
        let dto = to_list_dto(property("9", "o1", vec![image("x.jpg", true)]));
        assert_eq!(dto.id, "9");
        assert_eq!(dto.main_image.as_deref(), Some("x.jpg"));
    }
}
