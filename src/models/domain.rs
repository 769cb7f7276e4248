use bson::serde_helpers::{chrono_datetime_as_bson_datetime, hex_string_as_object_id};
use bson::Bson;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Property document as stored in the `properties` collection
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    #[serde(rename = "_id", with = "hex_string_as_object_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(deserialize_with = "deserialize_price", default)]
    pub price: f64,
    #[serde(rename = "codeInternal", default)]
    pub code_internal: String,
    #[serde(default)]
    pub year: i32,
    /// Empty when the document carries no owner reference
    #[serde(rename = "owner_id", with = "hex_string_as_object_id", default)]
    pub owner_id: String,
    #[serde(default)]
    pub images: Vec<PropertyImage>,
    #[serde(default)]
    pub trace: Vec<PropertyTrace>,
}

/// Image attached to a property
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyImage {
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub enabled: bool,
}

/// Sale record in a property's transaction history
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyTrace {
    #[serde(
        rename = "dateSale",
        with = "chrono_datetime_as_bson_datetime",
        default = "unset_datetime"
    )]
    pub date_sale: DateTime<Utc>,
    #[serde(default)]
    pub name: String,
    #[serde(deserialize_with = "deserialize_price", default)]
    pub value: f64,
    #[serde(deserialize_with = "deserialize_price", default)]
    pub tax: f64,
}

/// Owner document as stored in the `owners` collection
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Owner {
    #[serde(rename = "_id", with = "hex_string_as_object_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub photo: String,
    #[serde(with = "chrono_datetime_as_bson_datetime", default = "unset_datetime")]
    pub birthday: DateTime<Utc>,
}

/// Placeholder for dates absent from a document: 0001-01-01T00:00:00Z
pub(crate) fn unset_datetime() -> DateTime<Utc> {
    DateTime::from_timestamp(-62_135_596_800, 0).unwrap_or_default()
}

/// Accept any BSON numeric representation for monetary amounts.
///
/// Ingestion may write doubles, integers or decimal128 values depending on
/// the driver that produced the document.
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Bson::deserialize(deserializer)? {
        Bson::Double(v) => Ok(v),
        Bson::Int32(v) => Ok(v as f64),
        Bson::Int64(v) => Ok(v as f64),
        Bson::Decimal128(v) => v
            .to_string()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid decimal128 amount: {}", v))),
        Bson::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid amount: {}", s))),
        Bson::Null => Ok(0.0),
        other => Err(D::Error::custom(format!(
            "expected a numeric amount, found {:?}",
            other.element_type()
        ))),
    }
}
