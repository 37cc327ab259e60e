//! Award/selection criteria and coefficient conversions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::CriterionRelatesTo;

/// A selection/award criterion. When `relates_to` is `lot` or `item`,
/// `related_item` carries an id from the matching id space and is rewritten
/// during transformation; `tenderer`/`tender` criteria carry no reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relates_to: Option<CriterionRelatesTo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_item: Option<String>,
    pub requirement_groups: Vec<RequirementGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementGroup {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub requirements: Vec<Requirement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A conversion attaches coefficients to a requirement. Conversions reference
/// requirement ids, not lot/item ids, so the transformation passes them
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub id: String,
    pub relates_to: ConversionRelatesTo,
    pub related_item: String,
    pub rationale: String,
    pub coefficients: Vec<Coefficient>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConversionRelatesTo {
    Requirement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coefficient {
    pub id: String,
    pub value: Decimal,
    pub coefficient: Decimal,
}
