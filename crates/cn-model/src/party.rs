//! Procuring entity, persons and their business functions.

use serde::{Deserialize, Serialize};

use crate::enums::BusinessFunctionType;
use crate::period::StartOnlyPeriod;
use crate::tender::{Address, Document};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcuringEntity {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<OrganizationIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub persons: Vec<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationIdentifier {
    pub scheme: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub identifier: PersonIdentifier,
    pub name: String,
    pub title: String,
    pub business_functions: Vec<BusinessFunction>,
}

impl Person {
    /// Persons are distinguished by `{scheme, id}`, not by name.
    pub fn identity_key(&self) -> (&str, &str) {
        (&self.identifier.scheme, &self.identifier.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonIdentifier {
    pub scheme: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessFunction {
    pub id: String,
    #[serde(rename = "type")]
    pub function_type: BusinessFunctionType,
    pub job_title: String,
    pub period: StartOnlyPeriod,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<Document>,
}
