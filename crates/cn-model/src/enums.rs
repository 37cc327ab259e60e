//! Controlled vocabularies used across the tender document shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TenderStatus {
    Planning,
    Active,
    Complete,
    Cancelled,
    Unsuccessful,
}

impl fmt::Display for TenderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TenderStatus::Planning => "planning",
            TenderStatus::Active => "active",
            TenderStatus::Complete => "complete",
            TenderStatus::Cancelled => "cancelled",
            TenderStatus::Unsuccessful => "unsuccessful",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TenderStatusDetails {
    Planning,
    Empty,
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LotStatus {
    Planning,
    Active,
    Complete,
    Cancelled,
    Unsuccessful,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LotStatusDetails {
    Empty,
    Awarded,
}

/// Procurement method of the incoming stage. Drives variant resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProcurementMethod {
    Open,
    Selective,
    Limited,
    Direct,
    Negotiated,
}

impl fmt::Display for ProcurementMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProcurementMethod::Open => "open",
            ProcurementMethod::Selective => "selective",
            ProcurementMethod::Limited => "limited",
            ProcurementMethod::Direct => "direct",
            ProcurementMethod::Negotiated => "negotiated",
        };
        f.write_str(label)
    }
}

/// Which id space a criterion's `relatedItem` points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CriterionRelatesTo {
    Lot,
    Item,
    Tenderer,
    Tender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BusinessFunctionType {
    Chairman,
    ProcurementOfficer,
    ContactPoint,
    TechnicalEvaluator,
    TechnicalOpener,
    PriceOpener,
    PriceEvaluator,
    Authority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    TenderNotice,
    BiddingDocuments,
    TechnicalSpecifications,
    EvaluationCriteria,
    EligibilityCriteria,
    ClarificationDocuments,
    ContractDraft,
    /// The only type allowed on documents attached to a person's business
    /// function.
    RegulatoryDocument,
}
