//! The stored prior-stage (PN) document. Read-only within a pipeline run.

use serde::{Deserialize, Serialize};

use crate::auction::ElectronicAuctions;
use crate::criteria::{Conversion, Criterion};
use crate::enums::{TenderStatus, TenderStatusDetails};
use crate::money::Money;
use crate::party::ProcuringEntity;
use crate::period::Period;
use crate::tender::{Classification, Document, Item, Lot};

/// The snapshot a change request is validated against and derived from.
/// Fetched once per pipeline invocation, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderSnapshot {
    pub owner: String,
    pub token: String,
    pub budget: Budget,
    pub tender: SnapshotTender,
}

impl TenderSnapshot {
    /// Whether the prior document already declares items. Several budget
    /// consistency rules only apply when it does not.
    pub fn has_items(&self) -> bool {
        !self.tender.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub amount: Money,
    #[serde(rename = "budgetBreakdown", default, skip_serializing_if = "Vec::is_empty")]
    pub breakdowns: Vec<BudgetBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdown {
    pub id: String,
    pub period: Period,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotTender {
    pub id: String,
    pub status: TenderStatus,
    pub status_details: TenderStatusDetails,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procuring_entity: Option<ProcuringEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tender_period: Option<Period>,
    #[serde(default)]
    pub lots: Vec<Lot>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub criteria: Vec<Criterion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conversions: Vec<Conversion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electronic_auctions: Option<ElectronicAuctions>,
}
