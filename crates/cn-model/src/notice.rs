//! The produced contract notice fragment.
//!
//! Same shape as the change request, but every temporary identifier has been
//! replaced by a permanent one and lot statuses are fixed.

use serde::{Deserialize, Serialize};

use crate::auction::ElectronicAuctions;
use crate::criteria::{Conversion, Criterion};
use crate::enums::{LotStatus, LotStatusDetails, TenderStatus, TenderStatusDetails};
use crate::ids::{LotId, Ocid};
use crate::money::Money;
use crate::party::ProcuringEntity;
use crate::period::Period;
use crate::tender::{Classification, Document, Item, PlaceOfPerformance};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractNotice {
    pub ocid: Ocid,
    pub tender: NoticeTender,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeTender {
    pub id: String,
    pub status: TenderStatus,
    pub status_details: TenderStatusDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    pub tender_period: Period,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub procurement_method_modalities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procuring_entity: Option<ProcuringEntity>,
    pub lots: Vec<NoticeLot>,
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

/// A lot in the produced notice. Status fields are mandatory here; the
/// transformation forces `active`/`empty` regardless of the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeLot {
    pub id: LotId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub value: Money,
    pub contract_period: Period,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_performance: Option<PlaceOfPerformance>,
    pub status: LotStatus,
    pub status_details: LotStatusDetails,
}
