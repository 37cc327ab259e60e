//! The incoming change request describing the new-stage (CN) document.
//!
//! Structurally mirrors the snapshot tender, but lot/item/auction ids are
//! temporary placeholders and substructures the selected variant does not
//! require may be omitted entirely.

use serde::{Deserialize, Serialize};

use crate::auction::ElectronicAuctions;
use crate::criteria::{Conversion, Criterion};
use crate::party::ProcuringEntity;
use crate::period::Period;
use crate::tender::{Document, Item, Lot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequest {
    pub tender: RequestTender,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestTender {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tender_period: Period,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub procurement_method_modalities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procuring_entity: Option<ProcuringEntity>,
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

impl RequestTender {
    /// Auction details, empty slice when the block is absent.
    pub fn auction_details(&self) -> &[crate::auction::AuctionDetail] {
        self.electronic_auctions
            .as_ref()
            .map(|auctions| auctions.details.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_auctions(&self) -> bool {
        self.electronic_auctions
            .as_ref()
            .is_some_and(|auctions| !auctions.is_empty())
    }
}
