//! Electronic auction details.

use serde::{Deserialize, Serialize};

use crate::ids::{AuctionId, LotId};
use crate::money::Money;
use crate::period::StartOnlyPeriod;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicAuctions {
    pub details: Vec<AuctionDetail>,
}

impl ElectronicAuctions {
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}

/// One auction, bound to exactly one lot. When auctions are required the
/// details must cover the lot set exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDetail {
    pub id: AuctionId,
    pub related_lot: LotId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auction_period: Option<StartOnlyPeriod>,
    pub electronic_auction_modalities: Vec<AuctionModality>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionModality {
    pub eligible_minimum_difference: Money,
}
