//! The closed taxonomy of business-rule violations.
//!
//! Each variant carries a stable code surfaced to callers. Violations are
//! terminal for the current invocation: they are deterministic functions of
//! the input, so there is nothing to retry.

use thiserror::Error;

use crate::ids::{AuctionId, DocumentId, ItemId, LotId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleViolation {
    #[error("request token does not match the stored snapshot")]
    InvalidToken,
    #[error("request owner does not match the stored snapshot")]
    InvalidOwner,
    #[error("prior tender is in unsuccessful status")]
    TenderInUnsuccessfulStatus,
    #[error("document ids are duplicated or do not cover the snapshot documents")]
    InvalidDocsId,
    #[error("document {document} references undeclared lot {related_lot}")]
    InvalidDocsRelatedLots {
        document: DocumentId,
        related_lot: LotId,
    },
    #[error("request declares no lots")]
    EmptyLots,
    #[error("lot id {0} is declared more than once")]
    LotIdDuplicated(LotId),
    #[error("item id {0} is declared more than once")]
    ItemIdDuplicated(ItemId),
    #[error("item {item} references undeclared lot {related_lot}")]
    InvalidItemsRelatedLots { item: ItemId, related_lot: LotId },
    #[error("criterion {criterion} references undeclared {related_item}")]
    InvalidCriteriaRelatedItem {
        criterion: String,
        related_item: String,
    },
    #[error("item {item} references undeclared lot {related_lot}")]
    LotIdNotMatchToRelatedLotInItems { item: ItemId, related_lot: LotId },
    #[error("item {0} has a non-positive quantity")]
    InvalidItemsQuantity(ItemId),
    #[error("lot {0} currency differs from the budget currency")]
    InvalidLotCurrency(LotId),
    #[error("lot {0} contract period does not fit the budget breakdown timeline")]
    InvalidLotContractPeriod(LotId),
    #[error("sum of lot values does not match the snapshot budget amount")]
    InvalidTenderAmount,
    #[error("auction is required but procurement method modalities are empty")]
    InvalidPmm,
    #[error("auction is required but electronic auctions are absent or empty")]
    InvalidAuctionIsEmpty,
    #[error("electronic auctions are not permitted for this variant")]
    InvalidAuctionIsNonEmpty,
    #[error("auction id {0} is declared more than once")]
    AuctionIdDuplicated(AuctionId),
    #[error("auctions reference lot {0} more than once")]
    AuctionsContainDuplicateRelatedLots(LotId),
    #[error("number of auction details does not match the number of lots")]
    NumberAuctionsNotMatchToLots,
    #[error("auction {auction} references undeclared lot {related_lot}")]
    LotIdNotMatchToRelatedLotInAuctions {
        auction: AuctionId,
        related_lot: LotId,
    },
    #[error("auction {0} eligible minimum difference exceeds the allowed limit")]
    InvalidAuctionMinimum(AuctionId),
    #[error("auction {0} eligible minimum difference currency differs from its lot")]
    InvalidAuctionCurrency(AuctionId),
    #[error("procuring entity does not satisfy the person/business-function rules")]
    InvalidProcuringEntity,
    #[error("a business function declares no documents")]
    EmptyDocs,
}

impl RuleViolation {
    /// Stable code reported to the dispatch layer.
    pub fn code(&self) -> &'static str {
        match self {
            RuleViolation::InvalidToken => "INVALID_TOKEN",
            RuleViolation::InvalidOwner => "INVALID_OWNER",
            RuleViolation::TenderInUnsuccessfulStatus => "TENDER_IN_UNSUCCESSFUL_STATUS",
            RuleViolation::InvalidDocsId => "INVALID_DOCS_ID",
            RuleViolation::InvalidDocsRelatedLots { .. } => "INVALID_DOCS_RELATED_LOTS",
            RuleViolation::EmptyLots => "EMPTY_LOTS",
            RuleViolation::LotIdDuplicated(_) => "LOT_ID_DUPLICATED",
            RuleViolation::ItemIdDuplicated(_) => "ITEM_ID_DUPLICATED",
            RuleViolation::InvalidItemsRelatedLots { .. } => "INVALID_ITEMS_RELATED_LOTS",
            RuleViolation::InvalidCriteriaRelatedItem { .. } => "INVALID_CRITERIA_RELATED_ITEM",
            RuleViolation::LotIdNotMatchToRelatedLotInItems { .. } => {
                "LOT_ID_NOT_MATCH_TO_RELATED_LOT_IN_ITEMS"
            }
            RuleViolation::InvalidItemsQuantity(_) => "INVALID_ITEMS_QUANTITY",
            RuleViolation::InvalidLotCurrency(_) => "INVALID_LOT_CURRENCY",
            RuleViolation::InvalidLotContractPeriod(_) => "INVALID_LOT_CONTRACT_PERIOD",
            RuleViolation::InvalidTenderAmount => "INVALID_TENDER_AMOUNT",
            RuleViolation::InvalidPmm => "INVALID_PMM",
            RuleViolation::InvalidAuctionIsEmpty => "INVALID_AUCTION_IS_EMPTY",
            RuleViolation::InvalidAuctionIsNonEmpty => "INVALID_AUCTION_IS_NON_EMPTY",
            RuleViolation::AuctionIdDuplicated(_) => "AUCTION_ID_DUPLICATED",
            RuleViolation::AuctionsContainDuplicateRelatedLots(_) => {
                "AUCTIONS_CONTAIN_DUPLICATE_RELATED_LOTS"
            }
            RuleViolation::NumberAuctionsNotMatchToLots => "NUMBER_AUCTIONS_NOT_MATCH_TO_LOTS",
            RuleViolation::LotIdNotMatchToRelatedLotInAuctions { .. } => {
                "LOT_ID_NOT_MATCH_TO_RELATED_LOT_IN_AUCTIONS"
            }
            RuleViolation::InvalidAuctionMinimum(_) => "INVALID_AUCTION_MINIMUM",
            RuleViolation::InvalidAuctionCurrency(_) => "INVALID_AUCTION_CURRENCY",
            RuleViolation::InvalidProcuringEntity => "INVALID_PROCURING_ENTITY",
            RuleViolation::EmptyDocs => "EMPTY_DOCS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(RuleViolation::InvalidToken.code(), "INVALID_TOKEN");
        assert_eq!(
            RuleViolation::TenderInUnsuccessfulStatus.code(),
            "TENDER_IN_UNSUCCESSFUL_STATUS"
        );
        assert_eq!(
            RuleViolation::NumberAuctionsNotMatchToLots.code(),
            "NUMBER_AUCTIONS_NOT_MATCH_TO_LOTS"
        );
    }

    #[test]
    fn messages_name_the_offending_entity() {
        let violation = RuleViolation::LotIdDuplicated(
            crate::ids::LotId::new("lot-1").expect("id"),
        );
        assert!(violation.to_string().contains("lot-1"));
    }
}
