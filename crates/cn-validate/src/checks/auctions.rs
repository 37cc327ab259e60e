//! Electronic-auction rules.
//!
//! Behavior depends on both the variant and the resolved auction policy:
//! flows that forbid auctions reject any non-empty block; the competitive
//! flow requires the block (and modalities) when the policy says so, and
//! validates a voluntarily supplied block either way.

use std::collections::BTreeSet;

use cn_model::tender::Lot;
use cn_model::{AuctionDetail, RuleViolation};

use crate::checks::lots;
use crate::context::ValidationInput;

pub fn auction_block(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    if !input.variant.config().auctions_permitted {
        if input.request.has_auctions() {
            return Err(RuleViolation::InvalidAuctionIsNonEmpty);
        }
        return Ok(());
    }

    if input.auctions.required {
        if input.request.procurement_method_modalities.is_empty() {
            return Err(RuleViolation::InvalidPmm);
        }
        if !input.request.has_auctions() {
            return Err(RuleViolation::InvalidAuctionIsEmpty);
        }
    }

    if !input.request.has_auctions() {
        return Ok(());
    }
    let details = input.request.auction_details();

    ids_unique(details)?;
    related_lots_unique(details)?;
    // Full lot coverage is only demanded when the auction is mandatory;
    // a voluntary block may cover a subset.
    if input.auctions.required && details.len() != input.request.lots.len() {
        return Err(RuleViolation::NumberAuctionsNotMatchToLots);
    }
    related_lots_declared(input, details)?;
    minimum_differences(input, details)
}

fn ids_unique(details: &[AuctionDetail]) -> Result<(), RuleViolation> {
    let mut seen = BTreeSet::new();
    for detail in details {
        if !seen.insert(&detail.id) {
            return Err(RuleViolation::AuctionIdDuplicated(detail.id.clone()));
        }
    }
    Ok(())
}

fn related_lots_unique(details: &[AuctionDetail]) -> Result<(), RuleViolation> {
    let mut seen = BTreeSet::new();
    for detail in details {
        if !seen.insert(&detail.related_lot) {
            return Err(RuleViolation::AuctionsContainDuplicateRelatedLots(
                detail.related_lot.clone(),
            ));
        }
    }
    Ok(())
}

fn related_lots_declared(
    input: &ValidationInput<'_>,
    details: &[AuctionDetail],
) -> Result<(), RuleViolation> {
    let lot_ids = lots::declared_ids(input);
    for detail in details {
        if !lot_ids.contains(&detail.related_lot) {
            return Err(RuleViolation::LotIdNotMatchToRelatedLotInAuctions {
                auction: detail.id.clone(),
                related_lot: detail.related_lot.clone(),
            });
        }
    }
    Ok(())
}

/// Each modality's eligible minimum difference must stay within the policy
/// ratio of the related lot's value and use that lot's currency.
fn minimum_differences(
    input: &ValidationInput<'_>,
    details: &[AuctionDetail],
) -> Result<(), RuleViolation> {
    for detail in details {
        let Some(lot) = find_lot(input, detail) else {
            // Unreachable after related_lots_declared, but stay total.
            continue;
        };
        let limit = lot.value.amount * input.auctions.minimum_ratio;
        for modality in &detail.electronic_auction_modalities {
            let difference = &modality.eligible_minimum_difference;
            if difference.amount > limit {
                return Err(RuleViolation::InvalidAuctionMinimum(detail.id.clone()));
            }
            if difference.currency != lot.value.currency {
                return Err(RuleViolation::InvalidAuctionCurrency(detail.id.clone()));
            }
        }
    }
    Ok(())
}

fn find_lot<'a>(input: &ValidationInput<'a>, detail: &AuctionDetail) -> Option<&'a Lot> {
    input
        .request
        .lots
        .iter()
        .find(|lot| lot.id == detail.related_lot)
}
