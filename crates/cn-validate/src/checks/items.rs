//! Item collection rules.

use std::collections::BTreeSet;

use cn_model::RuleViolation;

use crate::checks::lots;
use crate::context::ValidationInput;
use crate::variant::Variant;

pub fn ids_unique(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    let mut seen = BTreeSet::new();
    for item in &input.request.items {
        if !seen.insert(&item.id) {
            return Err(RuleViolation::ItemIdDuplicated(item.id.clone()));
        }
    }
    Ok(())
}

/// Every `relatedLot` must name a declared lot. The competitive flow reports
/// this under a different code than the limited/negotiation flows.
pub fn related_lots_declared(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    let lot_ids = lots::declared_ids(input);
    for item in &input.request.items {
        if !lot_ids.contains(&item.related_lot) {
            return Err(match input.variant {
                Variant::OpenCn => RuleViolation::LotIdNotMatchToRelatedLotInItems {
                    item: item.id.clone(),
                    related_lot: item.related_lot.clone(),
                },
                Variant::LimitedCn | Variant::NegotiationCn => {
                    RuleViolation::InvalidItemsRelatedLots {
                        item: item.id.clone(),
                        related_lot: item.related_lot.clone(),
                    }
                }
            });
        }
    }
    Ok(())
}
