//! Tender document rules.

use std::collections::BTreeSet;

use cn_model::RuleViolation;

use crate::checks::lots;
use crate::context::ValidationInput;

/// Request document ids must be unique and, where the snapshot already
/// carries documents, must include every snapshot document id (a contract
/// notice may add documents but never drop prior ones).
pub fn ids_unique_and_cover_snapshot(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    let mut request_ids = BTreeSet::new();
    for document in &input.request.documents {
        if !request_ids.insert(&document.id) {
            return Err(RuleViolation::InvalidDocsId);
        }
    }
    for document in &input.snapshot.tender.documents {
        if !request_ids.contains(&document.id) {
            return Err(RuleViolation::InvalidDocsId);
        }
    }
    Ok(())
}

pub fn related_lots_declared(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    let lot_ids = lots::declared_ids(input);
    for document in &input.request.documents {
        for related_lot in &document.related_lots {
            if !lot_ids.contains(related_lot) {
                return Err(RuleViolation::InvalidDocsRelatedLots {
                    document: document.id.clone(),
                    related_lot: related_lot.clone(),
                });
            }
        }
    }
    Ok(())
}
