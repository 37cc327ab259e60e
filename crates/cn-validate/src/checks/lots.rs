//! Lot collection rules.

use std::collections::BTreeSet;

use cn_model::{LotId, RuleViolation};

use crate::context::ValidationInput;

pub fn non_empty(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    if input.request.lots.is_empty() {
        return Err(RuleViolation::EmptyLots);
    }
    Ok(())
}

pub fn ids_unique(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    let mut seen = BTreeSet::new();
    for lot in &input.request.lots {
        if !seen.insert(&lot.id) {
            return Err(RuleViolation::LotIdDuplicated(lot.id.clone()));
        }
    }
    Ok(())
}

/// The tender period must close before the earliest contract period opens:
/// every lot's contract period starts strictly after the request's tender
/// period ends.
pub fn contract_periods_follow_tender_period(
    input: &ValidationInput<'_>,
) -> Result<(), RuleViolation> {
    for lot in &input.request.lots {
        if !lot.contract_period.starts_after(&input.request.tender_period) {
            return Err(RuleViolation::InvalidLotContractPeriod(lot.id.clone()));
        }
    }
    Ok(())
}

/// The set of lot ids declared by the request, for reference checks.
pub fn declared_ids<'a>(input: &ValidationInput<'a>) -> BTreeSet<&'a LotId> {
    input.request.lots.iter().map(|lot| &lot.id).collect()
}
