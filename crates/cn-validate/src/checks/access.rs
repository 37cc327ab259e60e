//! Caller credentials and snapshot state.

use cn_model::{RuleViolation, TenderStatus};

use crate::context::ValidationInput;

pub fn token_matches(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    if input.ctx.token != input.snapshot.token {
        return Err(RuleViolation::InvalidToken);
    }
    Ok(())
}

pub fn owner_matches(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    if input.ctx.owner != input.snapshot.owner {
        return Err(RuleViolation::InvalidOwner);
    }
    Ok(())
}

/// Checked against the snapshot alone; the request content is irrelevant
/// once the prior tender has terminally failed.
pub fn tender_not_unsuccessful(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    if input.snapshot.tender.status == TenderStatus::Unsuccessful {
        return Err(RuleViolation::TenderInUnsuccessfulStatus);
    }
    Ok(())
}
