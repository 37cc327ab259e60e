//! The fail-fast rule fold.

use tracing::{debug, instrument};

use cn_model::RuleViolation;

use crate::context::ValidationInput;

/// Run the variant's ordered rule table against the input.
///
/// Rules are evaluated strictly in declaration order and the first failing
/// rule determines the returned violation; later rules are never evaluated.
///
/// # Errors
///
/// The first [`RuleViolation`] encountered, if any.
#[instrument(
    skip_all,
    fields(cpid = %input.ctx.cpid, variant = input.variant.as_str())
)]
pub fn validate(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    let rules = input.variant.config().rules;
    for rule in rules {
        if let Err(violation) = rule(input) {
            debug!(code = violation.code(), "rule violated");
            return Err(violation);
        }
    }
    debug!(rules = rules.len(), "all rules passed");
    Ok(())
}
