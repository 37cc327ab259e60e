//! Criterion reference rules.

use std::collections::BTreeSet;

use cn_model::{CriterionRelatesTo, RuleViolation};

use crate::context::ValidationInput;

/// Every criterion `relatedItem` must resolve in the id space its
/// `relatesTo` discriminator names: declared lot ids for `lot`, declared
/// item ids for `item`. `tenderer`/`tender` criteria carry no reference.
pub fn related_items_declared(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    let lot_ids: BTreeSet<&str> = input
        .request
        .lots
        .iter()
        .map(|lot| lot.id.as_str())
        .collect();
    let item_ids: BTreeSet<&str> = input
        .request
        .items
        .iter()
        .map(|item| item.id.as_str())
        .collect();

    for criterion in &input.request.criteria {
        let Some(reference) = &criterion.related_item else {
            continue;
        };
        let resolved = match criterion.relates_to {
            Some(CriterionRelatesTo::Lot) => lot_ids.contains(reference.as_str()),
            Some(CriterionRelatesTo::Item) => item_ids.contains(reference.as_str()),
            _ => true,
        };
        if !resolved {
            return Err(RuleViolation::InvalidCriteriaRelatedItem {
                criterion: criterion.id.clone(),
                related_item: reference.clone(),
            });
        }
    }
    Ok(())
}
