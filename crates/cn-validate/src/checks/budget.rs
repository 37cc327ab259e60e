//! Budget-consistency rules.
//!
//! These apply only when the prior document declares no items: an items-less
//! planning notice pins the money side, and the incoming request must agree
//! with it. When the snapshot already carries items, every rule here is a
//! no-op.

use rust_decimal::Decimal;

use cn_model::snapshot::BudgetBreakdown;
use cn_model::{Period, RuleViolation};

use crate::context::ValidationInput;

/// Sum of request lot values must equal the snapshot budget amount, in the
/// budget currency.
pub fn tender_amount_matches(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    if input.snapshot.has_items() {
        return Ok(());
    }
    let budget = &input.snapshot.budget.amount;
    let total: Decimal = input
        .request
        .lots
        .iter()
        .map(|lot| lot.value.amount)
        .sum();
    if total != budget.amount {
        return Err(RuleViolation::InvalidTenderAmount);
    }
    Ok(())
}

pub fn lot_currencies_match_budget(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    if input.snapshot.has_items() {
        return Ok(());
    }
    let budget_currency = &input.snapshot.budget.amount.currency;
    for lot in &input.request.lots {
        if &lot.value.currency != budget_currency {
            return Err(RuleViolation::InvalidLotCurrency(lot.id.clone()));
        }
    }
    Ok(())
}

/// A lot's contract period must be internally ordered and sit in a gap of
/// the budget-breakdown timeline: strictly after some breakdown period's end
/// and, when a later breakdown exists, strictly before that next period's
/// start. The last gap is open-ended.
pub fn contract_periods_fit_breakdowns(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    if input.snapshot.has_items() {
        return Ok(());
    }
    let mut breakdowns: Vec<&BudgetBreakdown> =
        input.snapshot.budget.breakdowns.iter().collect();
    breakdowns.sort_by_key(|breakdown| breakdown.period.start_date);

    for lot in &input.request.lots {
        if !lot.contract_period.is_ordered()
            || !fits_gap(&lot.contract_period, &breakdowns)
        {
            return Err(RuleViolation::InvalidLotContractPeriod(lot.id.clone()));
        }
    }
    Ok(())
}

fn fits_gap(period: &Period, breakdowns: &[&BudgetBreakdown]) -> bool {
    if breakdowns.is_empty() {
        return true;
    }
    breakdowns.iter().enumerate().any(|(index, breakdown)| {
        period.starts_after(&breakdown.period)
            && breakdowns
                .get(index + 1)
                .is_none_or(|next| period.ends_before(&next.period))
    })
}

pub fn item_quantities_positive(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    if input.snapshot.has_items() {
        return Ok(());
    }
    for item in &input.request.items {
        if item.quantity <= Decimal::ZERO {
            return Err(RuleViolation::InvalidItemsQuantity(item.id.clone()));
        }
    }
    Ok(())
}
