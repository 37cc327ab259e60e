//! Variant resolution: which rule table and required-field set apply.
//!
//! Variants are data-driven configurations, not subclasses. Each one owns an
//! ordered rule table; the pipeline folds the table and stops at the first
//! violation.

use cn_model::ProcurementMethod;

use crate::checks;
use crate::context::ValidationInput;
use cn_model::RuleViolation;

/// A rule is a pure predicate over the validation input plus its error.
pub type RuleFn = fn(&ValidationInput<'_>) -> Result<(), RuleViolation>;

/// The mutually exclusive PN-to-CN flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Competitive contract notice (open or selective procedure).
    OpenCn,
    /// Limited/direct contract notice.
    LimitedCn,
    /// Negotiation contract notice.
    NegotiationCn,
}

impl Variant {
    /// Select the variant from the procurement method of the incoming stage.
    pub fn resolve(method: ProcurementMethod) -> Self {
        match method {
            ProcurementMethod::Open | ProcurementMethod::Selective => Variant::OpenCn,
            ProcurementMethod::Limited | ProcurementMethod::Direct => Variant::LimitedCn,
            ProcurementMethod::Negotiated => Variant::NegotiationCn,
        }
    }

    pub fn config(self) -> &'static VariantConfig {
        match self {
            Variant::OpenCn => &OPEN_CN,
            Variant::LimitedCn => &LIMITED_CN,
            Variant::NegotiationCn => &NEGOTIATION_CN,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::OpenCn => "openCn",
            Variant::LimitedCn => "limitedCn",
            Variant::NegotiationCn => "negotiationCn",
        }
    }
}

/// Per-variant configuration: the ordered rule subset plus the knobs the
/// shared rules branch on.
pub struct VariantConfig {
    pub rules: &'static [RuleFn],
    /// Whether electronic auctions may appear at all in this flow.
    pub auctions_permitted: bool,
}

/// Competitive flow: full rule set including the auction block and the
/// procuring-entity sub-rules.
static OPEN_CN: VariantConfig = VariantConfig {
    rules: &[
        checks::access::token_matches,
        checks::access::owner_matches,
        checks::access::tender_not_unsuccessful,
        checks::documents::ids_unique_and_cover_snapshot,
        checks::budget::tender_amount_matches,
        checks::budget::lot_currencies_match_budget,
        checks::budget::contract_periods_fit_breakdowns,
        checks::budget::item_quantities_positive,
        checks::lots::non_empty,
        checks::lots::ids_unique,
        checks::lots::contract_periods_follow_tender_period,
        checks::items::ids_unique,
        checks::items::related_lots_declared,
        checks::criteria::related_items_declared,
        checks::auctions::auction_block,
        checks::documents::related_lots_declared,
        checks::procuring::entity_rules,
    ],
    auctions_permitted: true,
};

/// Limited/direct flow: no auctions, procuring entity carried over from the
/// snapshot rather than supplied.
static LIMITED_CN: VariantConfig = VariantConfig {
    rules: &[
        checks::access::token_matches,
        checks::access::owner_matches,
        checks::access::tender_not_unsuccessful,
        checks::documents::ids_unique_and_cover_snapshot,
        checks::budget::tender_amount_matches,
        checks::budget::lot_currencies_match_budget,
        checks::budget::contract_periods_fit_breakdowns,
        checks::budget::item_quantities_positive,
        checks::lots::non_empty,
        checks::lots::ids_unique,
        checks::lots::contract_periods_follow_tender_period,
        checks::items::ids_unique,
        checks::items::related_lots_declared,
        checks::criteria::related_items_declared,
        checks::auctions::auction_block,
        checks::documents::related_lots_declared,
    ],
    auctions_permitted: false,
};

/// Negotiation flow: no auctions, but the procuring-entity sub-rules apply
/// when the request supplies one.
static NEGOTIATION_CN: VariantConfig = VariantConfig {
    rules: &[
        checks::access::token_matches,
        checks::access::owner_matches,
        checks::access::tender_not_unsuccessful,
        checks::documents::ids_unique_and_cover_snapshot,
        checks::budget::tender_amount_matches,
        checks::budget::lot_currencies_match_budget,
        checks::budget::contract_periods_fit_breakdowns,
        checks::budget::item_quantities_positive,
        checks::lots::non_empty,
        checks::lots::ids_unique,
        checks::lots::contract_periods_follow_tender_period,
        checks::items::ids_unique,
        checks::items::related_lots_declared,
        checks::criteria::related_items_declared,
        checks::auctions::auction_block,
        checks::documents::related_lots_declared,
        checks::procuring::entity_rules,
    ],
    auctions_permitted: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_class_selects_variant() {
        assert_eq!(Variant::resolve(ProcurementMethod::Open), Variant::OpenCn);
        assert_eq!(
            Variant::resolve(ProcurementMethod::Selective),
            Variant::OpenCn
        );
        assert_eq!(
            Variant::resolve(ProcurementMethod::Limited),
            Variant::LimitedCn
        );
        assert_eq!(
            Variant::resolve(ProcurementMethod::Direct),
            Variant::LimitedCn
        );
        assert_eq!(
            Variant::resolve(ProcurementMethod::Negotiated),
            Variant::NegotiationCn
        );
    }

    #[test]
    fn only_open_permits_auctions() {
        assert!(Variant::OpenCn.config().auctions_permitted);
        assert!(!Variant::LimitedCn.config().auctions_permitted);
        assert!(!Variant::NegotiationCn.config().auctions_permitted);
    }
}
