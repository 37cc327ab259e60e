//! Human-readable outcome rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use cn_service::CheckOutcome;

pub fn print_check_outcome(outcome: &CheckOutcome) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Variant", "Auction required"]);
    table.add_row(vec![
        outcome.variant.as_str().to_string(),
        if outcome.auction_required { "yes" } else { "no" }.to_string(),
    ]);
    println!("{table}");
}
