//! Fleet report formatting
//!
//! Renders the boat list as fixed-width columns followed by a totals row.

use crate::models::{Boat, Money};
use crate::storage::FleetTotals;

/// Width of everything left of the money columns in a boat row
const LABEL_WIDTH: usize = 52;

fn money_columns(paid: Money, spent: Money) -> String {
    format!(
        " : Paid $ {:>10} : Spent $ {:>10}",
        paid.format_plain(),
        spent.format_plain()
    )
}

/// Format one boat as a report row (no trailing newline)
pub fn format_boat_row(boat: &Boat) -> String {
    let label = format!(
        "{:<8} {:<20} {:>4} {:<12} {:>3}'",
        boat.category().to_string(),
        boat.name(),
        boat.year(),
        boat.make_model(),
        boat.length(),
    );

    format!(
        "    {}{}",
        label,
        money_columns(boat.purchase_price(), boat.expenses())
    )
}

/// Format the full fleet report
pub fn format_fleet_report(boats: &[Boat], totals: FleetTotals) -> String {
    let mut output = String::from("\nFleet report:\n");

    for boat in boats {
        output.push_str(&format_boat_row(boat));
        output.push('\n');
    }

    output.push_str(&format!(
        "    {:<width$}{}\n",
        "Total",
        money_columns(totals.paid, totals.spent),
        width = LABEL_WIDTH,
    ));

    output
}
