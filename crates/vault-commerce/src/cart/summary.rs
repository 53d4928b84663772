//! Cart totals for display.

use crate::ids::RecordId;
use crate::money::Money;
use serde::Serialize;

/// Totals for the cart panel.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CartSummary {
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineSummary>,
    /// Sum of quantities; shown on the cart badge.
    pub total_count: u64,
    /// Sum of line subtotals.
    pub total_price: Money,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Badge text, or None when the badge should be hidden.
    pub fn badge(&self) -> Option<String> {
        (self.total_count > 0).then(|| self.total_count.to_string())
    }
}

/// Pricing for a single line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LineSummary {
    pub record_id: RecordId,
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price × quantity.
    pub subtotal: Money,
}
