//! Cart ledger and entry types.

use crate::cart::{CartSummary, LineSummary};
use crate::catalog::Record;
use crate::error::CommerceError;
use crate::ids::RecordId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// A shopping cart: records and quantities, unique by record id.
///
/// Every entry has a quantity of at least one and is priced in the cart's
/// currency. Entries keep the order in which they were first added.
/// Nothing here is persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            entries: Vec::new(),
            currency,
        }
    }

    /// Add one copy of a record.
    ///
    /// Increments an existing entry or appends a new one, and returns the
    /// line's quantity. Fails only for a record priced in another currency.
    pub fn add(&mut self, record: &Record) -> Result<u32, CommerceError> {
        if record.price.currency != self.currency {
            tracing::warn!(record_id = %record.id, currency = %record.price.currency, "rejected foreign-currency record");
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency,
                found: record.price.currency,
            });
        }

        if let Some(entry) = self.entry_mut(record.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            tracing::debug!(record_id = %record.id, quantity = entry.quantity, "cart line incremented");
            return Ok(entry.quantity);
        }

        self.entries.push(CartEntry {
            record: record.clone(),
            quantity: 1,
        });
        tracing::debug!(record_id = %record.id, quantity = 1, "cart line added");
        Ok(1)
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| e.record.id != id);
        let removed = self.entries.len() < len_before;
        if removed {
            tracing::debug!(record_id = %id, "cart line removed");
        }
        removed
    }

    /// Set a line's quantity.
    ///
    /// Zero removes the line. Negative quantities, and quantities too large
    /// for a `u32`, are rejected without touching the cart. Returns whether a
    /// line with that id existed.
    pub fn set_quantity(&mut self, id: RecordId, quantity: i64) -> Result<bool, CommerceError> {
        if quantity == 0 {
            return Ok(self.remove(id));
        }
        let Ok(quantity) = u32::try_from(quantity) else {
            tracing::warn!(record_id = %id, quantity, "rejected quantity");
            return Err(CommerceError::InvalidQuantity(quantity));
        };

        match self.entry_mut(id) {
            Some(entry) => {
                entry.quantity = quantity;
                tracing::debug!(record_id = %id, quantity, "cart line quantity set");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The "+" control: one more of an existing line.
    pub fn increment(&mut self, id: RecordId) -> Result<bool, CommerceError> {
        let Some(current) = self.get(id).map(|e| e.quantity) else {
            return Ok(false);
        };
        self.set_quantity(id, i64::from(current.saturating_add(1)))
    }

    /// The "-" control: one fewer, removing the line when it reaches zero.
    pub fn decrement(&mut self, id: RecordId) -> Result<bool, CommerceError> {
        let Some(current) = self.get(id).map(|e| e.quantity) else {
            return Ok(false);
        };
        self.set_quantity(id, i64::from(current) - 1)
    }

    /// Sum of price × quantity over all lines.
    pub fn total_price(&self) -> Money {
        let amount = self
            .entries
            .iter()
            .map(|e| e.subtotal().amount)
            .fold(0_i64, i64::saturating_add);
        Money::new(amount, self.currency)
    }

    /// Sum of quantities over all lines.
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, id: RecordId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.record.id == id)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Line subtotals and totals for display.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self
                .entries
                .iter()
                .map(|e| LineSummary {
                    record_id: e.record.id,
                    unit_price: e.record.price,
                    quantity: e.quantity,
                    subtotal: e.subtotal(),
                })
                .collect(),
            total_count: self.total_count(),
            total_price: self.total_price(),
        }
    }

    fn entry_mut(&mut self, id: RecordId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.record.id == id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// One line of the cart.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CartEntry {
    /// The record, copied from the catalog.
    pub record: Record,
    quantity: u32,
}

impl CartEntry {
    /// Quantity, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.record.price.times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn record(id: u32) -> Record {
        Catalog::vinyl_vault()
            .get(RecordId::new(id))
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::RUB);
        assert!(cart.is_empty());
        assert_eq!(cart.total_count(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_add_same_record_increases_quantity() {
        let mut cart = Cart::default();
        assert_eq!(cart.add(&record(1)), Ok(1));
        assert_eq!(cart.add(&record(1)), Ok(2));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(RecordId::new(1)).map(|e| e.quantity()), Some(2));
    }

    #[test]
    fn test_add_has_no_ceiling() {
        let mut cart = Cart::default();
        for _ in 0..150 {
            cart.add(&record(1)).unwrap();
        }
        assert_eq!(cart.get(RecordId::new(1)).map(|e| e.quantity()), Some(150));
        assert_eq!(cart.total_price().amount, 150 * 2500);
    }

    #[test]
    fn test_add_saturates_at_u32_max() {
        let mut cart = Cart::default();
        cart.add(&record(3)).unwrap();
        cart.set_quantity(RecordId::new(3), i64::from(u32::MAX)).unwrap();

        assert_eq!(cart.add(&record(3)), Ok(u32::MAX));
        assert_eq!(cart.increment(RecordId::new(3)), Ok(true));
        assert_eq!(cart.total_count(), u64::from(u32::MAX));
    }

    #[test]
    fn test_add_foreign_currency_rejected() {
        let mut cart = Cart::default();
        cart.add(&record(1)).unwrap();
        let mut dollars = record(2);
        dollars.price = Money::new(3200, Currency::USD);
        let before = cart.clone();

        assert_eq!(
            cart.add(&dollars),
            Err(CommerceError::CurrencyMismatch {
                expected: Currency::RUB,
                found: Currency::USD,
            })
        );
        assert_eq!(cart, before);
        assert_eq!(cart.total_price(), Money::new(2500, Currency::RUB));
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut cart = Cart::default();
        for id in [5, 2, 5] {
            cart.add(&record(id)).unwrap();
        }

        let ids: Vec<_> = cart.entries().iter().map(|e| e.record.id.get()).collect();
        assert_eq!(ids, [5, 2]);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::default();
        cart.add(&record(1)).unwrap();
        cart.add(&record(1)).unwrap();

        assert_eq!(cart.set_quantity(RecordId::new(1), 5), Ok(true));
        assert_eq!(cart.total_count(), 5);
        assert_eq!(cart.total_price(), Money::new(12500, Currency::RUB));

        assert_eq!(cart.set_quantity(RecordId::new(1), 150), Ok(true));
        assert_eq!(cart.total_count(), 150);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::default();
        cart.add(&record(3)).unwrap();

        assert_eq!(cart.set_quantity(RecordId::new(3), 0), Ok(true));
        assert!(cart.get(RecordId::new(3)).is_none());
        assert!(!cart.remove(RecordId::new(3)));
    }

    #[test]
    fn test_set_quantity_out_of_range_rejected() {
        let mut cart = Cart::default();
        cart.add(&record(3)).unwrap();
        let before = cart.clone();

        for quantity in [-1, i64::from(u32::MAX) + 1] {
            assert_eq!(
                cart.set_quantity(RecordId::new(3), quantity),
                Err(CommerceError::InvalidQuantity(quantity))
            );
            assert_eq!(cart, before);
        }
    }

    #[test]
    fn test_set_quantity_unknown_line() {
        let mut cart = Cart::default();
        assert_eq!(cart.set_quantity(RecordId::new(8), 2), Ok(false));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = Cart::default();
        cart.add(&record(7)).unwrap();

        assert_eq!(cart.increment(RecordId::new(7)), Ok(true));
        assert_eq!(cart.get(RecordId::new(7)).map(|e| e.quantity()), Some(2));

        assert_eq!(cart.decrement(RecordId::new(7)), Ok(true));
        assert_eq!(cart.decrement(RecordId::new(7)), Ok(true));
        assert!(cart.is_empty());

        assert_eq!(cart.decrement(RecordId::new(7)), Ok(false));
        assert_eq!(cart.increment(RecordId::new(7)), Ok(false));
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::default();
        cart.add(&record(1)).unwrap(); // 2500
        cart.add(&record(3)).unwrap(); // 1800
        cart.add(&record(3)).unwrap();

        assert_eq!(cart.total_count(), 3);
        assert_eq!(cart.total_price().amount, 2500 + 2 * 1800);
    }
}
