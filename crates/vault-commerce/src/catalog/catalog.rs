//! The fixed record catalog.

use crate::catalog::{Condition, Record};
use crate::error::CommerceError;
use crate::ids::RecordId;
use crate::money::{Currency, Money};
use serde::Serialize;
use std::collections::HashSet;

/// An ordered, immutable list of records with unique identifiers.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate record ids and mixed currencies.
    pub fn new(records: Vec<Record>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(records.len());
        if let Some(dup) = records.iter().find(|r| !seen.insert(r.id)) {
            return Err(CommerceError::DuplicateRecord(dup.id));
        }
        if let Some(first) = records.first() {
            let expected = first.price.currency;
            if let Some(odd) = records.iter().find(|r| r.price.currency != expected) {
                return Err(CommerceError::CurrencyMismatch {
                    expected,
                    found: odd.price.currency,
                });
            }
        }
        Ok(Self { records })
    }

    /// The Vinyl Vault stock.
    pub fn vinyl_vault() -> Self {
        let records = vec![
            record(1, "Abbey Road", "The Beatles", 1969, "Rock", Condition::Mint, 2500, "\u{1f3b5}"),
            record(2, "Dark Side of the Moon", "Pink Floyd", 1973, "Progressive Rock", Condition::NearMint, 3200, "\u{1f319}"),
            record(3, "Thriller", "Michael Jackson", 1982, "Pop", Condition::VeryGood, 1800, "\u{1f47b}"),
            record(4, "Kind of Blue", "Miles Davis", 1959, "Jazz", Condition::Mint, 4500, "\u{1f3ba}"),
            record(5, "Rumours", "Fleetwood Mac", 1977, "Rock", Condition::NearMint, 2100, "\u{1f4bf}"),
            record(6, "The Velvet Underground & Nico", "The Velvet Underground", 1967, "Art Rock", Condition::Good, 3800, "\u{1f34c}"),
            record(7, "What's Going On", "Marvin Gaye", 1971, "Soul", Condition::VeryGood, 2800, "\u{1f3a4}"),
            record(8, "Led Zeppelin IV", "Led Zeppelin", 1971, "Hard Rock", Condition::NearMint, 3500, "\u{1f3b8}"),
        ];
        Self { records }
    }

    /// Look up a record by id.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Currency the catalog is priced in; rubles when empty.
    pub fn currency(&self) -> Currency {
        self.records
            .first()
            .map(|r| r.price.currency)
            .unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: u32,
    title: &str,
    artist: &str,
    year: u16,
    genre: &str,
    condition: Condition,
    price: i64,
    glyph: &str,
) -> Record {
    Record {
        id: RecordId::new(id),
        title: title.to_string(),
        artist: artist.to_string(),
        year,
        genre: genre.to_string(),
        condition,
        price: Money::new(price, Currency::RUB),
        glyph: glyph.to_string(),
    }
}
