//! Filter selectors and the combined filter state.

use crate::catalog::{Catalog, Condition, Record};
use crate::error::CommerceError;
use crate::search::FilterResults;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selector value that disables an equality predicate.
pub const ALL: &str = "all";

/// An equality predicate over one record field, or the "all" bypass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selector<T> {
    /// Match every record.
    All,
    /// Match records whose field equals this value.
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Selector<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }
}

impl<T: FromStr + fmt::Display> Selector<T> {
    /// Parse a control value, treating [`ALL`] as the bypass.
    ///
    /// The value must be spelled exactly as the field displays it, so
    /// "+1971" or "01971" is not a year.
    pub fn parse(raw: &str, field: &'static str) -> Result<Self, CommerceError> {
        if raw == ALL {
            return Ok(Selector::All);
        }
        match raw.parse::<T>() {
            Ok(value) if value.to_string() == raw => Ok(Selector::Only(value)),
            _ => Err(CommerceError::InvalidSelector {
                field,
                value: raw.to_string(),
            }),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str(ALL),
            Selector::Only(value) => value.fmt(f),
        }
    }
}

/// The four independent catalog filters, combined with AND.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterState {
    /// Free-text query matched against title or artist.
    pub query: String,
    pub genre: Selector<String>,
    pub year: Selector<u16>,
    pub condition: Selector<Condition>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Selector::Only(genre.into());
        self
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Selector::Only(year);
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Selector::Only(condition);
        self
    }

    /// Whether any predicate narrows the catalog.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || !self.genre.is_all()
            || !self.year.is_all()
            || !self.condition.is_all()
    }

    /// Restore every selector to "all" and clear the query.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a record satisfies every active predicate.
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_lowered(record, &self.query.to_lowercase())
    }

    fn matches_lowered(&self, record: &Record, needle: &str) -> bool {
        record.mentions(needle)
            && self.genre.matches(&record.genre)
            && self.year.matches(&record.year)
            && self.condition.matches(&record.condition)
    }

    /// Filter the catalog, preserving its order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> FilterResults<'a> {
        self.apply_to(catalog)
    }

    /// Filter any ordered run of records, e.g. a previous result set.
    pub fn apply_to<'a, I>(&self, records: I) -> FilterResults<'a>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let needle = self.query.to_lowercase();
        let items = records
            .into_iter()
            .filter(|record| self.matches_lowered(record, &needle))
            .collect();
        FilterResults::new(items)
    }
}
