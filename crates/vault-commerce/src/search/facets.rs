//! Selector option lists derived from the catalog.

use crate::catalog::Catalog;
use crate::config::FilterLabels;
use crate::search::ALL;
use serde::Serialize;

/// One entry of a selector control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    /// Value sent back when chosen; parses with [`Selector::parse`](crate::search::Selector::parse).
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

impl FacetOption {
    fn value(value: String) -> Self {
        Self {
            label: value.clone(),
            value,
        }
    }

    fn all(label: &str) -> Self {
        Self {
            value: ALL.to_string(),
            label: label.to_string(),
        }
    }
}

/// Options for the genre, year and condition selectors.
///
/// Each list starts with the "all" bypass. Genres and conditions keep
/// their first-appearance order in the catalog; years are ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub genres: Vec<FacetOption>,
    pub years: Vec<FacetOption>,
    pub conditions: Vec<FacetOption>,
}

impl FacetOptions {
    pub fn from_catalog(catalog: &Catalog, labels: &FilterLabels) -> Self {
        let mut genres: Vec<String> = Vec::new();
        let mut conditions: Vec<String> = Vec::new();
        let mut years: Vec<u16> = Vec::new();

        for record in catalog {
            if !genres.contains(&record.genre) {
                genres.push(record.genre.clone());
            }
            let condition = record.condition.as_str();
            if !conditions.iter().any(|c| c == condition) {
                conditions.push(condition.to_string());
            }
            years.push(record.year);
        }
        years.sort_unstable();
        years.dedup();

        Self {
            genres: with_all(&labels.all_genres, genres),
            years: with_all(&labels.all_years, years.into_iter().map(|y| y.to_string())),
            conditions: with_all(&labels.any_condition, conditions),
        }
    }
}

fn with_all(label: &str, values: impl IntoIterator<Item = String>) -> Vec<FacetOption> {
    std::iter::once(FacetOption::all(label))
        .chain(values.into_iter().map(FacetOption::value))
        .collect()
}
