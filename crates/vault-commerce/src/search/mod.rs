//! Search module.
//!
//! Contains the filter selectors, the filtered result set, and the
//! option lists the selector controls are populated from.

mod facets;
mod filter;
mod results;

pub use facets::{FacetOption, FacetOptions};
pub use filter::{FilterState, Selector, ALL};
pub use results::FilterResults;
