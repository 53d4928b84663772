//! Domain state for the Vinyl Vault storefront.
//!
//! Everything here is plain, synchronous data with no rendering concerns:
//!
//! - **Catalog**: the fixed list of records and their facet options
//! - **Search**: the four filter selectors and the visible subset they produce
//! - **Cart**: the ledger of records and quantities, with totals
//! - **Store**: the owned page-session state and the actions that drive it
//!
//! # Example
//!
//! ```rust
//! use vault_commerce::prelude::*;
//!
//! let mut store = Storefront::new(Catalog::vinyl_vault());
//! store.dispatch(Action::SetGenre("Jazz".into())).unwrap();
//! assert_eq!(store.visible().len(), 1);
//!
//! store.dispatch(Action::AddToCart(RecordId::new(4))).unwrap();
//! assert_eq!(store.cart().total_price().display(), "4500 \u{20bd}");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod config;
pub mod nav;
pub mod search;
pub mod store;

pub use error::CommerceError;
pub use ids::RecordId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::RecordId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Condition, Record};

    // Search
    pub use crate::search::{FacetOption, FacetOptions, FilterResults, FilterState, Selector};

    // Cart
    pub use crate::cart::{Cart, CartEntry, CartSummary, LineSummary};

    // State
    pub use crate::config::StoreConfig;
    pub use crate::nav::Page;
    pub use crate::store::{Action, Storefront};
}
