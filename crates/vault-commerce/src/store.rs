//! Page-session state and the actions that update it.
//!
//! [`Storefront`] owns everything the UI reads: the catalog, the filter
//! selectors, the cart, and the current page. Controls turn user input into
//! an [`Action`]; nothing else mutates the state.

use crate::cart::Cart;
use crate::catalog::{Catalog, Record};
use crate::error::CommerceError;
use crate::ids::RecordId;
use crate::nav::Page;
use crate::search::{FilterResults, FilterState, Selector};
use serde::{Deserialize, Serialize};

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// New text in the search box.
    SetQuery(String),
    /// Genre select value (a genre or "all").
    SetGenre(String),
    /// Year select value (a year or "all").
    SetYear(String),
    /// Condition select value (a condition label or "all").
    SetCondition(String),
    ResetFilters,
    AddToCart(RecordId),
    RemoveFromCart(RecordId),
    SetQuantity(RecordId, i64),
    Increment(RecordId),
    Decrement(RecordId),
    Navigate(Page),
    /// Terminal no-op: nothing is submitted and the cart is kept.
    Checkout,
}

/// State for one storefront session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storefront {
    catalog: Catalog,
    filters: FilterState,
    cart: Cart,
    page: Page,
}

impl Storefront {
    /// Start a session: no filters, empty cart, catalog page.
    pub fn new(catalog: Catalog) -> Self {
        let cart = Cart::new(catalog.currency());
        Self {
            catalog,
            filters: FilterState::default(),
            cart,
            page: Page::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Records passing the current filters.
    pub fn visible(&self) -> FilterResults<'_> {
        self.filters.apply(&self.catalog)
    }

    /// Apply an action in place.
    ///
    /// On error nothing has changed.
    pub fn dispatch(&mut self, action: Action) -> Result<(), CommerceError> {
        match action {
            Action::SetQuery(query) => {
                self.filters.query = query;
                self.log_filters();
            }
            Action::SetGenre(raw) => {
                self.filters.genre = Selector::parse(&raw, "genre").inspect_err(warn_rejected)?;
                self.log_filters();
            }
            Action::SetYear(raw) => {
                self.filters.year = Selector::parse(&raw, "year").inspect_err(warn_rejected)?;
                self.log_filters();
            }
            Action::SetCondition(raw) => {
                self.filters.condition =
                    Selector::parse(&raw, "condition").inspect_err(warn_rejected)?;
                self.log_filters();
            }
            Action::ResetFilters => {
                self.filters.reset();
                self.log_filters();
            }
            Action::AddToCart(id) => {
                let record = find_record(&self.catalog, id)?;
                self.cart.add(record)?;
            }
            Action::RemoveFromCart(id) => {
                self.cart.remove(id);
            }
            Action::SetQuantity(id, quantity) => {
                self.cart.set_quantity(id, quantity)?;
            }
            Action::Increment(id) => {
                self.cart.increment(id)?;
            }
            Action::Decrement(id) => {
                self.cart.decrement(id)?;
            }
            Action::Navigate(page) => {
                tracing::debug!(?page, "navigate");
                self.page = page;
            }
            Action::Checkout => {
                tracing::info!(
                    lines = self.cart.len(),
                    count = self.cart.total_count(),
                    total = %self.cart.total_price(),
                    "checkout requested; no order submitted"
                );
            }
        }
        Ok(())
    }

    /// Owned form of [`dispatch`](Self::dispatch): state in, state out.
    ///
    /// A rejected action is logged and the state comes back unchanged.
    pub fn reduce(mut self, action: Action) -> Self {
        if let Err(err) = self.dispatch(action) {
            tracing::warn!(%err, "action rejected");
        }
        self
    }

    fn log_filters(&self) {
        tracing::debug!(
            query = %self.filters.query,
            genre = %self.filters.genre,
            year = %self.filters.year,
            condition = %self.filters.condition,
            visible = self.visible().len(),
            "filters changed"
        );
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(Catalog::vinyl_vault())
    }
}

fn find_record(catalog: &Catalog, id: RecordId) -> Result<&Record, CommerceError> {
    catalog.get(id).ok_or_else(|| {
        tracing::warn!(record_id = %id, "unknown record");
        CommerceError::RecordNotFound(id)
    })
}

fn warn_rejected(err: &CommerceError) {
    tracing::warn!(%err, "selector rejected");
}
