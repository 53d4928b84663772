//! Shopping cart module.
//!
//! Contains the cart ledger, its entries, and the summary the cart panel renders.

mod cart;
mod summary;

pub use cart::{Cart, CartEntry};
pub use summary::{CartSummary, LineSummary};
