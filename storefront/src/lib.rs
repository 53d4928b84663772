//! Vinyl Vault Storefront
//!
//! A client-side rendered Leptos app over `vault-commerce`:
//! - Catalog grid with text search and genre/year/condition selectors
//! - Slide-over cart with quantity controls and a running total
//! - Static about and contact pages

mod app;

pub use app::App;

/// Mount the app on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
