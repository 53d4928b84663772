//! Trunk entry point.

fn main() {
    #[cfg(feature = "csr")]
    vinyl_vault::mount();
}
