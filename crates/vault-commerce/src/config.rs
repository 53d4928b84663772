//! Storefront configuration.
//!
//! All user-facing copy lives here, loaded from TOML. Every section and
//! field has a default, so a partial file is fine.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// The Vinyl Vault configuration shipped with the crate.
const BUILTIN: &str = include_str!("../store.toml");

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Branding and hero copy.
    #[serde(default)]
    pub store: StoreInfo,

    /// Cart labels.
    #[serde(default)]
    pub cart: CartConfig,

    /// Filter bar labels.
    #[serde(default)]
    pub filters: FilterLabels,

    /// Navigation labels.
    #[serde(default)]
    pub nav: NavLabels,

    /// About page content.
    #[serde(default)]
    pub about: AboutConfig,

    /// Contact page content.
    #[serde(default)]
    pub contact: ContactConfig,
}

impl StoreConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(content)?)
    }

    /// The configuration embedded in the crate.
    pub fn builtin() -> Result<Self, CommerceError> {
        Self::from_toml_str(BUILTIN)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, CommerceError> {
        toml::to_string_pretty(self).map_err(|e| CommerceError::Config(e.to_string()))
    }
}

/// Branding and hero copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreInfo {
    pub name: String,
    pub logo: String,
    pub hero_heading: String,
    pub hero_blurb: String,
    pub copyright: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: "VINYL VAULT".to_string(),
            logo: "\u{1f4bf}".to_string(),
            hero_heading: "A collection of vinyl treasures".to_string(),
            hero_blurb: "Rare records with soul.".to_string(),
            copyright: "\u{a9} Vinyl Vault. All rights reserved.".to_string(),
        }
    }
}

/// Cart panel labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    pub title: String,
    pub empty: String,
    pub total: String,
    pub checkout: String,
    pub add_to_cart: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            title: "Cart".to_string(),
            empty: "Your cart is empty".to_string(),
            total: "Total:".to_string(),
            checkout: "Checkout".to_string(),
            add_to_cart: "Add to cart".to_string(),
        }
    }
}

/// Filter bar labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterLabels {
    pub search_placeholder: String,
    pub all_genres: String,
    pub all_years: String,
    pub any_condition: String,
    /// Caption before a record's condition on its card.
    pub condition_caption: String,
    /// Shown instead of the grid when nothing matches.
    pub no_results: String,
}

impl Default for FilterLabels {
    fn default() -> Self {
        Self {
            search_placeholder: "Search by title or artist...".to_string(),
            all_genres: "All genres".to_string(),
            all_years: "All years".to_string(),
            any_condition: "Any".to_string(),
            condition_caption: "Condition:".to_string(),
            no_results: "Nothing found. Try changing the filters.".to_string(),
        }
    }
}

/// Navigation labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLabels {
    pub catalog: String,
    pub about: String,
    pub contact: String,
}

impl Default for NavLabels {
    fn default() -> Self {
        Self {
            catalog: "Home".to_string(),
            about: "About".to_string(),
            contact: "Contact".to_string(),
        }
    }
}

/// About page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub perks_heading: String,
    pub perks: Vec<String>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            heading: "About Vinyl Vault".to_string(),
            paragraphs: Vec::new(),
            perks_heading: "Why us".to_string(),
            perks: Vec::new(),
        }
    }
}

/// Contact page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub heading: String,
    pub entries: Vec<ContactEntry>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            heading: "Contact".to_string(),
            entries: Vec::new(),
        }
    }
}

/// One block on the contact page (address, phone, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    #[serde(default)]
    pub glyph: String,
    pub title: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_config_parses() {
        let config = StoreConfig::builtin().unwrap();
        assert_eq!(config.store.name, "VINYL VAULT");
        assert_eq!(config.nav.about, "О магазине");
        assert_eq!(config.filters.all_genres, "Все жанры");
        assert_eq!(config.contact.entries.len(), 4);
        assert_eq!(config.contact.entries[3].lines.len(), 2);
        assert_eq!(config.about.perks.len(), 4);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = StoreConfig::from_toml_str(
            r#"
            [cart]
            title = "Basket"
            "#,
        )
        .unwrap();

        assert_eq!(config.cart.title, "Basket");
        assert_eq!(config.cart.checkout, CartConfig::default().checkout);
        assert_eq!(config.store, StoreInfo::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(StoreConfig::from_toml_str("").unwrap(), StoreConfig::default());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = StoreConfig::from_toml_str("[cart\n").unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = StoreConfig::builtin().unwrap();
        let text = config.to_toml_string().unwrap();
        assert_eq!(StoreConfig::from_toml_str(&text).unwrap(), config);
    }
}
