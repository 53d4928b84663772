//! Page selection.

use crate::config::NavLabels;
use serde::{Deserialize, Serialize};

/// Which view the storefront shows. Any page is reachable from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Page {
    #[default]
    Catalog,
    About,
    Contact,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 3] = [Page::Catalog, Page::About, Page::Contact];

    pub fn label<'a>(&self, labels: &'a NavLabels) -> &'a str {
        match self {
            Page::Catalog => &labels.catalog,
            Page::About => &labels.about,
            Page::Contact => &labels.contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_catalog() {
        assert_eq!(Page::default(), Page::Catalog);
        assert_eq!(Page::ALL[0], Page::Catalog);
    }

    #[test]
    fn test_labels() {
        let labels = NavLabels::default();
        let shown: Vec<_> = Page::ALL.iter().map(|p| p.label(&labels)).collect();
        assert_eq!(shown, ["Home", "About", "Contact"]);
    }
}
