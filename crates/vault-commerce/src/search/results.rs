//! Filtered result set.

use crate::catalog::Record;
use crate::ids::RecordId;

/// Records that passed the current filters, in catalog order.
///
/// An empty set is a normal outcome; the UI shows a "no results" notice
/// for it rather than an empty grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterResults<'a> {
    items: Vec<&'a Record>,
}

impl<'a> FilterResults<'a> {
    pub(crate) fn new(items: Vec<&'a Record>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.items.iter().copied()
    }

    /// Ids of the visible records.
    pub fn ids(&self) -> Vec<RecordId> {
        self.items.iter().map(|r| r.id).collect()
    }

    /// Owned copies, for handing to a renderer.
    pub fn to_records(&self) -> Vec<Record> {
        self.items.iter().map(|r| (*r).clone()).collect()
    }
}

impl<'r, 'a> IntoIterator for &'r FilterResults<'a> {
    type Item = &'a Record;
    type IntoIter = std::iter::Copied<std::slice::Iter<'r, &'a Record>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().copied()
    }
}
