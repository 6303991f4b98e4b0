//! Ordered, capped result lists.

use serde::{Deserialize, Serialize};

/// Records from one results page, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultPage<R> {
    records: Vec<R>,
}

impl<R> ResultPage<R> {
    /// Wrap records that are already in document order.
    #[must_use]
    pub const fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// A page with no records.
    #[must_use]
    pub const fn empty() -> Self {
        Self { records: Vec::new() }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the page had no matching records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records as a slice.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Mutable iterator, used to attach nested results in place.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, R> {
        self.records.iter_mut()
    }

    /// Iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Unwrap into the record list.
    #[must_use]
    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<R> Default for ResultPage<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R> std::ops::Index<usize> for ResultPage<R> {
    type Output = R;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<R> IntoIterator for ResultPage<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a ResultPage<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<R> FromIterator<R> for ResultPage<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
