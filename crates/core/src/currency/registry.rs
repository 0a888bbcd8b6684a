//! Ordered collection of currencies with lookup by code.

use std::sync::Arc;

use super::types::Currency;
use crate::error::{TraderError, TraderResult};

/// An ordered registry of currencies.
///
/// Entries are shared handles so that amounts can keep pointing at the exact
/// entry they were created from. Codes are expected to be unique; lookup
/// returns the first match.
#[derive(Debug, Clone, Default)]
pub struct Currencies {
    entries: Vec<Arc<Currency>>,
}

impl Currencies {
    /// Creates a registry from the given currencies, keeping their order.
    #[must_use]
    pub fn new(currencies: Vec<Currency>) -> Self {
        currencies.into_iter().collect()
    }

    /// Finds the currency with the given code, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyNotFound` if no entry matches.
    pub fn find(&self, code: &str) -> TraderResult<&Arc<Currency>> {
        self.entries
            .iter()
            .find(|c| c.is(code))
            .ok_or_else(|| TraderError::CurrencyNotFound(code.to_string()))
    }

    /// Returns true if every entry of `self` is the very same entry (by
    /// identity, not value) somewhere in `other`.
    ///
    /// This is a one-directional containment check; use `==` for value
    /// equality.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.entries
            .iter()
            .all(|c| other.entries.iter().any(|o| Arc::ptr_eq(c, o)))
    }

    /// Iterates over the entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.entries.iter().map(AsRef::as_ref)
    }

    /// Codes of all entries in registry order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.iter().map(Currency::code).collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Currency> for Currencies {
    fn from_iter<I: IntoIterator<Item = Currency>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

/// Value equality: both registries hold the same multiset of
/// `(code, rate)` pairs, regardless of order. Duplicates count.
impl PartialEq for Currencies {
    fn eq(&self, other: &Self) -> bool {
        let count =
            |registry: &Self, needle: &Currency| registry.iter().filter(|c| *c == needle).count();
        self.len() == other.len() && self.iter().all(|c| count(self, c) == count(other, c))
    }
}

impl Eq for Currencies {}
