//! Directory entries and their two comparison functions.
//!
//! Identity and ranking are deliberately separate. `PartialEq`/`Hash`
//! compare by name only, so an entry whose call count changed is still the
//! same logical entry for containment checks; [`cmp_by_calls`] is the
//! ranking comparator the top-K cache orders by. The two must never be
//! conflated.

use crate::number::NormalizedNumber;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named phone number with its outgoing-call count.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Unique key within a directory.
    pub name: String,
    /// Canonical phone number.
    pub number: NormalizedNumber,
    /// Outgoing calls recorded so far.
    pub calls: u64,
}

impl Entry {
    pub fn new(name: impl Into<String>, number: NormalizedNumber, calls: u64) -> Self {
        Self {
            name: name.into(),
            number,
            calls,
        }
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} calls)", self.name, self.number, self.calls)
    }
}

/// Ranking comparator for the top-K cache: call count ascending, ties
/// broken by name descending. The greatest element is therefore the entry
/// with the most calls and, among equal counts, the lexicographically
/// smallest name.
pub fn cmp_by_calls(a: &Entry, b: &Entry) -> Ordering {
    a.calls.cmp(&b.calls).then_with(|| b.name.cmp(&a.name))
}
