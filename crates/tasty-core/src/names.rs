//! Read-only name sets handed to the tokenizers.

use std::collections::HashSet;
use std::hash::BuildHasher;

use indexmap::IndexSet;

/// Membership test over a set of names.
///
/// Lets the tokenizers accept configuration-backed sets, local definition
/// sets and plain slices without copying them.
pub trait NameLookup {
    fn contains_name(&self, name: &str) -> bool;
}

/// The empty set.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNames;

impl NameLookup for NoNames {
    fn contains_name(&self, _name: &str) -> bool {
        false
    }
}

impl NameLookup for [&str] {
    fn contains_name(&self, name: &str) -> bool {
        self.contains(&name)
    }
}

impl<const N: usize> NameLookup for [&str; N] {
    fn contains_name(&self, name: &str) -> bool {
        self.contains(&name)
    }
}

impl NameLookup for [String] {
    fn contains_name(&self, name: &str) -> bool {
        self.iter().any(|n| n == name)
    }
}

impl NameLookup for Vec<String> {
    fn contains_name(&self, name: &str) -> bool {
        self.as_slice().contains_name(name)
    }
}

impl<S: BuildHasher> NameLookup for HashSet<String, S> {
    fn contains_name(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<S: BuildHasher> NameLookup for IndexSet<String, S> {
    fn contains_name(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<T: NameLookup + ?Sized> NameLookup for &T {
    fn contains_name(&self, name: &str) -> bool {
        (**self).contains_name(name)
    }
}
