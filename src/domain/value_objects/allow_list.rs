//! AllowList value object - packages explicitly marked cloneable
//!
//! Membership lets a system app through the filter. An absent list and an
//! empty list behave the same.

use std::collections::HashSet;

/// Immutable set of allow-listed package names
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowList {
    packages: HashSet<String>,
}

impl AllowList {
    /// Create an empty allow-list
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a possibly absent configured list
    pub fn from_optional<I, S>(packages: Option<I>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        packages
            .map(|items| items.into_iter().collect())
            .unwrap_or_default()
    }

    /// Check whether a package is allow-listed
    pub fn contains(&self, package_name: &str) -> bool {
        self.packages.contains(package_name)
    }

    /// Return a new list with extra packages merged in
    pub fn extended<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.packages.extend(extra.into_iter().map(Into::into));
        self
    }

    /// Number of allow-listed packages
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Check whether nothing is allow-listed
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            packages: iter.into_iter().map(Into::into).collect(),
        }
    }
}
