//! AllowListSource - interface to the statically configured allow-list

use crate::domain::errors::DomainError;
use crate::domain::value_objects::AllowList;

/// Supplies the set of packages explicitly marked cloneable
pub trait AllowListSource: Send + Sync {
    /// Load the allow-list; an unset list comes back empty
    fn allow_list(&self) -> Result<AllowList, DomainError>;
}

/// A null implementation for testing
pub struct NullAllowListSource;

impl AllowListSource for NullAllowListSource {
    fn allow_list(&self) -> Result<AllowList, DomainError> {
        Ok(AllowList::empty())
    }
}
