//! InstalledAppSource - interface to the platform package enumeration
//!
//! Implementations may query a device, read a dumped inventory, or hold
//! records in memory.

use crate::domain::entities::InstalledApp;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::UserId;

/// Supplies the installed packages for a user, in platform order
pub trait InstalledAppSource: Send + Sync {
    /// List installed applications for the given user
    fn installed_apps(&self, user: UserId) -> Result<Vec<InstalledApp>, DomainError>;
}

/// A null implementation for testing
pub struct NullInstalledAppSource;

impl InstalledAppSource for NullInstalledAppSource {
    fn installed_apps(&self, _user: UserId) -> Result<Vec<InstalledApp>, DomainError> {
        Ok(Vec::new())
    }
}
