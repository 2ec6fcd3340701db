//! StaticAllowListGateway - allow-list taken from configuration

use crate::domain::errors::DomainError;
use crate::domain::repositories::AllowListSource;
use crate::domain::value_objects::AllowList;

/// Allow-list source over a fixed, possibly unset, list of names
#[derive(Clone, Debug, Default)]
pub struct StaticAllowListGateway {
    allow_list: AllowList,
}

impl StaticAllowListGateway {
    /// Create from a configured list; `None` means no allow-list
    pub fn new(packages: Option<Vec<String>>) -> Self {
        Self {
            allow_list: AllowList::from_optional(packages),
        }
    }

    /// Builder pattern: add extra packages on top of the configured ones
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_list = self.allow_list.extended(extra);
        self
    }
}

impl AllowListSource for StaticAllowListGateway {
    fn allow_list(&self) -> Result<AllowList, DomainError> {
        Ok(self.allow_list.clone())
    }
}
