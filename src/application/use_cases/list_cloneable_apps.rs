//! ListCloneableAppsUseCase - list apps a user may clone
//!
//! Pulls a fresh package snapshot and allow-list on every call and hands
//! them to the domain filter together with the launch resolver.

use std::sync::Arc;

use crate::domain::entities::InstalledApp;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{AllowListSource, InstalledAppSource, LaunchResolver};
use crate::domain::services::clone_filter;
use crate::domain::value_objects::UserId;

/// Use case for listing cloneable applications
pub struct ListCloneableAppsUseCase<S, A, L>
where
    S: InstalledAppSource,
    A: AllowListSource,
    L: LaunchResolver,
{
    app_source: Arc<S>,
    allow_list_source: Arc<A>,
    launch_resolver: Arc<L>,
}

impl<S, A, L> ListCloneableAppsUseCase<S, A, L>
where
    S: InstalledAppSource,
    A: AllowListSource,
    L: LaunchResolver,
{
    /// Create a new list cloneable apps use case
    pub fn new(app_source: Arc<S>, allow_list_source: Arc<A>, launch_resolver: Arc<L>) -> Self {
        Self {
            app_source,
            allow_list_source,
            launch_resolver,
        }
    }

    /// Cloneable apps for `user`, in platform order
    pub fn execute(&self, user: UserId) -> Result<Vec<InstalledApp>, DomainError> {
        let installed = self.app_source.installed_apps(user)?;
        let allow_list = self.allow_list_source.allow_list()?;

        let apps = clone_filter::cloneable_apps(&installed, &allow_list, |pkg| {
            self.launch_resolver.has_launch_intent(pkg, user)
        });

        log!(
            "user {}: {} of {} installed apps cloneable ({} allow-listed)",
            user,
            apps.len(),
            installed.len(),
            allow_list.len()
        );

        Ok(apps)
    }

    /// Package names of the cloneable apps for `user`
    pub fn package_names(&self, user: UserId) -> Result<Vec<String>, DomainError> {
        let installed = self.app_source.installed_apps(user)?;
        let allow_list = self.allow_list_source.allow_list()?;

        Ok(clone_filter::cloneable_package_names(
            &installed,
            &allow_list,
            |pkg| self.launch_resolver.has_launch_intent(pkg, user),
        ))
    }
}
