//! MemoryPackageGateway - In-memory package table

use std::collections::HashMap;

use crate::domain::entities::InstalledApp;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{InstalledAppSource, LaunchResolver};
use crate::domain::value_objects::UserId;

/// A package as held by the gateway
#[derive(Clone, Debug)]
struct PackageEntry {
    app: InstalledApp,
    launchable: bool,
}

/// In-memory package source and launch resolver, keyed by user
#[derive(Clone, Debug, Default)]
pub struct MemoryPackageGateway {
    users: HashMap<UserId, Vec<PackageEntry>>,
}

impl MemoryPackageGateway {
    /// Create a new empty gateway
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user, even one with no packages installed
    pub fn add_user(&mut self, user: UserId) {
        self.users.entry(user).or_default();
    }

    /// Add a package for a user, appended in enumeration order
    pub fn add_package(&mut self, user: UserId, app: InstalledApp, launchable: bool) {
        self.users
            .entry(user)
            .or_default()
            .push(PackageEntry { app, launchable });
    }

    /// Builder pattern: add a package
    pub fn with_package(mut self, user: UserId, app: InstalledApp, launchable: bool) -> Self {
        self.add_package(user, app, launchable);
        self
    }

    /// Remove every record of a package for a user
    pub fn remove_package(&mut self, user: UserId, package_name: &str) {
        if let Some(entries) = self.users.get_mut(&user) {
            entries.retain(|entry| entry.app.package_name.as_deref() != Some(package_name));
        }
    }

    /// Users known to the gateway, ascending
    pub fn users(&self) -> Vec<UserId> {
        let mut users: Vec<UserId> = self.users.keys().copied().collect();
        users.sort();
        users
    }

    /// Number of records held for a user
    pub fn count(&self, user: UserId) -> usize {
        self.users.get(&user).map(Vec::len).unwrap_or(0)
    }
}

impl InstalledAppSource for MemoryPackageGateway {
    fn installed_apps(&self, user: UserId) -> Result<Vec<InstalledApp>, DomainError> {
        Ok(self
            .users
            .get(&user)
            .map(|entries| entries.iter().map(|entry| entry.app.clone()).collect())
            .unwrap_or_default())
    }
}

impl LaunchResolver for MemoryPackageGateway {
    fn has_launch_intent(&self, package_name: &str, user: UserId) -> bool {
        self.users.get(&user).is_some_and(|entries| {
            entries.iter().any(|entry| {
                entry.launchable && entry.app.package_name.as_deref() == Some(package_name)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_list() {
        let mut gateway = MemoryPackageGateway::new();

        gateway.add_package(UserId(0), InstalledApp::new("b.app"), true);
        gateway.add_package(UserId(0), InstalledApp::new("a.app"), false);

        let apps = gateway.installed_apps(UserId(0)).unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].package_name.as_deref(), Some("b.app"));
        assert_eq!(gateway.count(UserId(0)), 2);
    }

    #[test]
    fn test_unknown_user_is_empty() {
        let gateway =
            MemoryPackageGateway::new().with_package(UserId(0), InstalledApp::new("a"), true);

        assert!(gateway.installed_apps(UserId(5)).unwrap().is_empty());
        assert!(!gateway.has_launch_intent("a", UserId(5)));
    }

    #[test]
    fn test_launch_intent() {
        let gateway = MemoryPackageGateway::new()
            .with_package(UserId(0), InstalledApp::new("launcher.app"), true)
            .with_package(UserId(0), InstalledApp::new("service.only"), false);

        assert!(gateway.has_launch_intent("launcher.app", UserId(0)));
        assert!(!gateway.has_launch_intent("service.only", UserId(0)));
        assert!(!gateway.has_launch_intent("missing", UserId(0)));
    }

    #[test]
    fn test_remove_package() {
        let mut gateway = MemoryPackageGateway::new()
            .with_package(UserId(0), InstalledApp::new("a"), true)
            .with_package(UserId(10), InstalledApp::new("a"), true);

        gateway.remove_package(UserId(0), "a");

        assert_eq!(gateway.count(UserId(0)), 0);
        assert_eq!(gateway.count(UserId(10)), 1);
        assert_eq!(gateway.users(), vec![UserId(0), UserId(10)]);
    }

    #[test]
    fn test_add_user_without_packages() {
        let mut gateway = MemoryPackageGateway::new();
        gateway.add_user(UserId(10));
        gateway.add_user(UserId(10));

        assert_eq!(gateway.users(), vec![UserId(10)]);
        assert_eq!(gateway.count(UserId(10)), 0);
        assert!(gateway.installed_apps(UserId(10)).unwrap().is_empty());
    }
}
