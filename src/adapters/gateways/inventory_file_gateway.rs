//! InventoryFileGateway - package source backed by a JSON inventory dump
//!
//! The inventory is a snapshot of the device package table, one block per
//! user profile:
//!
//! ```json
//! { "users": [ { "user_id": 0, "packages": [
//!     { "package_name": "org.example", "system": false,
//!       "launch_activity": "org.example/.Main", "label": "Example" } ] } ] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::adapters::gateways::MemoryPackageGateway;
use crate::domain::entities::InstalledApp;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{InstalledAppSource, LaunchResolver};
use crate::domain::value_objects::UserId;

/// Root of the inventory file
#[derive(Debug, Default, Deserialize)]
struct Inventory {
    #[serde(default)]
    users: Vec<UserPackages>,
}

/// Packages installed for one user
#[derive(Debug, Deserialize)]
struct UserPackages {
    user_id: UserId,
    #[serde(default)]
    packages: Vec<PackageRecord>,
}

/// One package line of the dump
#[derive(Debug, Deserialize)]
struct PackageRecord {
    #[serde(default)]
    package_name: Option<String>,
    #[serde(default)]
    system: bool,
    #[serde(default)]
    launch_activity: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

impl PackageRecord {
    /// Split into the app record and its launchability
    fn into_app(self) -> (InstalledApp, bool) {
        let app = InstalledApp {
            package_name: self.package_name,
            is_system_app: self.system,
            label: self.label,
        };
        let launchable = self
            .launch_activity
            .is_some_and(|activity| !activity.trim().is_empty());
        (app, launchable)
    }
}

/// File-based package source
pub struct InventoryFileGateway {
    path: PathBuf,
    packages: MemoryPackageGateway,
}

impl InventoryFileGateway {
    /// Load the inventory at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let content = fs::read_to_string(&path)?;
        let packages = Self::parse_content(&content)?;

        log!(
            "Loaded inventory {:?} ({} users)",
            path,
            packages.users().len()
        );

        Ok(Self { path, packages })
    }

    /// Get the inventory file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse inventory JSON into an in-memory table
    pub fn parse_content(content: &str) -> Result<MemoryPackageGateway, DomainError> {
        let inventory: Inventory = serde_json::from_str(content)?;
        let mut gateway = MemoryPackageGateway::new();

        for user in inventory.users {
            gateway.add_user(user.user_id);
            for record in user.packages {
                let (app, launchable) = record.into_app();
                gateway.add_package(user.user_id, app, launchable);
            }
        }

        Ok(gateway)
    }
}

impl InstalledAppSource for InventoryFileGateway {
    fn installed_apps(&self, user: UserId) -> Result<Vec<InstalledApp>, DomainError> {
        self.packages.installed_apps(user)
    }
}

impl LaunchResolver for InventoryFileGateway {
    fn has_launch_intent(&self, package_name: &str, user: UserId) -> bool {
        self.packages.has_launch_intent(package_name, user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const INVENTORY: &str = r#"{
        "users": [
            { "user_id": 0, "packages": [
                { "package_name": "org.example.notes", "launch_activity": "org.example.notes/.Main", "label": "Notes" },
                { "package_name": "com.android.phone", "system": true, "launch_activity": "com.android.phone/.Dialer" },
                { "package_name": "org.example.sync" },
                { "package_name": null, "launch_activity": "x/.Y" },
                { "system": false }
            ] },
            { "user_id": 10 },
            { "user_id": 11, "packages": [] }
        ]
    }"#;

    #[test]
    fn test_parse_content() {
        let gateway = InventoryFileGateway::parse_content(INVENTORY).unwrap();

        let apps = gateway.installed_apps(UserId(0)).unwrap();
        assert_eq!(apps.len(), 5);
        assert_eq!(apps[0].label.as_deref(), Some("Notes"));
        assert!(apps[1].is_system_app);
        assert!(apps[3].package_name.is_none());
        assert!(apps[4].package_name.is_none());

        assert!(gateway.has_launch_intent("org.example.notes", UserId(0)));
        assert!(!gateway.has_launch_intent("org.example.sync", UserId(0)));

        assert_eq!(gateway.users(), vec![UserId(0), UserId(10), UserId(11)]);
        assert_eq!(gateway.count(UserId(10)), 0);
        assert!(gateway.installed_apps(UserId(11)).unwrap().is_empty());
    }

    #[test]
    fn test_blank_launch_activity_not_launchable() {
        let content = r#"{ "users": [ { "user_id": 0, "packages": [
            { "package_name": "a", "launch_activity": "  " } ] } ] }"#;
        let gateway = InventoryFileGateway::parse_content(content).unwrap();

        assert!(!gateway.has_launch_intent("a", UserId(0)));
    }

    #[test]
    fn test_parse_error() {
        let result = InventoryFileGateway::parse_content("{ \"users\": [");
        assert!(matches!(result, Err(DomainError::ParseError(_))));
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(INVENTORY.as_bytes()).unwrap();

        let gateway = InventoryFileGateway::open(file.path()).unwrap();
        assert_eq!(gateway.path(), file.path());
        assert_eq!(gateway.installed_apps(UserId(0)).unwrap().len(), 5);
        assert!(gateway.has_launch_intent("com.android.phone", UserId(0)));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = InventoryFileGateway::open(dir.path().join("missing.json"));

        assert!(matches!(result, Err(DomainError::IoError(_))));
    }
}
