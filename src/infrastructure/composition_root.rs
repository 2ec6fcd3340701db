//! CompositionRoot - Dependency Injection Container
//!
//! Wires the configured allow-list and the inventory gateway into the
//! list use case.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::adapters::gateways::{InventoryFileGateway, StaticAllowListGateway};
use crate::application::use_cases::ListCloneableAppsUseCase;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::UserId;
use crate::shared::config::Config;

/// The use case as assembled for the command line tool
pub type CloneableAppsService =
    ListCloneableAppsUseCase<InventoryFileGateway, StaticAllowListGateway, InventoryFileGateway>;

/// Error while assembling dependencies
#[derive(Error, Debug)]
pub enum CompositionError {
    #[error("no inventory file given (use --inventory or set `inventory` in config.toml)")]
    MissingInventory,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Overrides taken from the command line
#[derive(Clone, Debug, Default)]
pub struct CompositionConfig {
    /// Inventory file, takes precedence over the config value
    pub inventory: Option<PathBuf>,
    /// User profile, takes precedence over the config value
    pub user: Option<UserId>,
    /// Extra allow-listed packages
    pub extra_allowed: Vec<String>,
}

/// Application composition root - owns all dependencies
pub struct CompositionRoot {
    pub service: CloneableAppsService,
    pub user: UserId,
}

impl CompositionRoot {
    /// Build from file configuration plus command line overrides
    pub fn build(config: Config, overrides: CompositionConfig) -> Result<Self, CompositionError> {
        let inventory_path = overrides
            .inventory
            .or(config.inventory)
            .ok_or(CompositionError::MissingInventory)?;
        let user = overrides.user.unwrap_or(config.user);

        let inventory = Arc::new(InventoryFileGateway::open(inventory_path)?);
        let allow_list = StaticAllowListGateway::new(config.cloneable_apps)
            .with_extra(overrides.extra_allowed);

        log!("Composition built for user {}", user);

        Ok(Self {
            service: ListCloneableAppsUseCase::new(
                inventory.clone(),
                Arc::new(allow_list),
                inventory,
            ),
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVENTORY: &str = r#"{ "users": [
        { "user_id": 0, "packages": [
            { "package_name": "org.user.app", "launch_activity": "a/.A" },
            { "package_name": "com.android.chrome", "system": true, "launch_activity": "c/.C" },
            { "package_name": "com.android.camera", "system": true, "launch_activity": "d/.D" }
        ] },
        { "user_id": 10, "packages": [
            { "package_name": "org.work.app", "launch_activity": "w/.W" }
        ] }
    ] }"#;

    fn inventory_file(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, INVENTORY).unwrap();
        path
    }

    #[test]
    fn test_missing_inventory() {
        let result = CompositionRoot::build(Config::default(), CompositionConfig::default());
        assert!(matches!(result, Err(CompositionError::MissingInventory)));
    }

    #[test]
    fn test_config_values_used() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            cloneable_apps: Some(vec!["com.android.chrome".to_string()]),
            inventory: Some(inventory_file(&dir)),
            user: UserId(0),
        };

        let root = CompositionRoot::build(config, CompositionConfig::default()).unwrap();
        let names = root.service.package_names(root.user).unwrap();

        assert_eq!(names, vec!["org.user.app", "com.android.chrome"]);
    }

    #[test]
    fn test_overrides_win() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            inventory: Some(dir.path().join("does-not-exist.json")),
            ..Config::default()
        };
        let overrides = CompositionConfig {
            inventory: Some(inventory_file(&dir)),
            user: Some(UserId(0)),
            extra_allowed: vec!["com.android.camera".to_string()],
        };

        let root = CompositionRoot::build(config, overrides).unwrap();
        let names = root.service.package_names(root.user).unwrap();

        assert_eq!(names, vec!["org.user.app", "com.android.camera"]);
    }

    #[test]
    fn test_user_override() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = CompositionConfig {
            inventory: Some(inventory_file(&dir)),
            user: Some(UserId(10)),
            ..CompositionConfig::default()
        };

        let root = CompositionRoot::build(Config::default(), overrides).unwrap();
        assert_eq!(root.user, UserId(10));
        assert_eq!(root.service.package_names(root.user).unwrap(), vec!["org.work.app"]);
    }
}
