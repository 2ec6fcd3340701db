//! Cloneable app filter
//!
//! An app may be cloned when it is user-installed or allow-listed, and it
//! has a launchable entry point. Records without a package name are dropped.
//! Output keeps the platform's enumeration order.

use crate::domain::entities::InstalledApp;
use crate::domain::value_objects::AllowList;

/// Check a single record against the cloneability rule
pub fn is_cloneable<F>(app: &InstalledApp, allow_list: &AllowList, has_launch_intent: F) -> bool
where
    F: Fn(&str) -> bool,
{
    let Some(package_name) = app.resolved_package_name() else {
        return false;
    };

    let eligible = allow_list.contains(package_name) || !app.is_system_app;

    // Launch resolution is the expensive call, only ask for eligible apps
    eligible && has_launch_intent(package_name)
}

/// Filter installed apps down to the ones eligible for cloning
pub fn cloneable_apps<F>(
    installed: &[InstalledApp],
    allow_list: &AllowList,
    has_launch_intent: F,
) -> Vec<InstalledApp>
where
    F: Fn(&str) -> bool,
{
    installed
        .iter()
        .filter(|app| is_cloneable(app, allow_list, &has_launch_intent))
        .cloned()
        .collect()
}

/// Same as [`cloneable_apps`], projected to package names
pub fn cloneable_package_names<F>(
    installed: &[InstalledApp],
    allow_list: &AllowList,
    has_launch_intent: F,
) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    cloneable_apps(installed, allow_list, has_launch_intent)
        .into_iter()
        .filter_map(|app| app.package_name)
        .collect()
}
