//! LaunchResolver - interface to launch entry point resolution

use crate::domain::value_objects::UserId;

/// Answers whether a package exposes a launchable entry point
pub trait LaunchResolver: Send + Sync {
    /// True iff the user can start `package_name` directly
    fn has_launch_intent(&self, package_name: &str, user: UserId) -> bool;
}

/// A null implementation for testing: nothing is launchable
pub struct NullLaunchResolver;

impl LaunchResolver for NullLaunchResolver {
    fn has_launch_intent(&self, _package_name: &str, _user: UserId) -> bool {
        false
    }
}
