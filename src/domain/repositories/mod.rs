//! Domain Repository Interfaces
//!
//! These are trait definitions only - no implementations.
//! Implementations belong in the adapters/gateways layer.

pub mod allow_list_source;
pub mod installed_app_source;
pub mod launch_resolver;

pub use allow_list_source::AllowListSource;
pub use installed_app_source::InstalledAppSource;
pub use launch_resolver::LaunchResolver;
