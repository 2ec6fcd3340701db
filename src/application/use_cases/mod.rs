//! Application Use Cases - Single-purpose business operations

pub mod list_cloneable_apps;

pub use list_cloneable_apps::ListCloneableAppsUseCase;
