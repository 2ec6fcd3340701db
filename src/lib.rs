//! cloneable-apps - find the installed apps a user profile may clone
//!
//! An app is cloneable when it is user-installed or explicitly allow-listed,
//! and it has a launchable entry point. The crate follows Clean Architecture:
//!
//! - **Domain Layer**: `InstalledApp`, `AllowList`, the filter, collaborator traits
//! - **Application Layer**: `ListCloneableAppsUseCase`
//! - **Adapters Layer**: package gateways, allow-list gateway, presenter
//! - **Infrastructure Layer**: composition root for the command line tool
//! - **Shared**: configuration
//!
//! The filter lives in [`domain::services::clone_filter`] and has no
//! dependencies on the platform; everything platform specific comes in
//! through the traits in [`domain::repositories`].

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

/// Domain Layer - Pure business logic
pub mod domain;

/// Application Layer - Use cases
pub mod application;

/// Adapters Layer - Gateways and presenters
pub mod adapters;

/// Infrastructure Layer - Dependency wiring
pub mod infrastructure;

/// Shared Utilities - Configuration
pub mod shared;

pub use domain::services::clone_filter::{cloneable_apps, cloneable_package_names};
pub use domain::{AllowList, DomainError, InstalledApp, UserId};
