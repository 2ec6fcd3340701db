//! Domain Layer - Pure business logic with zero external dependencies
//!
//! This layer contains:
//! - **Entities**: `InstalledApp`
//! - **Value Objects**: `AllowList`, `UserId`
//! - **Repository Interfaces**: package source, allow-list source, launch resolver
//! - **Domain Services**: the cloneable app filter
//! - **Domain Errors**: errors raised by collaborators

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
