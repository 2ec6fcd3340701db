//! Application Layer - Use Cases
//!
//! Orchestrates the domain filter with its collaborators.
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer
//! - Contains no platform-specific code

pub mod use_cases;

pub use use_cases::*;
