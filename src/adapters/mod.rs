//! Interface Adapters Layer
//!
//! This layer converts data between the use case format and external formats.
//! It contains:
//! - **Gateways**: Package source, launch resolver and allow-list implementations
//! - **Presenters**: Format results for the terminal
//!
//! # Clean Architecture Rules
//! - Depends on application and domain layers
//! - Implements the repository traits defined in the domain layer

pub mod gateways;
pub mod presenters;

pub use gateways::*;
pub use presenters::*;
