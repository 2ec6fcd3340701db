//! Infrastructure Layer - Concrete wiring

pub mod composition_root;

pub use composition_root::{CompositionConfig, CompositionError, CompositionRoot};
