//! Presenters - Format use case output for display

pub mod cloneable_presenter;

pub use cloneable_presenter::{CloneablePresenter, OutputFormat};
