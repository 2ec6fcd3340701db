//! Domain Services - Stateless operations over entities

pub mod clone_filter;

pub use clone_filter::{cloneable_apps, cloneable_package_names, is_cloneable};
