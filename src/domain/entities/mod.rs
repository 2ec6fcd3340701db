//! Domain Entities - Core business objects

pub mod installed_app;

pub use installed_app::InstalledApp;
