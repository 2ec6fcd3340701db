//! InstalledApp entity - one installed package as reported by the platform
//!
//! Records are built fresh for every query and only read by the filter.

/// An installed application for a single user profile
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstalledApp {
    /// Package name, `None` when the platform could not resolve it
    pub package_name: Option<String>,
    /// Whether the package ships with the OS image
    pub is_system_app: bool,
    /// Human readable label, display only
    pub label: Option<String>,
}

impl InstalledApp {
    /// Create a user-installed app record
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: Some(package_name.into()),
            is_system_app: false,
            label: None,
        }
    }

    /// Create a record whose package name could not be resolved
    pub fn unresolved() -> Self {
        Self::default()
    }

    /// Builder pattern: mark as system app
    pub fn with_system(mut self, is_system_app: bool) -> Self {
        self.is_system_app = is_system_app;
        self
    }

    /// Builder pattern: set label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Package name if the platform resolved one
    pub fn resolved_package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    /// Label if set, otherwise the package name
    pub fn display_name(&self) -> &str {
        self.label
            .as_deref()
            .or(self.package_name.as_deref())
            .unwrap_or("")
    }
}
