//! CloneablePresenter - Formats cloneable app lists for the terminal

use serde::Serialize;

use crate::domain::entities::InstalledApp;

/// Output format for a cloneable app list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One package name per line
    #[default]
    Names,
    /// Package name and label, tab separated
    Table,
    /// JSON array of records
    Json,
}

/// View model for one listed app
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CloneableAppViewModel {
    pub package_name: String,
    pub label: String,
    pub system: bool,
}

/// Presenter for cloneable app results
pub struct CloneablePresenter {
    format: OutputFormat,
    items: Vec<CloneableAppViewModel>,
}

impl CloneablePresenter {
    /// Create a new presenter for the given format
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            items: Vec::new(),
        }
    }

    /// Present filtered apps
    pub fn present_apps(&mut self, apps: &[InstalledApp]) {
        self.items = apps
            .iter()
            .filter_map(|app| {
                let package_name = app.resolved_package_name()?.to_string();
                Some(CloneableAppViewModel {
                    label: app.display_name().to_string(),
                    package_name,
                    system: app.is_system_app,
                })
            })
            .collect();
    }

    /// Get current view models
    pub fn items(&self) -> &[CloneableAppViewModel] {
        &self.items
    }

    /// Render the presented items
    pub fn render(&self) -> Result<String, serde_json::Error> {
        let rendered = match self.format {
            OutputFormat::Names => self
                .items
                .iter()
                .map(|item| item.package_name.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Table => self
                .items
                .iter()
                .map(|item| format!("{}\t{}", item.package_name, item.label))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Json => serde_json::to_string_pretty(&self.items)?,
        };
        Ok(rendered)
    }
}
