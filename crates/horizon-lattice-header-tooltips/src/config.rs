//! Host grid configuration.
//!
//! [`GridSettings`] is the slice of the grid's configuration the tooltip
//! plugin reads. It can be built in code or loaded from JSON or TOML:
//!
//! ```ignore
//! use horizon_lattice_header_tooltips::GridSettings;
//!
//! let settings = GridSettings::from_json_str(r#"{ "headerTooltips": true }"#)?;
//! let settings = GridSettings::load("grid.toml")?;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::settings::HeaderTooltipsSetting;

fn default_column_header_levels() -> usize {
    1
}

/// Grid configuration consumed by the header tooltip plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSettings {
    /// The `headerTooltips` option. Absent or `null` disables the plugin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_tooltips: Option<HeaderTooltipsSetting>,

    /// Number of stacked column header rows.
    #[serde(default = "default_column_header_levels")]
    pub column_header_levels: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            header_tooltips: None,
            column_header_levels: default_column_header_levels(),
        }
    }
}

impl GridSettings {
    /// Create settings with the plugin disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `headerTooltips` option.
    pub fn with_header_tooltips(mut self, value: impl Into<HeaderTooltipsSetting>) -> Self {
        self.header_tooltips = Some(value.into());
        self
    }

    /// Set the number of column header rows.
    pub fn with_column_header_levels(mut self, levels: usize) -> Self {
        self.column_header_levels = levels;
        self
    }

    /// Whether `headerTooltips` is present and truthy.
    pub fn header_tooltips_enabled(&self) -> bool {
        self.header_tooltips
            .as_ref()
            .is_some_and(HeaderTooltipsSetting::is_truthy)
    }

    /// Parse settings from a JSON document.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse settings from a TOML document.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load settings from a `.json` or `.toml` file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> ConfigResult<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => return Err(ConfigError::unsupported_format(path)),
        };

        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let settings = parse(&text)?;
        crate::tooltips_debug!(
            path = %path.display(),
            header_tooltips = settings.header_tooltips_enabled(),
            "loaded grid settings"
        );
        Ok(settings)
    }
}
