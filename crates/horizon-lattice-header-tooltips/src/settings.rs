//! Header tooltip settings and their normalization.
//!
//! The host configuration accepts either a boolean shorthand or a structured
//! record:
//!
//! ```json
//! { "headerTooltips": true }
//! { "headerTooltips": { "rows": true, "columns": false, "onlyTrimmed": true } }
//! ```
//!
//! [`normalize`] turns either form into the canonical [`PluginSettings`]
//! record once, when the plugin is enabled, so the per-header logic only ever
//! sees one representation.

use serde::{Deserialize, Serialize};

/// Raw `headerTooltips` value as found in the host configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderTooltipsSetting {
    /// Boolean shorthand. `true` means "all defaults".
    Enabled(bool),
    /// Structured override. Absent keys read as `false`.
    Options(PartialTooltipSettings),
    /// Any other value. Enables the plugin when truthy but shows no tooltips.
    Malformed(serde_json::Value),
}

impl HeaderTooltipsSetting {
    /// Whether the value enables the plugin.
    ///
    /// `false`, `null`, `0` and `""` are falsy. Every structured record is
    /// truthy, including an empty one.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Enabled(enabled) => *enabled,
            Self::Options(_) => true,
            Self::Malformed(value) => value_is_truthy(value),
        }
    }
}

fn value_is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

/// Read one record key by truthiness, so a non-boolean value only affects
/// its own dimension.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .filter(|value| !value.is_null())
        .map(|value| value_is_truthy(&value)))
}

impl From<bool> for HeaderTooltipsSetting {
    fn from(enabled: bool) -> Self {
        Self::Enabled(enabled)
    }
}

impl From<PartialTooltipSettings> for HeaderTooltipsSetting {
    fn from(options: PartialTooltipSettings) -> Self {
        Self::Options(options)
    }
}

/// Structured `headerTooltips` record with every key optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialTooltipSettings {
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "Option::is_none")]
    pub rows: Option<bool>,
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "Option::is_none")]
    pub columns: Option<bool>,
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "Option::is_none")]
    pub only_trimmed: Option<bool>,
}

impl PartialTooltipSettings {
    /// Create an empty record (every dimension off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row header flag.
    pub fn with_rows(mut self, rows: bool) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Set the column header flag.
    pub fn with_columns(mut self, columns: bool) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Set the trimmed-only flag.
    pub fn with_only_trimmed(mut self, only_trimmed: bool) -> Self {
        self.only_trimmed = Some(only_trimmed);
        self
    }
}

/// Canonical, normalized tooltip settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PluginSettings {
    /// Tooltips on row headers.
    pub rows: bool,
    /// Tooltips on column headers.
    pub columns: bool,
    /// Only tooltip headers whose label looks trimmed.
    pub only_trimmed: bool,
}

impl PluginSettings {
    /// The settings a boolean `true` expands to.
    pub const DEFAULT_ENABLED: Self = Self {
        rows: true,
        columns: true,
        only_trimmed: false,
    };
}

/// Normalize a raw configuration value into [`PluginSettings`].
///
/// The boolean's value is not consulted here: whether the plugin is enabled
/// at all is decided earlier by [`HeaderTooltipsSetting::is_truthy`].
/// Structured records are taken as-is, without merging in the defaults.
pub fn normalize(raw: &HeaderTooltipsSetting) -> PluginSettings {
    match raw {
        HeaderTooltipsSetting::Enabled(_) => PluginSettings::DEFAULT_ENABLED,
        HeaderTooltipsSetting::Options(options) => PluginSettings {
            rows: options.rows.unwrap_or(false),
            columns: options.columns.unwrap_or(false),
            only_trimmed: options.only_trimmed.unwrap_or(false),
        },
        HeaderTooltipsSetting::Malformed(_) => PluginSettings::default(),
    }
}
