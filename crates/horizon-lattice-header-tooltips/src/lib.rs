//! Hover tooltips for grid header cells.
//!
//! This crate provides the `headerTooltips` grid plugin. While enabled it
//! sets the native `title` attribute of row and column header cells to their
//! label text, either for every header or only for headers whose label looks
//! trimmed. Disabling it removes the attribute from every header surface the
//! grid renders: the main table head, the frozen top overlay and the corner
//! overlay.
//!
//! - **Settings**: boolean shorthand or structured record, normalized once
//! - **Plugin lifecycle**: enable, disable, update and destroy
//! - **Hooks**: the grid's header render events the plugin listens to
//! - **Headers**: the [`HeaderElement`] abstraction and header surfaces
//!
//! # Configuration
//!
//! ```json
//! { "headerTooltips": true }
//! { "headerTooltips": { "rows": true, "columns": false, "onlyTrimmed": true } }
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use horizon_lattice_header_tooltips::{
//!     GridPlugin, GridSettings, HeaderKind, HeaderSurface, HeaderSurfaces, HeaderTooltips,
//!     PartialTooltipSettings, SimpleGrid, SimpleHeader,
//! };
//!
//! let settings = GridSettings::new()
//!     .with_header_tooltips(PartialTooltipSettings::new().with_rows(true));
//!
//! let qty = Arc::new(SimpleHeader::new(HeaderKind::Row, "Qty"));
//! let year = Arc::new(SimpleHeader::new(HeaderKind::Column, "2024"));
//! let grid = Arc::new(
//!     SimpleGrid::new(
//!         settings,
//!         HeaderSurfaces::new(HeaderSurface::new().with_row(vec![year.clone()])),
//!     )
//!     .with_row_headers(vec![qty.clone()]),
//! );
//!
//! let mut plugin = HeaderTooltips::new(grid.clone());
//! plugin.enable_plugin();
//! grid.render();
//!
//! assert_eq!(qty.title().as_deref(), Some("Qty"));
//! assert_eq!(year.title(), None);
//! ```

mod config;
mod error;
mod grid;
pub mod header;
pub mod hooks;
pub mod logging;
pub mod plugin;
pub mod settings;
mod tooltips;

pub use config::GridSettings;
pub use error::{ConfigError, ConfigResult};
pub use grid::SimpleGrid;
pub use header::{
    HeaderElement, HeaderKind, HeaderLabel, HeaderRow, HeaderSurface, HeaderSurfaces,
    SimpleHeader, TITLE_ATTRIBUTE,
};
pub use hooks::{HeaderHooks, HeaderRendered, Hook, HookId};
pub use logging::PerfSpan;
pub use plugin::{GridHost, GridPlugin, PluginState};
pub use settings::{HeaderTooltipsSetting, PartialTooltipSettings, PluginSettings, normalize};
pub use tooltips::{HeaderTooltips, PLUGIN_KEY, TRIMMED_HEADER_WIDTH, tooltip_for};
