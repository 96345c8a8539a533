//! The header tooltip plugin.
//!
//! [`HeaderTooltips`] sets the native hover text of row and column header
//! cells to their label, either for every header or only for headers whose
//! label looks trimmed. It listens to the grid's header render hooks while
//! enabled and strips the hover text from every header surface when
//! disabled.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use horizon_lattice_header_tooltips::{
//!     GridPlugin, GridSettings, HeaderKind, HeaderSurface, HeaderSurfaces, HeaderTooltips,
//!     SimpleGrid, SimpleHeader,
//! };
//!
//! let revenue = Arc::new(SimpleHeader::new(HeaderKind::Column, "Revenue"));
//! let grid = Arc::new(SimpleGrid::new(
//!     GridSettings::new().with_header_tooltips(true),
//!     HeaderSurfaces::new(HeaderSurface::new().with_row(vec![revenue.clone()])),
//! ));
//!
//! let mut plugin = HeaderTooltips::new(grid.clone());
//! if plugin.is_enabled() {
//!     plugin.enable_plugin();
//! }
//!
//! grid.render();
//! assert_eq!(revenue.title().as_deref(), Some("Revenue"));
//!
//! plugin.disable_plugin();
//! assert_eq!(revenue.title(), None);
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use crate::header::{HeaderElement, HeaderKind, HeaderLabel, TITLE_ATTRIBUTE};
use crate::hooks::HookId;
use crate::logging::{PerfSpan, span_names, targets};
use crate::plugin::{GridHost, GridPlugin, PluginState};
use crate::settings::{PluginSettings, normalize};

/// Key of the plugin and name of its configuration option.
pub const PLUGIN_KEY: &str = "headerTooltips";

/// Stand-in for the header cell's outer width in trimmed-only mode.
///
/// Measuring the cell while its render hook runs returns zero, so the cell
/// width is pinned to this value instead of measured. A label at least this
/// wide counts as trimmed. Replacing it with a live measurement changes which
/// headers get tooltips.
pub const TRIMMED_HEADER_WIDTH: f32 = 50.0;

/// Decide the hover text for a rendered header.
///
/// Returns `None` when the header should be left untouched.
pub fn tooltip_for(settings: &PluginSettings, header: &dyn HeaderElement) -> Option<String> {
    let label = header.label()?;

    let applicable = match header.kind() {
        HeaderKind::Column => settings.columns,
        HeaderKind::Row => settings.rows,
    };
    if !applicable {
        return None;
    }

    if settings.only_trimmed && !looks_trimmed(&label) {
        return None;
    }

    Some(label.text)
}

fn looks_trimmed(label: &HeaderLabel) -> bool {
    label.outer_width >= TRIMMED_HEADER_WIDTH && label.outer_width > 0.0
}

/// The part of the plugin captured by its hook handlers.
#[derive(Clone, Default)]
struct TooltipAssigner {
    settings: Arc<RwLock<Option<PluginSettings>>>,
}

impl TooltipAssigner {
    fn on_header_rendered(&self, index: i32, header: &dyn HeaderElement) {
        let Some(settings) = *self.settings.read() else {
            return;
        };

        match tooltip_for(&settings, header) {
            Some(text) => {
                tracing::trace!(
                    target: targets::PLUGIN,
                    index,
                    kind = ?header.kind(),
                    cell_width = header.outer_width(),
                    title = %text,
                    "setting header tooltip"
                );
                header.set_attribute(TITLE_ATTRIBUTE, &text);
            }
            None => {
                crate::tooltips_trace!(index, kind = ?header.kind(), "header left without tooltip");
            }
        }
    }
}

/// Hook registrations held while the plugin is enabled.
#[derive(Debug, Clone, Copy)]
struct Subscriptions {
    column_header: HookId,
    row_header: HookId,
}

/// Hover tooltips for grid header cells.
pub struct HeaderTooltips {
    host: Arc<dyn GridHost>,
    assigner: TooltipAssigner,
    subscriptions: Option<Subscriptions>,
    state: PluginState,
}

impl HeaderTooltips {
    /// Create the plugin for `host`. It starts disabled.
    pub fn new(host: Arc<dyn GridHost>) -> Self {
        Self {
            host,
            assigner: TooltipAssigner::default(),
            subscriptions: None,
            state: PluginState::Disabled,
        }
    }

    /// The normalized settings, while enabled.
    pub fn settings(&self) -> Option<PluginSettings> {
        *self.assigner.settings.read()
    }

    /// Apply the tooltip rule to one rendered header.
    ///
    /// This is what the registered hooks call. Without cached settings it
    /// does nothing.
    pub fn on_header_rendered(&self, index: i32, header: &dyn HeaderElement) {
        self.assigner.on_header_rendered(index, header);
    }

    /// Remove the hover text from every column header on every surface.
    pub fn clear_all_tooltips(&self) {
        let _span = PerfSpan::new(span_names::CLEANUP);
        let levels = self.host.column_header_levels();
        let removed = self
            .host
            .header_surfaces()
            .remove_attribute(levels, TITLE_ATTRIBUTE);
        tracing::debug!(
            target: targets::CLEANUP,
            levels,
            removed,
            "cleared header tooltips"
        );
    }

    fn register_hooks(&mut self) {
        let hooks = self.host.hooks();

        let assigner = self.assigner.clone();
        let column_header = hooks.after_get_column_header.connect(move |event| {
            assigner.on_header_rendered(event.index, event.header.as_ref());
        });

        let assigner = self.assigner.clone();
        let row_header = hooks.after_get_row_header.connect(move |event| {
            assigner.on_header_rendered(event.index, event.header.as_ref());
        });

        self.subscriptions = Some(Subscriptions {
            column_header,
            row_header,
        });
    }

    fn unregister_hooks(&mut self) {
        if let Some(subscriptions) = self.subscriptions.take() {
            let hooks = self.host.hooks();
            hooks
                .after_get_column_header
                .disconnect(subscriptions.column_header);
            hooks
                .after_get_row_header
                .disconnect(subscriptions.row_header);
        }
    }

    fn teardown(&mut self) {
        *self.assigner.settings.write() = None;
        self.clear_all_tooltips();
        self.unregister_hooks();
    }
}

impl GridPlugin for HeaderTooltips {
    fn plugin_key(&self) -> &'static str {
        PLUGIN_KEY
    }

    fn is_enabled(&self) -> bool {
        self.host.settings().header_tooltips_enabled()
    }

    fn state(&self) -> PluginState {
        self.state
    }

    fn enable_plugin(&mut self) {
        if self.state != PluginState::Disabled {
            crate::tooltips_trace!(state = ?self.state, "enable ignored");
            return;
        }

        let settings = self
            .host
            .settings()
            .header_tooltips
            .as_ref()
            .map(normalize)
            .unwrap_or_default();
        *self.assigner.settings.write() = Some(settings);

        self.register_hooks();
        self.state = PluginState::Enabled;
        tracing::debug!(
            target: targets::PLUGIN,
            rows = settings.rows,
            columns = settings.columns,
            only_trimmed = settings.only_trimmed,
            "header tooltips enabled"
        );
    }

    fn disable_plugin(&mut self) {
        if self.state == PluginState::Destroyed {
            crate::tooltips_trace!("disable after destroy ignored");
            return;
        }

        self.teardown();
        if self.state == PluginState::Enabled {
            tracing::debug!(target: targets::PLUGIN, "header tooltips disabled");
        }
        self.state = PluginState::Disabled;
    }

    fn destroy(&mut self) {
        if self.state == PluginState::Destroyed {
            return;
        }

        self.teardown();
        self.state = PluginState::Destroyed;
        tracing::debug!(target: targets::PLUGIN, "header tooltips destroyed");
    }
}

impl Drop for HeaderTooltips {
    fn drop(&mut self) {
        self.unregister_hooks();
    }
}
