//! An in-memory grid host.
//!
//! [`SimpleGrid`] implements [`GridHost`] without any rendering: it stores
//! the settings, the header hooks and the header cells, and [`render`]
//! replays a render pass by firing the header hooks for every cell. Useful
//! for headless hosts and for exercising plugins in tests.
//!
//! [`render`]: SimpleGrid::render

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::GridSettings;
use crate::header::{HeaderElement, HeaderSurfaces};
use crate::hooks::HeaderHooks;
use crate::plugin::GridHost;

/// A headless grid holding pre-built header cells.
pub struct SimpleGrid {
    settings: RwLock<GridSettings>,
    hooks: HeaderHooks,
    surfaces: RwLock<HeaderSurfaces>,
    row_headers: RwLock<Vec<Arc<dyn HeaderElement>>>,
}

impl SimpleGrid {
    pub fn new(settings: GridSettings, surfaces: HeaderSurfaces) -> Self {
        Self {
            settings: RwLock::new(settings),
            hooks: HeaderHooks::new(),
            surfaces: RwLock::new(surfaces),
            row_headers: RwLock::new(Vec::new()),
        }
    }

    /// Set the row header cells, top to bottom.
    pub fn with_row_headers(self, row_headers: Vec<Arc<dyn HeaderElement>>) -> Self {
        *self.row_headers.write() = row_headers;
        self
    }

    /// Replace the grid's settings.
    ///
    /// Plugins are not notified; call their `on_update_settings` afterwards.
    pub fn update_settings(&self, settings: GridSettings) {
        *self.settings.write() = settings;
    }

    /// Replace the column header surfaces, as a re-render would.
    pub fn set_header_surfaces(&self, surfaces: HeaderSurfaces) {
        *self.surfaces.write() = surfaces;
    }

    /// Replace the row header cells.
    pub fn set_row_headers(&self, row_headers: Vec<Arc<dyn HeaderElement>>) {
        *self.row_headers.write() = row_headers;
    }

    /// Fire the header hooks for every rendered header cell.
    ///
    /// Column headers on every surface are reported with their position in
    /// the row, row headers with their position in the row header column.
    pub fn render(&self) {
        let surfaces = self.surfaces.read().clone();
        let row_headers = self.row_headers.read().clone();

        for surface in surfaces.iter() {
            for row in surface.rows() {
                for (index, header) in (0i32..).zip(row) {
                    self.hooks.fire_column_header(index, header.clone());
                }
            }
        }

        for (index, header) in (0i32..).zip(&row_headers) {
            self.hooks.fire_row_header(index, header.clone());
        }
    }
}

impl GridHost for SimpleGrid {
    fn settings(&self) -> GridSettings {
        self.settings.read().clone()
    }

    fn hooks(&self) -> &HeaderHooks {
        &self.hooks
    }

    fn header_surfaces(&self) -> HeaderSurfaces {
        self.surfaces.read().clone()
    }
}
