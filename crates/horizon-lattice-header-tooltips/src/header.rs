//! Header cells and the surfaces that hold them.
//!
//! The grid renders its column headers into several parallel surfaces: the
//! main table head, a clone for the frozen top overlay and, when configured,
//! a clone for the top-left corner overlay. Rows and cells of these surfaces
//! are aligned by position, so cell `(level, i)` of every surface shows the
//! same logical header.
//!
//! Header cells are owned by the grid and recreated every render pass. The
//! tooltip plugin only reads them and touches a single attribute, through
//! the [`HeaderElement`] trait.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Attribute that carries the native hover text.
pub const TITLE_ATTRIBUTE: &str = "title";

/// Default outer width of a [`SimpleHeader`] cell.
const DEFAULT_SECTION_SIZE: f32 = 100.0;

/// Whether a header labels a column or a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKind {
    /// A cell in one of the column header rows.
    Column,
    /// A cell in the row header column.
    Row,
}

/// The text-bearing node inside a header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderLabel {
    /// Visible label text.
    pub text: String,
    /// Rendered outer width of the label node.
    pub outer_width: f32,
}

impl HeaderLabel {
    pub fn new(text: impl Into<String>, outer_width: f32) -> Self {
        Self {
            text: text.into(),
            outer_width,
        }
    }
}

/// A rendered header cell.
///
/// Methods take `&self`: the cell lives in the grid's render tree and is
/// shared with it, so attribute writes go through interior mutability.
pub trait HeaderElement: Send + Sync {
    /// Whether this cell is a column or a row header.
    fn kind(&self) -> HeaderKind;

    /// The inner label node, if the cell has one.
    fn label(&self) -> Option<HeaderLabel>;

    /// Rendered outer width of the whole cell.
    fn outer_width(&self) -> f32;

    /// Read an attribute.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set an attribute, replacing any previous value.
    fn set_attribute(&self, name: &str, value: &str);

    /// Remove an attribute. Removing an absent attribute does nothing.
    fn remove_attribute(&self, name: &str);
}

/// An in-memory [`HeaderElement`] for headless grids and tests.
#[derive(Debug)]
pub struct SimpleHeader {
    kind: HeaderKind,
    label: Option<HeaderLabel>,
    outer_width: f32,
    attributes: Mutex<HashMap<String, String>>,
}

impl SimpleHeader {
    /// Create a header cell with `text` as its label.
    ///
    /// The label starts with zero width; see [`with_label_width`](Self::with_label_width).
    pub fn new(kind: HeaderKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            label: Some(HeaderLabel::new(text, 0.0)),
            outer_width: DEFAULT_SECTION_SIZE,
            attributes: Mutex::new(HashMap::new()),
        }
    }

    /// Create a header cell with no label node.
    pub fn without_label(kind: HeaderKind) -> Self {
        Self {
            kind,
            label: None,
            outer_width: DEFAULT_SECTION_SIZE,
            attributes: Mutex::new(HashMap::new()),
        }
    }

    /// Set the label's measured width.
    pub fn with_label_width(mut self, width: f32) -> Self {
        if let Some(label) = self.label.as_mut() {
            label.outer_width = width;
        }
        self
    }

    /// Set the cell's measured width.
    pub fn with_outer_width(mut self, width: f32) -> Self {
        self.outer_width = width;
        self
    }

    /// Shorthand for the current hover text.
    pub fn title(&self) -> Option<String> {
        self.attribute(TITLE_ATTRIBUTE)
    }
}

impl HeaderElement for SimpleHeader {
    fn kind(&self) -> HeaderKind {
        self.kind
    }

    fn label(&self) -> Option<HeaderLabel> {
        self.label.clone()
    }

    fn outer_width(&self) -> f32 {
        self.outer_width
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.lock().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .lock()
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.attributes.lock().remove(name);
    }
}

/// One row of header cells.
pub type HeaderRow = Vec<Arc<dyn HeaderElement>>;

/// One rendered table head: an ordered list of header rows.
#[derive(Clone, Default)]
pub struct HeaderSurface {
    rows: Vec<HeaderRow>,
}

impl HeaderSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a surface from its rows, top to bottom.
    pub fn from_rows(rows: Vec<HeaderRow>) -> Self {
        Self { rows }
    }

    /// Append a row.
    pub fn with_row(mut self, row: HeaderRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Number of rows actually rendered on this surface.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The row at `level`, if rendered.
    pub fn row(&self, level: usize) -> Option<&[Arc<dyn HeaderElement>]> {
        self.rows.get(level).map(Vec::as_slice)
    }

    /// The cell at `(level, index)`, if rendered.
    pub fn cell(&self, level: usize, index: usize) -> Option<&Arc<dyn HeaderElement>> {
        self.rows.get(level).and_then(|row| row.get(index))
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[HeaderRow] {
        &self.rows
    }
}

impl std::fmt::Debug for HeaderSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row_lengths: Vec<usize> = self.rows.iter().map(Vec::len).collect();
        f.debug_struct("HeaderSurface")
            .field("row_lengths", &row_lengths)
            .finish()
    }
}

/// Every surface the grid renders column headers into.
#[derive(Debug, Clone, Default)]
pub struct HeaderSurfaces {
    /// The main table head.
    pub main: HeaderSurface,
    /// The frozen top overlay's clone.
    pub top_overlay: Option<HeaderSurface>,
    /// The top-left corner overlay's clone, when a corner overlay exists.
    pub corner_overlay: Option<HeaderSurface>,
}

impl HeaderSurfaces {
    /// Surfaces with only the main table head.
    pub fn new(main: HeaderSurface) -> Self {
        Self {
            main,
            top_overlay: None,
            corner_overlay: None,
        }
    }

    pub fn with_top_overlay(mut self, surface: HeaderSurface) -> Self {
        self.top_overlay = Some(surface);
        self
    }

    pub fn with_corner_overlay(mut self, surface: HeaderSurface) -> Self {
        self.corner_overlay = Some(surface);
        self
    }

    /// Cells at `(level, index)` across all present surfaces.
    pub fn cells_at(
        &self,
        level: usize,
        index: usize,
    ) -> impl Iterator<Item = &Arc<dyn HeaderElement>> + '_ {
        self.iter().filter_map(move |surface| surface.cell(level, index))
    }

    /// Present surfaces: main, then top overlay, then corner overlay.
    pub fn iter(&self) -> impl Iterator<Item = &HeaderSurface> + '_ {
        std::iter::once(&self.main)
            .chain(self.top_overlay.as_ref())
            .chain(self.corner_overlay.as_ref())
    }

    /// Remove `attribute` from every cell in the first `levels` rows of
    /// every surface.
    ///
    /// Rows are visited in lockstep by position. Missing surfaces, rows and
    /// cells are skipped. Returns how many cells actually carried the
    /// attribute.
    pub fn remove_attribute(&self, levels: usize, attribute: &str) -> usize {
        let mut removed = 0;
        for level in 0..levels {
            let width = self
                .iter()
                .filter_map(|surface| surface.row(level))
                .map(<[_]>::len)
                .max()
                .unwrap_or(0);

            for index in 0..width {
                for cell in self.cells_at(level, index) {
                    if cell.attribute(attribute).is_some() {
                        cell.remove_attribute(attribute);
                        removed += 1;
                    }
                }
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(text: &str) -> Arc<dyn HeaderElement> {
        let header = SimpleHeader::new(HeaderKind::Column, text);
        header.set_attribute(TITLE_ATTRIBUTE, text);
        Arc::new(header)
    }

    #[test]
    fn test_simple_header_attributes() {
        let header = SimpleHeader::new(HeaderKind::Column, "Revenue");
        assert_eq!(header.title(), None);

        header.set_attribute(TITLE_ATTRIBUTE, "Revenue");
        assert_eq!(header.title(), Some("Revenue".to_string()));

        header.remove_attribute(TITLE_ATTRIBUTE);
        header.remove_attribute(TITLE_ATTRIBUTE);
        assert_eq!(header.title(), None);
    }

    #[test]
    fn test_simple_header_label() {
        let header = SimpleHeader::new(HeaderKind::Row, "Qty")
            .with_label_width(30.0)
            .with_outer_width(50.0);
        assert_eq!(header.label(), Some(HeaderLabel::new("Qty", 30.0)));
        assert_eq!(header.outer_width(), 50.0);

        let bare = SimpleHeader::without_label(HeaderKind::Row).with_label_width(30.0);
        assert_eq!(bare.label(), None);
    }

    #[test]
    fn test_surface_lookup() {
        let surface = HeaderSurface::new()
            .with_row(vec![titled("A"), titled("B")])
            .with_row(vec![titled("A1")]);

        assert_eq!(surface.row_count(), 2);
        assert_eq!(surface.row(0).map(<[_]>::len), Some(2));
        assert!(surface.cell(1, 0).is_some());
        assert!(surface.cell(1, 1).is_none());
        assert!(surface.cell(2, 0).is_none());
    }

    #[test]
    fn test_remove_attribute_across_surfaces() {
        let main = HeaderSurface::new().with_row(vec![titled("A"), titled("B")]);
        let overlay = HeaderSurface::new().with_row(vec![titled("A")]);
        let corner = HeaderSurface::new().with_row(vec![titled("A"), titled("B"), titled("C")]);
        let surfaces = HeaderSurfaces::new(main)
            .with_top_overlay(overlay)
            .with_corner_overlay(corner);

        assert_eq!(surfaces.remove_attribute(1, TITLE_ATTRIBUTE), 6);
        for surface in surfaces.iter() {
            for cell in surface.rows().iter().flatten() {
                assert_eq!(cell.attribute(TITLE_ATTRIBUTE), None);
            }
        }

        // Second pass finds nothing left
        assert_eq!(surfaces.remove_attribute(1, TITLE_ATTRIBUTE), 0);
    }

    #[test]
    fn test_remove_attribute_skips_missing_rows() {
        let main = HeaderSurface::new()
            .with_row(vec![titled("A")])
            .with_row(vec![titled("A1")]);
        let overlay = HeaderSurface::new().with_row(vec![titled("A")]);
        let surfaces = HeaderSurfaces::new(main).with_top_overlay(overlay);

        // Three configured levels, only two rendered on main and one on the overlay
        assert_eq!(surfaces.remove_attribute(3, TITLE_ATTRIBUTE), 3);
    }

    #[test]
    fn test_remove_attribute_respects_level_count() {
        let main = HeaderSurface::new()
            .with_row(vec![titled("A")])
            .with_row(vec![titled("A1")]);
        let surfaces = HeaderSurfaces::new(main);

        assert_eq!(surfaces.remove_attribute(1, TITLE_ATTRIBUTE), 1);
        assert!(surfaces.main.cell(1, 0).unwrap().attribute(TITLE_ATTRIBUTE).is_some());
    }
}
