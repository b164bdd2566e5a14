//! Column descriptors for the data table.

use egui::Ui;

use crate::value::CellValue;

/// Custom cell renderer: receives the cell value, the full row, and the
/// row's position in the current (sorted) view.
pub type CellRenderer<T> = Box<dyn Fn(&mut Ui, &CellValue, &T, usize)>;

/// Describes how one table column is labeled, sourced, sorted, and
/// rendered.
///
/// Ids are assumed unique within a column set; this is not enforced
/// (a duplicate gets a log warning at render time, nothing more).
pub struct Column<T> {
    id: String,
    title: String,
    accessor: Box<dyn Fn(&T) -> CellValue>,
    sortable: bool,
    renderer: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    /// A new column reading its cell value through `accessor`.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            accessor: Box::new(accessor),
            sortable: false,
            renderer: None,
        }
    }

    /// Enable header-click sorting on this column.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Replace the default label renderer for this column's cells.
    pub fn renderer(mut self, renderer: impl Fn(&mut Ui, &CellValue, &T, usize) + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Unique column id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Header label.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether header clicks sort by this column.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// The cell value this column reads from `row`.
    pub fn value_of(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    /// Renders one cell, honoring a custom renderer when set.
    pub(crate) fn render_cell(&self, ui: &mut Ui, row: &T, row_index: usize) {
        let value = self.value_of(row);
        match &self.renderer {
            Some(render) => render(ui, &value, row, row_index),
            None => {
                ui.label(value.display_text());
            }
        }
    }
}
