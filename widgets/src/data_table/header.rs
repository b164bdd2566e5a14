//! Header row rendering for the data table.

use egui::Ui;
use egui_extras::TableRow;

use super::column::Column;
use super::state::{SelectionMode, SortDirection, SortState};

/// Sort glyph for a column the table is currently sorted by, ascending.
const GLYPH_ASCENDING: &str = "\u{25b2}"; // ▲
/// Sort glyph for a column the table is currently sorted by, descending.
const GLYPH_DESCENDING: &str = "\u{25bc}"; // ▼
/// Sort glyph for a sortable column that is not the active sort.
const GLYPH_SORTABLE: &str = "\u{2195}"; // ↕

/// Interactions observed while rendering the header row.
#[derive(Default)]
pub(crate) struct HeaderEvents {
    /// Id of the sortable column whose header was clicked.
    pub sort_clicked: Option<String>,
    /// The select-all checkbox was clicked.
    pub toggle_all_clicked: bool,
}

/// Renders the header row: the selection column (when selectable)
/// followed by one cell per column descriptor. Returns the clicks
/// observed; the caller applies them to the table state after the
/// whole table has rendered.
pub(crate) fn render_header<T>(
    header: &mut TableRow<'_, '_>,
    columns: &[Column<T>],
    sort: Option<&SortState>,
    selectable: bool,
    selection_mode: SelectionMode,
    all_selected: bool,
) -> HeaderEvents {
    let mut events = HeaderEvents::default();

    if selectable {
        header.col(|ui| {
            // Select-all only exists in multiple mode; single mode
            // keeps the column for alignment but leaves it blank.
            if selection_mode == SelectionMode::Multiple
                && render_select_all_checkbox(ui, all_selected)
            {
                events.toggle_all_clicked = true;
            }
        });
    }

    for column in columns {
        header.col(|ui| {
            if column.is_sortable() {
                if render_sort_button(ui, column.title(), sort_glyph(column.id(), sort)) {
                    events.sort_clicked = Some(column.id().to_owned());
                }
            } else {
                ui.strong(column.title());
            }
        });
    }

    events
}

/// The glyph shown next to a sortable column's title.
fn sort_glyph(column_id: &str, sort: Option<&SortState>) -> &'static str {
    match sort {
        Some(s) if s.column == column_id => match s.direction {
            SortDirection::Ascending => GLYPH_ASCENDING,
            SortDirection::Descending => GLYPH_DESCENDING,
        },
        _ => GLYPH_SORTABLE,
    }
}

/// Renders the select-all checkbox. Returns `true` when clicked.
#[inline]
fn render_select_all_checkbox(ui: &mut Ui, all_selected: bool) -> bool {
    let mut checked = all_selected;
    ui.checkbox(&mut checked, "").clicked()
}

/// Renders a sortable header as a button. Returns `true` when clicked.
#[inline]
fn render_sort_button(ui: &mut Ui, title: &str, glyph: &str) -> bool {
    ui.button(format!("{title} {glyph}")).clicked()
}
