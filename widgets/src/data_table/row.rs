//! Body row rendering for the data table.

use egui::{Sense, Ui, vec2};
use egui_extras::TableRow;

use super::column::Column;
use super::state::{RowKey, SelectionMode};

/// Widest a skeleton placeholder bar gets.
const SKELETON_BAR_MAX_WIDTH: f32 = 120.0;
/// Height of a skeleton placeholder bar.
const SKELETON_BAR_HEIGHT: f32 = 10.0;

/// Everything one body row needs to render.
pub(crate) struct RowData<'r, T> {
    pub record: &'r T,
    /// Position in the current (sorted) view.
    pub row_index: usize,
    pub key: &'r RowKey,
    pub is_selected: bool,
    pub selectable: bool,
    pub selection_mode: SelectionMode,
}

/// Renders one data row: the selection cell (when selectable) followed
/// by one cell per column. Returns the row's key when its selection
/// affordance was clicked.
pub(crate) fn render_data_row<T>(
    row: &mut TableRow<'_, '_>,
    columns: &[Column<T>],
    data: &RowData<'_, T>,
) -> Option<RowKey> {
    let mut toggled = None;

    if data.selectable {
        row.col(|ui| {
            if render_selection_cell(ui, data.is_selected, data.selection_mode) {
                toggled = Some(data.key.clone());
            }
        });
    }

    for column in columns {
        row.col(|ui| {
            column.render_cell(ui, data.record, data.row_index);
        });
    }

    toggled
}

/// Renders the per-row selection affordance: a checkbox in multiple
/// mode, a radio button in single mode. Returns `true` when clicked.
#[inline]
fn render_selection_cell(ui: &mut Ui, is_selected: bool, selection_mode: SelectionMode) -> bool {
    match selection_mode {
        SelectionMode::Multiple => {
            let mut checked = is_selected;
            ui.checkbox(&mut checked, "").clicked()
        }
        SelectionMode::Single => ui.radio(is_selected, "").clicked(),
    }
}

/// Renders one loading-state placeholder row: a muted bar per cell.
pub(crate) fn render_skeleton_row(row: &mut TableRow<'_, '_>, cell_count: usize) {
    for _ in 0..cell_count {
        row.col(render_skeleton_cell);
    }
}

#[inline]
fn render_skeleton_cell(ui: &mut Ui) {
    let width = ui.available_width().min(SKELETON_BAR_MAX_WIDTH);
    let (rect, _) = ui.allocate_exact_size(vec2(width, SKELETON_BAR_HEIGHT), Sense::hover());
    ui.painter()
        .rect_filled(rect, 3.0, ui.visuals().widgets.noninteractive.bg_fill);
}
