//! Data table demo page.

use egui::Ui;
use gridform_widgets::{CellValue, Column, DataTable, RowKey, SelectionMode};

use crate::state::{DemoState, Person};

/// Renders the sample table with its demo toggles and a status line
/// reporting the last selection callback.
pub fn table_page(state: &mut DemoState, ui: &mut Ui) {
    ui.heading("Data Table");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.checkbox(&mut state.table_loading, "Loading");
        ui.checkbox(&mut state.table_empty, "Empty data");
        ui.checkbox(&mut state.single_selection, "Single selection");
    });
    ui.add_space(8.0);

    let DemoState {
        people,
        table,
        table_loading,
        table_empty,
        single_selection,
        last_selection,
        ..
    } = state;

    let columns = vec![
        Column::new("name", "Name", |p: &Person| CellValue::from(p.name.clone())).sortable(true),
        Column::new("age", "Age", |p: &Person| CellValue::from(p.age)).sortable(true),
        Column::new("joined", "Joined", |p: &Person| CellValue::from(p.joined)).sortable(true),
    ];
    let rows: &[Person] = if *table_empty { &[] } else { people };
    let mode = if *single_selection {
        SelectionMode::Single
    } else {
        SelectionMode::Multiple
    };

    DataTable::new("people_table", rows, &columns)
        .loading(*table_loading)
        .selectable(true)
        .selection_mode(mode)
        .row_key(|p: &Person, _| RowKey::Int(i64::from(p.id)))
        .on_row_select(|selected| {
            *last_selection = selected.iter().map(|p| p.name.clone()).collect();
            log::info!("selected rows: {last_selection:?}");
        })
        .show(ui, table);

    ui.add_space(8.0);
    if state.last_selection.is_empty() {
        ui.weak("No rows selected");
    } else {
        ui.label(format!("Selected: {}", state.last_selection.join(", ")));
    }
}
