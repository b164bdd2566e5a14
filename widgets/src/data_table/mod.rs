//! Sortable, selectable data table.
//!
//! The widget is split into focused modules the same way the body of
//! the table is split visually:
//! - `column`: column descriptors
//! - `state`: the sort/selection reducer, owned by the caller
//! - `header`: header row rendering (sort buttons, select-all)
//! - `row`: body row rendering (selection cells, data cells, skeletons)
//!
//! The caller owns the data and a [`TableState`] per table instance;
//! the widget reads the data for one frame, reports interactions into
//! the state, and hands selection snapshots back through
//! [`DataTable::on_row_select`] or [`DataTableResponse`].

mod column;
mod header;
mod row;
mod state;

use std::collections::HashSet;

use egui::{Align, Frame, Layout, Margin, RichText, Stroke, Ui};
use egui_extras::TableBuilder;

pub use column::{CellRenderer, Column};
pub use state::{
    RowKey, SelectionMode, SortDirection, SortState, TableState, sorted_indices,
};

use header::HeaderEvents;
use row::{RowData, render_data_row, render_skeleton_row};

/// Width of the selection column.
const SELECT_COLUMN_WIDTH: f32 = 28.0;
/// Minimum width of a data column.
const DATA_COLUMN_MIN_WIDTH: f32 = 60.0;
/// Height of the header row.
const HEADER_HEIGHT: f32 = 26.0;
/// Height of one body row.
const ROW_HEIGHT: f32 = 26.0;
/// Message shown when the table has no rows, unless overridden.
const DEFAULT_EMPTY_MESSAGE: &str = "No data to display";

/// What one call to [`DataTable::show`] reports back.
pub struct DataTableResponse<'a, T> {
    /// The selected records, filtered from the currently sorted view,
    /// present only on frames where the selection set changed. The
    /// same snapshot is passed to [`DataTable::on_row_select`].
    pub selection_changed: Option<Vec<&'a T>>,
}

/// A data table over caller-owned rows.
///
/// Configuration follows the usual egui builder shape; render with
/// [`Self::show`], passing the [`TableState`] the caller keeps for
/// this table instance.
pub struct DataTable<'a, T> {
    id_salt: egui::Id,
    data: &'a [T],
    columns: &'a [Column<T>],
    loading: bool,
    selectable: bool,
    selection_mode: SelectionMode,
    row_key: Option<Box<dyn Fn(&T, usize) -> RowKey + 'a>>,
    empty_message: String,
    on_row_select: Option<Box<dyn FnMut(&[&T]) + 'a>>,
}

impl<'a, T> DataTable<'a, T> {
    /// A new table over `data`, described by `columns`.
    pub fn new(id_salt: impl std::hash::Hash, data: &'a [T], columns: &'a [Column<T>]) -> Self {
        Self {
            id_salt: egui::Id::new(id_salt),
            data,
            columns,
            loading: false,
            selectable: false,
            selection_mode: SelectionMode::default(),
            row_key: None,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_owned(),
            on_row_select: None,
        }
    }

    /// Render skeleton placeholder rows instead of data.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Enable row selection.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Single or multiple selection; defaults to multiple.
    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// How to uniquely identify a row.
    ///
    /// Without a key function, rows are identified by their position
    /// in the sorted view, which silently shifts identities when the
    /// caller reorders or filters the data while a selection is
    /// active. Supply a key derived from the record itself whenever
    /// the data can change under a live selection.
    pub fn row_key(mut self, key: impl Fn(&T, usize) -> RowKey + 'a) -> Self {
        self.row_key = Some(Box::new(key));
        self
    }

    /// Message for the empty state.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Called synchronously, within [`Self::show`], each time the
    /// selection set changes, with the selected records from the
    /// currently sorted view.
    pub fn on_row_select(mut self, callback: impl FnMut(&[&T]) + 'a) -> Self {
        self.on_row_select = Some(Box::new(callback));
        self
    }

    /// Renders the table and applies any interaction to `state`.
    pub fn show(self, ui: &mut Ui, state: &mut TableState) -> DataTableResponse<'a, T> {
        let Self {
            id_salt,
            data,
            columns,
            loading,
            selectable,
            selection_mode,
            row_key,
            empty_message,
            mut on_row_select,
        } = self;

        warn_on_duplicate_ids(columns);

        let key_for = |record: &T, position: usize| -> RowKey {
            match &row_key {
                Some(key) => key(record, position),
                None => RowKey::Index(position),
            }
        };

        let order = sorted_indices(data, columns, state.sort());
        let all_selected = selectable && state.all_selected(data.len());
        let cell_count = columns.len() + usize::from(selectable);

        let mut header_events = HeaderEvents::default();
        let mut toggled_row: Option<RowKey> = None;

        Frame::NONE
            .stroke(Stroke::new(
                1.0,
                ui.visuals().widgets.noninteractive.bg_stroke.color,
            ))
            .inner_margin(Margin::same(1))
            .show(ui, |ui| {
                let mut builder = TableBuilder::new(ui)
                    .id_salt(id_salt)
                    .striped(true)
                    .cell_layout(Layout::left_to_right(Align::Center));
                if selectable {
                    builder = builder.column(egui_extras::Column::exact(SELECT_COLUMN_WIDTH));
                }
                for _ in columns {
                    builder = builder
                        .column(egui_extras::Column::remainder().at_least(DATA_COLUMN_MIN_WIDTH));
                }

                builder
                    .header(HEADER_HEIGHT, |mut header_row| {
                        header_events = header::render_header(
                            &mut header_row,
                            columns,
                            state.sort(),
                            selectable,
                            selection_mode,
                            all_selected,
                        );
                    })
                    .body(|body| {
                        if loading {
                            let count = skeleton_row_count(data.len());
                            body.rows(ROW_HEIGHT, count, |mut table_row| {
                                render_skeleton_row(&mut table_row, cell_count);
                            });
                        } else {
                            body.rows(ROW_HEIGHT, order.len(), |mut table_row| {
                                let position = table_row.index();
                                let record = &data[order[position]];
                                let key = key_for(record, position);
                                let is_selected = selectable && state.is_selected(&key);
                                table_row.set_selected(is_selected);
                                let row_data = RowData {
                                    record,
                                    row_index: position,
                                    key: &key,
                                    is_selected,
                                    selectable,
                                    selection_mode,
                                };
                                if let Some(key) =
                                    render_data_row(&mut table_row, columns, &row_data)
                                {
                                    toggled_row = Some(key);
                                }
                            });
                        }
                    });

                // Empty state: one message row spanning every column.
                if !loading && order.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(24.0);
                        ui.label(RichText::new(&empty_message).weak());
                        ui.add_space(24.0);
                    });
                }
            });

        if let Some(column_id) = header_events.sort_clicked {
            state.toggle_sort(&column_id);
        }

        let mut selection_mutated = false;
        if let Some(key) = toggled_row {
            state.toggle_row(key, selection_mode);
            selection_mutated = true;
        }
        if header_events.toggle_all_clicked && selection_mode == SelectionMode::Multiple {
            let keys = data
                .iter()
                .enumerate()
                .map(|(index, record)| key_for(record, index));
            state.toggle_all(keys, data.len());
            selection_mutated = true;
        }

        let selection_changed =
            selection_mutated.then(|| selection_snapshot(data, &order, state, &key_for));

        if let (Some(rows), Some(callback)) = (&selection_changed, on_row_select.as_mut()) {
            callback(rows);
        }

        DataTableResponse { selection_changed }
    }
}

/// The records whose keys are in the selection set, in the order of
/// the currently sorted view. This is the payload handed to
/// [`DataTable::on_row_select`].
fn selection_snapshot<'a, T>(
    data: &'a [T],
    order: &[usize],
    state: &TableState,
    key_for: &impl Fn(&T, usize) -> RowKey,
) -> Vec<&'a T> {
    order
        .iter()
        .enumerate()
        .filter(|&(position, &index)| state.is_selected(&key_for(&data[index], position)))
        .map(|(_, &index)| &data[index])
        .collect()
}

/// How many skeleton rows the loading state shows: tracks the data
/// length, bounded to 3..=6, with 3 as the no-data default.
fn skeleton_row_count(data_len: usize) -> usize {
    if data_len == 0 { 3 } else { data_len.clamp(3, 6) }
}

/// Column ids are assumed unique; a duplicate is not an error, but it
/// makes sort targeting ambiguous, so say so in the log.
fn warn_on_duplicate_ids<T>(columns: &[Column<T>]) {
    let mut seen = HashSet::new();
    for column in columns {
        if !seen.insert(column.id()) {
            log::warn!("duplicate data table column id {:?}", column.id());
        }
    }
}

#[cfg(test)]
mod data_table_tests {
    use super::{
        Column, RowKey, SelectionMode, SortDirection, TableState, selection_snapshot,
        skeleton_row_count, sorted_indices,
    };
    use crate::value::CellValue;

    struct Person {
        name: &'static str,
        age: u32,
    }

    fn people() -> Vec<Person> {
        vec![
            Person {
                name: "Charlie",
                age: 28,
            },
            Person {
                name: "Alice",
                age: 25,
            },
            Person {
                name: "Bob",
                age: 30,
            },
            Person {
                name: "Dave",
                age: 31,
            },
        ]
    }

    fn name_column() -> Vec<Column<Person>> {
        vec![Column::new("name", "Name", |p: &Person| CellValue::from(p.name)).sortable(true)]
    }

    fn key_by_name(p: &Person, _position: usize) -> RowKey {
        RowKey::from(p.name)
    }

    #[test]
    fn skeleton_row_count_is_bounded() {
        assert_eq!(skeleton_row_count(0), 3);
        assert_eq!(skeleton_row_count(1), 3);
        assert_eq!(skeleton_row_count(4), 4);
        assert_eq!(skeleton_row_count(6), 6);
        assert_eq!(skeleton_row_count(50), 6);
    }

    #[test]
    fn snapshot_follows_sorted_view_order() {
        let data = people();
        let columns = name_column();
        let mut state = TableState::sorted_by("name", SortDirection::Ascending);
        state.toggle_row(RowKey::from("Charlie"), SelectionMode::Multiple);
        state.toggle_row(RowKey::from("Alice"), SelectionMode::Multiple);

        let order = sorted_indices(&data, &columns, state.sort());
        let snapshot = selection_snapshot(&data, &order, &state, &key_by_name);
        let names: Vec<&str> = snapshot.iter().map(|p| p.name).collect();

        // Sorted view order, not click order.
        assert_eq!(names, ["Alice", "Charlie"]);
    }

    #[test]
    fn toggle_row_snapshot_reports_full_records() {
        let data = people();
        let columns = name_column();
        let mut state = TableState::new();

        state.toggle_row(RowKey::from("Bob"), SelectionMode::Multiple);
        let order = sorted_indices(&data, &columns, state.sort());
        let snapshot = selection_snapshot(&data, &order, &state, &key_by_name);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].age, 30);

        // Toggling the same row again returns an empty snapshot.
        state.toggle_row(RowKey::from("Bob"), SelectionMode::Multiple);
        let snapshot = selection_snapshot(&data, &order, &state, &key_by_name);
        assert!(snapshot.is_empty());
    }

    #[test]
    fn select_all_snapshot_covers_every_record() {
        let data = people();
        let columns = name_column();
        let mut state = TableState::new();

        let keys: Vec<RowKey> = data
            .iter()
            .enumerate()
            .map(|(i, p)| key_by_name(p, i))
            .collect();
        state.toggle_all(keys.clone(), data.len());

        let order = sorted_indices(&data, &columns, state.sort());
        assert_eq!(selection_snapshot(&data, &order, &state, &key_by_name).len(), 4);

        // Second activation while everything is selected clears.
        state.toggle_all(keys, data.len());
        assert!(selection_snapshot(&data, &order, &state, &key_by_name).is_empty());
    }

    #[test]
    fn positional_keys_follow_the_sorted_view() {
        let data = people();
        let columns = name_column();
        let mut state = TableState::sorted_by("name", SortDirection::Ascending);

        // Position 0 in the sorted view is Alice, not Charlie.
        state.toggle_row(RowKey::Index(0), SelectionMode::Multiple);
        let order = sorted_indices(&data, &columns, state.sort());
        let snapshot = selection_snapshot(&data, &order, &state, &|_, position| {
            RowKey::Index(position)
        });
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name, "Alice");
    }
}
