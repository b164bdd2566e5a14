//! Sort and selection state for the data table.
//!
//! The table widget itself is stateless between frames; the caller
//! owns a [`TableState`] per table instance and passes it to
//! [`crate::DataTable::show`]. All transitions here are synchronous
//! and run inside the frame that observed the interaction.

use std::collections::HashSet;

use super::column::Column;
use crate::value::CellValue;

/// Direction of an active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The active sort, if any: which column and which direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

/// How row selection behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// A single selected row; selecting a row replaces the set.
    Single,
    /// Any number of selected rows; clicking toggles membership.
    #[default]
    Multiple,
}

/// Identity of one row, as produced by the caller's row-key function.
///
/// Falls back to the row's position in the sorted view when no key
/// function is given. Positional keys are not stable across data
/// reshuffles; callers that reorder or filter data while a selection
/// is active should supply a real key function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// Positional fallback.
    Index(usize),
    /// Caller-supplied numeric key.
    Int(i64),
    /// Caller-supplied text key.
    Text(String),
}

impl From<usize> for RowKey {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl From<i64> for RowKey {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for RowKey {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for RowKey {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Per-instance table state: the active sort and the selection set.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    sort: Option<SortState>,
    selected: HashSet<RowKey>,
}

impl TableState {
    /// Fresh state: no sort, empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state seeded with an initial sort.
    pub fn sorted_by(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            sort: Some(SortState {
                column: column.into(),
                direction,
            }),
            selected: HashSet::new(),
        }
    }

    /// The active sort, if any.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Header click on a sortable column.
    ///
    /// Repeated clicks on the same column cycle ascending →
    /// descending → none; clicking a different column starts over at
    /// ascending on that column.
    pub fn toggle_sort(&mut self, column_id: &str) {
        self.sort = match self.sort.take() {
            Some(prev) if prev.column == column_id => match prev.direction {
                SortDirection::Ascending => Some(SortState {
                    column: prev.column,
                    direction: SortDirection::Descending,
                }),
                // Third click clears the sort.
                SortDirection::Descending => None,
            },
            _ => Some(SortState {
                column: column_id.to_owned(),
                direction: SortDirection::Ascending,
            }),
        };
    }

    /// Row click.
    ///
    /// Multiple mode flips membership; single mode replaces the whole
    /// set with the clicked key. Clicking the already-selected row in
    /// single mode re-adds it, a no-op.
    pub fn toggle_row(&mut self, key: RowKey, mode: SelectionMode) {
        match mode {
            SelectionMode::Single => {
                self.selected.clear();
                self.selected.insert(key);
            }
            SelectionMode::Multiple => {
                if !self.selected.remove(&key) {
                    self.selected.insert(key);
                }
            }
        }
    }

    /// Header select-all click (multiple mode only; the widget never
    /// renders the affordance in single mode).
    ///
    /// Clears the set when it already holds as many keys as there are
    /// rows, otherwise replaces it with exactly `keys`. The check is a
    /// size comparison, not set containment, matching the observed
    /// behavior of the table this reimplements; see the
    /// `select_all_size_check_counts_stale_keys` test for the gap
    /// that implies.
    pub fn toggle_all(&mut self, keys: impl IntoIterator<Item = RowKey>, row_count: usize) {
        if self.selected.len() == row_count {
            self.selected.clear();
        } else {
            self.selected = keys.into_iter().collect();
        }
    }

    /// Drives the header checkbox: true iff there is data and the
    /// selection set is exactly as large as the data. A size
    /// comparison, like [`Self::toggle_all`].
    pub fn all_selected(&self, row_count: usize) -> bool {
        row_count > 0 && self.selected.len() == row_count
    }

    /// Whether `key` is in the selection set.
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selected.contains(key)
    }

    /// The current selection set.
    pub fn selected_keys(&self) -> &HashSet<RowKey> {
        &self.selected
    }

    /// Drops every selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}

/// The display order of `data` under `sort`, as indices into `data`.
///
/// No sort, or a sort keyed to a column id that is not in `columns`,
/// yields the identity order (the missing-column case is a silent
/// fallback, not an error). The underlying sort is stable, so tied
/// rows keep their prior relative order.
pub fn sorted_indices<T>(
    data: &[T],
    columns: &[Column<T>],
    sort: Option<&SortState>,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..data.len()).collect();

    let Some(sort) = sort else {
        return order;
    };
    let Some(column) = columns.iter().find(|c| c.id() == sort.column) else {
        log::debug!("sort column {:?} not found, rendering unsorted", sort.column);
        return order;
    };

    // Lift each row's sort key once, then sort the index vector.
    let values: Vec<CellValue> = data.iter().map(|row| column.value_of(row)).collect();
    order.sort_by(|&a, &b| {
        let ord = values[a].compare(&values[b]);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    order
}
