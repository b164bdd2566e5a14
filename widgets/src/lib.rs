#![warn(clippy::all, rust_2018_idioms)]

//! Presentational widgets for egui: a labeled text input field and a
//! sortable, selectable data table.
//!
//! Both widgets are stateless between frames apart from explicitly
//! owned local state: the caller keeps a [`TableState`] per table
//! (sort and selection), and the input field keeps only its
//! password-visibility flag in egui temp memory. Data always flows
//! one way: the caller owns the records and the string value, the
//! widgets report interactions back through responses and callbacks.

pub mod data_table;
pub mod input_field;
pub mod value;

pub use data_table::{
    CellRenderer, Column, DataTable, DataTableResponse, RowKey, SelectionMode, SortDirection,
    SortState, TableState, sorted_indices,
};
pub use input_field::{InputField, InputFieldResponse, InputKind, InputSize, InputVariant};
pub use value::CellValue;
