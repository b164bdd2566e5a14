#![warn(clippy::all, rust_2018_idioms)]

//! Demo application wiring the gridform widgets together: an input
//! field gallery and a sortable, selectable sample table.

pub mod app;
pub mod pages;
pub mod state;

pub use app::GridformApp;
