//! Demo pages, one per widget.

mod input_page;
mod table_page;

pub use input_page::input_page;
pub use table_page::table_page;
