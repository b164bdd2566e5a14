//! Demo application state.
//!
//! The demo owns everything the widgets render from: the shared text
//! values for the input gallery, the sample rows, and the table's
//! sort/selection state. The widgets only ever borrow this for one
//! frame.

use chrono::{DateTime, TimeZone, Utc};
use gridform_widgets::TableState;

/// Which demo page is active. Stands in for the routes of a
/// multi-page app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Landing page, nothing selected yet.
    #[default]
    Home,
    InputField,
    DataTable,
}

/// One sample row for the table demo.
#[derive(Debug, Clone)]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub joined: DateTime<Utc>,
}

/// The main application state.
pub struct DemoState {
    /// Active page.
    pub page: Page,
    /// Value shared by most inputs in the gallery, like the original
    /// demo shares one bound value.
    pub text: String,
    /// Value of the password example.
    pub password: String,
    /// Value of the disabled example (never editable).
    pub disabled_text: String,
    /// Sample rows for the table page.
    pub people: Vec<Person>,
    /// Sort/selection state of the demo table.
    pub table: TableState,
    /// Demo toggle: render the table's loading state.
    pub table_loading: bool,
    /// Demo toggle: feed the table an empty data set.
    pub table_empty: bool,
    /// Demo toggle: single instead of multiple selection.
    pub single_selection: bool,
    /// Names from the most recent selection callback.
    pub last_selection: Vec<String>,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            page: Page::default(),
            text: String::new(),
            password: String::new(),
            disabled_text: String::new(),
            people: sample_people(),
            table: TableState::new(),
            table_loading: false,
            table_empty: false,
            single_selection: false,
            last_selection: Vec::new(),
        }
    }
}

/// The sample data set of the original demo, extended with a joined
/// date so the table exercises instant-valued cells.
fn sample_people() -> Vec<Person> {
    vec![
        Person {
            id: 1,
            name: "Alice".to_owned(),
            age: 25,
            joined: date(2021, 3, 14),
        },
        Person {
            id: 2,
            name: "Bob".to_owned(),
            age: 30,
            joined: date(2019, 11, 2),
        },
        Person {
            id: 3,
            name: "Charlie".to_owned(),
            age: 28,
            joined: date(2022, 7, 30),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}
