//! Record kinds kept by the planner.
//!
//! A `Record` is the small descriptor the generic store, codec and CRUD
//! controller need: how a record is named, validated, ordered, written to a
//! line of the data file, shown in a table, and collected from the user.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::io;

use crate::config::DELIMITER;
use crate::error::StoreError;
use crate::input::{self, Prompter, Request};

mod location;
mod transport;

pub use location::{Axis, LocationRecord, LATITUDE, LONGITUDE};
pub use transport::TransportRecord;

/// Behaviour shared by every record kind.
pub trait Record: Clone + PartialEq + Debug {
    /// Human-readable kind, e.g. "Location".
    const KIND: &'static str;

    /// Number of fields in one line of the data file.
    const FIELD_COUNT: usize;

    /// Column headers for the table view (without the index column).
    const HEADERS: &'static [&'static str];

    fn name(&self) -> &str;

    /// Check every field against its range. Name rules live in the store.
    fn validate(&self) -> Result<(), StoreError>;

    /// Display and selection order.
    fn canonical_cmp(&self, other: &Self) -> Ordering;

    /// Fields in file order.
    fn to_fields(&self) -> Vec<String>;

    /// Parse exactly `FIELD_COUNT` fields; `Err` carries the reason.
    fn from_fields(fields: &[&str]) -> Result<Self, String>;

    /// Formatted cells matching `HEADERS`.
    fn table_row(&self) -> Vec<String>;

    /// Collect a record from the user. `name_free` says whether a name may be
    /// used. With `current` set, every field is skippable and keeps its value.
    fn prompt(
        io: &mut dyn Prompter,
        name_free: &dyn Fn(&str) -> bool,
        current: Option<&Self>,
    ) -> io::Result<Self>;
}

/// True for names that can be stored and round-tripped through the file.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(DELIMITER) && !name.contains(['\n', '\r'])
}

/// Ask for a record name that is valid and not taken.
pub(crate) fn prompt_name(
    io: &mut dyn Prompter,
    kind: &str,
    name_free: &dyn Fn(&str) -> bool,
    current: Option<&str>,
) -> io::Result<String> {
    let req = Request::new(
        format!("Please input new {kind}'s name"),
        "name",
        format!(
            "Please do not leave the name blank, reuse an existing name or use the character '{DELIMITER}'"
        ),
    );
    input::field(
        io,
        req,
        current.map(str::to_string),
        input::text,
        |name: &String| is_valid_name(name) && name_free(name),
    )
}

/// Parse a numeric field read from the data file.
pub(crate) fn parse_stored(field: &str, what: &str) -> Result<f64, String> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("{what} '{field}' is not a number"))
}
