//! Ordering policy for column sorts.
//!
//! A column sorts numerically when every value in it looks like a number
//! (ASCII digits with optional thousands-separator commas); otherwise the
//! whole column compares lexicographically. Deciding the mode per column
//! rather than per pair keeps the comparison a total order.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::column::SortDirection;
use crate::row::Row;

/// Non-empty strings of ASCII digits and thousands-separator commas.
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9,]+$").expect("Invalid regex pattern"));

/// How a column's values compare, decided once per sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortMode {
    Numeric,
    Lexicographic,
}

/// Numeric only when every value in the column is numeric-looking.
pub(crate) fn column_mode<'a>(mut values: impl Iterator<Item = &'a str>) -> SortMode {
    if values.all(|value| NUMERIC.is_match(value)) {
        SortMode::Numeric
    } else {
        SortMode::Lexicographic
    }
}

/// Compare two raw values under the given mode and direction.
pub(crate) fn compare(a: &str, b: &str, mode: SortMode, direction: SortDirection) -> Ordering {
    let ordering = match mode {
        SortMode::Numeric => compare_numeric(a, b),
        SortMode::Lexicographic => a.cmp(b),
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Reorder rows in place by a column's values under the given direction.
///
/// The sort is stable: equal values keep their relative order.
pub(crate) fn sort_rows(rows: &mut [Row], column_id: &str, direction: SortDirection) {
    let mode = column_mode(rows.iter().map(|row| row.value(column_id).unwrap_or_default()));
    log::trace!("[sort] column {column_id}: {mode:?} {direction:?}");
    rows.sort_by(|a, b| {
        let left = a.value(column_id).unwrap_or_default();
        let right = b.value(column_id).unwrap_or_default();
        compare(left, right, mode, direction)
    });
}

/// Exact magnitude comparison of comma-separated digit strings.
///
/// Commas and leading zeros are stripped; a shorter digit string is the
/// smaller number, equal lengths compare digit by digit. No float
/// round-trip, so values beyond 2^53 still order correctly.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = digits(a);
    let b = digits(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(&b))
}

fn digits(value: &str) -> String {
    let stripped: String = value.chars().filter(|c| *c != ',').collect();
    stripped.trim_start_matches('0').to_string()
}
