//! Text normalization and row/cell splitting
//!
//! Turns raw file text into a grid of trimmed string cells using the
//! schema's configured delimiters. Marker characters are stripped from
//! the whole text first; this is unconditional, so a marker character
//! appearing inside a data value is removed as well. Rows in the
//! resulting grid may have differing lengths; later stages only index
//! the first `field_count` columns.

use crate::schema::Schema;
use std::borrow::Cow;
use tracing::debug;

/// Split raw text into a grid of trimmed cells
pub fn tokenize(text: &str, schema: &Schema) -> Vec<Vec<String>> {
    let text = remove_markers(text, schema.markers());
    let text = text.trim();

    let grid: Vec<Vec<String>> = schema
        .row_delimiter()
        .split(text)
        .map(|row| split_row(row, schema))
        .collect();

    debug!("Tokenized {} rows", grid.len());
    grid
}

/// Strip every occurrence of each marker character from the text
fn remove_markers<'a>(text: &'a str, markers: &[char]) -> Cow<'a, str> {
    if markers.is_empty() || !text.contains(markers) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(|c| !markers.contains(c)).collect())
}

fn split_row(row: &str, schema: &Schema) -> Vec<String> {
    schema
        .cell_delimiter()
        .split(row.trim())
        .map(|cell| cell.trim().to_string())
        .collect()
}
