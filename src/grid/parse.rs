// SPDX-License-Identifier: GPL-3.0-or-later
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::Context as _;
use ndarray::Array2;
use tracing::{debug, trace};

use super::DepthGrid;
use crate::error::GridError;

/// Characters that may decorate a value in the input, anywhere within it.
const DECORATIONS: &[char] = &['[', ']', ' '];

/// Strip the bracket and space decorations from a single value.
///
/// Every occurrence is removed, not just leading and trailing ones. Any other leading or
/// trailing whitespace (like the `\r` from CRLF line endings) is trimmed as well.
pub(crate) fn clean_token(token: &str) -> Cow<'_, str> {
    let token = token.trim();
    if token.contains(DECORATIONS) {
        Cow::Owned(token.replace(DECORATIONS, "").trim().to_string())
    } else {
        Cow::Borrowed(token)
    }
}

/// Parse the text of a depth grid.
///
/// Each line is one row, with values separated by commas. All rows must have the same number
/// of values as the first one.
pub(crate) fn parse_str(text: &str) -> Result<DepthGrid, GridError> {
    let mut values = Vec::new();
    let mut width = None;
    let mut height = 0;
    for (row, line) in text.lines().enumerate() {
        let row_start = values.len();
        for (column, token) in line.split(',').enumerate() {
            let cleaned = clean_token(token);
            let value = cleaned
                .parse::<f64>()
                .map_err(|source| GridError::InvalidValue {
                    row,
                    column,
                    token: cleaned.to_string(),
                    source,
                })?;
            values.push(value);
        }
        let found = values.len() - row_start;
        match width {
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(GridError::RaggedRow {
                    row,
                    expected,
                    found,
                })
            }
            Some(_) => (),
        }
        trace!(row, width = found, "parsed depth row");
        height += 1;
    }
    let width = width.ok_or(GridError::Empty)?;
    Ok(Array2::from_shape_vec((height, width), values)?)
}

/// Read and parse a depth grid from a file.
pub(crate) fn parse_file(path: &Path) -> anyhow::Result<DepthGrid> {
    debug!(path = ?path, "Reading depth grid");
    let text = fs::read_to_string(path)
        .with_context(|| format!("Unable to read depth grid from {}", path.display()))?;
    let grid = parse_str(&text)
        .with_context(|| format!("Unable to parse depth grid in {}", path.display()))?;
    let (rows, columns) = grid.dim();
    debug!(rows, columns, "Parsed depth grid");
    Ok(grid)
}
