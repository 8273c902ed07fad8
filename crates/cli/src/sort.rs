// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use numutils_sort::{sort_rows, sort_rows_descending, SortOption};
use std::num::ParseIntError;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ParseRowsError {
    #[error("row {row}: '{value}' is not an integer")]
    InvalidElement {
        row: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parses rows separated by `;` whose elements are separated by `,`, eg. `5,2,9; -6; 0,1`.
///
/// A segment with no elements is an empty row. Blank input holds no rows.
pub fn parse_rows(input: &str) -> Result<Vec<Vec<i32>>, ParseRowsError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(';')
        .enumerate()
        .map(|(row, segment)| {
            segment
                .split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(|value| {
                    value
                        .parse::<i32>()
                        .map_err(|source| ParseRowsError::InvalidElement {
                            row,
                            value: value.to_string(),
                            source,
                        })
                })
                .collect::<Result<Vec<i32>, _>>()
        })
        .collect()
}

pub fn execute(mut rows: Vec<Vec<i32>>, option: SortOption, descending: bool) -> String {
    info!(rows = rows.len(), %option, descending, "sorting");

    if descending {
        sort_rows_descending(&mut rows, option);
    } else {
        sort_rows(&mut rows, option);
    }

    rows.iter()
        .map(|row| format!("{row:?}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows() {
        let rows = parse_rows("5, 2, 9; -6;; 0,1").unwrap();
        assert_eq!(rows, vec![vec![5, 2, 9], vec![-6], vec![], vec![0, 1]]);
    }

    #[test]
    fn test_parse_blank() {
        assert!(parse_rows("  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_element() {
        let err = parse_rows("1,2; 3,x").unwrap_err();
        assert!(matches!(
            err,
            ParseRowsError::InvalidElement { row: 1, ref value, .. } if value == "x"
        ));
    }

    #[test]
    fn test_execute_renders_one_row_per_line() {
        let rows = parse_rows("5,2,9; -6; 0,1").unwrap();
        assert_eq!(
            execute(rows, SortOption::RowElementsSum, false),
            "[-6]\n[0, 1]\n[5, 2, 9]"
        );
    }
}
