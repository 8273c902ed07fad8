// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The row feature used as a sort key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum SortOption {
    /// Sum of all elements. An empty row sums to zero.
    #[default]
    #[serde(rename = "sum")]
    #[strum(serialize = "sum")]
    RowElementsSum,
    /// Largest element. Empty rows have no key and order first.
    #[serde(rename = "max")]
    #[strum(serialize = "max")]
    RowMaximumElements,
    /// Smallest element. Empty rows have no key and order first.
    #[serde(rename = "min")]
    #[strum(serialize = "min")]
    RowMinimumElements,
}

impl SortOption {
    /// Returns the key function for this option.
    pub fn key(self) -> fn(&[i32]) -> Option<i64> {
        match self {
            SortOption::RowElementsSum => row_sum,
            SortOption::RowMaximumElements => row_max,
            SortOption::RowMinimumElements => row_min,
        }
    }
}

fn row_sum(row: &[i32]) -> Option<i64> {
    Some(row.iter().map(|&value| i64::from(value)).sum())
}

fn row_max(row: &[i32]) -> Option<i64> {
    row.iter().max().map(|&value| i64::from(value))
}

fn row_min(row: &[i32]) -> Option<i64> {
    row.iter().min().map(|&value| i64::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_keys() {
        let row = [5, -3, 9];
        assert_eq!(SortOption::RowElementsSum.key()(&row), Some(11));
        assert_eq!(SortOption::RowMaximumElements.key()(&row), Some(9));
        assert_eq!(SortOption::RowMinimumElements.key()(&row), Some(-3));
    }

    #[test]
    fn test_keys_of_empty_row() {
        assert_eq!(SortOption::RowElementsSum.key()(&[]), Some(0));
        assert_eq!(SortOption::RowMaximumElements.key()(&[]), None);
        assert_eq!(SortOption::RowMinimumElements.key()(&[]), None);
    }

    #[test]
    fn test_sum_does_not_overflow() {
        let row = [i32::MAX, i32::MAX];
        assert_eq!(
            SortOption::RowElementsSum.key()(&row),
            Some(2 * i64::from(i32::MAX))
        );
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(SortOption::from_str("max"), Ok(SortOption::RowMaximumElements));
        assert_eq!(SortOption::RowMinimumElements.to_string(), "min");
        assert!(SortOption::from_str("median").is_err());
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let option: SortOption = serde_yaml::from_str("min").unwrap();
        assert_eq!(option, SortOption::RowMinimumElements);
        assert_eq!(serde_yaml::to_string(&SortOption::RowElementsSum).unwrap().trim(), "sum");
    }
}
