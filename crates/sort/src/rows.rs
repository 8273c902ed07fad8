// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::SortOption;
use std::cmp::Ordering;
use tracing::debug;

/// An object that orders two rows.
///
/// Implemented for every `Fn(&[i32], &[i32]) -> Ordering`, so plain closures can be
/// used wherever a comparer is expected.
pub trait RowComparer {
    fn compare(&self, left: &[i32], right: &[i32]) -> Ordering;
}

impl<F> RowComparer for F
where
    F: Fn(&[i32], &[i32]) -> Ordering,
{
    fn compare(&self, left: &[i32], right: &[i32]) -> Ordering {
        self(left, right)
    }
}

/// Sorts `rows` in place with the comparison function `compare`.
///
/// The sort is stable: rows that compare equal keep their relative order.
pub fn sort_rows_by<F>(rows: &mut [Vec<i32>], mut compare: F)
where
    F: FnMut(&[i32], &[i32]) -> Ordering,
{
    rows.sort_by(|left, right| compare(left.as_slice(), right.as_slice()));
}

/// Sorts `rows` in place using `comparer`.
pub fn sort_rows_with<C>(rows: &mut [Vec<i32>], comparer: &C)
where
    C: RowComparer + ?Sized,
{
    sort_rows_by(rows, |left, right| comparer.compare(left, right));
}

/// Sorts `rows` in ascending order of the key selected by `option`.
pub fn sort_rows(rows: &mut [Vec<i32>], option: SortOption) {
    debug!(rows = rows.len(), %option, "sorting rows ascending");
    let key = option.key();
    sort_rows_by(rows, |left, right| key(left).cmp(&key(right)));
}

/// Sorts `rows` in descending order of the key selected by `option`.
pub fn sort_rows_descending(rows: &mut [Vec<i32>], option: SortOption) {
    debug!(rows = rows.len(), %option, "sorting rows descending");
    let key = option.key();
    sort_rows_by(rows, |left, right| key(right).cmp(&key(left)));
}
