// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! In-place sorting of jagged integer rows.
//!
//! Rows are ordered either by a caller supplied comparison or by a derived key
//! (row sum, maximum or minimum element) selected through [`SortOption`]. Every
//! sort is stable and operates directly on the caller's buffer.

mod option;
mod rows;

pub use option::SortOption;
pub use rows::{sort_rows, sort_rows_by, sort_rows_descending, sort_rows_with, RowComparer};
