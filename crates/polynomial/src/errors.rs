// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur while building a polynomial.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolynomialError {
    /// A coefficient list was supplied but holds no elements.
    #[error("Invalid polynomial: coefficients must contain one or more elements")]
    EmptyCoefficients,

    /// No coefficient list was supplied at all.
    #[error("Missing polynomial: no coefficients were given")]
    MissingCoefficients,

    /// A coefficient could not be parsed as a real number.
    #[error("Parse error: {0}")]
    ParseError(#[from] std::num::ParseFloatError),
}
