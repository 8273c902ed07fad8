// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! A single-variable polynomial value type with real (`f64`) coefficients.
//!
//! ## Features
//!
//! - Canonical construction: leading zero coefficients are stripped, the zero
//!   polynomial is always `[0.0]`.
//! - Arithmetic: addition, subtraction and multiplication, as named methods and
//!   through the `+`, `-`, `*` and unary `-` operators.
//! - Tolerance equality: coefficients within `Polynomial::EPSILON` compare equal.
//! - Rendering: a deterministic `Display` such as `0.5x^3 - 0.0025x^2 + x + 100.125`.
//! - Serialization: optional serde support with bincode integration.
//!
//! Coefficients are always stored highest degree first.

pub mod errors;
pub mod polynomial;

pub use errors::PolynomialError;
pub use polynomial::Polynomial;
