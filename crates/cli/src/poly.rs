// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use numutils_polynomial::Polynomial;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

/// Applies `operation` and renders the result.
pub fn execute(operation: Operation, lhs: &Polynomial, rhs: &Polynomial) -> String {
    let result = match operation {
        Operation::Add => lhs.add(rhs),
        Operation::Subtract => lhs.subtract(rhs),
        Operation::Multiply => lhs.multiply(rhs),
    };
    debug!(?operation, %lhs, %rhs, %result, "polynomial operation");
    result.to_string()
}

pub fn show(polynomial: &Polynomial) -> String {
    format!("{polynomial}\ndegree: {}", polynomial.degree())
}

pub fn equals(lhs: &Polynomial, rhs: &Polynomial) -> String {
    (lhs == rhs).to_string()
}

pub fn evaluate(polynomial: &Polynomial, x: f64) -> String {
    polynomial.evaluate(x).to_string()
}
