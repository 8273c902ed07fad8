// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial arithmetic implementation.

use crate::errors::PolynomialError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial represented by its real coefficients in descending order of degree.
///
/// The polynomial `a_n * x^n + a_{n-1} * x^{n-1} + ... + a_1 * x + a_0` is stored as
/// `[a_n, a_{n-1}, ..., a_1, a_0]`. Instances are always canonical: the list is never
/// empty and never starts with a zero coefficient, except for the zero polynomial which
/// is stored as `[0.0]`.
///
/// A `Polynomial` is never mutated after construction. Every arithmetic operation
/// allocates a fresh coefficient buffer.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Tolerance used when comparing coefficients for equality.
    pub const EPSILON: f64 = 1e-6;

    /// Creates a new polynomial from coefficients in descending order of degree.
    ///
    /// Leading zero coefficients are stripped. An all-zero list yields the zero
    /// polynomial `[0.0]`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::EmptyCoefficients` if `coefficients` is empty.
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Result<Self, PolynomialError> {
        let coefficients = coefficients.into();
        if coefficients.is_empty() {
            return Err(PolynomialError::EmptyCoefficients);
        }

        Ok(Self::canonical(coefficients))
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            coefficients: vec![0.0],
        }
    }

    /// Creates a constant polynomial.
    pub fn constant(constant: f64) -> Self {
        Self::canonical(vec![constant])
    }

    /// Returns the coefficients of the polynomial, highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree of the zero polynomial is 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns the coefficient of the highest degree term.
    pub fn leading_coefficient(&self) -> f64 {
        self.coefficients[0]
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0] == 0.0
    }

    /// Adds two polynomials together.
    ///
    /// The operands are aligned at their constant terms, so a lower degree operand
    /// only contributes to the low order positions of the result.
    pub fn add(&self, other: &Self) -> Self {
        self.combine_aligned(other, |lhs, rhs| lhs + rhs)
    }

    /// Subtracts `other` from this polynomial.
    pub fn subtract(&self, other: &Self) -> Self {
        self.combine_aligned(other, |lhs, rhs| lhs - rhs)
    }

    /// Multiplies two polynomials by convolving their coefficient lists.
    pub fn multiply(&self, other: &Self) -> Self {
        let product_len = self.coefficients.len() + other.coefficients.len() - 1;
        let mut product = vec![0.0; product_len];

        for (i, lhs) in self.coefficients.iter().enumerate() {
            for (j, rhs) in other.coefficients.iter().enumerate() {
                product[i + j] += lhs * rhs;
            }
        }

        Self::canonical(product)
    }

    /// Negates all coefficients of the polynomial.
    pub fn neg(&self) -> Self {
        Self::canonical(self.coefficients.iter().map(|c| -c).collect())
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |acc, coeff| acc * x + coeff)
    }

    /// Builds a result buffer as long as the longer operand, seeds it with `self`
    /// and folds `other` into it position by position, both right-aligned.
    fn combine_aligned(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        let max_length = std::cmp::max(self.coefficients.len(), other.coefficients.len());
        let mut result = vec![0.0; max_length];

        let self_offset = max_length - self.coefficients.len();
        result[self_offset..].copy_from_slice(&self.coefficients);

        let other_offset = max_length - other.coefficients.len();
        for (slot, coeff) in result[other_offset..]
            .iter_mut()
            .zip(other.coefficients.iter())
        {
            *slot = op(*slot, *coeff);
        }

        Self::canonical(result)
    }

    /// Strips leading exact zeros. `coefficients` must not be empty.
    fn canonical(mut coefficients: Vec<f64>) -> Self {
        match coefficients.iter().position(|c| *c != 0.0) {
            Some(0) => {}
            Some(first_nonzero) => {
                trace!(stripped = first_nonzero, "removed leading zero coefficients");
                coefficients.drain(..first_nonzero);
            }
            None => coefficients = vec![0.0],
        }

        Self { coefficients }
    }
}

/// Two coefficients match when their difference is below `Polynomial::EPSILON`.
///
/// A NaN difference never counts as a mismatch, so a NaN coefficient matches any
/// value at the same position, not only another NaN.
fn coefficients_match(lhs: f64, rhs: f64) -> bool {
    let diff = (lhs - rhs).abs();
    diff.is_nan() || diff < Polynomial::EPSILON
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        self.coefficients.len() == other.coefficients.len()
            && self
                .coefficients
                .iter()
                .zip(other.coefficients.iter())
                .all(|(lhs, rhs)| coefficients_match(*lhs, *rhs))
    }
}

/// Hashes the exact coefficient bit patterns.
///
/// Equality is a tolerance comparison, so polynomials whose coefficients differ by
/// less than `Polynomial::EPSILON` compare equal but may hash differently.
impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coefficients.len().hash(state);
        for coeff in &self.coefficients {
            // -0.0 == 0.0
            let bits = if *coeff == 0.0 { 0 } else { coeff.to_bits() };
            bits.hash(state);
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();

        let leading = self.coefficients[0];
        if leading == -1.0 {
            write!(f, "-")?;
        } else if leading != 1.0 {
            write!(f, "{leading}")?;
        }
        write!(f, "x^{degree}")?;

        for (i, &coeff) in self.coefficients.iter().enumerate().skip(1) {
            if coeff == 0.0 {
                continue;
            }

            let magnitude = if coeff < 0.0 {
                write!(f, " - ")?;
                -coeff
            } else {
                write!(f, " + ")?;
                coeff
            };

            // a unit numeral is only dropped in front of `x`
            let power = degree - i;
            if magnitude != 1.0 || power == 0 {
                write!(f, "{magnitude}")?;
            }

            match power {
                0 => {}
                1 => write!(f, "x")?,
                power => write!(f, "x^{power}")?,
            }
        }

        Ok(())
    }
}

impl FromStr for Polynomial {
    type Err = PolynomialError;

    /// Parses comma and/or whitespace separated coefficients, highest degree first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coefficients = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()?;

        if coefficients.is_empty() {
            return Err(PolynomialError::MissingCoefficients);
        }

        Self::new(coefficients)
    }
}

impl TryFrom<Vec<f64>> for Polynomial {
    type Error = PolynomialError;

    fn try_from(coefficients: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(coefficients)
    }
}

impl TryFrom<&[f64]> for Polynomial {
    type Error = PolynomialError;

    fn try_from(coefficients: &[f64]) -> Result<Self, Self::Error> {
        Self::new(coefficients)
    }
}

impl From<Polynomial> for Vec<f64> {
    fn from(polynomial: Polynomial) -> Self {
        polynomial.coefficients
    }
}

impl std::ops::Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        Polynomial::add(&self, &rhs)
    }
}

impl<'a> std::ops::Add<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &'a Polynomial) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl std::ops::Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        self.subtract(&rhs)
    }
}

impl<'a> std::ops::Sub<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &'a Polynomial) -> Polynomial {
        self.subtract(rhs)
    }
}

impl std::ops::Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        self.multiply(&rhs)
    }
}

impl<'a> std::ops::Mul<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &'a Polynomial) -> Polynomial {
        self.multiply(rhs)
    }
}

impl std::ops::Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(&self)
    }
}

impl std::ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}
