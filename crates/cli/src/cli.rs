// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::config::{load_config, CliConfig};
use crate::helpers::telemetry::setup_simple_tracing;
use crate::poly::{self, Operation};
use crate::sort;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use numutils_polynomial::Polynomial;
use numutils_sort::SortOption;
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "numutils")]
#[command(about = "Polynomial arithmetic and row sorting from the command line", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `numutils -vvv` will give
    /// you trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    /// Resolves the log level from the flags, falling back to the config file.
    pub fn log_level(&self, config: &CliConfig) -> Result<Level> {
        if self.quiet {
            return Ok(Level::ERROR);
        }

        match (self.verbose, config.log_level.as_deref()) {
            (0, Some(level)) => level
                .parse()
                .with_context(|| format!("Invalid log_level '{level}' in configuration")),
            (0, None) => Ok(Level::WARN),
            (1, _) => Ok(Level::INFO),  // -v
            (2, _) => Ok(Level::DEBUG), // -vv
            _ => Ok(Level::TRACE),      // -vvv
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;

        setup_simple_tracing(self.log_level(&config)?);
        info!(?config, "Config loaded");

        let output = self.run(&config)?;
        println!("{output}");

        Ok(())
    }

    /// Runs the subcommand and returns what it prints.
    pub fn run(self, config: &CliConfig) -> Result<String> {
        let output = match self.command {
            Commands::Add { lhs, rhs } => poly::execute(Operation::Add, &lhs, &rhs),
            Commands::Sub { lhs, rhs } => poly::execute(Operation::Subtract, &lhs, &rhs),
            Commands::Mul { lhs, rhs } => poly::execute(Operation::Multiply, &lhs, &rhs),
            Commands::Show { polynomial } => poly::show(&polynomial),
            Commands::Eq { lhs, rhs } => poly::equals(&lhs, &rhs),
            Commands::Eval { polynomial, at } => poly::evaluate(&polynomial, at),
            Commands::Sort {
                rows,
                by,
                descending,
                ascending,
            } => {
                let rows = sort::parse_rows(&rows).context("Could not parse rows")?;
                let descending = match (descending, ascending) {
                    (true, _) => true,
                    (_, true) => false,
                    _ => config.descending,
                };
                sort::execute(rows, by.unwrap_or(config.sort_by), descending)
            }
        };

        Ok(output)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add two polynomials, eg. `numutils add "4,0,2,0" "1,1,0"`
    Add {
        /// Coefficients of the first polynomial, highest degree first
        #[arg(allow_hyphen_values = true)]
        lhs: Polynomial,
        /// Coefficients of the second polynomial, highest degree first
        #[arg(allow_hyphen_values = true)]
        rhs: Polynomial,
    },

    /// Subtract the second polynomial from the first
    Sub {
        #[arg(allow_hyphen_values = true)]
        lhs: Polynomial,
        #[arg(allow_hyphen_values = true)]
        rhs: Polynomial,
    },

    /// Multiply two polynomials
    Mul {
        #[arg(allow_hyphen_values = true)]
        lhs: Polynomial,
        #[arg(allow_hyphen_values = true)]
        rhs: Polynomial,
    },

    /// Print a polynomial in canonical form along with its degree
    Show {
        #[arg(allow_hyphen_values = true)]
        polynomial: Polynomial,
    },

    /// Compare two polynomials with the coefficient tolerance
    Eq {
        #[arg(allow_hyphen_values = true)]
        lhs: Polynomial,
        #[arg(allow_hyphen_values = true)]
        rhs: Polynomial,
    },

    /// Evaluate a polynomial at a point
    Eval {
        #[arg(allow_hyphen_values = true)]
        polynomial: Polynomial,

        /// The point to evaluate at
        #[arg(long, allow_negative_numbers = true)]
        at: f64,
    },

    /// Sort integer rows, eg. `numutils sort "5,2,9; -6; 0,1" --by max`
    Sort {
        /// Rows separated by `;`, elements separated by `,`
        #[arg(allow_hyphen_values = true)]
        rows: String,

        /// Row feature to sort by: sum, max or min
        #[arg(long)]
        by: Option<SortOption>,

        /// Sort in descending order
        #[arg(long, action = ArgAction::SetTrue, overrides_with = "ascending")]
        descending: bool,

        /// Sort in ascending order, even when the config asks for descending
        #[arg(long, action = ArgAction::SetTrue, overrides_with = "descending")]
        ascending: bool,
    },
}
