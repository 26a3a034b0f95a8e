// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types for probability operations.
//!
//! Every failure is reported synchronously to the immediate caller; there is
//! no retry or recovery logic anywhere in the crate and no operation is fatal
//! to the process.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ProbabilityError {
  /// A probability argument lies outside `[0.0, 1.0]`.
  InvalidProbability {
    /// Name of the offending parameter.
    param: &'static str,
    /// Value that was provided.
    value: f64,
  },
  /// An input sequence does not satisfy the operation's precondition.
  InvalidInput { context: &'static str },
  /// The discretization configuration is inconsistent with the input.
  InvalidConfig { message: String },
}

impl fmt::Display for ProbabilityError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ProbabilityError::InvalidProbability { param, value } => {
        write!(
          f,
          "invalid probability: {param} = {value}, must be from 0.0 to 1.0 inclusive"
        )
      }
      ProbabilityError::InvalidInput { context } => {
        write!(f, "invalid input: {context}")
      }
      ProbabilityError::InvalidConfig { message } => {
        write!(f, "invalid configuration: {message}")
      }
    }
  }
}

impl std::error::Error for ProbabilityError {}

impl ProbabilityError {
  pub(crate) fn check_probability(param: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
      Ok(())
    } else {
      Err(ProbabilityError::InvalidProbability { param, value })
    }
  }
}

/// Convenience type alias for results of probability operations.
pub type Result<T> = std::result::Result<T, ProbabilityError>;
