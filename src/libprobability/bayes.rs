// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bayes' rule.

use crate::error::{ProbabilityError, Result};

/// Computes the posterior `P(A|B) = P(A) * P(B|A) / P(B)`.
///
/// `prob_b` is assumed to already be the prior of B, the sum of the
/// posteriors of B over all possible values of A. When `prob_b` is zero the
/// posterior is reported as `0.0` rather than dividing by zero: evidence
/// that cannot occur yields a zero posterior.
///
/// # Errors
///
/// Returns [`ProbabilityError::InvalidProbability`] when any argument is
/// outside `[0.0, 1.0]`.
pub fn bayes(prob_a: f64, prob_b_given_a: f64, prob_b: f64) -> Result<f64> {
  ProbabilityError::check_probability("prob_a", prob_a)?;
  ProbabilityError::check_probability("prob_b_given_a", prob_b_given_a)?;
  ProbabilityError::check_probability("prob_b", prob_b)?;

  if prob_b == 0.0 {
    return Ok(0.0);
  }

  Ok((prob_a * prob_b_given_a) / prob_b)
}
