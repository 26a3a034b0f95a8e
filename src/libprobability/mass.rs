// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Probability mass functions over discrete sample spaces.

use std::collections::HashMap;

use crate::error::{ProbabilityError, Result};

/// A probability mass function: maps a discrete outcome to a probability in
/// `[0.0, 1.0]`, summing to `1.0` over the whole sample space.
pub type MassFunction = Box<dyn Fn(i64) -> f64>;

/// Returns the empirical PMF over the range of values which can be assigned
/// to a given random variable. The variable has a discrete range, and
/// `values` must represent the full sample space: each observed outcome maps
/// to its relative frequency, and outcomes never observed map to `0.0`.
///
/// Returns `None` when `values` is empty, since no distribution can be
/// estimated from an empty sample.
pub fn mass_discrete(values: &[i64]) -> Option<MassFunction> {
  if values.is_empty() {
    return None;
  }

  let total = values.len() as f64;
  let mut counts: HashMap<i64, f64> = HashMap::new();
  for &value in values {
    *counts.entry(value).or_insert(0.0) += 1.0;
  }

  Some(Box::new(move |x| {
    counts.get(&x).copied().unwrap_or(0.0) / total
  }))
}

/// Returns the PMF of the geometric distribution with success probability
/// `p`: the probability that an event occurs for the first time on the `x`th
/// opportunity, after `x - 1` nonoccurrences, given by `(1-p)^(x-1) * p`.
///
/// # Errors
///
/// Returns [`ProbabilityError::InvalidProbability`] when `p` is outside
/// `[0.0, 1.0]`.
pub fn mass_geometric(p: f64) -> Result<MassFunction> {
  ProbabilityError::check_probability("p", p)?;
  Ok(Box::new(move |x| (1.0 - p).powf((x - 1) as f64) * p))
}
