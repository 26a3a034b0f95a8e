// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Discretization of a continuous range of values into intervals.

use serde::{Deserialize, Serialize};

use crate::error::{ProbabilityError, Result};
use crate::interval::Interval;
use crate::intervals::Intervals;

/// Number of intervals produced when the configuration does not request a
/// specific count.
pub const DEFAULT_INTERVAL_COUNT: usize = 10;

/// Strategy used to subdivide the observed range.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum DiscretizationMethod {
  /// Every interval is the same size.
  #[default]
  EqualSize,
  /// Every interval contains the same number of known values.
  EqualDistribution,
}

/// Controls the behavior of discretization of a continuous range of values.
///
/// `intervals` is the number of intervals, zero meaning
/// [`DEFAULT_INTERVAL_COUNT`]. `method` determines how the range is
/// subdivided. `include_upper_bound` is reserved and currently has no
/// effect: only the last interval of an equal-size partition includes its
/// upper bound, all others exclude it.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct DiscretizationConfig {
  pub intervals: usize,
  pub method: DiscretizationMethod,
  pub include_upper_bound: bool,
}

impl DiscretizationConfig {
  fn effective_interval_count(&self) -> usize {
    if self.intervals == 0 {
      DEFAULT_INTERVAL_COUNT
    } else {
      self.intervals
    }
  }
}

/// Converts a continuous (real-valued) range into a set of discrete
/// intervals.
///
/// `vals` is the set of known values within the range; discretization
/// assumes the full population of relevant values is known upfront. The
/// slice is left untouched: sorting happens on an internally owned copy.
/// Pass a default config to get ten equal-size intervals, each including its
/// lower bound and excluding its upper bound, except the last which includes
/// both.
///
/// # Errors
///
/// Returns [`ProbabilityError::InvalidInput`] when `vals` is empty, and
/// [`ProbabilityError::InvalidConfig`] when an equal-distribution partition
/// requests more intervals than there are values.
pub fn discretize(vals: &[f64], cfg: DiscretizationConfig) -> Result<Intervals<f64>> {
  if vals.is_empty() {
    return Err(ProbabilityError::InvalidInput {
      context: "discretization requires at least one value",
    });
  }

  let interval_count = cfg.effective_interval_count();

  let mut sorted = vals.to_vec();
  sorted.sort_unstable_by(f64::total_cmp);

  match cfg.method {
    DiscretizationMethod::EqualSize => Ok(equal_size(&sorted, interval_count)),
    DiscretizationMethod::EqualDistribution => equal_distribution(&sorted, interval_count),
  }
}

fn equal_size(sorted: &[f64], interval_count: usize) -> Intervals<f64> {
  let min = sorted[0];
  let max = sorted[sorted.len() - 1];
  let interval_size = (max - min) / interval_count as f64;

  let mut intervals = Intervals::with_capacity(interval_count);

  // Lower bounds are accumulated from the previous interval rather than
  // recomputed from the minimum; the rounding of the partition boundaries
  // depends on this order of operations.
  let mut lower = min;
  for _ in 0..interval_count - 1 {
    intervals.push(Interval::sized(lower, interval_size, false));
    lower = lower + interval_size;
  }

  // The last interval is closed at the maximum so that the maximum value is
  // always classifiable. On a degenerate range the accumulated lower bound
  // can land a few ulps past the maximum; it is pinned back.
  intervals.push(Interval::range(lower.min(max), max, true));

  intervals
}

fn equal_distribution(sorted: &[f64], interval_count: usize) -> Result<Intervals<f64>> {
  if interval_count > sorted.len() {
    return Err(ProbabilityError::InvalidConfig {
      message: format!(
        "cannot spread {} values over {} intervals",
        sorted.len(),
        interval_count
      ),
    });
  }

  // "len" means "count of values in an interval", as opposed to "size" for
  // the width of an interval.
  let interval_len = sorted.len() / interval_count;

  let mut intervals = Intervals::with_capacity(interval_count);
  for i in 0..interval_count - 1 {
    intervals.push(Interval::range(
      sorted[i * interval_len],
      sorted[(i + 1) * interval_len - 1],
      true,
    ));
  }

  // The last interval absorbs the division remainder, trading an unevenly
  // sized final bucket for a reproducible interval count.
  intervals.push(Interval::range(
    sorted[(interval_count - 1) * interval_len],
    sorted[sorted.len() - 1],
    true,
  ));

  Ok(intervals)
}
