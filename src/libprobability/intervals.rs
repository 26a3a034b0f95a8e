// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ordered sequence of intervals partitioning an observed range.
//!
//! The sequence is sorted by ascending lower bound and covers the full
//! observed range with no gaps and no overlaps, except at shared boundary
//! points where the inclusion flags disambiguate ownership. It is produced by
//! [`discretize`](crate::discretize::discretize) and immutable thereafter.

use std::ops::Index;
use std::slice;
use std::vec;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::ops::{Bounded, Contains};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Intervals<F> {
  intervals: Vec<Interval<F>>,
}

impl<F: Float> Intervals<F> {
  pub(crate) fn with_capacity(capacity: usize) -> Intervals<F> {
    Intervals {
      intervals: Vec::with_capacity(capacity),
    }
  }

  pub(crate) fn push(&mut self, x: Interval<F>) {
    assert!(
      self.intervals.last().map_or(true, |prev| prev.lower() <= x.lower()),
      "The intervals array must be ordered by ascending lower bound."
    );
    self.intervals.push(x);
  }

  pub fn len(&self) -> usize {
    self.intervals.len()
  }

  pub fn is_empty(&self) -> bool {
    self.intervals.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&Interval<F>> {
    self.intervals.get(index)
  }

  pub fn iter(&self) -> slice::Iter<'_, Interval<F>> {
    self.intervals.iter()
  }

  /// Returns the index of the first interval containing `val`, or `None` if
  /// no interval contains it (the value lies outside the covered range).
  ///
  /// The scan is linear and first match wins, which settles ownership of
  /// shared boundary points in favor of the earlier interval.
  pub fn interval_for_value(&self, val: F) -> Option<usize> {
    self.intervals.iter().position(|i| i.contains(&val))
  }
}

impl<F: Float> Bounded for Intervals<F> {
  type Bound = F;

  fn lower(&self) -> F {
    assert!(
      !self.is_empty(),
      "Cannot access the lower bound of an empty interval sequence."
    );
    self.intervals[0].lower()
  }

  fn upper(&self) -> F {
    assert!(
      !self.is_empty(),
      "Cannot access the upper bound of an empty interval sequence."
    );
    self.intervals[self.intervals.len() - 1].upper()
  }
}

impl<F: Float> Contains<F> for Intervals<F> {
  fn contains(&self, value: &F) -> bool {
    self.interval_for_value(*value).is_some()
  }
}

impl<F: Float> Index<usize> for Intervals<F> {
  type Output = Interval<F>;

  fn index(&self, index: usize) -> &Interval<F> {
    &self.intervals[index]
  }
}

impl<F: Float> IntoIterator for Intervals<F> {
  type Item = Interval<F>;
  type IntoIter = vec::IntoIter<Interval<F>>;

  fn into_iter(self) -> Self::IntoIter {
    self.intervals.into_iter()
  }
}

impl<'a, F: Float> IntoIterator for &'a Intervals<F> {
  type Item = &'a Interval<F>;
  type IntoIter = slice::Iter<'a, Interval<F>>;

  fn into_iter(self) -> Self::IntoIter {
    self.intervals.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::discretize::{discretize, DiscretizationConfig};

  fn default_partition() -> Intervals<f64> {
    discretize(&[1.0, 2.0], DiscretizationConfig::default()).unwrap()
  }

  #[test]
  fn interval_for_contained_value() {
    let intervals = default_partition();
    assert_eq!(intervals.interval_for_value(1.55), Some(5));
  }

  #[test]
  fn interval_for_uncontained_value() {
    let intervals = default_partition();
    assert_eq!(intervals.interval_for_value(3.0), None);
  }

  #[test]
  fn first_match_wins_on_shared_boundary() {
    let intervals = default_partition();
    // The minimum belongs to the first interval even though every lower
    // bound is inclusive.
    assert_eq!(intervals.interval_for_value(1.0), Some(0));
    // The maximum is only classifiable through the closed last interval.
    assert_eq!(intervals.interval_for_value(2.0), Some(intervals.len() - 1));
  }

  #[test]
  fn bounded_spans_the_observed_range() {
    let intervals = default_partition();
    assert_eq!(intervals.lower(), 1.0);
    assert_eq!(intervals.upper(), 2.0);
  }

  #[test]
  fn contains_matches_lookup() {
    let intervals = default_partition();
    assert!(intervals.contains(&1.55));
    assert!(!intervals.contains(&3.0));
    assert!(!intervals.contains(&0.5));
  }

  #[test]
  fn iteration_preserves_order() {
    let intervals = default_partition();
    let lowers: Vec<f64> = intervals.iter().map(Bounded::lower).collect();
    let mut sorted = lowers.clone();
    sorted.sort_unstable_by(f64::total_cmp);
    assert_eq!(lowers, sorted);
    assert_eq!(intervals[0].lower(), lowers[0]);
  }
}
