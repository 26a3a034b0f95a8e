// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One bin of a partition of the real line.
//!
//! An interval always includes its lower bound; whether it includes its upper
//! bound is decided at construction time, because a single interval cannot
//! tell on its own whether it is the last one of its partition. The upper
//! edge is described by a tagged [`Bound`]: either a width relative to the
//! lower bound (equal-size partitioning) or an explicit upper value
//! (equal-distribution partitioning, and the final interval of an equal-size
//! partition).

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::ops::{Bounded, Contains};

/// Upper edge of an [`Interval`].
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum Bound<F> {
  /// The interval spans `[lower, lower + size)`, or `[lower, lower + size]`
  /// when `includes_upper` is set.
  Size { size: F, includes_upper: bool },
  /// The interval spans `[lower, upper)`, or `[lower, upper]` when
  /// `includes_upper` is set.
  Range { upper: F, includes_upper: bool },
}

/// One contiguous sub-range of the real line with defined inclusion rules at
/// its boundaries.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Interval<F> {
  lower: F,
  includes_lower: bool,
  bound: Bound<F>,
}

impl<F: Float> Interval<F> {
  /// Builds an interval of width `size` starting at `lower`.
  pub fn sized(lower: F, size: F, includes_upper: bool) -> Interval<F> {
    assert!(
      size >= F::zero(),
      "Cannot build an interval with a negative size."
    );
    Interval {
      lower,
      includes_lower: true,
      bound: Bound::Size {
        size,
        includes_upper,
      },
    }
  }

  /// Builds an interval spanning `lower` to `upper`.
  pub fn range(lower: F, upper: F, includes_upper: bool) -> Interval<F> {
    assert!(
      upper >= lower,
      "Cannot build an interval with upper < lower."
    );
    Interval {
      lower,
      includes_lower: true,
      bound: Bound::Range {
        upper,
        includes_upper,
      },
    }
  }

  pub fn bound(&self) -> Bound<F> {
    self.bound
  }

  /// Width of the interval, `upper - lower`.
  pub fn size(&self) -> F {
    match self.bound {
      Bound::Size { size, .. } => size,
      Bound::Range { upper, .. } => upper - self.lower,
    }
  }

  pub fn includes_lower(&self) -> bool {
    self.includes_lower
  }

  pub fn includes_upper(&self) -> bool {
    match self.bound {
      Bound::Size { includes_upper, .. } | Bound::Range { includes_upper, .. } => includes_upper,
    }
  }
}

impl<F: Float> Bounded for Interval<F> {
  type Bound = F;

  fn lower(&self) -> F {
    self.lower
  }

  fn upper(&self) -> F {
    match self.bound {
      Bound::Size { size, .. } => self.lower + size,
      Bound::Range { upper, .. } => upper,
    }
  }
}

impl<F: Float> Contains<F> for Interval<F> {
  fn contains(&self, value: &F) -> bool {
    let value = *value;
    let above_lower = if self.includes_lower {
      value >= self.lower
    } else {
      value > self.lower
    };
    if !above_lower {
      return false;
    }
    match self.bound {
      Bound::Range {
        upper,
        includes_upper,
      } => {
        if includes_upper {
          value <= upper
        } else {
          value < upper
        }
      }
      Bound::Size {
        size,
        includes_upper,
      } => {
        let upper = self.lower + size;
        value < upper || (value == upper && includes_upper)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::{assert_tokens, Token};

  #[test]
  fn sized_contains() {
    let half_open = Interval::sized(10.0, 5.0, false);
    let closed = Interval::sized(10.0, 5.0, true);

    // (id, interval, value, expected)
    let cases = vec![
      (1, half_open, 12.5, true),
      (2, half_open, 20.0, false),
      (3, half_open, 10.0, true),
      (4, half_open, 15.0, false),
      (5, half_open, 9.9, false),
      (6, closed, 15.0, true),
      (7, closed, 15.1, false),
    ];

    for (id, interval, value, expected) in cases {
      assert_eq!(
        interval.contains(&value),
        expected,
        "test #{} of sized_contains",
        id
      );
    }
  }

  #[test]
  fn range_contains() {
    let closed = Interval::range(10.0, 20.0, true);
    let half_open = Interval::range(10.0, 20.0, false);

    let cases = vec![
      (1, closed, 15.0, true),
      (2, closed, 10.0, true),
      (3, closed, 20.0, true),
      (4, closed, 30.0, false),
      (5, closed, 9.9, false),
      (6, half_open, 20.0, false),
      (7, half_open, 19.9, true),
    ];

    for (id, interval, value, expected) in cases {
      assert_eq!(
        interval.contains(&value),
        expected,
        "test #{} of range_contains",
        id
      );
    }
  }

  #[test]
  fn zero_upper_bound_is_not_a_sentinel() {
    // A partition of negative values legitimately ends at 0.0; the tagged
    // bound keeps such intervals fully usable.
    let i = Interval::range(-5.0, 0.0, true);
    assert!(i.contains(&-2.5));
    assert!(i.contains(&0.0));
    assert!(!i.contains(&0.1));
  }

  #[test]
  fn accessors() {
    let sized = Interval::sized(1.0, 0.5, false);
    assert_eq!(sized.lower(), 1.0);
    assert_eq!(sized.upper(), 1.5);
    assert_eq!(sized.size(), 0.5);
    assert!(sized.includes_lower());
    assert!(!sized.includes_upper());

    let range = Interval::range(1.0, 3.0, true);
    assert_eq!(range.lower(), 1.0);
    assert_eq!(range.upper(), 3.0);
    assert_eq!(range.size(), 2.0);
    assert!(range.includes_lower());
    assert!(range.includes_upper());
  }

  #[test]
  #[should_panic(expected = "upper < lower")]
  fn range_rejects_inverted_bounds() {
    let _ = Interval::range(10.0, -10.0, true);
  }

  #[test]
  fn serde_round_trip() {
    let interval = Interval::sized(10.0, 5.0, false);
    assert_tokens(
      &interval,
      &[
        Token::Struct {
          name: "Interval",
          len: 3,
        },
        Token::Str("lower"),
        Token::F64(10.0),
        Token::Str("includes_lower"),
        Token::Bool(true),
        Token::Str("bound"),
        Token::StructVariant {
          name: "Bound",
          variant: "Size",
          len: 2,
        },
        Token::Str("size"),
        Token::F64(5.0),
        Token::Str("includes_upper"),
        Token::Bool(false),
        Token::StructVariantEnd,
        Token::StructEnd,
      ],
    );
  }
}
