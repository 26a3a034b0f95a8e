// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval and bound specific operations.

/// Membership test of a value inside a collection or an interval.
pub trait Contains<Item> {
  fn contains(&self, value: &Item) -> bool;
}

/// Access to the lower and upper bound of a bounded structure.
pub trait Bounded {
  type Bound;

  fn lower(&self) -> Self::Bound;
  fn upper(&self) -> Self::Bound;
}
