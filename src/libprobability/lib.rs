// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Foundational probability primitives: discretization of a continuous sample
//! into a finite set of mutually exclusive intervals, probability mass
//! functions over discrete sample spaces, and Bayes' rule.
//!
//! The core of the library is the discretization engine. A caller hands
//! [`discretize`] a sample of observed values and a [`DiscretizationConfig`],
//! and gets back an [`Intervals`]: an ordered, non-overlapping partition of
//! the observed range. New values are then mapped to an interval index with
//! [`Intervals::interval_for_value`].
//!
//! The PMF constructors ([`mass_discrete`], [`mass_geometric`]) and
//! [`bayes`] are independent, closed-form computations sharing the same
//! probability vocabulary; they do not interact with the interval machinery.
//!
//! # Examples
//!
//! ```
//! use probability::{discretize, DiscretizationConfig};
//!
//! let vals = vec![0.2, 0.8, 0.4, 0.6];
//! let intervals = discretize(&vals, DiscretizationConfig::default()).unwrap();
//! assert_eq!(intervals.len(), 10);
//! assert!(intervals.interval_for_value(0.4).is_some());
//! assert!(intervals.interval_for_value(2.0).is_none());
//! ```
//!
//! All operations are synchronous pure functions over their inputs. The
//! caller's value slice is never mutated; `discretize` sorts an internally
//! owned copy.

pub mod bayes;
pub mod discretize;
pub mod error;
pub mod interval;
pub mod intervals;
pub mod mass;
pub mod ops;

pub use bayes::bayes;
pub use discretize::{
  discretize, DiscretizationConfig, DiscretizationMethod, DEFAULT_INTERVAL_COUNT,
};
pub use error::{ProbabilityError, Result};
pub use interval::{Bound, Interval};
pub use intervals::Intervals;
pub use mass::{mass_discrete, mass_geometric, MassFunction};
