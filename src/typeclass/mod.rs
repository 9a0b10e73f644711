//! Type classes for algebraic composition.
//!
//! This module provides the two type classes the persistent structures
//! implement for their append surface:
//!
//! - [`Semigroup`]: types with an associative binary operation (`combine`)
//! - [`Monoid`]: semigroups with an identity element (`empty`)
//!
//! # Examples
//!
//! ```rust
//! use bankers::typeclass::{Monoid, Semigroup};
//!
//! let combined = String::from("foo").combine(String::from("bar"));
//! assert_eq!(combined, "foobar");
//!
//! let identity: Vec<i32> = Vec::empty();
//! assert_eq!(identity.combine(vec![1, 2]), vec![1, 2]);
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
