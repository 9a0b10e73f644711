//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element `empty` such that
//! combining any value with `empty` (on either side) returns the value
//! unchanged.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ## Left identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use bankers::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty().combine(String::from("x")), "x");
//! assert_eq!(vec![1, 2].combine(Vec::empty()), vec![1, 2]);
//! ```

use super::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// In addition to the [`Semigroup`] associativity law, all implementations
/// must satisfy:
///
/// ## Identity
///
/// For all `a`:
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::typeclass::Monoid;
    ///
    /// let empty: Vec<i32> = Vec::empty();
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    fn empty() -> Self;

    /// Combines an iterator of values, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this never returns `None`: an
    /// empty iterator yields `Self::empty()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::typeclass::Monoid;
    ///
    /// let combined = Vec::combine_all(vec![vec![1], vec![2, 3]]);
    /// assert_eq!(combined, vec![1, 2, 3]);
    ///
    /// let nothing: Vec<Vec<i32>> = vec![];
    /// assert_eq!(Vec::combine_all(nothing), Vec::<i32>::new());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, value| {
                accumulator.combine(value)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

// =============================================================================
// Tests
// =============================================================================
