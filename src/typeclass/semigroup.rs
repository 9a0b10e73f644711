//! Semigroup type class - types with an associative binary operation.
//!
//! A semigroup is an algebraic structure consisting of a set together with
//! an associative binary operation. In programming terms, a type `T` is a
//! semigroup if there exists a function `combine: (T, T) -> T` that is
//! associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use bankers::typeclass::Semigroup;
//!
//! // String concatenation
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! // Vec concatenation
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use bankers::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// # Arguments
    ///
    /// * `other` - The value to combine with
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::typeclass::Semigroup;
    ///
    /// let combined = vec![1, 2].combine(vec![3, 4]);
    /// assert_eq!(combined, vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, cloning as needed.
    ///
    /// The default implementation clones both operands and delegates to
    /// [`combine`](Semigroup::combine). Implementations that can share
    /// structure should override it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::typeclass::Semigroup;
    ///
    /// let left = String::from("foo");
    /// let right = String::from("bar");
    /// assert_eq!(left.combine_ref(&right), "foobar");
    /// // Both operands are still usable
    /// assert_eq!(left, "foo");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces an iterator of values to a single value, if any.
    ///
    /// Returns `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::reduce_all(words), Some(String::from("abc")));
    ///
    /// let nothing: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(nothing), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        iterator.into_iter().reduce(|left, right| left.combine(right))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
