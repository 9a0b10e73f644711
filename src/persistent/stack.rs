//! Persistent (immutable) singly-linked stack.
//!
//! This module provides [`PersistentStack`], an immutable LIFO stack that
//! uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! `PersistentStack` is a cons-list specialized to the stack discipline.
//! It provides:
//!
//! - O(1) `push`
//! - O(1) `pop`
//! - O(1) `peek`
//! - O(1) `len` and `is_empty`
//! - O(n) `reverse`
//!
//! All operations return new stacks without modifying the original,
//! and structural sharing ensures memory efficiency.
//!
//! # Examples
//!
//! ```rust
//! use bankers::persistent::PersistentStack;
//!
//! let stack = PersistentStack::new().push(1).push(2).push(3);
//! assert_eq!(stack.try_peek(), Some(&3));
//! assert_eq!(stack.len(), 3);
//!
//! // Structural sharing: the original stack is preserved
//! let extended = stack.push(4);
//! assert_eq!(stack.len(), 3);    // Original unchanged
//! assert_eq!(extended.len(), 4); // New stack with pushed element
//! ```
//!
//! # Structural Sharing
//!
//! When you push an element, the new stack shares every node of the
//! original stack:
//!
//! ```text
//! stack1: 3 -> 2 -> 1 -> nil
//! stack2 = stack1.push(4): 4 -> [3 -> 2 -> 1 -> nil]  // shares [3, 2, 1] with stack1
//! ```
//!
//! This makes `push` an O(1) operation both in time and additional space,
//! and `pop` a matter of referencing the shared tail.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::{EmptyStructureError, ReferenceCounter};
use crate::typeclass::{Monoid, Semigroup};

/// Internal node structure for the persistent stack.
///
/// Each node contains an element and an optional reference to the node
/// below it. Reference counting enables structural sharing between stacks.
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// Reference to the node below (if any).
    below: Option<ReferenceCounter<Self>>,
}

/// A persistent (immutable) LIFO stack.
///
/// `PersistentStack` is an immutable data structure that uses structural
/// sharing to efficiently support functional programming patterns. The
/// empty stack allocates nothing, so it serves as the canonical shared
/// empty value.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `push`    | O(1)       |
/// | `pop`     | O(1)       |
/// | `peek`    | O(1)       |
/// | `len`     | O(1)       |
/// | `reverse` | O(n)       |
///
/// # Examples
///
/// ```rust
/// use bankers::persistent::PersistentStack;
///
/// let stack = PersistentStack::singleton(42);
/// assert_eq!(stack.try_peek(), Some(&42));
/// ```
#[derive(Clone)]
pub struct PersistentStack<T> {
    /// Reference to the top node (if any).
    top: Option<ReferenceCounter<Node<T>>>,
    /// Cached length for O(1) access.
    length: usize,
}

impl<T> PersistentStack<T> {
    /// Creates a new empty stack.
    ///
    /// The empty stack holds no allocation, so every empty stack is the
    /// same canonical value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentStack;
    ///
    /// let stack: PersistentStack<i32> = PersistentStack::new();
    /// assert!(stack.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            top: None,
            length: 0,
        }
    }

    /// Creates a stack containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::singleton(42);
    /// assert_eq!(stack.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().push(element)
    }

    /// Pushes an element onto the top of the stack.
    ///
    /// This operation creates a new stack with the element on top, sharing
    /// every node of the original stack.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::new().push(1).push(2);
    /// assert_eq!(stack.try_peek(), Some(&2));
    /// assert_eq!(stack.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn push(&self, element: T) -> Self {
        Self {
            top: Some(ReferenceCounter::new(Node {
                element,
                below: self.top.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the top element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::new().push(1).push(2);
    /// assert_eq!(stack.peek(), Ok(&2));
    ///
    /// let empty: PersistentStack<i32> = PersistentStack::new();
    /// assert!(empty.peek().is_err());
    /// ```
    #[inline]
    pub fn peek(&self) -> Result<&T, EmptyStructureError> {
        self.try_peek().ok_or(EmptyStructureError)
    }

    /// Returns a reference to the top element, or `None` if the stack is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::singleton(1);
    /// assert_eq!(stack.try_peek(), Some(&1));
    ///
    /// let empty: PersistentStack<i32> = PersistentStack::new();
    /// assert_eq!(empty.try_peek(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn try_peek(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.element)
    }

    /// Returns the stack without its top element.
    ///
    /// The result shares its entire structure with the original stack.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the stack is empty.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::new().push(1).push(2);
    /// let popped = stack.pop()?;
    /// assert_eq!(popped.try_peek(), Some(&1));
    /// assert_eq!(stack.len(), 2); // Original unchanged
    /// # Ok::<(), bankers::persistent::EmptyStructureError>(())
    /// ```
    #[inline]
    pub fn pop(&self) -> Result<Self, EmptyStructureError> {
        self.try_pop().ok_or(EmptyStructureError)
    }

    /// Returns the stack without its top element, or `None` if the stack
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::singleton(1);
    /// assert!(stack.try_pop().is_some());
    ///
    /// let empty: PersistentStack<i32> = PersistentStack::new();
    /// assert!(empty.try_pop().is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn try_pop(&self) -> Option<Self> {
        self.top.as_ref().map(|node| Self {
            top: node.below.clone(),
            length: self.length - 1,
        })
    }

    /// Returns the number of elements in the stack.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::new().push(1).push(2).push(3);
    /// assert_eq!(stack.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the stack contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentStack;
    ///
    /// let empty: PersistentStack<i32> = PersistentStack::new();
    /// assert!(empty.is_empty());
    /// assert!(!empty.push(1).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Returns an iterator over references to the elements.
    ///
    /// The iterator yields elements from the top of the stack downwards
    /// (most recently pushed first).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::new().push(1).push(2).push(3);
    /// let collected: Vec<&i32> = stack.iter().collect();
    /// assert_eq!(collected, vec![&3, &2, &1]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> PersistentStackIterator<'_, T> {
        PersistentStackIterator {
            current: self.top.as_ref(),
        }
    }
}

impl<T: Clone> PersistentStack<T> {
    /// Returns a new stack with the elements in reverse order.
    ///
    /// The original stack is not modified.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentStack;
    ///
    /// let stack = PersistentStack::new().push(1).push(2).push(3);
    /// let reversed = stack.reverse();
    ///
    /// let collected: Vec<&i32> = reversed.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// assert_eq!(stack.try_peek(), Some(&3)); // Original unchanged
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut result = Self::new();
        for element in self {
            result = result.push(element.clone());
        }
        result
    }

    /// Builds a stack from a Vec efficiently.
    ///
    /// Uses `Vec::pop()` to consume elements from the end, which is O(1),
    /// so the first element of the Vec ends up on top of the stack.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        if length == 0 {
            return Self::new();
        }

        // Build from end to start using Vec::pop()
        let mut top: Option<ReferenceCounter<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            top = Some(ReferenceCounter::new(Node {
                element,
                below: top,
            }));
        }

        Self { top, length }
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over references to elements of a [`PersistentStack`].
///
/// Yields elements from the top of the stack downwards.
pub struct PersistentStackIterator<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
}

impl<'a, T> Iterator for PersistentStackIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.below.as_ref();
            &node.element
        })
    }
}

/// An owning iterator over elements of a [`PersistentStack`].
///
/// Yields elements from the top of the stack downwards.
pub struct PersistentStackIntoIterator<T> {
    stack: PersistentStack<T>,
}

impl<T: Clone> Iterator for PersistentStackIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.try_peek()?.clone();
        self.stack = self.stack.try_pop()?;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.length, Some(self.stack.length))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentStackIntoIterator<T> {
    fn len(&self) -> usize {
        self.stack.length
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for PersistentStack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FromIterator<T> for PersistentStack<T> {
    /// Builds a stack whose iteration order equals the input order, so the
    /// first item of the input becomes the top of the stack.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::build_from_vec(elements)
    }
}

impl<T: Clone> IntoIterator for PersistentStack<T> {
    type Item = T;
    type IntoIter = PersistentStackIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentStackIntoIterator { stack: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentStack<T> {
    type Item = &'a T;
    type IntoIter = PersistentStackIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentStack<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for PersistentStack<T> {}

impl<T: Hash> Hash for PersistentStack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first to distinguish stacks of different lengths
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T: Clone> Semigroup for PersistentStack<T> {
    /// Concatenates two stacks: the receiver's elements sit above the
    /// argument's elements.
    fn combine(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }

        // Re-push self's elements onto other from the bottom up, so other's
        // nodes are shared untouched
        let mut elements: Vec<T> = self.iter().cloned().collect();
        let mut result = other;
        while let Some(element) = elements.pop() {
            result = result.push(element);
        }
        result
    }
}

impl<T: Clone> Monoid for PersistentStack<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentStack<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct PersistentStackVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentStackVisitor<T>
where
    T: serde::Deserialize<'de> + Clone,
{
    type Value = PersistentStack<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentStack<T>
where
    T: serde::Deserialize<'de> + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentStackVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_creates_empty() {
        let stack: PersistentStack<i32> = PersistentStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[rstest]
    fn test_singleton() {
        let stack = PersistentStack::singleton(42);
        assert_eq!(stack.try_peek(), Some(&42));
        assert_eq!(stack.len(), 1);
    }

    #[rstest]
    fn test_push() {
        let stack = PersistentStack::new().push(1).push(2).push(3);
        assert_eq!(stack.try_peek(), Some(&3));
        assert_eq!(stack.len(), 3);
    }

    #[rstest]
    fn test_push_does_not_modify_original() {
        let stack1 = PersistentStack::new().push(1);
        let stack2 = stack1.push(2);
        assert_eq!(stack1.len(), 1);
        assert_eq!(stack1.try_peek(), Some(&1));
        assert_eq!(stack2.len(), 2);
        assert_eq!(stack2.try_peek(), Some(&2));
    }

    #[rstest]
    fn test_peek_empty_fails() {
        let empty: PersistentStack<i32> = PersistentStack::new();
        assert_eq!(empty.peek(), Err(EmptyStructureError));
    }

    #[rstest]
    fn test_pop() {
        let stack = PersistentStack::new().push(1).push(2);
        let popped = stack.pop().unwrap();
        assert_eq!(popped.try_peek(), Some(&1));
        assert_eq!(popped.len(), 1);
        // Original unchanged
        assert_eq!(stack.len(), 2);
    }

    #[rstest]
    fn test_pop_empty_fails() {
        let empty: PersistentStack<i32> = PersistentStack::new();
        assert_eq!(empty.pop().unwrap_err(), EmptyStructureError);
    }

    #[rstest]
    fn test_try_variants_on_empty() {
        let empty: PersistentStack<i32> = PersistentStack::new();
        assert_eq!(empty.try_peek(), None);
        assert!(empty.try_pop().is_none());
    }

    #[rstest]
    fn test_iter_yields_top_down() {
        let stack = PersistentStack::new().push(1).push(2).push(3);
        let collected: Vec<&i32> = stack.iter().collect();
        assert_eq!(collected, vec![&3, &2, &1]);
    }

    #[rstest]
    fn test_iter_is_restartable() {
        let stack = PersistentStack::new().push(1).push(2);
        let first: Vec<&i32> = stack.iter().collect();
        let second: Vec<&i32> = stack.iter().collect();
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_reverse() {
        let stack = PersistentStack::new().push(1).push(2).push(3);
        let reversed = stack.reverse();
        let collected: Vec<&i32> = reversed.iter().collect();
        assert_eq!(collected, vec![&1, &2, &3]);
        // Source untouched
        assert_eq!(stack.try_peek(), Some(&3));
    }

    #[rstest]
    fn test_reverse_empty() {
        let empty: PersistentStack<i32> = PersistentStack::new();
        assert!(empty.reverse().is_empty());
    }

    #[rstest]
    fn test_from_iter_preserves_order() {
        let stack: PersistentStack<i32> = (1..=3).collect();
        let collected: Vec<&i32> = stack.iter().collect();
        assert_eq!(collected, vec![&1, &2, &3]);
        assert_eq!(stack.len(), 3);
    }

    #[rstest]
    fn test_into_iter() {
        let stack: PersistentStack<i32> = (1..=3).collect();
        let collected: Vec<i32> = stack.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_eq() {
        let stack1: PersistentStack<i32> = (1..=3).collect();
        let stack2: PersistentStack<i32> = (1..=3).collect();
        let stack3: PersistentStack<i32> = (1..=4).collect();
        assert_eq!(stack1, stack2);
        assert_ne!(stack1, stack3);
    }

    #[rstest]
    fn test_display() {
        let stack: PersistentStack<i32> = (1..=3).collect();
        assert_eq!(format!("{stack}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_display_empty() {
        let empty: PersistentStack<i32> = PersistentStack::new();
        assert_eq!(format!("{empty}"), "[]");
    }

    #[rstest]
    fn test_semigroup_combine_concatenates() {
        let upper: PersistentStack<i32> = (1..=2).collect();
        let lower: PersistentStack<i32> = (3..=4).collect();
        let combined = upper.combine(lower);
        let collected: Vec<&i32> = combined.iter().collect();
        assert_eq!(collected, vec![&1, &2, &3, &4]);
    }

    #[rstest]
    fn test_monoid_empty_is_identity() {
        let stack: PersistentStack<i32> = (1..=3).collect();
        assert_eq!(PersistentStack::empty().combine(stack.clone()), stack);
        assert_eq!(stack.clone().combine(PersistentStack::empty()), stack);
    }

    #[rstest]
    fn test_len_matches_iter_count() {
        let stack: PersistentStack<i32> = (1..=10).collect();
        assert_eq!(stack.len(), stack.iter().count());
        let popped = stack.pop().unwrap();
        assert_eq!(popped.len(), popped.iter().count());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::super::PersistentStack;
        use rstest::rstest;

        #[rstest]
        fn test_serialize_in_iteration_order() {
            let stack: PersistentStack<i32> = (1..=3).collect();
            let json = serde_json::to_string(&stack).unwrap();
            assert_eq!(json, "[1,2,3]");
        }

        #[rstest]
        fn test_roundtrip() {
            let stack: PersistentStack<i32> = (1..=5).collect();
            let json = serde_json::to_string(&stack).unwrap();
            let restored: PersistentStack<i32> = serde_json::from_str(&json).unwrap();
            assert_eq!(stack, restored);
        }
    }
}
