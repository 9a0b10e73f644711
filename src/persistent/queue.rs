//! Persistent (immutable) FIFO queue.
//!
//! This module provides [`PersistentQueue`], an immutable first-in-first-out
//! queue built from two [`PersistentStack`]s using the classic banker's
//! queue technique with memoized lazy reversal.
//!
//! # Overview
//!
//! `PersistentQueue` provides:
//!
//! - O(1) `enqueue`
//! - amortized O(1) `dequeue`
//! - O(1) `peek`, `len`, `is_empty`
//!
//! All operations return new queues without modifying the original,
//! and structural sharing ensures memory efficiency.
//!
//! # Two-Stack Representation
//!
//! A queue holds a `front` stack ready for dequeue and a `back` stack
//! accumulating enqueued elements in reverse order:
//!
//! ```text
//! logical FIFO order = front (top to bottom) ++ reverse(back)
//! ```
//!
//! `enqueue` pushes onto `back`; `dequeue` pops from `front`. When `front`
//! runs out, `back` is reversed into a fresh `front` in one O(n) rebuild.
//! Each element is pushed onto `back` once, reversed once, and popped from
//! `front` once, so any sequence of m operations does O(m) total work.
//!
//! The reversal of `back` is memoized in a write-once cell. The memo is
//! idempotent (`back` is immutable, so every computation yields the same
//! stack) and, with the `arc` feature, published atomically, so concurrent
//! readers at worst duplicate the reversal.
//!
//! # Examples
//!
//! ```rust
//! use bankers::persistent::PersistentQueue;
//!
//! let queue = PersistentQueue::new().enqueue(1).enqueue(2).enqueue(3);
//! assert_eq!(queue.try_peek(), Some(&1));
//!
//! // Structural sharing: the original queue is preserved
//! let shorter = queue.dequeue()?;
//! assert_eq!(queue.len(), 3);               // Original unchanged
//! assert_eq!(shorter.try_peek(), Some(&2)); // New queue
//! # Ok::<(), bankers::persistent::EmptyStructureError>(())
//! ```
//!
//! # References
//!
//! - Okasaki, "Purely Functional Data Structures" (1998), chapter 5

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::{EmptyStructureError, MemoCell, PersistentStack, PersistentStackIterator};
use crate::typeclass::{Monoid, Semigroup};

/// A persistent (immutable) FIFO queue.
///
/// `PersistentQueue` is an immutable data structure that uses structural
/// sharing to efficiently support functional programming patterns. The
/// empty queue allocates nothing, so it serves as the canonical shared
/// empty value.
///
/// # Time Complexity
///
/// | Operation  | Complexity       |
/// |------------|------------------|
/// | `new`      | O(1)             |
/// | `enqueue`  | O(1)             |
/// | `dequeue`  | amortized O(1)   |
/// | `peek`     | O(1)             |
/// | `len`      | O(1)             |
/// | `append`   | amortized O(m)   |
///
/// # Invariants
///
/// - The `front` and `back` stacks never change after construction; only
///   the internal memo of `reverse(back)` may be populated later, and doing
///   so is observably inert.
/// - `front` is non-empty whenever the queue is non-empty: `enqueue` onto
///   an empty queue seeds `front` directly, and the `dequeue` rebuild moves
///   the reversed `back` into `front`.
///
/// # Examples
///
/// ```rust
/// use bankers::persistent::PersistentQueue;
///
/// let queue: PersistentQueue<i32> = (1..=3).collect();
/// let drained: Vec<i32> = queue.into_iter().collect();
/// assert_eq!(drained, vec![1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct PersistentQueue<T> {
    /// Dequeue side, in FIFO order from the top down.
    front: PersistentStack<T>,
    /// Enqueue side, in reverse FIFO order.
    back: PersistentStack<T>,
    /// Memoized `back.reverse()`, computed at most once per queue value.
    back_reversed: MemoCell<PersistentStack<T>>,
}

impl<T> PersistentQueue<T> {
    /// Creates a new empty queue.
    ///
    /// The empty queue holds no allocation, so every empty queue is the
    /// same canonical value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentQueue;
    ///
    /// let queue: PersistentQueue<i32> = PersistentQueue::new();
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            front: PersistentStack::new(),
            back: PersistentStack::new(),
            back_reversed: MemoCell::new(),
        }
    }

    /// Creates a queue containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentQueue;
    ///
    /// let queue = PersistentQueue::singleton(42);
    /// assert_eq!(queue.try_peek(), Some(&42));
    /// assert_eq!(queue.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::from_halves(PersistentStack::singleton(element), PersistentStack::new())
    }

    /// Assembles a queue from its two halves with a fresh memo cell.
    fn from_halves(front: PersistentStack<T>, back: PersistentStack<T>) -> Self {
        Self {
            front,
            back,
            back_reversed: MemoCell::new(),
        }
    }

    /// Returns the number of elements in the queue.
    ///
    /// # Complexity
    ///
    /// O(1) - both halves cache their lengths
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentQueue;
    ///
    /// let queue: PersistentQueue<i32> = (1..=3).collect();
    /// assert_eq!(queue.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    /// Returns `true` if the queue contains no elements.
    ///
    /// A queue is empty exactly when both halves are empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentQueue;
    ///
    /// let empty: PersistentQueue<i32> = PersistentQueue::new();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// Returns the empty queue.
    ///
    /// The result shares nothing with the receiver, as expected for a
    /// reset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentQueue;
    ///
    /// let queue: PersistentQueue<i32> = (1..=3).collect();
    /// assert!(queue.clear().is_empty());
    /// assert_eq!(queue.len(), 3); // Original unchanged
    /// ```
    #[inline]
    #[must_use]
    pub const fn clear(&self) -> Self {
        Self::new()
    }

    /// Returns a reference to the element at the head of the queue.
    ///
    /// `front` is non-empty whenever the queue is non-empty, so peeking at
    /// `front` alone is sufficient.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentQueue;
    ///
    /// let queue: PersistentQueue<i32> = (1..=3).collect();
    /// assert_eq!(queue.peek(), Ok(&1));
    ///
    /// let empty: PersistentQueue<i32> = PersistentQueue::new();
    /// assert!(empty.peek().is_err());
    /// ```
    #[inline]
    pub fn peek(&self) -> Result<&T, EmptyStructureError> {
        self.front.peek()
    }

    /// Returns a reference to the element at the head of the queue, or
    /// `None` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentQueue;
    ///
    /// let queue = PersistentQueue::singleton(1);
    /// assert_eq!(queue.try_peek(), Some(&1));
    ///
    /// let empty: PersistentQueue<i32> = PersistentQueue::new();
    /// assert_eq!(empty.try_peek(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn try_peek(&self) -> Option<&T> {
        self.front.try_peek()
    }
}

impl<T: Clone> PersistentQueue<T> {
    /// Returns the memoized reversal of `back`, computing it on first use.
    ///
    /// Idempotent: `back` never changes, so every computation yields the
    /// same stack. With the `arc` feature the store is a single atomic
    /// publish, so racing computations at worst duplicate work.
    fn reversed_back(&self) -> &PersistentStack<T> {
        self.back_reversed.get_or_init(|| self.back.reverse())
    }

    /// Adds an element at the tail of the queue.
    ///
    /// On an empty receiver the element is seeded directly into `front`,
    /// keeping the single-element queue ready for an O(1) `peek`/`dequeue`;
    /// otherwise the element is pushed onto `back`.
    ///
    /// # Complexity
    ///
    /// O(1) time and space, independent of the queue size
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentQueue;
    ///
    /// let queue = PersistentQueue::new().enqueue(1).enqueue(2);
    /// assert_eq!(queue.try_peek(), Some(&1));
    /// assert_eq!(queue.len(), 2);
    /// ```
    #[must_use]
    pub fn enqueue(&self, element: T) -> Self {
        if self.is_empty() {
            Self::singleton(element)
        } else {
            Self::from_halves(self.front.clone(), self.back.push(element))
        }
    }

    /// Returns the queue without its head element.
    ///
    /// When popping `front` leaves it empty but `back` still holds
    /// elements, the queue is rebuilt by moving the memoized reversal of
    /// `back` into `front`. That rebuild costs O(|back|), but each element
    /// is reversed at most once over its lifetime in the queue, so any
    /// sequence of m operations does O(m) total work: amortized O(1).
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentQueue;
    ///
    /// let queue: PersistentQueue<i32> = (1..=3).collect();
    /// let shorter = queue.dequeue()?;
    /// assert_eq!(shorter.try_peek(), Some(&2));
    /// assert_eq!(queue.len(), 3); // Original unchanged
    /// # Ok::<(), bankers::persistent::EmptyStructureError>(())
    /// ```
    pub fn dequeue(&self) -> Result<Self, EmptyStructureError> {
        let popped_front = self.front.pop()?;
        if !popped_front.is_empty() {
            Ok(Self::from_halves(popped_front, self.back.clone()))
        } else if self.back.is_empty() {
            Ok(Self::new())
        } else {
            // Amortizing rebuild: reuse the memo so call paths that already
            // forced the reversed view never recompute it
            Ok(Self::from_halves(
                self.reversed_back().clone(),
                PersistentStack::new(),
            ))
        }
    }

    /// Removes the head element, returning it together with the remaining
    /// queue.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentQueue;
    ///
    /// let queue: PersistentQueue<i32> = (1..=3).collect();
    /// let (element, rest) = queue.dequeue_value()?;
    /// assert_eq!(element, 1);
    /// assert_eq!(rest.len(), 2);
    /// # Ok::<(), bankers::persistent::EmptyStructureError>(())
    /// ```
    pub fn dequeue_value(&self) -> Result<(T, Self), EmptyStructureError> {
        let element = self.peek()?.clone();
        Ok((element, self.dequeue()?))
    }

    /// Removes the head element if there is one.
    ///
    /// Returns `(remaining queue, Some(element))` for a non-empty receiver
    /// and `(unchanged clone, None)` for an empty one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentQueue;
    ///
    /// let queue: PersistentQueue<i32> = (1..=2).collect();
    /// let (rest, element) = queue.try_dequeue();
    /// assert_eq!(element, Some(1));
    /// assert_eq!(rest.len(), 1);
    ///
    /// let empty: PersistentQueue<i32> = PersistentQueue::new();
    /// let (unchanged, nothing) = empty.try_dequeue();
    /// assert!(unchanged.is_empty());
    /// assert_eq!(nothing, None);
    /// ```
    #[must_use]
    pub fn try_dequeue(&self) -> (Self, Option<T>) {
        match self.dequeue() {
            Ok(rest) => (rest, self.try_peek().cloned()),
            Err(EmptyStructureError) => (self.clone(), None),
        }
    }

    /// Appends another queue to this queue.
    ///
    /// Every element of `other` is enqueued in its FIFO order, so the
    /// result dequeues all of the receiver's elements first, then all of
    /// `other`'s.
    ///
    /// Associative, with the empty queue as two-sided identity.
    ///
    /// # Complexity
    ///
    /// Amortized O(m) where m = `other.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentQueue;
    ///
    /// let first: PersistentQueue<i32> = (1..=2).collect();
    /// let second: PersistentQueue<i32> = (3..=4).collect();
    /// let combined = first.append(&second);
    ///
    /// let drained: Vec<i32> = combined.into_iter().collect();
    /// assert_eq!(drained, vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for element in other.iter() {
            result = result.enqueue(element.clone());
        }
        result
    }

    /// Returns an iterator over references to the elements in FIFO order.
    ///
    /// The iterator yields exactly the order in which elements would be
    /// dequeued, not the physical storage order: `front` top to bottom,
    /// then the memoized reversal of `back`. Forcing the memo here is
    /// observably inert.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bankers::persistent::PersistentQueue;
    ///
    /// let queue: PersistentQueue<i32> = (1..=3).collect();
    /// let collected: Vec<&i32> = queue.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentQueueIterator<'_, T> {
        PersistentQueueIterator {
            front: self.front.iter(),
            back_reversed: self.reversed_back().iter(),
        }
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over references to elements of a [`PersistentQueue`] in
/// FIFO order.
pub struct PersistentQueueIterator<'a, T> {
    front: PersistentStackIterator<'a, T>,
    back_reversed: PersistentStackIterator<'a, T>,
}

impl<'a, T> Iterator for PersistentQueueIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.front.next().or_else(|| self.back_reversed.next())
    }
}

/// An owning iterator over elements of a [`PersistentQueue`] in FIFO order.
pub struct PersistentQueueIntoIterator<T> {
    queue: PersistentQueue<T>,
}

impl<T: Clone> Iterator for PersistentQueueIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (element, rest) = self.queue.dequeue_value().ok()?;
        self.queue = rest;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentQueueIntoIterator<T> {
    fn len(&self) -> usize {
        self.queue.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for PersistentQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FromIterator<T> for PersistentQueue<T> {
    /// Builds a queue by enqueuing each item, so the FIFO order equals the
    /// input iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |queue, element| queue.enqueue(element))
    }
}

impl<T: Clone> IntoIterator for PersistentQueue<T> {
    type Item = T;
    type IntoIter = PersistentQueueIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentQueueIntoIterator { queue: self }
    }
}

impl<'a, T: Clone> IntoIterator for &'a PersistentQueue<T> {
    type Item = &'a T;
    type IntoIter = PersistentQueueIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Equality observes the logical FIFO sequence only: two queues holding the
/// same elements are equal even when they distribute them differently
/// between `front` and `back`.
impl<T: Clone + PartialEq> PartialEq for PersistentQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Clone + Eq> Eq for PersistentQueue<T> {}

/// The hash likewise observes only the FIFO sequence, keeping Hash-Eq
/// consistency across different physical splits.
impl<T: Clone + Hash> Hash for PersistentQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for PersistentQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + fmt::Display> fmt::Display for PersistentQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self.iter() {
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

impl<T: Clone> Semigroup for PersistentQueue<T> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.append(other)
    }
}

impl<T: Clone> Monoid for PersistentQueue<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize + Clone> serde::Serialize for PersistentQueue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self.iter() {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct PersistentQueueVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentQueueVisitor<T>
where
    T: serde::Deserialize<'de> + Clone,
{
    type Value = PersistentQueue<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut queue = PersistentQueue::new();
        while let Some(element) = access.next_element()? {
            queue = queue.enqueue(element);
        }
        Ok(queue)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentQueue<T>
where
    T: serde::Deserialize<'de> + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentQueueVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
