//! Persistent (immutable) data structures.
//!
//! This module provides two immutable data structures that use structural
//! sharing to minimize copying:
//!
//! - [`PersistentStack`]: Persistent singly-linked LIFO stack
//! - [`PersistentQueue`]: Persistent FIFO queue (banker's queue)
//!
//! # Structural Sharing
//!
//! All operations return new versions without modifying the original.
//! A new version references the unchanged substructure of the value it was
//! derived from, so deriving a version is cheap and every prior version
//! remains valid and usable.
//!
//! # Examples
//!
//! ## `PersistentStack`
//!
//! ```rust
//! use bankers::persistent::PersistentStack;
//!
//! let stack = PersistentStack::new().push(1).push(2).push(3);
//! assert_eq!(stack.try_peek(), Some(&3));
//!
//! // Structural sharing: the original stack is preserved
//! let shorter = stack.pop()?;
//! assert_eq!(stack.len(), 3);    // Original unchanged
//! assert_eq!(shorter.len(), 2);  // New stack
//! # Ok::<(), bankers::persistent::EmptyStructureError>(())
//! ```
//!
//! ## `PersistentQueue`
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
//! # Error Handling
//!
//! The only error condition in this module is [`EmptyStructureError`]:
//! an unconditional accessor (`peek`, `pop`, `dequeue`) was called on an
//! empty structure. Each such accessor has a `try_` sibling that reports
//! absence as `None` instead of an error.

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Memo Cell Type Alias
// =============================================================================

/// Write-once memo slot for lazily computed values.
///
/// When the `arc` feature is enabled, this is `std::sync::OnceLock`:
/// the stored value is published with a single atomic write, so racing
/// initializers at worst duplicate work and never corrupt the cell.
///
/// When the `arc` feature is disabled (default), this is
/// `std::cell::OnceCell`, which has no synchronization overhead.
#[cfg(feature = "arc")]
pub(crate) type MemoCell<T> = std::sync::OnceLock<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type MemoCell<T> = std::cell::OnceCell<T>;

mod error;
mod queue;
mod stack;

pub use error::EmptyStructureError;
pub use queue::PersistentQueue;
pub use queue::PersistentQueueIntoIterator;
pub use queue::PersistentQueueIterator;
pub use stack::PersistentStack;
pub use stack::PersistentStackIntoIterator;
pub use stack::PersistentStackIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod memo_cell_tests {
    use super::MemoCell;
    use rstest::rstest;

    #[rstest]
    fn memo_cell_initializes_once() {
        let cell: MemoCell<i32> = MemoCell::new();
        assert_eq!(*cell.get_or_init(|| 1), 1);
        // Subsequent initializers are ignored
        assert_eq!(*cell.get_or_init(|| 2), 1);
    }

    #[rstest]
    fn memo_cell_clone_carries_value() {
        let cell: MemoCell<i32> = MemoCell::new();
        cell.get_or_init(|| 42);
        let clone = cell.clone();
        assert_eq!(clone.get(), Some(&42));
    }
}
