//! The error type shared by the persistent structures.

use std::fmt;

/// Error returned when an operation requires at least one element but the
/// structure is empty.
///
/// This is the only error condition in the [`persistent`](crate::persistent)
/// module. It is returned by the unconditional accessors
/// ([`PersistentStack::peek`], [`PersistentStack::pop`],
/// [`PersistentQueue::peek`], [`PersistentQueue::dequeue`]); the `try_`
/// variants report absence as `None` instead.
///
/// Hitting this error is a contract violation by the caller rather than a
/// recoverable runtime condition: callers that legitimately operate on
/// possibly-empty structures should use the `try_` variants.
///
/// # Examples
///
/// ```rust
/// use bankers::persistent::{EmptyStructureError, PersistentStack};
///
/// let empty: PersistentStack<i32> = PersistentStack::new();
/// assert_eq!(empty.peek(), Err(EmptyStructureError));
/// assert_eq!(empty.try_peek(), None);
/// ```
///
/// [`PersistentStack::peek`]: crate::persistent::PersistentStack::peek
/// [`PersistentStack::pop`]: crate::persistent::PersistentStack::pop
/// [`PersistentQueue::peek`]: crate::persistent::PersistentQueue::peek
/// [`PersistentQueue::dequeue`]: crate::persistent::PersistentQueue::dequeue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStructureError;

impl fmt::Display for EmptyStructureError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "operation requires at least one element but the structure is empty"
        )
    }
}

impl std::error::Error for EmptyStructureError {}

// =============================================================================
// Tests
// =============================================================================
