//! # bankers
//!
//! Persistent (immutable) FIFO queue and stack with structural sharing.
//!
//! ## Overview
//!
//! This library provides two persistent data structures:
//!
//! - [`persistent::PersistentStack`]: an immutable singly-linked LIFO stack
//!   with O(1) push, pop, and peek
//! - [`persistent::PersistentQueue`]: an immutable FIFO queue built from two
//!   stacks using the classic banker's queue technique, with amortized O(1)
//!   enqueue and dequeue
//!
//! Every "mutating" operation returns a new value and leaves the receiver
//! untouched. New values share unchanged structure with the values they are
//! derived from, so deriving a version is cheap and all versions stay valid.
//!
//! ```rust
//! use bankers::persistent::PersistentQueue;
//!
//! let queue: PersistentQueue<i32> = [1, 2, 3].into_iter().collect();
//! let shorter = queue.dequeue()?;
//!
//! assert_eq!(queue.len(), 3);            // Original unchanged
//! assert_eq!(shorter.try_peek(), Some(&2));
//! # Ok::<(), bankers::persistent::EmptyStructureError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup` and `Monoid` traits
//! - `persistent`: the stack and queue
//! - `arc`: use `Arc` instead of `Rc` internally, making the structures
//!   `Send + Sync` for `T: Send + Sync`
//! - `serde`: `Serialize`/`Deserialize` as plain sequences
//! - `full`: enable all features

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use bankers::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;
