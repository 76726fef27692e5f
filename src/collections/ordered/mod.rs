//! A module containing [`OrderedSet`] and associated types.
//!
//! Other than the set itself, this includes [`Cursor`] for traversal with removal, [`IntoIter`] for
//! owned iteration and the errors produced by both. Borrowed iteration uses
//! [`Iter`](std::slice::Iter) from [`std::slice`], because the elements are stored contiguously.
//!
//! With the `sync` feature enabled, [`SyncOrderedSet`] wraps a set in a lock so that it can be
//! shared between threads.

mod cursor;
mod error;
mod iter;
mod membership;
mod ordered_set;
#[cfg(feature = "sync")]
mod sync;

pub use cursor::*;
pub use error::*;
pub use iter::*;
pub use ordered_set::*;
#[cfg(feature = "sync")]
pub use sync::*;
