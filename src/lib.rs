//! A small collections crate built around [`OrderedSet`](collections::ordered::OrderedSet), a
//! container that is a de-duplicating set and an insertion-ordered, indexable list at the same
//! time.
//!
//! # Purpose
//! Plenty of code wants a set that remembers the order things were added in and still lets you ask
//! "what's at position 3?". The usual answer is to keep a list and a set side by side and hope
//! they never drift apart. [`OrderedSet`](collections::ordered::OrderedSet) owns both halves and
//! keeps them in step, so callers can't break the bookkeeping.
//!
//! # Method
//! Elements live in one growable array, in display order. A separate open-addressing index maps
//! element hashes to positions in that array, which gives `O(1)` membership tests without storing
//! a second copy of each element. The array grows and shrinks on its own schedule (see
//! [`OrderedSet::cap`](collections::ordered::OrderedSet::cap)), independently of the index.
//!
//! # Error Handling
//! Misuse is reported with small, strongly typed errors (mostly ZSTs or plain structs) that
//! implement [`Error`](std::error::Error). Each operation returns the narrowest error it can
//! produce, and all of them convert into
//! [`OrderedSetError`](collections::ordered::OrderedSetError) so `?` works across a mix of calls.
//! A few convenience paths (indexing with `[]`, constructors that take a load factor) panic
//! instead, and say so in their docs.
//!
//! Every fallible operation checks its arguments before touching either the array or the index, so
//! a rejected call never leaves the set half-updated.
//!
//! # Threads
//! [`OrderedSet`](collections::ordered::OrderedSet) does no locking of its own. When a set needs to
//! be shared between threads, wrap it in
//! [`SyncOrderedSet`](collections::ordered::SyncOrderedSet) (behind the `sync` feature), which
//! serializes every call through a single lock.
//!
//! # Dependencies
//! Errors are derived with `derive_more` to skip some very repetitive programming. The `sync`
//! feature pulls in `parking_lot` for its mutex.
#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
