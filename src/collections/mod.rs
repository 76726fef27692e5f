//! Various general-purpose collection types.
//!
//! # Purpose
//! The centrepiece is [`OrderedSet`](ordered::OrderedSet), alongside the [`Set`](traits::Set)
//! trait which lets set-like collections from anywhere (including [`std`]) take part in bulk
//! operations and set algebra.

#[cfg(feature = "ordered")]
pub mod ordered;
#[cfg(feature = "traits")]
pub mod traits;
