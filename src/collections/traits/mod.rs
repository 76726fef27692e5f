//! Traits shared between collections in this crate and the collections they interoperate with.

pub mod set;


#[doc(inline)]
pub use set::Set;
