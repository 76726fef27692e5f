use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, Unsupported};

/// A [`Cursor`](super::Cursor) was stepped past either end of its set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSuchElement;

impl Display for NoSuchElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor has no element in that direction!")
    }
}

impl Error for NoSuchElement {}

/// [`Cursor::remove`](super::Cursor::remove) was called when there was nothing to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum IllegalState {
    /// Neither `next` nor `previous` has been called on the cursor yet.
    #[display("Cursor::next or Cursor::previous must be called before Cursor::remove!")]
    NoCurrent,
    /// The element last returned by the cursor has already been removed.
    #[display("The element last returned by the cursor has already been removed!")]
    AlreadyRemoved,
}

/// A load factor that isn't a finite, positive number was provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidLoadFactor(pub f32);

impl Display for InvalidLoadFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Load factor must be finite and greater than 0, got {}!", self.0)
    }
}

impl Error for InvalidLoadFactor {}

/// Any error produced by [`OrderedSet`](super::OrderedSet) or its [`Cursor`](super::Cursor).
///
/// Individual operations return the narrowest error they can produce. This enum exists so that
/// callers mixing several operations can propagate all of them with `?`, and still tell them apart
/// afterwards (e.g. with [`is_unsupported`](OrderedSetError::is_unsupported)).
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum OrderedSetError {
    IndexOutOfBounds(IndexOutOfBounds),
    NoSuchElement(NoSuchElement),
    IllegalState(IllegalState),
    Unsupported(Unsupported),
    InvalidLoadFactor(InvalidLoadFactor),
}
