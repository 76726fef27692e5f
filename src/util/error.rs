use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An index fell outside the range an operation accepts. `len` is the length of the collection at
/// the time of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The rejected index.
    pub index: usize,
    /// The length of the collection when the index was rejected.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// An operation that this collection deliberately doesn't provide was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unsupported {
    /// The name of the operation, in `Type::method` form.
    pub operation: &'static str,
}

impl Unsupported {
    pub(crate) const fn new(operation: &'static str) -> Unsupported {
        Unsupported {
            operation,
        }
    }
}

impl Display for Unsupported {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not supported!", self.operation)
    }
}

impl Error for Unsupported {}
