use std::hash::{BuildHasher, Hash, Hasher};

/// A value with a hash chosen by the test rather than derived from its contents. Two values with
/// the same `hash` but different `value`s collide in every hash-based structure.
#[derive(Debug, Clone, Copy)]
pub struct Colliding<T: Eq> {
    pub hash: u64,
    pub value: T,
}

impl<T: Eq> Colliding<T> {
    pub const fn new(hash: u64, value: T) -> Colliding<T> {
        Colliding {
            hash,
            value,
        }
    }
}

impl<T: Eq> Hash for Colliding<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for Colliding<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Colliding<T> {}

/// Passes `write_u64` straight through, so a [`Colliding`] value lands in bucket `hash % cap`.
#[derive(Debug, Default)]
pub struct IdentityHasher {
    state: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.rotate_left(8) ^ u64::from(*byte);
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }
}

#[derive(Debug, Default, Clone)]
pub struct IdentityHasherBuilder;

impl BuildHasher for IdentityHasherBuilder {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher::default()
    }
}
