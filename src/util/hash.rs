use std::hash::{BuildHasher, Hash, Hasher};

/// A key whose hash is chosen by the test, so collisions can be arranged. Equality only considers
/// the label.
#[derive(Debug, Clone)]
pub struct FixedHash<T: Eq> {
    hash: u64,
    label: T,
}

impl<T: Eq> FixedHash<T> {
    pub const fn new(hash: u64, label: T) -> FixedHash<T> {
        FixedHash { hash, label }
    }

    pub fn label(self) -> T {
        self.label
    }
}

impl<T: Eq> Hash for FixedHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for FixedHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<T: Eq> Eq for FixedHash<T> {}

/// Passes `write_u64` through untouched, so [`FixedHash`] keys land on `hash % buckets`.
#[derive(Debug, Default)]
pub struct PassThroughHasher {
    state: u64,
}

impl Hasher for PassThroughHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for (offset, byte) in bytes.iter().enumerate() {
            self.state ^= (*byte as u64) << ((offset % 8) * 8);
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.state = value;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughBuilder;

impl BuildHasher for PassThroughBuilder {
    type Hasher = PassThroughHasher;

    fn build_hasher(&self) -> Self::Hasher {
        PassThroughHasher::default()
    }
}
