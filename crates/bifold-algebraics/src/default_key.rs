//! Fixed-or-computed default keys.
//!
//! A keyed pool that lends values under a default key needs either a fixed
//! key or a generator called on every borrow. `DefaultKey` carries that choice
//! as an [`Either`] and resolves it on demand.

use crate::either::Either;
use std::fmt;

/// Generator for a lazily computed key.
pub type KeyFactory<K> = Box<dyn Fn() -> K + Send + Sync>;

pub struct DefaultKey<K> {
    source: Either<K, KeyFactory<K>>,
}

impl<K> DefaultKey<K> {
    /// Always resolve to `key`.
    pub fn fixed(key: K) -> Self {
        Self {
            source: Either::Left(key),
        }
    }

    /// Call `factory` on every resolution.
    pub fn computed(factory: impl Fn() -> K + Send + Sync + 'static) -> Self {
        Self {
            source: Either::Right(Box::new(factory)),
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.source.is_left()
    }

    /// The fixed key, or a freshly computed one.
    pub fn resolve(&self) -> K
    where
        K: Clone,
    {
        self.source.as_ref().cata(K::clone, |factory| factory())
    }
}

impl<K: fmt::Debug> fmt::Debug for DefaultKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Either::Left(key) => f.debug_tuple("DefaultKey::Fixed").field(key).finish(),
            Either::Right(_) => f.write_str("DefaultKey::Computed"),
        }
    }
}
