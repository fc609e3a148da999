//! Catamorphism and selection over `std::option::Option`.
//!
//! The standard `Option` is the presence/absence container used throughout
//! the crate; this trait gives it the same eliminator shape as `Either`.

/// `cata`/`select` for `Option`, shaped like [`crate::Either::cata`].
pub trait OptionCata<T> {
    /// Apply `on_some` to a present value, or call `on_none` when absent.
    fn cata<V>(self, on_some: impl FnOnce(T) -> V, on_none: impl FnOnce() -> V) -> V;

    /// Map a present value, keeping absence.
    fn select<U>(self, f: impl FnOnce(T) -> U) -> Option<U>;
}

impl<T> OptionCata<T> for Option<T> {
    fn cata<V>(self, on_some: impl FnOnce(T) -> V, on_none: impl FnOnce() -> V) -> V {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    fn select<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
        self.map(f)
    }
}
