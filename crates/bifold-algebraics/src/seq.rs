//! Lazy sequence primitives: first-match search and short-circuiting fold.
//!
//! Both operations pull from the iterator only as far as they need to. A
//! sequence is restarted by re-creating the iterator from its source.

use std::ops::ControlFlow;

/// Searching and folding over any [`Iterator`].
pub trait LazySeq: Iterator + Sized {
    /// The first element satisfying `predicate`, or `None`.
    ///
    /// Elements after the match are not pulled.
    fn first_or_none<P>(&mut self, mut predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        for item in self {
            if predicate(&item) {
                return Some(item);
            }
        }
        None
    }

    /// Left-to-right fold that can halt early.
    ///
    /// `fold` returns `Continue(next)` to keep going or `Break(last)` to stop;
    /// after a break no further element is pulled and `last` is returned as
    /// the frozen accumulator.
    fn aggregate_while<A, F>(self, seed: A, mut fold: F) -> A
    where
        F: FnMut(A, Self::Item) -> ControlFlow<A, A>,
    {
        let mut acc = seed;
        for item in self {
            match fold(acc, item) {
                ControlFlow::Continue(next) => acc = next,
                ControlFlow::Break(last) => return last,
            }
        }
        acc
    }
}

impl<I: Iterator> LazySeq for I {}
