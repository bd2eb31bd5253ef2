// Whole-pass combinators. Each one walks the entire sequence once and
// builds a brand-new backing list; the receiver is consumed.

use crate::error::{self, Error};
use crate::optional::Optional;

use super::sequence_core::Sequence;

impl<I> Sequence<I> {
    pub fn map<B>(self, f: impl FnMut(I) -> B) -> Sequence<B> {
        self.items.into_iter().map(f).collect()
    }

    /// Keep the items for which `predicate` holds, in order.
    pub fn filter(self, mut predicate: impl FnMut(&I) -> bool) -> Self {
        self.items
            .into_iter()
            .filter(|item| predicate(item))
            .collect()
    }

    /// Map every item and keep only the present results.
    pub fn filter_map<B>(self, mut f: impl FnMut(I) -> Optional<B>) -> Sequence<B> {
        self.items
            .into_iter()
            .filter_map(|item| Option::from(f(item)))
            .collect()
    }

    /// Pair every item with its index.
    pub fn enumerate(self) -> Sequence<(usize, I)> {
        self.items.into_iter().enumerate().collect()
    }

    /// Pair items by index. The result is as long as the shorter of the
    /// two sequences; the excess of the longer one is dropped.
    pub fn zip<U>(self, other: Sequence<U>) -> Sequence<(I, U)> {
        self.items.into_iter().zip(other.items).collect()
    }

    /// Concatenate two sequences producing a new sequence.
    pub fn chain(self, other: Self) -> Self {
        let mut items = Vec::with_capacity(self.len() + other.len());
        items.extend(self.items);
        items.extend(other.items);
        items.into()
    }

    /// Map every item to a sequence and concatenate the results.
    pub fn flat_map<B>(self, f: impl FnMut(I) -> Sequence<B>) -> Sequence<B> {
        self.items.into_iter().flat_map(f).collect()
    }

    pub fn rev(self) -> Self {
        let mut items = self.items;
        items.reverse();
        items.into()
    }

    /// Every `step`-th item, starting with the first.
    ///
    /// A step of zero would never advance, so it's rejected with
    /// [`Error::InvalidArgument`].
    pub fn step_by(self, step: usize) -> error::Result<Self> {
        if step == 0 {
            return Err(Error::invalid_argument(
                "step",
                "must be greater than zero",
            ));
        }
        Ok(self.items.into_iter().step_by(step).collect())
    }

    /// Rotate by one: the first item moves to the end.
    ///
    /// This is a single rotation, not an endless repetition.
    pub fn cycle(self) -> Self {
        let mut items = self.items;
        if !items.is_empty() {
            items.rotate_left(1);
        }
        items.into()
    }

    /// Drop the first `n` items.
    pub fn skip(self, n: usize) -> Self {
        self.items.into_iter().skip(n).collect()
    }

    /// Keep only the first `n` items.
    pub fn take(self, n: usize) -> Self {
        let mut items = self.items;
        items.truncate(n);
        items.into()
    }

    /// Split into the items for which `predicate` holds and those for which
    /// it doesn't, both in their original order.
    pub fn partition(self, predicate: impl FnMut(&I) -> bool) -> (Self, Self) {
        let (matching, rest): (Vec<I>, Vec<I>) = self.items.into_iter().partition(predicate);
        (matching.into(), rest.into())
    }

    /// Call `f` on every item, then hand the sequence back unchanged.
    pub fn inspect(self, f: impl FnMut(&I)) -> Self {
        self.items.iter().for_each(f);
        self
    }
}

impl<I> Sequence<Sequence<I>> {
    pub fn flatten(self) -> Sequence<I> {
        self.items.into_iter().flatten().collect()
    }
}

impl<A, B> Sequence<(A, B)> {
    /// Split a sequence of pairs into a pair of sequences.
    pub fn unzip(self) -> (Sequence<A>, Sequence<B>) {
        let (a, b): (Vec<A>, Vec<B>) = self.items.into_iter().unzip();
        (a.into(), b.into())
    }
}
