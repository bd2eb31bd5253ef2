// Prefix combinators. Production stops for good at the first item where the
// governing function signals termination; nothing after that point is
// evaluated, even if it would qualify on its own.

use crate::optional::Optional;

use super::sequence_core::Sequence;

impl<I> Sequence<I> {
    /// Map items while `f` returns present, stopping at the first absent.
    pub fn map_while<B>(self, mut f: impl FnMut(I) -> Optional<B>) -> Sequence<B> {
        self.items
            .into_iter()
            .map_while(|item| Option::from(f(item)))
            .collect()
    }

    /// The leading run of items for which `predicate` holds.
    pub fn take_while(self, mut predicate: impl FnMut(&I) -> bool) -> Self {
        self.map_while(|item| {
            let keep = predicate(&item);
            Optional::then_some(keep, item)
        })
    }

    /// Everything from the first item for which `predicate` fails onward.
    ///
    /// Once the leading run is dropped, the remaining items are kept
    /// unfiltered and `predicate` is not consulted again.
    pub fn skip_while(self, mut predicate: impl FnMut(&I) -> bool) -> Self {
        let mut items = self.items;
        let start = items
            .iter()
            .position(|item| !predicate(item))
            .unwrap_or(items.len());
        items.drain(..start);
        items.into()
    }

    /// Thread `state` through `f`, emitting what it returns until it
    /// returns absent.
    pub fn scan<S, B>(
        self,
        init: S,
        mut f: impl FnMut(&mut S, I) -> Optional<B>,
    ) -> Sequence<B> {
        let mut state = init;
        self.map_while(|item| f(&mut state, item))
    }
}
