// The fold family. `fold` and `reduce` are total; `try_fold` and
// `try_for_each` stop at the first failure and hand that exact error back.

use crate::optional::Optional;
use crate::outcome::Outcome;

use super::sequence_core::Sequence;

impl<I> Sequence<I> {
    /// Combine every item into `init`, left to right.
    pub fn fold<B>(self, init: B, f: impl FnMut(B, I) -> B) -> B {
        self.items.into_iter().fold(init, f)
    }

    /// Fold seeded with the first item. Absent for an empty sequence.
    pub fn reduce(self, f: impl FnMut(I, I) -> I) -> Optional<I> {
        self.items.into_iter().reduce(f).into()
    }

    /// Fold with a step that may fail.
    ///
    /// The first failure ends the fold; remaining items are not visited.
    pub fn try_fold<B, E>(
        self,
        init: B,
        mut f: impl FnMut(B, I) -> Outcome<B, E>,
    ) -> Outcome<B, E> {
        let mut accumulator = init;
        for item in self.items {
            match f(accumulator, item) {
                Outcome::Success(next) => accumulator = next,
                Outcome::Failure(error) => return Outcome::Failure(error),
            }
        }
        Outcome::Success(accumulator)
    }

    /// Call `f` on every item.
    pub fn for_each(&self, f: impl FnMut(&I)) {
        self.items.iter().for_each(f)
    }

    /// Call a fallible `f` on every item, stopping at the first failure.
    ///
    /// Success values returned by `f` are discarded.
    pub fn try_for_each<B, E>(
        &self,
        mut f: impl FnMut(&I) -> Outcome<B, E>,
    ) -> Outcome<(), E> {
        for item in &self.items {
            if let Outcome::Failure(error) = f(item) {
                return Outcome::Failure(error);
            }
        }
        Outcome::Success(())
    }
}
