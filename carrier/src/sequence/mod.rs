/// A sequence is a finite, ordered list of items with a combinator set on
/// top of it.
///
/// Combinators are eager: each whole-pass transform builds a fresh backing
/// list before returning. Queries borrow the sequence; transforms and folds
/// consume it. Deferred composition goes through the standard iterator
/// adaptors over [`Sequence::iter`] or `into_iter`, collected back into a
/// `Sequence`.
mod creation;
mod fold;
mod prefix;
mod search;
mod sequence_core;
mod transform;

pub use sequence_core::Sequence;
