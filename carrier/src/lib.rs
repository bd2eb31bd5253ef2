//! Optional values, outcomes and sequences with a composable combinator
//! algebra.
//!
//! - [`Optional<T>`] holds zero or one value.
//! - [`Outcome<T, E>`] holds a success value or a failure value.
//! - [`Sequence<I>`] holds a finite, ordered list of items.
//!
//! Domain failures travel through the failure channel of an [`Outcome`].
//! Contract violations by the caller, such as unwrapping an absent value or
//! indexing past the end of a sequence, are reported as [`Error`] values.

pub mod error;
mod optional;
mod outcome;
pub mod sequence;

pub use error::{Channel, Error, Result};
pub use optional::Optional;
pub use outcome::Outcome;
pub use sequence::Sequence;
