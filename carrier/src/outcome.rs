use crate::error::{self, Channel, Error};
use crate::optional::Optional;
use crate::sequence::Sequence;

/// Exactly one of a success value `T` or a failure value `E`.
///
/// The failure channel is never thrown away by a transform: a failure
/// passes through `map`, `and_then` and friends unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

use Outcome::{Failure, Success};

impl<T, E> Outcome<T, E> {
    pub fn success(value: T) -> Self {
        Success(value)
    }

    pub fn failure(error: E) -> Self {
        Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn is_success_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Success(value) => predicate(value),
            Failure(_) => false,
        }
    }

    pub fn is_failure_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
        match self {
            Success(_) => false,
            Failure(error) => predicate(error),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// The success value, if any.
    pub fn ok(self) -> Optional<T> {
        match self {
            Success(value) => Optional::Present(value),
            Failure(_) => Optional::Absent,
        }
    }

    /// The failure value, if any.
    pub fn err(self) -> Optional<E> {
        match self {
            Success(_) => Optional::Absent,
            Failure(error) => Optional::Present(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Success(value) => f(value),
            Failure(_) => default,
        }
    }

    pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Success(value) => f(value),
            Failure(error) => default(error),
        }
    }

    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Success(value) = &self {
            f(value);
        }
        self
    }

    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Failure(error) = &self {
            f(error);
        }
        self
    }

    /// A sequence over a reference to the success value; empty on failure.
    pub fn iter(&self) -> Sequence<&T> {
        self.as_ref().into_sequence()
    }

    pub fn into_sequence(self) -> Sequence<T> {
        self.ok().into_sequence()
    }

    /// `other` on success, the receiver's failure otherwise.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(_) => other,
            Failure(error) => Failure(error),
        }
    }

    /// Chain into `f` on success. A failure short-circuits with the
    /// original error value and `f` is never called.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(value) => f(value),
            Failure(error) => Failure(error),
        }
    }

    /// The receiver on success, otherwise `other` if that succeeds.
    ///
    /// When both fail the receiver's error is returned, not the
    /// alternative's.
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, E> {
        match (self, other) {
            (Success(value), _) => Success(value),
            (Failure(_), Success(value)) => Success(value),
            (Failure(error), Failure(_)) => Failure(error),
        }
    }

    /// Like [`or`](Outcome::or), with the alternative computed from the
    /// receiver's error. `f` only runs on failure.
    pub fn or_else<F>(self, f: impl FnOnce(&E) -> Outcome<T, F>) -> Outcome<T, E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => match f(&error) {
                Success(value) => Success(value),
                Failure(_) => Failure(error),
            },
        }
    }

    /// The success value, or [`Error::UnwrapOnWrongVariant`].
    pub fn unwrap(self) -> error::Result<T> {
        match self {
            Success(value) => Ok(value),
            Failure(_) => Err(Error::unwrap_on_wrong_variant(Channel::Success, None)),
        }
    }

    /// The failure value, or [`Error::UnwrapOnWrongVariant`].
    pub fn unwrap_err(self) -> error::Result<E> {
        match self {
            Success(_) => Err(Error::unwrap_on_wrong_variant(Channel::Failure, None)),
            Failure(error) => Ok(error),
        }
    }

    pub fn expect(self, message: &str) -> error::Result<T> {
        match self {
            Success(value) => Ok(value),
            Failure(_) => Err(Error::unwrap_on_wrong_variant(
                Channel::Success,
                Some(message),
            )),
        }
    }

    pub fn expect_err(self, message: &str) -> error::Result<E> {
        match self {
            Success(_) => Err(Error::unwrap_on_wrong_variant(
                Channel::Failure,
                Some(message),
            )),
            Failure(error) => Ok(error),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Success(value) => value,
            Failure(error) => f(error),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Outcome<Optional<T>, E> {
    /// Swap the outcome and optional layers.
    ///
    /// A failure becomes present failure, success of absent becomes absent,
    /// success of present becomes present success. Inverse of
    /// [`Optional::transpose`].
    pub fn transpose(self) -> Optional<Outcome<T, E>> {
        match self {
            Success(Optional::Present(value)) => Optional::Present(Success(value)),
            Success(Optional::Absent) => Optional::Absent,
            Failure(error) => Optional::Present(Failure(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::from(self.ok()).into_iter()
    }
}
