use crate::error::{self, Error};
use crate::outcome::Outcome;
use crate::sequence::Sequence;

/// Zero or one value of type `T`.
///
/// This is a tagged variant: a payload that is itself absence-like, such as
/// `Optional::Present(Optional::Absent)`, stays present.
///
/// Transforms consume the receiver and return a new value. The only in
/// place mutations are [`take`](Optional::take),
/// [`take_if`](Optional::take_if), [`replace`](Optional::replace),
/// [`insert`](Optional::insert) and the `get_or_insert` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    Absent,
    Present(T),
}

use Optional::{Absent, Present};

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Absent
    }
}

impl<T> Optional<T> {
    /// An optional holding `value`.
    pub fn present(value: T) -> Self {
        Present(value)
    }

    /// An optional holding nothing.
    pub fn absent() -> Self {
        Absent
    }

    /// `present(f())` if `condition` holds. `f` is not called otherwise.
    pub fn then(condition: bool, f: impl FnOnce() -> T) -> Self {
        if condition {
            Present(f())
        } else {
            Absent
        }
    }

    /// `present(value)` if `condition` holds.
    pub fn then_some(condition: bool, value: T) -> Self {
        if condition {
            Present(value)
        } else {
            Absent
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Present and the value satisfies `predicate`.
    pub fn is_present_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Present(value) => predicate(value),
            Absent => false,
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// The held value, or [`Error::UnwrapOnAbsent`] carrying `message`.
    pub fn expect(self, message: &str) -> error::Result<T> {
        match self {
            Present(value) => Ok(value),
            Absent => Err(Error::unwrap_on_absent(Some(message))),
        }
    }

    /// The held value, or [`Error::UnwrapOnAbsent`].
    pub fn unwrap(self) -> error::Result<T> {
        match self {
            Present(value) => Ok(value),
            Absent => Err(Error::unwrap_on_absent(None)),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Present(value) => value,
            Absent => default,
        }
    }

    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Present(value) => value,
            Absent => f(),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Apply `f` to the held value. `f` runs at most once, and never when
    /// absent.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Present(value) => Present(f(value)),
            Absent => Absent,
        }
    }

    /// Call `f` with a reference to the held value, then return `self`.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Present(value) = &self {
            f(value);
        }
        self
    }

    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Present(value) => f(value),
            Absent => default,
        }
    }

    pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Present(value) => f(value),
            Absent => default(),
        }
    }

    /// Success of the held value, or failure of `error`.
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Present(value) => Outcome::Success(value),
            Absent => Outcome::Failure(error),
        }
    }

    /// Like [`ok_or`](Optional::ok_or), building the error lazily.
    pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Outcome<T, E> {
        match self {
            Present(value) => Outcome::Success(value),
            Absent => Outcome::Failure(error()),
        }
    }

    /// A sequence over a reference to the held value; empty when absent.
    pub fn iter(&self) -> Sequence<&T> {
        self.as_ref().into_sequence()
    }

    /// A sequence of zero or one element.
    pub fn into_sequence(self) -> Sequence<T> {
        match self {
            Present(value) => Sequence::new(vec![value]),
            Absent => Sequence::empty(),
        }
    }

    /// `other` if `self` is present, absent otherwise.
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Present(_) => other,
            Absent => Absent,
        }
    }

    /// Chain into `f` when present. Absence short-circuits and `f` is
    /// never called.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Present(value) => f(value),
            Absent => Absent,
        }
    }

    /// Keep the held value only if `predicate` holds for it.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        if let Present(value) = self {
            if predicate(&value) {
                return Present(value);
            }
        }
        Absent
    }

    /// The first present of `self` and `other`.
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            Present(_) => self,
            Absent => other,
        }
    }

    /// `self` if present, otherwise the result of `f`. `f` is only called
    /// on the absent path.
    pub fn or_else(self, f: impl FnOnce() -> Optional<T>) -> Optional<T> {
        match self {
            Present(_) => self,
            Absent => f(),
        }
    }

    /// Present if exactly one of `self` and `other` is.
    pub fn xor(self, other: Optional<T>) -> Optional<T> {
        match (self, other) {
            (Present(value), Absent) | (Absent, Present(value)) => Present(value),
            _ => Absent,
        }
    }

    /// Store `value`, dropping whatever was held, and hand out a reference
    /// to it.
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Present(value);
        match self {
            Present(value) => value,
            Absent => unreachable!(),
        }
    }

    /// Store `value` if absent, then return a reference to the held value.
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Like [`get_or_insert`](Optional::get_or_insert); `f` only runs when
    /// absent.
    pub fn get_or_insert_with(&mut self, f: impl FnOnce() -> T) -> &mut T {
        if let Absent = self {
            *self = Present(f());
        }
        match self {
            Present(value) => value,
            Absent => unreachable!(),
        }
    }

    /// Leave absent behind and return what was held.
    pub fn take(&mut self) -> Optional<T> {
        std::mem::take(self)
    }

    /// Take the held value only if `predicate` holds for it. Otherwise the
    /// receiver is left untouched and absent is returned.
    pub fn take_if(&mut self, predicate: impl FnOnce(&T) -> bool) -> Optional<T> {
        if self.as_ref().is_present_and(predicate) {
            self.take()
        } else {
            Absent
        }
    }

    /// Store `value` and return the previous state.
    pub fn replace(&mut self, value: T) -> Optional<T> {
        std::mem::replace(self, Present(value))
    }

    /// Pair both values if both are present.
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Present(a), Present(b)) => Present((a, b)),
            _ => Absent,
        }
    }
}

impl<A, B> Optional<(A, B)> {
    pub fn unzip(self) -> (Optional<A>, Optional<B>) {
        match self {
            Present((a, b)) => (Present(a), Present(b)),
            Absent => (Absent, Absent),
        }
    }
}

impl<T> Optional<Optional<T>> {
    pub fn flatten(self) -> Optional<T> {
        match self {
            Present(inner) => inner,
            Absent => Absent,
        }
    }
}

impl<T, E> Optional<Outcome<T, E>> {
    /// Swap the optional and outcome layers.
    ///
    /// Absent becomes success of absent, a present failure becomes that
    /// failure, a present success becomes success of present.
    pub fn transpose(self) -> Outcome<Optional<T>, E> {
        match self {
            Present(Outcome::Success(value)) => Outcome::Success(Present(value)),
            Present(Outcome::Failure(error)) => Outcome::Failure(error),
            Absent => Outcome::Success(Absent),
        }
    }
}

impl<T: Clone> Optional<&T> {
    pub fn cloned(self) -> Optional<T> {
        self.map(T::clone)
    }
}

impl<T: Copy> Optional<&T> {
    pub fn copied(self) -> Optional<T> {
        self.map(|value| *value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Present(value),
            None => Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Present(value) => Some(value),
            Absent => None,
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}
