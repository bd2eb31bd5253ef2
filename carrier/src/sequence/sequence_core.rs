use crate::error::{self, Error};
use crate::optional::Optional;

/// An ordered, finite list of items of type `I`.
///
/// The backing list is owned exclusively; cloning a sequence copies it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence<I> {
    pub(crate) items: Vec<I>,
}

impl<I> Sequence<I> {
    /// The number of items, also known as `count`.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the item at `index`, if it exists.
    #[inline]
    pub fn get(&self, index: usize) -> Optional<&I> {
        self.items.get(index).into()
    }

    /// Get the item at `index`.
    ///
    /// Indexing past the end is a contract violation and yields
    /// [`Error::IndexOutOfRange`].
    pub fn nth(&self, index: usize) -> error::Result<&I> {
        self.items
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.len()))
    }

    /// Get the last item.
    ///
    /// An empty sequence has no last item; this is reported as an
    /// [`Error::IndexOutOfRange`] at index 0.
    pub fn last(&self) -> error::Result<&I> {
        self.items
            .last()
            .ok_or_else(|| Error::index_out_of_range(0, 0))
    }

    /// Look at the first item without consuming anything.
    #[inline]
    pub fn peek(&self) -> Optional<&I> {
        self.items.first().into()
    }

    /// The first item, only if `predicate` holds for it. The sequence is
    /// left as it is either way.
    pub fn next_if(&self, predicate: impl FnOnce(&I) -> bool) -> Optional<&I> {
        self.peek().filter(|item| predicate(*item))
    }

    #[inline]
    pub fn as_slice(&self) -> &[I] {
        &self.items
    }

    /// Get the items from the sequence as an iterator.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.items.iter()
    }

    /// Give up the backing list. Also known as `collect`.
    #[inline]
    pub fn into_vec(self) -> Vec<I> {
        self.items
    }
}

impl<I> IntoIterator for Sequence<I> {
    type Item = I;
    type IntoIter = std::vec::IntoIter<I>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, I> IntoIterator for &'a Sequence<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
