use super::sequence_core::Sequence;

impl<I> Sequence<I> {
    /// Create a sequence from an ordered list of items.
    pub fn new(items: Vec<I>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }
}

impl<I: Clone> Sequence<&I> {
    /// Turn a sequence of references into a sequence of owned copies.
    pub fn cloned(self) -> Sequence<I> {
        self.items.into_iter().cloned().collect()
    }
}

impl<I: Copy> Sequence<&I> {
    pub fn copied(self) -> Sequence<I> {
        self.items.into_iter().copied().collect()
    }
}

impl<I> Default for Sequence<I> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<I> From<Vec<I>> for Sequence<I> {
    fn from(items: Vec<I>) -> Self {
        Self::new(items)
    }
}

impl<I, const N: usize> From<[I; N]> for Sequence<I> {
    fn from(items: [I; N]) -> Self {
        Self::new(items.into())
    }
}

impl<I: Clone> From<&[I]> for Sequence<I> {
    fn from(items: &[I]) -> Self {
        Self::new(items.to_vec())
    }
}

impl<I> From<Sequence<I>> for Vec<I> {
    fn from(sequence: Sequence<I>) -> Self {
        sequence.items
    }
}

// turn an iterator of items into a sequence
impl<I> FromIterator<I> for Sequence<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let items = iter.into_iter().collect::<Vec<_>>();
        items.into()
    }
}
