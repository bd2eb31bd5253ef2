// Short-circuiting searches. These borrow the sequence and stop scanning at
// the first item that decides the answer.

use crate::optional::Optional;

use super::sequence_core::Sequence;

impl<I> Sequence<I> {
    /// The first item satisfying `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&I) -> bool) -> Optional<&I> {
        self.items.iter().find(|item| predicate(*item)).into()
    }

    /// The first present result of `f`.
    pub fn find_map<B>(&self, mut f: impl FnMut(&I) -> Optional<B>) -> Optional<B> {
        self.items
            .iter()
            .find_map(|item| Option::from(f(item)))
            .into()
    }

    /// Whether any item satisfies `predicate`. Stops at the first that does;
    /// `false` for an empty sequence.
    pub fn any(&self, predicate: impl FnMut(&I) -> bool) -> bool {
        self.items.iter().any(predicate)
    }

    /// Whether every item satisfies `predicate`. Stops at the first that
    /// doesn't; `true` for an empty sequence.
    pub fn all(&self, predicate: impl FnMut(&I) -> bool) -> bool {
        self.items.iter().all(predicate)
    }

    /// Index of the first item satisfying `predicate`.
    pub fn position(&self, predicate: impl FnMut(&I) -> bool) -> Optional<usize> {
        self.items.iter().position(predicate).into()
    }

    /// Index of the last item satisfying `predicate`, counted from the
    /// front. Scans from the back.
    pub fn rposition(&self, predicate: impl FnMut(&I) -> bool) -> Optional<usize> {
        self.items.iter().rposition(predicate).into()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_find() {
        let s = Sequence::from([1, 2, 3]);
        assert_eq!(s.find(|&n| n == 2), Optional::present(&2));
        assert_eq!(s.find(|&n| n == 5), Optional::absent());
    }

    #[test]
    fn test_find_short_circuits() {
        let visited = Cell::new(0);
        let s = Sequence::from([1, 2, 3, 4]);
        let found = s.find(|&n| {
            visited.set(visited.get() + 1);
            n > 1
        });
        assert_eq!(found, Optional::present(&2));
        assert_eq!(visited.get(), 2);
    }

    #[test]
    fn test_find_map() {
        let s = Sequence::from(["lol", "NaN", "2", "5"]);
        let first_number = s.find_map(|s| Optional::from(s.parse::<i32>().ok()));
        assert_eq!(first_number, Optional::present(2));
        assert_eq!(
            Sequence::from(["x"]).find_map(|s| Optional::from(s.parse::<i32>().ok())),
            Optional::absent()
        );
    }

    #[test]
    fn test_any() {
        let visited = Cell::new(0);
        let s = Sequence::from([1, 2, 3]);
        assert!(s.any(|&n| {
            visited.set(visited.get() + 1);
            n > 0
        }));
        assert_eq!(visited.get(), 1);
        assert!(!s.any(|&n| n > 5));
        assert!(!Sequence::<i32>::empty().any(|_| true));
    }

    #[test]
    fn test_all() {
        let visited = Cell::new(0);
        let s = Sequence::from([1, 2, 3]);
        assert!(s.all(|&n| n > 0));
        assert!(!s.all(|&n| {
            visited.set(visited.get() + 1);
            n > 2
        }));
        assert_eq!(visited.get(), 1);
        assert!(Sequence::<i32>::empty().all(|_| false));
    }

    #[test]
    fn test_position() {
        let s = Sequence::from([1, 2, 3, 4]);
        assert_eq!(s.position(|&n| n == 4), Optional::present(3));
        assert_eq!(s.position(|&n| n == 5), Optional::absent());
    }

    #[test]
    fn test_rposition() {
        let s = Sequence::from([1, 2, 3, 2]);
        assert_eq!(s.rposition(|&n| n == 2), Optional::present(3));
        assert_eq!(s.rposition(|&n| n == 1), Optional::present(0));
        assert_eq!(s.rposition(|&n| n == 5), Optional::absent());
    }
}
