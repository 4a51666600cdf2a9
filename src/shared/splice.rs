//! Einfüge- und Entfern-Operationen für geordnete Sequenzen.
//!
//! Alle Indizes unterhalb der Edit-Stelle bleiben erhalten, alle darüber
//! verschieben sich um die Größenänderung.

use std::ops::RangeInclusive;

/// Erweiterung für `Vec<T>` um blockweises Einfügen/Entfernen.
pub trait Splice<T> {
    /// Fügt `items` so ein, dass `items[0]` danach an Position `at` steht.
    fn insert_slice_at(&mut self, at: usize, items: &[T]);

    /// Entfernt den inklusiven Bereich `range` und gibt die Anzahl entfernter Elemente zurück.
    fn remove_range(&mut self, range: RangeInclusive<usize>) -> usize;
}

impl<T: Clone> Splice<T> for Vec<T> {
    fn insert_slice_at(&mut self, at: usize, items: &[T]) {
        assert!(
            at <= self.len(),
            "Einfüge-Index {} außerhalb der Sequenz (Länge {})",
            at,
            self.len()
        );
        self.splice(at..at, items.iter().cloned());
    }

    fn remove_range(&mut self, range: RangeInclusive<usize>) -> usize {
        let before = self.len();
        self.drain(range);
        before - self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_middle_shifts_tail() {
        let mut v = vec![0, 1, 2, 3];
        v.insert_slice_at(2, &[10, 11, 12]);
        assert_eq!(v, vec![0, 1, 10, 11, 12, 2, 3]);
    }

    #[test]
    fn test_insert_at_end_appends() {
        let mut v = vec![0, 1];
        v.insert_slice_at(2, &[5]);
        assert_eq!(v, vec![0, 1, 5]);
    }

    #[test]
    #[should_panic]
    fn test_insert_out_of_range_panics() {
        let mut v = vec![0, 1];
        v.insert_slice_at(3, &[5]);
    }

    #[test]
    fn test_remove_range_inclusive() {
        let mut v = vec![0, 1, 2, 3, 4, 5, 6];
        assert_eq!(v.remove_range(2..=4), 3);
        assert_eq!(v, vec![0, 1, 5, 6]);

        assert_eq!(v.remove_range(0..=1), 2);
        assert_eq!(v, vec![5, 6]);
    }
}
