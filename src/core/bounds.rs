//! Achsenparallele Bounding-Box einer abgetasteten Kurve.

use glam::Vec3;

/// Größe und Mittelpunkt der Kurve
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Ausdehnung je Achse
    pub size: Vec3,
    /// Mittelpunkt
    pub center: Vec3,
}

impl BoundingBox {
    /// Berechnet die Box aus Stützpunkten. Leere Eingabe ergibt eine Null-Box.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };

        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        let size = max - min;
        Self {
            size,
            center: min + size * 0.5,
        }
    }

    /// Minimale Ecke
    pub fn min(&self) -> Vec3 {
        self.center - self.size * 0.5
    }

    /// Maximale Ecke
    pub fn max(&self) -> Vec3 {
        self.center + self.size * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let bounds = BoundingBox::from_points([
            Vec3::new(-1.0, 0.0, 2.0),
            Vec3::new(3.0, 4.0, 2.0),
            Vec3::new(1.0, -2.0, 2.0),
        ]);
        assert_eq!(bounds.size, Vec3::new(4.0, 6.0, 0.0));
        assert_eq!(bounds.center, Vec3::new(1.0, 1.0, 2.0));
        assert_eq!(bounds.min(), Vec3::new(-1.0, -2.0, 2.0));
        assert_eq!(bounds.max(), Vec3::new(3.0, 4.0, 2.0));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(BoundingBox::from_points(std::iter::empty()), BoundingBox::default());
    }
}
