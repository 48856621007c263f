//! Closed boundary rings and the point-in-polygon test used for rejection sampling.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;

/// An ordered sequence of points forming a closed polygon boundary.
///
/// The closing point may or may not repeat the first one; both forms describe the
/// same boundary and give the same containment results.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ring {
    points: Vec<DVec2>,
}

impl Ring {
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounds of the ring, `None` for an empty ring.
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.points.iter().copied())
    }

    /// A ring is usable for sampling once it has at least three distinct points.
    pub fn is_usable(&self) -> bool {
        let mut iter = self.points.iter().copied();
        let Some(first) = iter.next() else {
            return false;
        };
        let Some(second) = iter.find(|p| *p != first) else {
            return false;
        };
        iter.any(|p| p != first && p != second)
    }

    /// Crossing-number point-in-polygon test.
    ///
    /// Points exactly on an edge may land on either side.
    pub fn contains(&self, p: DVec2) -> bool {
        let pts = &self.points;
        let n = pts.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = pts[i];
            let b = pts[j];
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

impl From<Vec<DVec2>> for Ring {
    fn from(points: Vec<DVec2>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<DVec2> for Ring {
    fn from_iter<I: IntoIterator<Item = DVec2>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> Ring {
        coords.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
    }

    fn square() -> Ring {
        ring(&[(0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0)])
    }

    #[test]
    fn square_contains_interior_and_rejects_exterior() {
        let sq = square();
        assert!(sq.contains(DVec2::new(50.0, 50.0)));
        assert!(sq.contains(DVec2::new(0.5, 99.5)));
        assert!(!sq.contains(DVec2::new(-1.0, 50.0)));
        assert!(!sq.contains(DVec2::new(50.0, 100.5)));
    }

    #[test]
    fn explicitly_closed_ring_behaves_like_open_ring() {
        let open = square();
        let closed = ring(&[
            (0.0, 0.0),
            (0.0, 100.0),
            (100.0, 100.0),
            (100.0, 0.0),
            (0.0, 0.0),
        ]);
        for p in [
            DVec2::new(10.0, 10.0),
            DVec2::new(99.0, 1.0),
            DVec2::new(150.0, 50.0),
        ] {
            assert_eq!(open.contains(p), closed.contains(p));
        }
    }

    #[test]
    fn concave_notch_is_excluded() {
        // U shape open at the top between x = 4 and x = 6.
        let u = ring(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (6.0, 10.0),
            (6.0, 2.0),
            (4.0, 2.0),
            (4.0, 10.0),
            (0.0, 10.0),
        ]);
        assert!(u.contains(DVec2::new(2.0, 8.0)));
        assert!(u.contains(DVec2::new(8.0, 8.0)));
        assert!(u.contains(DVec2::new(5.0, 1.0)));
        assert!(!u.contains(DVec2::new(5.0, 8.0)));
    }

    #[test]
    fn usability_needs_three_distinct_points() {
        assert!(!Ring::default().is_usable());
        assert!(!ring(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]).is_usable());
        assert!(!ring(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0), (1.0, 1.0)]).is_usable());
        assert!(ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).is_usable());
        assert!(square().is_usable());
    }

    #[test]
    fn degenerate_rings_contain_nothing() {
        let point = ring(&[(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)]);
        assert!(!point.contains(DVec2::new(3.0, 3.0)));
        let segment = ring(&[(0.0, 0.0), (5.0, 5.0)]);
        assert!(!segment.contains(DVec2::new(2.5, 2.5)));
    }

    #[test]
    fn bounds_of_empty_ring_is_none() {
        assert!(Ring::default().bounds().is_none());
        let bb = square().bounds().unwrap();
        assert_eq!(bb.area(), 10_000.0);
    }
}
