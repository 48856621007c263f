//! Choosing the one boundary ring a feature's dots are sampled in.
//!
//! - [select_ring]: the exterior of a polygon, or for a multi-polygon the exterior
//!   whose bounding box covers the most area.
//! - [largest_ring_by_bounds]: the bounding-box comparison on its own.
//!
//! Bounding-box area is a cheap stand-in for polygon area; a long diagonal sliver
//! can outrank a compact island of larger true area. Holes are never considered.
use crate::geometry::{Geometry, Ring};

/// Picks the representative ring of `geometry`, or `None` for non-areal variants.
pub fn select_ring(geometry: &Geometry) -> Option<&Ring> {
    match geometry {
        Geometry::Polygon(poly) => Some(&poly.exterior),
        Geometry::MultiPolygon(polys) => largest_ring_by_bounds(polys.iter().map(|p| &p.exterior)),
        Geometry::Point(_)
        | Geometry::MultiPoint(_)
        | Geometry::LineString(_)
        | Geometry::MultiLineString(_)
        | Geometry::GeometryCollection(_) => None,
    }
}

/// Returns the ring with the largest bounding-box area; the first one wins ties.
///
/// Empty rings have no bounding box and are never chosen.
pub fn largest_ring_by_bounds<'a, I>(rings: I) -> Option<&'a Ring>
where
    I: IntoIterator<Item = &'a Ring>,
{
    let mut best: Option<(&Ring, f64)> = None;
    for ring in rings {
        let Some(bounds) = ring.bounds() else {
            continue;
        };
        let area = bounds.area();
        // Only a strictly larger area replaces the best ring, so NaN never wins.
        let replaces = match best {
            Some((_, best_area)) => area > best_area,
            None => !area.is_nan(),
        };
        if replaces {
            best = Some((ring, area));
        }
    }
    best.map(|(ring, _)| ring)
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::geometry::Polygon;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Polygon {
        Polygon::new(vec![
            DVec2::new(x, y),
            DVec2::new(x + w, y),
            DVec2::new(x + w, y + h),
            DVec2::new(x, y + h),
            DVec2::new(x, y),
        ])
    }

    #[test]
    fn polygon_uses_exterior_and_ignores_holes() {
        let hole = rect(2.0, 2.0, 1.0, 1.0).exterior;
        let outer = rect(0.0, 0.0, 10.0, 10.0);
        let poly = Polygon::with_interiors(outer.exterior.clone(), vec![hole]);
        let geom = Geometry::Polygon(poly);
        assert_eq!(select_ring(&geom), Some(&outer.exterior));
    }

    #[test]
    fn multipolygon_picks_largest_bounds_in_any_order() {
        let small = rect(0.0, 0.0, 2.0, 5.0); // area 10
        let large = rect(50.0, 50.0, 10.0, 100.0); // area 1000

        let forward = Geometry::MultiPolygon(vec![small.clone(), large.clone()]);
        let backward = Geometry::MultiPolygon(vec![large.clone(), small.clone()]);
        assert_eq!(select_ring(&forward), Some(&large.exterior));
        assert_eq!(select_ring(&backward), Some(&large.exterior));
    }

    #[test]
    fn ties_keep_first_ring() {
        let a = rect(0.0, 0.0, 4.0, 4.0);
        let b = rect(100.0, 100.0, 2.0, 8.0);
        let geom = Geometry::MultiPolygon(vec![a.clone(), b]);
        assert_eq!(select_ring(&geom), Some(&a.exterior));
    }

    #[test]
    fn nan_bounds_area_never_wins() {
        // Infinite width times zero height gives a NaN area.
        let flat = Polygon::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(f64::INFINITY, 0.0),
            DVec2::new(0.0, 0.0),
        ]);
        let small = rect(0.0, 0.0, 1.0, 1.0);

        let after = Geometry::MultiPolygon(vec![small.clone(), flat.clone()]);
        assert_eq!(select_ring(&after), Some(&small.exterior));

        let before = Geometry::MultiPolygon(vec![flat.clone(), small.clone()]);
        assert_eq!(select_ring(&before), Some(&small.exterior));

        assert!(select_ring(&Geometry::MultiPolygon(vec![flat])).is_none());
    }

    #[test]
    fn bounding_box_beats_true_area() {
        // Thin diagonal triangle: bbox 10x10 = 100, true area about 5.
        let sliver = Polygon::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 9.0),
            DVec2::new(10.0, 10.0),
        ]);
        // Compact square: bbox and true area 64.
        let square = rect(20.0, 0.0, 8.0, 8.0);
        let geom = Geometry::MultiPolygon(vec![square, sliver.clone()]);
        assert_eq!(select_ring(&geom), Some(&sliver.exterior));
    }

    #[test]
    fn empty_exteriors_are_skipped() {
        let empty = Polygon::default();
        let tiny = rect(0.0, 0.0, 1.0, 1.0);
        let geom = Geometry::MultiPolygon(vec![empty.clone(), tiny.clone()]);
        assert_eq!(select_ring(&geom), Some(&tiny.exterior));

        let only_empty = Geometry::MultiPolygon(vec![empty]);
        assert!(select_ring(&only_empty).is_none());
        assert!(select_ring(&Geometry::MultiPolygon(Vec::new())).is_none());
    }

    #[test]
    fn non_areal_variants_have_no_ring() {
        let line = vec![DVec2::ZERO, DVec2::ONE];
        for geom in [
            Geometry::Point(DVec2::ZERO),
            Geometry::MultiPoint(line.clone()),
            Geometry::LineString(line.clone()),
            Geometry::MultiLineString(vec![line]),
            Geometry::GeometryCollection(vec![Geometry::Polygon(rect(0.0, 0.0, 1.0, 1.0))]),
        ] {
            assert!(select_ring(&geom).is_none(), "{}", geom.type_name());
        }
    }
}
