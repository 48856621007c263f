//! Projection seam between geographic coordinates and the planar output space.
//!
//! The dot-density pipeline works entirely in projected space. A [`Projection`] is
//! only consulted when a ring needs a fallback dot, through [`Projection::centroid`]:
//! by default ring vertices are inverted to lon/lat, their
//! [`centroid::spherical_centroid`] is taken, and the result is projected forward again.
use glam::DVec2;
use mint::Vector2;

use crate::geometry::{Feature, Geometry, Polygon, Ring};

pub mod centroid;
pub mod mercator;

/// Forward and inverse mapping between lon/lat degrees and planar coordinates.
///
/// Either direction may reject a coordinate by returning `None`.
pub trait Projection: Send + Sync {
    fn project(&self, lon_lat: Vector2<f64>) -> Option<Vector2<f64>>;

    fn invert(&self, xy: Vector2<f64>) -> Option<Vector2<f64>>;

    /// Centroid of a projected ring, in projected space.
    ///
    /// Vertices that cannot be inverted are skipped. Returns `None` when nothing
    /// can be inverted, the centroid is undefined, or it cannot be projected back.
    fn centroid(&self, ring: &Ring) -> Option<DVec2> {
        let lon_lat: Vec<DVec2> = ring
            .points()
            .iter()
            .filter_map(|&p| invert_point(self, p))
            .collect();
        let center = centroid::spherical_centroid(&lon_lat)?;
        project_point(self, center).filter(|p| p.is_finite())
    }
}

/// Projection for inputs that are already planar; both directions are the identity.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityProjection;

impl Projection for IdentityProjection {
    #[inline]
    fn project(&self, lon_lat: Vector2<f64>) -> Option<Vector2<f64>> {
        Some(lon_lat)
    }

    #[inline]
    fn invert(&self, xy: Vector2<f64>) -> Option<Vector2<f64>> {
        Some(xy)
    }

    /// Planar coordinates have no sphere behind them; use the planar area centroid.
    fn centroid(&self, ring: &Ring) -> Option<DVec2> {
        centroid::planar_centroid(ring.points())
    }
}

#[inline]
pub(crate) fn project_point<P>(projection: &P, lon_lat: DVec2) -> Option<DVec2>
where
    P: Projection + ?Sized,
{
    projection.project(lon_lat.into()).map(DVec2::from)
}

#[inline]
pub(crate) fn invert_point<P>(projection: &P, xy: DVec2) -> Option<DVec2>
where
    P: Projection + ?Sized,
{
    projection.invert(xy.into()).map(DVec2::from)
}

fn project_points(points: &[DVec2], projection: &dyn Projection) -> Vec<DVec2> {
    points
        .iter()
        .filter_map(|&p| project_point(projection, p))
        .collect()
}

fn project_ring(ring: &Ring, projection: &dyn Projection) -> Ring {
    Ring::new(project_points(ring.points(), projection))
}

fn project_polygon(poly: &Polygon, projection: &dyn Projection) -> Polygon {
    Polygon::with_interiors(
        project_ring(&poly.exterior, projection),
        poly.interiors
            .iter()
            .map(|hole| project_ring(hole, projection))
            .collect(),
    )
}

/// Projects every coordinate of `geometry`, dropping coordinates the projection rejects.
pub fn project_geometry(geometry: &Geometry, projection: &dyn Projection) -> Geometry {
    match geometry {
        Geometry::Point(p) => match project_point(projection, *p) {
            Some(q) => Geometry::Point(q),
            None => Geometry::MultiPoint(Vec::new()),
        },
        Geometry::MultiPoint(pts) => Geometry::MultiPoint(project_points(pts, projection)),
        Geometry::LineString(pts) => Geometry::LineString(project_points(pts, projection)),
        Geometry::MultiLineString(lines) => Geometry::MultiLineString(
            lines
                .iter()
                .map(|line| project_points(line, projection))
                .collect(),
        ),
        Geometry::Polygon(poly) => Geometry::Polygon(project_polygon(poly, projection)),
        Geometry::MultiPolygon(polys) => Geometry::MultiPolygon(
            polys
                .iter()
                .map(|poly| project_polygon(poly, projection))
                .collect(),
        ),
        Geometry::GeometryCollection(items) => Geometry::GeometryCollection(
            items
                .iter()
                .map(|g| project_geometry(g, projection))
                .collect(),
        ),
    }
}

impl Feature {
    /// Returns a copy of this feature with its geometry projected.
    pub fn project(&self, projection: &dyn Projection) -> Feature {
        Feature::new(self.name.clone(), project_geometry(&self.geometry, projection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Doubles x and rejects anything west of the prime meridian.
    struct EastOnly;

    impl Projection for EastOnly {
        fn project(&self, lon_lat: Vector2<f64>) -> Option<Vector2<f64>> {
            (lon_lat.x >= 0.0).then_some(Vector2 {
                x: lon_lat.x * 2.0,
                y: lon_lat.y,
            })
        }

        fn invert(&self, xy: Vector2<f64>) -> Option<Vector2<f64>> {
            Some(Vector2 {
                x: xy.x / 2.0,
                y: xy.y,
            })
        }
    }

    #[test]
    fn identity_round_trips() {
        let p = DVec2::new(-3.5, 42.0);
        assert_eq!(project_point(&IdentityProjection, p), Some(p));
        assert_eq!(invert_point(&IdentityProjection, p), Some(p));
    }

    #[test]
    fn identity_centroid_is_planar() {
        let ring = Ring::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 100.0),
            DVec2::new(100.0, 100.0),
            DVec2::new(100.0, 0.0),
        ]);
        assert_eq!(
            IdentityProjection.centroid(&ring),
            Some(DVec2::new(50.0, 50.0))
        );
    }

    #[test]
    fn default_centroid_round_trips_through_the_sphere() {
        // EastOnly halves x on the way back, so a ring at x in [2, 4] inverts to
        // lon in [1, 2] and the centroid is projected back near x = 3.
        let ring = Ring::new(vec![
            DVec2::new(2.0, -1.0),
            DVec2::new(4.0, -1.0),
            DVec2::new(4.0, 1.0),
            DVec2::new(2.0, 1.0),
        ]);
        let c = EastOnly.centroid(&ring).expect("centroid");
        assert!((c.x - 3.0).abs() < 1e-6, "got {c:?}");
        assert!(c.y.abs() < 1e-6, "got {c:?}");
    }

    #[test]
    fn project_geometry_drops_rejected_points() {
        let poly = Polygon::new(vec![
            DVec2::new(-1.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
        ]);
        let projected = project_geometry(&Geometry::MultiPolygon(vec![poly]), &EastOnly);
        let Geometry::MultiPolygon(polys) = projected else {
            panic!("variant must be preserved");
        };
        assert_eq!(
            polys[0].exterior.points(),
            &[DVec2::new(2.0, 0.0), DVec2::new(2.0, 1.0)]
        );
    }

    #[test]
    fn feature_project_keeps_name() {
        let f = Feature::new("Cuenca", Geometry::Point(DVec2::new(1.0, 2.0)));
        let projected = f.project(&EastOnly);
        assert_eq!(projected.name, "Cuenca");
        assert_eq!(projected.geometry, Geometry::Point(DVec2::new(2.0, 2.0)));
    }
}
