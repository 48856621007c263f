//! Ring centroids used for fallback dots.
//!
//! Both centroids work in three tiers. The enclosed area gives the primary
//! estimate; when the ring encloses (almost) no area the length-weighted edge
//! midpoints are used, and when the edges have no length the plain vertex mean is
//! used. [`spherical_centroid`] accumulates on the unit sphere from lon/lat degrees,
//! [`planar_centroid`] works directly in the plane.
use glam::{DVec2, DVec3};

use crate::geometry::BoundingBox;

/// Squared magnitude below which an accumulated direction is considered empty.
const EPSILON2: f64 = 1e-12;

fn to_cartesian(lon_lat: DVec2) -> DVec3 {
    let lambda = lon_lat.x.to_radians();
    let phi = lon_lat.y.to_radians();
    let cos_phi = phi.cos();
    DVec3::new(cos_phi * lambda.cos(), cos_phi * lambda.sin(), phi.sin())
}

fn to_lon_lat(v: DVec3) -> DVec2 {
    let lon = v.y.atan2(v.x).to_degrees();
    let lat = (v.z / v.length()).clamp(-1.0, 1.0).asin().to_degrees();
    DVec2::new(lon, lat)
}

/// Computes the centroid of a ring given in lon/lat degrees.
///
/// The ring may be open or explicitly closed. Winding order does not matter: the
/// surface estimate is oriented toward the hemisphere holding the ring's vertices.
/// Returns `None` for an empty ring or one with no well-defined center (for example
/// two antipodal points).
pub fn spherical_centroid(ring: &[DVec2]) -> Option<DVec2> {
    let ring = open_ring(ring);
    if ring.is_empty() {
        return None;
    }

    let vectors: Vec<DVec3> = ring.iter().copied().map(to_cartesian).collect();
    let n = vectors.len();

    let mut vertex_sum = DVec3::ZERO;
    let mut edge_sum = DVec3::ZERO;
    let mut surface_sum = DVec3::ZERO;

    for i in 0..n {
        let a = vectors[i];
        let b = vectors[(i + 1) % n];
        vertex_sum += a;

        let cross = a.cross(b);
        let m = cross.length();
        let angle = m.atan2(a.dot(b));
        if m > 0.0 {
            surface_sum += cross * (angle / m);
        }

        let mid = a + b;
        let mid_len_sq = mid.length_squared();
        if mid_len_sq > EPSILON2 {
            edge_sum += mid * (angle / mid_len_sq.sqrt());
        }
    }

    let direction = if surface_sum.length_squared() > EPSILON2 {
        if surface_sum.dot(vertex_sum) < 0.0 {
            -surface_sum
        } else {
            surface_sum
        }
    } else if edge_sum.length_squared() > EPSILON2 {
        edge_sum
    } else if vertex_sum.length_squared() > EPSILON2 {
        vertex_sum
    } else {
        return None;
    };

    Some(to_lon_lat(direction))
}

/// Computes the area centroid of a planar ring.
///
/// Falls back to edge midpoints for rings without area (collinear or coincident
/// points) and to the vertex mean when no edge has length. Returns `None` only for
/// an empty ring.
pub fn planar_centroid(ring: &[DVec2]) -> Option<DVec2> {
    let ring = open_ring(ring);
    let origin = *ring.first()?;
    let n = ring.len();

    let mut area2 = 0.0;
    let mut area_sum = DVec2::ZERO;
    let mut edge_len = 0.0;
    let mut edge_sum = DVec2::ZERO;
    let mut vertex_sum = DVec2::ZERO;

    for i in 0..n {
        let a = ring[i] - origin;
        let b = ring[(i + 1) % n] - origin;
        vertex_sum += a;

        let cross = a.perp_dot(b);
        area2 += cross;
        area_sum += (a + b) * cross;

        let len = a.distance(b);
        edge_len += len;
        edge_sum += (a + b) * (0.5 * len);
    }

    let span = BoundingBox::from_points(ring.iter().copied())
        .map(|bb| bb.width().max(bb.height()))
        .unwrap_or(0.0);

    let local = if area2.abs() > span * span * EPSILON2 {
        area_sum / (3.0 * area2)
    } else if edge_len > 0.0 {
        edge_sum / edge_len
    } else {
        vertex_sum / n as f64
    };
    Some(origin + local)
}

/// Drops an explicit closing point so every vertex is counted once.
fn open_ring(ring: &[DVec2]) -> &[DVec2] {
    match ring {
        [first, rest @ .., last] if !rest.is_empty() && first == last => &ring[..ring.len() - 1],
        _ => ring,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: DVec2, b: DVec2, tol: f64) -> bool {
        (a - b).abs().max_element() <= tol
    }

    fn lon_lat(coords: &[(f64, f64)]) -> Vec<DVec2> {
        coords.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
    }

    #[test]
    fn empty_ring_has_no_centroid() {
        assert!(spherical_centroid(&[]).is_none());
    }

    #[test]
    fn coincident_points_collapse_to_that_point() {
        let ring = lon_lat(&[(-3.7, 40.4), (-3.7, 40.4), (-3.7, 40.4), (-3.7, 40.4)]);
        let c = spherical_centroid(&ring).expect("vertex mean is defined");
        assert!(close(c, DVec2::new(-3.7, 40.4), 1e-9), "got {c:?}");
    }

    #[test]
    fn small_square_centroid_is_near_its_middle() {
        let ring = lon_lat(&[(9.0, 19.0), (11.0, 19.0), (11.0, 21.0), (9.0, 21.0)]);
        let c = spherical_centroid(&ring).unwrap();
        assert!(close(c, DVec2::new(10.0, 20.0), 0.01), "got {c:?}");
    }

    #[test]
    fn winding_order_and_closing_point_do_not_matter() {
        let ccw = lon_lat(&[(9.0, 19.0), (11.0, 19.0), (11.0, 21.0), (9.0, 21.0)]);
        let cw_closed = lon_lat(&[
            (9.0, 19.0),
            (9.0, 21.0),
            (11.0, 21.0),
            (11.0, 19.0),
            (9.0, 19.0),
        ]);
        let a = spherical_centroid(&ccw).unwrap();
        let b = spherical_centroid(&cw_closed).unwrap();
        assert!(close(a, b, 1e-9), "{a:?} vs {b:?}");
    }

    #[test]
    fn collinear_ring_uses_edge_midpoints() {
        let ring = lon_lat(&[(0.0, 0.0), (2.0, 0.0), (0.0, 0.0)]);
        let c = spherical_centroid(&ring).unwrap();
        assert!(close(c, DVec2::new(1.0, 0.0), 1e-9), "got {c:?}");
    }

    #[test]
    fn antipodal_pair_has_no_centroid() {
        let ring = lon_lat(&[(0.0, 0.0), (180.0, 0.0)]);
        assert!(spherical_centroid(&ring).is_none());
    }

    #[test]
    fn planar_square_centroid_is_its_center() {
        let ring = lon_lat(&[(0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0), (0.0, 0.0)]);
        let c = planar_centroid(&ring).unwrap();
        assert!(close(c, DVec2::new(50.0, 50.0), 1e-9), "got {c:?}");
    }

    #[test]
    fn planar_l_shape_centroid_is_area_weighted() {
        // 2x1 bar plus 1x1 block on top of its left half.
        let ring = lon_lat(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)]);
        let c = planar_centroid(&ring).unwrap();
        let expected = DVec2::new((1.0 * 2.0 + 0.5 * 1.0) / 3.0, (0.5 * 2.0 + 1.5 * 1.0) / 3.0);
        assert!(close(c, expected, 1e-9), "got {c:?}");
    }

    #[test]
    fn planar_degenerate_rings_fall_back() {
        let segment = lon_lat(&[(0.0, 0.0), (4.0, 4.0), (0.0, 0.0)]);
        let c = planar_centroid(&segment).unwrap();
        assert!(close(c, DVec2::new(2.0, 2.0), 1e-9), "got {c:?}");

        let point = lon_lat(&[(7.0, -3.0), (7.0, -3.0), (7.0, -3.0)]);
        assert_eq!(planar_centroid(&point), Some(DVec2::new(7.0, -3.0)));

        assert!(planar_centroid(&[]).is_none());
    }

    #[test]
    fn centroid_across_antimeridian_stays_near_it() {
        let ring = lon_lat(&[(179.0, -1.0), (-179.0, -1.0), (-179.0, 1.0), (179.0, 1.0)]);
        let c = spherical_centroid(&ring).unwrap();
        assert!((c.x.abs() - 180.0).abs() < 1e-6, "got {c:?}");
        assert!(c.y.abs() < 1e-6, "got {c:?}");
    }
}
