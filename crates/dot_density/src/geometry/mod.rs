//! Region geometry consumed by the dot-density pipeline.
//!
//! Geometry arrives as an explicit [`Geometry`] variant so that ring selection can
//! match on it exhaustively. Coordinates are whatever space the caller chose; the
//! pipeline expects projected coordinates, and [`crate::projection::project_geometry`]
//! converts lon/lat input.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod bounds;
pub mod ring;

pub use bounds::BoundingBox;
pub use ring::Ring;

/// A polygon with one outer boundary and optional holes.
///
/// Holes are carried through projection but never consulted while sampling.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    /// Outer boundary.
    pub exterior: Ring,
    /// Interior boundaries (holes).
    pub interiors: Vec<Ring>,
}

impl Polygon {
    pub fn new(exterior: impl Into<Ring>) -> Self {
        Self {
            exterior: exterior.into(),
            interiors: Vec::new(),
        }
    }

    pub fn with_interiors(exterior: impl Into<Ring>, interiors: Vec<Ring>) -> Self {
        Self {
            exterior: exterior.into(),
            interiors,
        }
    }
}

/// Geometry variants a feature can carry.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Geometry {
    Point(DVec2),
    MultiPoint(Vec<DVec2>),
    LineString(Vec<DVec2>),
    MultiLineString(Vec<Vec<DVec2>>),
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Visits every coordinate of the geometry, holes included.
    pub fn for_each_point(&self, f: &mut impl FnMut(DVec2)) {
        match self {
            Geometry::Point(p) => f(*p),
            Geometry::MultiPoint(pts) | Geometry::LineString(pts) => pts.iter().copied().for_each(f),
            Geometry::MultiLineString(lines) => {
                lines.iter().flatten().copied().for_each(f);
            }
            Geometry::Polygon(poly) => visit_polygon(poly, f),
            Geometry::MultiPolygon(polys) => polys.iter().for_each(|poly| visit_polygon(poly, f)),
            Geometry::GeometryCollection(items) => items.iter().for_each(|g| g.for_each_point(f)),
        }
    }

    /// Collects every coordinate of the geometry into a vector.
    pub fn points(&self) -> Vec<DVec2> {
        let mut out = Vec::new();
        self.for_each_point(&mut |p| out.push(p));
        out
    }

    /// Short name of the variant, used in logs and events.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }
}

fn visit_polygon(poly: &Polygon, f: &mut impl FnMut(DVec2)) {
    poly.exterior.points().iter().copied().for_each(&mut *f);
    for hole in &poly.interiors {
        hole.points().iter().copied().for_each(&mut *f);
    }
}

/// One region: a join name and its boundary geometry.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Feature {
    /// Name used to look up the region's population.
    pub name: String,
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            name: name.into(),
            geometry,
        }
    }
}
