//! Spherical Mercator projection with the y axis pointing down (screen space).
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use glam::DVec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::geometry::BoundingBox;
use crate::projection::Projection;

/// Spherical Mercator: `x = tx + k * lambda`, `y = ty - k * ln(tan(pi/4 + phi/2))`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mercator {
    /// Scale factor `k` in output units per radian.
    pub scale: f64,
    /// Output position of lon/lat `(0, 0)`.
    pub translate: DVec2,
}

impl Default for Mercator {
    /// World width of 961 units centered at `(480, 250)`.
    fn default() -> Self {
        Self {
            scale: 961.0 / TAU,
            translate: DVec2::new(480.0, 250.0),
        }
    }
}

impl Mercator {
    pub fn new(scale: f64, translate: DVec2) -> Self {
        Self { scale, translate }
    }

    /// Fits the projection so the given lon/lat points fill `extent` (width, height),
    /// keeping the aspect ratio and centering the shorter axis.
    pub fn fit_size<I>(extent: DVec2, lon_lat_points: I) -> Result<Self>
    where
        I: IntoIterator<Item = DVec2>,
    {
        if !(extent.x > 0.0 && extent.y > 0.0 && extent.is_finite()) {
            return Err(Error::InvalidConfig(
                "fit extent must be finite and > 0 in both components".into(),
            ));
        }

        let bounds = BoundingBox::from_points(lon_lat_points.into_iter().filter_map(raw))
            .ok_or_else(|| {
                Error::Projection("cannot fit projection: no projectable points".into())
            })?;

        let size = bounds.extent();
        if size.x <= 0.0 && size.y <= 0.0 {
            return Err(Error::Projection(
                "cannot fit projection: points collapse to a single location".into(),
            ));
        }
        if size.x <= 0.0 || size.y <= 0.0 {
            warn!("Fitting Mercator to collinear points; scale follows one axis only.");
        }

        // Zero-size axes divide to +inf and drop out of the min.
        let k = (extent.x / size.x).min(extent.y / size.y);
        let translate = (extent - (bounds.min + bounds.max) * k) * 0.5;
        Ok(Self {
            scale: k,
            translate,
        })
    }

    fn forward(&self, lon_lat: DVec2) -> Option<DVec2> {
        raw(lon_lat).map(|p| self.translate + p * self.scale)
    }

    fn inverse(&self, xy: DVec2) -> Option<DVec2> {
        if !xy.is_finite() || self.scale == 0.0 {
            return None;
        }
        let p = (xy - self.translate) / self.scale;
        let lambda = p.x;
        let phi = 2.0 * (-p.y).exp().atan() - FRAC_PI_2;
        Some(DVec2::new(lambda.to_degrees(), phi.to_degrees()))
    }
}

/// Unit Mercator with y pointing down; poles and non-finite input are rejected.
fn raw(lon_lat: DVec2) -> Option<DVec2> {
    if !lon_lat.is_finite() || lon_lat.y.abs() >= 90.0 {
        return None;
    }
    let lambda = lon_lat.x.to_radians();
    let phi = lon_lat.y.to_radians();
    let y = (FRAC_PI_4 + phi * 0.5).tan().ln();
    y.is_finite().then_some(DVec2::new(lambda, -y))
}

impl Projection for Mercator {
    fn project(&self, lon_lat: Vector2<f64>) -> Option<Vector2<f64>> {
        self.forward(lon_lat.into()).map(Into::into)
    }

    fn invert(&self, xy: Vector2<f64>) -> Option<Vector2<f64>> {
        self.inverse(xy.into()).map(Into::into)
    }
}
