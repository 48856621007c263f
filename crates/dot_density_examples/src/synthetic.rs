//! Hand-made lon/lat regions standing in for a real boundary dataset.
use std::f64::consts::TAU;

use dot_density::prelude::*;
use glam::DVec2;

/// A named region with its population, before projection.
#[derive(Debug, Clone)]
pub struct SyntheticRegion {
    pub name: &'static str,
    pub population: u64,
    pub geometry: Geometry,
}

impl SyntheticRegion {
    pub fn feature(&self) -> Feature {
        Feature::new(self.name, self.geometry.clone())
    }

    pub fn record(&self) -> PopulationRecord {
        PopulationRecord::new(self.name, self.population)
    }
}

/// Irregular closed ring around `center` (degrees) with a wobbly radius.
///
/// `wobble` in [0, 1) scales how far the radius swings; `phase` shifts the lobes.
pub fn blob(center: DVec2, radius: DVec2, vertices: usize, wobble: f64, phase: f64) -> Ring {
    let n = vertices.max(3);
    let mut points: Vec<DVec2> = (0..n)
        .map(|i| {
            let t = i as f64 / n as f64 * TAU;
            let r = 1.0 + wobble * ((3.0 * t + phase).sin() * 0.6 + (5.0 * t - phase).cos() * 0.4);
            center + DVec2::new(t.cos(), t.sin()) * radius * r
        })
        .collect();
    points.push(points[0]);
    Ring::new(points)
}
