use std::time::Duration;

use criterion::{Criterion, Throughput};
use glam::DVec2;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Star-shaped ring with `spikes` points; fills roughly a third of its bounding box.
#[allow(dead_code)]
pub fn star(center: DVec2, outer: f64, inner: f64, spikes: usize) -> Vec<DVec2> {
    (0..spikes * 2)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = std::f64::consts::PI * i as f64 / spikes as f64;
            center + DVec2::new(angle.cos(), angle.sin()) * r
        })
        .collect()
}
