//! Minimal PNG rendering of dot clouds for the example binaries.
use std::path::Path;

use anyhow::Context;
use dot_density::prelude::*;
use glam::DVec2;
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Image and style settings for [`render_dots_to_png`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output size in pixels; projected coordinates map 1:1 onto pixels.
    pub image_size: (u32, u32),
    pub background: [u8; 3],
    pub dot_color: [u8; 3],
    /// Opacity of a single dot in [0, 1]; overlapping dots accumulate.
    pub dot_opacity: f32,
    /// Dot radius in pixels.
    pub dot_radius: f64,
    /// Outline color for region rings, if drawn.
    pub outline: Option<[u8; 3]>,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            background: [249, 249, 249],
            dot_color: [70, 130, 180],
            dot_opacity: 0.5,
            dot_radius: 1.2,
            outline: Some([190, 190, 190]),
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_dot_color(mut self, dot_color: [u8; 3]) -> Self {
        self.dot_color = dot_color;
        self
    }

    pub fn with_outline(mut self, outline: Option<[u8; 3]>) -> Self {
        self.outline = outline;
        self
    }
}

/// Draws region outlines and dots into a PNG at `path`.
pub fn render_dots_to_png(
    features: &[Feature],
    dots: &[DVec2],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    if let Some(color) = config.outline {
        for feature in features {
            if let Some(ring) = select_ring(&feature.geometry) {
                draw_ring(&mut img, ring, color);
            }
        }
    }

    let r = config.dot_radius;
    let reach = r.ceil() as i64;
    for dot in dots {
        let cx = dot.x.round() as i64;
        let cy = dot.y.round() as i64;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let offset = DVec2::new(dx as f64, dy as f64);
                if offset.length_squared() <= r * r {
                    blend(&mut img, cx + dx, cy + dy, config.dot_color, config.dot_opacity);
                }
            }
        }
    }

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("Wrote {} dots to {}.", dots.len(), path.display());
    Ok(())
}

fn draw_ring(img: &mut RgbImage, ring: &Ring, color: [u8; 3]) {
    let pts = ring.points();
    if pts.len() < 2 {
        return;
    }
    let frame = BoundingBox::new(
        DVec2::splat(-1.0),
        DVec2::new(img.width() as f64, img.height() as f64),
    );
    for (i, &a) in pts.iter().enumerate() {
        let b = pts[(i + 1) % pts.len()];
        // Clipping bounds the step count by the image diagonal.
        let Some((a, b)) = clip_segment(a, b, &frame) else {
            continue;
        };
        let steps = a.distance(b).ceil().max(1.0) as usize;
        for s in 0..=steps {
            let p = a.lerp(b, s as f64 / steps as f64);
            blend(img, p.x.round() as i64, p.y.round() as i64, color, 1.0);
        }
    }
}

/// Liang-Barsky clip of segment `a..b` against `frame`; `None` when nothing is visible
/// or an endpoint is not finite.
fn clip_segment(a: DVec2, b: DVec2, frame: &BoundingBox) -> Option<(DVec2, DVec2)> {
    if !a.is_finite() || !b.is_finite() {
        return None;
    }
    let d = b - a;
    if !d.is_finite() {
        return None;
    }
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [
        (-d.x, a.x - frame.min.x),
        (d.x, frame.max.x - a.x),
        (-d.y, a.y - frame.min.y),
        (d.y, frame.max.y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
        }
    }
    (t0 <= t1).then(|| (a + d * t0, a + d * t1))
}

fn blend(img: &mut RgbImage, x: i64, y: i64, color: [u8; 3], alpha: f32) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let px = img.get_pixel_mut(x as u32, y as u32);
    for (c, &target) in px.0.iter_mut().zip(color.iter()) {
        let mixed = *c as f32 * (1.0 - alpha) + target as f32 * alpha;
        *c = mixed.round().clamp(0.0, 255.0) as u8;
    }
}
