use dot_density::prelude::*;
use dot_density_examples::{init_tracing, render_dots_to_png, RenderConfig};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Planar coordinates already in pixel space.
    let projection = IdentityProjection;

    let features = vec![
        Feature::new(
            "square",
            Geometry::Polygon(Polygon::new(vec![
                DVec2::new(40.0, 40.0),
                DVec2::new(240.0, 40.0),
                DVec2::new(240.0, 240.0),
                DVec2::new(40.0, 240.0),
                DVec2::new(40.0, 40.0),
            ])),
        ),
        // Zero-area sliver: every candidate misses, all dots fall back to the centroid.
        Feature::new(
            "sliver",
            Geometry::Polygon(Polygon::new(vec![
                DVec2::new(300.0, 60.0),
                DVec2::new(460.0, 220.0),
                DVec2::new(380.0, 140.0),
                DVec2::new(300.0, 60.0),
            ])),
        ),
        // Fewer than three distinct points: skipped by the pipeline.
        Feature::new(
            "collapsed",
            Geometry::Polygon(Polygon::new(vec![DVec2::new(140.0, 300.0); 4])),
        ),
    ];

    let populations: PopulationTable = [("square", 400_000u64), ("sliver", 25_000), ("collapsed", 9_000)]
        .into_iter()
        .collect();

    // A low attempt ceiling keeps the sliver cheap.
    let config = DensityConfig::new(1000.0).with_max_attempts(200);
    let runner = DotDensityRunner::try_new(config.clone(), &populations, &projection)?;

    let mut warnings = VecSink::only([DensityEventKind::Warning]);
    let mut rng = StdRng::seed_from_u64(7);
    let result = runner.run_with_events(&features, &mut rng, &mut warnings);

    for event in warnings.as_slice() {
        if let DensityEvent::Warning { context, message } = event {
            tracing::info!("{}: {}", context, message);
        }
    }

    tracing::info!(
        "Placed {} dots, {} at fallback points; {} features skipped.",
        result.dots.len(),
        result.fallback_dots,
        result.features_skipped
    );

    // The sampler alone still places deterministic fallback dots for a collapsed ring.
    let collapsed = Ring::new(vec![DVec2::new(140.0, 300.0); 4]);
    let sampler = RejectionSampler::new(config.max_attempts);
    let stacked = sampler.sample(&collapsed, 9, &projection, &mut rng);
    tracing::info!(
        "Collapsed ring: {} dots, all at {:?}.",
        stacked.len(),
        fallback_point(&collapsed, &projection)
    );

    let mut dots = result.dots.clone();
    dots.extend(stacked.iter().map(|d| d.position));

    render_dots_to_png(
        &features,
        &dots,
        &RenderConfig::new((500, 360)).with_dot_color([200, 80, 60]),
        "dot-density-fallback.png",
    )?;
    Ok(())
}
