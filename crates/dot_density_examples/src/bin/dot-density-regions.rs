use dot_density::prelude::*;
use dot_density_examples::{blob, init_tracing, render_dots_to_png, RenderConfig, SyntheticRegion};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const MAP_SIZE: (u32, u32) = (900, 800);

fn main() -> anyhow::Result<()> {
    init_tracing();

    let regions = regions();
    let lon_lat_features: Vec<Feature> = regions.iter().map(SyntheticRegion::feature).collect();

    // Population rows come from a separate table; one region has no row.
    let populations: PopulationTable = regions
        .iter()
        .filter(|r| r.name != "Outer Isles")
        .map(SyntheticRegion::record)
        .collect();

    let extent = DVec2::new(MAP_SIZE.0 as f64, MAP_SIZE.1 as f64);
    let mercator = Mercator::fit_size(
        extent,
        lon_lat_features.iter().flat_map(|f| f.geometry.points()),
    )?;
    let features: Vec<Feature> = lon_lat_features
        .iter()
        .map(|f| f.project(&mercator))
        .collect();

    let config = DensityConfig::default();
    let runner = DotDensityRunner::try_new(config.clone(), &populations, &mercator)?;

    let mut skipped = VecSink::only([DensityEventKind::FeatureSkipped]);
    let mut rng = StdRng::seed_from_u64(42);
    let result = runner.run_with_events(&features, &mut rng, &mut skipped);

    for event in skipped.into_inner() {
        if let DensityEvent::FeatureSkipped { name, reason, .. } = event {
            tracing::info!("Skipped '{}': {}.", name, reason);
        }
    }

    tracing::info!(
        "Rendered {} dots (~{} population) from {} of {} regions.",
        result.dots.len(),
        result.population_represented(config.dots_per_unit),
        result.features_sampled,
        result.features_total
    );

    render_dots_to_png(
        &features,
        &result.dots,
        &RenderConfig::new(MAP_SIZE),
        "dot-density-regions.png",
    )?;
    Ok(())
}

fn regions() -> Vec<SyntheticRegion> {
    let mainland = blob(DVec2::new(11.0, 47.0), DVec2::new(2.4, 1.6), 48, 0.25, 0.3);
    let island = blob(DVec2::new(14.4, 44.9), DVec2::new(0.5, 0.3), 16, 0.1, 1.0);

    vec![
        SyntheticRegion {
            name: "Northmark",
            population: 2_400_000,
            geometry: Geometry::Polygon(Polygon::new(blob(
                DVec2::new(8.0, 51.0),
                DVec2::new(2.0, 1.3),
                40,
                0.3,
                0.0,
            ))),
        },
        SyntheticRegion {
            name: "Eastvale",
            population: 1_150_000,
            geometry: Geometry::Polygon(Polygon::new(blob(
                DVec2::new(14.0, 50.5),
                DVec2::new(1.6, 1.5),
                36,
                0.35,
                2.0,
            ))),
        },
        SyntheticRegion {
            name: "Southcoast",
            population: 3_700_000,
            // The island has the smaller bounding box, so dots land on the mainland.
            geometry: Geometry::MultiPolygon(vec![Polygon::new(island), Polygon::new(mainland)]),
        },
        SyntheticRegion {
            name: "Lakeland",
            population: 640_000,
            geometry: Geometry::Polygon(Polygon::with_interiors(
                blob(DVec2::new(5.5, 47.5), DVec2::new(1.2, 1.0), 32, 0.2, 4.0),
                vec![blob(DVec2::new(5.5, 47.5), DVec2::new(0.3, 0.2), 12, 0.0, 0.0)],
            )),
        },
        SyntheticRegion {
            name: "Hamlet",
            population: 850,
            geometry: Geometry::Polygon(Polygon::new(blob(
                DVec2::new(9.0, 44.5),
                DVec2::new(0.4, 0.3),
                12,
                0.1,
                0.0,
            ))),
        },
        SyntheticRegion {
            name: "Outer Isles",
            population: 90_000,
            geometry: Geometry::Polygon(Polygon::new(blob(
                DVec2::new(2.5, 52.5),
                DVec2::new(0.6, 0.4),
                14,
                0.2,
                1.5,
            ))),
        },
        SyntheticRegion {
            name: "Capital Point",
            population: 500_000,
            geometry: Geometry::Point(DVec2::new(11.5, 49.0)),
        },
    ]
}
