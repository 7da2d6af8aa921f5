//! Surface chart demo
//!
//! Samples a synthetic height field at random floor positions, builds the textured
//! surface, turns the chart a little and writes the diffuse map to a PNG file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use meshchart_core::{Axis, Point3d, PointCloud};
use meshchart_reconstruction::{
    parallel::{init_thread_pool, ThreadPoolConfig},
    HorizontalAxis, SurfaceBuilder, SurfaceConfig, SwapHeightAdapter,
};
use meshchart_visualization::ChartView;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "surface_demo", about = "Render a scatter cloud as a colourized surface")]
struct Args {
    /// Number of random sample points
    #[arg(long, default_value_t = 400)]
    points: usize,

    /// Edge length of the chart cube
    #[arg(long, default_value_t = 400)]
    cube_size: u32,

    /// Edge length of the diffuse map
    #[arg(long, default_value_t = 800)]
    image_size: u32,

    /// Where to write the diffuse map
    #[arg(long, default_value = "diffuse_map.png")]
    output: PathBuf,

    /// Seed for the sample positions
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Worker threads for texture synthesis (0 = automatic)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Triangulate with the height axis swapped for X
    #[arg(long)]
    swap_height: bool,
}

/// A smile-shaped volatility surface over strike and expiry
fn generate_cloud(num_points: usize, seed: u64) -> PointCloud {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_points)
        .map(|_| {
            let strike: f64 = rng.gen_range(50.0..150.0);
            let expiry: f64 = rng.gen_range(0.1..2.0);
            let moneyness = (strike - 100.0) / 100.0;
            let vol = 0.2 + 0.8 * moneyness * moneyness / expiry.sqrt() + 0.02 * expiry;
            Point3d::new(strike, vol, expiry)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut pool = ThreadPoolConfig::default();
    if args.threads > 0 {
        pool = pool.with_threads(args.threads);
    }
    init_thread_pool(pool)?;

    let cloud = generate_cloud(args.points, args.seed);
    info!(points = cloud.len(), seed = args.seed, "generated sample cloud");

    let config = SurfaceConfig::default()
        .with_cube_size(args.cube_size)
        .with_image_size(args.image_size);
    let mut builder = SurfaceBuilder::new(config);
    if args.swap_height {
        builder = builder.with_adapter(SwapHeightAdapter::new(HorizontalAxis::X));
    }

    let surface = builder.build(&cloud).context("failed to build surface")?;
    let stats = surface.diffuse_map.stats;
    println!(
        "Surface: {} vertices, {} faces",
        surface.mesh.vertex_count(),
        surface.mesh.face_count()
    );
    println!(
        "Diffuse map: {} covered, {} gap-filled, {} transparent texels",
        stats.covered, stats.gap_filled, stats.transparent
    );

    surface
        .diffuse_map
        .save_png(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    println!("Wrote {}", args.output.display());

    let mut view = ChartView::new(*surface.composite.extent(), args.cube_size).with_titles(
        Some("strike"),
        Some("volatility"),
        Some("expiry"),
    );
    view.press(0.0, 0.0);
    if let Some(update) = view.drag_to(35.0, -25.0) {
        println!(
            "After drag: angles ({:.1}, {:.1}), visible walls {:?}",
            update.first_angle, update.second_angle, update.faces
        );
        if let Some(rotation) = update.rotation {
            println!(
                "Label rotation: {:.2} degrees about {:?}",
                rotation.angle_degrees, rotation.axis
            );
        }
    }

    let first_tick = view.legend().labels(Axis::X)[0];
    println!("First strike tick {:.2} at {:?}", first_tick.value, first_tick.position);

    Ok(())
}
