//! Terrain map generator CLI.
//!
//! Generates a fractal noise height field and exports it as PNG and JSON
//! into `<output>/<seed>/`.

use anyhow::Result;
use clap::Parser;
use noise::Perlin;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

use terrain_generator::export::{
    export_heightmap_png, export_json, export_legend_png, export_terrain_png,
};
use terrain_generator::noise_map::{NoiseMapConfig, generate};

/// Procedural terrain noise-map generator.
#[derive(Parser)]
#[command(name = "terrain-generator", version, about)]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = 100)]
    width: u32,

    /// Grid height in cells.
    #[arg(long, default_value_t = 100)]
    height: u32,

    /// Sampling zoom factor; higher values give smoother terrain.
    #[arg(long, default_value_t = 25.0)]
    scale: f64,

    /// Number of noise layers to combine.
    #[arg(long, default_value_t = 4)]
    octaves: u32,

    /// Amplitude multiplier applied after each octave.
    #[arg(long, default_value_t = 0.5)]
    persistence: f64,

    /// Frequency multiplier applied after each octave.
    #[arg(long, default_value_t = 2.0)]
    lacunarity: f64,

    /// Horizontal translation of the sampling domain.
    #[arg(long, default_value_t = 0.0)]
    offset_x: f64,

    /// Vertical translation of the sampling domain.
    #[arg(long, default_value_t = 0.0)]
    offset_y: f64,

    /// Random seed; drawn fresh when omitted.
    #[arg(long)]
    seed: Option<u32>,

    /// Output directory.
    #[arg(long, default_value = "maps")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = NoiseMapConfig {
        width: cli.width,
        height: cli.height,
        scale: cli.scale,
        octaves: cli.octaves,
        persistence: cli.persistence,
        lacunarity: cli.lacunarity,
        offset: [cli.offset_x, cli.offset_y],
    };

    let noise = Perlin::new(seed);
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let map = generate(&config, &noise, &mut rng);
    log::info!(
        "generated {}x{} map (seed {seed}, {} octaves)",
        map.width,
        map.height,
        config.octaves
    );

    let dir = cli.output.join(seed.to_string());
    std::fs::create_dir_all(&dir)?;

    export_heightmap_png(&map, &dir.join("heightmap.png"))?;
    export_terrain_png(&map, &dir.join("terrain.png"))?;
    export_legend_png(&map, seed, &dir.join("legend.png"))?;
    export_json(seed, &config, &map, &dir.join("map.json"))?;

    println!("Map generated → {}/", dir.display());
    Ok(())
}
