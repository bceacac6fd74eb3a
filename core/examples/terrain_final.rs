// Coloured terrain: rigid fractal Perlin, domain-warped by simplex, rendered through a colour gradient
use std::error::Error;
use std::path::Path;

use noisefield::utils::to_terrain_image;
use noisefield::{DomainWarp, FractalType, NoiseConfig, NoiseEngine, NoiseType};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let size = 513;
    let base = NoiseEngine::with_config(
        NoiseConfig::new(NoiseType::PerlinFractal, 2025)
            .with_frequency(0.006)
            .with_fractal_type(FractalType::RigidMulti)
            .with_octaves(6),
    );
    let warp = NoiseEngine::with_config(
        NoiseConfig::new(NoiseType::SimplexFractal, 2026)
            .with_frequency(0.004)
            .with_octaves(2),
    );

    let terrain = DomainWarp::new(&base, &warp, 60.0).generate(size, size);

    let path = Path::new("terrain_final.png");
    to_terrain_image(&terrain).save(path)?;
    println!("Saved final terrain image to {:?}", path);
    Ok(())
}
