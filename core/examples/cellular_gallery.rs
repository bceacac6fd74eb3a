// Save one image per cellular return type and distance function
use std::error::Error;

use noisefield::utils::to_gray_image;
use noisefield::{
    CellularDistanceFunction, CellularReturnType, NoiseConfig, NoiseEngine, NoiseType,
    sample_grid2,
};
use tracing_subscriber::EnvFilter;

const SIZE: usize = 257;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let base = NoiseConfig::new(NoiseType::Cellular, 2025).with_frequency(0.03);
    for &function in CellularDistanceFunction::ALL {
        for &return_type in CellularReturnType::ALL {
            let engine = NoiseEngine::with_config(
                base.with_cellular_distance_function(function)
                    .with_cellular_return_type(return_type),
            );
            let filename = format!("cellular_{}_{}.png", function, return_type);
            to_gray_image(&sample_grid2(&engine, SIZE, SIZE)).save(&filename)?;
            println!("Saved {}", filename);
        }
    }
    Ok(())
}
