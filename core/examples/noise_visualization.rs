// Save a 256×256 grayscale preview of every noise type, plus a 3D slice of each
use std::error::Error;

use noisefield::utils::{sample_slice3, to_gray_image};
use noisefield::{NoiseConfig, NoiseEngine, NoiseType, sample_grid2};
use tracing_subscriber::EnvFilter;

const SIZE: usize = 256;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    for &noise_type in NoiseType::ALL {
        let engine = NoiseEngine::with_config(NoiseConfig::new(noise_type, 42).with_frequency(0.02));

        let filename = format!("{}_2d.png", noise_type);
        to_gray_image(&sample_grid2(&engine, SIZE, SIZE)).save(&filename)?;
        println!("Saved {}", filename);

        // Slice through the middle of a SIZE³ volume
        let filename = format!("{}_3d_slice.png", noise_type);
        to_gray_image(&sample_slice3(&engine, SIZE, SIZE, SIZE as f32 / 2.0)).save(&filename)?;
        println!("Saved {}", filename);
    }
    Ok(())
}
