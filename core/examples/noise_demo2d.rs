// Print the top-left 16×16 corner of a noise field
// Usage: cargo run --example noise_demo2d -- [noise_type] [seed]
use std::env;
use std::error::Error;

use noisefield::{NoiseConfig, NoiseEngine, NoiseType};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args().skip(1);
    let noise_type: NoiseType = match args.next() {
        Some(name) => name.parse()?,
        None => NoiseType::default(),
    };
    let seed: i32 = match args.next() {
        Some(seed) => seed.parse()?,
        None => 1337,
    };

    let engine = NoiseEngine::with_config(NoiseConfig::new(noise_type, seed).with_frequency(0.1));

    println!("{} (seed {})", noise_type, seed);
    for y in 0..16 {
        for x in 0..16 {
            print!("{:>7.3} ", engine.evaluate2(x as f32, y as f32));
        }
        println!();
    }
    Ok(())
}
