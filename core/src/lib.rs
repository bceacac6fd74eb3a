// noisefield: seeded scalar noise fields in 2D and 3D
// Kernels are plain functions of (seed, coordinate); `NoiseEngine` picks one from a `NoiseConfig`
pub mod cellular;
pub mod config;
pub mod cubic;
pub mod domain_warp;
pub mod engine;
pub mod fractal;
pub mod hash;
pub mod interp;
pub mod perlin;
pub mod simplex;
pub mod utils;
pub mod value;
pub mod white;

pub use cellular::Cellular;
pub use config::{
    CellularDistanceFunction, CellularReturnType, FractalType, Interpolation, NoiseConfig,
    NoiseType, ParseError,
};
pub use domain_warp::DomainWarp;
pub use engine::NoiseEngine;
pub use fractal::Fractal;
pub use utils::{HeightMap2D, flatten2, normalize2, sample_grid2};

// Noise generator that can sample 2D or 3D points
// Coordinates are world space, each generator applies its own frequency
pub trait NoiseGenerator {
    // Sample 2D noise at (x, y)
    fn get2(&self, x: f32, y: f32) -> f32;

    // Sample 3D noise at (x, y, z)
    fn get3(&self, x: f32, y: f32, z: f32) -> f32;
}

// Coordinates that overflowed (or were never finite) sample the origin instead of poisoning the math
#[inline]
pub(crate) fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}
