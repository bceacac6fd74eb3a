// Configuration facade: owns one `NoiseConfig` and routes evaluations to the selected kernel
//
// Evaluation takes `&self` and has no hidden state, so any number of threads may
// evaluate the same engine at once. Reconfiguring takes `&mut self`, so a setter
// cannot race with an evaluation. Callers that reconfigure while other threads
// sample should hand each batch its own copy (`NoiseConfig` is `Copy`) or lock the engine.

use tracing::{debug, trace, warn};

use crate::NoiseGenerator;
use crate::cellular::Cellular;
use crate::config::{
    CellularDistanceFunction, CellularReturnType, FractalType, Interpolation, NoiseConfig,
    NoiseType,
};
use crate::cubic::{cubic2, cubic3};
use crate::finite_or_zero;
use crate::fractal::Fractal;
use crate::perlin::{perlin2, perlin3};
use crate::simplex::{simplex2, simplex3};
use crate::value::{value2, value3};
use crate::white::{white2, white3};

// Evaluate `config` at an already frequency-scaled 2D coordinate.
pub fn dispatch2(config: &NoiseConfig, x: f32, y: f32) -> f32 {
    let seed = config.seed;
    let interp = config.interpolation;
    match config.noise_type {
        NoiseType::Value => value2(seed, interp, x, y),
        NoiseType::ValueFractal => {
            Fractal::from_config(config).sample2(seed, x, y, |s, x, y| value2(s, interp, x, y))
        }
        NoiseType::Perlin => perlin2(seed, interp, x, y),
        NoiseType::PerlinFractal => {
            Fractal::from_config(config).sample2(seed, x, y, |s, x, y| perlin2(s, interp, x, y))
        }
        NoiseType::Simplex => simplex2(seed, x, y),
        NoiseType::SimplexFractal => Fractal::from_config(config).sample2(seed, x, y, simplex2),
        NoiseType::Cellular => Cellular::from_config(config).sample2(seed, x, y),
        NoiseType::WhiteNoise => white2(seed, x, y),
        NoiseType::Cubic => cubic2(seed, x, y),
        NoiseType::CubicFractal => Fractal::from_config(config).sample2(seed, x, y, cubic2),
    }
}

// Evaluate `config` at an already frequency-scaled 3D coordinate.
pub fn dispatch3(config: &NoiseConfig, x: f32, y: f32, z: f32) -> f32 {
    let seed = config.seed;
    let interp = config.interpolation;
    match config.noise_type {
        NoiseType::Value => value3(seed, interp, x, y, z),
        NoiseType::ValueFractal => Fractal::from_config(config)
            .sample3(seed, x, y, z, |s, x, y, z| value3(s, interp, x, y, z)),
        NoiseType::Perlin => perlin3(seed, interp, x, y, z),
        NoiseType::PerlinFractal => Fractal::from_config(config)
            .sample3(seed, x, y, z, |s, x, y, z| perlin3(s, interp, x, y, z)),
        NoiseType::Simplex => simplex3(seed, x, y, z),
        NoiseType::SimplexFractal => {
            Fractal::from_config(config).sample3(seed, x, y, z, simplex3)
        }
        NoiseType::Cellular => Cellular::from_config(config).sample3(seed, x, y, z),
        NoiseType::WhiteNoise => white3(seed, x, y, z),
        NoiseType::Cubic => cubic3(seed, x, y, z),
        NoiseType::CubicFractal => Fractal::from_config(config).sample3(seed, x, y, z, cubic3),
    }
}

// A fresh engine holds the default configuration but is not initialized,
// every evaluation returns 0.0 until `setup` has been called once
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoiseEngine {
    config: NoiseConfig,
    initialized: bool,
}

impl NoiseEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // Engine that is already set up with `config`.
    pub fn with_config(config: NoiseConfig) -> Self {
        let mut engine = Self::new();
        engine.setup(config);
        engine
    }

    // Replace every parameter at once and mark the engine initialized.
    // Nothing is validated; degenerate values are logged and evaluated as documented.
    pub fn setup(&mut self, config: NoiseConfig) {
        for issue in config.degeneracies() {
            warn!(noise_type = %config.noise_type, "{}", issue);
        }
        debug!(?config, "noise engine configured");
        self.config = config;
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    // Sample the field at `(x, y)`.
    pub fn evaluate2(&self, x: f32, y: f32) -> f32 {
        if !self.initialized {
            return 0.0;
        }
        let frequency = self.config.frequency;
        dispatch2(
            &self.config,
            finite_or_zero(x * frequency),
            finite_or_zero(y * frequency),
        )
    }

    // Sample the field at `(x, y, z)`. Use `z = 0.0` for a slice through the origin.
    pub fn evaluate3(&self, x: f32, y: f32, z: f32) -> f32 {
        if !self.initialized {
            return 0.0;
        }
        let frequency = self.config.frequency;
        dispatch3(
            &self.config,
            finite_or_zero(x * frequency),
            finite_or_zero(y * frequency),
            finite_or_zero(z * frequency),
        )
    }

    // Setters swap in a modified copy, they never touch `initialized`
    fn replace(&mut self, field: &'static str, config: NoiseConfig) {
        trace!(field, ?config, "noise parameter changed");
        self.config = config;
    }

    pub fn noise_type(&self) -> NoiseType {
        self.config.noise_type
    }

    pub fn set_noise_type(&mut self, noise_type: NoiseType) {
        self.replace("noise_type", self.config.with_noise_type(noise_type));
    }

    pub fn seed(&self) -> i32 {
        self.config.seed
    }

    pub fn set_seed(&mut self, seed: i32) {
        self.replace("seed", self.config.with_seed(seed));
    }

    pub fn frequency(&self) -> f32 {
        self.config.frequency
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.replace("frequency", self.config.with_frequency(frequency));
    }

    pub fn interpolation(&self) -> Interpolation {
        self.config.interpolation
    }

    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.replace("interpolation", self.config.with_interpolation(interpolation));
    }

    pub fn fractal_type(&self) -> FractalType {
        self.config.fractal_type
    }

    pub fn set_fractal_type(&mut self, fractal_type: FractalType) {
        self.replace("fractal_type", self.config.with_fractal_type(fractal_type));
    }

    pub fn octaves(&self) -> u32 {
        self.config.octaves
    }

    pub fn set_octaves(&mut self, octaves: u32) {
        self.replace("octaves", self.config.with_octaves(octaves));
    }

    pub fn lacunarity(&self) -> f32 {
        self.config.lacunarity
    }

    pub fn set_lacunarity(&mut self, lacunarity: f32) {
        self.replace("lacunarity", self.config.with_lacunarity(lacunarity));
    }

    pub fn gain(&self) -> f32 {
        self.config.gain
    }

    pub fn set_gain(&mut self, gain: f32) {
        self.replace("gain", self.config.with_gain(gain));
    }

    pub fn cellular_jitter(&self) -> f32 {
        self.config.cellular_jitter
    }

    pub fn set_cellular_jitter(&mut self, jitter: f32) {
        self.replace("cellular_jitter", self.config.with_cellular_jitter(jitter));
    }

    pub fn cellular_distance_function(&self) -> CellularDistanceFunction {
        self.config.cellular_distance_function
    }

    pub fn set_cellular_distance_function(&mut self, function: CellularDistanceFunction) {
        self.replace(
            "cellular_distance_function",
            self.config.with_cellular_distance_function(function),
        );
    }

    pub fn cellular_return_type(&self) -> CellularReturnType {
        self.config.cellular_return_type
    }

    pub fn set_cellular_return_type(&mut self, return_type: CellularReturnType) {
        self.replace(
            "cellular_return_type",
            self.config.with_cellular_return_type(return_type),
        );
    }
}

impl NoiseGenerator for NoiseEngine {
    fn get2(&self, x: f32, y: f32) -> f32 {
        self.evaluate2(x, y)
    }

    fn get3(&self, x: f32, y: f32, z: f32) -> f32 {
        self.evaluate3(x, y, z)
    }
}
