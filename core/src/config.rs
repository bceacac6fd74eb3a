use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Returned when a parameter name does not match any member of its enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown {kind} `{value}`")]
    Unknown { kind: &'static str, value: String },
}

// Closed parameter enumerations share the same surface:
// a default, a stable snake_case name, Display/FromStr and an ALL list in declaration order
macro_rules! parameter_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| ParseError::Unknown {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

parameter_enum! {
    // Kernel selected by the engine's dispatcher.
    NoiseType, "noise type", default = Simplex {
        Value => "value",
        ValueFractal => "value_fractal",
        Perlin => "perlin",
        PerlinFractal => "perlin_fractal",
        Simplex => "simplex",
        SimplexFractal => "simplex_fractal",
        Cellular => "cellular",
        WhiteNoise => "white_noise",
        Cubic => "cubic",
        CubicFractal => "cubic_fractal",
    }
}

parameter_enum! {
    // Smoothing curve used by the Value and Perlin kernels, lowest to highest quality.
    Interpolation, "interpolation", default = Quintic {
        Linear => "linear",
        Hermite => "hermite",
        Quintic => "quintic",
    }
}

parameter_enum! {
    // How octaves are combined by the fractal noise types.
    FractalType, "fractal type", default = Fbm {
        // Fractional Brownian motion: signed octaves summed directly
        Fbm => "fbm",
        // Absolute-value octaves, rounded relief
        Billow => "billow",
        // Inverted absolute-value octaves weighted by the previous octave, sharp ridges
        RigidMulti => "rigid_multi",
    }
}

parameter_enum! {
    // Metric used to find the nearest cellular feature points.
    CellularDistanceFunction, "cellular distance function", default = Euclidean {
        Euclidean => "euclidean",
        Manhattan => "manhattan",
        // Average of Euclidean and Manhattan, curved cell boundaries
        Natural => "natural",
    }
}

parameter_enum! {
    // What the cellular kernel returns once the two nearest features are known.
    CellularReturnType, "cellular return type", default = CellValue {
        CellValue => "cell_value",
        Distance => "distance",
        Distance2 => "distance2",
        Distance2Add => "distance2_add",
        Distance2Sub => "distance2_sub",
        Distance2Mul => "distance2_mul",
        Distance2Div => "distance2_div",
    }
}

impl NoiseType {
    // Whether the fractal parameters (octaves, lacunarity, gain, fractal type) apply.
    pub fn is_fractal(self) -> bool {
        matches!(
            self,
            NoiseType::ValueFractal
                | NoiseType::PerlinFractal
                | NoiseType::SimplexFractal
                | NoiseType::CubicFractal
        )
    }
}

pub const DEFAULT_SEED: i32 = 1337;
pub const DEFAULT_FREQUENCY: f32 = 0.01;
pub const DEFAULT_OCTAVES: u32 = 3;
pub const DEFAULT_LACUNARITY: f32 = 2.0;
pub const DEFAULT_GAIN: f32 = 0.5;
pub const DEFAULT_CELLULAR_JITTER: f32 = 0.45;

// Complete parameter set for one generator.
//
// A plain value: evaluation is a function of `(NoiseConfig, coordinate)` only.
// Fields are independent of each other, and the fractal fields are ignored
// unless `NoiseType::is_fractal` holds for `noise_type`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub noise_type: NoiseType,
    pub seed: i32,
    // Scales input coordinates; zero collapses the field to one lattice cell, negative mirrors it
    pub frequency: f32,
    pub interpolation: Interpolation,
    pub fractal_type: FractalType,
    // Zero is evaluated as a single octave
    pub octaves: u32,
    pub lacunarity: f32,
    pub gain: f32,
    // Above 0.5 feature points may leave the searched neighbourhood and seams appear
    pub cellular_jitter: f32,
    pub cellular_distance_function: CellularDistanceFunction,
    pub cellular_return_type: CellularReturnType,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            noise_type: NoiseType::default(),
            seed: DEFAULT_SEED,
            frequency: DEFAULT_FREQUENCY,
            interpolation: Interpolation::default(),
            fractal_type: FractalType::default(),
            octaves: DEFAULT_OCTAVES,
            lacunarity: DEFAULT_LACUNARITY,
            gain: DEFAULT_GAIN,
            cellular_jitter: DEFAULT_CELLULAR_JITTER,
            cellular_distance_function: CellularDistanceFunction::default(),
            cellular_return_type: CellularReturnType::default(),
        }
    }
}

impl NoiseConfig {
    pub fn new(noise_type: NoiseType, seed: i32) -> Self {
        Self {
            noise_type,
            seed,
            ..Default::default()
        }
    }

    pub fn with_noise_type(self, noise_type: NoiseType) -> Self {
        Self { noise_type, ..self }
    }

    pub fn with_seed(self, seed: i32) -> Self {
        Self { seed, ..self }
    }

    pub fn with_frequency(self, frequency: f32) -> Self {
        Self { frequency, ..self }
    }

    pub fn with_interpolation(self, interpolation: Interpolation) -> Self {
        Self {
            interpolation,
            ..self
        }
    }

    pub fn with_fractal_type(self, fractal_type: FractalType) -> Self {
        Self {
            fractal_type,
            ..self
        }
    }

    pub fn with_octaves(self, octaves: u32) -> Self {
        Self { octaves, ..self }
    }

    pub fn with_lacunarity(self, lacunarity: f32) -> Self {
        Self { lacunarity, ..self }
    }

    pub fn with_gain(self, gain: f32) -> Self {
        Self { gain, ..self }
    }

    pub fn with_cellular_jitter(self, cellular_jitter: f32) -> Self {
        Self {
            cellular_jitter,
            ..self
        }
    }

    pub fn with_cellular_distance_function(
        self,
        cellular_distance_function: CellularDistanceFunction,
    ) -> Self {
        Self {
            cellular_distance_function,
            ..self
        }
    }

    pub fn with_cellular_return_type(self, cellular_return_type: CellularReturnType) -> Self {
        Self {
            cellular_return_type,
            ..self
        }
    }

    // Human-readable descriptions of parameters that evaluate degenerately.
    // Nothing here is rejected; the engine only logs these.
    pub fn degeneracies(&self) -> Vec<&'static str> {
        let mut found = Vec::new();
        if self.frequency == 0.0 {
            found.push("frequency is zero, the field collapses to a single lattice cell");
        }
        if !self.frequency.is_finite() {
            found.push("frequency is not finite, every coordinate collapses to the origin");
        }
        if self.noise_type.is_fractal() {
            if self.octaves == 0 {
                found.push("octaves is zero, evaluated as a single octave");
            }
            if !self.lacunarity.is_finite() || !self.gain.is_finite() {
                found.push("lacunarity or gain is not finite");
            } else if self.gain.abs() > 1.0 && self.octaves > 1 {
                found.push("gain magnitude above 1, octaves stop once the amplitude would overflow");
            }
        }
        if self.noise_type == NoiseType::Cellular && !(0.0..=1.0).contains(&self.cellular_jitter)
        {
            found.push("cellular jitter outside [0, 1], expect seams between cells");
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = NoiseConfig::default();
        assert_eq!(c.noise_type, NoiseType::Simplex);
        assert_eq!(c.seed, 1337);
        assert_eq!(c.frequency, 0.01);
        assert_eq!(c.interpolation, Interpolation::Quintic);
        assert_eq!(c.fractal_type, FractalType::Fbm);
        assert_eq!(c.octaves, 3);
        assert_eq!(c.lacunarity, 2.0);
        assert_eq!(c.gain, 0.5);
        assert_eq!(c.cellular_jitter, 0.45);
        assert_eq!(c.cellular_distance_function, CellularDistanceFunction::Euclidean);
        assert_eq!(c.cellular_return_type, CellularReturnType::CellValue);
    }

    #[test]
    fn builders_touch_one_field() {
        let base = NoiseConfig::default();
        let c = base.with_gain(0.25);
        assert_eq!(c.gain, 0.25);
        assert_eq!(NoiseConfig { gain: base.gain, ..c }, base);
    }

    #[test]
    fn member_sets_are_complete() {
        assert_eq!(NoiseType::ALL.len(), 10);
        assert_eq!(Interpolation::ALL.len(), 3);
        assert_eq!(FractalType::ALL.len(), 3);
        assert_eq!(CellularDistanceFunction::ALL.len(), 3);
        assert_eq!(CellularReturnType::ALL.len(), 7);
    }

    #[test]
    fn names_parse_back() {
        for &t in NoiseType::ALL {
            assert_eq!(t.to_string().parse::<NoiseType>(), Ok(t));
        }
        for &r in CellularReturnType::ALL {
            assert_eq!(r.as_str().parse::<CellularReturnType>(), Ok(r));
        }
        assert_eq!(" Perlin_Fractal ".parse::<NoiseType>(), Ok(NoiseType::PerlinFractal));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "worley".parse::<NoiseType>().unwrap_err();
        assert_eq!(
            err,
            ParseError::Unknown {
                kind: "noise type",
                value: "worley".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown noise type `worley`");
    }

    #[test]
    fn fractal_types_are_flagged() {
        let fractal: Vec<_> = NoiseType::ALL.iter().filter(|t| t.is_fractal()).collect();
        assert_eq!(fractal.len(), 4);
        assert!(!NoiseType::Cellular.is_fractal());
    }

    #[test]
    fn degeneracies_are_reported_not_fixed() {
        assert!(NoiseConfig::default().degeneracies().is_empty());
        let c = NoiseConfig::new(NoiseType::PerlinFractal, 0)
            .with_octaves(0)
            .with_frequency(0.0);
        assert_eq!(c.degeneracies().len(), 2);
        assert_eq!(c.octaves, 0);
        // Fractal fields do not matter for non-fractal kernels
        let c = NoiseConfig::new(NoiseType::Perlin, 0).with_octaves(0);
        assert!(c.degeneracies().is_empty());
    }

    #[test]
    fn growing_gain_is_reported() {
        let c = NoiseConfig::new(NoiseType::ValueFractal, 0).with_gain(2.0);
        assert_eq!(c.degeneracies().len(), 1);
        assert_eq!(c.with_gain(-1.5).degeneracies().len(), 1);
        // A single octave never reaches the growing amplitude
        assert!(c.with_octaves(1).degeneracies().is_empty());
        assert!(c.with_gain(1.0).degeneracies().is_empty());
    }
}
