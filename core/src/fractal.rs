use crate::config::{FractalType, NoiseConfig};
use crate::finite_or_zero;

// Octave combinator shared by every fractal noise type
// Octave i samples the base kernel at `coordinate * lacunarity^i` with seed `seed + i`,
// weighted by `gain^i`, and the sum is normalised by the total absolute amplitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fractal {
    pub fractal_type: FractalType,
    pub octaves: u32,
    pub lacunarity: f32,
    pub gain: f32,
}

// Running sum for one fractal sample
struct Accumulator {
    fractal_type: FractalType,
    sum: f32,
    amplitude: f32,
    amplitude_sum: f32,
    // RigidMulti only: previous octave's signal, damps the next octave off the ridges
    weight: f32,
}

impl Accumulator {
    fn new(fractal_type: FractalType) -> Self {
        Self {
            fractal_type,
            // -0.0 is the exact additive identity, one FBM octave returns the kernel bit for bit
            sum: -0.0,
            amplitude: 1.0,
            amplitude_sum: 0.0,
            weight: 1.0,
        }
    }

    #[inline]
    fn push(&mut self, value: f32, gain: f32) {
        match self.fractal_type {
            FractalType::Fbm => self.sum += value * self.amplitude,
            FractalType::Billow => self.sum += (value.abs() * 2.0 - 1.0) * self.amplitude,
            FractalType::RigidMulti => {
                let signal = 1.0 - value.abs();
                self.sum += signal * self.weight * self.amplitude;
                self.weight = signal.clamp(0.0, 1.0);
            }
        }
        self.amplitude_sum += self.amplitude.abs();
        self.amplitude *= gain;
    }

    // Stop once the amplitude has underflowed (later octaves change nothing)
    // or once the next octave would overflow the amplitude sum (|gain| > 1)
    #[inline]
    fn exhausted(&self) -> bool {
        self.amplitude == 0.0 || !(self.amplitude_sum + self.amplitude.abs()).is_finite()
    }

    fn finish(self) -> f32 {
        // 1 <= amplitude_sum < inf: octave 0 has amplitude 1 and `exhausted` stops before overflow
        let normalized = self.sum / self.amplitude_sum;
        let value = match self.fractal_type {
            FractalType::Fbm | FractalType::Billow => normalized,
            // Rigid sums live in [0, 1], stretch them over [-1, 1] like the other modes
            FractalType::RigidMulti => normalized * 2.0 - 1.0,
        };
        finite_or_zero(value)
    }
}

impl Fractal {
    pub fn new(fractal_type: FractalType, octaves: u32, lacunarity: f32, gain: f32) -> Self {
        Self {
            fractal_type,
            octaves,
            lacunarity,
            gain,
        }
    }

    pub fn from_config(config: &NoiseConfig) -> Self {
        Self::new(
            config.fractal_type,
            config.octaves,
            config.lacunarity,
            config.gain,
        )
    }

    // Zero octaves would leave nothing to normalise, evaluate the base octave instead
    #[inline]
    fn octave_count(&self) -> u32 {
        self.octaves.max(1)
    }

    pub fn sample2<F>(&self, seed: i32, x: f32, y: f32, kernel: F) -> f32
    where
        F: Fn(i32, f32, f32) -> f32,
    {
        let mut acc = Accumulator::new(self.fractal_type);
        let (mut x, mut y, mut seed) = (x, y, seed);

        for _ in 0..self.octave_count() {
            acc.push(kernel(seed, x, y), self.gain);
            if acc.exhausted() {
                break;
            }
            x = finite_or_zero(x * self.lacunarity);
            y = finite_or_zero(y * self.lacunarity);
            seed = seed.wrapping_add(1);
        }

        acc.finish()
    }

    pub fn sample3<F>(&self, seed: i32, x: f32, y: f32, z: f32, kernel: F) -> f32
    where
        F: Fn(i32, f32, f32, f32) -> f32,
    {
        let mut acc = Accumulator::new(self.fractal_type);
        let (mut x, mut y, mut z, mut seed) = (x, y, z, seed);

        for _ in 0..self.octave_count() {
            acc.push(kernel(seed, x, y, z), self.gain);
            if acc.exhausted() {
                break;
            }
            x = finite_or_zero(x * self.lacunarity);
            y = finite_or_zero(y * self.lacunarity);
            z = finite_or_zero(z * self.lacunarity);
            seed = seed.wrapping_add(1);
        }

        acc.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Interpolation;
    use crate::perlin::perlin2;
    use crate::value::value3;

    fn perlin(seed: i32, x: f32, y: f32) -> f32 {
        perlin2(seed, Interpolation::Quintic, x, y)
    }

    #[test]
    fn single_fbm_octave_is_the_base_kernel() {
        let f = Fractal::new(FractalType::Fbm, 1, 2.0, 0.5);
        for i in 0..100 {
            let (x, y) = (i as f32 * 0.77 - 20.0, i as f32 * 0.31);
            assert_eq!(f.sample2(9, x, y, perlin).to_bits(), perlin(9, x, y).to_bits());
        }
    }

    #[test]
    fn zero_octaves_behaves_like_one() {
        let zero = Fractal::new(FractalType::Billow, 0, 2.0, 0.5);
        let one = Fractal::new(FractalType::Billow, 1, 2.0, 0.5);
        assert_eq!(zero.sample2(1, 3.3, 4.4, perlin), one.sample2(1, 3.3, 4.4, perlin));
    }

    #[test]
    fn octaves_use_scaled_coordinates_and_shifted_seeds() {
        // Record every call the combinator makes
        let calls = std::cell::RefCell::new(Vec::new());
        let f = Fractal::new(FractalType::Fbm, 3, 2.0, 0.5);
        f.sample2(10, 1.5, -0.25, |seed, x, y| {
            calls.borrow_mut().push((seed, x, y));
            0.0
        });
        assert_eq!(
            calls.into_inner(),
            vec![(10, 1.5, -0.25), (11, 3.0, -0.5), (12, 6.0, -1.0)]
        );
    }

    #[test]
    fn fbm_normalises_by_amplitude_sum() {
        // Constant octaves of 1.0 must come back as exactly 1.0
        let f = Fractal::new(FractalType::Fbm, 5, 2.0, 0.5);
        assert!((f.sample2(0, 0.0, 0.0, |_, _, _| 1.0) - 1.0).abs() < 1e-6);
        // Billow maps |v| = 0 to -1 and |v| = 1 to +1
        let b = Fractal::new(FractalType::Billow, 4, 2.0, 0.5);
        assert!((b.sample2(0, 0.0, 0.0, |_, _, _| 0.0) + 1.0).abs() < 1e-6);
        assert!((b.sample2(0, 0.0, 0.0, |_, _, _| -1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rigid_weighting_damps_later_octaves() {
        let r = Fractal::new(FractalType::RigidMulti, 3, 2.0, 0.5);
        // On a ridge (v = 0) every octave contributes fully
        assert!((r.sample2(0, 0.0, 0.0, |_, _, _| 0.0) - 1.0).abs() < 1e-6);
        // Far from ridges the first octave zeroes the weight of everything after it
        assert!((r.sample2(0, 0.0, 0.0, |_, _, _| 1.0) + 1.0).abs() < 1e-6);
        // A ridge in the second octave cannot lift a flat first octave
        let r2 = Fractal::new(FractalType::RigidMulti, 2, 2.0, 0.5);
        let v = r2.sample2(0, 0.0, 0.0, |seed, _, _| if seed == 0 { 1.0 } else { 0.0 });
        assert!((v + 1.0).abs() < 1e-6);
    }

    #[test]
    fn fractal_modes_stay_bounded() {
        for fractal_type in FractalType::ALL {
            let f = Fractal::new(*fractal_type, 3, 2.0, 0.5);
            for i in 0..1000 {
                let (x, y, z) = (i as f32 * 0.13, i as f32 * -0.29, i as f32 * 0.07);
                let v = f.sample3(4, x, y, z, |s, x, y, z| {
                    value3(s, Interpolation::Hermite, x, y, z)
                });
                assert!(v.abs() <= 1.0 + 1e-6, "{:?} gave {}", fractal_type, v);
            }
        }
    }

    #[test]
    fn degenerate_parameters_stay_finite() {
        let cases = [
            Fractal::new(FractalType::Fbm, 500, 2.0, 0.5),
            Fractal::new(FractalType::Billow, 8, -3.0, -1.5),
            Fractal::new(FractalType::RigidMulti, 4, 0.0, 0.0),
            Fractal::new(FractalType::Fbm, 300, 10.0, 1.0),
            Fractal::new(FractalType::Fbm, 200, 2.0, 2.0),
            Fractal::new(FractalType::Billow, 3, 2.0, 1.0e30),
            Fractal::new(FractalType::RigidMulti, 200, 2.0, -2.0),
            Fractal::new(FractalType::Fbm, 4, 2.0, f32::MAX),
            Fractal::new(FractalType::Fbm, 4, 2.0, f32::NAN),
        ];
        for f in cases {
            let v = f.sample2(1, 123.4, -56.7, perlin);
            assert!(v.is_finite(), "{:?} gave {}", f, v);
            let v = f.sample3(1, 123.4, -56.7, 9.1, |s, x, y, z| {
                value3(s, Interpolation::Linear, x, y, z)
            });
            assert!(v.is_finite(), "{:?} gave {}", f, v);
        }
    }

    #[test]
    fn growing_amplitude_stops_before_overflow() {
        // Octaves run while the amplitude sum stays finite, then the loop ends
        let calls = std::cell::Cell::new(0);
        let f = Fractal::new(FractalType::Fbm, 200, 2.0, 2.0);
        let v = f.sample2(0, 0.5, 0.5, |_, _, _| {
            calls.set(calls.get() + 1);
            1.0
        });
        assert!(calls.get() > 100 && calls.get() < 200, "{} octaves", calls.get());
        assert!((v - 1.0).abs() < 1e-6, "{}", v);

        // Huge gain: the last finite octave dominates the normalised sum
        let f = Fractal::new(FractalType::Fbm, 3, 2.0, 1.0e30);
        let v = f.sample2(0, 0.0, 0.0, |seed, _, _| if seed == 0 { 1.0 } else { -0.5 });
        assert!((v + 0.5).abs() < 1e-6, "{}", v);
    }
}
