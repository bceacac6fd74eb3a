use crate::NoiseGenerator;
use crate::utils::{HeightMap2D, sample_grid2};

// World-space offsets between the warp samples of each axis, far enough apart to decorrelate them
const WARP_OFFSET_Y: (f32, f32, f32) = (1013.7, -587.3, 271.9);
const WARP_OFFSET_Z: (f32, f32, f32) = (-433.1, 811.9, -1297.3);

// Domain warp: sample `base` at a point displaced by `warp`
// The displacement along each axis is warp output (about [-1, 1]) times `strength` world units
pub struct DomainWarp<'a> {
    pub base: &'a dyn NoiseGenerator,
    pub warp: &'a dyn NoiseGenerator,
    pub strength: f32,
}

impl<'a> DomainWarp<'a> {
    pub fn new(base: &'a dyn NoiseGenerator, warp: &'a dyn NoiseGenerator, strength: f32) -> Self {
        Self {
            base,
            warp,
            strength,
        }
    }

    pub fn generate(&self, width: usize, height: usize) -> HeightMap2D {
        sample_grid2(self, width, height)
    }
}

impl NoiseGenerator for DomainWarp<'_> {
    fn get2(&self, x: f32, y: f32) -> f32 {
        let dx = self.warp.get2(x, y);
        let dy = self.warp.get2(x + WARP_OFFSET_Y.0, y + WARP_OFFSET_Y.1);
        self.base
            .get2(x + dx * self.strength, y + dy * self.strength)
    }

    fn get3(&self, x: f32, y: f32, z: f32) -> f32 {
        let dx = self.warp.get3(x, y, z);
        let dy = self.warp.get3(
            x + WARP_OFFSET_Y.0,
            y + WARP_OFFSET_Y.1,
            z + WARP_OFFSET_Y.2,
        );
        let dz = self.warp.get3(
            x + WARP_OFFSET_Z.0,
            y + WARP_OFFSET_Z.1,
            z + WARP_OFFSET_Z.2,
        );
        self.base.get3(
            x + dx * self.strength,
            y + dy * self.strength,
            z + dz * self.strength,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::DomainWarp;
    use crate::{NoiseConfig, NoiseEngine, NoiseGenerator, NoiseType};

    fn engines() -> (NoiseEngine, NoiseEngine) {
        let base = NoiseEngine::with_config(NoiseConfig::new(NoiseType::PerlinFractal, 1));
        let warp = NoiseEngine::with_config(NoiseConfig::new(NoiseType::Simplex, 2));
        (base, warp)
    }

    #[test]
    fn zero_strength_is_the_base_field() {
        let (base, warp) = engines();
        let warped = DomainWarp::new(&base, &warp, 0.0);
        for i in 0..50 {
            let (x, y) = (i as f32 * 7.3, i as f32 * -2.1);
            assert_eq!(warped.get2(x, y), base.get2(x, y));
            assert_eq!(warped.get3(x, y, 4.0), base.get3(x, y, 4.0));
        }
    }

    #[test]
    fn warp_moves_the_field() {
        let (base, warp) = engines();
        let warped = DomainWarp::new(&base, &warp, 40.0);
        let moved = (0..100)
            .filter(|&i| {
                let (x, y) = (i as f32 * 11.0 + 0.5, i as f32 * 3.0 + 0.5);
                (warped.get2(x, y) - base.get2(x, y)).abs() > 1e-4
            })
            .count();
        assert!(moved > 50, "only {} samples moved", moved);
    }

    #[test]
    fn generate_matches_point_samples() {
        let (base, warp) = engines();
        let warped = DomainWarp::new(&base, &warp, 25.0);
        let map = warped.generate(16, 8);
        assert_eq!(map.len(), 8);
        assert_eq!(map[0].len(), 16);
        assert_eq!(map[5][9], warped.get2(9.0, 5.0));
    }
}
