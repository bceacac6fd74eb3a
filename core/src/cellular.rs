use crate::config::{CellularDistanceFunction, CellularReturnType, NoiseConfig};
use crate::hash::{hash2, hash3, unit_vector2, unit_vector3, value_coord2, value_coord3};

// Feature points use a different hash stream from the cell values
const FEATURE_SEED_OFFSET: i32 = 0x2D35_8DC;

impl CellularDistanceFunction {
    #[inline]
    pub fn measure2(self, dx: f32, dy: f32) -> f32 {
        match self {
            CellularDistanceFunction::Euclidean => (dx * dx + dy * dy).sqrt(),
            CellularDistanceFunction::Manhattan => dx.abs() + dy.abs(),
            CellularDistanceFunction::Natural => {
                0.5 * ((dx.abs() + dy.abs()) + (dx * dx + dy * dy).sqrt())
            }
        }
    }

    #[inline]
    pub fn measure3(self, dx: f32, dy: f32, dz: f32) -> f32 {
        match self {
            CellularDistanceFunction::Euclidean => (dx * dx + dy * dy + dz * dz).sqrt(),
            CellularDistanceFunction::Manhattan => dx.abs() + dy.abs() + dz.abs(),
            CellularDistanceFunction::Natural => {
                0.5 * ((dx.abs() + dy.abs() + dz.abs()) + (dx * dx + dy * dy + dz * dz).sqrt())
            }
        }
    }
}

impl CellularReturnType {
    // Only CellValue is bounded to [-1, 1], the distance variants are returned unclamped
    // except for saturating at the f32 range (huge jitter can push sums and products past it)
    #[inline]
    pub fn combine(self, nearest: &Nearest) -> f32 {
        let Nearest {
            distance,
            distance2,
            cell_value,
        } = *nearest;
        let value = match self {
            CellularReturnType::CellValue => cell_value,
            CellularReturnType::Distance => distance,
            CellularReturnType::Distance2 => distance2,
            CellularReturnType::Distance2Add => distance + distance2,
            CellularReturnType::Distance2Sub => distance2 - distance,
            CellularReturnType::Distance2Mul => distance * distance2,
            CellularReturnType::Distance2Div => {
                if distance2 > 0.0 {
                    distance / distance2
                } else {
                    0.0
                }
            }
        };
        value.clamp(-f32::MAX, f32::MAX)
    }
}

// Overflowed (or NaN, from infinite jitter) distances count as the largest finite distance
#[inline]
fn saturate(d: f32) -> f32 {
    d.min(f32::MAX)
}

// Result of the neighbourhood search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    // Distance to the closest feature point
    pub distance: f32,
    // Distance to the second closest feature point
    pub distance2: f32,
    // Hash-derived value of the closest feature's cell, in [-1, 1]
    pub cell_value: f32,
}

// Worley noise over a unit lattice
// One feature point per cell, displaced from the cell centre by `jitter` along a hashed direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cellular {
    pub jitter: f32,
    pub distance_function: CellularDistanceFunction,
    pub return_type: CellularReturnType,
}

impl Cellular {
    pub fn new(
        jitter: f32,
        distance_function: CellularDistanceFunction,
        return_type: CellularReturnType,
    ) -> Self {
        Self {
            jitter,
            distance_function,
            return_type,
        }
    }

    pub fn from_config(config: &NoiseConfig) -> Self {
        Self::new(
            config.cellular_jitter,
            config.cellular_distance_function,
            config.cellular_return_type,
        )
    }

    pub fn sample2(&self, seed: i32, x: f32, y: f32) -> f32 {
        self.return_type.combine(&self.nearest2(seed, x, y))
    }

    pub fn sample3(&self, seed: i32, x: f32, y: f32, z: f32) -> f32 {
        self.return_type.combine(&self.nearest3(seed, x, y, z))
    }

    // Search the containing cell and its 8 neighbours for the two closest feature points
    pub fn nearest2(&self, seed: i32, x: f32, y: f32) -> Nearest {
        let xf = x.floor();
        let yf = y.floor();
        let cx = xf as i32;
        let cy = yf as i32;
        // Work relative to the containing cell so distances stay small for any coordinate
        let fx = x - xf;
        let fy = y - yf;
        let feature_seed = seed.wrapping_add(FEATURE_SEED_OFFSET);

        // Every measured distance is finite, so the first two candidates always replace these
        let mut d0 = f32::INFINITY;
        let mut d1 = f32::INFINITY;
        let mut closest = (cx, cy);

        for dx in -1..=1 {
            for dy in -1..=1 {
                let xi = cx.wrapping_add(dx);
                let yi = cy.wrapping_add(dy);
                let (ox, oy) = unit_vector2(hash2(feature_seed, xi, yi));

                // Vector from the sample to this cell's feature point
                let vx = dx as f32 + 0.5 + ox * self.jitter - fx;
                let vy = dy as f32 + 0.5 + oy * self.jitter - fy;
                let d = saturate(self.distance_function.measure2(vx, vy));

                if d < d0 {
                    d1 = d0;
                    d0 = d;
                    closest = (xi, yi);
                } else if d < d1 {
                    d1 = d;
                }
            }
        }

        Nearest {
            distance: d0,
            distance2: d1,
            cell_value: value_coord2(seed, closest.0, closest.1),
        }
    }

    pub fn nearest3(&self, seed: i32, x: f32, y: f32, z: f32) -> Nearest {
        let xf = x.floor();
        let yf = y.floor();
        let zf = z.floor();
        let cx = xf as i32;
        let cy = yf as i32;
        let cz = zf as i32;
        let fx = x - xf;
        let fy = y - yf;
        let fz = z - zf;
        let feature_seed = seed.wrapping_add(FEATURE_SEED_OFFSET);

        let mut d0 = f32::INFINITY;
        let mut d1 = f32::INFINITY;
        let mut closest = (cx, cy, cz);

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let xi = cx.wrapping_add(dx);
                    let yi = cy.wrapping_add(dy);
                    let zi = cz.wrapping_add(dz);
                    let (ox, oy, oz) = unit_vector3(hash3(feature_seed, xi, yi, zi));

                    let vx = dx as f32 + 0.5 + ox * self.jitter - fx;
                    let vy = dy as f32 + 0.5 + oy * self.jitter - fy;
                    let vz = dz as f32 + 0.5 + oz * self.jitter - fz;
                    let d = saturate(self.distance_function.measure3(vx, vy, vz));

                    if d < d0 {
                        d1 = d0;
                        d0 = d;
                        closest = (xi, yi, zi);
                    } else if d < d1 {
                        d1 = d;
                    }
                }
            }
        }

        Nearest {
            distance: d0,
            distance2: d1,
            cell_value: value_coord3(seed, closest.0, closest.1, closest.2),
        }
    }
}
