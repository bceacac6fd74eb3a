use crate::config::Interpolation;
use crate::hash::{grad_coord2, grad_coord3};
use crate::interp::lerp;

// Gradient (Perlin) noise
// Each corner contributes dot(gradient, offset from corner), so the field is zero on the lattice
// With unit gradients the output magnitude stays below sqrt(N)/2

pub fn perlin2(seed: i32, interp: Interpolation, x: f32, y: f32) -> f32 {
    let xf = x.floor();
    let yf = y.floor();
    let x0 = xf as i32;
    let y0 = yf as i32;
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);

    // Offsets from the near (d0) and far (d1) corners
    let xd0 = x - xf;
    let yd0 = y - yf;
    let xd1 = xd0 - 1.0;
    let yd1 = yd0 - 1.0;

    let xs = interp.apply(xd0);
    let ys = interp.apply(yd0);

    let xf0 = lerp(
        grad_coord2(seed, x0, y0, xd0, yd0),
        grad_coord2(seed, x1, y0, xd1, yd0),
        xs,
    );
    let xf1 = lerp(
        grad_coord2(seed, x0, y1, xd0, yd1),
        grad_coord2(seed, x1, y1, xd1, yd1),
        xs,
    );
    lerp(xf0, xf1, ys)
}

pub fn perlin3(seed: i32, interp: Interpolation, x: f32, y: f32, z: f32) -> f32 {
    let xf = x.floor();
    let yf = y.floor();
    let zf = z.floor();
    let x0 = xf as i32;
    let y0 = yf as i32;
    let z0 = zf as i32;
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let xd0 = x - xf;
    let yd0 = y - yf;
    let zd0 = z - zf;
    let xd1 = xd0 - 1.0;
    let yd1 = yd0 - 1.0;
    let zd1 = zd0 - 1.0;

    let xs = interp.apply(xd0);
    let ys = interp.apply(yd0);
    let zs = interp.apply(zd0);

    let xf00 = lerp(
        grad_coord3(seed, x0, y0, z0, xd0, yd0, zd0),
        grad_coord3(seed, x1, y0, z0, xd1, yd0, zd0),
        xs,
    );
    let xf10 = lerp(
        grad_coord3(seed, x0, y1, z0, xd0, yd1, zd0),
        grad_coord3(seed, x1, y1, z0, xd1, yd1, zd0),
        xs,
    );
    let xf01 = lerp(
        grad_coord3(seed, x0, y0, z1, xd0, yd0, zd1),
        grad_coord3(seed, x1, y0, z1, xd1, yd0, zd1),
        xs,
    );
    let xf11 = lerp(
        grad_coord3(seed, x0, y1, z1, xd0, yd1, zd1),
        grad_coord3(seed, x1, y1, z1, xd1, yd1, zd1),
        xs,
    );

    let yf0 = lerp(xf00, xf10, ys);
    let yf1 = lerp(xf01, xf11, ys);
    lerp(yf0, yf1, zs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perlin_determinism() {
        let a = perlin2(1234, Interpolation::Quintic, 10.5, -3.7);
        let b = perlin2(1234, Interpolation::Quintic, 10.5, -3.7);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn perlin_vanishes_on_the_lattice() {
        for interp in Interpolation::ALL {
            assert_eq!(perlin2(7, *interp, 3.0, -8.0), 0.0);
            assert_eq!(perlin3(7, *interp, 3.0, -8.0, 12.0), 0.0);
        }
    }

    #[test]
    fn perlin_range() {
        for i in 0..3000 {
            let x = i as f32 * 0.0731 - 60.0;
            let y = i as f32 * 0.1913 + 5.0;
            let z = i as f32 * -0.057;
            assert!(perlin2(0, Interpolation::Linear, x, y).abs() <= 1.0);
            assert!(perlin3(0, Interpolation::Quintic, x, y, z).abs() <= 1.0);
        }
    }

    #[test]
    fn perlin_is_not_flat() {
        // Away from the lattice some samples must be clearly non-zero
        let strong = (0..200)
            .map(|i| perlin2(42, Interpolation::Quintic, i as f32 * 0.37 + 0.5, 0.5))
            .filter(|v| v.abs() > 0.1)
            .count();
        assert!(strong > 20);
    }
}
