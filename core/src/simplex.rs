use crate::hash::{grad_coord2, grad_coord3};

// Simplex noise
// Simplex divides space into triangles (2D) or tetrahedra (3D) rather than squares/cubes,
// so each sample only visits N+1 corners and the field is more isotropic than Perlin

// Skewing/Unskewing factors for 2D: (sqrt(3) - 1) / 2 and (3 - sqrt(3)) / 6
const F2: f32 = 0.366_025_4;
const G2: f32 = 0.211_324_87;
// Same for 3D: 1/3 and 1/6
const F3: f32 = 1.0 / 3.0;
const G3: f32 = 1.0 / 6.0;

// Largest possible unscaled sum is ~1/99.204 (2D) and ~1/39.88 (3D) with unit gradients
const SCALE_2D: f32 = 99.2;
const SCALE_3D: f32 = 39.8;

// Radial falloff (r^2 limit - |d|^2)^4 times the gradient dot product
#[inline]
fn corner2(seed: i32, i: i32, j: i32, x: f32, y: f32) -> f32 {
    let t = 0.5 - x * x - y * y;
    if t <= 0.0 {
        return 0.0;
    }
    let t2 = t * t;
    t2 * t2 * grad_coord2(seed, i, j, x, y)
}

#[inline]
fn corner3(seed: i32, i: i32, j: i32, k: i32, x: f32, y: f32, z: f32) -> f32 {
    let t = 0.6 - x * x - y * y - z * z;
    if t <= 0.0 {
        return 0.0;
    }
    let t2 = t * t;
    t2 * t2 * grad_coord3(seed, i, j, k, x, y, z)
}

pub fn simplex2(seed: i32, x: f32, y: f32) -> f32 {
    // Skew input space to find the containing simplex cell
    let s = (x + y) * F2;
    let i = (x + s).floor();
    let j = (y + s).floor();

    // Unskew the cell origin back to find the offset of the point from it
    let t = (i + j) * G2;
    let x0 = x - (i - t);
    let y0 = y - (j - t);

    // Lower or upper triangle of the skewed cell
    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    // Offsets from the middle and far corners
    let x1 = x0 - i1 as f32 + G2;
    let y1 = y0 - j1 as f32 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let i = i as i32;
    let j = j as i32;
    let n0 = corner2(seed, i, j, x0, y0);
    let n1 = corner2(seed, i.wrapping_add(i1), j.wrapping_add(j1), x1, y1);
    let n2 = corner2(seed, i.wrapping_add(1), j.wrapping_add(1), x2, y2);

    SCALE_2D * (n0 + n1 + n2)
}

pub fn simplex3(seed: i32, x: f32, y: f32, z: f32) -> f32 {
    let s = (x + y + z) * F3;
    let i = (x + s).floor();
    let j = (y + s).floor();
    let k = (z + s).floor();

    let t = (i + j + k) * G3;
    let x0 = x - (i - t);
    let y0 = y - (j - t);
    let z0 = z - (k - t);

    // Pick the tetrahedron by ranking the offsets, largest axis is stepped first
    let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
        if y0 >= z0 {
            (1, 0, 0, 1, 1, 0)
        } else if x0 >= z0 {
            (1, 0, 0, 1, 0, 1)
        } else {
            (0, 0, 1, 1, 0, 1)
        }
    } else if y0 < z0 {
        (0, 0, 1, 0, 1, 1)
    } else if x0 < z0 {
        (0, 1, 0, 0, 1, 1)
    } else {
        (0, 1, 0, 1, 1, 0)
    };

    let x1 = x0 - i1 as f32 + G3;
    let y1 = y0 - j1 as f32 + G3;
    let z1 = z0 - k1 as f32 + G3;
    let x2 = x0 - i2 as f32 + 2.0 * G3;
    let y2 = y0 - j2 as f32 + 2.0 * G3;
    let z2 = z0 - k2 as f32 + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;
    let y3 = y0 - 1.0 + 3.0 * G3;
    let z3 = z0 - 1.0 + 3.0 * G3;

    let i = i as i32;
    let j = j as i32;
    let k = k as i32;
    let n0 = corner3(seed, i, j, k, x0, y0, z0);
    let n1 = corner3(
        seed,
        i.wrapping_add(i1),
        j.wrapping_add(j1),
        k.wrapping_add(k1),
        x1,
        y1,
        z1,
    );
    let n2 = corner3(
        seed,
        i.wrapping_add(i2),
        j.wrapping_add(j2),
        k.wrapping_add(k2),
        x2,
        y2,
        z2,
    );
    let n3 = corner3(
        seed,
        i.wrapping_add(1),
        j.wrapping_add(1),
        k.wrapping_add(1),
        x3,
        y3,
        z3,
    );

    SCALE_3D * (n0 + n1 + n2 + n3)
}
