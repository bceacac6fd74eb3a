use crate::config::Interpolation;
use crate::hash::{value_coord2, value_coord3};
use crate::interp::lerp;

// Value noise: a random scalar per lattice corner, blended with the chosen curve
// Output stays inside [-1, 1] since every blend is a convex combination

pub fn value2(seed: i32, interp: Interpolation, x: f32, y: f32) -> f32 {
    // Lattice cell containing the point
    let xf = x.floor();
    let yf = y.floor();
    let x0 = xf as i32;
    let y0 = yf as i32;
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);

    // Smoothed position inside the cell
    let xs = interp.apply(x - xf);
    let ys = interp.apply(y - yf);

    let xf0 = lerp(value_coord2(seed, x0, y0), value_coord2(seed, x1, y0), xs);
    let xf1 = lerp(value_coord2(seed, x0, y1), value_coord2(seed, x1, y1), xs);
    lerp(xf0, xf1, ys)
}

pub fn value3(seed: i32, interp: Interpolation, x: f32, y: f32, z: f32) -> f32 {
    let xf = x.floor();
    let yf = y.floor();
    let zf = z.floor();
    let x0 = xf as i32;
    let y0 = yf as i32;
    let z0 = zf as i32;
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let xs = interp.apply(x - xf);
    let ys = interp.apply(y - yf);
    let zs = interp.apply(z - zf);

    // Near face (z0), then far face (z1), then blend along z
    let xf00 = lerp(value_coord3(seed, x0, y0, z0), value_coord3(seed, x1, y0, z0), xs);
    let xf10 = lerp(value_coord3(seed, x0, y1, z0), value_coord3(seed, x1, y1, z0), xs);
    let xf01 = lerp(value_coord3(seed, x0, y0, z1), value_coord3(seed, x1, y0, z1), xs);
    let xf11 = lerp(value_coord3(seed, x0, y1, z1), value_coord3(seed, x1, y1, z1), xs);

    let yf0 = lerp(xf00, xf10, ys);
    let yf1 = lerp(xf01, xf11, ys);
    lerp(yf0, yf1, zs)
}
