use crate::hash::{value_coord2, value_coord3};
use crate::interp::cubic_lerp;

// Cubic noise: value noise over a 4-wide lattice neighbourhood, blended with Catmull-Rom curves
// The curves overshoot by up to 1.25x per axis, the bounding factors pull that back inside [-1, 1]
const CUBIC_2D_BOUNDING: f32 = 1.0 / (1.5 * 1.5);
const CUBIC_3D_BOUNDING: f32 = 1.0 / (1.5 * 1.5 * 1.5);

pub fn cubic2(seed: i32, x: f32, y: f32) -> f32 {
    let xf = x.floor();
    let yf = y.floor();
    // Lattice columns/rows -1, 0, +1, +2 around the containing cell
    let x1 = xf as i32;
    let y1 = yf as i32;
    let xs = [
        x1.wrapping_sub(1),
        x1,
        x1.wrapping_add(1),
        x1.wrapping_add(2),
    ];
    let ys = [
        y1.wrapping_sub(1),
        y1,
        y1.wrapping_add(1),
        y1.wrapping_add(2),
    ];
    let tx = x - xf;
    let ty = y - yf;

    let row = |yi: i32| {
        cubic_lerp(
            value_coord2(seed, xs[0], yi),
            value_coord2(seed, xs[1], yi),
            value_coord2(seed, xs[2], yi),
            value_coord2(seed, xs[3], yi),
            tx,
        )
    };

    cubic_lerp(row(ys[0]), row(ys[1]), row(ys[2]), row(ys[3]), ty) * CUBIC_2D_BOUNDING
}

pub fn cubic3(seed: i32, x: f32, y: f32, z: f32) -> f32 {
    let xf = x.floor();
    let yf = y.floor();
    let zf = z.floor();
    let around = |c: i32| [c.wrapping_sub(1), c, c.wrapping_add(1), c.wrapping_add(2)];
    let xs = around(xf as i32);
    let ys = around(yf as i32);
    let zs = around(zf as i32);
    let tx = x - xf;
    let ty = y - yf;
    let tz = z - zf;

    // Collapse x for each (y, z), then y for each z, then z
    let mut planes = [0.0f32; 4];
    for (plane, &zi) in planes.iter_mut().zip(zs.iter()) {
        let mut rows = [0.0f32; 4];
        for (row, &yi) in rows.iter_mut().zip(ys.iter()) {
            *row = cubic_lerp(
                value_coord3(seed, xs[0], yi, zi),
                value_coord3(seed, xs[1], yi, zi),
                value_coord3(seed, xs[2], yi, zi),
                value_coord3(seed, xs[3], yi, zi),
                tx,
            );
        }
        *plane = cubic_lerp(rows[0], rows[1], rows[2], rows[3], ty);
    }

    cubic_lerp(planes[0], planes[1], planes[2], planes[3], tz) * CUBIC_3D_BOUNDING
}
