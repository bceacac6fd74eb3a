use image::{GrayImage, Luma, Rgb, RgbImage};
use palette::{Gradient, LinSrgb};

use crate::NoiseGenerator;

// 2D height map: row‐major Vec<Vec<f32>> of size height×width
// access as `map[y][x]`.
pub type HeightMap2D = Vec<Vec<f32>>;

// Sample a generator on the integer grid [0, width) × [0, height)
// The generator's own frequency decides how many lattice cells the grid spans
pub fn sample_grid2<N: NoiseGenerator + ?Sized>(
    generator: &N,
    width: usize,
    height: usize,
) -> HeightMap2D {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| generator.get2(x as f32, y as f32))
                .collect()
        })
        .collect()
}

// Same as `sample_grid2`, but a horizontal slice of a 3D field at depth `z`
pub fn sample_slice3<N: NoiseGenerator + ?Sized>(
    generator: &N,
    width: usize,
    height: usize,
    z: f32,
) -> HeightMap2D {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| generator.get3(x as f32, y as f32, z))
                .collect()
        })
        .collect()
}

// flatten a 2D height map (row‐major) into a single Vec<f32>
// For converting to an image buffer or handing to a GPU upload
pub fn flatten2(map: &HeightMap2D) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Smallest and largest value in the map, (INFINITY, NEG_INFINITY) when empty
pub fn min_max2(map: &HeightMap2D) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &val in map.iter().flatten() {
        min = min.min(val);
        max = max.max(val);
    }
    (min, max)
}

// Stretch the map onto [0, 1]
// A flat map becomes 0.5 everywhere
pub fn normalize2(map: &mut HeightMap2D) {
    let (min, max) = min_max2(map);
    let range = max - min;

    for val in map.iter_mut().flatten() {
        *val = if range > f32::EPSILON {
            (*val - min) / range
        } else {
            0.5
        };
    }
}

// Grayscale preview, black at the map minimum and white at its maximum
pub fn to_gray_image(map: &HeightMap2D) -> GrayImage {
    let mut normalized = map.clone();
    normalize2(&mut normalized);

    let height = normalized.len();
    let width = normalized.first().map_or(0, |row| row.len());
    let mut img = GrayImage::new(width as u32, height as u32);
    for (y, row) in normalized.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let gray = (v * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img
}

// Colour a height map as terrain: deep water to beach to grass to rock to snow
pub fn to_terrain_image(map: &HeightMap2D) -> RgbImage {
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)), // deep blue
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)), // sand
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)), // green
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)), // rock
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)), // snow
    ]);

    let mut normalized = map.clone();
    normalize2(&mut normalized);

    let height = normalized.len();
    let width = normalized.first().map_or(0, |row| row.len());
    let mut img = RgbImage::new(width as u32, height as u32);
    for (y, row) in normalized.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let col: LinSrgb = gradient.get(v);
            let rgb = col.into_format::<u8>();
            img.put_pixel(x as u32, y as u32, Rgb([rgb.red, rgb.green, rgb.blue]));
        }
    }
    img
}
