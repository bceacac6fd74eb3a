// Seeded lattice hashing shared by every kernel.
// Pure integer math, no tables to build and nothing allocated per call.

// Large odd primes spread neighbouring lattice coordinates across the whole u32 range
const PRIME_X: u32 = 501_125_321;
const PRIME_Y: u32 = 1_136_930_381;
const PRIME_Z: u32 = 1_720_413_743;
// Golden ratio constant, scrambles the seed before any coordinate is mixed in
const SEED_MIX: u32 = 0x9E37_79B9;

// 1 / 2^31, maps an i32 onto [-1, 1]
const I32_TO_UNIT: f32 = 1.0 / 2_147_483_648.0;

const FRAC_1_SQRT_2: f32 = std::f32::consts::FRAC_1_SQRT_2;

// Unit gradients for 2D kernels: the 4 axes and the 4 diagonals
const GRAD_2D: [(f32, f32); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
];

// Unit gradients for 3D kernels: the 12 cube edge midpoints,
// padded to 16 so a 4-bit mask can index it without a modulo
const GRAD_3D: [(f32, f32, f32); 16] = [
    (FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0),
    (-FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0),
    (FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0),
    (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0),
    (FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
    (-FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
    (FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
    (-FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
    (0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (0.0, -FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (0.0, FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    (0.0, -FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    (FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0),
    (-FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0),
    (0.0, -FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (0.0, -FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
];

// 32-bit avalanche finaliser: every input bit flips roughly half the output bits
#[inline]
fn finalize(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x7FEB_352D);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846C_A68B);
    h ^ (h >> 16)
}

// Hash a 2D lattice point
// Each axis goes through its own finaliser round so no XOR between axes can cancel out
#[inline]
pub fn hash2(seed: i32, x: i32, y: i32) -> u32 {
    let mut h = (seed as u32).wrapping_mul(SEED_MIX);
    h = finalize(h ^ (x as u32).wrapping_mul(PRIME_X));
    finalize(h ^ (y as u32).wrapping_mul(PRIME_Y))
}

// Hash a 3D lattice point
#[inline]
pub fn hash3(seed: i32, x: i32, y: i32, z: i32) -> u32 {
    let mut h = (seed as u32).wrapping_mul(SEED_MIX);
    h = finalize(h ^ (x as u32).wrapping_mul(PRIME_X));
    h = finalize(h ^ (y as u32).wrapping_mul(PRIME_Y));
    finalize(h ^ (z as u32).wrapping_mul(PRIME_Z))
}

// Reinterpret a hash as a scalar in [-1, 1]
#[inline]
pub fn hash_to_unit(hash: u32) -> f32 {
    (hash as i32) as f32 * I32_TO_UNIT
}

#[inline]
pub fn value_coord2(seed: i32, x: i32, y: i32) -> f32 {
    hash_to_unit(hash2(seed, x, y))
}

#[inline]
pub fn value_coord3(seed: i32, x: i32, y: i32, z: i32) -> f32 {
    hash_to_unit(hash3(seed, x, y, z))
}

// Gradient vector chosen by the low bits of the corner hash
#[inline]
pub fn gradient2(hash: u32) -> (f32, f32) {
    GRAD_2D[(hash & 7) as usize]
}

#[inline]
pub fn gradient3(hash: u32) -> (f32, f32, f32) {
    GRAD_3D[(hash & 15) as usize]
}

// Dot product of the corner gradient with the offset (xd, yd) from that corner
#[inline]
pub fn grad_coord2(seed: i32, x: i32, y: i32, xd: f32, yd: f32) -> f32 {
    let (gx, gy) = gradient2(hash2(seed, x, y));
    xd * gx + yd * gy
}

#[inline]
pub fn grad_coord3(seed: i32, x: i32, y: i32, z: i32, xd: f32, yd: f32, zd: f32) -> f32 {
    let (gx, gy, gz) = gradient3(hash3(seed, x, y, z));
    xd * gx + yd * gy + zd * gz
}

// Unit direction in the plane, angle taken from the top 24 bits of the hash
#[inline]
pub fn unit_vector2(hash: u32) -> (f32, f32) {
    let angle = (hash >> 8) as f32 * (std::f32::consts::TAU / 16_777_216.0);
    let (sin, cos) = angle.sin_cos();
    (cos, sin)
}

// Unit direction on the sphere (uniform): z from the low half, azimuth from the high half
#[inline]
pub fn unit_vector3(hash: u32) -> (f32, f32, f32) {
    let z = (hash & 0xFFFF) as f32 * (2.0 / 65_535.0) - 1.0;
    let azimuth = (hash >> 16) as f32 * (std::f32::consts::TAU / 65_536.0);
    let r = (1.0 - z * z).max(0.0).sqrt();
    let (sin, cos) = azimuth.sin_cos();
    (r * cos, r * sin, z)
}
