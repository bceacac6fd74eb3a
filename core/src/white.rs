use crate::hash::{value_coord2, value_coord3};

// White noise: no lattice and no continuity, the raw float bits are hashed directly
// Any change in the input bit pattern gives an unrelated value in [-1, 1]

// Fold the high half of the bit pattern into the low half so exponent and mantissa both matter
#[inline]
fn fold_bits(v: f32) -> i32 {
    let bits = v.to_bits() as i32;
    bits ^ (bits >> 16)
}

pub fn white2(seed: i32, x: f32, y: f32) -> f32 {
    value_coord2(seed, fold_bits(x), fold_bits(y))
}

pub fn white3(seed: i32, x: f32, y: f32, z: f32) -> f32 {
    value_coord3(seed, fold_bits(x), fold_bits(y), fold_bits(z))
}
