use crate::config::Interpolation;

// Smoothing curves applied to the fractional lattice position t in [0, 1]
// All of them map 0 -> 0 and 1 -> 1

#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

// Smoothstep: 3t^2 - 2t^3, zero slope at both ends
#[inline]
pub fn hermite(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

// Ken Perlin's fade: 6t^5 − 15t^4 + 10t^3
// First and second derivatives are zero at t=0 and t=1
#[inline]
pub fn quintic(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

// Catmull-Rom style cubic through b (t=0) and c (t=1), with a and d as outer neighbours
#[inline]
pub fn cubic_lerp(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let p = (d - c) - (a - b);
    t * t * t * p + t * t * ((a - b) - p) + t * (c - a) + b
}

impl Interpolation {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Interpolation::Linear => linear(t),
            Interpolation::Hermite => hermite(t),
            Interpolation::Quintic => quintic(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derivative(f: fn(f32) -> f32, t: f32) -> f32 {
        let h = 1e-3;
        (f(t + h) - f(t - h)) / (2.0 * h)
    }

    #[test]
    fn endpoints_are_fixed() {
        for interp in Interpolation::ALL {
            assert_eq!(interp.apply(0.0), 0.0);
            assert_eq!(interp.apply(1.0), 1.0);
        }
    }

    #[test]
    fn midpoint_is_symmetric() {
        for interp in Interpolation::ALL {
            assert!((interp.apply(0.5) - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn smooth_curves_are_flat_at_the_ends() {
        for f in [hermite as fn(f32) -> f32, quintic] {
            assert!(derivative(f, 0.0).abs() < 1e-2);
            assert!(derivative(f, 1.0).abs() < 1e-2);
        }
        // Linear keeps its slope everywhere
        assert!((derivative(linear, 0.0) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn quintic_has_no_curvature_at_the_ends() {
        let h = 1e-2;
        let second = |t: f32| (quintic(t + h) - 2.0 * quintic(t) + quintic(t - h)) / (h * h);
        assert!(second(0.0).abs() < 0.1);
        assert!(second(1.0).abs() < 0.1);
        // Hermite does not share that property
        let second_h = |t: f32| (hermite(t + h) - 2.0 * hermite(t) + hermite(t - h)) / (h * h);
        assert!(second_h(0.0 + h).abs() > 1.0);
    }

    #[test]
    fn curves_are_monotonic() {
        for interp in Interpolation::ALL {
            let mut prev = interp.apply(0.0);
            for i in 1..=100 {
                let v = interp.apply(i as f32 / 100.0);
                assert!(v >= prev);
                prev = v;
            }
        }
    }

    #[test]
    fn cubic_lerp_passes_through_inner_points() {
        assert!((cubic_lerp(-1.0, 0.25, 0.75, 2.0, 0.0) - 0.25).abs() < 1e-6);
        assert!((cubic_lerp(-1.0, 0.25, 0.75, 2.0, 1.0) - 0.75).abs() < 1e-6);
        // Collinear samples reproduce the line
        assert!((cubic_lerp(0.0, 1.0, 2.0, 3.0, 0.5) - 1.5).abs() < 1e-6);
    }
}
