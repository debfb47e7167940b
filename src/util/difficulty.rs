pub const fn bpm_to_milliseconds(bpm: f64, delimiter: Option<i32>) -> f64 {
    60_000.0 / i32_unwrap_or(delimiter, 4) as f64 / bpm
}

pub const fn milliseconds_to_bpm(ms: f64, delimiter: Option<i32>) -> f64 {
    60_000.0 / (ms * i32_unwrap_or(delimiter, 4) as f64)
}

// `Option::unwrap_or` is not const
const fn i32_unwrap_or(option: Option<i32>, default: i32) -> i32 {
    match option {
        Some(value) => value,
        None => default,
    }
}

// `f64::exp` is not const
pub fn logistic(x: f64, midpoint_offset: f64, multiplier: f64, max_value: Option<f64>) -> f64 {
    max_value.unwrap_or(1.0) / (1.0 + f64::exp(multiplier * (midpoint_offset - x)))
}

// `f64::exp` is not const
pub fn logistic_exp(exp: f64, max_value: Option<f64>) -> f64 {
    max_value.unwrap_or(1.0) / (1.0 + f64::exp(exp))
}

/// The `p`-norm of `values`.
pub fn norm<const N: usize>(p: f64, values: [f64; N]) -> f64 {
    values
        .into_iter()
        .map(|x| f64::powf(x, p))
        .sum::<f64>()
        .powf(p.recip())
}

/// Cubic Hermite interpolation of `x` between the edges, clamped to `[0, 1]`.
///
/// `start` may exceed `end` to invert the curve.
pub const fn smoothstep(x: f64, start: f64, end: f64) -> f64 {
    let x = reverse_lerp(x, start, end);

    x * x * (3.0 - 2.0 * x)
}

/// Quintic variant of [`smoothstep`] with zero second derivative at the
/// edges.
pub const fn smootherstep(x: f64, start: f64, end: f64) -> f64 {
    let x = reverse_lerp(x, start, end);

    x * x * x * (x * (6.0 * x - 15.0) + 10.0)
}

pub const fn reverse_lerp(x: f64, start: f64, end: f64) -> f64 {
    f64::clamp((x - start) / (end - start), 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn smoothstep_edges() {
        assert!((smoothstep(0.0, 0.0, 1.0) - 0.0).abs() < f64::EPSILON);
        assert!((smoothstep(1.0, 0.0, 1.0) - 1.0).abs() < f64::EPSILON);
        assert!((smoothstep(0.5, 0.0, 1.0) - 0.5).abs() < f64::EPSILON);
        assert!((smootherstep(0.5, 0.0, 1.0) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn inverted_edges() {
        assert!((smoothstep(0.0, 1.0, 0.0) - 1.0).abs() < f64::EPSILON);
        assert!((smootherstep(2.0, 1.0, 0.0) - 0.0).abs() < f64::EPSILON);
        assert!((reverse_lerp(150.0, 300.0, 100.0) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn euclidean_norm() {
        assert!((norm(2.0, [3.0, 4.0]) - 5.0).abs() < 1e-12);
        assert!((norm(1.0, [1.0, 2.0, 3.0]) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn bpm_round_trip() {
        let ms = bpm_to_milliseconds(180.0, None);
        assert!((milliseconds_to_bpm(ms, None) - 180.0).abs() < 1e-9);
        assert!((milliseconds_to_bpm(250.0, Some(2)) - 120.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn shaping_stays_in_unit_range(x in -1e4_f64..1e4, a in -1e3_f64..1e3, d in 1.0_f64..1e3) {
            for value in [
                smoothstep(x, a, a + d),
                smootherstep(x, a, a + d),
                reverse_lerp(x, a, a + d),
                smoothstep(x, a + d, a),
            ] {
                prop_assert!((0.0..=1.0).contains(&value));
            }
        }

        #[test]
        fn logistic_is_bounded(x in -100.0_f64..100.0, max in 0.1_f64..10.0) {
            let value = logistic(x, 0.0, 1.0, Some(max));
            prop_assert!(value >= 0.0);
            prop_assert!(value <= max);
        }
    }
}
