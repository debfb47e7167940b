use rosu_map::util::Pos;

use super::object::OsuDifficultyObject;

/// How the distance of a [`Movement`] between two objects of differing radius
/// is normalized.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DistanceScaling {
    /// Both endpoints are scaled by the larger of the two radii.
    #[default]
    LargestRadius,
    /// Each endpoint is scaled by its own radius.
    PerEndpoint,
}

/// A single cursor movement, either between two objects or along a slider.
///
/// Times are already adjusted by the clock rate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Movement {
    pub start: Pos,
    pub start_time: f64,
    pub start_radius: f64,
    pub end: Pos,
    pub end_time: f64,
    pub end_radius: f64,
    /// Whether the movement follows a slider's path rather than leading to
    /// an object's head.
    pub is_nested: bool,
    pub scaling: DistanceScaling,
}

impl Movement {
    /// Duration of the movement, floored at
    /// [`OsuDifficultyObject::MIN_DELTA_TIME`].
    pub fn time(&self) -> f64 {
        f64::max(
            self.end_time - self.start_time,
            OsuDifficultyObject::MIN_DELTA_TIME,
        )
    }

    /// Length of the movement after normalizing the radius to
    /// [`OsuDifficultyObject::NORMALIZED_RADIUS`].
    pub fn distance(&self) -> f64 {
        let normalized = OsuDifficultyObject::NORMALIZED_RADIUS as f32;

        let (start_scale, end_scale) = match self.scaling {
            DistanceScaling::LargestRadius => {
                let scale = normalized / f64::max(self.start_radius, self.end_radius) as f32;

                (scale, scale)
            }
            DistanceScaling::PerEndpoint => (
                normalized / self.start_radius as f32,
                normalized / self.end_radius as f32,
            ),
        };

        f64::from((self.end * end_scale - self.start * start_scale).length())
    }

    /// Raw vector from start to end.
    pub fn vector(&self) -> Pos {
        self.end - self.start
    }

    /// Whether the shorter of both movements stays within `radius` of the
    /// longer one's segment at both of its endpoints.
    pub fn stays_within_radius(&self, other: &Self, radius: f64) -> bool {
        let (self_dist, other_dist) = (self.distance(), other.distance());

        let smallest = if self_dist < other_dist { self } else { other };
        let biggest = if self_dist > other_dist { self } else { other };

        let d_start = distance_to_segment(smallest.start, biggest);
        let d_end = distance_to_segment(smallest.end, biggest);

        // NaN for a zero-length segment so the check fails
        d_start <= radius && d_end <= radius
    }
}

fn distance_to_segment(point: Pos, movement: &Movement) -> f64 {
    let ab = movement.vector();
    let t = (point - movement.start).dot(ab) / ab.dot(ab);
    let t = if t.is_nan() { t } else { t.clamp(0.0, 1.0) };
    let closest = movement.start + ab * t;

    f64::from((point - closest).length())
}

/// Angle between the reversed `prev` movement and `curr`, within `(-π, π]`.
pub fn signed_angle(curr: &Movement, prev: &Movement) -> f64 {
    let v1 = prev.start - prev.end;
    let v2 = curr.end - curr.start;

    let dot = v1.dot(v2);
    let det = v1.x * v2.y - v1.y * v2.x;

    f64::from(det).atan2(f64::from(dot))
}

/// Unsigned variant of [`signed_angle`] within `[0, π]`.
pub fn angle(curr: &Movement, prev: &Movement) -> f64 {
    signed_angle(curr, prev).abs()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn movement(start: (f32, f32), end: (f32, f32), radii: (f64, f64)) -> Movement {
        Movement {
            start: Pos::new(start.0, start.1),
            start_time: 0.0,
            start_radius: radii.0,
            end: Pos::new(end.0, end.1),
            end_time: 100.0,
            end_radius: radii.1,
            is_nested: false,
            scaling: DistanceScaling::LargestRadius,
        }
    }

    #[test]
    fn time_is_floored() {
        let mut m = movement((0.0, 0.0), (10.0, 0.0), (50.0, 50.0));
        m.end_time = 10.0;

        assert!((m.time() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scaling_versions() {
        let mut m = movement((0.0, 0.0), (100.0, 0.0), (25.0, 50.0));

        assert!((m.distance() - 100.0).abs() < 1e-4);

        m.scaling = DistanceScaling::PerEndpoint;

        assert!((m.distance() - 100.0).abs() < 1e-4);

        m.start = Pos::new(10.0, 0.0);

        // 100 * 1 - 10 * 2
        assert!((m.distance() - 80.0).abs() < 1e-4);
    }

    #[test]
    fn collinear_stays_within_radius() {
        let head_to_head = movement((0.0, 0.0), (300.0, 0.0), (30.0, 30.0));
        let nested = movement((100.0, 10.0), (200.0, -10.0), (30.0, 30.0));
        let off_track = movement((100.0, 10.0), (200.0, 80.0), (30.0, 30.0));

        assert!(head_to_head.stays_within_radius(&nested, 30.0));
        assert!(nested.stays_within_radius(&head_to_head, 30.0));
        assert!(!head_to_head.stays_within_radius(&off_track, 30.0));
    }

    #[test]
    fn degenerate_segment_fails() {
        let a = movement((5.0, 5.0), (5.0, 5.0), (30.0, 30.0));
        let b = movement((5.0, 5.0), (5.0, 5.0), (30.0, 30.0));

        assert!(!a.stays_within_radius(&b, 30.0));
    }

    #[test]
    fn right_angle() {
        let prev = movement((0.0, 0.0), (100.0, 0.0), (50.0, 50.0));
        let curr = movement((100.0, 0.0), (100.0, 100.0), (50.0, 50.0));

        assert!((angle(&curr, &prev) - std::f64::consts::FRAC_PI_2).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(
            x in -512.0_f32..512.0,
            y in -384.0_f32..384.0,
            r in 1.0_f64..100.0,
            k in 0.25_f32..4.0,
        ) {
            for scaling in [DistanceScaling::LargestRadius, DistanceScaling::PerEndpoint] {
                let mut original = movement((0.0, 0.0), (x, y), (r, r));
                original.scaling = scaling;

                // Scaling positions and radii alike leaves the normalized distance unchanged
                let mut scaled = original;
                scaled.end = original.end * k;
                scaled.start_radius = r * f64::from(k);
                scaled.end_radius = r * f64::from(k);

                let (a, b) = (original.distance(), scaled.distance());

                prop_assert!((a - b).abs() <= 1e-3 * a.max(1.0));
            }
        }

        #[test]
        fn mirrored_angle_flips_sign(
            ax in -200.0_f32..200.0, ay in -200.0_f32..200.0,
            bx in -200.0_f32..200.0, by in 1.0_f32..200.0,
        ) {
            let prev = movement((ax, ay), (0.0, 0.0), (50.0, 50.0));
            let curr = movement((0.0, 0.0), (bx, by), (50.0, 50.0));

            let mirror = |m: Movement| Movement {
                start: Pos::new(m.start.x, -m.start.y),
                end: Pos::new(m.end.x, -m.end.y),
                ..m
            };

            let signed = signed_angle(&curr, &prev);
            let mirrored = signed_angle(&mirror(curr), &mirror(prev));

            prop_assert!((angle(&curr, &prev) - angle(&mirror(curr), &mirror(prev))).abs() < 1e-5);

            if signed.abs() > 1e-4 && signed.abs() < std::f64::consts::PI - 1e-4 {
                prop_assert!((signed + mirrored).abs() < 1e-5);
            }
        }
    }
}
