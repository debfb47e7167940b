use crate::{
    any::difficulty::object::IDifficultyObject,
    osu::difficulty::object::OsuDifficultyObject,
    util::difficulty::{bpm_to_milliseconds, milliseconds_to_bpm},
};

/// Tapping difficulty of a single object.
pub struct SpeedEvaluator;

impl SpeedEvaluator {
    /// 1.25 circles distance between centers
    const SINGLE_SPACING_THRESHOLD: f64 = OsuDifficultyObject::NORMALIZED_DIAMETER as f64 * 1.25;
    /// 200 BPM 1/4th
    const MIN_SPEED_BONUS: f64 = 200.0;
    const SPEED_BALANCING_FACTOR: f64 = 40.0;
    const DIST_MULTIPLIER: f64 = 0.8;

    pub fn evaluate_diff_of<'a>(
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
        autopilot: bool,
    ) -> f64 {
        if curr.base.is_spinner() {
            return 0.0;
        }

        let strain_time = Self::capped_strain_time(curr);
        let doubletapness = 1.0 - curr.get_doubletapness(curr.next(0, diff_objects));

        let dist_bonus = if autopilot {
            0.0
        } else {
            let travel_dist = curr
                .previous(0, diff_objects)
                .map_or(0.0, |prev| prev.travel_dist);

            Self::distance_bonus(travel_dist + curr.min_jump_dist)
                * curr.small_circle_bonus.sqrt()
        };

        // * Apply penalty if there's doubletappable doubles
        (1.0 + Self::speed_bonus(strain_time) + dist_bonus) * 1000.0 / strain_time * doubletapness
    }

    /// Delta time capped to the great hit window.
    fn capped_strain_time(curr: &OsuDifficultyObject<'_>) -> f64 {
        let strain_time = curr.adjusted_delta_time;

        // * 0.93 is derived from making sure 260bpm OD8 streams aren't nerfed harshly, whilst 0.92 limits the effect of the cap.
        strain_time / ((strain_time / curr.hit_window_great) / 0.93).clamp(0.92, 1.0)
    }

    /// Additional scaling for streams and bursts above 200 BPM.
    fn speed_bonus(strain_time: f64) -> f64 {
        if milliseconds_to_bpm(strain_time, None) <= Self::MIN_SPEED_BONUS {
            return 0.0;
        }

        let base = (bpm_to_milliseconds(Self::MIN_SPEED_BONUS, None) - strain_time)
            / Self::SPEED_BALANCING_FACTOR;

        0.75 * base * base
    }

    /// Reaches [`Self::DIST_MULTIPLIER`] at the single spacing threshold.
    fn distance_bonus(dist: f64) -> f64 {
        let dist = dist.min(Self::SINGLE_SPACING_THRESHOLD);

        (dist / Self::SINGLE_SPACING_THRESHOLD).powf(3.95) * Self::DIST_MULTIPLIER
    }
}
