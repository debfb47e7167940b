use std::cmp;

use crate::{
    any::difficulty::object::IDifficultyObject,
    model::hit_object::{HitObjectKind, Slider},
    osu::difficulty::object::OsuDifficultyObject,
};

/// Memory difficulty of a single object while only a small area around the
/// cursor is visible.
#[derive(Copy, Clone, Debug)]
pub struct FlashlightEvaluator {
    time_preempt: f64,
    time_fade_in: f64,
}

impl FlashlightEvaluator {
    const MAX_OPACITY_BONUS: f64 = 0.4;
    const HIDDEN_BONUS: f64 = 0.2;

    const MIN_VELOCITY: f64 = 0.5;
    const SLIDER_MULTIPLIER: f64 = 1.3;

    const MIN_ANGLE_MULTIPLIER: f64 = 0.2;

    /// Amount of previous objects that are still considered.
    const LOOKBACK: usize = 10;

    pub const fn new(time_preempt: f64, time_fade_in: f64) -> Self {
        Self {
            time_preempt,
            time_fade_in,
        }
    }

    pub fn evaluate_diff_of<'a>(
        &self,
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
        hidden: bool,
    ) -> f64 {
        if curr.base.is_spinner() {
            return 0.0;
        }

        let Lookback {
            sum,
            small_dist_nerf,
            angle_repeat_count,
        } = self.look_back(curr, diff_objects, hidden);

        let mut result = (small_dist_nerf * sum).powf(2.0);

        // * Additional bonus for Hidden due to there being no approach circles.
        if hidden {
            result *= 1.0 + Self::HIDDEN_BONUS;
        }

        // * Nerf patterns with repeated angles.
        result *= Self::MIN_ANGLE_MULTIPLIER
            + (1.0 - Self::MIN_ANGLE_MULTIPLIER) / (angle_repeat_count + 1.0);

        if let HitObjectKind::Slider(ref slider) = curr.base.kind {
            result += Self::slider_bonus(curr, slider) * Self::SLIDER_MULTIPLIER;
        }

        result
    }

    /// Iterates backwards in time from `curr` and sums up how hard the
    /// previous objects are to remember.
    fn look_back<'a>(
        &self,
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
        hidden: bool,
    ) -> Lookback {
        let mut lookback = Lookback {
            sum: 0.0,
            small_dist_nerf: 1.0,
            angle_repeat_count: 0.0,
        };

        let mut cumulative_strain_time = 0.0;
        let mut last_obj = curr;

        for i in 0..cmp::min(curr.idx, Self::LOOKBACK) {
            let Some(prev) = curr.previous(i, diff_objects) else {
                break;
            };

            cumulative_strain_time += last_obj.adjusted_delta_time;
            last_obj = prev;

            if prev.base.is_spinner() {
                continue;
            }

            let jump_dist = f64::from((curr.base.pos - prev.base.end_pos()).length());
            let scaling_factor = Self::scaling_factor(prev.base.radius);

            // * We want to nerf objects that can be easily seen within the Flashlight circle radius.
            if i == 0 {
                lookback.small_dist_nerf = (jump_dist / 75.0).min(1.0);
            }

            // * We also want to nerf stacks so that only the first object of the stack is accounted for.
            let stack_nerf = ((prev.lazy_jump_dist / scaling_factor) / 25.0).min(1.0);

            let opacity = curr.opacity_at(
                prev.base.start_time,
                hidden,
                self.time_preempt,
                self.time_fade_in,
            );

            // * Bonus based on how visible the object is.
            let opacity_bonus = 1.0 + Self::MAX_OPACITY_BONUS * (1.0 - opacity);

            lookback.sum +=
                stack_nerf * opacity_bonus * scaling_factor * jump_dist / cumulative_strain_time;

            if let Some((prev_angle, curr_angle)) = prev.angle.zip(curr.angle) {
                // * Objects further back in time should count less for the nerf.
                if (prev_angle - curr_angle).abs() < 0.02 {
                    lookback.angle_repeat_count += (1.0 - 0.1 * i as f64).max(0.0);
                }
            }
        }

        lookback
    }

    fn slider_bonus(curr: &OsuDifficultyObject<'_>, slider: &Slider) -> f64 {
        // * Invert the scaling factor to determine the true travel distance independent of circle size.
        let pixel_travel_dist = curr.lazy_travel_dist / Self::scaling_factor(curr.base.radius);

        // * Reward sliders based on velocity.
        let velocity_bonus = (pixel_travel_dist / curr.travel_time - Self::MIN_VELOCITY)
            .max(0.0)
            .sqrt();

        // * Longer sliders require more memorisation.
        // * Nerf sliders with repeats, as less memorisation is required.
        velocity_bonus * pixel_travel_dist / (slider.repeats + 1) as f64
    }

    fn scaling_factor(radius: f64) -> f64 {
        f64::from(OsuDifficultyObject::NORMALIZED_RADIUS) / radius
    }
}

struct Lookback {
    sum: f64,
    small_dist_nerf: f64,
    angle_repeat_count: f64,
}
