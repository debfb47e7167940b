use crate::{
    any::difficulty::object::IDifficultyObject,
    osu::difficulty::object::OsuDifficultyObject,
    util::difficulty::smootherstep,
};

pub struct FlowAimEvaluator;

impl FlowAimEvaluator {
    /// Difference in adjusted delta time beyond which two objects no longer
    /// share a rhythm.
    const RHYTHM_CHANGE_THRESHOLD: f64 = 25.0;

    const MULTIPLIER: f64 = 0.02;

    /// Evaluates the difficulty of following a continuous cursor flow onto
    /// the current object, based on the change in jump distance and the
    /// change in movement direction.
    pub fn evaluate_diff_of<'a>(
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
    ) -> f64 {
        if curr.base.is_spinner() || curr.idx <= 1 {
            return 0.0;
        }

        let Some((osu_prev_obj, osu_prev2_obj)) = curr
            .previous(0, diff_objects)
            .zip(curr.previous(1, diff_objects))
        else {
            return 0.0;
        };

        if osu_prev_obj.base.is_spinner() {
            return 0.0;
        }

        let curr_dist_diff = (curr.min_jump_dist - osu_prev_obj.min_jump_dist).abs();
        let prev_dist_diff = (osu_prev_obj.min_jump_dist - osu_prev2_obj.min_jump_dist).abs();

        let mut jerk = (curr_dist_diff - prev_dist_diff).abs();

        let mut angle_diff_adjusted = (Self::direction_change(curr, osu_prev_obj) / 2.0).sin() * 180.0;

        let osu_next_obj = curr.next(0, diff_objects);
        let osu_prev3_obj = curr.previous(2, diff_objects);

        // * Nerf the last note of spaced triples as its angle is not representative of its flow difficulty
        if let (Some(prev3), Some(next), Some(angle)) = (osu_prev3_obj, osu_next_obj, curr.angle) {
            let spaced_before = (osu_prev2_obj.adjusted_delta_time - prev3.adjusted_delta_time).abs()
                > Self::RHYTHM_CHANGE_THRESHOLD;
            let spaced_after = (curr.adjusted_delta_time - next.adjusted_delta_time).abs()
                > Self::RHYTHM_CHANGE_THRESHOLD;

            if spaced_before && spaced_after {
                let straightness =
                    smootherstep(angle, f64::to_radians(180.0), f64::to_radians(90.0));

                angle_diff_adjusted *= straightness;
                jerk *= straightness;
            }
        }

        let angular_change_bonus = f64::max(0.0, 0.6 * angle_diff_adjusted.log10());

        let jerk_factor = (jerk / 15.0).min(1.0);
        let adjusted_dist_scale = 0.85 + jerk_factor + angular_change_bonus * jerk_factor;

        let dist_factor = curr.lazy_jump_dist.powf(2.0) * adjusted_dist_scale;

        let difficulty = dist_factor / curr.adjusted_delta_time * curr.small_circle_bonus;

        difficulty * Self::MULTIPLIER
    }

    fn direction_change(curr: &OsuDifficultyObject<'_>, prev: &OsuDifficultyObject<'_>) -> f64 {
        let (
            Some(curr_angle_signed),
            Some(prev_angle_signed),
            Some(curr_angle),
            Some(prev_angle),
        ) = (curr.angle_signed, prev.angle_signed, curr.angle, prev.angle)
        else {
            return 0.0;
        };

        // * Account for the fact that you can aim patterns in a straight line
        let signed_angle_diff = (curr_angle_signed - prev_angle_signed).abs()
            * smootherstep(curr_angle, f64::to_radians(180.0), f64::to_radians(90.0));

        let angle_diff = (curr_angle - prev_angle).abs();

        signed_angle_diff.max(angle_diff)
    }
}
