use std::f64::consts::PI;

use crate::{
    any::difficulty::object::IDifficultyObject,
    osu::difficulty::object::OsuDifficultyObject,
    util::difficulty::{milliseconds_to_bpm, smoothstep, smootherstep},
};

pub struct AgilityEvaluator;

impl AgilityEvaluator {
    /// Objects that are looked back on to detect repeated jump directions.
    const NOTE_LIMIT: usize = 6;

    /// BPM at 1/2 at which the agility bonus starts.
    const BASE_BPM: f64 = 270.0;

    /// Evaluates the difficulty of quickly changing the cursor direction at
    /// high BPM.
    ///
    /// With `cheesability`, each object's strain time is extended by the time
    /// a player can win by hitting late.
    pub fn evaluate_diff_of<'a>(
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
        cheesability: bool,
    ) -> f64 {
        const RADIUS: f64 = OsuDifficultyObject::NORMALIZED_RADIUS as f64;

        if curr.base.is_spinner() || curr.idx <= 1 {
            return 0.0;
        }

        let Some(osu_prev_obj) = curr.previous(0, diff_objects) else {
            return 0.0;
        };

        if osu_prev_obj.base.is_spinner() {
            return 0.0;
        }

        let mut curr_strain_time = curr.adjusted_delta_time;
        let mut last_strain_time = osu_prev_obj.adjusted_delta_time;

        if cheesability {
            curr_strain_time += curr.extra_delta_time;
            last_strain_time += osu_prev_obj.extra_delta_time;
        }

        let prev_dist_multiplier = smootherstep(osu_prev_obj.lazy_jump_dist / RADIUS, 0.5, 1.0);

        // * If the previous notes are stacked, we add the previous note's strainTime since there was no movement since at least 2 notes earlier.
        let curr_time = curr_strain_time + last_strain_time * (1.0 - prev_dist_multiplier);
        let prev_time = last_strain_time;

        let base_factor = match (curr.angle, osu_prev_obj.angle) {
            (Some(curr_angle), Some(last_angle)) => {
                1.0 - 0.4
                    * smoothstep(last_angle, f64::to_radians(90.0), f64::to_radians(40.0))
                    * Self::angle_diff(curr_angle, last_angle)
            }
            _ => 1.0,
        };

        // * Penalize angle repetition.
        let angle_repetition_nerf = (base_factor
            + (1.0 - base_factor) * Self::angle_vector_repetition(curr, diff_objects))
        .powf(2.0);

        // * Agility bonus of 1 at base BPM.
        let agility_bonus = f64::max(
            0.0,
            (milliseconds_to_bpm(curr_time.max(prev_time), Some(2)) / Self::BASE_BPM).powf(4.0)
                - 1.0,
        );

        agility_bonus * angle_repetition_nerf * 10.0 * curr.small_circle_bonus
    }

    fn angle_diff(curr_angle: f64, last_angle: f64) -> f64 {
        f64::cos(2.0 * f64::min(PI / 4.0, (curr_angle - last_angle).abs()))
    }

    fn angle_vector_repetition<'a>(
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
    ) -> f64 {
        let mut constant_angle_count = 0.0;

        for loop_obj in (0..Self::NOTE_LIMIT).map_while(|i| curr.previous(i, diff_objects)) {
            if (curr.delta_time - loop_obj.delta_time).abs() > 25.0 {
                break;
            }

            if let Some((loop_angle, curr_angle)) = loop_obj
                .normalised_vector_angle
                .zip(curr.normalised_vector_angle)
            {
                let angle_diff = (curr_angle - loop_angle).abs();
                constant_angle_count += f64::cos(8.0 * f64::min(PI / 16.0, angle_diff));
            }
        }

        // No repeated directions at all yields no nerf
        f64::min(0.5 / constant_angle_count, 1.0).powf(2.0)
    }
}
