use crate::{
    any::difficulty::object::IDifficultyObject,
    osu::difficulty::{
        movement::{self, Movement},
        object::OsuDifficultyObject,
    },
    util::difficulty::{milliseconds_to_bpm, reverse_lerp, smoothstep, smootherstep},
};

pub struct AimEvaluator;

impl AimEvaluator {
    const WIDE_ANGLE_MULTIPLIER: f64 = 1.5;
    const ACUTE_ANGLE_MULTIPLIER: f64 = 2.55;
    const SLIDER_MULTIPLIER: f64 = 1.35;
    const VELOCITY_CHANGE_MULTIPLIER: f64 = 0.75;
    const WIGGLE_MULTIPLIER: f64 = 1.02;

    /// Evaluates the difficulty of the `movement_idx`-th movement of the
    /// current object, based on:
    /// - cursor velocity along the movement,
    /// - angle difficulty,
    /// - sharp velocity increases,
    /// - and slider difficulty.
    pub fn evaluate_movement<'a>(
        curr: &'a OsuDifficultyObject<'a>,
        movement_idx: usize,
        diff_objects: &'a [OsuDifficultyObject<'a>],
    ) -> f64 {
        let Some(osu_last_obj) = curr.previous(0, diff_objects) else {
            return 0.0;
        };

        if curr.base.is_spinner() || osu_last_obj.base.is_spinner() {
            return 0.0;
        }

        let Some(curr_movement) = curr.movements.get(movement_idx) else {
            return 0.0;
        };

        let prev_movement = match movement_idx.checked_sub(1) {
            Some(idx) => curr.movements.get(idx),
            None => osu_last_obj.movements.last(),
        };

        let Some(prev_movement) = prev_movement else {
            return 0.0;
        };

        let prev_prev_movement = if movement_idx > 1 {
            curr.movements.get(movement_idx - 2)
        } else if osu_last_obj.movements.len() > 1 {
            osu_last_obj.movements.get(osu_last_obj.movements.len() - 2)
        } else {
            curr.previous(1, diff_objects)
                .and_then(|obj| obj.movements.last())
        };

        Self::movement_strain(
            curr,
            diff_objects,
            curr_movement,
            prev_movement,
            prev_prev_movement,
            movement_idx > 0,
        )
    }

    fn movement_strain<'a>(
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
        curr_movement: &Movement,
        prev_movement: &Movement,
        prev_prev_movement: Option<&Movement>,
        is_nested: bool,
    ) -> f64 {
        const RADIUS: f64 = OsuDifficultyObject::NORMALIZED_RADIUS as f64;
        const DIAMETER: f64 = OsuDifficultyObject::NORMALIZED_DIAMETER as f64;

        let curr_dist = curr_movement.distance();
        let prev_dist = prev_movement.distance();
        let curr_time = curr_movement.time();
        let prev_time = prev_movement.time();

        let curr_velocity = curr_dist / curr_time;
        let prev_velocity = prev_dist / prev_time;

        let mut wide_angle_bonus = 0.0;
        let mut acute_angle_bonus = 0.0;
        let mut velocity_change_bonus = 0.0;
        let mut wiggle_bonus = 0.0;

        // * Start strain with regular velocity.
        let mut aim_strain = curr_velocity;

        if let Some(prev_prev_movement) = prev_prev_movement {
            let curr_angle = movement::angle(curr_movement, prev_movement);
            let last_angle = movement::angle(prev_movement, prev_prev_movement);

            // * Rewarding angles, take the smaller velocity as base.
            let angle_bonus = curr_velocity.min(prev_velocity);

            // * If rhythms are the same.
            if !is_nested && curr_time.max(prev_time) < 1.25 * curr_time.min(prev_time) {
                acute_angle_bonus = Self::calc_acute_angle_bonus(curr_angle);

                // * Penalize angle repetition.
                acute_angle_bonus *= 0.08
                    + 0.92
                        * (1.0
                            - acute_angle_bonus
                                .min(Self::calc_acute_angle_bonus(last_angle).powf(3.0)));

                // * Apply acute angle bonus for BPM above 300 1/2 and distance more than one diameter
                acute_angle_bonus *= angle_bonus
                    * smootherstep(milliseconds_to_bpm(curr_time, Some(2)), 300.0, 400.0)
                    * smootherstep(curr_dist, DIAMETER, DIAMETER * 2.0);
            }

            wide_angle_bonus = Self::calc_wide_angle_bonus(curr_angle);

            // * Penalize angle repetition.
            wide_angle_bonus *=
                1.0 - wide_angle_bonus.min(Self::calc_wide_angle_bonus(last_angle).powf(3.0));

            // * Apply full wide angle bonus for distance more than one diameter
            wide_angle_bonus *= angle_bonus * smootherstep(curr_dist, 0.0, DIAMETER);

            // * Apply wiggle bonus for jumps that are [radius, 3*diameter] in distance, with < 110 angle
            wiggle_bonus = angle_bonus
                * smootherstep(curr_dist, RADIUS, DIAMETER)
                * reverse_lerp(curr_dist, DIAMETER * 3.0, DIAMETER).powf(1.8)
                * smootherstep(curr_angle, f64::to_radians(110.0), f64::to_radians(60.0))
                * smootherstep(prev_dist, RADIUS, DIAMETER)
                * reverse_lerp(prev_dist, DIAMETER * 3.0, DIAMETER).powf(1.8)
                * smootherstep(last_angle, f64::to_radians(110.0), f64::to_radians(60.0));

            if let Some((osu_last_obj, osu_last2_obj)) = curr
                .previous(0, diff_objects)
                .zip(curr.previous(2, diff_objects))
            {
                // * If objects just go back and forth through a middle point - don't give as much wide bonus
                // * Use Previous(2) and Previous(0) because angles calculation is done prevprev-prev-curr, so any object's angle's center point is always the previous object
                let distance = f64::from((osu_last2_obj.base.pos - osu_last_obj.base.pos).length());

                if distance < 1.0 {
                    wide_angle_bonus *= 1.0 - 0.35 * (1.0 - distance);
                }
            }
        }

        if prev_velocity.max(curr_velocity) > 0.0 {
            // * Scale with ratio of difference compared to 0.5 * max dist.
            let dist_ratio = smoothstep(
                (prev_velocity - curr_velocity).abs() / prev_velocity.max(curr_velocity),
                0.0,
                1.0,
            );

            // * Reward for % distance up to 125 / strainTime for overlaps where velocity is still changing.
            let overlap_velocity_buff = (DIAMETER * 1.25 / curr_time.min(prev_time))
                .min((prev_velocity - curr_velocity).abs());

            velocity_change_bonus = overlap_velocity_buff * dist_ratio;

            // * Penalize for rhythm changes.
            velocity_change_bonus *= (curr_time.min(prev_time) / curr_time.max(prev_time)).powf(2.0);
        }

        aim_strain += wiggle_bonus * Self::WIGGLE_MULTIPLIER;
        aim_strain += velocity_change_bonus * Self::VELOCITY_CHANGE_MULTIPLIER;

        // * Add in acute angle bonus or wide angle bonus, whichever is larger.
        aim_strain += (acute_angle_bonus * Self::ACUTE_ANGLE_MULTIPLIER)
            .max(wide_angle_bonus * Self::WIDE_ANGLE_MULTIPLIER);

        // * Apply high circle size bonus
        aim_strain *= curr.small_circle_bonus;

        if is_nested {
            aim_strain *= Self::SLIDER_MULTIPLIER;
        }

        aim_strain
    }

    fn calc_wide_angle_bonus(angle: f64) -> f64 {
        smoothstep(angle, f64::to_radians(40.0), f64::to_radians(140.0))
    }

    fn calc_acute_angle_bonus(angle: f64) -> f64 {
        smoothstep(angle, f64::to_radians(140.0), f64::to_radians(40.0))
    }
}
