use crate::{
    any::difficulty::{
        object::IDifficultyObject,
        skills::{difficulty_value, strain_decay},
    },
    catch::difficulty::object::CatchDifficultyObject,
    util::float_ext::FloatExt,
};

define_skill! {
    /// Strain of moving the catcher between fruits.
    pub struct Movement: [CatchDifficultyObject] {
        clock_rate: f64,
        current_strain: f64 = 0.0,
    }
}

impl Movement {
    const SKILL_MULTIPLIER: f64 = 1.0;
    const STRAIN_DECAY_BASE: f64 = 0.2;

    const DECAY_WEIGHT: f64 = 0.94;

    const SECTION_LENGTH: f64 = 750.0;

    fn calculate_initial_strain(
        &self,
        time: f64,
        curr: &CatchDifficultyObject,
        diff_objects: &[CatchDifficultyObject],
    ) -> f64 {
        let prev_start_time = curr
            .previous(0, diff_objects)
            .map_or(0.0, |prev| prev.start_time);

        self.current_strain * strain_decay(time - prev_start_time, Self::STRAIN_DECAY_BASE)
    }

    fn strain_value_at(
        &mut self,
        curr: &CatchDifficultyObject,
        diff_objects: &[CatchDifficultyObject],
    ) -> f64 {
        self.current_strain *= strain_decay(curr.delta_time, Self::STRAIN_DECAY_BASE);
        self.current_strain += MovementEvaluator::evaluate_diff_of(curr, diff_objects, self.clock_rate)
            * Self::SKILL_MULTIPLIER;

        self.current_strain
    }

    pub fn difficulty_value(&self) -> f64 {
        difficulty_value(&self.sections.peak_values(), Self::DECAY_WEIGHT)
    }
}

/// Difficulty of the catcher movement onto a single object.
struct MovementEvaluator;

impl MovementEvaluator {
    const NORMALIZED_HITOBJECT_RADIUS: f32 = 41.0;
    const DIRECTION_CHANGE_BONUS: f64 = 21.0;
    const EDGE_DASH_DISTANCE: f32 = 20.0;

    fn evaluate_diff_of(
        curr: &CatchDifficultyObject,
        diff_objects: &[CatchDifficultyObject],
        clock_rate: f64,
    ) -> f64 {
        let last = curr.previous(0, diff_objects);
        let weighted_strain_time = curr.strain_time + 13.0 + (3.0 / clock_rate);

        if Self::is_repeated_buzz(curr, diff_objects) {
            return 0.0;
        }

        let mut dist_addition = f64::from(curr.dist_moved.abs()).powf(1.3) / 510.0;

        if curr.dist_moved.abs() > 0.1 {
            if let Some(last) = last {
                dist_addition += Self::direction_change_bonus(curr, last, weighted_strain_time);
            }

            // * Base bonus for every movement, giving some weight to streams.
            dist_addition += 12.5
                * f64::from(f32::abs(curr.dist_moved).min(Self::NORMALIZED_HITOBJECT_RADIUS * 2.0))
                / f64::from(Self::NORMALIZED_HITOBJECT_RADIUS * 6.0)
                / weighted_strain_time.sqrt();
        }

        dist_addition *= Self::edge_dash_multiplier(curr, clock_rate);

        dist_addition / weighted_strain_time
    }

    /// Bonus for reversing the direction of the previous movement.
    fn direction_change_bonus(
        curr: &CatchDifficultyObject,
        last: &CatchDifficultyObject,
        weighted_strain_time: f64,
    ) -> f64 {
        if last.dist_moved.abs() <= 0.1 || curr.dist_moved.signum() == last.dist_moved.signum() {
            return 0.0;
        }

        let bonus_factor = f64::from(curr.dist_moved.abs().min(50.0) / 50.0);
        let anti_flow_factor = f64::from(last.dist_moved.abs().min(70.0) / 70.0).max(0.38);

        Self::DIRECTION_CHANGE_BONUS / (last.strain_time + 16.0).sqrt()
            * bonus_factor
            * anti_flow_factor
            * (1.0 - (weighted_strain_time / 1000.0).powf(3.0)).max(0.0)
    }

    /// Walking to a fruit right next to the hyper dash range is harder than
    /// dashing onto it.
    fn edge_dash_multiplier(curr: &CatchDifficultyObject, clock_rate: f64) -> f64 {
        let dist_to_hyper_dash = curr.last_object.dist_to_hyper_dash;

        if dist_to_hyper_dash > Self::EDGE_DASH_DISTANCE {
            return 1.0;
        }

        let edge_dash_bonus = if curr.last_object.hyper_dash { 0.0 } else { 5.7 };

        // * Edge Dashes are easier at lower ms values
        1.0 + edge_dash_bonus
            * f64::from((Self::EDGE_DASH_DISTANCE - dist_to_hyper_dash) / Self::EDGE_DASH_DISTANCE)
            * ((curr.strain_time * clock_rate).min(265.0) / 265.0).powf(1.5)
    }

    /// Horizontal back and forth sliders create "buzz" patterns whose
    /// movements are shorter than the catcher but still count as movements
    /// due to the positioning error offsets. The first back and forth counts,
    /// every following one is nullified.
    fn is_repeated_buzz(
        curr: &CatchDifficultyObject,
        diff_objects: &[CatchDifficultyObject],
    ) -> bool {
        let (Some(last), Some(last_last)) = (
            curr.previous(0, diff_objects),
            curr.previous(1, diff_objects),
        ) else {
            return false;
        };

        curr.exact_dist_moved.abs() <= CatchDifficultyObject::NORMALIZED_HALF_CATCHER_WIDTH * 2.0
            && <f32 as FloatExt>::eq(curr.exact_dist_moved, -last.exact_dist_moved)
            && <f32 as FloatExt>::eq(last.exact_dist_moved, -last_last.exact_dist_moved)
            && <f64 as FloatExt>::eq(curr.strain_time, last.strain_time)
            && <f64 as FloatExt>::eq(last.strain_time, last_last.strain_time)
    }
}
