use crate::{
    any::difficulty::object::IDifficultyObject,
    taiko::difficulty::object::TaikoDifficultyObject,
};

pub struct StaminaEvaluator;

impl StaminaEvaluator {
    const COLOR_CHANGE_WINDOW: f64 = 300.0;

    pub fn evaluate_diff_of(curr: &TaikoDifficultyObject, objects: &[TaikoDifficultyObject]) -> f64 {
        if !curr.hit_type.is_hit() {
            return 0.0;
        }

        // * Find the previous hit object hit by the current finger, which is n notes prior, n being the number of
        // * available fingers.
        let prev = curr.previous(1, objects);
        let prev_mono = curr.previous_mono(Self::available_fingers_for(curr, objects) - 1, objects);

        // * Add a base strain to all objects
        let mut object_strain = 0.5;

        let Some(prev) = prev else {
            return object_strain;
        };

        if let Some(prev_mono) = prev_mono {
            object_strain += Self::speed_bonus(curr.start_time - prev_mono.start_time)
                + 0.5 * Self::speed_bonus(curr.start_time - prev.start_time);
        }

        object_strain
    }

    fn available_fingers_for(
        hit_object: &TaikoDifficultyObject,
        hit_objects: &[TaikoDifficultyObject],
    ) -> usize {
        if hit_object.color_change_within(Self::COLOR_CHANGE_WINDOW, hit_objects) {
            2
        } else {
            8
        }
    }

    fn speed_bonus(mut interval: f64) -> f64 {
        // * Interval is capped at a very small value to prevent infinite values.
        interval = f64::max(interval, 1.0);

        20.0 / interval
    }
}

#[cfg(test)]
mod tests {
    use crate::taiko::{difficulty::object::create_difficulty_objects, HitType, TaikoObject};

    use super::*;

    fn evaluate(hit_objects: &[TaikoObject]) -> Vec<f64> {
        let diff_objects = create_difficulty_objects(hit_objects, 1.0);

        diff_objects
            .iter()
            .map(|curr| StaminaEvaluator::evaluate_diff_of(curr, &diff_objects))
            .collect()
    }

    #[test]
    fn non_hits_are_free() {
        let hit_objects = [
            TaikoObject::new(0.0, HitType::Center),
            TaikoObject::new(100.0, HitType::NonHit),
        ];

        assert_eq!(evaluate(&hit_objects), [0.0]);
    }

    #[test]
    fn alternating_colours_use_two_fingers() {
        let hit_objects: Vec<_> = (0..8)
            .map(|i| {
                let hit_type = if i % 2 == 0 { HitType::Center } else { HitType::Rim };

                TaikoObject::new(f64::from(i) * 100.0, hit_type)
            })
            .collect();

        let values = evaluate(&hit_objects);

        // Base strain until the same-colour predecessor exists
        assert_eq!(values[0], 0.5);
        assert_eq!(values[1], 0.5);

        // Two fingers so the same finger hit the note 400ms ago
        // 0.5 + 20 / 400 + 0.5 * 20 / 200
        assert!((values[4] - 0.6).abs() < 1e-12, "{}", values[4]);
    }
}
