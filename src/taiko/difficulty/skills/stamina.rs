use crate::{
    any::difficulty::{
        object::IDifficultyObject,
        skills::{difficulty_value, strain_decay},
    },
    taiko::difficulty::{evaluators::StaminaEvaluator, object::TaikoDifficultyObject},
    util::difficulty::{logistic_exp, reverse_lerp},
};

define_skill! {
    #[derive(Clone)]
    pub struct Stamina: [TaikoDifficultyObject] {
        single_color: bool,
        is_convert: bool,
        current_strain: f64 = 0.0,
    }
}

impl Stamina {
    const SKILL_MULTIPLIER: f64 = 1.1;
    const STRAIN_DECAY_BASE: f64 = 0.4;
    const SECTION_LENGTH: f64 = 400.0;
    const DECAY_WEIGHT: f64 = 0.9;

    fn calculate_initial_strain(
        &self,
        time: f64,
        curr: &TaikoDifficultyObject,
        objects: &[TaikoDifficultyObject],
    ) -> f64 {
        if self.single_color {
            return 0.0;
        }

        let prev_start_time = curr
            .previous(0, objects)
            .map_or(0.0, |prev| prev.start_time);

        self.current_strain * strain_decay(time - prev_start_time, Self::STRAIN_DECAY_BASE)
    }

    fn strain_value_at(
        &mut self,
        curr: &TaikoDifficultyObject,
        objects: &[TaikoDifficultyObject],
    ) -> f64 {
        self.current_strain *= strain_decay(curr.delta_time, Self::STRAIN_DECAY_BASE);
        let mut stamina_difficulty =
            StaminaEvaluator::evaluate_diff_of(curr, objects) * Self::SKILL_MULTIPLIER;

        let index = curr.mono_streak_idx as f64;

        // * Mono-streak bonus is only applied to colour-based stamina to reward longer sequences of same-colour hits within patterns.
        if !self.single_color && !self.is_convert {
            stamina_difficulty *= 1.0 + 0.5 * reverse_lerp(index, 5.0, 20.0);
        }

        self.current_strain += stamina_difficulty;

        // * For converted maps, difficulty often comes entirely from long mono streams with no colour variation.
        // Streaks much shorter than 10 notes barely count as mono streams.
        if self.single_color {
            logistic_exp(-(index - 10.0) / 2.0, Some(self.current_strain))
        } else {
            self.current_strain
        }
    }

    pub fn difficulty_value(&self) -> f64 {
        difficulty_value(&self.sections.peak_values(), Self::DECAY_WEIGHT)
    }

    /// Section peaks as they contribute to the difficulty value.
    pub fn peak_values(&self) -> Vec<f64> {
        self.sections.peak_values()
    }
}
