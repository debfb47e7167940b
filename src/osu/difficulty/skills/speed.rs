use crate::{
    any::difficulty::{
        object::{HasStartTime, IDifficultyObject},
        skills::strain_decay,
    },
    osu::difficulty::{
        evaluators::{AgilityEvaluator, SpeedEvaluator},
        object::OsuDifficultyObject,
    },
};

use super::strain::{reduced_difficulty_value, OsuStrainSkill};

define_skill! {
    /// Tapping strain plus a separately decaying agility bonus.
    #[derive(Clone)]
    pub struct Speed: <'a> [OsuDifficultyObject<'a>] {
        has_autopilot_mod: bool,
        current_strain: f64 = 0.0,
        current_agility: f64 = 0.0,
        agility_total: f64 = 0.0,
        cheesable_agility_total: f64 = 0.0,
        slider_strains: Vec<f64> = Vec::with_capacity(64),
    }
}

impl Speed {
    const SKILL_MULTIPLIER: f64 = 1.47;
    const STRAIN_DECAY_BASE: f64 = 0.3;
    const AGILITY_MULTIPLIER: f64 = 1.0;
    const AGILITY_DECAY_BASE: f64 = 0.15;
    const SECTION_LENGTH: f64 = 400.0;
    const REDUCED_SECTION_COUNT: usize = 5;

    fn calculate_initial_strain(
        &self,
        time: f64,
        curr: &OsuDifficultyObject<'_>,
        objects: &[OsuDifficultyObject<'_>],
    ) -> f64 {
        let prev_start_time = curr
            .previous(0, objects)
            .map_or(0.0, HasStartTime::start_time);

        let delta = time - prev_start_time;

        self.current_strain * strain_decay(delta, Self::STRAIN_DECAY_BASE)
            + self.current_agility * strain_decay(delta, Self::AGILITY_DECAY_BASE)
    }

    fn strain_value_at(
        &mut self,
        curr: &OsuDifficultyObject<'_>,
        objects: &[OsuDifficultyObject<'_>],
    ) -> f64 {
        self.current_strain *= strain_decay(curr.adjusted_delta_time, Self::STRAIN_DECAY_BASE);
        self.current_strain +=
            SpeedEvaluator::evaluate_diff_of(curr, objects, self.has_autopilot_mod)
                * Self::SKILL_MULTIPLIER;

        let agility = AgilityEvaluator::evaluate_diff_of(curr, objects, false);
        let cheesable_agility = AgilityEvaluator::evaluate_diff_of(curr, objects, true);

        self.agility_total += agility;
        self.cheesable_agility_total += cheesable_agility;

        self.current_agility *= strain_decay(curr.adjusted_delta_time, Self::AGILITY_DECAY_BASE);
        self.current_agility += cheesable_agility * Self::AGILITY_MULTIPLIER;

        let total_strain = self.current_strain + self.current_agility;

        if curr.base.is_slider() {
            self.slider_strains.push(total_strain);
        }

        total_strain
    }

    /// Share of the agility difficulty that can be avoided by hitting late.
    pub fn cheese_inaccuracy(&self) -> f64 {
        if self.agility_total <= 0.0 {
            return 0.0;
        }

        (self.agility_total - self.cheesable_agility_total) / self.agility_total
    }

    pub fn relevant_note_count(&self) -> f64 {
        let object_strains = self.sections.object_strains();

        object_strains
            .iter()
            .copied()
            .max_by(f64::total_cmp)
            .filter(|&n| n > 0.0)
            .map_or(0.0, |max_strain| {
                object_strains.iter().fold(0.0, |sum, strain| {
                    sum + (1.0 + f64::exp(-(strain / max_strain * 12.0 - 6.0))).recip()
                })
            })
    }

    pub fn slider_strains(&self) -> &[f64] {
        &self.slider_strains
    }

    pub fn difficulty_value(&self) -> f64 {
        reduced_difficulty_value(
            &self.sections.peak_values(),
            Self::REDUCED_SECTION_COUNT,
            Self::REDUCED_STRAIN_BASELINE,
            Self::DECAY_WEIGHT,
        )
    }
}

impl OsuStrainSkill for Speed {}
