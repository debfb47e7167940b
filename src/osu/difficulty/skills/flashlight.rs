use crate::{
    any::difficulty::{
        object::{HasStartTime, IDifficultyObject},
        skills::strain_decay,
    },
    model::mods::GameMods,
    osu::difficulty::{
        evaluators::FlashlightEvaluator, object::OsuDifficultyObject,
        HD_FADE_IN_DURATION_MULTIPLIER,
    },
};

define_skill! {
    #[derive(Clone)]
    pub struct Flashlight: <'a> [OsuDifficultyObject<'a>] {
        has_hidden_mod: bool,
        evaluator: FlashlightEvaluator,
        current_strain: f64 = 0.0,
    }
}

impl Flashlight {
    const SKILL_MULTIPLIER: f64 = 0.05512;
    const STRAIN_DECAY_BASE: f64 = 0.15;
    const SECTION_LENGTH: f64 = 400.0;
    const PREEMPT_MIN: f64 = 450.0;

    /// `time_preempt` is the unadjusted approach time i.e. not divided by the
    /// clock rate.
    pub fn with_mods(mods: &GameMods, time_preempt: f64) -> Self {
        let time_fade_in = if mods.hd() {
            time_preempt * HD_FADE_IN_DURATION_MULTIPLIER
        } else {
            400.0 * (time_preempt / Self::PREEMPT_MIN).min(1.0)
        };

        Self::new(
            mods.hd(),
            FlashlightEvaluator::new(time_preempt, time_fade_in),
        )
    }

    fn calculate_initial_strain(
        &self,
        time: f64,
        curr: &OsuDifficultyObject<'_>,
        objects: &[OsuDifficultyObject<'_>],
    ) -> f64 {
        let prev_start_time = curr
            .previous(0, objects)
            .map_or(0.0, HasStartTime::start_time);

        self.current_strain * strain_decay(time - prev_start_time, Self::STRAIN_DECAY_BASE)
    }

    fn strain_value_at(
        &mut self,
        curr: &OsuDifficultyObject<'_>,
        objects: &[OsuDifficultyObject<'_>],
    ) -> f64 {
        self.current_strain *= strain_decay(curr.delta_time, Self::STRAIN_DECAY_BASE);
        self.current_strain += self
            .evaluator
            .evaluate_diff_of(curr, objects, self.has_hidden_mod)
            * Self::SKILL_MULTIPLIER;

        self.current_strain
    }

    pub fn difficulty_value(&self) -> f64 {
        self.sections.peak_values().iter().sum()
    }

    pub fn difficulty_to_performance(difficulty: f64) -> f64 {
        25.0 * f64::powf(difficulty, 2.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        any::difficulty::skills::Skill,
        model::hit_object::{HitObject, Pos},
        osu::difficulty::{movement::DistanceScaling, object::create_difficulty_objects},
    };

    use super::*;

    fn process(mods: &GameMods) -> Flashlight {
        let hit_objects: Vec<_> = (0..24)
            .map(|i| {
                let pos = Pos::new(64.0 + 16.0 * i as f32, if i % 2 == 0 { 64.0 } else { 320.0 });

                HitObject::circle(pos, f64::from(i) * 250.0, 32.0)
            })
            .collect();

        let diff_objects =
            create_difficulty_objects(&hit_objects, 1.0, 100.0, DistanceScaling::default());

        let mut flashlight = Flashlight::with_mods(mods, 1200.0);

        for curr in diff_objects.iter() {
            flashlight.process(curr, &diff_objects);
        }

        flashlight
    }

    #[test]
    fn sums_all_peaks() {
        let flashlight = process(&GameMods::from(1024));
        let peaks = flashlight.sections.peak_values();

        assert!(peaks.len() > 1);
        assert!((flashlight.difficulty_value() - peaks.iter().sum::<f64>()).abs() < 1e-12);
    }

    #[test]
    fn hidden_is_harder() {
        let plain = process(&GameMods::from(1024)).difficulty_value();
        let hidden = process(&GameMods::from(1024 + 8)).difficulty_value();

        assert!(plain > 0.0);
        assert!(hidden > plain);
    }
}
