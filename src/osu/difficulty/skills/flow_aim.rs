use std::collections::VecDeque;

use crate::{
    any::difficulty::{
        object::HasStartTime,
        skills::{Skill, StrainPeak, VariableLengthSections},
    },
    osu::difficulty::{evaluators::FlowAimEvaluator, object::OsuDifficultyObject},
};

use super::strain::{count_relevant_objects, variable_length_difficulty_value, OsuStrainSkill};

/// Flow aim strain.
///
/// Instead of decaying a single running value, the strain at any time is the
/// sum of all recent contributions, each weighted by how long ago it was
/// made. Contributions older than the influence window no longer count.
#[derive(Clone)]
pub struct FlowAim {
    history: VecDeque<(f64, f64)>,
    sections: VariableLengthSections,
}

impl FlowAim {
    const SKILL_MULTIPLIER: f64 = 15.0;
    const STRAIN_DECAY_BASE: f64 = 0.15;
    const INFLUENCE_WINDOW: f64 = 1500.0;
    const MAX_SECTION_LENGTH: f64 = 400.0;
    const DIFFICULTY_MULTIPLIER: f64 = 1.058;

    pub fn new() -> Self {
        Self {
            history: VecDeque::with_capacity(16),
            sections: VariableLengthSections::new(Self::MAX_SECTION_LENGTH),
        }
    }

    /// Weight of a contribution made `delta` milliseconds ago.
    ///
    /// Starts at 1 and reaches 0 at the end of the influence window.
    fn weight(delta: f64) -> f64 {
        if delta >= Self::INFLUENCE_WINDOW {
            return 0.0;
        }

        let window_decay = Self::STRAIN_DECAY_BASE.powf(Self::INFLUENCE_WINDOW / 1000.0);
        let decay = Self::STRAIN_DECAY_BASE.powf(delta.max(0.0) / 1000.0);

        (decay - window_decay) / (1.0 - window_decay)
    }

    fn strain_at(history: &VecDeque<(f64, f64)>, time: f64) -> f64 {
        history
            .iter()
            .map(|&(start_time, difficulty)| difficulty * Self::weight(time - start_time))
            .sum()
    }

    /// Number of objects whose strain is close to the top strain.
    pub fn relevant_object_count(&self) -> f64 {
        let difficulty_value = Skill::<OsuDifficultyObject<'_>>::difficulty_value(self);

        count_relevant_objects(self.sections.object_strains(), difficulty_value)
    }
}

impl Default for FlowAim {
    fn default() -> Self {
        Self::new()
    }
}

impl OsuStrainSkill for FlowAim {}

impl<'a> Skill<OsuDifficultyObject<'a>> for FlowAim {
    fn process(&mut self, curr: &OsuDifficultyObject<'a>, objects: &[OsuDifficultyObject<'a>]) {
        let time = curr.start_time();

        let contribution =
            FlowAimEvaluator::evaluate_diff_of(curr, objects) * Self::SKILL_MULTIPLIER;
        let strain = Self::strain_at(&self.history, time) + contribution;

        let history = &self.history;
        self.sections.record(time, strain, |at| Self::strain_at(history, at));

        while self
            .history
            .front()
            .is_some_and(|&(start_time, _)| time - start_time >= Self::INFLUENCE_WINDOW)
        {
            self.history.pop_front();
        }

        self.history.push_back((time, contribution));
    }

    fn strain_peaks(&self) -> Vec<StrainPeak> {
        self.sections.peaks()
    }

    fn object_strains(&self) -> &[f64] {
        self.sections.object_strains()
    }

    fn difficulty_value(&self) -> f64 {
        variable_length_difficulty_value(
            &self.sections.peaks(),
            Self::DECAY_WEIGHT,
            self.sections.max_section_length(),
            Self::DIFFICULTY_MULTIPLIER,
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn weight_bounds() {
        assert!((FlowAim::weight(0.0) - 1.0).abs() < 1e-12);
        assert_eq!(FlowAim::weight(FlowAim::INFLUENCE_WINDOW), 0.0);
        assert_eq!(FlowAim::weight(10_000.0), 0.0);
    }

    #[test]
    fn expired_contributions_vanish() {
        let history: VecDeque<_> = [(0.0, 5.0), (1000.0, 2.0)].into_iter().collect();

        let at_second = 5.0 * FlowAim::weight(1000.0) + 2.0;
        let after_first = 2.0 * FlowAim::weight(600.0);

        assert!((FlowAim::strain_at(&history, 1000.0) - at_second).abs() < 1e-12);
        assert!((FlowAim::strain_at(&history, 1600.0) - after_first).abs() < 1e-12);
    }

    #[test]
    fn nothing_processed() {
        let flow_aim = FlowAim::new();

        assert_eq!(Skill::<OsuDifficultyObject<'_>>::difficulty_value(&flow_aim), 0.0);
        assert_eq!(flow_aim.relevant_object_count(), 0.0);
    }

    proptest! {
        #[test]
        fn weight_is_monotonic(a in 0.0_f64..1500.0, d in 0.001_f64..1500.0) {
            prop_assert!(FlowAim::weight(a + d) < FlowAim::weight(a));
            prop_assert!(FlowAim::weight(a) >= 0.0);
        }
    }
}
