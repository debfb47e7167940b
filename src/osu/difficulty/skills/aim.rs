use crate::{
    any::difficulty::{
        object::{HasStartTime, IDifficultyObject},
        skills::{difficulty_value, strain_decay, Skill, StrainPeak, StrainSections},
    },
    osu::difficulty::{evaluators::AimEvaluator, object::OsuDifficultyObject},
};

use super::strain::{difficult_sliders, OsuStrainSkill};

/// Aim strain, emitted once for every movement of an object.
///
/// Without sliders, only the movement leading onto an object's head is
/// considered.
#[derive(Clone)]
pub struct Aim {
    include_sliders: bool,
    current_strain: f64,
    last_strain: f64,
    slider_strains: Vec<f64>,
    sections: StrainSections,
}

impl Aim {
    const SKILL_MULTIPLIER: f64 = 26.4;
    const STRAIN_DECAY_BASE: f64 = 0.15;
    const SECTION_LENGTH: f64 = 400.0;
    const NESTED_MULTIPLIER: f64 = 0.4;

    pub fn new(include_sliders: bool) -> Self {
        Self {
            include_sliders,
            current_strain: 0.0,
            last_strain: 0.0,
            slider_strains: Vec::with_capacity(64),
            sections: StrainSections::new(Self::SECTION_LENGTH),
        }
    }

    pub fn get_difficult_sliders(&self) -> f64 {
        difficult_sliders(&self.slider_strains)
    }

    pub fn slider_strains(&self) -> &[f64] {
        &self.slider_strains
    }
}

impl OsuStrainSkill for Aim {}

impl<'a> Skill<OsuDifficultyObject<'a>> for Aim {
    fn process(&mut self, curr: &OsuDifficultyObject<'a>, objects: &[OsuDifficultyObject<'a>]) {
        let take = if self.include_sliders {
            curr.movements.len()
        } else {
            1
        };

        let mut previous_time = curr
            .previous(0, objects)
            .map_or(0.0, HasStartTime::start_time);

        for (movement_idx, movement) in curr.movements.iter().take(take).enumerate() {
            self.last_strain = self.current_strain;

            self.current_strain *= strain_decay(movement.time(), Self::STRAIN_DECAY_BASE);

            let nested_multiplier = if movement.is_nested {
                Self::NESTED_MULTIPLIER
            } else {
                1.0
            };

            self.current_strain += AimEvaluator::evaluate_movement(curr, movement_idx, objects)
                * Self::SKILL_MULTIPLIER
                * nested_multiplier;

            if curr.base.is_slider() && !movement.is_nested {
                self.slider_strains.push(self.current_strain);
            }

            while let Some(section_end) = self.sections.pending_section_end(movement.start_time) {
                let initial_strain = self.last_strain
                    * strain_decay(section_end - previous_time, Self::STRAIN_DECAY_BASE);

                self.sections.start_new_section(initial_strain);
            }

            self.sections.record(self.current_strain);
            previous_time = movement.start_time;
        }
    }

    fn strain_peaks(&self) -> Vec<StrainPeak> {
        self.sections.peaks()
    }

    fn object_strains(&self) -> &[f64] {
        self.sections.object_strains()
    }

    fn difficulty_value(&self) -> f64 {
        difficulty_value(&self.sections.peak_values(), Self::DECAY_WEIGHT)
    }
}
