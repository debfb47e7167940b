use crate::{
    any::difficulty::skills::Skill, model::mods::GameMods,
    osu::difficulty::object::OsuDifficultyObject,
};

use self::{aim::Aim, flashlight::Flashlight, flow_aim::FlowAim, speed::Speed};

pub mod aim;
pub mod flashlight;
pub mod flow_aim;
pub mod speed;
pub mod strain;

/// All osu!standard skills, fed in lockstep.
pub struct OsuSkills {
    pub aim: Aim,
    pub aim_no_sliders: Aim,
    pub flow_aim: FlowAim,
    pub speed: Speed,
    pub flashlight: Option<Flashlight>,
}

impl OsuSkills {
    /// `time_preempt` is the unadjusted approach time.
    pub fn new(mods: &GameMods, time_preempt: f64) -> Self {
        Self {
            aim: Aim::new(true),
            aim_no_sliders: Aim::new(false),
            flow_aim: FlowAim::new(),
            speed: Speed::new(mods.ap()),
            flashlight: mods
                .fl()
                .then(|| Flashlight::with_mods(mods, time_preempt)),
        }
    }

    pub fn process<'a>(
        &mut self,
        curr: &OsuDifficultyObject<'a>,
        diff_objects: &[OsuDifficultyObject<'a>],
    ) {
        for skill in self.skills_mut() {
            skill.process(curr, diff_objects);
        }
    }

    fn skills_mut<'a>(&mut self) -> Vec<&mut dyn Skill<OsuDifficultyObject<'a>>> {
        let mut skills: Vec<&mut dyn Skill<OsuDifficultyObject<'a>>> = vec![
            &mut self.aim,
            &mut self.aim_no_sliders,
            &mut self.flow_aim,
            &mut self.speed,
        ];

        if let Some(ref mut flashlight) = self.flashlight {
            skills.push(flashlight);
        }

        skills
    }
}
