use crate::{
    any::difficulty::skills::Skill,
    taiko::difficulty::object::TaikoDifficultyObject,
};

use self::stamina::Stamina;

pub mod stamina;

pub struct TaikoSkills {
    pub stamina: Stamina,
    pub single_color_stamina: Stamina,
}

impl TaikoSkills {
    pub fn new(is_convert: bool) -> Self {
        Self {
            stamina: Stamina::new(false, is_convert),
            single_color_stamina: Stamina::new(true, is_convert),
        }
    }

    pub fn process(&mut self, curr: &TaikoDifficultyObject, objects: &[TaikoDifficultyObject]) {
        self.stamina.process(curr, objects);
        self.single_color_stamina.process(curr, objects);
    }
}
