use crate::{any::StrainPeak, GameMods};

/// The result of a difficulty calculation on an osu!standard map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OsuDifficultyAttributes {
    /// The mods which were applied.
    pub mods: GameMods,
    /// The difficulty of the aim skill.
    pub aim: f64,
    /// The difficulty of the aim skill without the movements along sliders.
    pub aim_no_sliders: f64,
    /// The number of sliders weighted by difficulty.
    pub aim_difficult_slider_count: f64,
    /// The difficulty of following the cursor flow between objects.
    pub flow_aim: f64,
    /// The number of objects relevant to the flow aim difficulty.
    pub flow_aim_relevant_object_count: f64,
    /// The difficulty of the speed skill.
    pub speed: f64,
    /// The number of clickable objects weighted by difficulty.
    pub speed_note_count: f64,
    /// Share of the agility difficulty that can be avoided by hitting late.
    pub speed_cheese_inaccuracy: f64,
    /// The difficulty of the flashlight skill.
    ///
    /// Zero unless flashlight was enabled.
    pub flashlight: f64,
    /// The ratio of the aim strain with and without considering sliders
    pub slider_factor: f64,
    /// Describes how much of the aim difficulty is contributed to by sliders.
    pub aim_top_weighted_slider_factor: f64,
    /// Describes how much of the speed difficulty is contributed to by sliders.
    pub speed_top_weighted_slider_factor: f64,
    /// Weighted sum of aim strains.
    pub aim_difficult_strain_count: f64,
    /// Weighted sum of speed strains.
    pub speed_difficult_strain_count: f64,
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The health drain rate.
    pub hp: f64,
    /// The hit window for a great (300) in milliseconds.
    pub great_hit_window: f64,
    /// The hit window for an ok (100) in milliseconds.
    pub ok_hit_window: f64,
    /// The hit window for a meh (50) in milliseconds.
    pub meh_hit_window: f64,
    /// The amount of circles.
    pub n_circles: u32,
    /// The amount of sliders.
    pub n_sliders: u32,
    /// The amount of spinners.
    pub n_spinners: u32,
    /// The final star rating
    pub stars: f64,
    /// The maximum combo.
    pub max_combo: u32,
}

impl OsuDifficultyAttributes {
    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Return the amount of hitobjects.
    pub const fn n_objects(&self) -> u32 {
        self.n_circles + self.n_sliders + self.n_spinners
    }
}

/// The result of calculating the strains on a osu! map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OsuStrains {
    /// Strain peaks of the aim skill.
    pub aim: Vec<StrainPeak>,
    /// Strain peaks of the aim skill without sliders.
    pub aim_no_sliders: Vec<StrainPeak>,
    /// Strain peaks of the flow aim skill.
    ///
    /// Sections vary in length.
    pub flow_aim: Vec<StrainPeak>,
    /// Strain peaks of the speed skill.
    pub speed: Vec<StrainPeak>,
    /// Strain peaks of the flashlight skill.
    ///
    /// Empty unless flashlight was enabled.
    pub flashlight: Vec<StrainPeak>,
}
