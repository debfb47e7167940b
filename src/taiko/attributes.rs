use crate::{any::StrainPeak, GameMods};

/// The result of a difficulty calculation on an osu!taiko map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaikoDifficultyAttributes {
    /// The mods which were applied.
    pub mods: GameMods,
    /// The difficulty of the stamina skill.
    pub stamina: f64,
    /// The ratio of stamina difficulty from mono-color (single color) streams to total
    /// stamina difficulty.
    pub mono_stamina_factor: f64,
    /// Weighted sum of stamina strains.
    pub stamina_difficult_strain_count: f64,
    /// The perceived hit window for an n300 inclusive of rate-adjusting mods (DT/HT/etc)
    pub great_hit_window: f64,
    /// The perceived hit window for an n100 inclusive of rate-adjusting mods (DT/HT/etc)
    pub ok_hit_window: f64,
    /// The final star rating.
    pub stars: f64,
    /// The maximum combo.
    pub max_combo: u32,
    /// Whether the [`Beatmap`] was a convert i.e. an osu!standard map.
    ///
    /// [`Beatmap`]: crate::model::beatmap::Beatmap
    pub is_convert: bool,
}

impl TaikoDifficultyAttributes {
    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Whether the [`Beatmap`] was a convert i.e. an osu!standard map.
    ///
    /// [`Beatmap`]: crate::model::beatmap::Beatmap
    pub const fn is_convert(&self) -> bool {
        self.is_convert
    }
}

/// The result of calculating the strains on a osu!taiko map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaikoStrains {
    /// Strain peaks of the stamina skill.
    pub stamina: Vec<StrainPeak>,
    /// Strain peaks of the stamina skill on single colour streams.
    pub single_color_stamina: Vec<StrainPeak>,
}
