use crate::{model::mods::GameMods, osu::difficulty::movement::DistanceScaling, Difficulty};

use super::{filter::ObjectFilter, ModsDependent};

/// [`Difficulty`] but all fields are public for inspection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InspectDifficulty {
    /// Specify mods.
    pub mods: GameMods,
    /// Amount of passed objects for partial plays, e.g. a fail.
    pub passed_objects: Option<u32>,
    /// Adjust the clock rate used in the calculation.
    pub clock_rate: Option<f64>,
    /// Override a beatmap's set AR.
    ///
    /// Only relevant for osu! and osu!catch.
    pub ar: Option<ModsDependent>,
    /// Override a beatmap's set CS.
    ///
    /// Only relevant for osu!catch.
    pub cs: Option<ModsDependent>,
    /// Override a beatmap's set HP.
    pub hp: Option<ModsDependent>,
    /// Override a beatmap's set OD.
    pub od: Option<ModsDependent>,
    /// How movement distances are normalized.
    ///
    /// Only relevant for osu!standard.
    pub distance_scaling: DistanceScaling,
    /// Which objects the calculation gets to see.
    ///
    /// `None` means the mode's default.
    pub filter: Option<ObjectFilter>,
}

impl InspectDifficulty {
    /// Convert `self` into a [`Difficulty`].
    ///
    /// Attribute overrides are clamped the same way as through
    /// [`Difficulty::ar`] and co.
    pub fn into_difficulty(self) -> Difficulty {
        let Self {
            mods,
            passed_objects,
            clock_rate,
            ar,
            cs,
            hp,
            od,
            distance_scaling,
            filter,
        } = self;

        Difficulty {
            mods,
            passed_objects,
            clock_rate,
            ar: ar.map(ModsDependent::clamped),
            cs: cs.map(ModsDependent::clamped),
            hp: hp.map(ModsDependent::clamped),
            od: od.map(ModsDependent::clamped),
            distance_scaling,
            filter,
        }
    }
}

impl From<InspectDifficulty> for Difficulty {
    fn from(difficulty: InspectDifficulty) -> Self {
        difficulty.into_difficulty()
    }
}

impl From<Difficulty> for InspectDifficulty {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.inspect()
    }
}
