use std::fmt::Debug;

use rosu_map::section::general::GameMode;

use crate::{
    any::{Difficulty, ObjectFilter},
    model::error::DifficultyError,
    Beatmap,
};

/// A way to specify a gamemode at compile-time.
///
/// Notably, this is implemented for the marker types [`Osu`], [`Taiko`],
/// and [`Catch`].
///
/// [`Osu`]: crate::osu::Osu
/// [`Taiko`]: crate::taiko::Taiko
/// [`Catch`]: crate::catch::Catch
pub trait IGameMode: Sized {
    /// The mode this type represents.
    const MODE: GameMode;

    /// Which objects the difficulty calculation sees unless
    /// [`Difficulty::filter`] specifies otherwise.
    const DEFAULT_FILTER: ObjectFilter;

    /// The mode's hit object type.
    type Object: Clone + Debug + PartialEq;

    /// The resulting type of a difficulty calculation.
    type DifficultyAttributes;

    /// The resulting type of a strain calculation.
    type Strains;

    /// Perform a difficulty calculation and process the final skill values.
    fn difficulty(
        difficulty: &Difficulty,
        map: &Beatmap<Self>,
    ) -> Result<Self::DifficultyAttributes, DifficultyError>;

    /// Perform a difficulty calculation without processing the final skill
    /// values.
    fn strains(
        difficulty: &Difficulty,
        map: &Beatmap<Self>,
    ) -> Result<Self::Strains, DifficultyError>;
}
