use rosu_map::section::general::GameMode;

use crate::{
    any::{Difficulty, ObjectFilter},
    model::{error::DifficultyError, hit_object::HitObject, mode::IGameMode},
    Beatmap,
};

pub use self::attributes::{OsuDifficultyAttributes, OsuStrains};

mod attributes;
pub mod difficulty;

/// Marker type for [`GameMode::Osu`].
///
/// # Example
///
/// ```
/// use rosu_strain::{Beatmap, Difficulty};
/// use rosu_strain::model::hit_object::{HitObject, Pos};
/// use rosu_strain::osu::Osu;
///
/// let map = Beatmap::<Osu>::new(vec![HitObject::circle(Pos::new(256.0, 192.0), 0.0, 32.0)]);
///
/// // A single object has nothing to be difficult against
/// let attrs = Difficulty::new().calculate(&map).unwrap();
///
/// assert_eq!(attrs.n_circles, 1);
/// assert_eq!(attrs.aim, 0.0);
/// assert_eq!(attrs.speed, 0.0);
/// ```
pub struct Osu;

impl IGameMode for Osu {
    const MODE: GameMode = GameMode::Osu;
    const DEFAULT_FILTER: ObjectFilter = ObjectFilter::Scoring;

    type Object = HitObject;
    type DifficultyAttributes = OsuDifficultyAttributes;
    type Strains = OsuStrains;

    fn difficulty(
        difficulty: &Difficulty,
        map: &Beatmap<Self>,
    ) -> Result<Self::DifficultyAttributes, DifficultyError> {
        difficulty::difficulty(difficulty, map)
    }

    fn strains(
        difficulty: &Difficulty,
        map: &Beatmap<Self>,
    ) -> Result<Self::Strains, DifficultyError> {
        difficulty::strains(difficulty, map)
    }
}
