use rosu_map::section::general::GameMode;

use crate::{
    any::{
        difficulty::filter::{FilterObject, ObjectFilter},
        Difficulty,
    },
    model::{
        error::{DifficultyError, ValidateObject},
        mode::IGameMode,
    },
    Beatmap,
};

pub use self::attributes::{TaikoDifficultyAttributes, TaikoStrains};

mod attributes;
pub mod difficulty;

/// Marker type for [`GameMode::Taiko`].
///
/// # Example
///
/// ```
/// use rosu_strain::{Beatmap, Difficulty};
/// use rosu_strain::taiko::{HitType, Taiko, TaikoObject};
///
/// let hit_objects = (0..32)
///     .map(|i| {
///         let hit_type = if i % 4 < 2 { HitType::Center } else { HitType::Rim };
///
///         TaikoObject::new(f64::from(i) * 150.0, hit_type)
///     })
///     .collect();
///
/// let attrs = Difficulty::new()
///     .calculate(&Beatmap::<Taiko>::new(hit_objects))
///     .unwrap();
///
/// assert_eq!(attrs.max_combo, 32);
/// assert!(attrs.stars > 0.0);
/// ```
pub struct Taiko;

impl IGameMode for Taiko {
    const MODE: GameMode = GameMode::Taiko;
    const DEFAULT_FILTER: ObjectFilter = ObjectFilter::Scoring;

    type Object = TaikoObject;
    type DifficultyAttributes = TaikoDifficultyAttributes;
    type Strains = TaikoStrains;

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

/// An osu!taiko hit object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TaikoObject {
    pub start_time: f64,
    pub hit_type: HitType,
}

impl TaikoObject {
    pub const fn new(start_time: f64, hit_type: HitType) -> Self {
        Self {
            start_time,
            hit_type,
        }
    }

    pub const fn is_hit(&self) -> bool {
        self.hit_type.is_hit()
    }
}

/// The colour of an osu!taiko note.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitType {
    Center,
    Rim,
    /// Drumrolls and swells.
    NonHit,
}

impl HitType {
    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::NonHit)
    }
}

impl FilterObject for TaikoObject {
    fn is_combo(&self) -> bool {
        self.is_hit()
    }
}

impl ValidateObject for TaikoObject {
    fn start_time(&self) -> f64 {
        self.start_time
    }

    fn is_finite(&self) -> bool {
        self.start_time.is_finite()
    }
}
