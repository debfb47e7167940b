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

pub use self::attributes::{CatchDifficultyAttributes, CatchStrains};

mod attributes;
mod catcher;
pub mod difficulty;

/// Marker type for [`GameMode::Catch`].
///
/// # Example
///
/// ```
/// use rosu_strain::{Beatmap, Difficulty};
/// use rosu_strain::catch::{Catch, CatchObject, CatchObjectKind};
///
/// let hit_objects = (0..16)
///     .flat_map(|i| {
///         let time = f64::from(i) * 300.0;
///         let x = if i % 2 == 0 { 64.0 } else { 448.0 };
///
///         [
///             CatchObject::new(x, time, CatchObjectKind::Fruit),
///             CatchObject::new(x, time + 100.0, CatchObjectKind::TinyDroplet),
///         ]
///     })
///     .collect();
///
/// let attrs = Difficulty::new()
///     .calculate(&Beatmap::<Catch>::new(hit_objects))
///     .unwrap();
///
/// assert_eq!(attrs.n_fruits, 16);
/// assert_eq!(attrs.n_tiny_droplets, 16);
/// assert_eq!(attrs.max_combo(), 16);
/// assert!(attrs.stars > 0.0);
/// ```
pub struct Catch;

impl IGameMode for Catch {
    const MODE: GameMode = GameMode::Catch;
    const DEFAULT_FILTER: ObjectFilter = ObjectFilter::Combo;

    type Object = CatchObject;
    type DifficultyAttributes = CatchDifficultyAttributes;
    type Strains = CatchStrains;

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

/// An osu!catch hit object.
///
/// `x` is expected to already include any offset applied by mods or
/// juice stream conversion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CatchObject {
    pub x: f32,
    pub start_time: f64,
    pub kind: CatchObjectKind,
}

impl CatchObject {
    pub const fn new(x: f32, start_time: f64, kind: CatchObjectKind) -> Self {
        Self {
            x,
            start_time,
            kind,
        }
    }
}

/// The kind of a [`CatchObject`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CatchObjectKind {
    Fruit,
    Droplet,
    TinyDroplet,
    Banana,
}

impl FilterObject for CatchObject {
    fn is_combo(&self) -> bool {
        matches!(self.kind, CatchObjectKind::Fruit | CatchObjectKind::Droplet)
    }
}

impl ValidateObject for CatchObject {
    fn start_time(&self) -> f64 {
        self.start_time
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.start_time.is_finite()
    }
}
