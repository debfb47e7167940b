use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{
    model::{error::DifficultyError, mode::IGameMode, mods::GameMods},
    osu::difficulty::movement::DistanceScaling,
    Beatmap,
};

use self::{filter::ObjectFilter, inspect::InspectDifficulty};

pub mod filter;
pub mod inspect;
pub mod object;
pub mod skills;

/// Difficulty calculator on maps of any mode.
///
/// # Example
///
/// ```
/// use rosu_strain::{Beatmap, Difficulty};
/// use rosu_strain::taiko::{HitType, Taiko, TaikoObject};
///
/// let hit_objects = (0..64)
///     .map(|i| TaikoObject::new(f64::from(i) * 120.0, HitType::Center))
///     .collect();
///
/// let map = Beatmap::<Taiko>::new(hit_objects);
///
/// let attrs = Difficulty::new()
///     .mods(64) // DT
///     .passed_objects(32)
///     .calculate(&map)
///     .unwrap();
///
/// assert_eq!(attrs.max_combo, 32);
/// ```
#[derive(Clone, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: GameMods,
    passed_objects: Option<u32>,
    clock_rate: Option<f64>,
    ar: Option<ModsDependent>,
    cs: Option<ModsDependent>,
    hp: Option<ModsDependent>,
    od: Option<ModsDependent>,
    distance_scaling: DistanceScaling,
    filter: Option<ObjectFilter>,
}

/// Wrapper for beatmap attributes in [`Difficulty`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModsDependent {
    /// Value of the beatmap attribute.
    pub value: f32,
    /// Whether `value` already includes the effect of mods.
    pub with_mods: bool,
}

impl ModsDependent {
    pub const fn new(value: f32) -> Self {
        Self {
            value,
            with_mods: false,
        }
    }

    fn clamped(self) -> Self {
        Self {
            value: self.value.clamp(-20.0, 20.0),
            ..self
        }
    }
}

impl Difficulty {
    /// Create a new difficulty calculator.
    pub const fn new() -> Self {
        Self {
            mods: GameMods::DEFAULT,
            passed_objects: None,
            clock_rate: None,
            ar: None,
            cs: None,
            hp: None,
            od: None,
            distance_scaling: DistanceScaling::LargestRadius,
            filter: None,
        }
    }

    /// Turn this [`Difficulty`] into a [`InspectDifficulty`] to inspect its
    /// configured values.
    pub fn inspect(self) -> InspectDifficulty {
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

        InspectDifficulty {
            mods,
            passed_objects,
            clock_rate,
            ar,
            cs,
            hp,
            od,
            distance_scaling,
            filter,
        }
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`rosu_mods::GameMods`]
    /// - [`rosu_mods::GameModsIntermode`]
    /// - [`&rosu_mods::GameModsIntermode`](rosu_mods::GameModsIntermode)
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    pub fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.passed_objects = Some(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// The clock rate must be positive and finite, otherwise the calculation
    /// returns [`DifficultyError::InvalidClockRate`].
    pub fn clock_rate(mut self, clock_rate: f64) -> Self {
        self.clock_rate = Some(clock_rate);

        self
    }

    /// Override a beatmap's set AR.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    ///
    /// Only relevant for osu! and osu!catch.
    pub fn ar(mut self, ar: f32, with_mods: bool) -> Self {
        self.ar = Some(ModsDependent { value: ar, with_mods }.clamped());

        self
    }

    /// Override a beatmap's set CS.
    ///
    /// See [`ar`](Self::ar) for `with_mods`.
    ///
    /// Only relevant for osu!catch.
    pub fn cs(mut self, cs: f32, with_mods: bool) -> Self {
        self.cs = Some(ModsDependent { value: cs, with_mods }.clamped());

        self
    }

    /// Override a beatmap's set HP.
    ///
    /// See [`ar`](Self::ar) for `with_mods`.
    pub fn hp(mut self, hp: f32, with_mods: bool) -> Self {
        self.hp = Some(ModsDependent { value: hp, with_mods }.clamped());

        self
    }

    /// Override a beatmap's set OD.
    ///
    /// See [`ar`](Self::ar) for `with_mods`.
    pub fn od(mut self, od: f32, with_mods: bool) -> Self {
        self.od = Some(ModsDependent { value: od, with_mods }.clamped());

        self
    }

    /// Specify how distances between two objects of differing radius are
    /// normalized.
    ///
    /// Only relevant for osu!standard. Defaults to
    /// [`DistanceScaling::LargestRadius`].
    pub fn distance_scaling(mut self, distance_scaling: DistanceScaling) -> Self {
        self.distance_scaling = distance_scaling;

        self
    }

    /// Specify which objects the difficulty calculation gets to see.
    ///
    /// Object counts and the max combo always account for every object. If
    /// no filter is specified, the mode's [`IGameMode::DEFAULT_FILTER`] is
    /// used i.e. [`ObjectFilter::Combo`] for osu!catch and
    /// [`ObjectFilter::Scoring`] otherwise.
    pub fn filter(mut self, filter: ObjectFilter) -> Self {
        self.filter = Some(filter);

        self
    }

    /// Perform the difficulty calculation.
    pub fn calculate<M: IGameMode>(
        &self,
        map: &Beatmap<M>,
    ) -> Result<M::DifficultyAttributes, DifficultyError> {
        M::difficulty(self, map)
    }

    /// Perform the difficulty calculation but instead of evaluating the skill
    /// strains, return them as is.
    ///
    /// Suitable to plot the difficulty of a map over time.
    pub fn strains<M: IGameMode>(&self, map: &Beatmap<M>) -> Result<M::Strains, DifficultyError> {
        M::strains(self, map)
    }

    pub(crate) const fn get_mods(&self) -> &GameMods {
        &self.mods
    }

    pub(crate) fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    pub(crate) fn get_passed_objects(&self) -> usize {
        self.passed_objects.map_or(usize::MAX, |n| n as usize)
    }

    pub(crate) const fn get_ar(&self) -> Option<ModsDependent> {
        self.ar
    }

    pub(crate) const fn get_cs(&self) -> Option<ModsDependent> {
        self.cs
    }

    pub(crate) const fn get_hp(&self) -> Option<ModsDependent> {
        self.hp
    }

    pub(crate) const fn get_od(&self) -> Option<ModsDependent> {
        self.od
    }

    pub(crate) const fn get_distance_scaling(&self) -> DistanceScaling {
        self.distance_scaling
    }

    pub(crate) fn get_filter<M: IGameMode>(&self) -> ObjectFilter {
        self.filter.unwrap_or(M::DEFAULT_FILTER)
    }
}

impl Debug for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
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

        f.debug_struct("Difficulty")
            .field("mods", mods)
            .field("passed_objects", passed_objects)
            .field("clock_rate", clock_rate)
            .field("ar", ar)
            .field("cs", cs)
            .field("hp", hp)
            .field("od", od)
            .field("distance_scaling", distance_scaling)
            .field("filter", filter)
            .finish()
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_round_trip() {
        let difficulty = Difficulty::new()
            .mods(8 + 64)
            .passed_objects(10)
            .ar(9.5, true)
            .od(25.0, false)
            .distance_scaling(DistanceScaling::PerEndpoint)
            .filter(ObjectFilter::Combo);

        let inspect = difficulty.clone().inspect();

        assert_eq!(inspect.filter, Some(ObjectFilter::Combo));
        assert_eq!(inspect.passed_objects, Some(10));
        assert_eq!(inspect.distance_scaling, DistanceScaling::PerEndpoint);
        assert_eq!(
            inspect.ar,
            Some(ModsDependent {
                value: 9.5,
                with_mods: true
            })
        );
        assert_eq!(inspect.od.map(|od| od.value), Some(20.0));
        assert_eq!(inspect.into_difficulty(), difficulty);
    }

    #[test]
    fn inspected_overrides_are_clamped() {
        let inspect = InspectDifficulty {
            ar: Some(ModsDependent::new(50.0)),
            hp: Some(ModsDependent::new(-30.0)),
            ..Default::default()
        };

        let difficulty = inspect.into_difficulty();

        assert_eq!(difficulty.get_ar().map(|ar| ar.value), Some(20.0));
        assert_eq!(difficulty.get_hp().map(|hp| hp.value), Some(-20.0));
        assert_eq!(difficulty.get_cs(), None);
    }

    #[test]
    fn clock_rate_from_mods() {
        let half_time = Difficulty::new().mods(256);

        assert!((half_time.get_clock_rate() - 0.75).abs() < f64::EPSILON);
        assert!((half_time.clock_rate(1.2).get_clock_rate() - 1.2).abs() < f64::EPSILON);
        assert_eq!(Difficulty::new().get_passed_objects(), usize::MAX);
    }

    #[test]
    fn filter_defaults_per_mode() {
        use crate::{catch::Catch, osu::Osu, taiko::Taiko};

        let default = Difficulty::new();

        assert_eq!(default.get_filter::<Osu>(), ObjectFilter::Scoring);
        assert_eq!(default.get_filter::<Taiko>(), ObjectFilter::Scoring);
        assert_eq!(default.get_filter::<Catch>(), ObjectFilter::Combo);

        let scoring = Difficulty::new().filter(ObjectFilter::Scoring);

        assert_eq!(scoring.get_filter::<Catch>(), ObjectFilter::Scoring);
    }
}
