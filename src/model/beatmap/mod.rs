use std::fmt::{Debug, Formatter, Result as FmtResult};

pub use self::attributes::{BeatmapAttributes, BeatmapAttributesBuilder, HitWindows};

use crate::model::mode::IGameMode;

mod attributes;

/// The hit objects of a mode alongside the map's difficulty settings.
///
/// Hit objects must be sorted by their start time.
pub struct Beatmap<M: IGameMode> {
    /// The approach rate.
    pub ar: f32,
    /// The circle size.
    pub cs: f32,
    /// The overall difficulty.
    pub od: f32,
    /// The health drain rate.
    pub hp: f32,
    /// Whether the map was converted from another mode.
    pub is_convert: bool,
    pub hit_objects: Vec<M::Object>,
}

impl<M: IGameMode> Beatmap<M> {
    /// Create a new map with the given hit objects.
    ///
    /// All difficulty settings are set to `5.0`.
    pub fn new(hit_objects: Vec<M::Object>) -> Self {
        Self {
            ar: 5.0,
            cs: 5.0,
            od: 5.0,
            hp: 5.0,
            is_convert: false,
            hit_objects,
        }
    }

    /// Specify the approach rate.
    pub fn ar(self, ar: f32) -> Self {
        Self { ar, ..self }
    }

    /// Specify the circle size.
    pub fn cs(self, cs: f32) -> Self {
        Self { cs, ..self }
    }

    /// Specify the overall difficulty.
    pub fn od(self, od: f32) -> Self {
        Self { od, ..self }
    }

    /// Specify the health drain rate.
    pub fn hp(self, hp: f32) -> Self {
        Self { hp, ..self }
    }

    /// Specify whether the map was converted from another mode.
    pub fn is_convert(self, is_convert: bool) -> Self {
        Self { is_convert, ..self }
    }
}

impl<M: IGameMode> Clone for Beatmap<M> {
    fn clone(&self) -> Self {
        Self {
            ar: self.ar,
            cs: self.cs,
            od: self.od,
            hp: self.hp,
            is_convert: self.is_convert,
            hit_objects: self.hit_objects.clone(),
        }
    }
}

impl<M: IGameMode> Debug for Beatmap<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Beatmap")
            .field("ar", &self.ar)
            .field("cs", &self.cs)
            .field("od", &self.od)
            .field("hp", &self.hp)
            .field("is_convert", &self.is_convert)
            .field("hit_objects", &self.hit_objects)
            .finish()
    }
}

impl<M: IGameMode> PartialEq for Beatmap<M> {
    fn eq(&self, other: &Self) -> bool {
        self.ar == other.ar
            && self.cs == other.cs
            && self.od == other.od
            && self.hp == other.hp
            && self.is_convert == other.is_convert
            && self.hit_objects == other.hit_objects
    }
}
