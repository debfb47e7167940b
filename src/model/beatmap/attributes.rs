use rosu_map::section::general::GameMode;

use crate::{
    any::difficulty::{Difficulty, ModsDependent},
    model::{mode::IGameMode, mods::GameMods},
};

use super::Beatmap;

/// Summary struct for a [`Beatmap`]'s attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapAttributes {
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The circle size.
    pub cs: f64,
    /// The health drain rate
    pub hp: f64,
    /// The clock rate with respect to mods.
    pub clock_rate: f64,
    /// The hit windows for approach rate and overall difficulty.
    pub hit_windows: HitWindows,
}

/// AR and OD hit windows in milliseconds, adjusted by the clock rate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitWindows {
    /// Hit window for approach rate i.e. `TimePreempt`.
    pub ar: f64,
    /// Hit window to hit a 300 ("Great").
    pub od_great: f64,
    /// Hit window to hit a 100 ("Ok").
    ///
    /// `None` for osu!catch.
    pub od_ok: Option<f64>,
    /// Hit window to hit a 50 ("Meh").
    ///
    /// Only present for osu!standard.
    pub od_meh: Option<f64>,
}

/// A builder for [`BeatmapAttributes`] and [`HitWindows`].
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct BeatmapAttributesBuilder {
    mode: GameMode,
    ar: ModsDependent,
    od: ModsDependent,
    cs: ModsDependent,
    hp: ModsDependent,
    mods: GameMods,
    clock_rate: Option<f64>,
}

impl BeatmapAttributesBuilder {
    const PREEMPT_MIN: f64 = 450.0;
    const PREEMPT_MID: f64 = 1200.0;
    const PREEMPT_MAX: f64 = 1800.0;

    const OSU_GREAT: (f64, f64, f64) = (80.0, 50.0, 20.0);
    const OSU_OK: (f64, f64, f64) = (140.0, 100.0, 60.0);
    const OSU_MEH: (f64, f64, f64) = (200.0, 150.0, 100.0);

    const TAIKO_GREAT: (f64, f64, f64) = (50.0, 35.0, 20.0);
    const TAIKO_OK: (f64, f64, f64) = (120.0, 80.0, 50.0);

    /// Create a new [`BeatmapAttributesBuilder`].
    ///
    /// The mode will be `GameMode::Osu` and attributes are set to `5.0`.
    pub const fn new() -> Self {
        Self {
            mode: GameMode::Osu,
            ar: ModsDependent::new(5.0),
            od: ModsDependent::new(5.0),
            cs: ModsDependent::new(5.0),
            hp: ModsDependent::new(5.0),
            mods: GameMods::DEFAULT,
            clock_rate: None,
        }
    }

    /// Use the given [`Beatmap`]'s attributes and mode.
    pub fn map<M: IGameMode>(self, map: &Beatmap<M>) -> Self {
        Self {
            mode: M::MODE,
            ar: ModsDependent::new(map.ar),
            od: ModsDependent::new(map.od),
            cs: ModsDependent::new(map.cs),
            hp: ModsDependent::new(map.hp),
            ..self
        }
    }

    /// Specify the approach rate.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub fn ar(self, ar: f32, with_mods: bool) -> Self {
        Self {
            ar: ModsDependent {
                value: ar,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the overall difficulty.
    ///
    /// See [`ar`](Self::ar) for `with_mods`.
    pub fn od(self, od: f32, with_mods: bool) -> Self {
        Self {
            od: ModsDependent {
                value: od,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the circle size.
    ///
    /// See [`ar`](Self::ar) for `with_mods`.
    pub fn cs(self, cs: f32, with_mods: bool) -> Self {
        Self {
            cs: ModsDependent {
                value: cs,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the drain rate.
    ///
    /// See [`ar`](Self::ar) for `with_mods`.
    pub fn hp(self, hp: f32, with_mods: bool) -> Self {
        Self {
            hp: ModsDependent {
                value: hp,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the mods.
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Specify a custom clock rate.
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate),
            ..self
        }
    }

    /// Specify a [`GameMode`].
    pub fn mode(self, mode: GameMode) -> Self {
        Self { mode, ..self }
    }

    /// Specify all settings through [`Difficulty`].
    pub fn difficulty(self, difficulty: &Difficulty) -> Self {
        let mods = difficulty.get_mods();

        let custom = |value: Option<f64>, fallback: ModsDependent| {
            value.map_or(fallback, |value| ModsDependent::new(value as f32))
        };

        let ar = custom(mods.ar(), self.ar);
        let od = custom(mods.od(), self.od);
        let cs = custom(mods.cs(), self.cs);
        let hp = custom(mods.hp(), self.hp);

        Self {
            mode: self.mode,
            ar: difficulty.get_ar().unwrap_or(ar),
            od: difficulty.get_od().unwrap_or(od),
            cs: difficulty.get_cs().unwrap_or(cs),
            hp: difficulty.get_hp().unwrap_or(hp),
            mods: mods.clone(),
            clock_rate: Some(difficulty.get_clock_rate()),
        }
    }

    fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    fn mod_mult(&self, value: ModsDependent) -> f64 {
        let value = f64::from(value.value);

        if value.is_nan() {
            return value;
        }

        if self.mods.hr() {
            f64::min(value * 1.4, 10.0)
        } else if self.mods.ez() {
            value * 0.5
        } else {
            value
        }
    }

    fn raw(&self, value: ModsDependent) -> f64 {
        if value.with_mods {
            f64::from(value.value)
        } else {
            self.mod_mult(value)
        }
    }

    /// Calculate the AR and OD hit windows.
    pub fn hit_windows(&self) -> HitWindows {
        let clock_rate = self.get_clock_rate();
        let ar_clock_rate = if self.ar.with_mods { 1.0 } else { clock_rate };
        let od_clock_rate = if self.od.with_mods { 1.0 } else { clock_rate };

        let raw_ar = self.raw(self.ar);
        let raw_od = self.raw(self.od);

        let preempt = difficulty_range(
            raw_ar,
            Self::PREEMPT_MAX,
            Self::PREEMPT_MID,
            Self::PREEMPT_MIN,
        ) / ar_clock_rate;

        let window = |(min, mid, max): (f64, f64, f64)| {
            difficulty_range(raw_od, min, mid, max) / od_clock_rate
        };

        match self.mode {
            GameMode::Taiko => HitWindows {
                ar: preempt,
                od_great: window(Self::TAIKO_GREAT),
                od_ok: Some(window(Self::TAIKO_OK)),
                od_meh: None,
            },
            GameMode::Catch => HitWindows {
                ar: preempt,
                od_great: window(Self::OSU_GREAT),
                od_ok: None,
                od_meh: None,
            },
            GameMode::Osu | GameMode::Mania => HitWindows {
                ar: preempt,
                od_great: window(Self::OSU_GREAT),
                od_ok: Some(window(Self::OSU_OK)),
                od_meh: Some(window(Self::OSU_MEH)),
            },
        }
    }

    /// Calculate the [`BeatmapAttributes`].
    pub fn build(&self) -> BeatmapAttributes {
        let clock_rate = self.get_clock_rate();

        // HP
        let hp = if self.hp.with_mods {
            f64::from(self.hp.value)
        } else {
            f64::min(
                f64::from(self.hp.value) * self.mods.od_ar_hp_multiplier(),
                10.0,
            )
        };

        // CS
        let mut cs = f64::from(self.cs.value);

        if !self.cs.with_mods {
            if self.mods.hr() {
                cs = f64::min(cs * 1.3, 10.0);
            } else if self.mods.ez() {
                cs *= 0.5;
            }
        }

        let hit_windows = self.hit_windows();
        let preempt = hit_windows.ar;

        // AR
        let ar = if preempt > Self::PREEMPT_MID {
            (Self::PREEMPT_MAX - preempt) / 120.0
        } else {
            (Self::PREEMPT_MID - preempt) / 150.0 + 5.0
        };

        // OD
        let great = hit_windows.od_great;

        let od = match self.mode {
            GameMode::Taiko => {
                let (min, mid, _) = Self::TAIKO_GREAT;

                (min - great) / (min - mid) * 5.0
            }
            GameMode::Catch => self.raw(self.od),
            GameMode::Osu | GameMode::Mania => (Self::OSU_GREAT.0 - great) / 6.0,
        };

        BeatmapAttributes {
            ar,
            od,
            cs,
            hp,
            clock_rate,
            hit_windows,
        }
    }
}

impl Default for BeatmapAttributesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: IGameMode> From<&Beatmap<M>> for BeatmapAttributesBuilder {
    fn from(map: &Beatmap<M>) -> Self {
        Self::new().map(map)
    }
}

/// Maps a difficulty setting in `[0, 10]` onto a value range that is
/// `mid` at 5 and `min` / `max` at 0 / 10 respectively.
pub fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid + (mid - min) * (difficulty - 5.0) / 5.0
    } else {
        mid
    }
}

#[cfg(test)]
mod tests {
    use crate::{osu::Osu, taiko::Taiko};

    use super::*;

    #[test]
    fn difficulty_range_anchors() {
        assert!((difficulty_range(0.0, 80.0, 50.0, 20.0) - 80.0).abs() < 1e-9);
        assert!((difficulty_range(5.0, 80.0, 50.0, 20.0) - 50.0).abs() < 1e-9);
        assert!((difficulty_range(10.0, 80.0, 50.0, 20.0) - 20.0).abs() < 1e-9);
        assert!((difficulty_range(9.0, 1800.0, 1200.0, 450.0) - 600.0).abs() < 1e-9);
    }

    #[test]
    fn consider_mods() {
        let attrs = BeatmapAttributesBuilder::new()
            .ar(8.5, false)
            .mods(16) // HR
            .build();

        assert!((attrs.ar - 10.0).abs() < 1e-9, "{}", attrs.ar);
    }

    #[test]
    fn skip_mods() {
        let attrs = BeatmapAttributesBuilder::new()
            .ar(8.5, true)
            .mods(16) // HR
            .build();

        assert!((attrs.ar - 8.5).abs() < 1e-9, "{}", attrs.ar);
    }

    #[test]
    fn clock_rate_adjusts_od() {
        let attrs = BeatmapAttributesBuilder::new()
            .od(8.0, false)
            .mods(64) // DT
            .build();

        // 80 - 6 * 8 = 32ms great window, sped up to 21.33ms
        assert!((attrs.hit_windows.od_great - 32.0 / 1.5).abs() < 1e-9);
        assert!((attrs.od - (80.0 - 32.0 / 1.5) / 6.0).abs() < 1e-9);
        assert!(attrs.hit_windows.od_meh.is_some());
    }

    #[test]
    fn taiko_windows() {
        let map = Beatmap::<Taiko>::new(Vec::new()).od(5.0);
        let attrs = BeatmapAttributesBuilder::from(&map).build();

        assert!((attrs.hit_windows.od_great - 35.0).abs() < 1e-9);
        assert_eq!(attrs.hit_windows.od_ok, Some(80.0));
        assert!(attrs.hit_windows.od_meh.is_none());
        assert!((attrs.od - 5.0).abs() < 1e-9);
    }

    #[test]
    fn from_map() {
        let map = Beatmap::<Osu>::new(Vec::new()).ar(9.0).cs(4.0);
        let attrs = BeatmapAttributesBuilder::from(&map).mods(2).build(); // EZ

        assert!((attrs.cs - 2.0).abs() < 1e-9);
        assert!((attrs.ar - 4.5).abs() < 1e-9, "{}", attrs.ar);
    }
}
