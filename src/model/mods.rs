use std::fmt::{Debug, Formatter, Result as FmtResult};

use rosu_mods::{
    GameMod, GameModIntermode, GameMods as GameModsLazer, GameModsIntermode, GameModsLegacy,
};

/// Collection of game mods.
///
/// The difficulty calculation only ever asks whether a certain mod is
/// present, plus the resulting clock rate.
///
/// This type can be created through its `From<T>` implementations where `T`
/// can be
/// - `u32`
/// - [`rosu_mods::GameModsLegacy`]
/// - [`rosu_mods::GameMods`]
/// - [`rosu_mods::GameModsIntermode`]
/// - [`&rosu_mods::GameModsIntermode`](rosu_mods::GameModsIntermode)
///
/// # Example
///
/// ```
/// use rosu_strain::GameMods;
/// use rosu_mods::{GameModsIntermode, GameModsLegacy, GameMods as GameModsLazer};
///
/// let int = GameMods::from(64 + 8);
/// let legacy = GameMods::from(GameModsLegacy::Hidden | GameModsLegacy::Easy);
/// let lazer = GameMods::from(GameModsLazer::new());
/// let intermode = GameMods::from(GameModsIntermode::new());
/// ```
#[derive(Clone, PartialEq)]
pub struct GameMods {
    inner: GameModsInner,
}

impl Debug for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.inner {
            GameModsInner::Lazer(ref mods) => Debug::fmt(mods, f),
            GameModsInner::Intermode(ref mods) => Debug::fmt(mods, f),
            GameModsInner::Legacy(ref mods) => Debug::fmt(mods, f),
        }
    }
}

/// Inner type of [`GameMods`] so that remote types contained in variants don't
/// need to be re-exported.
#[derive(Clone, PartialEq)]
enum GameModsInner {
    Lazer(GameModsLazer),
    Intermode(GameModsIntermode),
    Legacy(GameModsLegacy),
}

impl GameMods {
    pub(crate) const DEFAULT: Self = Self {
        inner: GameModsInner::Legacy(GameModsLegacy::NoMod),
    };

    /// Returns the mods' clock rate.
    ///
    /// In case of variable clock rates like for `WindUp`, this will return
    /// `1.0`.
    pub fn clock_rate(&self) -> f64 {
        match self.inner {
            GameModsInner::Lazer(ref mods) => mods.clock_rate().unwrap_or(1.0),
            GameModsInner::Intermode(ref mods) => mods.legacy_clock_rate(),
            GameModsInner::Legacy(mods) => mods.clock_rate(),
        }
    }

    pub(crate) fn od_ar_hp_multiplier(&self) -> f64 {
        if self.hr() {
            1.4
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }
}

impl GameMods {
    fn contains(&self, intermode: GameModIntermode, legacy: Option<GameModsLegacy>) -> bool {
        match self.inner {
            GameModsInner::Lazer(ref mods) => mods.contains_intermode(intermode),
            GameModsInner::Intermode(ref mods) => mods.contains(intermode),
            GameModsInner::Legacy(mods) => legacy.is_some_and(|legacy| mods.contains(legacy)),
        }
    }

    /// First custom value of a `DifficultyAdjust` mod.
    ///
    /// Only lazer mods carry settings.
    fn difficulty_adjust(&self, value: impl Fn(&GameMod) -> Option<f64>) -> Option<f64> {
        match self.inner {
            GameModsInner::Lazer(ref mods) => mods.iter().find_map(value),
            GameModsInner::Intermode(_) | GameModsInner::Legacy(_) => None,
        }
    }

    pub(crate) fn ar(&self) -> Option<f64> {
        self.difficulty_adjust(|gamemod| match gamemod {
            GameMod::DifficultyAdjustOsu(m) => m.approach_rate,
            GameMod::DifficultyAdjustCatch(m) => m.approach_rate,
            _ => None,
        })
    }

    pub(crate) fn cs(&self) -> Option<f64> {
        self.difficulty_adjust(|gamemod| match gamemod {
            GameMod::DifficultyAdjustOsu(m) => m.circle_size,
            GameMod::DifficultyAdjustCatch(m) => m.circle_size,
            _ => None,
        })
    }

    pub(crate) fn hp(&self) -> Option<f64> {
        self.difficulty_adjust(|gamemod| match gamemod {
            GameMod::DifficultyAdjustOsu(m) => m.drain_rate,
            GameMod::DifficultyAdjustTaiko(m) => m.drain_rate,
            GameMod::DifficultyAdjustCatch(m) => m.drain_rate,
            _ => None,
        })
    }

    pub(crate) fn od(&self) -> Option<f64> {
        self.difficulty_adjust(|gamemod| match gamemod {
            GameMod::DifficultyAdjustOsu(m) => m.overall_difficulty,
            GameMod::DifficultyAdjustTaiko(m) => m.overall_difficulty,
            GameMod::DifficultyAdjustCatch(m) => m.overall_difficulty,
            _ => None,
        })
    }
}

/// Generates `GameMods::$fn` checking for the given mod. Mods without a
/// legacy bit are never contained in [`GameModsLegacy`].
macro_rules! impl_has_mod {
    ( $( $fn:ident: $name:ident $( | $legacy:ident )? ; )* ) => {
        impl GameMods {
            $(
                #[doc = concat!("Check whether [`GameMods`] contain `", stringify!($name), "`.")]
                pub fn $fn(&self) -> bool {
                    self.contains(GameModIntermode::$name, impl_has_mod!(@legacy $( $legacy )?))
                }
            )*
        }
    };

    ( @legacy $legacy:ident ) => { Some(GameModsLegacy::$legacy) };
    ( @legacy ) => { None };
}

impl_has_mod! {
    ez: Easy | Easy;
    td: TouchDevice | TouchDevice;
    hd: Hidden | Hidden;
    hr: HardRock | HardRock;
    rx: Relax | Relax;
    fl: Flashlight | Flashlight;
    so: SpunOut | SpunOut;
    ap: Autopilot | Autopilot;
    bl: Blinds;
    tc: Traceable;
}

impl Default for GameMods {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<GameModsLazer> for GameMods {
    fn from(mods: GameModsLazer) -> Self {
        Self {
            inner: GameModsInner::Lazer(mods),
        }
    }
}

impl From<GameModsIntermode> for GameMods {
    fn from(mods: GameModsIntermode) -> Self {
        Self {
            inner: GameModsInner::Intermode(mods),
        }
    }
}

impl From<&GameModsIntermode> for GameMods {
    fn from(mods: &GameModsIntermode) -> Self {
        // If only legacy mods are set, use `GameModsLegacy` and thus avoid
        // allocating an owned `GameModsIntermode` instance.
        match mods.checked_bits() {
            Some(bits) => bits.into(),
            None => mods.to_owned().into(),
        }
    }
}

impl From<GameModsLegacy> for GameMods {
    fn from(mods: GameModsLegacy) -> Self {
        Self {
            inner: GameModsInner::Legacy(mods),
        }
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        GameModsLegacy::from_bits(bits).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_bits() {
        let mods = GameMods::from(8 + 16 + 64 + 1024);

        assert!(mods.hd());
        assert!(mods.hr());
        assert!(mods.fl());
        assert!(!mods.so());
        assert!(!mods.ez());
        assert!(!mods.bl());
        assert!((mods.clock_rate() - 1.5).abs() < f64::EPSILON);
        assert!((mods.od_ar_hp_multiplier() - 1.4).abs() < f64::EPSILON);
    }

    #[test]
    fn intermode_only_mods() {
        let mut intermode = GameModsIntermode::new();
        intermode.insert(GameModIntermode::Blinds);
        intermode.insert(GameModIntermode::Traceable);

        let mods = GameMods::from(intermode);

        assert!(mods.bl());
        assert!(mods.tc());
        assert!((mods.clock_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_custom_attributes_for_legacy() {
        let mods = GameMods::from(GameModsLegacy::Easy);

        assert!(mods.ar().is_none());
        assert!(mods.od().is_none());
        assert!((mods.od_ar_hp_multiplier() - 0.5).abs() < f64::EPSILON);
    }
}
