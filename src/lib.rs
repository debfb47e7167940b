//! Strain-based difficulty calculation for osu!standard, osu!taiko, and
//! osu!catch.
//!
//! A [`Beatmap`] holds the ordered hit objects of one mode together with its
//! difficulty settings. A [`Difficulty`] calculator turns such a map into the
//! mode's difficulty attributes, or into its raw strain peaks when the
//! difficulty should be plotted over time.
//!
//! ## Usage
//!
//! ```
//! use rosu_strain::{Beatmap, Difficulty, GameMods};
//! use rosu_strain::model::hit_object::{HitObject, Pos};
//! use rosu_strain::osu::Osu;
//!
//! let hit_objects = (0..16)
//!     .map(|i| HitObject::circle(Pos::new(100.0 + 20.0 * i as f32, 192.0), 250.0 * f64::from(i), 36.0))
//!     .collect();
//!
//! let map = Beatmap::<Osu>::new(hit_objects).ar(9.0).od(8.0);
//!
//! let attrs = Difficulty::new()
//!     .mods(GameMods::from(64)) // DT
//!     .calculate(&map)
//!     .unwrap();
//!
//! assert!(attrs.stars > 0.0);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features enabled |
//! | `tracing` | Debug events for calculation stages and input validation | [`tracing`]
//!
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links, rustdoc::missing_crate_level_docs)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::match_same_arms,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::cast_possible_wrap,
    clippy::float_cmp,
    clippy::many_single_char_names,
    clippy::too_many_lines
)]

#[macro_use]
mod util;

/// Types and calculators shared by all modes.
pub mod any;

/// Everything about osu!standard.
pub mod osu;

/// Everything about osu!taiko.
pub mod taiko;

/// Everything about osu!catch.
pub mod catch;

/// Beatmap and mod types.
pub mod model;

#[doc(inline)]
pub use self::{
    any::{Difficulty, StrainPeak},
    model::{beatmap::Beatmap, error::DifficultyError, mode::IGameMode, mods::GameMods},
};
