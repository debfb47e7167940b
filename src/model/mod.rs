pub mod beatmap;
pub mod error;
pub mod hit_object;
pub mod mode;
pub mod mods;
