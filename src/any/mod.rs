pub use self::difficulty::{
    filter::ObjectFilter, inspect::InspectDifficulty, skills::StrainPeak, Difficulty,
    ModsDependent,
};

pub mod difficulty;
