#[macro_use]
mod macros;

#[macro_use]
pub mod log;

pub mod difficulty;
pub mod float_ext;
