//! Configuration: environment-driven settings plus shared constants
//! (role names, defaults, constraint names).

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
