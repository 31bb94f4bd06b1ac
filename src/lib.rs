pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, ExerciseSelection};

pub use crate::config::grimoire::GrimoireConfig;
pub use crate::core::runner::ExerciseRunner;
pub use utils::error::{Result, SpellError};
