pub mod grimoire;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "spellbook")]
#[command(about = "Functional programming exercises with spells and mages")]
pub struct CliConfig {
    /// Exercises to run, in order
    #[arg(value_enum, default_value = "all")]
    pub exercises: Vec<ExerciseSelection>,

    /// Path to a TOML grimoire overriding the sample data
    #[arg(short, long)]
    pub config: Option<String>,

    /// List the available exercises and exit
    #[arg(long)]
    pub list: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExerciseSelection {
    Transforms,
    HigherOrder,
    Closures,
    Functools,
    Decorators,
    All,
}

#[cfg(feature = "cli")]
impl ExerciseSelection {
    /// 對應到 `ExerciseRunner` 使用的練習名稱；`All` 回傳 None
    pub fn exercise_name(self) -> Option<&'static str> {
        match self {
            ExerciseSelection::Transforms => Some("transforms"),
            ExerciseSelection::HigherOrder => Some("higher-order"),
            ExerciseSelection::Closures => Some("closures"),
            ExerciseSelection::Functools => Some("functools"),
            ExerciseSelection::Decorators => Some("decorators"),
            ExerciseSelection::All => None,
        }
    }
}
