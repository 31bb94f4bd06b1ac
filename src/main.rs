use clap::Parser;
use spellbook::utils::logger::{self, LogFormat};
use spellbook::utils::validation::Validate;
use spellbook::{CliConfig, ExerciseRunner, ExerciseSelection, GrimoireConfig, SpellError};

fn exit_with(context: &str, e: &SpellError) -> ! {
    tracing::error!("❌ {}: {} (Category: {:?})", context, e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    let format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_cli_logger(config.verbose, format);

    tracing::info!("Starting spellbook CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 載入示範資料
    let grimoire = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading grimoire from: {}", path);
            GrimoireConfig::from_file(path)
                .unwrap_or_else(|e| exit_with(&format!("Failed to load grimoire '{}'", path), &e))
        }
        None => GrimoireConfig::default(),
    };

    // 驗證配置
    if let Err(e) = grimoire.validate() {
        exit_with("Grimoire validation failed", &e);
    }

    let runner = ExerciseRunner::with_all_exercises(grimoire);

    if config.list {
        for name in runner.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let mut stdout = std::io::stdout();
    let outcome = if config.exercises.contains(&ExerciseSelection::All) {
        runner.run_all(&mut stdout).map(|count| {
            tracing::info!("✅ {} exercises completed", count);
        })
    } else {
        config
            .exercises
            .iter()
            .filter_map(|s| s.exercise_name())
            .try_for_each(|name| runner.run_named(name, &mut stdout))
    };

    if let Err(e) = outcome {
        tracing::error!("❌ Exercise run failed (Category: {:?})", e.category());
        return Err(e.into());
    }

    println!();
    Ok(())
}
