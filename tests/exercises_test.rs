use spellbook::config::grimoire::{RetryConfig, TimerConfig};
use spellbook::core::closures::{mage_counter, memory_vault};
use spellbook::core::decorators::{retry_spell, spell_timer, PowerValidator};
use spellbook::core::functools::{memoized_fibonacci, spell_reducer, MAX_FIBONACCI_INDEX};
use spellbook::core::transforms::{artifact_sorter, mage_stats, power_filter};
use spellbook::{ExerciseRunner, GrimoireConfig};
use std::cell::Cell;

fn quick_grimoire() -> GrimoireConfig {
    GrimoireConfig {
        timer: TimerConfig { cast_delay_ms: 0 },
        ..GrimoireConfig::default()
    }
}

#[test]
fn test_every_exercise_runs_standalone() {
    let runner = ExerciseRunner::with_all_exercises(quick_grimoire());
    for name in runner.names() {
        let mut out = Vec::new();
        runner
            .run_named(name, &mut out)
            .unwrap_or_else(|e| panic!("exercise {} failed: {}", name, e));
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("\nTesting "), "{} printed: {:?}", name, output);
    }
}

#[test]
fn test_run_all_prints_every_sentinel() {
    let runner = ExerciseRunner::with_all_exercises(quick_grimoire());
    let mut out = Vec::new();
    assert_eq!(runner.run_all(&mut out).unwrap(), 5);
    let output = String::from_utf8(out).unwrap();

    for sentinel in [
        "Spell fizzled",
        "Memory not found",
        "Invalid operation",
        "Unknown spell",
        "Insufficient power for this spell",
    ] {
        assert!(output.contains(sentinel), "missing {:?}", sentinel);
    }

    let transforms = output.find("Testing artifact sorter...").unwrap();
    let decorators = output.find("Testing spell timer...").unwrap();
    assert!(transforms < decorators);
}

#[test]
fn test_exhausted_retry_sentinel() {
    let grimoire = GrimoireConfig {
        retry: RetryConfig {
            max_attempts: 3,
            failures_before_success: 3,
        },
        ..quick_grimoire()
    };
    let runner = ExerciseRunner::with_all_exercises(grimoire);
    let mut out = Vec::new();
    runner.run_named("decorators", &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Spell casting failed after 3 attempts"));
}

#[test]
fn test_default_sample_data_results() {
    let grimoire = GrimoireConfig::default();

    let strongest = &artifact_sorter(&grimoire.artifacts)[0];
    assert_eq!(strongest.name, "Ice Wand");

    let filtered = power_filter(&grimoire.mages, grimoire.min_power);
    assert_eq!(filtered.len(), 3);

    let stats = mage_stats(&grimoire.mages).unwrap();
    assert_eq!(stats.most_powerful.name, "Sage");
    assert_eq!(stats.average_power, 60.0);

    assert_eq!(spell_reducer(&grimoire.reducer_values, "add").unwrap(), 35);
    assert_eq!(memoized_fibonacci(grimoire.fibonacci_terms - 1).unwrap(), 34);
}

#[test]
fn test_wrappers_compose() {
    let attempts = Cell::new(0);
    let guarded = PowerValidator::new(5).wrap(|power: u32| power * 2);
    let timed = spell_timer("guarded", guarded);
    let mut retried = retry_spell(2).unwrap().wrap(|power: u32| {
        attempts.set(attempts.get() + 1);
        timed(power)
    });

    assert_eq!(retried(7).unwrap(), 14);
    assert!(retried(1).is_err());
    // first call: 1, failing call: 2 attempts
    assert_eq!(attempts.get(), 3);
}

#[test]
fn test_fibonacci_past_u128_range_is_an_error() {
    assert!(memoized_fibonacci(MAX_FIBONACCI_INDEX).is_ok());
    assert!(memoized_fibonacci(200_000).is_err());
}

#[test]
fn test_counter_state_is_private() {
    let mut first = mage_counter();
    let mut second = mage_counter();
    assert_eq!((first(), first(), second()), (1, 2, 1));
}

#[test]
fn test_memory_vault_holds_strings() {
    let vault = memory_vault::<String>();
    vault.store("spell", "Lumos".to_string());
    assert_eq!(vault.recall("spell").unwrap(), "Lumos");
}
