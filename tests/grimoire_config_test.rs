use spellbook::utils::validation::Validate;
use spellbook::{ExerciseRunner, GrimoireConfig, SpellError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_grimoire(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_grimoire_from_file() {
    let file = write_grimoire(
        r#"
spells = ["fireball", "frostbolt"]
min_power = 70
reducer_values = [2, 3, 4]
fibonacci_terms = 5

[[artifacts]]
name = "Storm Staff"
power = 95
type = "weapon"

[[mages]]
name = "Merlin"
power = 99
element = "arcane"

[[mages]]
name = "Nimue"
power = 72
element = "water"

[timer]
cast_delay_ms = 0

[retry]
max_attempts = 4
failures_before_success = 1
"#,
    );

    let grimoire = GrimoireConfig::from_file(file.path()).unwrap();
    assert!(grimoire.validate().is_ok());
    assert_eq!(grimoire.mages.len(), 2);
    assert_eq!(grimoire.artifacts[0].kind, "weapon");
    assert_eq!(grimoire.retry.max_attempts, 4);
    assert_eq!(grimoire.timer.cast_delay_ms, 0);

    let runner = ExerciseRunner::with_all_exercises(grimoire);
    let mut out = Vec::new();
    assert_eq!(runner.run_all(&mut out).unwrap(), 5);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains(r#"{"name":"Storm Staff","power":95,"type":"weapon"}"#));
    assert!(output.contains("* fireball * * frostbolt *"));
    assert!(output.contains("Sum: 9\nProduct: 24\n"));
    assert!(output.contains("Fibonacci(4) = 3\n"));
    assert!(!output.contains("Fibonacci(5)"));
}

#[test]
fn test_missing_grimoire_file() {
    let result = GrimoireConfig::from_file("/definitely/not/here/grimoire.toml");
    assert!(matches!(result, Err(SpellError::IoError(_))));
}

#[test]
fn test_grimoire_without_mages_fails_validation() {
    let file = write_grimoire("mages = []\n");
    let grimoire = GrimoireConfig::from_file(file.path()).unwrap();
    let err = grimoire.validate().unwrap_err();
    assert!(matches!(
        err,
        SpellError::InvalidConfigValueError { ref field, .. } if field == "mages"
    ));
}

#[test]
fn test_unset_env_var_is_left_in_place() {
    let result = GrimoireConfig::from_toml_str("min_power = ${SPELLBOOK_SURELY_UNSET_VAR}");
    assert!(matches!(result, Err(SpellError::TomlError(_))));
}
