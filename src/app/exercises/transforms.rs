use crate::config::grimoire::GrimoireConfig;
use crate::core::transforms::{artifact_sorter, mage_stats, power_filter, spell_transformer};
use crate::domain::ports::Exercise;
use crate::utils::error::Result;
use std::io::Write;

/// Sorting, filtering, mapping and aggregating the sample artifacts and mages.
pub struct TransformsExercise;

impl Exercise for TransformsExercise {
    fn name(&self) -> &'static str {
        "transforms"
    }

    fn run(&self, grimoire: &GrimoireConfig, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\nTesting artifact sorter...")?;
        for artifact in artifact_sorter(&grimoire.artifacts) {
            writeln!(out, "{}", serde_json::to_string(&artifact)?)?;
        }

        writeln!(out, "\nTesting power filter...")?;
        let filtered_mages = power_filter(&grimoire.mages, grimoire.min_power);
        tracing::debug!(
            "{} of {} mages reach power {}",
            filtered_mages.len(),
            grimoire.mages.len(),
            grimoire.min_power
        );
        for mage in &filtered_mages {
            writeln!(out, "{}", serde_json::to_string(mage)?)?;
        }

        writeln!(out, "\nTesting spell transformer...")?;
        writeln!(out, "{}", spell_transformer(&grimoire.spells).join(" "))?;

        writeln!(out, "\nTesting mage stats...")?;
        let stats = mage_stats(&grimoire.mages)?;
        writeln!(out, "most_powerful: {}", serde_json::to_string(&stats.most_powerful)?)?;
        writeln!(out, "least_powerful: {}", serde_json::to_string(&stats.least_powerful)?)?;
        writeln!(out, "average_power: {:.1}", stats.average_power)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Mage;

    fn run_to_string(grimoire: &GrimoireConfig) -> Result<String> {
        let mut out = Vec::new();
        TransformsExercise.run(grimoire, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prints_default_demonstration() {
        let output = run_to_string(&GrimoireConfig::default()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        let sorter = lines
            .iter()
            .position(|l| *l == "Testing artifact sorter...")
            .unwrap();
        assert_eq!(
            lines[sorter + 1],
            r#"{"name":"Ice Wand","power":90,"type":"armor"}"#
        );
        assert_eq!(
            lines[sorter + 4],
            r#"{"name":"Water Chalice","power":74,"type":"weapon"}"#
        );

        assert!(output.contains(r#"{"name":"Sage","power":67,"element":"ice"}"#));
        assert!(output.contains("* shield * * tsunami * * blizzard * * tornado *"));
        assert!(output.contains(r#"most_powerful: {"name":"Sage","power":67,"element":"ice"}"#));
        assert!(output.contains(r#"least_powerful: {"name":"Morgan","power":51,"element":"earth"}"#));
        assert!(output.contains("average_power: 60.0"));
    }

    #[test]
    fn test_power_filter_section_skips_weak_mages() {
        let output = run_to_string(&GrimoireConfig::default()).unwrap();
        let section = output
            .split("Testing power filter...")
            .nth(1)
            .and_then(|rest| rest.split("Testing spell transformer...").next())
            .unwrap();
        assert_eq!(section.trim().lines().count(), 3);
        assert!(!section.contains("River"));
    }

    #[test]
    fn test_fails_without_mages() {
        let grimoire = GrimoireConfig {
            mages: Vec::<Mage>::new(),
            ..GrimoireConfig::default()
        };
        assert!(run_to_string(&grimoire).is_err());
    }
}
