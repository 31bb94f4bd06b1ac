use crate::config::grimoire::GrimoireConfig;
use crate::core::closures::{enchantment_factory, mage_counter, memory_vault, spell_accumulator};
use crate::domain::ports::Exercise;
use crate::utils::error::Result;
use std::io::Write;

/// Closures capturing private mutable state.
pub struct ClosuresExercise;

impl Exercise for ClosuresExercise {
    fn name(&self) -> &'static str {
        "closures"
    }

    fn run(&self, _grimoire: &GrimoireConfig, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\nTesting mage counter...")?;
        let mut count_mages = mage_counter();
        for i in 1..=3 {
            writeln!(out, "Call {}: {}", i, count_mages())?;
        }

        writeln!(out, "\nTesting spell accumulator...")?;
        let mut accumulate = spell_accumulator(3);
        for i in 1..=3 {
            writeln!(out, "Call {}: {}", i, accumulate())?;
        }

        writeln!(out, "\nTesting enchantment factory...")?;
        let flaming = enchantment_factory("Flaming");
        let frozen = enchantment_factory("Frozen");
        writeln!(out, "{}", flaming("Sword"))?;
        writeln!(out, "{}", frozen("Shield"))?;

        writeln!(out, "\nTesting memory vault...")?;
        let vault = memory_vault::<i64>();
        writeln!(out, "Storing Precious data: {:?}", vault.store("Precious_data", 42))?;
        writeln!(out, "Storing Other data: {:?}", vault.store("Other_data", 100))?;
        for key in ["Precious_data", "Missing_data"] {
            match vault.recall(key) {
                Ok(value) => writeln!(out, "Recalling {}: {}", key, value)?,
                Err(e) => writeln!(out, "Recalling {}: {}", key, e.user_friendly_message())?,
            }
        }

        Ok(())
    }
}
