use crate::config::grimoire::GrimoireConfig;
use crate::core::higher_order::{
    conditional_caster, power_amplifier, spell_combiner, spell_sequence, Spell, SpellKind,
};
use crate::domain::ports::Exercise;
use crate::utils::error::Result;
use std::io::Write;

const TARGET: &str = "Dragon";

/// Functions that take and return functions.
pub struct HigherOrderExercise;

impl Exercise for HigherOrderExercise {
    fn name(&self) -> &'static str {
        "higher-order"
    }

    fn run(&self, _grimoire: &GrimoireConfig, out: &mut dyn Write) -> Result<()> {
        let fireball = Spell::new("Fireball", SpellKind::Harmful, 10);
        let heal = Spell::new("Heal", SpellKind::Helpful, 8);

        writeln!(out, "\nTesting spell combiner...")?;
        let combined_spell = spell_combiner(|t| fireball.cast(t), |t| heal.cast(t));
        let (first, second) = combined_spell(TARGET);
        writeln!(out, "Combined spell results: {}, {}", first, second)?;

        writeln!(out, "\nTesting power amplifier...")?;
        let mega_fireball = power_amplifier(|| fireball.power(), 3);
        writeln!(out, "Mega Fireball deals {} damage", mega_fireball())?;

        writeln!(out, "\nTesting conditional caster...")?;
        let missed_cast = conditional_caster(|_| false, |t| fireball.cast(t));
        writeln!(out, "Missed cast: {}", missed_cast(TARGET))?;
        let successful_cast = conditional_caster(|_| true, |t| heal.cast(t));
        writeln!(out, "Successful cast: {}", successful_cast(TARGET))?;

        writeln!(out, "\nTesting spell sequence...")?;
        let spells: Vec<Box<dyn Fn(&str) -> String + '_>> = vec![
            Box::new(|t: &str| fireball.cast(t)),
            Box::new(|t: &str| heal.cast(t)),
            Box::new(|t: &str| fireball.cast(t)),
        ];
        let sequence = spell_sequence(spells);
        for result in sequence(TARGET) {
            writeln!(out, "{}", result)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_demonstration() {
        let mut out = Vec::new();
        HigherOrderExercise
            .run(&GrimoireConfig::default(), &mut out)
            .unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("Combined spell results: Fireball hits Dragon, Heal Dragon"));
        assert!(output.contains("Mega Fireball deals 30 damage"));
        assert!(output.contains("Missed cast: Spell fizzled"));
        assert!(output.contains("Successful cast: Heal Dragon"));

        let sequence: Vec<&str> = output
            .split("Testing spell sequence...\n")
            .nth(1)
            .unwrap()
            .lines()
            .collect();
        assert_eq!(
            sequence,
            vec!["Fireball hits Dragon", "Heal Dragon", "Fireball hits Dragon"]
        );
    }
}
