use crate::config::grimoire::GrimoireConfig;
use crate::core::functools::{
    memoized_fibonacci, partial_enchanter, spell_dispatcher, spell_reducer, UNKNOWN_SPELL,
};
use crate::domain::ports::Exercise;
use crate::utils::error::Result;
use std::io::Write;

/// Folding, partial application and memoization.
pub struct FunctoolsExercise;

impl Exercise for FunctoolsExercise {
    fn name(&self) -> &'static str {
        "functools"
    }

    fn run(&self, grimoire: &GrimoireConfig, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\nTesting spell reducer...")?;
        for (label, operation) in [
            ("Sum", "add"),
            ("Product", "multiply"),
            ("Max", "max"),
            ("Min", "min"),
            ("Invalid operation", "divide"),
        ] {
            match spell_reducer(&grimoire.reducer_values, operation) {
                Ok(value) => writeln!(out, "{}: {}", label, value)?,
                Err(e) => writeln!(out, "{}: {}", label, e.user_friendly_message())?,
            }
        }

        writeln!(out, "\nTesting partial enchanter...")?;
        let enchanters = partial_enchanter(|power, element, item| {
            format!("{} Enchantment on {} ({} power)", element, item, power)
        });
        for (key, item) in [
            ("fire_enchant", "Sword"),
            ("ice_enchant", "Shield"),
            ("lightning_enchant", "Bow"),
        ] {
            if let Some(enchant) = enchanters.get(key) {
                writeln!(out, "{}", enchant(item))?;
            }
        }

        writeln!(out, "\nTesting memoized fibonacci...")?;
        for i in 0..grimoire.fibonacci_terms {
            writeln!(out, "Fibonacci({}) = {}", i, memoized_fibonacci(i)?)?;
        }

        writeln!(out, "\nTesting spell dispatcher...")?;
        let dispatcher = spell_dispatcher();
        for spell_name in ["fireball", "heal", "lightning", "unknown_spell", "fireball"] {
            let message = dispatcher.call(spell_name.to_string()).unwrap_or(UNKNOWN_SPELL);
            writeln!(out, "{}", message)?;
        }
        let info = dispatcher.cache_info();
        writeln!(
            out,
            "Dispatcher cache: {} hits, {} misses, {} entries",
            info.hits, info.misses, info.size
        )?;

        Ok(())
    }
}
