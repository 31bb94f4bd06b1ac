use crate::config::grimoire::GrimoireConfig;
use crate::core::decorators::{power_validator, retry_spell, spell_timer, MageGuild};
use crate::domain::ports::Exercise;
use crate::utils::error::Result;
use std::cell::Cell;
use std::io::Write;
use std::time::Duration;

/// Timing, validating and retrying wrapped spells.
///
/// The timer and retry banners come from the wrappers themselves and go to stdout.
pub struct DecoratorsExercise;

impl Exercise for DecoratorsExercise {
    fn name(&self) -> &'static str {
        "decorators"
    }

    fn run(&self, grimoire: &GrimoireConfig, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\nTesting spell timer...")?;
        out.flush()?;
        let delay = Duration::from_millis(grimoire.timer.cast_delay_ms);
        let fireball = spell_timer("fireball", |_: ()| {
            std::thread::sleep(delay);
            "Fireball cast!"
        });
        writeln!(out, "Result: {}", fireball(()))?;

        writeln!(out, "\nTesting power validator...")?;
        let splash = power_validator(2).wrap(|_power: u32| "Splash!");
        let final_flash = power_validator(10).wrap(|_power: u32| "FINAL FLASH!");
        for outcome in [splash(3), final_flash(3)] {
            match outcome {
                Ok(message) => writeln!(out, "{}", message)?,
                Err(e) => writeln!(out, "{}", e.user_friendly_message())?,
            }
        }

        writeln!(out, "\nTesting retry spell...")?;
        out.flush()?;
        let failures = grimoire.retry.failures_before_success;
        let attempt_count = Cell::new(0u32);
        let mut wingardium_leviosa =
            retry_spell(grimoire.retry.max_attempts)?.wrap(|_: ()| {
                attempt_count.set(attempt_count.get() + 1);
                if attempt_count.get() <= failures {
                    Err("C'est Leviosa! et pas Leviossaaa")
                } else {
                    Ok("Wingardium Leviosa!")
                }
            });

        // 第二輪前重設計數，確認每次呼叫都重新計算嘗試次數
        for _ in 0..2 {
            attempt_count.set(0);
            match wingardium_leviosa(()) {
                Ok(message) => writeln!(out, "{}", message)?,
                Err(e) => writeln!(out, "{}", e.user_friendly_message())?,
            }
            writeln!(out)?;
        }

        writeln!(out, "Testing MageGuild...")?;
        let guild = MageGuild::new();
        for name in ["Gandalf the Grey", "Al"] {
            writeln!(out, "{}: {}", name, MageGuild::validate_mage_name(name))?;
        }
        for (spell_name, power) in [("Arcane Blast", 15), ("Minor Spark", 5)] {
            match guild.cast_spell(spell_name, power) {
                Ok(message) => writeln!(out, "{}", message)?,
                Err(e) => writeln!(out, "{}", e.user_friendly_message())?,
            }
        }

        Ok(())
    }
}
