//! Function wrappers ("decorators"): timing, power validation and naive retry.
//!
//! Each wrapper takes a function and returns a new function with the same
//! argument type, so wrapping composes:
//!
//! ```
//! use spellbook::core::decorators::{spell_timer, PowerValidator};
//!
//! let guarded = PowerValidator::new(10).wrap(|power: u32| format!("cast with {power}"));
//! let timed = spell_timer("guarded", guarded);
//! assert!(timed(3).is_err());
//! assert_eq!(timed(12).unwrap(), "cast with 12");
//! ```

use crate::utils::error::{Result, SpellError};
use std::fmt::Display;
use std::time::Instant;

/// Prints a banner before the call and the elapsed time after it.
pub fn spell_timer<A, R, F>(name: &str, func: F) -> impl Fn(A) -> R
where
    F: Fn(A) -> R,
{
    let name = name.to_string();
    move |arg: A| {
        println!("Casting {}...", name);
        let start_time = Instant::now();
        let result = func(arg);
        let elapsed = start_time.elapsed();
        tracing::debug!("{} took {:?}", name, elapsed);
        println!("Spell completed in {:.2} seconds", elapsed.as_secs_f64());
        result
    }
}

/// Anything carrying a casting power.
pub trait Empowered {
    fn power(&self) -> u32;
}

impl Empowered for u32 {
    fn power(&self) -> u32 {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerValidator {
    min_power: u32,
}

impl PowerValidator {
    pub fn new(min_power: u32) -> Self {
        Self { min_power }
    }

    /// The wrapped function only runs when the argument's power reaches the minimum.
    pub fn wrap<A, R, F>(self, func: F) -> impl Fn(A) -> Result<R>
    where
        A: Empowered,
        F: Fn(A) -> R,
    {
        move |arg: A| {
            let power = arg.power();
            if power >= self.min_power {
                Ok(func(arg))
            } else {
                tracing::debug!("power {} below minimum {}", power, self.min_power);
                Err(SpellError::InsufficientPower {
                    required: self.min_power,
                    actual: power,
                })
            }
        }
    }
}

pub fn power_validator(min_power: u32) -> PowerValidator {
    PowerValidator::new(min_power)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrySpell {
    max_attempts: u32,
}

impl RetrySpell {
    pub fn new(max_attempts: u32) -> Result<Self> {
        crate::utils::validation::validate_positive_number("max_attempts", max_attempts, 1)?;
        Ok(Self { max_attempts })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Calls `func` up to `max_attempts` times, synchronously, stopping at the first success.
    pub fn wrap<A, R, E, F>(self, mut func: F) -> impl FnMut(A) -> Result<R>
    where
        A: Clone,
        E: Display,
        F: FnMut(A) -> std::result::Result<R, E>,
    {
        let max_attempts = self.max_attempts;
        move |arg: A| {
            for attempt in 1..=max_attempts {
                match func(arg.clone()) {
                    Ok(result) => return Ok(result),
                    Err(e) if attempt < max_attempts => {
                        tracing::warn!("attempt {}/{} failed: {}", attempt, max_attempts, e);
                        println!("{}", e);
                        println!(
                            "Spell failed, retrying... (attempt {}/{} attempts)",
                            attempt, max_attempts
                        );
                    }
                    Err(e) => {
                        tracing::error!("giving up after {} attempts: {}", max_attempts, e);
                    }
                }
            }
            Err(SpellError::RetriesExhausted {
                attempts: max_attempts,
            })
        }
    }
}

pub fn retry_spell(max_attempts: u32) -> Result<RetrySpell> {
    RetrySpell::new(max_attempts)
}

pub const GUILD_MIN_POWER: u32 = 10;

#[derive(Debug, Clone, Copy)]
struct GuildCast<'a> {
    spell_name: &'a str,
    power: u32,
}

impl Empowered for GuildCast<'_> {
    fn power(&self) -> u32 {
        self.power
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MageGuild;

impl MageGuild {
    pub fn new() -> Self {
        Self
    }

    /// 名字需超過 3 個字元，且只能包含字母與空白
    pub fn validate_mage_name(name: &str) -> bool {
        name.chars().count() > 3 && name.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
    }

    pub fn cast_spell(&self, spell_name: &str, power: u32) -> Result<String> {
        let cast = power_validator(GUILD_MIN_POWER).wrap(|request: GuildCast<'_>| {
            format!(
                "Successfully cast {} with {} power",
                request.spell_name, request.power
            )
        });
        cast(GuildCast { spell_name, power })
    }
}
