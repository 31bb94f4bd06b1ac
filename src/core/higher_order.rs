use serde::{Deserialize, Serialize};

pub const FIZZLED: &str = "Spell fizzled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellKind {
    Harmful,
    Helpful,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spell {
    pub name: String,
    pub kind: SpellKind,
    power: u32,
}

impl Spell {
    pub fn new(name: &str, kind: SpellKind, power: u32) -> Self {
        Self {
            name: name.to_string(),
            kind,
            power,
        }
    }

    pub fn cast(&self, target: &str) -> String {
        match self.kind {
            SpellKind::Harmful => format!("{} hits {}", self.name, target),
            SpellKind::Helpful => format!("{} {}", self.name, target),
        }
    }

    pub fn power(&self) -> u32 {
        self.power
    }
}

/// Casts both spells on the same target and hands back both results.
pub fn spell_combiner<F, G, A, B>(first: F, second: G) -> impl Fn(&str) -> (A, B)
where
    F: Fn(&str) -> A,
    G: Fn(&str) -> B,
{
    move |target: &str| (first(target), second(target))
}

pub fn power_amplifier<F>(base_spell: F, multiplier: u32) -> impl Fn() -> u32
where
    F: Fn() -> u32,
{
    move || base_spell().saturating_mul(multiplier)
}

pub fn conditional_caster<C, F>(condition: C, spell: F) -> impl Fn(&str) -> String
where
    C: Fn(&str) -> bool,
    F: Fn(&str) -> String,
{
    move |target: &str| {
        if condition(target) {
            spell(target)
        } else {
            FIZZLED.to_string()
        }
    }
}

pub fn spell_sequence<'a>(
    spells: Vec<Box<dyn Fn(&str) -> String + 'a>>,
) -> impl Fn(&str) -> Vec<String> + 'a {
    move |target: &str| spells.iter().map(|spell| spell(target)).collect()
}
