use crate::domain::model::{Artifact, Mage, MageStats};
use crate::utils::error::{Result, SpellError};
use std::cmp::Reverse;

/// Strongest artifact first; ties keep their input order.
pub fn artifact_sorter(artifacts: &[Artifact]) -> Vec<Artifact> {
    let mut sorted = artifacts.to_vec();
    sorted.sort_by_key(|artifact| Reverse(artifact.power));
    sorted
}

pub fn power_filter(mages: &[Mage], min_power: u32) -> Vec<Mage> {
    mages
        .iter()
        .filter(|mage| mage.power >= min_power)
        .cloned()
        .collect()
}

pub fn spell_transformer<S: AsRef<str>>(spells: &[S]) -> Vec<String> {
    spells
        .iter()
        .map(|spell| format!("* {} *", spell.as_ref()))
        .collect()
}

/// On ties the earliest mage wins both extremes.
pub fn mage_stats(mages: &[Mage]) -> Result<MageStats> {
    let empty = || SpellError::EmptyInput {
        what: "mages".to_string(),
    };

    let most_powerful = mages
        .iter()
        .reduce(|best, mage| if mage.power > best.power { mage } else { best })
        .ok_or_else(empty)?;
    let least_powerful = mages
        .iter()
        .reduce(|worst, mage| if mage.power < worst.power { mage } else { worst })
        .ok_or_else(empty)?;
    let total: u64 = mages.iter().map(|mage| u64::from(mage.power)).sum();

    Ok(MageStats {
        most_powerful: most_powerful.clone(),
        least_powerful: least_powerful.clone(),
        average_power: total as f64 / mages.len() as f64,
    })
}
