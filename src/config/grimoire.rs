use crate::core::functools::MAX_FIBONACCI_INDEX;
use crate::domain::model::{Artifact, Mage};
use crate::utils::error::{Result, SpellError};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_positive_number, validate_range,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 示範最多印出 F(0)..=F(MAX_FIBONACCI_INDEX)
pub const MAX_FIBONACCI_TERMS: u32 = MAX_FIBONACCI_INDEX + 1;

/// 所有練習共用的示範資料；每個欄位都可省略，省略時使用預設值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrimoireConfig {
    pub artifacts: Vec<Artifact>,
    pub mages: Vec<Mage>,
    pub spells: Vec<String>,
    pub min_power: u32,
    pub reducer_values: Vec<i64>,
    pub fibonacci_terms: u32,
    pub timer: TimerConfig,
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub cast_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub failures_before_success: u32,
}

impl Default for GrimoireConfig {
    fn default() -> Self {
        Self {
            artifacts: vec![
                Artifact::new("Ice Wand", 90, "armor"),
                Artifact::new("Water Chalice", 74, "weapon"),
                Artifact::new("Lightning Rod", 86, "weapon"),
                Artifact::new("Crystal Orb", 81, "relic"),
            ],
            mages: vec![
                Mage::new("River", 58, "fire"),
                Mage::new("Morgan", 62, "wind"),
                Mage::new("Sage", 67, "ice"),
                Mage::new("Morgan", 51, "earth"),
                Mage::new("Ash", 62, "earth"),
            ],
            spells: ["shield", "tsunami", "blizzard", "tornado"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_power: 60,
            reducer_values: vec![10, 20, 5],
            fibonacci_terms: 10,
            timer: TimerConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { cast_delay_ms: 420 }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            failures_before_success: 2,
        }
    }
}

impl GrimoireConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${MIN_POWER})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SpellError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for GrimoireConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("mages", &self.mages)?;
        for mage in &self.mages {
            validate_non_empty_string("mages.name", &mage.name)?;
        }
        for artifact in &self.artifacts {
            validate_non_empty_string("artifacts.name", &artifact.name)?;
        }
        validate_non_empty_list("reducer_values", &self.reducer_values)?;
        validate_range("fibonacci_terms", self.fibonacci_terms, 0, MAX_FIBONACCI_TERMS)?;
        validate_positive_number("retry.max_attempts", self.retry.max_attempts, 1)?;
        Ok(())
    }
}
