use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub power: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Artifact {
    pub fn new(name: &str, power: u32, kind: &str) -> Self {
        Self {
            name: name.to_string(),
            power,
            kind: kind.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mage {
    pub name: String,
    pub power: u32,
    pub element: String,
}

impl Mage {
    pub fn new(name: &str, power: u32, element: &str) -> Self {
        Self {
            name: name.to_string(),
            power,
            element: element.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MageStats {
    pub most_powerful: Mage,
    pub least_powerful: Mage,
    pub average_power: f64,
}
