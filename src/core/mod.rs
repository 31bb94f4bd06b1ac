pub mod closures;
pub mod decorators;
pub mod functools;
pub mod higher_order;
pub mod runner;
pub mod transforms;

pub use crate::domain::model::{Artifact, Mage, MageStats};
pub use crate::domain::ports::Exercise;
pub use crate::utils::error::Result;
