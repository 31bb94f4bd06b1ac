// Domain layer: sample data models and the exercise port.

pub mod model;
pub mod ports;
