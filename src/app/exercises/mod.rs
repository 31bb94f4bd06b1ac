pub mod closures;
pub mod decorators;
pub mod functools;
pub mod higher_order;
pub mod transforms;

pub use closures::ClosuresExercise;
pub use decorators::DecoratorsExercise;
pub use functools::FunctoolsExercise;
pub use higher_order::HigherOrderExercise;
pub use transforms::TransformsExercise;
