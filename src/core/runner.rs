use crate::app::exercises::{
    ClosuresExercise, DecoratorsExercise, FunctoolsExercise, HigherOrderExercise,
    TransformsExercise,
};
use crate::config::grimoire::GrimoireConfig;
use crate::domain::ports::Exercise;
use crate::utils::error::{Result, SpellError};
use std::io::Write;

/// Runs exercises one after another; nothing flows between them.
pub struct ExerciseRunner {
    exercises: Vec<Box<dyn Exercise>>,
    grimoire: GrimoireConfig,
}

impl ExerciseRunner {
    pub fn new(grimoire: GrimoireConfig) -> Self {
        Self {
            exercises: Vec::new(),
            grimoire,
        }
    }

    /// 依序註冊五個練習
    pub fn with_all_exercises(grimoire: GrimoireConfig) -> Self {
        let mut runner = Self::new(grimoire);
        runner.register(Box::new(TransformsExercise));
        runner.register(Box::new(HigherOrderExercise));
        runner.register(Box::new(ClosuresExercise));
        runner.register(Box::new(FunctoolsExercise));
        runner.register(Box::new(DecoratorsExercise));
        runner
    }

    pub fn register(&mut self, exercise: Box<dyn Exercise>) {
        self.exercises.push(exercise);
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.exercises.iter().map(|exercise| exercise.name()).collect()
    }

    pub fn run_all(&self, out: &mut dyn Write) -> Result<usize> {
        for exercise in &self.exercises {
            self.run_exercise(exercise.as_ref(), out)?;
        }
        Ok(self.exercises.len())
    }

    pub fn run_named(&self, name: &str, out: &mut dyn Write) -> Result<()> {
        let exercise = self
            .exercises
            .iter()
            .find(|exercise| exercise.name() == name)
            .ok_or_else(|| SpellError::ConfigError {
                message: format!(
                    "unknown exercise '{}', expected one of: {}",
                    name,
                    self.names().join(", ")
                ),
            })?;
        self.run_exercise(exercise.as_ref(), out)
    }

    fn run_exercise(&self, exercise: &dyn Exercise, out: &mut dyn Write) -> Result<()> {
        tracing::info!("📜 Running exercise: {}", exercise.name());
        let outcome = exercise.run(&self.grimoire, out);
        out.flush()?;
        match outcome {
            Ok(()) => {
                tracing::info!("✅ Exercise {} finished", exercise.name());
                Ok(())
            }
            Err(e) => {
                tracing::error!("❌ Exercise {} failed: {}", exercise.name(), e);
                Err(e)
            }
        }
    }
}
