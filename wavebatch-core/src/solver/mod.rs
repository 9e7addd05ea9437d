//! The solver module contains the entry point which orchestrates wave building and batch packing.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::construction::{build_waves, pack_wave, seal_batches};
use crate::models::{IdSequence, Limits, Problem, Solution};
use crate::utils::{Environment, GenericResult, Timer};
use std::sync::Arc;

/// Solves order batching problem: groups orders into waves and articles of each wave into batches.
pub struct Solver {
    problem: Arc<Problem>,
    limits: Limits,
    environment: Environment,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(problem: Arc<Problem>, limits: Limits, environment: Environment) -> Self {
        Self { problem, limits, environment }
    }

    /// Runs the heuristic and returns a complete solution.
    ///
    /// Fails if any ordered article cannot be placed into a batch on its own.
    pub fn solve(self) -> GenericResult<Solution> {
        let timer = Timer::start();
        let logger = self.environment.logger.clone();

        self.check_article_volumes()?;

        let mut wave_ids = IdSequence::new(0);
        let mut waves = build_waves(self.problem.orders.as_slice(), self.limits.wave_capacity, &mut wave_ids);

        waves.iter().filter(|wave| wave.article_amount() > wave.capacity()).for_each(|wave| {
            let order_ids = wave.orders().iter().map(|order| order.id.to_string()).collect::<Vec<_>>();
            (logger)(&format!(
                "warning: wave {} has {} articles which exceeds capacity {}, orders: {}",
                wave.id(),
                wave.article_amount(),
                wave.capacity(),
                order_ids.join(", ")
            ));
        });

        let catalog = self.problem.catalog.as_ref();
        let batch_capacity = self.limits.batch_capacity;
        let packed =
            self.environment.parallelism.collect(waves.as_slice(), |wave| pack_wave(wave, catalog, batch_capacity));

        // NOTE batch ids are assigned in wave order, so result does not depend on parallelism
        let mut batch_ids = IdSequence::new(0);
        let mut batches = vec![];
        for (wave, open_batches) in waves.iter_mut().zip(packed.into_iter()) {
            batches.extend(seal_batches(wave, open_batches?, &mut batch_ids));
        }

        let solution = Solution { waves, batches };

        self.log_statistics(&solution, &timer);

        Ok(solution)
    }

    fn check_article_volumes(&self) -> GenericResult<()> {
        let capacity = self.limits.batch_capacity;
        let mut oversized = self
            .problem
            .orders
            .iter()
            .flat_map(|order| order.articles.iter())
            .filter_map(|article_id| self.problem.catalog.get(*article_id))
            .filter(|article| article.volume > capacity)
            .map(|article| article.id)
            .collect::<Vec<_>>();

        if oversized.is_empty() {
            return Ok(());
        }

        oversized.sort_unstable();
        oversized.dedup();

        Err(format!(
            "articles with volume exceeding batch capacity {capacity}: {}",
            oversized.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
        )
        .into())
    }

    fn log_statistics(&self, solution: &Solution, timer: &Timer) {
        let logger = &self.environment.logger;

        let waves = solution.waves.len();
        let batches = solution.batches.len();
        let articles = self.problem.article_count();
        let volume = solution.batches.iter().map(|batch| batch.volume() as f64).sum::<f64>();

        let avg_articles = if waves > 0 { articles as f64 / waves as f64 } else { 0. };
        let avg_volume = if batches > 0 { volume / batches as f64 } else { 0. };

        (logger)(&format!("solved {} orders in {}ms", self.problem.orders.len(), timer.elapsed_millis()));
        (logger)(&format!("waves: {waves}, average articles per wave: {avg_articles:.2}"));
        (logger)(&format!("batches: {batches}, average volume per batch: {avg_volume:.2}"));
    }
}
