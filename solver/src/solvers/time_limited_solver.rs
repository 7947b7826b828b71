use std::time::Duration;
use async_std::future::timeout;
use async_std::task::block_on;
use log::info;
use super::InterruptibleSolver;
use crate::{Expression, SolveResult};

/// Gives an interruptible solver a fixed amount of wall-clock time.
///
/// The search itself has no notion of a deadline; it is simply dropped at
/// its next suspension point once `max_duration` has elapsed.
pub struct TimeLimitedSolver<S: InterruptibleSolver> {
    max_duration: Duration,
    solver: S,
}

impl<S: InterruptibleSolver> TimeLimitedSolver<S> {
    pub fn new(solver: S, max_duration: Duration) -> TimeLimitedSolver<S> {
        TimeLimitedSolver {
            solver,
            max_duration,
        }
    }

    pub fn max_duration(&self) -> Duration {
        self.max_duration
    }

    /// Returns `None` if the deadline passed before the search finished
    pub fn solve(&self, expression: &Expression) -> Option<SolveResult> {
        block_on(self.solve_within(expression))
    }

    pub async fn solve_within(&self, expression: &Expression) -> Option<SolveResult> {
        let result = timeout(self.max_duration, self.solver.solve_interruptible(expression)).await
            .ok();
        if result.is_none() {
            info!("search abandoned after {:?}", self.max_duration);
        }
        result
    }
}
