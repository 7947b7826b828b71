use crate::{Expression, SolveResult, Solver};
use async_trait::async_trait;
use async_std::task::block_on;
use auto_impl::auto_impl;

/// A solver whose search is an async computation that suspends between
/// candidates. Dropping the future abandons the search at the next
/// suspension point.
#[async_trait]
#[auto_impl(Box)]
pub trait InterruptibleSolver {
    async fn solve_interruptible(&self, expression: &Expression) -> SolveResult;
}

/// Runs an interruptible solver to completion on the current thread
pub struct InterruptibleSolverWrapper<S: InterruptibleSolver> {
    solver: S,
}

impl<S: InterruptibleSolver> From<S> for InterruptibleSolverWrapper<S> {
    fn from(solver: S) -> Self {
        InterruptibleSolverWrapper{solver}
    }
}

impl<S: InterruptibleSolver> Solver for InterruptibleSolverWrapper<S> {
    fn solve(&self, expression: &Expression) -> SolveResult {
        block_on(self.solver.solve_interruptible(expression))
    }
}
