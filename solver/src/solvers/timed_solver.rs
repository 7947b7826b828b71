use crate::sat_solver::*;
use crate::{Expression, SolveResult};
use log::debug;
use std::time::{Duration, Instant};

/// A value together with the wall-clock time spent producing it
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub elapsed: Duration,
    pub value: T,
}

/// Runs `f` and records how long it took
pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed { elapsed: start.elapsed(), value }
}

/// Wraps another solver and measures each search
pub struct TimedSolver<S> {
    solver: S,
}

impl<S> TimedSolver<S> {
    pub fn new(solver: S) -> Self {
        TimedSolver{solver}
    }
}

impl<S: Solver> Solver for TimedSolver<S> {
    fn solve(&self, expression: &Expression) -> SolveResult {
        self.solver.solve(expression)
    }
}

impl<S: Solver> TimedSolver<S> {
    pub fn solve_timed(&self, expression: &Expression) -> Timed<SolveResult> {
        let result = timed(|| self.solver.solve(expression));
        debug!("{} iterations in {:?}", result.value.iterations(), result.elapsed);
        result
    }
}
