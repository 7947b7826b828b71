use crate::{Assignment, DimensionMismatch, Expression, SolveResult};

/// Anything that can decide an `Expression`
pub trait Solver {
    fn solve(&self, expression: &Expression) -> SolveResult;
}

/// Checks whether `assignment` makes every clause of `expression` true.
///
/// Fails if the assignment does not cover exactly the expression's variables.
pub fn evaluate(expression: &Expression, assignment: &Assignment) -> Result<bool, DimensionMismatch> {
    if assignment.len() != expression.variable_count() {
        return Err(DimensionMismatch {
            expected: expression.variable_count(),
            found: assignment.len(),
        });
    }
    Ok(expression.satisfied_by(assignment))
}

impl<T: Solver + ?Sized> Solver for &T {
    fn solve(&self, expression: &Expression) -> SolveResult {
        (**self).solve(expression)
    }
}

impl<T: Solver + ?Sized> Solver for Box<T> {
    fn solve(&self, expression: &Expression) -> SolveResult {
        (**self).solve(expression)
    }
}
