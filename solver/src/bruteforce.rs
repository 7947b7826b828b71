use async_std::task::yield_now;
use async_trait::async_trait;
use log::{debug, trace};
use rayon::prelude::*;

use crate::sat_solver::*;
use crate::solvers::InterruptibleSolver;
use crate::{Assignment, Expression, SolveResult};

/// Candidates checked between two suspension points of an interruptible search
pub const YIELD_INTERVAL: u64 = 1 << 10;

/// A simple CNF solver that naively checks all possible
/// assignments in ascending candidate order, see [`Assignment::from_candidate`]
pub struct Bruteforce;

impl Solver for Bruteforce {
    fn solve(&self, expression: &Expression) -> SolveResult {
        let total = announce(expression);
        for candidate in 0..total {
            if let Some(assignment) = check_candidate(expression, candidate) {
                return satisfiable(assignment, candidate);
            }
        }
        unsatisfiable(total)
    }
}

#[async_trait]
impl InterruptibleSolver for Bruteforce {
    async fn solve_interruptible(&self, expression: &Expression) -> SolveResult {
        let total = announce(expression);
        for candidate in 0..total {
            if let Some(assignment) = check_candidate(expression, candidate) {
                return satisfiable(assignment, candidate);
            }
            // let a deadline or a dropped handle stop us between candidates
            if (candidate + 1) % YIELD_INTERVAL == 0 {
                yield_now().await;
            }
        }
        unsatisfiable(total)
    }
}

/// Brute force over rayon's thread pool.
///
/// The candidate range is split between workers, but only the lowest
/// satisfying candidate is kept, so the answer (including the reported
/// iteration count) is the one [`Bruteforce`] would give.
pub struct ParallelBruteforce;

impl Solver for ParallelBruteforce {
    fn solve(&self, expression: &Expression) -> SolveResult {
        let total = announce(expression);
        let variable_count = expression.variable_count();

        let first = (0..total)
            .into_par_iter()
            .find_first(|&candidate| {
                expression.satisfied_by(&Assignment::from_candidate(candidate, variable_count))
            });

        match first {
            Some(candidate) => satisfiable(Assignment::from_candidate(candidate, variable_count), candidate),
            None => unsatisfiable(total),
        }
    }
}

fn announce(expression: &Expression) -> u64 {
    let total = expression.candidate_count();
    debug!("searching {} candidates for {} clauses over {} variables",
        total, expression.clause_count(), expression.variable_count());
    total
}

fn check_candidate(expression: &Expression, candidate: u64) -> Option<Assignment> {
    let assignment = Assignment::from_candidate(candidate, expression.variable_count());
    trace!("candidate #{}: {}", candidate, assignment.to_bit_string());
    if expression.satisfied_by(&assignment) {
        Some(assignment)
    } else {
        None
    }
}

fn satisfiable(assignment: Assignment, candidate: u64) -> SolveResult {
    debug!("candidate #{} satisfies the expression", candidate);
    SolveResult::Satisfiable(assignment, candidate + 1)
}

fn unsatisfiable(total: u64) -> SolveResult {
    debug!("all {} candidates failed", total);
    SolveResult::Unsatisfiable(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Clause, Literal};
    use async_std::task::block_on;

    fn expression(clause_size: usize, variable_count: usize, clauses: Vec<Vec<Literal>>) -> Expression {
        Expression::new(clause_size, variable_count, clauses.into_iter().map(Clause::from).collect())
            .unwrap()
    }

    fn all_solvers(formula: &Expression) -> Vec<SolveResult> {
        vec![
            Bruteforce.solve(formula),
            ParallelBruteforce.solve(formula),
            block_on(Bruteforce.solve_interruptible(formula)),
        ]
    }

    #[test]
    fn single_positive_literal() {
        let formula = expression(1, 1, vec![vec![Literal::identity(0)]]);
        for result in all_solvers(&formula) {
            assert_eq!(result, SolveResult::Satisfiable(Assignment::from(vec![true]), 2));
        }
    }

    #[test]
    fn single_negative_literal() {
        let formula = expression(1, 1, vec![vec![Literal::negate(0)]]);
        for result in all_solvers(&formula) {
            assert_eq!(result, SolveResult::Satisfiable(Assignment::from(vec![false]), 1));
        }
    }

    #[test]
    fn contradiction_over_shared_variable() {
        let formula = expression(1, 1, vec![
            vec![Literal::identity(0)],
            vec![Literal::negate(0)],
        ]);
        for result in all_solvers(&formula) {
            assert_eq!(result, SolveResult::Unsatisfiable(2));
        }
    }

    #[test]
    fn lowest_candidate_wins() {
        // candidate 0b01 sets only X1, which already satisfies the clause
        let formula = expression(2, 2, vec![vec![Literal::identity(0), Literal::identity(1)]]);
        for result in all_solvers(&formula) {
            assert_eq!(result, SolveResult::Satisfiable(Assignment::from(vec![false, true]), 2));
        }
    }

    #[test]
    fn bit_order_is_most_significant_first() {
        // only X0 = 1, X1 = 0, X2 = 0 satisfies, which is candidate 0b100
        let formula = expression(1, 3, vec![
            vec![Literal::identity(0)],
            vec![Literal::negate(1)],
            vec![Literal::negate(2)],
        ]);
        assert_eq!(
            Bruteforce.solve(&formula),
            SolveResult::Satisfiable(Assignment::from(vec![true, false, false]), 5)
        );
    }

    #[test]
    fn empty_expression_takes_first_candidate() {
        let formula = expression(3, 2, vec![]);
        for result in all_solvers(&formula) {
            assert_eq!(result, SolveResult::Satisfiable(Assignment::all_false(2), 1));
        }
    }

    #[test]
    fn no_variables_means_one_candidate() {
        let empty = expression(0, 0, vec![]);
        assert_eq!(Bruteforce.solve(&empty), SolveResult::Satisfiable(Assignment::all_false(0), 1));

        let empty_clause = expression(0, 0, vec![vec![]]);
        assert_eq!(Bruteforce.solve(&empty_clause), SolveResult::Unsatisfiable(1));
    }

    #[test]
    fn unsatisfiable_visits_every_candidate() {
        // (X0 or X1) and (!X0 or X1) and (X0 or !X1) and (!X0 or !X1)
        let formula = expression(2, 2, vec![
            vec![Literal::identity(0), Literal::identity(1)],
            vec![Literal::negate(0), Literal::identity(1)],
            vec![Literal::identity(0), Literal::negate(1)],
            vec![Literal::negate(0), Literal::negate(1)],
        ]);
        for result in all_solvers(&formula) {
            assert_eq!(result, SolveResult::Unsatisfiable(4));
        }
    }

    #[test]
    fn interruptible_search_crosses_yield_points() {
        // forces X0..X10 to 1, the last candidate of 2^11 > YIELD_INTERVAL
        let formula = expression(1, 11, (0..11).map(|variable| vec![Literal::identity(variable)]).collect());
        let expected = SolveResult::Satisfiable(Assignment::all_true(11), 1 << 11);
        assert_eq!(block_on(Bruteforce.solve_interruptible(&formula)), expected);
        assert_eq!(Bruteforce.solve(&formula), expected);
    }
}
