/// Identity and negation, and literals built from them
pub mod literal;
/// The generalized k-CNF representation of an expression
pub mod cnf;
/// Truth values for every variable and the candidate bit mapping
mod assignment;
/// Errors raised while building or evaluating expressions
mod error;
/// Random instance creation
pub mod generator;
/// The Solver trait and the evaluator every solver builds on
pub mod sat_solver;
/// Module that specifies the output of a solver
mod sat_solution;
pub mod bruteforce;
/// A module which offers some additional solver,
/// for one that can be interrupted, limited in time or timed.
pub mod solvers;

pub use assignment::Assignment;
pub use bruteforce::{Bruteforce, ParallelBruteforce};
pub use cnf::{Clause, Expression, MAX_VARIABLES};
pub use error::{DimensionMismatch, InvalidParameters, InvalidShape};
pub use generator::generate;
pub use literal::{Literal, LiteralOperator, VarId};
pub use sat_solution::SolveResult;
pub use sat_solver::{evaluate, Solver};
pub use solvers::{timed, InterruptibleSolver, TimeLimitedSolver, Timed, TimedSolver};
