use std::error::Error;
use std::fmt;

use crate::VarId;

/// An `Expression` was built from clauses that do not fit its declared shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidShape {
    /// A clause holds a different number of literals than the clause size.
    ///
    /// # Arguments
    /// * `clause` - Index of the offending clause.
    /// * `expected` - The declared clause size.
    /// * `found` - The length of the clause.
    ClauseLength { clause: usize, expected: usize, found: usize },
    /// A literal refers to a variable outside `[0, variable_count)`.
    VariableOutOfRange {
        clause: usize,
        position: usize,
        variable: VarId,
        variable_count: usize,
    },
    /// The candidate space `2^variable_count` would not fit the iteration counter.
    TooManyVariables { variable_count: usize, max: usize },
}

impl fmt::Display for InvalidShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            InvalidShape::ClauseLength { clause, expected, found } =>
                format!("Clause {} has {} literals but the clause size is {}.", clause, found, expected),
            InvalidShape::VariableOutOfRange { clause, position, variable, variable_count } =>
                format!("Literal {} of clause {} refers to X{} but only {} variables exist.",
                    position, clause, variable, variable_count),
            InvalidShape::TooManyVariables { variable_count, max } =>
                format!("{} variables requested, at most {} are supported.", variable_count, max),
        })
    }
}

impl Error for InvalidShape {}

/// The instance generator was asked for an impossible shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidParameters {
    ZeroClauseSize,
    ZeroVariableCount,
    TooManyVariables { variable_count: usize, max: usize },
}

impl fmt::Display for InvalidParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            InvalidParameters::ZeroClauseSize =>
                "The clause size must be at least 1.".to_string(),
            InvalidParameters::ZeroVariableCount =>
                "The variable count must be at least 1.".to_string(),
            InvalidParameters::TooManyVariables { variable_count, max } =>
                format!("{} variables requested, at most {} are supported.", variable_count, max),
        })
    }
}

impl Error for InvalidParameters {}

/// An assignment was evaluated against an expression over a different number of variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionMismatch {
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Assignment covers {} variables but the expression has {}.", self.found, self.expected)
    }
}

impl Error for DimensionMismatch {}
