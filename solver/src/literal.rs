use std::fmt;

use crate::Assignment;

/// Type used for referencing logical variables
pub type VarId = usize;

/// Truth transformer applied to a variable before it enters a clause
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LiteralOperator {
    Identity,
    Negate,
}

impl LiteralOperator {
    /// Both operators, in the order the generator draws from
    pub const ALL: [LiteralOperator; 2] = [LiteralOperator::Negate, LiteralOperator::Identity];

    pub fn apply(self, value: bool) -> bool {
        match self {
            LiteralOperator::Identity => value,
            LiteralOperator::Negate => !value,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LiteralOperator::Identity => "identify",
            LiteralOperator::Negate => "negate",
        }
    }
}

impl fmt::Display for LiteralOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An operator together with the variable it reads
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub operator: LiteralOperator,
    pub variable: VarId,
}

impl Literal {
    pub fn new(operator: LiteralOperator, variable: VarId) -> Literal {
        Literal { operator, variable }
    }

    /// Creates a literal that passes the variable through unchanged
    pub fn identity(variable: VarId) -> Literal {
        Literal::new(LiteralOperator::Identity, variable)
    }

    /// Creates a literal that negates the variable
    pub fn negate(variable: VarId) -> Literal {
        Literal::new(LiteralOperator::Negate, variable)
    }

    /// Truth value of the literal under `assignment`.
    ///
    /// **NOTE** panics if the variable is not covered by the assignment;
    /// `Expression` construction guarantees it is for well-sized assignments.
    pub fn value(&self, assignment: &Assignment) -> bool {
        self.operator.apply(assignment[self.variable])
    }

    /// Signed, 1-based DIMACS number of the literal
    pub fn to_dimacs(&self) -> i64 {
        let id = self.variable as i64 + 1;
        match self.operator {
            LiteralOperator::Identity => id,
            LiteralOperator::Negate => -id,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(X{})", self.operator, self.variable)
    }
}
