use std::fmt;
use std::iter::FromIterator;

use itertools::Itertools;

use crate::{Assignment, InvalidShape, Literal};

/// Largest supported variable count; `2^MAX_VARIABLES` candidates still fit a `u64`
pub const MAX_VARIABLES: usize = 63;

/// Representation of a clause (disjunction of literals)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Clause {
        Clause { literals }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// A clause holds iff any of its literals does
    pub(crate) fn satisfied_by(&self, assignment: &Assignment) -> bool {
        self.literals.iter().any(|literal| literal.value(assignment))
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause { literals: iter.into_iter().collect() }
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Clause::new(literals)
    }
}

/// A generalized k-CNF formula: a conjunction of clauses of equal size over
/// `variable_count` shared variables.
///
/// The expression cannot be modified once built, so one instance can be
/// evaluated against any number of assignments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    clauses: Vec<Clause>,
    clause_size: usize,
    variable_count: usize,
}

impl Expression {
    /// Validates `clauses` against the declared shape.
    ///
    /// Every clause must hold exactly `clause_size` literals and every literal
    /// must refer to a variable below `variable_count`.
    pub fn new(clause_size: usize, variable_count: usize, clauses: Vec<Clause>) -> Result<Expression, InvalidShape> {
        if variable_count > MAX_VARIABLES {
            return Err(InvalidShape::TooManyVariables { variable_count, max: MAX_VARIABLES });
        }

        for (index, clause) in clauses.iter().enumerate() {
            if clause.len() != clause_size {
                return Err(InvalidShape::ClauseLength {
                    clause: index,
                    expected: clause_size,
                    found: clause.len(),
                });
            }
            if let Some((position, literal)) = clause.iter()
                .enumerate()
                .find(|(_, literal)| literal.variable >= variable_count)
            {
                return Err(InvalidShape::VariableOutOfRange {
                    clause: index,
                    position,
                    variable: literal.variable,
                    variable_count,
                });
            }
        }

        Ok(Expression { clauses, clause_size, variable_count })
    }

    /// Skips validation for clauses whose shape is correct by construction
    pub(crate) fn new_unchecked(clause_size: usize, variable_count: usize, clauses: Vec<Clause>) -> Expression {
        debug_assert!(variable_count <= MAX_VARIABLES);
        debug_assert!(clauses.iter().all(|clause| clause.len() == clause_size
            && clause.iter().all(|literal| literal.variable < variable_count)));
        Expression { clauses, clause_size, variable_count }
    }

    pub fn clause_size(&self) -> usize {
        self.clause_size
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn clause(&self, index: usize) -> Option<&Clause> {
        self.clauses.get(index)
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// Number of candidate assignments, `2^variable_count`
    pub fn candidate_count(&self) -> u64 {
        1u64 << self.variable_count
    }

    /// Conjunction over all clauses; the caller guarantees the assignment size
    pub(crate) fn satisfied_by(&self, assignment: &Assignment) -> bool {
        self.clauses.iter().all(|clause| clause.satisfied_by(assignment))
    }

    /// Prints the expression in DIMACS compatible form
    pub fn to_dimacs(&self) -> String {
        let mut out = format!("p cnf {} {}\n", self.variable_count, self.clauses.len());
        for clause in &self.clauses {
            for literal in clause.iter() {
                out.push_str(&literal.to_dimacs().to_string());
                out.push(' ');
            }
            out.push_str("0\n");
        }
        out
    }
}

impl<'a> IntoIterator for &'a Expression {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.clauses.iter().join(" and\n"))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.literals.iter().join(" or "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(literals: &[Literal]) -> Clause {
        literals.iter().copied().collect()
    }

    #[test]
    fn accepts_shared_variables() {
        let expression = Expression::new(2, 2, vec![
            clause(&[Literal::identity(0), Literal::negate(1)]),
            clause(&[Literal::negate(0), Literal::negate(0)]),
        ]).unwrap();

        assert_eq!(expression.clause_size(), 2);
        assert_eq!(expression.clause_count(), 2);
        assert_eq!(expression.variable_count(), 2);
        assert_eq!(expression.clause(1).unwrap().literals(), &[Literal::negate(0), Literal::negate(0)]);
        assert!(expression.clause(2).is_none());
    }

    #[test]
    fn rejects_wrong_clause_length() {
        let result = Expression::new(2, 3, vec![
            clause(&[Literal::identity(0), Literal::identity(1)]),
            clause(&[Literal::identity(2)]),
        ]);
        assert_eq!(result, Err(InvalidShape::ClauseLength { clause: 1, expected: 2, found: 1 }));
    }

    #[test]
    fn rejects_variable_out_of_range() {
        let result = Expression::new(2, 2, vec![
            clause(&[Literal::identity(0), Literal::negate(2)]),
        ]);
        assert_eq!(result, Err(InvalidShape::VariableOutOfRange {
            clause: 0,
            position: 1,
            variable: 2,
            variable_count: 2,
        }));
    }

    #[test]
    fn rejects_too_many_variables() {
        let result = Expression::new(1, MAX_VARIABLES + 1, vec![]);
        assert_eq!(result, Err(InvalidShape::TooManyVariables {
            variable_count: MAX_VARIABLES + 1,
            max: MAX_VARIABLES,
        }));
    }

    #[test]
    fn empty_expression_is_valid() {
        let expression = Expression::new(3, 2, vec![]).unwrap();
        assert_eq!(expression.clause_count(), 0);
        assert_eq!(expression.candidate_count(), 4);
        assert!(expression.satisfied_by(&Assignment::all_false(2)));
    }

    #[test]
    fn empty_clause_is_never_satisfied() {
        let expression = Expression::new(0, 1, vec![clause(&[])]).unwrap();
        assert!(!expression.satisfied_by(&Assignment::all_false(1)));
        assert!(!expression.satisfied_by(&Assignment::all_true(1)));
    }

    #[test]
    fn display_joins_clauses() {
        let expression = Expression::new(2, 3, vec![
            clause(&[Literal::identity(2), Literal::negate(1)]),
            clause(&[Literal::negate(0), Literal::identity(2)]),
        ]).unwrap();

        assert_eq!(
            expression.to_string(),
            "(identify(X2) or negate(X1)) and\n(negate(X0) or identify(X2))"
        );
    }

    #[test]
    fn dimacs_export() {
        let expression = Expression::new(2, 3, vec![
            clause(&[Literal::identity(2), Literal::negate(1)]),
            clause(&[Literal::negate(0), Literal::identity(0)]),
        ]).unwrap();

        assert_eq!(expression.to_dimacs(), "p cnf 3 2\n3 -2 0\n-1 1 0\n");
    }
}
