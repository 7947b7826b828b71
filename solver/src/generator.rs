use log::debug;
use rand::Rng;

use crate::cnf::MAX_VARIABLES;
use crate::{Clause, Expression, InvalidParameters, Literal, LiteralOperator};

/// Creates a random expression of `clause_count` clauses with `clause_size`
/// literals each.
///
/// Every literal gets an independently drawn operator and variable from
/// `[0, variable_count)`, so variables are free to repeat within and across
/// clauses. All randomness is taken from `rng`; a seeded generator yields the
/// same expression every time.
pub fn generate<R: Rng + ?Sized>(
    clause_size: usize,
    clause_count: usize,
    variable_count: usize,
    rng: &mut R,
) -> Result<Expression, InvalidParameters> {
    if clause_size == 0 {
        return Err(InvalidParameters::ZeroClauseSize);
    }
    if variable_count == 0 {
        return Err(InvalidParameters::ZeroVariableCount);
    }
    if variable_count > MAX_VARIABLES {
        return Err(InvalidParameters::TooManyVariables { variable_count, max: MAX_VARIABLES });
    }

    let clauses: Vec<Clause> = (0..clause_count)
        .map(|_| (0..clause_size)
            .map(|_| random_literal(variable_count, rng))
            .collect())
        .collect();

    debug!("generated {} clauses of size {} over {} variables", clause_count, clause_size, variable_count);

    Ok(Expression::new_unchecked(clause_size, variable_count, clauses))
}

fn random_literal<R: Rng + ?Sized>(variable_count: usize, rng: &mut R) -> Literal {
    let operator = if rng.gen() { LiteralOperator::Identity } else { LiteralOperator::Negate };
    let variable = rng.gen_range(0, variable_count);
    Literal::new(operator, variable)
}
