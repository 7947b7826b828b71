use std::fmt;
use std::ops::Index;

use itertools::Itertools;

use crate::VarId;

/// One truth value per variable, indexed by `VarId`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Assignment(Vec<bool>);

impl Assignment {
    /// Assignment of `variable_count` variables, all set to false
    pub fn all_false(variable_count: usize) -> Assignment {
        Assignment(vec![false; variable_count])
    }

    /// Assignment of `variable_count` variables, all set to true
    pub fn all_true(variable_count: usize) -> Assignment {
        Assignment(vec![true; variable_count])
    }

    /// Decodes the brute-force candidate `candidate` into an assignment.
    ///
    /// The candidate is read as a binary number padded to `variable_count`
    /// digits, most significant digit first: variable 0 takes the highest bit
    /// and variable `variable_count - 1` the lowest. Candidate `0b100` over
    /// three variables therefore sets only `X0`.
    ///
    /// `variable_count` must not exceed `MAX_VARIABLES`.
    pub fn from_candidate(candidate: u64, variable_count: usize) -> Assignment {
        (0..variable_count)
            .map(|variable| (candidate >> (variable_count - 1 - variable)) & 1 == 1)
            .collect()
    }

    /// Inverse of [`Assignment::from_candidate`]
    pub fn candidate(&self) -> u64 {
        self.0.iter()
            .fold(0, |acc, &value| (acc << 1) | value as u64)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, variable: VarId) -> Option<bool> {
        self.0.get(variable).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// Padded binary digits of the assignment, `X0` first
    pub fn to_bit_string(&self) -> String {
        self.0.iter()
            .map(|&value| if value { '1' } else { '0' })
            .collect()
    }
}

impl Index<VarId> for Assignment {
    type Output = bool;

    fn index(&self, variable: VarId) -> &bool {
        &self.0[variable]
    }
}

impl From<Vec<bool>> for Assignment {
    fn from(values: Vec<bool>) -> Self {
        Assignment(values)
    }
}

impl std::iter::FromIterator<bool> for Assignment {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Assignment(iter.into_iter().collect())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter()
            .enumerate()
            .map(|(id, &value)| format!("X{} = {}", id, value as u8))
            .join(", "))
    }
}
