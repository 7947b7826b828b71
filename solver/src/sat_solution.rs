use std::fmt::Write as FmtWrite;

use crate::Assignment;

const MAX_LITERALS_PER_LINE: usize = 8;

/// Verdict of a complete search together with the number of candidates it examined
#[derive(Clone, PartialEq, Eq)]
pub enum SolveResult {
    /// First satisfying assignment and the candidates evaluated up to and including it
    Satisfiable(Assignment, u64),
    /// No assignment satisfies the expression; every candidate was evaluated
    Unsatisfiable(u64),
}

impl SolveResult {
    pub fn is_sat(&self) -> bool {
        match self {
            SolveResult::Satisfiable(..) => true,
            _                            => false,
        }
    }

    pub fn is_unsat(&self) -> bool {
        !self.is_sat()
    }

    pub fn iterations(&self) -> u64 {
        match self {
            SolveResult::Satisfiable(_, iterations) => *iterations,
            SolveResult::Unsatisfiable(iterations)  => *iterations,
        }
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            SolveResult::Satisfiable(assignment, _) => Some(assignment),
            SolveResult::Unsatisfiable(_)           => None,
        }
    }

    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            SolveResult::Satisfiable(assignment, _) => Some(assignment),
            SolveResult::Unsatisfiable(_)           => None,
        }
    }

    pub fn to_dimacs(&self) -> String {
        format!("s {}\n",
            match self {
                SolveResult::Unsatisfiable(_) => "UNSATISFIABLE".to_string(),
                SolveResult::Satisfiable(assignment, _) => {
                    let mut out = String::from("SATISFIABLE\n");
                    let mut iter = assignment.iter().enumerate().peekable();

                    while iter.peek().is_some() {
                        out.push('v');
                        for (id, value) in iter.by_ref().take(MAX_LITERALS_PER_LINE) {
                            // infallible for String
                            let _ = write!(&mut out, " {}{}", if value { "" } else { "-" }, id + 1);
                        }
                        out.push_str(" 0\n");
                    }
                    out.pop();
                    out
                }
            })
    }
}

impl std::fmt::Debug for SolveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveResult::Satisfiable(assignment, iterations) =>
                write!(f, "Satisfiable([{}], {})", assignment.to_bit_string(), iterations),
            SolveResult::Unsatisfiable(iterations) =>
                write!(f, "Unsatisfiable({})", iterations),
        }
    }
}

impl std::fmt::Display for SolveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveResult::Satisfiable(assignment, _) => write!(f, "{}", assignment),
            SolveResult::Unsatisfiable(_)           => write!(f, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimacs_of_unsatisfiable() {
        assert_eq!(SolveResult::Unsatisfiable(4).to_dimacs(), "s UNSATISFIABLE\n");
    }

    #[test]
    fn dimacs_wraps_long_models() {
        let assignment: Assignment = (0..10).map(|id| id % 3 == 0).collect();
        let result = SolveResult::Satisfiable(assignment, 1);
        assert_eq!(
            result.to_dimacs(),
            "s SATISFIABLE\nv 1 -2 -3 4 -5 -6 7 -8 0\nv -9 10 0\n"
        );
    }

    #[test]
    fn accessors() {
        let sat = SolveResult::Satisfiable(Assignment::from(vec![true]), 2);
        assert!(sat.is_sat());
        assert_eq!(sat.iterations(), 2);
        assert_eq!(sat.assignment(), Some(&Assignment::from(vec![true])));
        assert_eq!(sat.to_string(), "X0 = 1");

        let unsat = SolveResult::Unsatisfiable(8);
        assert!(unsat.is_unsat());
        assert_eq!(unsat.iterations(), 8);
        assert_eq!(unsat.into_assignment(), None);
    }
}
