use solver::Solver;
use std::path::PathBuf;
use std::time::Duration;

pub struct Config {
    pub clause_size:    usize,
    pub clause_count:   usize,
    pub variable_count: usize,
    /// Seed for the instance generator, drawn at random when absent
    pub seed:           Option<u64>,
    pub solver:         Box<dyn Solver>,
    /// Only honoured by the sequential brute force, which can be interrupted
    pub time_limit:     Option<Duration>,
    pub quiet:          bool,
    pub output:         Option<PathBuf>,
    pub dimacs:         Option<PathBuf>,
    pub return_code:    bool,
    pub verbosity:      u64,
}
