mod config;

use clap::{value_t, App, Arg, ErrorKind};
use config::Config;
use itertools::Itertools;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use solver::{
    generate, timed, Bruteforce, Expression, ParallelBruteforce, SolveResult, Solver,
    TimeLimitedSolver, Timed, TimedSolver,
};
use std::path::PathBuf;
use std::process::exit;
use std::str::FromStr;
use std::time::Duration;

/// Exit codes used by SAT competitions, see `--return-code`
const EXIT_SATISFIABLE: i32 = 10;
const EXIT_UNSATISFIABLE: i32 = 20;
const EXIT_UNKNOWN: i32 = 2;

fn is_number<T: FromStr>(value: String) -> Result<(), String> {
    value.parse::<T>()
        .map(|_| ())
        .map_err(|_| format!("'{}' is not a valid number", value))
}

fn is_positive_duration(value: String) -> Result<(), String> {
    match value.parse::<f64>() {
        Ok(secs) if secs > 0.0 && secs.is_finite() => Ok(()),
        _ => Err(format!("'{}' is not a positive number of seconds", value)),
    }
}

fn make_config() -> Config {
    let matches = App::new("cnf-finder")
        .version("0.1.0")
        .about("Generates a random k-CNF expression and finds its first satisfying assignment by brute force")
        .arg(
            Arg::with_name("clause-size")
                .short("k")
                .long("clause-size")
                .value_name("N")
                .takes_value(true)
                .default_value("3")
                .validator(is_number::<usize>)
                .help("Number of literals per clause"),
        )
        .arg(
            Arg::with_name("clause-count")
                .short("c")
                .long("clause-count")
                .value_name("N")
                .takes_value(true)
                .default_value("5")
                .validator(is_number::<usize>)
                .help("Number of clauses"),
        )
        .arg(
            Arg::with_name("variable-count")
                .short("n")
                .long("variable-count")
                .value_name("N")
                .takes_value(true)
                .default_value("3")
                .validator(is_number::<usize>)
                .help("Number of distinct variables shared by all clauses"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .takes_value(true)
                .validator(is_number::<u64>)
                .help("Seed for the instance generator (random if omitted)"),
        )
        .arg(
            Arg::with_name("algorithm")
                .long("algorithm")
                .value_name("ALGORITHM")
                .help("Search strategy")
                .takes_value(true)
                .possible_values(&["bruteforce", "parallel"])
                .default_value("bruteforce"),
        )
        .arg(
            Arg::with_name("time-limit")
                .short("t")
                .long("time-limit")
                .value_name("SECS")
                .takes_value(true)
                .validator(is_positive_duration)
                .help("Give up after SECS seconds and report UNKNOWN (bruteforce only)"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Only print the verdict"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("File name for the solution in DIMACS format"),
        )
        .arg(
            Arg::with_name("dimacs")
                .long("dimacs")
                .takes_value(true)
                .help("File name for the generated expression in DIMACS format"),
        )
        .arg(
            Arg::with_name("return_code")
                .long("return-code")
                .short("r")
                .help("Will return 10 if satisfiable and 20 if not (useful for scripting)")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Raises the log level, repeat for more detail"),
        )
        .get_matches();

    let solver: Box<dyn Solver> = match matches.value_of("algorithm") {
        Some("bruteforce") => Box::new(Bruteforce),
        Some("parallel") => Box::new(ParallelBruteforce),
        _ => unreachable!(), // already handled by clap
    };

    let time_limit = if matches.is_present("time-limit") {
        if matches.value_of("algorithm") != Some("bruteforce") {
            clap::Error::with_description(
                "--time-limit can only be used with the bruteforce algorithm",
                ErrorKind::ArgumentConflict,
            ).exit();
        }
        let secs = value_t!(matches, "time-limit", f64).unwrap_or_else(|e| e.exit());
        Some(Duration::from_secs_f64(secs))
    } else {
        None
    };

    let seed = if matches.is_present("seed") {
        Some(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };

    Config {
        clause_size: value_t!(matches, "clause-size", usize).unwrap_or_else(|e| e.exit()),
        clause_count: value_t!(matches, "clause-count", usize).unwrap_or_else(|e| e.exit()),
        variable_count: value_t!(matches, "variable-count", usize).unwrap_or_else(|e| e.exit()),
        seed,
        solver,
        time_limit,
        quiet: matches.is_present("quiet"),
        output: matches.value_of("output").map(PathBuf::from),
        dimacs: matches.value_of("dimacs").map(PathBuf::from),
        return_code: matches.is_present("return_code"),
        verbosity: matches.occurrences_of("verbose"),
    }
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Expression with one tab-indented clause per line, followed by the solution line
fn render(expression: &Expression, solution: Option<&SolveResult>) -> String {
    let clauses = expression.to_string()
        .lines()
        .map(|line| format!("\t{}", line))
        .join("\n");
    let solution = solution.map_or_else(|| "None".to_string(), |solution| solution.to_string());
    format!("{}\n\tSolution: {}", clauses, solution)
}

fn verdict(solution: &SolveResult) -> &'static str {
    if solution.is_sat() { "SATISFIABLE" } else { "UNSATISFIABLE" }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = make_config();
    init_logging(config.verbosity);

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("generating with seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let expression = generate(config.clause_size, config.clause_count, config.variable_count, &mut rng)?;

    if let Some(path) = &config.dimacs {
        std::fs::write(path, expression.to_dimacs())?;
    }

    if !config.quiet {
        println!("Generated CNF Expression:");
        println!("{}", render(&expression, None));
        println!("Solving...");
    }

    let Timed { elapsed, value } = match config.time_limit {
        Some(limit) => timed(|| TimeLimitedSolver::new(Bruteforce, limit).solve(&expression)),
        None => {
            let Timed { elapsed, value } = TimedSolver::new(&config.solver).solve_timed(&expression);
            Timed { elapsed, value: Some(value) }
        }
    };

    let solution = match value {
        Some(solution) => solution,
        None => {
            println!("UNKNOWN");
            exit(EXIT_UNKNOWN);
        }
    };

    if config.quiet {
        println!("{}", verdict(&solution));
    } else {
        println!("Done!");
        println!("{}", render(&expression, Some(&solution)));
        println!("Solution took {} sec to compute running {}/{} iterations.",
            elapsed.as_secs_f64(), solution.iterations(), expression.candidate_count());
    }

    if let Some(path) = &config.output {
        std::fs::write(path, solution.to_dimacs())?;
    }

    if config.return_code {
        exit(if solution.is_sat() { EXIT_SATISFIABLE } else { EXIT_UNSATISFIABLE });
    }
    Ok(())
}
