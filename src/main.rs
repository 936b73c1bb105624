//! # queens-solver
//!
//! `queens-solver` is a command-line N-Queens solver. Given a board size `n`
//! it enumerates every placement of `n` mutually non-attacking queens on an
//! `n x n` board by naive backtracking, renders each solution as a `Q`/`.`
//! grid and reports search statistics. It also ships a small binary-tree
//! traversal demo built from a flattened value array.
//!
//! The solver supports two engines:
//! 1.  **recursive**: true recursion over the line index.
//! 2.  **iterative**: an explicit stack of per-line frames.
//!
//! Both enumerate candidates in ascending order, so the solution order is
//! deterministic and identical between engines.
//!
//! ## Usage
//!
//! ```sh
//! queens-solver [N] [SUBCOMMAND]
//! ```
//!
//! ### Global argument
//!
//! -   `n`: if provided as the *only* argument (without a subcommand), it is
//!     solved with the default engine and orientation.
//!
//!     ```sh
//!     queens-solver 8
//!     ```
//!
//! ### Subcommands
//!
//! 1.  **`solve`**: solve one board size with full control over the engine.
//!     ```sh
//!     queens-solver solve 8 --orientation column --engine iterative
//!     ```
//!
//! 2.  **`tree`**: build a binary tree from a flattened array and print its
//!     traversals. `_` marks a missing child.
//!     ```sh
//!     queens-solver tree --values "1,2,4,_,_,5,_,_,3,6,_,_,7,_,_"
//!     ```
//!
//! 3.  **`completions`**: generate shell completion scripts.
//!
//! ### Common options
//!
//! -   `-d, --debug`: enable debug output (default: `false`).
//! -   `--verify <BOOL>`: re-check every returned solution (default: `true`).
//! -   `--stats <BOOL>`: print the statistics table (default: `true`).
//! -   `--print-solutions <BOOL>`: render each solution board (default: `true`).
//!
//! Non-integer or negative board sizes are rejected by argument parsing
//! before the solver runs; a board size with zero solutions reports
//! "No solutions found", which is not an error.

use clap::{Args, CommandFactory, Parser, Subcommand};
use itertools::Itertools;
use queens_solver::queens::render::Grid;
use queens_solver::queens::solver::{
    Iterative, Orientation, Recursive, SearchStats, Solver,
};
use queens_solver::queens::{board::SolutionSet, verify};
use queens_solver::tree::binary::{self, Tree};
use std::time::Duration;
use tikv_jemalloc_ctl::{epoch, stats};

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// usage figures in the statistics table.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the queens-solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "queens-solver", version, about = "A backtracking N-Queens solver")]
struct Cli {
    /// An optional bare board size. If provided without a subcommand, it is
    /// solved with the default engine and orientation.
    n: Option<usize>,

    /// Specifies the subcommand to execute (e.g. `solve`, `tree`).
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Enumerate all solutions for one board size.
    Solve {
        /// The board size (number of queens).
        n: usize,

        /// Which axis the search assigns per line: `row` or `column`.
        #[arg(short, long, default_value_t = String::from("row"))]
        orientation: String,

        /// The search engine to use: `recursive` or `iterative`.
        #[arg(short, long, default_value_t = String::from("recursive"))]
        engine: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Build a binary tree from a flattened array and print its traversals.
    Tree {
        /// Flattened tree values, comma or space separated, with `_` for a
        /// missing child. Defaults to the built-in seven-node example.
        #[arg(short, long)]
        values: Option<String>,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default)]
struct CommonOptions {
    /// Enable debug output, providing more verbose logging while solving.
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Re-check every returned solution against the non-attack invariant.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    verify: bool,

    /// Print performance and search statistics after solving.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    stats: bool,

    /// Render each solution as a Q/. board.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    print_solutions: bool,
}

/// Main entry point of the queens-solver application.
///
/// Parses command-line arguments, dispatches to the appropriate command
/// handler, and manages the overall execution flow.
fn main() {
    let cli = Cli::parse();

    // Handle the case where a board size is provided globally without a
    // subcommand. This defaults to the recursive, row-wise solver.
    if let Some(n) = cli.n {
        if cli.command.is_none() {
            solve_and_report(n, "row", "recursive", &cli.common);
            return;
        }
    }

    match cli.command {
        Some(Commands::Solve {
            n,
            orientation,
            engine,
            common,
        }) => {
            solve_and_report(n, &orientation, &engine, &common);
        }

        Some(Commands::Tree { values }) => {
            let parsed = match values {
                Some(input) => match binary::parse_flattened(&input) {
                    Ok(parsed) => parsed,
                    Err(e) => {
                        eprintln!("Error parsing tree values: {e}");
                        std::process::exit(1);
                    }
                },
                None => binary::EXAMPLE.to_vec(),
            };

            match Tree::from_flattened(&parsed) {
                Ok(tree) => {
                    println!("Preorder (recursive): {}", tree.preorder().iter().join(" "));
                    println!(
                        "Preorder (iterative): {}",
                        tree.preorder_iterative().iter().join(" ")
                    );
                    println!("Breadth-first:        {}", tree.breadth_first().iter().join(" "));
                }
                Err(e) => {
                    eprintln!("Error building tree: {e}");
                    std::process::exit(1);
                }
            }
        }

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }

        None => {
            // Reached if no subcommand was provided and `cli.n` was also None.
            if cli.n.is_none() {
                eprintln!("No command provided. Use --help for more information.");
                std::process::exit(1);
            }
            // If `cli.n` was Some, the first `if` block already handled it.
        }
    }
}

/// Runs the requested engine, prints the solutions and reports statistics.
fn solve_and_report(n: usize, orientation_name: &str, engine_name: &str, common: &CommonOptions) {
    let orientation: Orientation = orientation_name
        .parse()
        .unwrap_or_else(|e| panic!("{e}"));

    println!("Solving {n}-queens ({orientation}, {engine_name} engine)");

    let (solutions, elapsed, search_stats) =
        run_engine(n, orientation, engine_name, common.debug);

    // Advance the jemalloc epoch so the memory figures reflect the solve.
    epoch::advance().unwrap();
    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if common.verify {
        verify_solutions(n, &solutions);
    }

    if common.print_solutions {
        print_solutions(n, orientation, &solutions);
    }

    if common.stats {
        print_stats(n, orientation, elapsed, &search_stats, allocated_mib, resident_mib);
    }

    println!("\nTotal solutions found: {}", solutions.len());
}

/// Solves one board size with the named engine.
///
/// # Returns
///
/// A tuple containing:
/// * `SolutionSet`: every solution, in deterministic enumeration order.
/// * `Duration`: the time taken by the search.
/// * `SearchStats`: counters collected during the search.
///
/// # Panics
///
/// Panics if `engine_name` is not "recursive" or "iterative".
fn run_engine(
    n: usize,
    orientation: Orientation,
    engine_name: &str,
    debug: bool,
) -> (SolutionSet, Duration, SearchStats) {
    match engine_name.to_lowercase().as_str() {
        "recursive" => run_solver(Recursive::new(n, orientation), debug),
        "iterative" => run_solver(Iterative::new(n, orientation), debug),
        _ => panic!("Unknown engine name {engine_name}"),
    }
}

/// Runs a constructed solver and times the search.
fn run_solver<S: Solver>(mut solver: S, debug: bool) -> (SolutionSet, Duration, SearchStats) {
    epoch::advance().unwrap();

    let time = std::time::Instant::now();
    let solutions = solver.solve();
    let elapsed = time.elapsed();

    if debug {
        println!("Solutions: {solutions:?}");
        println!("Time: {elapsed:?}");
    }

    (solutions, elapsed, solver.stats())
}

/// Re-checks the returned solutions against the non-attack invariant.
///
/// Prints whether the verification was successful. If verification fails, it
/// panics: the search is exhaustive by construction, so a failure here is an
/// internal contract violation, not an input error.
fn verify_solutions(n: usize, solutions: &SolutionSet) {
    match verify::verify(n, solutions) {
        Ok(()) => println!("Verified: true"),
        Err(violation) => panic!("Solution set failed verification: {violation:?}"),
    }
}

/// Renders every solution as a board grid, or reports that none exist.
fn print_solutions(n: usize, orientation: Orientation, solutions: &SolutionSet) {
    if solutions.is_empty() {
        println!("No solutions found for n={n}!");
        return;
    }

    for (idx, solution) in solutions.iter().enumerate() {
        println!("\nSolution {}:", idx + 1);
        print!("{}", Grid::new(solution, orientation));
    }
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
fn print_stats(
    n: usize,
    orientation: Orientation,
    elapsed: Duration,
    s: &SearchStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]========================");
    stat_line("Board size", n);
    stat_line("Orientation", orientation);

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Candidates tested", s.candidates, elapsed_secs);
    stat_line_with_rate("Placements", s.placements, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Solutions", s.solutions);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_engine_dispatches_both_engines() {
        let (recursive, _, _) = run_engine(5, Orientation::RowWise, "recursive", false);
        let (iterative, _, _) = run_engine(5, Orientation::RowWise, "Iterative", false);
        assert_eq!(recursive.len(), 10);
        assert_eq!(recursive, iterative);
    }

    #[test]
    #[should_panic(expected = "Unknown engine name")]
    fn test_run_engine_rejects_unknown_names() {
        run_engine(4, Orientation::RowWise, "quantum", false);
    }

    #[test]
    fn test_cli_parses_global_board_size() {
        let cli = Cli::parse_from(["queens-solver", "6"]);
        assert_eq!(cli.n, Some(6));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_rejects_non_integer_board_size() {
        assert!(Cli::try_parse_from(["queens-solver", "eight"]).is_err());
        assert!(Cli::try_parse_from(["queens-solver", "-4"]).is_err());
    }
}
