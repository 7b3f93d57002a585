mod queens;
mod result;
mod search;

use std::io::Write;

use clap::Parser;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use queens::Queens;
use queens::QueensBranching;
use result::SolverResult;
use search::DepthFirstSearch;
use search::SearchOptions;
use search::SearchOutcome;
use thicket_core::convert_case::Case;
use thicket_core::options::ValueSelectionStrategy;
use thicket_core::options::VariableSelectionStrategy;
use thicket_core::statistics::configure_statistic_logging;
use thicket_core::statistics::log_statistic_postfix;
use thicket_core::statistics::StatisticOptions;
use thicket_core::statistics::StatisticScope;

const MSG_UNSATISFIABLE: &str = "=====UNSATISFIABLE=====";
const MSG_UNKNOWN: &str = "=====UNKNOWN=====";

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about
)]
struct Args {
    /// The number of queens, which is also the width of the board.
    ///
    /// Possible values: usize
    #[arg(long, default_value_t = 8, verbatim_doc_comment)]
    size: usize,

    /// Every `copy-distance`-th level of the search tree keeps a copy of its space; the nodes in
    /// between are recomputed from the nearest copy when the search backtracks to them.
    ///
    /// A distance of 1 copies every node and never recomputes.
    ///
    /// Possible values: usize, at least 1
    #[arg(long = "copy-distance", default_value_t = 1, verbatim_doc_comment)]
    copy_distance: usize,

    /// Instructs the solver to report all solutions instead of only the first one.
    ///
    /// Possible values: bool
    #[arg(short = 'a', long = "all-solutions", verbatim_doc_comment)]
    all_solutions: bool,

    /// The maximum number of solutions to report; implies `--all-solutions`.
    ///
    /// Possible values: u64
    #[arg(long = "solution-limit", verbatim_doc_comment)]
    solution_limit: Option<u64>,

    /// The maximum number of search nodes to explore.
    ///
    /// Possible values: u64
    #[arg(long = "node-limit", verbatim_doc_comment)]
    node_limit: Option<u64>,

    /// Which queen is branched on next.
    #[arg(
        long = "variable-selection",
        value_enum,
        default_value_t = VariableSelectionStrategy::FirstFail
    )]
    variable_selection: VariableSelectionStrategy,

    /// Which row is tried first for the selected queen, and how its alternatives are split.
    #[arg(long = "value-selection", value_enum, default_value_t)]
    value_selection: ValueSelectionStrategy,

    /// The seed of the random generator used by the random value selection.
    ///
    /// Possible values: u64
    #[arg(long = "random-seed", default_value_t = 42, verbatim_doc_comment)]
    random_seed: u64,

    /// Enables logging of the search, including every recomputation and failure.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of the statistics of the search once it stops.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,

    /// If `--verbose` is enabled then this option removes the timestamp information from the log
    /// messages.
    ///
    /// Possible values: bool
    #[arg(long = "omit-timestamp", verbatim_doc_comment)]
    omit_timestamp: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool, omit_timestamp: bool) {
    if log_statistics {
        configure_statistic_logging(
            StatisticOptions::new("%%%stat:")
                .with_postfix("%%%stat-end")
                .with_casing(Case::Camel)
                .with_scopes(StatisticScope::Search),
        );
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;
            if !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> SolverResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics, args.omit_timestamp);

    if thicket_core::asserts::THICKET_ASSERT_LEVEL_DEFINITION
        >= thicket_core::asserts::THICKET_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the Thicket assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            thicket_core::asserts::THICKET_ASSERT_LEVEL_DEFINITION
        );
    };

    let queens = Queens::new(
        args.size,
        QueensBranching {
            variable_selection: args.variable_selection,
            value_selection: args.value_selection,
            random_seed: args.random_seed,
        },
    )?;

    let solution_limit = if args.all_solutions || args.solution_limit.is_some() {
        args.solution_limit
    } else {
        Some(1)
    };
    let mut search = DepthFirstSearch::new(
        queens.space.clone(),
        SearchOptions {
            copy_distance: args.copy_distance,
            solution_limit,
            node_limit: args.node_limit,
        },
    )?;

    let mut num_solutions = 0_u64;
    let outcome = loop {
        match search.next_solution()? {
            SearchOutcome::Solution(solution) => {
                num_solutions += 1;
                println!("{}", queens.format_solution(&solution));
            }
            outcome => break outcome,
        }
    };

    match outcome {
        SearchOutcome::Exhausted if num_solutions == 0 => println!("{MSG_UNSATISFIABLE}"),
        SearchOutcome::Exhausted => println!("=========="),
        SearchOutcome::LimitReached if num_solutions == 0 => println!("{MSG_UNKNOWN}"),
        SearchOutcome::LimitReached | SearchOutcome::Solution(_) => {}
    }

    search.log_statistics();
    log_statistic_postfix();

    Ok(())
}
