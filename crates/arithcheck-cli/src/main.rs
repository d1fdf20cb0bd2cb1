use std::{
    io::{self, Write},
    process::ExitCode,
};

use arithcheck::{DEFAULT_MAX_NESTING_DEPTH, Strategy, Validator, ValidatorOptions};
use clap::{Parser, ValueEnum};

mod report;

/// Expressions checked when none are given on the command line.
const SAMPLES: [&str; 5] = [
    "3.5 + (2 - 4.1)",
    " -3 + (-2.5) ",
    "((1.2 + 2.3) - (3 - 4.5))",
    "3 + + 2",      // invalid
    "((1.1 + 2.2)", // invalid (unbalanced)
];

#[derive(Parser)]
#[command(name = "arithcheck")]
#[command(about = "Check arithmetic expressions for well-formedness", long_about = None)]
struct Cli {
    /// Expressions to validate. Defaults to a built-in sample set.
    #[arg(value_name = "EXPR", allow_hyphen_values = true)]
    expressions: Vec<String>,

    /// Which validator to run
    #[arg(long, value_enum, default_value_t = StrategyArg::Both)]
    strategy: StrategyArg,

    /// Run both validators and report disagreements; exits with 1 if any.
    /// Always runs both, so it cannot be combined with --strategy
    #[arg(long, conflicts_with = "strategy")]
    compare: bool,

    /// Deepest parenthesis nesting the recursive validator accepts
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// Print the token stream of each expression
    #[arg(long)]
    tokens: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Recursive,
    Linear,
    Both,
}

impl StrategyArg {
    fn strategies(self) -> &'static [Strategy] {
        match self {
            StrategyArg::Recursive => &[Strategy::Recursive],
            StrategyArg::Linear => &[Strategy::Linear],
            StrategyArg::Both => &Strategy::ALL,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let expressions: Vec<String> = if cli.expressions.is_empty() {
        SAMPLES.iter().map(ToString::to_string).collect()
    } else {
        cli.expressions
    };
    let validator = Validator::new(ValidatorOptions {
        max_nesting_depth: cli.max_depth,
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.tokens {
        report::write_tokens(&mut out, &expressions)?;
        writeln!(out)?;
    }

    if cli.compare {
        let disagreements = report::write_comparison(&mut out, &validator, &expressions)?;
        log::info!(
            "compared {} expressions, {disagreements} disagreements",
            expressions.len()
        );
        return Ok(if disagreements == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    for (i, &strategy) in cli.strategy.strategies().iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let invalid = report::write_verdicts(&mut out, &validator, strategy, &expressions)?;
        log::info!(
            "{strategy}: {} valid, {invalid} invalid",
            expressions.len() - invalid
        );
    }
    Ok(ExitCode::SUCCESS)
}
