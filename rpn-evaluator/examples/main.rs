use std::process;

use clap::{Parser, ValueEnum};
use rpn_evaluator::exit_status::{self, USAGE_STATUS};
use rpn_evaluator::tokenizer::Tokenizer;
use rpn_evaluator::{EvaluatorConfig, OverflowPolicy, RpnEvaluator, DEFAULT_CAPACITY};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Overflow {
    Error,
    Wrapping,
    Saturating,
}

impl From<Overflow> for OverflowPolicy {
    fn from(value: Overflow) -> Self {
        match value {
            Overflow::Error => OverflowPolicy::Error,
            Overflow::Wrapping => OverflowPolicy::Wrapping,
            Overflow::Saturating => OverflowPolicy::Saturating,
        }
    }
}

/// Evaluate a postfix expression given as separate arguments, e.g. `rpn 10 3 -`.
///
/// The result is printed on stdout and also returned as the exit status,
/// reduced modulo 128. Failures exit with 193..=196, usage errors with 200.
///
/// Options must come before the first token: once a token has been seen,
/// everything after it (including `--capacity` and friends) is read as a
/// token, so `rpn 1 2 --capacity 1` fails with a malformed operand.
#[derive(Parser, Debug)]
#[command(name = "rpn", version)]
struct Args {
    /// Maximum number of operands held at once
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Behavior when a literal or a result leaves the 64-bit range
    #[arg(long, value_enum, default_value_t = Overflow::Error)]
    overflow: Overflow,

    /// Print the classified tokens before evaluating
    #[arg(long)]
    debug_tokens: bool,

    /// Exit with the low 8 bits of the result instead of the modular status
    #[arg(long)]
    raw_status: bool,

    /// Operands (digits only) and operators (`+`, `-`)
    #[arg(allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn init_logging() {
    // RPN_LOG wins over RUST_LOG; default to warn.
    let filter = EnvFilter::try_from_env("RPN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { USAGE_STATUS } else { 0 });
        }
    };

    init_logging();

    let evaluator = RpnEvaluator::new(
        EvaluatorConfig::default()
            .with_capacity(args.capacity)
            .with_overflow(args.overflow.into()),
    );

    if args.debug_tokens {
        match Tokenizer::new(evaluator.config().overflow).tokenize(&args.tokens) {
            Ok(tokens) => println!("Tokens: {}", tokens),
            Err(e) => eprintln!("Tokens: invalid input: {}", e),
        }
    }

    let outcome = evaluator.evaluate(&args.tokens);
    let status = match &outcome {
        Ok(result) => {
            println!("{}", result);
            if args.raw_status {
                exit_status::raw_status(*result)
            } else {
                exit_status::success_status(*result)
            }
        }
        Err(e) => {
            eprintln!("Failed to evaluate the expression: {}", e);
            exit_status::error_status(e)
        }
    };

    process::exit(status);
}
