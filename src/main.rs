use std::{
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal},
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use leftcalc::repl::{self, Mode, ReplOptions};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// leftcalc evaluates integer arithmetic strictly left to right, with no
/// operator precedence.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells leftcalc to read expressions from a file, one per line, instead
    /// of evaluating a single expression.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the tokens of each line instead of its value.
    #[arg(short, long)]
    tokens: bool,

    /// Prompt shown before each line when reading from a terminal.
    #[arg(short, long, default_value = "calc> ")]
    prompt: String,

    /// Raises the log level; repeat for more detail. `RUST_LOG` takes
    /// precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// An expression, or a file path with `--file`. Lines are read from
    /// standard input when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mode = if args.tokens { Mode::Tokens } else { Mode::Evaluate };

    match args.contents {
        Some(expression) if !args.file => match repl::render(&expression, mode) {
            Ok(rendered) => {
                println!("{rendered}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        },
        Some(path) => {
            let Ok(file) = File::open(&path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            };
            run_session(BufReader::new(file),
                        &ReplOptions { prompt: None,
                                       mode },
                        true)
        },
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let options = ReplOptions { prompt: interactive.then_some(args.prompt),
                                        mode };
            run_session(stdin.lock(), &options, !interactive)
        },
    }
}

/// Runs the loop over `input`. With `strict`, any failed line makes the
/// process exit with a failure status.
fn run_session(input: impl BufRead, options: &ReplOptions, strict: bool) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match repl::run(input, &mut stdout, &mut stderr, options) {
        Ok(session) if strict && !session.succeeded() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(%e, "i/o failure");
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(true)
                             .init();
}
