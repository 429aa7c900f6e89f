use std::io::{self, BufRead, Write};

use tracing::info;

use crate::{error::EvalResult, evaluate, tokenize};

/// What the loop prints for each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print the value of each line.
    #[default]
    Evaluate,
    /// Print the tokens of each line as `position:token` pairs.
    Tokens,
}

/// Settings for [`run`].
#[derive(Debug, Clone, Default)]
pub struct ReplOptions {
    /// Written before every read when set. Interactive sessions set it; piped
    /// and batch input leave it empty.
    pub prompt: Option<String>,
    /// What to print for each line.
    pub mode:   Mode,
}

/// Counters collected over one run of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    /// Non-blank lines processed.
    pub evaluated: usize,
    /// Lines that ended in an error.
    pub failed:    usize,
}

impl Session {
    /// Returns `true` when no line failed.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Reads lines from `input` until it is exhausted, handling each one on its
/// own.
///
/// Blank lines are skipped. Results go to `output`, error messages to
/// `errors`; an error never stops the loop. Reaching the end of `input` ends
/// the session normally.
///
/// # Errors
/// Returns an I/O error if reading or writing fails.
///
/// # Example
/// ```
/// use leftcalc::repl::{ReplOptions, Session, run};
///
/// let input = "3+5\n\n9 @ 1\n10 / 4\n";
/// let mut output = Vec::new();
/// let mut errors = Vec::new();
///
/// let session = run(input.as_bytes(), &mut output, &mut errors, &ReplOptions::default()).unwrap();
///
/// assert_eq!(session, Session { evaluated: 3, failed: 1 });
/// assert_eq!(String::from_utf8(output).unwrap(), "8\n2.5\n");
/// assert_eq!(String::from_utf8(errors).unwrap(),
///            "Error at column 3: Unrecognized character '@'.\n");
/// ```
pub fn run<R, W, E>(mut input: R,
                    output: &mut W,
                    errors: &mut E,
                    options: &ReplOptions)
                    -> io::Result<Session>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut session = Session::default();
    let mut line = String::new();

    loop {
        if let Some(prompt) = &options.prompt {
            write!(output, "{prompt}")?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let text = line.trim_end_matches(['\n', '\r']);
        if text.trim().is_empty() {
            continue;
        }

        session.evaluated += 1;
        match render(text, options.mode) {
            Ok(rendered) => writeln!(output, "{rendered}")?,
            Err(error) => {
                session.failed += 1;
                writeln!(errors, "{error}")?;
            },
        }
    }

    // Leave the terminal on a fresh line after end-of-input at the prompt.
    if options.prompt.is_some() {
        writeln!(output)?;
    }

    info!(evaluated = session.evaluated,
          failed = session.failed,
          "session finished");
    Ok(session)
}

/// Produces the text printed for one line in the given mode.
///
/// # Errors
/// Returns the evaluation or tokenizing error for the line.
///
/// # Example
/// ```
/// use leftcalc::repl::{Mode, render};
///
/// assert_eq!(render("  12   +   8  ", Mode::Evaluate).unwrap(), "20");
/// assert_eq!(render("8 / 2", Mode::Evaluate).unwrap(), "4.0");
/// assert_eq!(render("1 * 2", Mode::Tokens).unwrap(),
///            "0:Integer(1) 2:Multiply 4:Integer(2) 5:EndOfInput");
/// ```
pub fn render(line: &str, mode: Mode) -> EvalResult<String> {
    match mode {
        Mode::Evaluate => evaluate(line).map(|value| value.to_string()),
        Mode::Tokens => {
            let tokens = tokenize(line)?;
            Ok(tokens.iter()
                     .map(|(token, position)| format!("{position}:{token}"))
                     .collect::<Vec<_>>()
                     .join(" "))
        },
    }
}
