//! Pipe mode: one command per stdin line.

use std::io::{BufRead, Write};

use crate::format::{format_error, OutputMode};
use crate::parse::line_to_action;
use crate::print_outcome;
use crate::session::Session;

/// Run every line of `input`. Returns the process exit code: 1 if any
/// line failed to parse or execute, 0 otherwise. A failed write to `out`
/// stops the run with exit code 1.
pub fn run_pipe<R: BufRead, W: Write, E: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    err: &mut E,
    mode: OutputMode,
) -> i32 {
    let mut exit_code = 0;
    for (n, line) in input.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                let _ = writeln!(err, "(error) failed to read stdin: {}", e);
                return 1;
            }
        };
        let action = match line_to_action(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(e) => {
                let _ = writeln!(err, "(error) line {}: {}", n + 1, e);
                exit_code = 1;
                continue;
            }
        };
        match session.run(action) {
            Ok(outcome) => {
                if let Err(e) = print_outcome(out, &outcome, mode) {
                    let _ = writeln!(err, "(error) Failed to write output: {}", e);
                    return 1;
                }
            }
            Err(e) => {
                let _ = writeln!(err, "{}", format_error(&e, mode));
                exit_code = 1;
            }
        }
    }
    exit_code
}
