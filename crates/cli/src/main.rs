//! ledgercc: command-line harness for the transition handler.
//!
//! Two modes:
//! - **Shell mode**: `ledgercc [flags] COMMAND` runs one command and exits
//! - **Pipe mode**: `printf 'init A 100 B 200\nmove A B 10\n' | ledgercc`
//!   runs one command per stdin line
//!
//! The ledger lives in a JSON snapshot file. It is loaded at start and
//! saved after any read-write run that reached the handler.

mod commands;
mod config;
mod format;
mod parse;
mod pipe;
mod session;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use config::CliConfig;
use format::{format_error, format_info, format_keys, format_payload, OutputMode};
use parse::matches_to_action;
use session::{Outcome, Session};

fn main() {
    let matches = build_cli().get_matches();

    let output = if matches.get_flag("json") {
        Some(OutputMode::Json)
    } else if matches.get_flag("raw") {
        Some(OutputMode::Raw)
    } else {
        None
    };

    let config = match CliConfig::load(matches.get_one::<String>("config").map(PathBuf::from).as_deref()) {
        Ok(config) => config.with_overrides(
            matches.get_one::<String>("ledger").map(PathBuf::from),
            matches.get_flag("read-only"),
            output,
        ),
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    let dispatch = build_dispatch(&config.log_level);

    let mut session = match Session::open(&config, dispatch) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("(error) Failed to open ledger: {}", e);
            process::exit(1);
        }
    };

    let mode = config.output;
    let mut exit_code = if matches.subcommand().is_some() {
        run_shell_mode(&matches, &mut session, mode)
    } else if io::stdin().is_terminal() {
        eprintln!("(error) No command given. Run `ledgercc --help` for usage.");
        2
    } else {
        let stdin = io::stdin();
        pipe::run_pipe(
            &mut session,
            stdin.lock(),
            &mut io::stdout(),
            &mut io::stderr(),
            mode,
        )
    };

    if let Err(e) = session.save_if_dirty() {
        eprintln!("(error) Failed to save ledger: {}", e);
        exit_code = 1;
    }
    process::exit(exit_code);
}

/// Stderr logger. `RUST_LOG` wins over the configured level.
fn build_dispatch(level: &str) -> Dispatch {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    Dispatch::new(subscriber)
}

fn run_shell_mode(matches: &clap::ArgMatches, session: &mut Session, mode: OutputMode) -> i32 {
    let action = match matches_to_action(matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("(error) {}", e);
            return 1;
        }
    };
    match session.run(action) {
        Ok(outcome) => {
            if let Err(e) = print_outcome(&mut io::stdout(), &outcome, mode) {
                eprintln!("(error) Failed to write output: {}", e);
                return 1;
            }
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}

/// Write one outcome. Raw payloads get no trailing newline.
pub(crate) fn print_outcome<W: Write>(out: &mut W, outcome: &Outcome, mode: OutputMode) -> io::Result<()> {
    match outcome {
        Outcome::Payload(payload) => {
            out.write_all(&format_payload(payload, mode))?;
            if mode != OutputMode::Raw {
                out.write_all(b"\n")?;
            }
        }
        Outcome::Info { version, keys } => writeln!(out, "{}", format_info(*version, *keys, mode))?,
        Outcome::Keys(keys) => writeln!(out, "{}", format_keys(keys, mode))?,
    }
    out.flush()
}
