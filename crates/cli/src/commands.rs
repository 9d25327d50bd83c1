//! Clap command tree.

use clap::{Arg, ArgAction, Command};

/// Build the `ledgercc` command.
pub fn build_cli() -> Command {
    Command::new("ledgercc")
        .about("Run chaincode transitions against a local ledger snapshot")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .global(true)
                .help("TOML config file (default: ledgercc.toml if present)"),
        )
        .arg(
            Arg::new("ledger")
                .long("ledger")
                .value_name("FILE")
                .global(true)
                .help("Ledger snapshot file"),
        )
        .arg(
            Arg::new("read-only")
                .long("read-only")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Reject mutating operations and never save the snapshot"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .global(true)
                .conflicts_with("raw")
                .help("Print results as JSON"),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print payload bytes only"),
        )
        .subcommand(
            Command::new("init")
                .about("Seed two balances")
                .arg(Arg::new("a").required(true))
                .arg(Arg::new("a_value").required(true).allow_hyphen_values(true))
                .arg(Arg::new("b").required(true))
                .arg(Arg::new("b_value").required(true).allow_hyphen_values(true)),
        )
        .subcommand(
            Command::new("invoke")
                .about("Invoke a function: delete, query, move, write, read, storeFactor, getFactor")
                .arg(Arg::new("function").required(true))
                .arg(
                    Arg::new("args")
                        .num_args(0..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(Command::new("info").about("Show ledger version and key count"))
        .subcommand(Command::new("keys").about("List stored keys"))
}
