//! ArgMatches and pipe lines to [`CliAction`].

use clap::ArgMatches;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Instantiate with `[A, Aval, B, Bval]`.
    Init(Vec<String>),
    /// Invoke `function` with `args`.
    Invoke { function: String, args: Vec<String> },
    /// Ledger version and key count.
    Info,
    /// Stored keys.
    Keys,
}

impl CliAction {
    /// True if the action runs the handler (and may write the ledger).
    pub fn runs_handler(&self) -> bool {
        matches!(self, CliAction::Init(_) | CliAction::Invoke { .. })
    }
}

/// Convert parsed shell-mode arguments.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (name, m) = matches.subcommand().ok_or("No command given")?;
    match name {
        "init" => {
            let args = ["a", "a_value", "b", "b_value"]
                .iter()
                .map(|id| {
                    m.get_one::<String>(id)
                        .cloned()
                        .ok_or_else(|| format!("Missing argument: {}", id))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(CliAction::Init(args))
        }
        "invoke" => {
            let function = m
                .get_one::<String>("function")
                .cloned()
                .ok_or("Missing function name")?;
            let args = m
                .get_many::<String>("args")
                .map(|vals| vals.cloned().collect())
                .unwrap_or_default();
            Ok(CliAction::Invoke { function, args })
        }
        "info" => Ok(CliAction::Info),
        "keys" => Ok(CliAction::Keys),
        other => Err(format!("Unknown command: {}", other)),
    }
}

/// Parse one pipe-mode line.
///
/// Returns `Ok(None)` for blank lines and `#` comments. `init ...` runs
/// instantiate; any other line is `function args..`.
pub fn line_to_action(line: &str) -> Result<Option<CliAction>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let mut words = shlex::split(trimmed).ok_or("Unbalanced quotes")?.into_iter();
    let Some(first) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<String> = words.collect();
    Ok(Some(match first.as_str() {
        "init" => CliAction::Init(rest),
        _ => CliAction::Invoke {
            function: first,
            args: rest,
        },
    }))
}
