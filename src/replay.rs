//! Line-oriented session scripts for driving an engine from the CLI.
//!
//! ```text
//! # comment
//! register john GoodPass1!
//! authenticate john GoodPass1!
//! submit john M1 3
//! get john 0
//! ```

use crate::engine::Irms;
use crate::errors::{IrmsError, IrmsResult};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Register { name: String, password: String },
    Authenticate { name: String, password: String },
    Logout { name: String },
    Promote { name: String, badge: String },
    Submit { name: String, id: String, rating: i64 },
    Get { name: String, index: i64 },
    Saved { id: String, rating: i64 },
    Role { name: String },
}

impl ScriptCommand {
    /// Parse one script line; blank lines and `#` comments yield `None`
    pub fn parse(line_no: usize, line: &str) -> IrmsResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let (verb, args) = (words[0], &words[1..]);
        let arity = |n: usize| -> IrmsResult<()> {
            if args.len() != n {
                return Err(IrmsError::script(
                    line_no,
                    format!("'{verb}' takes {n} argument(s), got {}", args.len()),
                ));
            }
            Ok(())
        };
        let number = |raw: &str, what: &str| -> IrmsResult<i64> {
            raw.parse::<i64>()
                .map_err(|_| IrmsError::script(line_no, format!("{what} '{raw}' is not an integer")))
        };

        let command = match verb {
            "register" => {
                arity(2)?;
                ScriptCommand::Register {
                    name: args[0].to_string(),
                    password: args[1].to_string(),
                }
            }
            "authenticate" => {
                arity(2)?;
                ScriptCommand::Authenticate {
                    name: args[0].to_string(),
                    password: args[1].to_string(),
                }
            }
            "logout" => {
                arity(1)?;
                ScriptCommand::Logout {
                    name: args[0].to_string(),
                }
            }
            "promote" => {
                arity(2)?;
                ScriptCommand::Promote {
                    name: args[0].to_string(),
                    badge: args[1].to_string(),
                }
            }
            "submit" => {
                arity(3)?;
                ScriptCommand::Submit {
                    name: args[0].to_string(),
                    id: args[1].to_string(),
                    rating: number(args[2], "rating")?,
                }
            }
            "get" => {
                arity(2)?;
                ScriptCommand::Get {
                    name: args[0].to_string(),
                    index: number(args[1], "index")?,
                }
            }
            "saved" => {
                arity(2)?;
                ScriptCommand::Saved {
                    id: args[0].to_string(),
                    rating: number(args[1], "rating")?,
                }
            }
            "role" => {
                arity(1)?;
                ScriptCommand::Role {
                    name: args[0].to_string(),
                }
            }
            other => {
                return Err(IrmsError::script(
                    line_no,
                    format!("unknown command '{other}'"),
                ))
            }
        };
        Ok(Some(command))
    }

    /// Run against the engine and render a single result line
    pub fn execute(&self, irms: &mut Irms) -> CommandOutcome {
        let render = |label: String, result: IrmsResult<()>| match result {
            Ok(()) => CommandOutcome::ok(format!("ok {label}")),
            Err(e) => CommandOutcome::failed(label, &e),
        };

        match self {
            ScriptCommand::Register { name, password } => render(
                format!("register {name}"),
                irms.register_analyst(name, password),
            ),
            ScriptCommand::Authenticate { name, password } => render(
                format!("authenticate {name}"),
                irms.authenticate(name, password),
            ),
            ScriptCommand::Logout { name } => render(format!("logout {name}"), irms.logout(name)),
            ScriptCommand::Promote { name, badge } => render(
                format!("promote {name}"),
                irms.request_supervisor_access(name, badge),
            ),
            ScriptCommand::Submit { name, id, rating } => render(
                format!("submit {name} {id} {rating}"),
                irms.submit_incident(name, id, *rating),
            ),
            ScriptCommand::Get { name, index } => match irms.get_incident(name, *index) {
                Ok((id, rating)) => {
                    CommandOutcome::ok(format!("ok get {name} {index} -> {id} {rating}"))
                }
                Err(e) => CommandOutcome::failed(format!("get {name} {index}"), &e),
            },
            ScriptCommand::Saved { id, rating } => CommandOutcome::ok(format!(
                "saved {id} {rating} -> {}",
                irms.is_saved_incident(id, *rating)
            )),
            ScriptCommand::Role { name } => match irms.get_analyst_role(name) {
                Some(role) => CommandOutcome::ok(format!("role {name} -> {role}")),
                None => CommandOutcome::ok(format!("role {name} -> unregistered")),
            },
        }
    }
}

/// Result of one executed command. Queries always succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub succeeded: bool,
    pub line: String,
}

impl CommandOutcome {
    fn ok(line: String) -> Self {
        Self {
            succeeded: true,
            line,
        }
    }

    fn failed(label: String, err: &IrmsError) -> Self {
        Self {
            succeeded: false,
            line: format!("error {label}: {err} [{}]", err.kind()),
        }
    }
}

/// Totals for a completed replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub commands: usize,
    pub failures: usize,
}

/// Execute every command in `script`, writing one line per command to `out`.
/// Rule failures are reported and skipped; a malformed line stops the replay.
pub fn replay<W: Write>(irms: &mut Irms, script: &str, out: &mut W) -> IrmsResult<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for (idx, line) in script.lines().enumerate() {
        let Some(command) = ScriptCommand::parse(idx + 1, line)? else {
            continue;
        };
        let outcome = command.execute(irms);
        summary.commands += 1;
        if !outcome.succeeded {
            summary.failures += 1;
        }
        writeln!(out, "{}", outcome.line).map_err(|e| IrmsError::io("writing replay output", e))?;
    }

    tracing::debug!(
        commands = summary.commands,
        failures = summary.failures,
        "replay finished"
    );
    Ok(summary)
}
