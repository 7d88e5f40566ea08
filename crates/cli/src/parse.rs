//! ArgMatches → Command conversion.
//!
//! Subcommands map one-to-one onto executor commands; `exec` decodes JSON
//! into as many commands as it holds.

use std::path::PathBuf;

use clap::ArgMatches;
use jsondb_executor::Command;
use serde_json::Value;

use crate::value::{parse_batch, parse_index, parse_value};

/// Convert clap ArgMatches into the commands to run, in order.
///
/// `stdin` is consulted only by `exec` without an inline argument.
pub fn matches_to_commands<F>(matches: &ArgMatches, stdin: F) -> Result<Vec<Command>, String>
where
    F: FnOnce() -> Result<String, String>,
{
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    let command = match sub_name {
        "read" => Command::Read {
            path: path_arg(m, "path"),
        },
        "get" => {
            let (key, index) = address_args(m);
            Command::Get {
                path: path_arg(m, "path"),
                shape: m.get_one::<String>("type").cloned(),
                key,
                index,
            }
        }
        "add" => Command::Add {
            path: path_arg(m, "path"),
            shape: m.get_one::<String>("type").cloned(),
            value: value_arg(m),
        },
        "set" => {
            let (key, index) = address_args(m);
            Command::Set {
                path: path_arg(m, "path"),
                shape: m.get_one::<String>("type").cloned(),
                key,
                index,
                value: value_arg(m),
            }
        }
        "remove" => {
            let (key, index) = address_args(m);
            Command::Remove {
                path: path_arg(m, "path"),
                shape: m.get_one::<String>("type").cloned(),
                key,
                index,
            }
        }
        "is-folder" => Command::IsFolder {
            folder: path_arg(m, "folder"),
        },
        "env" => Command::ReadEnv {
            path: path_arg(m, "path"),
        },
        "exec" => return parse_exec(m, stdin),
        other => return Err(format!("Unknown command: {}", other)),
    };
    Ok(vec![command])
}

fn parse_exec<F>(m: &ArgMatches, stdin: F) -> Result<Vec<Command>, String>
where
    F: FnOnce() -> Result<String, String>,
{
    let raw = match m.get_one::<String>("json") {
        Some(inline) => inline.clone(),
        None => stdin()?,
    };
    parse_batch(&raw)?
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            Command::from_json(item).map_err(|e| format!("Command {}: {}", i, e))
        })
        .collect()
}

fn path_arg(m: &ArgMatches, name: &str) -> Option<PathBuf> {
    m.get_one::<String>(name).map(PathBuf::from)
}

fn value_arg(m: &ArgMatches) -> Option<Value> {
    m.get_one::<String>("value").map(|raw| parse_value(raw))
}

fn address_args(m: &ArgMatches) -> (Option<Value>, Option<Value>) {
    let key = m
        .get_one::<String>("key")
        .map(|k| Value::String(k.clone()));
    let index = m.get_one::<String>("index").map(|i| parse_index(i));
    (key, index)
}
