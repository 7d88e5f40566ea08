//! jsondb CLI: run file and registry operations from the shell.
//!
//! - `jsondb get users.json --type object --key alice` runs one operation
//! - `jsondb exec '[{...}, {...}]'` runs a batch against one shared registry
//! - `echo '{...}' | jsondb exec` reads the batch from stdin
//!
//! Every response is printed to stdout; the exit code is 1 if any failed.

mod commands;
mod format;
mod parse;
mod value;

use std::io::Read;
use std::process;
use std::sync::Arc;

use jsondb_engine::{Config, Registry};
use jsondb_executor::{Command, Executor, Response};
use tracing::Level;

use commands::build_cli;
use format::{format_response, OutputMode};
use parse::matches_to_commands;

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    let output_mode = if matches.get_flag("pretty") {
        OutputMode::Pretty
    } else {
        OutputMode::Json
    };

    let executor = match open_executor(&matches) {
        Ok(executor) => executor,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    let commands = match matches_to_commands(&matches, read_stdin) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    let responses = if matches.get_flag("async") {
        match run_async(&executor, commands) {
            Ok(responses) => responses,
            Err(e) => {
                eprintln!("(error) {}", e);
                process::exit(1);
            }
        }
    } else {
        commands
            .into_iter()
            .map(|cmd| executor.execute(cmd))
            .collect()
    };

    let mut exit_code = 0;
    for response in &responses {
        println!("{}", format_response(response, output_mode));
        if !response.is_ok() {
            exit_code = 1;
        }
    }
    process::exit(exit_code);
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => return,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Build an executor, seeding its options from `--env-file` when given.
fn open_executor(matches: &clap::ArgMatches) -> Result<Executor, String> {
    let config = Config::new();
    if let Some(path) = matches.get_one::<String>("env-file") {
        let env = jsondb_storage::blocking::read_env_file(path)
            .map_err(|e| format!("Failed to load env file: {}", e))?;
        config.merge_env(&env);
    }
    Ok(Executor::new(Arc::new(Registry::new()), Arc::new(config)))
}

/// Run the batch in order on a single-threaded runtime.
fn run_async(executor: &Executor, commands: Vec<Command>) -> Result<Vec<Response>, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {}", e))?;
    Ok(runtime.block_on(async {
        let mut responses = Vec::with_capacity(commands.len());
        for cmd in commands {
            responses.push(executor.execute_async(cmd).await);
        }
        responses
    }))
}

fn read_stdin() -> Result<String, String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;
    Ok(buf)
}
