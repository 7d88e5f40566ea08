//! Clap command tree.

use clap::{Arg, ArgAction, ArgGroup, Command};

/// Build the full `jsondb` command tree.
pub fn build_cli() -> Command {
    Command::new("jsondb")
        .about("Read and edit JSON document files and folder databases")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("env-file")
                .long("env-file")
                .value_name("PATH")
                .global(true)
                .help("Load KEY=VALUE options before running"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Log to stderr (-v info, -vv debug)"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Pretty-print responses"),
        )
        .arg(
            Arg::new("async")
                .long("async")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Use non-blocking file I/O"),
        )
        .subcommand(
            Command::new("read")
                .about("Print a whole file")
                .arg(Arg::new("path").required(true)),
        )
        .subcommand(addressed(
            Command::new("get")
                .about("Print one item")
                .arg(Arg::new("path").required(true)),
        ))
        .subcommand(
            Command::new("add")
                .about("Append a value to an array file")
                .arg(Arg::new("path").required(true))
                .arg(shape_arg().default_value("array"))
                .arg(Arg::new("value").required(true).help("JSON, or a bare string")),
        )
        .subcommand(addressed(
            Command::new("set")
                .about("Assign an object key or insert at an array index")
                .arg(Arg::new("path").required(true))
                .arg(Arg::new("value").required(true).help("JSON, or a bare string")),
        ))
        .subcommand(addressed(
            Command::new("remove")
                .about("Remove an object key or an array element")
                .arg(Arg::new("path").required(true)),
        ))
        .subcommand(
            Command::new("is-folder")
                .about("Check whether a path is a directory")
                .arg(Arg::new("folder").required(true)),
        )
        .subcommand(
            Command::new("env")
                .about("Parse a KEY=VALUE file")
                .arg(Arg::new("path").required(true)),
        )
        .subcommand(
            Command::new("exec")
                .about("Run JSON commands against one shared registry")
                .arg(
                    Arg::new("json")
                        .help("A command object or an array of them; read from stdin if absent"),
                ),
        )
}

fn shape_arg() -> Arg {
    Arg::new("type")
        .short('t')
        .long("type")
        .value_parser(["array", "object"])
        .help("Document shape")
}

/// Add `--type` plus the mutually exclusive `--key`/`--index` pair.
fn addressed(cmd: Command) -> Command {
    cmd.arg(shape_arg().required(true))
        .arg(
            Arg::new("key")
                .short('k')
                .long("key")
                .help("Object key"),
        )
        .arg(
            Arg::new("index")
                .short('i')
                .long("index")
                .help("Array index"),
        )
        .group(ArgGroup::new("address").args(["key", "index"]))
}
