//! Command-line interface for treedump
//! This binary dumps tree descriptions (JSON or YAML) in one of the registered formats.
//!
//! Usage:
//!   treedump dump `<path>` [--format `<format>`] [--indent `<unit>`] [--max-depth `<n>`] [--config `<file>`]
//!   treedump list-formats
//!
//! Set `RUST_LOG=debug` to trace loading and dumping.

use clap::{value_parser, Arg, ArgMatches, Command};
use std::io;
use std::process;
use treedump::dump::{dump_to_writer, DumpOptions};
use treedump::formats::{FormatRegistry, DEFAULT_REGISTRY};
use treedump::loader;
use treedump_config::{Loader, TreedumpConfig};

fn main() {
    pretty_env_logger::init();

    let matches = Command::new("treedump")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Dump abstract syntax trees for inspection")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("dump")
                .about("Dump a tree description")
                .arg(
                    Arg::new("path")
                        .help("Path to the tree description (.json, .yaml or .yml)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'dump', 'treeviz', 'json')"),
                )
                .arg(
                    Arg::new("indent")
                        .long("indent")
                        .help("Indentation unit repeated once per nesting level"),
                )
                .arg(
                    Arg::new("max-depth")
                        .long("max-depth")
                        .help("Fail on nodes deeper than this (0 disables the limit)")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the built-in defaults"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("dump", dump_matches)) => {
            if let Err(message) = handle_dump_command(dump_matches) {
                eprintln!("Error: {}", message);
                process::exit(1);
            }
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

fn load_config(matches: &ArgMatches) -> Result<TreedumpConfig, String> {
    let mut config_loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        config_loader = config_loader.with_file(path);
    }
    if let Some(unit) = matches.get_one::<String>("indent") {
        config_loader = config_loader
            .set_override("dump.indent_unit", unit.as_str())
            .map_err(|e| e.to_string())?;
    }
    if let Some(depth) = matches.get_one::<u32>("max-depth") {
        config_loader = config_loader
            .set_override("dump.max_depth", i64::from(*depth))
            .map_err(|e| e.to_string())?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        config_loader = config_loader
            .set_override("output.format", format.as_str())
            .map_err(|e| e.to_string())?;
    }
    config_loader
        .build()
        .map_err(|e| format!("invalid configuration: {}", e))
}

/// Handle the dump command
fn handle_dump_command(matches: &ArgMatches) -> Result<(), String> {
    let config = load_config(matches)?;
    let path = matches
        .get_one::<String>("path")
        .ok_or_else(|| "path is required".to_string())?;

    let root = loader::load_path(path).map_err(|e| e.to_string())?;
    let options = DumpOptions::from(&config.dump);
    let format = config.output.format.as_str();

    // the dump format streams straight to stdout, line by line
    if format == "dump" {
        let _stdout =
            dump_to_writer(&root, &options, io::stdout().lock()).map_err(|e| e.to_string())?;
        return Ok(());
    }

    let registry = FormatRegistry::with_options(&options);
    let output = registry.serialize(&root, format).map_err(|e| {
        format!(
            "{}\nAvailable formats: {}",
            e,
            registry.list_formats().join(", ")
        )
    })?;
    print!("{}", output);
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = &*DEFAULT_REGISTRY;
    println!("Available output formats:\n");

    for formatter in registry.formatters() {
        println!("  {}", formatter.name());
        println!("    {}", formatter.description());
        println!();
    }
}
