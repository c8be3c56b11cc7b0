//! Command-line interface for strux
//! This binary converts documents between the structured-text notation and JSON.
//!
//! Usage:
//!   strux `<path>` --from `<format>` --to `<format>` [--indent `<n>`] [--output `<path>`]
//!   strux --list-formats
//!
//! The input path may be `-` (or omitted) to read stdin. On a failed
//! conversion nothing is written: the output target is left untouched.

use clap::{Arg, ArgAction, Command};
use std::io::Read;
use strux_babel::FormatRegistry;
use strux_babel::formats::json::JsonFormat;
use strux_babel::formats::text::StructuredTextFormat;
use strux_config::{Loader, StruxConfig};

fn main() {
    let matches = Command::new("strux")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert documents between structured text and JSON")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input file ('-' or absent reads stdin)")
                .index(1),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .short('f')
                .help("Source format (e.g., 'text', 'json')")
                .required_unless_present("list-formats"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .help("Target format (e.g., 'text', 'json')")
                .required_unless_present("list-formats"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .help("Indent width for the output format (overrides config)")
                .value_parser(clap::value_parser!(u16).range(1..)),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write output to a file instead of stdout"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(
        matches.get_one::<String>("config").map(String::as_str),
        matches.get_one::<u16>("indent").copied(),
    );
    let registry = build_registry(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let from = matches
        .get_one::<String>("from")
        .expect("--from is required unless listing formats");
    let to = matches
        .get_one::<String>("to")
        .expect("--to is required unless listing formats");
    let input = matches.get_one::<String>("input").map(String::as_str);
    let output = matches.get_one::<String>("output").map(String::as_str);

    handle_convert_command(&registry, input, from, to, output);
}

/// Layer CLI settings over the embedded defaults and an optional user file.
fn load_config(config_path: Option<&str>, indent: Option<u16>) -> StruxConfig {
    let mut loader = Loader::new();
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    if let Some(indent) = indent {
        loader = loader
            .set_override("convert.text.indent_width", i64::from(indent))
            .and_then(|l| l.set_override("convert.json.indent", i64::from(indent)))
            .unwrap_or_else(|e| {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            });
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn build_registry(config: &StruxConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(JsonFormat::new(config.convert.json.indent));
    registry.register(StructuredTextFormat::new(config.convert.text.indent_width));
    registry
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: Option<&str>,
    from: &str,
    to: &str,
    output: Option<&str>,
) {
    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Read error: {}", e);
        std::process::exit(1);
    });

    let converted = strux_babel::convert(registry, &source, from, to).unwrap_or_else(|e| {
        eprintln!("Conversion error: {}", e);
        eprintln!("\nAvailable formats:");
        for name in registry.list_formats() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &converted) {
                eprintln!("Write error: {}", e);
                std::process::exit(1);
            }
        }
        None => print!("{}", converted),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        match registry.get(&name) {
            Ok(format) => println!("  {} - {}", name, format.description()),
            Err(_) => println!("  {}", name),
        }
    }
}

fn read_input(input: Option<&str>) -> std::io::Result<String> {
    match input {
        Some("-") | None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}
