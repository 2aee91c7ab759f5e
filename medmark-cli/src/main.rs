// Command-line interface for medmark
//
// This binary drives the medmark-render formats from files: markdown notes and AI answers to
// HTML, JSON objects and test reports to markdown or HTML, and chat transcripts to annotated JSON.
//
// Converting:
//
// The conversion needs a from and to pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. An input of "-" reads stdin and then
// requires --from.
// Usage:
//  medmark <input> --to <target> [--from <format>] [--output <file>]           - Convert (default)
//  medmark convert <input> --to <target> [--from <format>] [--output <file>]   - Same as above
//  medmark --list-formats                                                       - List formats
//
// Extra Parameters:
//
// Per-run option overrides can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and applies them on top of the loaded configuration.
// Example:
//  medmark notes.md --to html --extra-escape-html
//  medmark thread.chat.json --to json --extra-ai-senders ai,assistant
//  medmark thread.chat.json --to json --extra-message-field text

use clap::{Arg, ArgAction, Command, ValueHint};
use medmark_config::{Loader, MedmarkConfig};
use medmark_render::{FormatError, FormatRegistry, OutputKind, RenderOptions};
use std::collections::HashMap;
use std::fs;
use std::io;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

const SUBCOMMANDS: &[&str] = &["convert", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    let targets: Vec<&str> = OutputKind::ALL.iter().map(|kind| kind.name()).collect();

    Command::new("medmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert clinical markdown, objects and chat transcripts to HTML")
        .long_about(
            "medmark renders the text a care platform shows its users.\n\n\
            Formats:\n  \
            - markdown: AI answers and notes (.md, .markdown, .txt) -> html\n  \
            - object:   JSON key/value objects (.json) -> markdown, html\n  \
            - results:  test reports with reference ranges (.results.json) -> markdown, html\n  \
            - chat:     chat transcripts (.chat.json) -> json\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration for one run.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            medmark answer.md --to html                     # Print HTML to stdout\n  \
            medmark cbc.results.json --to html -o cbc.html  # Write HTML to a file\n  \
            medmark notes.md --to html --extra-escape-html  # Escape untrusted text",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a medmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v debug, -vv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert an input file (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target output kind (required)")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(targets))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that is neither a flag nor a subcommand is an input file
            if cleaned_args.len() > 1 && is_implicit_input(&cleaned_args[1]) {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_count("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    if let Some(key) = extra_params.keys().min() {
        exit_with(FormatError::NotSupported(format!(
            "unknown extra parameter '--extra-{key}'"
        )));
    }
    let options = RenderOptions::from(&config);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches
                .get_one::<String>("to")
                .expect("to is required")
                .parse::<OutputKind>()
                .unwrap_or_else(|e| exit_with(e));
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());

            let registry = FormatRegistry::default();
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => match registry.detect_format_from_filename(input) {
                    Some(detected) => {
                        debug!(input, format = %detected, "detected source format");
                        detected
                    }
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            handle_convert_command(&registry, input, &from, to, output, &options);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Whether the first argument is an input path for the default `convert` command.
/// `-` is stdin, not a flag.
fn is_implicit_input(arg: &str) -> bool {
    arg == "-" || (!arg.starts_with('-') && !SUBCOMMANDS.contains(&arg))
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: OutputKind,
    output: Option<&str>,
    options: &RenderOptions,
) {
    if let Err(e) = registry.get(from) {
        exit_with(e);
    }

    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let result = registry
        .convert(&source, from, to, options)
        .unwrap_or_else(|e| exit_with(e));

    match output {
        Some(path) => {
            debug!(path, bytes = result.len(), "writing output");
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let targets: Vec<&str> = format.targets().iter().map(|kind| kind.name()).collect();
        println!(
            "  {name:<10} -> {:<16} .{:<24} {}",
            targets.join(", "),
            format.file_extensions().join(", ."),
            format.description()
        );
    }
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(input)
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn load_cli_config(explicit_path: Option<&str>) -> MedmarkConfig {
    let loader = Loader::new().with_optional_file("medmark.toml");
    let loader = if let Some(path) = explicit_path {
        debug!(path, "loading explicit config");
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut MedmarkConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("escape-html") {
        config.html.escape_html = parse_bool_arg("escape-html", &raw);
    }

    if let Some(raw) = extra_params.remove("ai-senders") {
        config.chat.ai_senders = raw
            .split(',')
            .map(str::trim)
            .filter(|sender| !sender.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(field) = extra_params.remove("message-field") {
        config.chat.message_field = field;
    }

    if let Some(field) = extra_params.remove("fallback-field") {
        config.chat.fallback_field = field;
    }
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn exit_with(err: FormatError) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
