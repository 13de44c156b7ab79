// Command-line interface for prosemark
//
// This binary converts between Markdown and the rich-text document tree,
// and exposes the intermediate processing stages for inspection.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected
// from the file extension, while being overridable by an explicit --from
// flag.
// Usage:
//  prosemark <input> --to <format> [--from <format>] [--output <file>]
//  prosemark convert <input> --to <format> [...]   - same as above (explicit)
//  prosemark inspect <path> [<transform>]          - run a transform (defaults to "doc-tree")
//  prosemark --list-transforms                     - list available transforms

mod transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use prosemark::{FormatRegistry, ParserConfig};
use prosemark_config::{Loader, ProsemarkConfig};
use std::fs;

fn build_cli() -> Command {
    Command::new("prosemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting rich-text documents")
        .long_about(
            "prosemark converts between Markdown and the rich-text document tree.\n\n\
            Commands:\n  \
            - convert: Transform between document formats (markdown, json)\n  \
            - inspect: View intermediate representations (tokens, tree)\n\n\
            Examples:\n  \
            prosemark notes.md --to json             # Convert to tree JSON (stdout)\n  \
            prosemark doc.json --to markdown -o n.md # Tree JSON back to Markdown\n  \
            prosemark inspect notes.md               # Tree visualization\n  \
            prosemark inspect notes.md tokens-json   # Post-pipeline token stream",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a prosemark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between different formats.\n\n\
                    Supported formats:\n  \
                    - markdown: Markdown source (.md)\n  \
                    - json:     Document tree as JSON (.json)\n  \
                    - tree:     Indented tree visualization (output only)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
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
                        .help("Target format (required)")
                        .required(true)
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
        .subcommand(
            Command::new("inspect")
                .about("Inspect intermediate representations of Markdown documents")
                .long_about(
                    "View the internal structure of a document at different\n\
                    processing stages.\n\n\
                    Transforms (stage-format):\n  \
                    - doc-tree:    built document tree, visualized (default)\n  \
                    - doc-json:    built document tree as JSON\n  \
                    - tokens-json: post-pipeline token stream as JSON",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'doc-tree'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(matches) => matches,
        Err(error) => {
            // If the first arg looks like a file rather than a subcommand,
            // retry with "convert" injected.
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "inspect"
                && args[1] != "convert"
                && args[1] != "help"
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(matches) => matches,
                    Err(retry_error) => retry_error.exit(),
                }
            } else {
                error.exit();
            }
        }
    };

    if matches.get_flag("list-transforms") {
        for transform in transforms::AVAILABLE_TRANSFORMS {
            println!("{transform}");
        }
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    let parser_config: ParserConfig = (&config.parser).into();

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").expect("to is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());

            let registry = FormatRegistry::default();
            let from = match sub_matches.get_one::<String>("from") {
                Some(from) => from.clone(),
                None => match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            handle_convert_command(&registry, input, &from, to, output);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("doc-tree");

            handle_inspect_command(path, transform, &parser_config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn load_cli_config(path: Option<&str>) -> ProsemarkConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("prosemark.toml"),
    };

    match loader.build() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error loading configuration: {error}");
            std::process::exit(1);
        }
    }
}

fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
) {
    let source = fs::read_to_string(input).unwrap_or_else(|error| {
        eprintln!("Error reading file '{input}': {error}");
        std::process::exit(1);
    });

    let document = registry.parse(&source, from).unwrap_or_else(|error| {
        eprintln!("Error: {error}");
        std::process::exit(1);
    });

    let rendered = registry.serialize(&document, to).unwrap_or_else(|error| {
        eprintln!("Error: {error}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            if let Err(error) = fs::write(path, rendered) {
                eprintln!("Error writing file '{path}': {error}");
                std::process::exit(1);
            }
        }
        None => println!("{rendered}"),
    }
}

fn handle_inspect_command(path: &str, transform: &str, config: &ParserConfig) {
    let source = fs::read_to_string(path).unwrap_or_else(|error| {
        eprintln!("Error reading file '{path}': {error}");
        std::process::exit(1);
    });

    match transforms::run_transform(transform, &source, config) {
        Ok(output) => println!("{output}"),
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    }
}
