// Command-line interface for htmlflow
//
// Reads an HTML file (or stdin), flattens it into text sections with the htmlflow library and
// prints them in one of the output formats.
//
// Usage:
//  htmlflow <input> [--to <format>] [--output <file>]            - Convert (default)
//  htmlflow convert <input> [--to <format>] [--output <file>]    - Same as above (explicit)
//  htmlflow --list-formats                                       - List output formats
//
// Settings come from the embedded defaults, then ./htmlflow.toml if present, then the file
// given with --config, then the command-line flags, each layer overriding the one before.

use htmlflow::{ConvertOptions, OutputFormat};
use htmlflow_config::{FlowConfig, Loader};
use std::fs;
use std::io::{self, Read};

mod cli;

const LOCAL_CONFIG: &str = "htmlflow.toml";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    let cli = cli::build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // A bare file argument means "convert"
            if args.len() > 1
                && (args[1] == "-" || !args[1].starts_with('-'))
                && args[1] != "convert"
                && args[1] != "help"
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let config = load_cli_config(
                matches.get_one::<String>("config").map(|s| s.as_str()),
                sub_matches.get_one::<usize>("max-depth").copied(),
            );

            let format = match sub_matches.get_one::<String>("to") {
                Some(name) => name.parse::<OutputFormat>().unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }),
                None => config.output.format,
            };
            let pretty = config.output.pretty && !sub_matches.get_flag("compact");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());

            handle_convert_command(input, format, pretty, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn load_cli_config(path: Option<&str>, max_depth: Option<usize>) -> FlowConfig {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(depth) = max_depth {
        let depth = i64::try_from(depth).unwrap_or(i64::MAX);
        loader = loader
            .set_override("convert.max_depth", depth)
            .unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
    }

    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {e}");
        std::process::exit(1);
    })
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    format: OutputFormat,
    pretty: bool,
    output: Option<&str>,
    config: &FlowConfig,
) {
    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let options = ConvertOptions::from(&config.convert);
    let sections = htmlflow::convert_with_options(&source, &options).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });
    log::info!("{input}: {} sections", sections.len());

    let mut rendered = format.render(&sections, pretty).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    if format == OutputFormat::Json {
        rendered.push('\n');
    }

    match output {
        Some(path) => {
            fs::write(path, rendered).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{rendered}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in OutputFormat::ALL {
        println!("  {:<6} {}", format.name(), format.description());
    }
}
