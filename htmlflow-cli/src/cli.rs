// Command definition shared by the binary and build.rs (shell completions).
// Only clap and htmlflow may be used here: build.rs pulls this file in with include!.

use clap::{Arg, ArgAction, Command, ValueHint};
use htmlflow::OutputFormat;

pub fn build_cli() -> Command {
    let format_names: Vec<&'static str> = OutputFormat::ALL.iter().map(|f| f.name()).collect();

    Command::new("htmlflow")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Flatten HTML into linked text sections")
        .long_about(
            "htmlflow turns an HTML document into an ordered list of text sections, the way a\n\
            simple text layout engine would flow it: whitespace collapsed, paragraphs and\n\
            headings separated by line breaks, and every link in its own section.\n\n\
            Examples:\n  \
            htmlflow page.html                     # JSON sections on stdout\n  \
            htmlflow page.html --to tag            # One <section> per line\n  \
            htmlflow - --to text < page.html       # Read from stdin\n  \
            htmlflow page.html -o sections.json    # Write to a file",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an htmlflow.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert an HTML file into sections (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input HTML file, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format (defaults to the configured one)")
                        .value_parser(clap::builder::PossibleValuesParser::new(format_names))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Write JSON on a single line")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("max-depth")
                        .long("max-depth")
                        .value_name("N")
                        .help("Deepest element nesting to walk before failing")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
}
