//! Command-line interface for wikiplain
//! This binary converts wiki markup files into plaintext or token dumps.
//!
//! Usage:
//!   wikiplain extract `<path>` [--deadline-ms `<ms>`] [--stats]      - Extract plaintext
//!   wikiplain tokens `<path>` [--format `<format>`] [--deadline-ms `<ms>`] - Dump the token stream
//!   wikiplain list-formats                                       - List stage/format combinations

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::Read;
use std::time::{Duration, Instant};
use wikiplain::pipeline::{self, ProcessingSpec};

fn main() {
    env_logger::init();

    let matches = Command::new("wikiplain")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for extracting plaintext from wiki markup")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("extract")
                .about("Extract plaintext from a wiki markup file")
                .arg(
                    Arg::new("path")
                        .help("Path to the markup file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("deadline-ms")
                        .long("deadline-ms")
                        .help("Per-match deadline in milliseconds")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("stats")
                        .long("stats")
                        .help("Print token count and timing to stderr")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the token stream of a wiki markup file")
                .arg(
                    Arg::new("path")
                        .help("Path to the markup file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('simple' or 'json')")
                        .default_value("simple"),
                )
                .arg(
                    Arg::new("deadline-ms")
                        .long("deadline-ms")
                        .help("Per-match deadline in milliseconds")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available stage/format combinations"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("extract", sub_matches)) => {
            let path = sub_matches.get_one::<String>("path").unwrap();
            let stats = sub_matches.get_flag("stats");
            handle_extract_command(path, deadline_from(sub_matches), stats);
        }
        Some(("tokens", sub_matches)) => {
            let path = sub_matches.get_one::<String>("path").unwrap();
            let format = sub_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(path, format, deadline_from(sub_matches));
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Per-match deadline from --deadline-ms, or the library default.
fn deadline_from(matches: &ArgMatches) -> Duration {
    matches
        .get_one::<u64>("deadline-ms")
        .map(|ms| Duration::from_millis(*ms))
        .unwrap_or(wikiplain::lexer::DEFAULT_MATCH_DEADLINE)
}

/// Read the input file, or stdin when the path is "-".
fn read_source(path: &str) -> String {
    let read = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        std::fs::read_to_string(path)
    };
    read.unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    })
}

/// Handle the extract command
fn handle_extract_command(path: &str, deadline: Duration, stats: bool) {
    let source = read_source(path);

    let start = Instant::now();
    let tokens = wikiplain::tokenize_with_deadline(&source, deadline);
    let token_count = tokens.len();
    let text = pipeline::render_plaintext(wikiplain::PlaintextStream::new(tokens.into_iter()));
    let elapsed = start.elapsed();

    print!("{}", text);

    if stats {
        let secs = elapsed.as_secs_f64();
        let tokens_per_sec = token_count as f64 / secs.max(f64::EPSILON);
        eprintln!(
            "Read {} tokens from {} in {:.3} seconds ({:.0} t/s).",
            token_count, path, secs, tokens_per_sec
        );
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, format: &str, deadline: Duration) {
    let spec = ProcessingSpec::from_string(&format!("tokens-{}", format)).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let source = read_source(path);
    let output =
        pipeline::process_source_with_deadline(&source, &spec, deadline).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    println!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available stage/format combinations:\n");
    for format in pipeline::available_formats() {
        println!("  {}", format);
    }
}
