//! Pathwalk CLI
//!
//! Usage:
//!   pathwalk maps.txt                       # Walk every diagram in a file
//!   pathwalk --map "@-A-x"                  # Walk a literal diagram
//!   cat map.txt | pathwalk                  # Read the diagram from stdin
//!   pathwalk maps.txt --json                # JSON output, one object per diagram

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use pathwalk::core::{load_bundle, load_file, Diagram, LoadError, NamedDiagram};
use pathwalk::types::{NavigationError, Traversal};
use pathwalk::{DEFAULT_STEP_BUDGET, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "pathwalk",
    version = VERSION,
    about = "Follow the path through an ASCII diagram and collect its letters",
    long_about = "Pathwalk starts at '@', follows '-', '|', '+' and letters, and stops at 'x'.\n\n\
                  It prints the letters collected (each letter cell once) and every\n\
                  character visited. Malformed diagrams are rejected:\n  \
                  missing or repeated markers, forks, broken paths, fake turns.\n\n\
                  A file may hold several diagrams, each introduced by a\n\
                  '=== name ===' header line."
)]
struct Args {
    /// Diagram file (stdin when neither FILE nor --map is given)
    file: Option<PathBuf>,

    /// Literal diagram, rows separated by newlines or "\n"
    #[arg(short, long, conflicts_with = "file")]
    map: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Log walker decisions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Give up after this many moves
    #[arg(long, default_value_t = DEFAULT_STEP_BUDGET)]
    max_steps: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let diagrams = match load_input(&args) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return ExitCode::from(2);
        }
    };

    let titled = diagrams.len() > 1;
    let mut all_ok = true;

    for named in &diagrams {
        let outcome = named.diagram.walk(args.max_steps);
        all_ok &= outcome.is_ok();

        if args.json {
            print_json(&named.name, &outcome);
        } else {
            print_text(&named.name, &outcome, titled, args.no_color);
        }
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// stderr subscriber; RUST_LOG wins over --verbose
fn init_tracing(verbose: bool) {
    let default = if verbose { "pathwalk=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Diagrams from --map, FILE or stdin
fn load_input(args: &Args) -> Result<Vec<NamedDiagram>, LoadError> {
    if let Some(ref map) = args.map {
        let diagram = Diagram::from_text(&map.replace("\\n", "\n"));
        if diagram.is_empty() {
            return Err(LoadError::Empty);
        }
        return Ok(vec![NamedDiagram {
            name: "map".to_string(),
            diagram,
        }]);
    }

    if let Some(ref path) = args.file {
        return load_file(path);
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|source| LoadError::Io {
            path: "<stdin>".to_string(),
            source,
        })?;
    load_bundle(&text)
}

fn print_text(name: &str, outcome: &Result<Traversal, NavigationError>, titled: bool, no_color: bool) {
    if titled {
        println!("{}", format!("== {} ==", name).bold());
    }

    match outcome {
        Ok(t) if no_color => println!("{}", t.to_parseable_string()),
        Ok(t) => println!("{}", t.to_terminal_string()),
        Err(e) => println!("{} {}", "Error:".red().bold(), e),
    }

    if titled {
        println!();
    }
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    code: &'static str,
    message: String,
    #[serde(flatten)]
    detail: &'a NavigationError,
}

#[derive(Serialize)]
struct Report<'a> {
    name: &'a str,
    ok: bool,
    #[serde(flatten)]
    traversal: Option<&'a Traversal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport<'a>>,
}

fn print_json(name: &str, outcome: &Result<Traversal, NavigationError>) {
    let report = Report {
        name,
        ok: outcome.is_ok(),
        traversal: outcome.as_ref().ok(),
        error: outcome.as_ref().err().map(|e| ErrorReport {
            code: e.code(),
            message: e.to_string(),
            detail: e,
        }),
    };

    match serde_json::to_string(&report) {
        Ok(line) => println!("{}", line),
        Err(e) => eprintln!("cannot encode result for {}: {}", name, e),
    }
}
