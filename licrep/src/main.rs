//! # licrep
//!
//! A CLI tool for rendering licence reports from project analysis results.
//!
//! ## Overview
//!
//! licrep is built on top of licreplib and turns a results document (the JSON
//! produced by a dependency analysis backend) into a licence-to-product table
//! on stdout. Each distinct licence gets a 1-based index shared by all of its
//! products, in the order the document lists them.
//!
//! ## Usage
//!
//! ```bash
//! # Render the licence table from a results file
//! licrep results.json
//!
//! # Read the results document from stdin
//! curl -s "$RESULTS_URL" | licrep
//!
//! # Output as JSON or CSV
//! licrep results.json --output json
//! licrep results.json --output csv
//! ```

use std::process::ExitCode;

use clap::{Arg, ArgMatches, Command};
use licreplib::{load_results, LicenceTable, ProjectResults};

mod render;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("licrep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render licence-to-product tables from project analysis results")
        .arg(
            Arg::new("results")
                .help("Path to a results JSON document ('-' reads stdin)")
                .default_value("-"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json", "csv"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Load the results document from a file path or stdin
fn read_results(source: &str) -> anyhow::Result<ProjectResults> {
    if source == "-" {
        Ok(ProjectResults::from_reader(std::io::stdin().lock())?)
    } else {
        Ok(load_results(source)?)
    }
}

/// Load, format, and render one report
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let source = matches
        .get_one::<String>("results")
        .map(|s| s.as_str())
        .unwrap_or("-");
    let results = read_results(source)?;
    let table = LicenceTable::from_results(&results);

    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("table");
    let rendered = match output {
        "json" => {
            let mut json = serde_json::to_string_pretty(&table)?;
            json.push('\n');
            json
        }
        "csv" => render::render_csv(&table),
        _ => render::render_table(&table),
    };

    Ok(rendered)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(rendered) => {
            print!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
