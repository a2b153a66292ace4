// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! structlayout-optimize - reorder a struct layout read from JSON.

mod help;
mod output;

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use structlayout::{OptimizeOpts, OutputFormat, StageReport};

/// Parsed command line.
#[derive(Debug, Default)]
struct CliArgs {
    opts: OptimizeOpts,
    verbose: bool,
    path: Option<String>,
}

fn main() {
    output::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Some(cli) => cli,
        None => process::exit(1),
    };

    let (source, origin) = match &cli.path {
        Some(path) => match fs::read_to_string(path) {
            Ok(s) => (s, path.as_str()),
            Err(e) => {
                eprintln!("{}: reading {}: {}", output::error_label(), output::file_path(path), e);
                process::exit(1);
            }
        },
        None => match io::read_to_string(io::stdin()) {
            Ok(s) => (s, "<stdin>"),
            Err(e) => {
                eprintln!("{}: reading stdin: {}", output::error_label(), e);
                process::exit(1);
            }
        },
    };

    let fields = match structlayout::decode_fields(&source) {
        Ok(fields) => fields,
        Err(e) => {
            eprintln!("{}: {}: {}", output::error_label(), output::file_path(origin), e);
            process::exit(1);
        }
    };

    let (fields, report) = match structlayout::optimize_layout_report(fields, &cli.opts) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}: {}", output::error_label(), e);
            process::exit(1);
        }
    };

    if cli.verbose {
        print_report(&report);
    }

    let rendered = match structlayout::render(&fields, cli.opts.format) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("{}: {}", output::error_label(), e);
            process::exit(1);
        }
    };
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(rendered.as_bytes()).and_then(|_| stdout.flush()) {
        // A closed pipe downstream is not worth a diagnostic.
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("{}: writing output: {}", output::error_label(), e);
            process::exit(1);
        }
    }
}

/// Returns `None` when the process should exit with a failure status after
/// usage was printed. Help and version exit successfully from here.
/// Single-dash long flags are accepted the way Go's flag package does.
fn parse_args(args: &[String]) -> Option<CliArgs> {
    let mut cli = CliArgs::default();

    for arg in args {
        match arg.as_str() {
            "-r" | "--r" | "--recurse" => cli.opts.recurse = true,
            "-json" | "--json" => cli.opts.format = OutputFormat::Structured,
            "-v" | "--verbose" => cli.verbose = true,
            "-h" | "-help" | "--help" => {
                print!("{}", help::usage());
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("structlayout-optimize {}", help::VERSION);
                process::exit(0);
            }
            "-" if cli.path.is_none() => {}
            other if other.starts_with('-') => {
                eprintln!("{}: unknown option: {}", output::error_label(), other);
                eprint!("{}", help::usage());
                return None;
            }
            other => {
                if cli.path.is_some() {
                    eprintln!("{}: more than one input file given", output::error_label());
                    return None;
                }
                cli.path = Some(other.to_string());
            }
        }
    }

    Some(cli)
}

fn print_report(report: &StageReport) {
    eprintln!(
        "{} {} fields, {} bytes ({} padding)",
        output::stage("read"),
        report.before.field_count,
        report.before.total_size,
        report.before.padding
    );
    if let Some(groups) = report.groups {
        eprintln!(
            "{} {} fields into {} entries",
            output::stage("grouped"),
            report.before.field_count,
            groups
        );
    }
    eprintln!(
        "{} {} padding markers",
        output::stage("dropped"),
        report.padding_markers
    );
    eprintln!(
        "{} {} entries, {} bytes ({} padding)",
        output::stage("laid out"),
        report.after.field_count,
        report.after.total_size,
        report.after.padding
    );
    eprintln!(
        "{}",
        output::banner_ok(report.before.total_size, report.after.total_size)
    );
}
