// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

mod commands;
mod format_arg;
mod logging;

use clap::{Parser, Subcommand};
use format_arg::{adapter_from_arg, raw_from_arg, raw_to_output};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise the log level, may be repeated
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

/// A format is `iso`, `dmy`, `mdy`, `number`, a pattern such as `%d.%m.%Y`,
/// or `number:<pattern>` for integer dates.
#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a single date between two formats
    Convert {
        value: String,
        #[arg(short, long, default_value = "iso")]
        from: String,
        #[arg(short, long, default_value = "iso")]
        to: String,
    },
    /// Check that a value is a valid date in the given format
    Check {
        value: String,
        #[arg(short, long, default_value = "iso")]
        format: String,
    },
    /// Convert one column of a CSV file, the result is written to stdout
    Csv {
        file: PathBuf,
        #[arg(short, long)]
        column: String,
        #[arg(short, long, default_value = "iso")]
        from: String,
        #[arg(short, long, default_value = "iso")]
        to: String,
    },
}

fn run_convert(value: &str, from: &str, to: &str) -> Result<(), ()> {
    let raw = commands::convert(value, &adapter_from_arg(from), &adapter_from_arg(to))
        .map_err(|e| error!("Failed to convert {value}. Error: {e}"))?;
    println!("{}", raw_to_output(&raw));
    Ok(())
}

fn run_check(value: &str, format: &str) -> Result<(), ()> {
    let adapter = adapter_from_arg(format);
    let date = adapter
        .parse(&raw_from_arg(value, adapter.kind()))
        .map_err(|e| error!("Invalid date. Error: {e}"))?;
    println!("{value} is valid: {date}");
    Ok(())
}

fn run_csv(file: &Path, column: &str, from: &str, to: &str) -> Result<(), ()> {
    let input = File::open(file)
        .map_err(|e| error!("Failed to open {}. Error: {e}", file.display()))?;
    let converted = commands::convert_csv(
        input,
        std::io::stdout().lock(),
        column,
        &adapter_from_arg(from),
        &adapter_from_arg(to),
    )
    .map_err(|e| error!("Failed to convert {}. Error: {e}", file.display()))?;
    info!("{converted} dates converted");
    Ok(())
}

fn main() -> Result<(), ()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Command::Convert { value, from, to } => run_convert(value, from, to),
        Command::Check { value, format } => run_check(value, format),
        Command::Csv {
            file,
            column,
            from,
            to,
        } => run_csv(file, column, from, to),
    }
}
