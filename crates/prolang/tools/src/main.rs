// Prolang
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Prolang CLI Tool
//!
//! Main entry point for the Prolang command-line interface.

use clap::{ArgAction, Parser, Subcommand};
use prolang_tools::cli::parse::{ParseArgs, run_parse};
use prolang_tools::cli::tokens::{TokensArgs, run_tokens};
use prolang_tools::config::ConfigArgs;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "prolang")]
#[command(about = "Prolang - tokenize and parse Prolang source")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token sequence of a source file
    Tokens(TokensArgs),
    /// Parse source files and print their syntax trees
    Parse(ParseArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = cli.config.resolve()?;
    tracing::debug!(?config, "resolved parser configuration");

    let succeeded = match cli.command {
        Commands::Tokens(args) => run_tokens(args, config)?,
        Commands::Parse(args) => run_parse(args, config)?,
    };

    Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, 2) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };

    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();
}
