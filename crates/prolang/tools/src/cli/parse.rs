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

//! Parse command for printing syntax trees

use super::{Input, resolve_inputs};
use anyhow::{Result, anyhow};
use clap::{Args, ValueEnum};
use prolang_compiler::ast::{Block, print_tree};
use prolang_compiler::parser::{ParserConfig, ProlangParser};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Output formats for parsed programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Indented tree, one construct per line
    #[default]
    Tree,
    /// JSON document
    Json,
    /// Rust debug representation
    Debug,
}

/// Arguments for the parse command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Source files to parse (`-` or nothing for stdin)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Parse the built-in sample program
    #[arg(long, conflicts_with = "files")]
    pub sample: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree)]
    pub format: OutputFormat,
}

/// Execute the parse command
///
/// Inputs are parsed in parallel and reported in argument order. Returns
/// whether every input parsed.
pub fn run_parse(args: ParseArgs, config: ParserConfig) -> Result<bool> {
    let inputs = resolve_inputs(&args.files, args.sample);
    let parser = ProlangParser::new(config);

    let start = Instant::now();
    let outcomes: Vec<Result<Block>> = inputs.par_iter().map(|input| parse_input(&parser, input)).collect();
    info!(inputs = inputs.len(), elapsed = ?start.elapsed(), "parsed inputs");

    let mut succeeded = true;
    for (input, outcome) in inputs.iter().zip(outcomes) {
        match outcome {
            Ok(program) => {
                if inputs.len() > 1 {
                    println!("== {} ==", input.label());
                }
                print!("{}", render_program(&program, args.format)?);
            }
            Err(error) => {
                eprintln!("error: {:#}", error);
                succeeded = false;
            }
        }
    }

    Ok(succeeded)
}

/// Read and parse one input
fn parse_input(parser: &ProlangParser, input: &Input) -> Result<Block> {
    let source = input.read()?;
    debug!(input = %input.label(), bytes = source.len(), "parsing input");
    parser.parse_program(&source).map_err(|error| anyhow!("{}: {}", input.label(), error.user_message()))
}

/// Render a program in the requested format
pub fn render_program(program: &Block, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Tree => print_tree(program),
        OutputFormat::Json => serde_json::to_string_pretty(program)? + "\n",
        OutputFormat::Debug => format!("{:#?}\n", program),
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prolang_compiler::parse_source;
    use std::io::Write;

    #[test]
    fn test_render_tree() {
        let program = parse_source("x = 1;").unwrap();
        assert_eq!(render_program(&program, OutputFormat::Tree).unwrap(), "Block\n  Assignment: x\n    Number: 1\n");
    }

    #[test]
    fn test_render_json() {
        let program = parse_source("x;").unwrap();
        let rendered = render_program(&program, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value, serde_json::json!([{ "Identifier": { "name": "x" } }]));
    }

    #[test]
    fn test_render_debug() {
        let program = parse_source("7;").unwrap();
        assert!(render_program(&program, OutputFormat::Debug).unwrap().contains("NumberLiteral("));
    }

    #[test]
    fn test_parse_input_reports_label() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"def f ( a , b ) { x = 1 ;").unwrap();

        let input = Input::File(file.path().to_path_buf());
        let error = parse_input(&ProlangParser::default(), &input).unwrap_err();

        let message = error.to_string();
        assert!(message.starts_with(&input.label()));
        assert!(message.ends_with("expected '}', found end of file"));
    }

    #[test]
    fn test_run_parse_reports_failure() {
        let mut good = tempfile::NamedTempFile::new().unwrap();
        good.write_all(b"f(1);").unwrap();
        let mut bad = tempfile::NamedTempFile::new().unwrap();
        bad.write_all(b"f(1").unwrap();

        let args = ParseArgs {
            files: vec![good.path().to_path_buf(), bad.path().to_path_buf()],
            sample: false,
            format: OutputFormat::Tree,
        };
        assert!(!run_parse(args, ParserConfig::default()).unwrap());

        let args = ParseArgs {
            files: Vec::new(),
            sample: true,
            format: OutputFormat::Json,
        };
        assert!(run_parse(args, ParserConfig::default()).unwrap());
    }
}
