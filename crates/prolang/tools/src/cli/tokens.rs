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

//! Tokens command for dumping the lexer output

use super::{Input, resolve_inputs};
use anyhow::{Result, anyhow};
use clap::Args;
use prolang_compiler::parser::{ParserConfig, ProlangParser, format_tokens};
use std::path::PathBuf;

/// Arguments for the tokens command
#[derive(Args, Debug)]
pub struct TokensArgs {
    /// Source file to tokenize (`-` or nothing for stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tokenize the built-in sample program
    #[arg(long, conflicts_with = "file")]
    pub sample: bool,
}

/// Execute the tokens command
pub fn run_tokens(args: TokensArgs, config: ParserConfig) -> Result<bool> {
    let files: Vec<PathBuf> = args.file.into_iter().collect();
    let input = resolve_inputs(&files, args.sample).into_iter().next().unwrap_or(Input::Stdin);

    let source = input.read()?;
    let tokens = ProlangParser::new(config).tokenize(&source).map_err(|error| anyhow!("{}: {}", input.label(), error.user_message()))?;

    print!("{}", format_tokens(&tokens));
    Ok(true)
}
