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

//! Subcommands and source input handling

pub mod parse;
pub mod tokens;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Built-in sample program
pub const SAMPLE_SOURCE: &str = "\
def myFunc(a, b) {
    x = 10;
}

myFunc(5, 15);
int y = 10 + 20;
";

/// Where a source program comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
    Sample,
}

impl Input {
    /// Name used when reporting on this input
    pub fn label(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
            Input::Sample => "<sample>".to_string(),
        }
    }

    /// Read the whole source text
    pub fn read(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut source = String::new();
                std::io::stdin().read_to_string(&mut source).context("failed to read standard input")?;
                Ok(source)
            }
            Input::File(path) => std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display())),
            Input::Sample => Ok(SAMPLE_SOURCE.to_string()),
        }
    }
}

/// Map command-line file arguments to inputs; `-` and no files mean stdin
///
/// Standard input can only be read once, so repeated `-` arguments keep
/// only the first.
pub fn resolve_inputs(files: &[PathBuf], sample: bool) -> Vec<Input> {
    if sample {
        return vec![Input::Sample];
    }
    if files.is_empty() {
        return vec![Input::Stdin];
    }

    let mut seen_stdin = false;
    files
        .iter()
        .filter_map(|file| {
            if file.as_path() != Path::new("-") {
                Some(Input::File(file.clone()))
            } else if std::mem::replace(&mut seen_stdin, true) {
                None
            } else {
                Some(Input::Stdin)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_inputs() {
        assert_eq!(resolve_inputs(&[], false), vec![Input::Stdin]);
        assert_eq!(resolve_inputs(&[PathBuf::from("a.pl")], true), vec![Input::Sample]);
        assert_eq!(
            resolve_inputs(&[PathBuf::from("a.pl"), PathBuf::from("-")], false),
            vec![Input::File(PathBuf::from("a.pl")), Input::Stdin]
        );
    }

    #[test]
    fn test_stdin_listed_once() {
        let files = [PathBuf::from("-"), PathBuf::from("a.pl"), PathBuf::from("-")];
        assert_eq!(resolve_inputs(&files, false), vec![Input::Stdin, Input::File(PathBuf::from("a.pl"))]);
    }

    #[test]
    fn test_sample_input() {
        assert_eq!(Input::Sample.label(), "<sample>");
        assert_eq!(Input::Sample.read().unwrap(), SAMPLE_SOURCE);
        assert!(prolang_compiler::parse_source(SAMPLE_SOURCE).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let error = Input::File(PathBuf::from("/nonexistent/prog.pl")).read().unwrap_err();
        assert!(error.to_string().contains("/nonexistent/prog.pl"));
    }
}
