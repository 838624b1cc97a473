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

//! Parser configuration from a TOML file and command-line overrides

use anyhow::{Context, Result};
use clap::Args;
use prolang_compiler::parser::ParserConfig;
use std::path::{Path, PathBuf};

/// Parser options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a parser configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reject characters the lexer does not recognise
    #[arg(long, global = true)]
    pub strict: bool,

    /// Maximum nesting depth of statements and expressions
    #[arg(long, global = true, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Drop `int` annotations from typed declarations
    #[arg(long, global = true)]
    pub no_type_annotations: bool,
}

impl ConfigArgs {
    /// Load the configuration file, if any, and apply command-line overrides
    pub fn resolve(&self) -> Result<ParserConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ParserConfig::default(),
        };

        if self.strict {
            config.reject_unknown_characters = true;
        }
        if let Some(depth) = self.max_depth {
            config.max_recursion_depth = depth;
        }
        if self.no_type_annotations {
            config.preserve_type_annotations = false;
        }

        Ok(config)
    }
}

/// Read a parser configuration from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> Result<ParserConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: ParserConfig = toml::from_str(&content).with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolve_defaults() {
        let config = ConfigArgs::default().resolve().unwrap();
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let file = config_file("max_recursion_depth = 40\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.max_recursion_depth, 40);
        assert!(!config.reject_unknown_characters);
        assert!(config.preserve_type_annotations);
    }

    #[test]
    fn test_flags_override_file() {
        let file = config_file("max_recursion_depth = 40\nreject_unknown_characters = false\n");
        let args = ConfigArgs {
            config: Some(file.path().to_path_buf()),
            strict: true,
            max_depth: Some(12),
            no_type_annotations: true,
        };

        let config = args.resolve().unwrap();
        assert_eq!(config, ParserConfig::new().with_max_recursion_depth(12).with_reject_unknown_characters(true).with_type_annotations(false));
    }

    #[test]
    fn test_invalid_config_file() {
        let file = config_file("max_recursion_depth = \"deep\"\n");
        let error = load_config(file.path()).unwrap_err();
        assert!(error.to_string().starts_with("invalid config file"));

        assert!(load_config("/nonexistent/prolang.toml").is_err());
    }
}
