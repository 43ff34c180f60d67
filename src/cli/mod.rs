pub mod check;
pub mod completions;
pub mod convert;
pub mod init;
pub mod parse;
pub mod prompt;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::ComicConfig;
use crate::error::{ComicError, Result};
use crate::output::Printer;
use crate::parser::{parse_with_mode, Mode};
use crate::types::Comic;

/// comic - Comic script parser
#[derive(Parser, Debug)]
#[command(name = "comic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: ./comic.yaml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a script and print the comic as JSON
    Parse(parse::ParseArgs),

    /// Check that scripts parse, without printing them
    Check(check::CheckArgs),

    /// Print one image prompt per panel
    Prompt(prompt::PromptArgs),

    /// Re-emit a parsed comic as script or prose
    Convert(convert::ConvertArgs),

    /// Initialize a comic project (generates comic.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Config and printer shared by the parsing subcommands.
pub struct Context {
    pub config: ComicConfig,
    pub printer: Printer,
}

impl Context {
    pub fn new(config: ComicConfig) -> Self {
        Self {
            config,
            printer: Printer::new(),
        }
    }

    /// Load config from `--config` or the working directory.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = ComicConfig::resolve(config_path, Path::new("."))?;
        Ok(Self::new(config))
    }

    /// Read and parse one script.
    ///
    /// `mode` and `lenient` come from the command line and win over config.
    /// The configured style fills in when the comic names none.
    pub fn parse_file(&self, path: &Path, mode: Option<Mode>, lenient: bool) -> Result<Comic> {
        let source = read_source(path)?;
        let mode = mode.unwrap_or(self.config.mode);
        let mut options = self.config.script_options();
        options.lenient_title |= lenient;

        let mut comic = parse_with_mode(&source, mode, &options).map_err(|errors| errors.at(path))?;
        if comic.style.is_none() {
            comic.style = self.config.style;
        }
        Ok(comic)
    }
}

/// Read a script file to a string.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ComicError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read script: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Style;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from(["comic", "parse", "a.md", "-v", "--config", "c.yaml"]).unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("c.yaml")));
        assert!(matches!(cli.command, Commands::Parse(_)));
    }

    #[test]
    fn test_parse_file_applies_config() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("untitled.md");
        fs::write(&script, "# Page 1\nA hallway").unwrap();

        let strict = Context::new(ComicConfig::default());
        assert!(matches!(
            strict.parse_file(&script, None, false),
            Err(ComicError::Script { .. })
        ));

        let config = ComicConfig {
            lenient_title: true,
            style: Some(Style::Noir),
            ..Default::default()
        };
        let comic = Context::new(config).parse_file(&script, None, false).unwrap();
        assert_eq!(comic.title, "Untitled Comic");
        assert_eq!(comic.style, Some(Style::Noir));
    }

    #[test]
    fn test_lenient_flag_overrides_config() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("untitled.md");
        fs::write(&script, "# Page 1\nA hallway").unwrap();

        let context = Context::new(ComicConfig::default());
        assert!(context.parse_file(&script, None, true).is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let context = Context::new(ComicConfig::default());
        let result = context.parse_file(Path::new("/nonexistent/script.md"), None, false);

        assert!(matches!(result, Err(ComicError::Io { .. })));
    }
}
