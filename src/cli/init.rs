//! Init command implementation.
//!
//! Writes a default `comic.yaml`.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{default_config_yaml, CONFIG_FILENAME};
use crate::error::{ComicError, Result};
use crate::output::{display_path, Printer};

/// Initialize a comic project by generating comic.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing comic.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(ComicError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&config_path, default_config_yaml()).map_err(|e| ComicError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success("Created", &display_path(&config_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComicConfig;
    use tempfile::TempDir;

    fn args(path: PathBuf, force: bool) -> InitArgs {
        InitArgs { path, force }
    }

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();

        run(args(dir.path().to_path_buf(), false), &Printer::with_color(false)).unwrap();

        let config = ComicConfig::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, ComicConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "pretty: false\n").unwrap();

        let err = run(args(dir.path().to_path_buf(), false), &Printer::with_color(false))
            .unwrap_err();
        assert!(matches!(err, ComicError::Config { .. }));

        run(args(dir.path().to_path_buf(), true), &Printer::with_color(false)).unwrap();
        let config = ComicConfig::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert!(config.pretty);
    }
}
