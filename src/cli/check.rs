//! Check command implementation.
//!
//! Parses each file and reports a one-line status, listing every error for
//! files that fail.

use std::path::PathBuf;

use clap::Args;

use crate::error::{ComicError, Result};
use crate::types::Comic;
use crate::output::{comic_summary, display_path, plural};
use crate::parser::Mode;

use super::Context;

/// Check that scripts parse, without printing them
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Which parser to use (default: from config, else auto)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Default a missing title instead of failing
    #[arg(long)]
    pub lenient: bool,
}

pub fn run(args: CheckArgs, context: &Context) -> Result<()> {
    let printer = &context.printer;
    let mut failed = 0;

    for file in &args.files {
        let shown = printer.cyan(&display_path(file));
        match context.parse_file(file, args.mode, args.lenient) {
            Ok(comic) => {
                printer.success("Checked", &format!("{} ({})", shown, comic_summary(&comic)));
                for number in empty_pages(&comic) {
                    printer.warning("warning", &format!("page {} has no panels", number));
                }
            }
            Err(ComicError::Script { errors, .. }) => {
                failed += 1;
                printer.error("Failed", &shown);
                for error in &errors {
                    printer.error("error", &error.to_string());
                }
            }
            Err(other) => {
                failed += 1;
                printer.error("Failed", &format!("{}: {}", shown, other));
            }
        }
    }

    if failed > 0 {
        return Err(ComicError::Parse {
            message: format!(
                "{} of {} failed to parse",
                failed,
                plural(args.files.len(), "file", "files")
            ),
            help: Some("Fix the errors listed above".to_string()),
        });
    }

    printer.success(
        "Finished",
        &format!("{} parsed cleanly", plural(args.files.len(), "file", "files")),
    );
    Ok(())
}

/// Numbers of pages that ended up with no panels.
fn empty_pages(comic: &Comic) -> Vec<u32> {
    comic
        .pages
        .iter()
        .filter(|page| page.panels.is_empty())
        .map(|page| page.number)
        .collect()
}
