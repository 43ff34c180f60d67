//! Convert command implementation.
//!
//! Parses a file in whichever mode applies and writes it back out as script
//! markup or prose.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::format::{render, TextFormat};
use crate::output::display_path;
use crate::parser::Mode;

use super::Context;

/// Re-emit a parsed comic as script or prose
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Script file to convert
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum)]
    pub to: TextFormat,

    /// Which parser to read the input with (default: from config, else auto)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
}

pub fn run(args: ConvertArgs, context: &Context) -> Result<()> {
    context.printer.status("Converting", &display_path(&args.file));
    let comic = context.parse_file(&args.file, args.mode, false)?;

    print!("{}", render(&comic, args.to));
    Ok(())
}
