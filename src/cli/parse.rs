//! Parse command implementation.
//!
//! Prints the parsed comic as JSON on stdout.

use std::path::PathBuf;

use clap::Args;

use crate::error::{ComicError, Result};
use crate::output::display_path;
use crate::parser::Mode;
use crate::types::Comic;

use super::Context;

/// Parse a script and print the comic as JSON
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Script file to parse
    pub file: PathBuf,

    /// Which parser to use (default: from config, else auto)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Default a missing title instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: ParseArgs, context: &Context) -> Result<()> {
    context.printer.status("Parsing", &display_path(&args.file));
    let comic = context.parse_file(&args.file, args.mode, args.lenient)?;

    let pretty = context.config.pretty && !args.compact;
    println!("{}", to_json(&comic, pretty)?);
    Ok(())
}

/// Serialize a comic for output.
pub fn to_json(comic: &Comic, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(comic)
    } else {
        serde_json::to_string(comic)
    };
    json.map_err(|e| ComicError::Parse {
        message: format!("Failed to serialize comic: {}", e),
        help: None,
    })
}
