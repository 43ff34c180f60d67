//! Prompt command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural};
use crate::prompt::build_prompts;
use crate::types::Style;

use super::Context;

/// Print one image prompt per panel
#[derive(Args, Debug)]
pub struct PromptArgs {
    /// Script file to parse
    pub file: PathBuf,

    /// Art style (default: the comic's own, else cartoon)
    #[arg(long)]
    pub style: Option<Style>,
}

pub fn run(args: PromptArgs, context: &Context) -> Result<()> {
    let comic = context.parse_file(&args.file, None, false)?;
    let prompts = build_prompts(&comic, args.style);

    for prompt in &prompts {
        println!("{}", prompt);
    }

    context.printer.success(
        "Prompted",
        &format!(
            "{} ({})",
            display_path(&args.file),
            plural(prompts.len(), "panel", "panels")
        ),
    );
    Ok(())
}
