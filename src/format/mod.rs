//! Text writers for parsed comics.

mod natural;
mod script;

pub use natural::to_natural;
pub use script::to_script;

use crate::types::Comic;

/// Output text format for `comic convert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TextFormat {
    /// Structured script markup
    Script,
    /// Prose
    Natural,
}

/// Render `comic` in the given format.
pub fn render(comic: &Comic, format: TextFormat) -> String {
    match format {
        TextFormat::Script => to_script(comic),
        TextFormat::Natural => to_natural(comic),
    }
}
