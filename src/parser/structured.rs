//! Structured script parser.
//!
//! Parses scripts written in the light markup convention:
//!
//! ```text
//! ---
//! title: Action Comic
//! style: superhero
//! ---
//!
//! # Page 1
//! [2x2]
//!
//! A hero standing on a rooftop at sunset
//!
//! HERO (excited)
//! The city needs me!
//!
//! ---
//!
//! *WHOOSH*
//! > And so the adventure began...
//! ```
//!
//! The body is walked line by line with [`classify`]. Content before the
//! first page header is discarded once a header appears; a script with no
//! page header at all gets one implicit page holding everything as a single
//! panel.

use crate::error::{ComicError, ParseErrors};
use crate::types::{Dialogue, DialogueStyle, Narration, Page, Panel, PanelElement, SoundEffect};

use super::assemble::structured_comic;
use super::classify::{classify, resolve_dialogue, LineKind};
use super::frontmatter::extract_frontmatter;
use super::ParseResult;

/// Character name given to `~` thought lines.
pub const THOUGHT_SPEAKER: &str = "narrator";

/// Options for the structured parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptOptions {
    /// Default a missing title instead of failing.
    pub lenient_title: bool,
}

/// Parse a structured script, failing if the title is missing.
pub fn parse_script(input: &str) -> ParseResult {
    parse_script_with(input, &ScriptOptions::default())
}

/// Parse a structured script with explicit options.
///
/// All detectable errors are collected and returned together; a failed parse
/// never yields a partial comic.
pub fn parse_script_with(input: &str, options: &ScriptOptions) -> ParseResult {
    let lines: Vec<&str> = input.lines().collect();
    let frontmatter = extract_frontmatter(&lines);
    let mut errors = Vec::new();

    if frontmatter.title().is_none() && !options.lenient_title {
        errors.push(ComicError::MissingTitle);
    }

    let pages = ScriptWalker::new().walk(&lines[frontmatter.body_start..]);
    let panel_count: usize = pages.iter().map(|page| page.panels.len()).sum();

    if panel_count == 0 {
        errors.push(ComicError::EmptyDocument);
    }

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "structured parse failed");
        return Err(ParseErrors::new(errors));
    }

    tracing::debug!(pages = pages.len(), panels = panel_count, "structured parse complete");
    Ok(structured_comic(&frontmatter, pages))
}

/// Scene text and elements gathered for the panel being built.
#[derive(Debug, Default)]
struct PanelAccumulator {
    scene: Vec<String>,
    elements: Vec<PanelElement>,
}

impl PanelAccumulator {
    fn push_text(&mut self, text: &str) {
        self.scene.push(text.to_string());
    }

    fn push(&mut self, element: impl Into<PanelElement>) {
        self.elements.push(element.into());
    }

    /// Build the panel, or `None` if nothing was gathered.
    fn finish(self) -> Option<Panel> {
        let panel = Panel {
            scene: (!self.scene.is_empty()).then(|| self.scene.join(" ")),
            elements: self.elements,
            ..Default::default()
        };
        (!panel.is_empty()).then_some(panel)
    }
}

#[derive(Debug)]
enum State {
    /// Before the first page header. Content is held in case no header ever
    /// appears.
    NoPage { preamble: PanelAccumulator },
    /// A page is open and a panel is accumulating.
    InPanel { page: Page, panel: PanelAccumulator },
}

struct ScriptWalker {
    pages: Vec<Page>,
    state: State,
}

impl ScriptWalker {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            state: State::NoPage {
                preamble: PanelAccumulator::default(),
            },
        }
    }

    fn walk(mut self, lines: &[&str]) -> Vec<Page> {
        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].trim();
            if line.is_empty() {
                i += 1;
                continue;
            }

            let next = lines.get(i + 1).copied();
            match classify(line, next) {
                LineKind::Comment => {}
                LineKind::PageHeader(number) => self.open_page(number),
                LineKind::LayoutHint(token) => self.set_layout(token),
                LineKind::PanelSeparator => self.separate(),
                LineKind::SoundEffect(text) => self.accumulator().push(SoundEffect::new(text)),
                LineKind::Narration(text) => {
                    if !text.is_empty() {
                        self.accumulator().push(Narration::new(text));
                    }
                }
                LineKind::Thought(text) => {
                    if !text.is_empty() {
                        self.accumulator().push(
                            Dialogue::new(THOUGHT_SPEAKER, text).with_style(DialogueStyle::Thought),
                        );
                    }
                }
                LineKind::CharacterCue { name, modifier } => {
                    let text = next.unwrap_or_default();
                    self.accumulator().push(resolve_dialogue(name, modifier, text));
                    i += 2;
                    continue;
                }
                LineKind::PlainText(text) => self.accumulator().push_text(text),
            }
            i += 1;
        }

        self.finish()
    }

    fn accumulator(&mut self) -> &mut PanelAccumulator {
        match &mut self.state {
            State::NoPage { preamble } => preamble,
            State::InPanel { panel, .. } => panel,
        }
    }

    fn next_page_number(&self) -> u32 {
        match &self.state {
            State::InPanel { page, .. } => page.number.saturating_add(1),
            State::NoPage { .. } => self
                .pages
                .last()
                .map_or(1, |page| page.number.saturating_add(1)),
        }
    }

    fn open_page(&mut self, number: Option<u32>) {
        let number = number.unwrap_or_else(|| self.next_page_number());
        self.close_page();
        tracing::debug!(page = number, "opening page");
        self.state = State::InPanel {
            page: Page::new(number),
            panel: PanelAccumulator::default(),
        };
    }

    fn set_layout(&mut self, token: &str) {
        if let State::InPanel { page, .. } = &mut self.state {
            page.layout = Some(token.to_string());
        }
    }

    fn separate(&mut self) {
        if let State::InPanel { page, panel } = &mut self.state {
            if let Some(finished) = std::mem::take(panel).finish() {
                tracing::trace!(page = page.number, "panel flushed");
                page.panels.push(finished);
            }
        }
    }

    /// Flush the open panel and page, discarding any preamble.
    fn close_page(&mut self) {
        let state = std::mem::replace(
            &mut self.state,
            State::NoPage {
                preamble: PanelAccumulator::default(),
            },
        );

        match state {
            State::NoPage { preamble } => {
                if !preamble.scene.is_empty() || !preamble.elements.is_empty() {
                    tracing::debug!("discarding content before first page header");
                }
            }
            State::InPanel { mut page, panel } => {
                if let Some(finished) = panel.finish() {
                    page.panels.push(finished);
                }
                self.pages.push(page);
            }
        }
    }

    fn finish(mut self) -> Vec<Page> {
        if self.pages.is_empty() {
            if let State::NoPage { preamble } = self.state {
                return match preamble.finish() {
                    Some(panel) => {
                        tracing::debug!("no page header found, using an implicit page");
                        let mut page = Page::new(1);
                        page.panels.push(panel);
                        vec![page]
                    }
                    None => Vec::new(),
                };
            }
        }

        self.close_page();
        self.pages
    }
}
