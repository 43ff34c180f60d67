//! Document assembly shared by both front-ends.

use crate::types::{Comic, Page, Panel, Style, DEFAULT_TITLE};

use super::frontmatter::Frontmatter;

/// Panels grouped onto each synthetic page of a natural-language comic.
pub const PANELS_PER_PAGE: usize = 4;

/// Characters of input kept as the scene of a fallback panel.
pub const FALLBACK_SCENE_CHARS: usize = 200;

/// Style given to comics parsed from prose.
pub const NATURAL_STYLE: Style = Style::Cartoon;

/// Build a comic from frontmatter and explicitly numbered pages.
pub fn structured_comic(frontmatter: &Frontmatter, pages: Vec<Page>) -> Comic {
    Comic {
        title: frontmatter.title().unwrap_or(DEFAULT_TITLE).to_string(),
        author: frontmatter.author().map(str::to_string),
        style: frontmatter.style(),
        pages,
    }
}

/// Build a comic from a flat list of panels, paginating them.
///
/// When no panels were extracted a single-panel fallback comic is returned
/// instead, with the first [`FALLBACK_SCENE_CHARS`] characters of `input` as
/// its scene.
pub fn natural_comic(title: String, panels: Vec<Panel>, input: &str) -> Comic {
    let pages = if panels.is_empty() {
        tracing::debug!("no panels extracted, using fallback panel");
        vec![fallback_page(input)]
    } else {
        paginate(panels, PANELS_PER_PAGE)
    };

    Comic {
        title,
        author: None,
        style: Some(NATURAL_STYLE),
        pages,
    }
}

/// Group panels into 1-based pages of `per_page` panels.
pub fn paginate(panels: Vec<Panel>, per_page: usize) -> Vec<Page> {
    let per_page = per_page.max(1);
    let mut pages: Vec<Page> = Vec::with_capacity(panels.len().div_ceil(per_page));

    for (index, panel) in panels.into_iter().enumerate() {
        if index % per_page == 0 {
            pages.push(Page::new((index / per_page) as u32 + 1));
        }
        if let Some(page) = pages.last_mut() {
            page.panels.push(panel);
        }
    }

    pages
}

fn fallback_page(input: &str) -> Page {
    let mut page = Page::new(1);
    page.panels
        .push(Panel::with_scene(truncate_chars(input.trim(), FALLBACK_SCENE_CHARS)));
    page
}

/// The first `max` characters of `text`, respecting char boundaries.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
