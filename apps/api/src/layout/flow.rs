//! Document flow — positions title, body paragraphs, and footer as concrete
//! text runs on pages, advancing to a new page when the cursor would pass
//! the bottom margin.
//!
//! The flow is computed before any PDF object exists, so pagination is
//! testable as plain data.

use crate::layout::font_metrics::{get_metrics, FontFace, PageConfig};
use crate::layout::wrap::{sanitize, wrap};

/// Headings are short lines; anything longer is body text even if shouty.
const HEADING_MAX_CHARS: usize = 80;

/// One positioned line of text. `y_mm` is the baseline, measured from the
/// bottom of the page (PDF coordinate convention).
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub face: FontFace,
    pub size_pt: f32,
    pub x_mm: f32,
    pub y_mm: f32,
}

/// All text runs for one page.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub runs: Vec<TextRun>,
}

/// Cursor that lays runs down the page and opens a new page when the next
/// baseline would land below the bottom margin.
struct FlowCursor<'a> {
    config: &'a PageConfig,
    pages: Vec<PageLayout>,
    y_mm: f32,
}

impl<'a> FlowCursor<'a> {
    fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            pages: vec![PageLayout::default()],
            y_mm: config.page_height_mm - config.margin_mm,
        }
    }

    /// Moves the cursor down without emitting text. Gaps never force a page
    /// break on their own; trailing whitespace at a page bottom is harmless.
    fn advance(&mut self, gap_mm: f32) {
        self.y_mm -= gap_mm;
    }

    /// Emits one line, breaking to a new page first if its baseline would
    /// fall below the bottom margin.
    fn push_line(&mut self, text: String, face: FontFace, size_pt: f32) {
        let advance = self.config.line_advance_mm(size_pt);
        if self.y_mm - advance < self.config.margin_mm {
            self.pages.push(PageLayout::default());
            self.y_mm = self.config.page_height_mm - self.config.margin_mm;
        }
        self.y_mm -= advance;
        self.pages
            .last_mut()
            .expect("flow always has a current page")
            .runs
            .push(TextRun {
                text,
                face,
                size_pt,
                x_mm: self.config.margin_mm,
                y_mm: self.y_mm,
            });
    }

    /// Wraps a block of text and emits every resulting line.
    fn push_wrapped(&mut self, text: &str, face: FontFace, size_pt: f32) {
        let metrics = get_metrics(face);
        let max_width_em = self.config.usable_width_em(size_pt);
        for line in wrap(text, metrics, max_width_em) {
            self.push_line(line, face, size_pt);
        }
    }
}

/// Short uppercase lines and lines ending in a colon render as headings.
fn is_heading(paragraph: &str) -> bool {
    if paragraph.len() >= HEADING_MAX_CHARS {
        return false;
    }
    paragraph.ends_with(':')
        || (paragraph.chars().any(|c| c.is_ascii_alphabetic())
            && !paragraph.chars().any(|c| c.is_ascii_lowercase()))
}

/// Lays out a full document: bold title, body paragraphs split on blank
/// lines, and a footer line after the content.
///
/// An empty body yields a single page carrying the title (and footer) only.
pub fn lay_out_document(
    title: &str,
    body: &str,
    footer: &str,
    config: &PageConfig,
) -> Vec<PageLayout> {
    let title = sanitize(title);
    let body = sanitize(body).replace("\r\n", "\n");
    let footer = sanitize(footer);

    let mut cursor = FlowCursor::new(config);

    cursor.push_wrapped(&title, FontFace::HelveticaBold, config.title_size_pt);
    cursor.advance(config.line_advance_mm(config.body_size_pt));

    for paragraph in body.split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        let face = if is_heading(paragraph) {
            FontFace::HelveticaBold
        } else {
            FontFace::Helvetica
        };
        cursor.push_wrapped(paragraph, face, config.body_size_pt);
        cursor.advance(config.line_advance_mm(config.body_size_pt) * 0.5);
    }

    if !footer.is_empty() {
        cursor.advance(config.line_advance_mm(config.body_size_pt));
        cursor.push_wrapped(&footer, FontFace::Helvetica, config.footer_size_pt);
    }

    cursor.pages
}
