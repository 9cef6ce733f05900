//! Layout cursor, page-break control, and glyph-measured text wrapping.
//!
//! All layout state lives in an explicit [`RenderContext`] threaded through
//! the rendering functions, never in hidden object fields. The cursor tracks
//! the baseline of the next line in points from the top of the page.

use chrono::{DateTime, Utc};

use crate::error::Error;
use crate::surface::{Surface, TextStyle};

/// Page margins in points. Defaults match the printed form: 20 mm all around.
#[derive(Clone, Copy, Debug)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 57.0,
            bottom: 57.0,
            left: 57.0,
            right: 57.0,
        }
    }
}

/// Metadata stamped into the footer of every page.
#[derive(Clone, Debug)]
pub struct FooterInfo {
    pub generated_at: DateTime<Utc>,
    pub document_id: String,
    /// Clinic identity line centered under the id row, when branding exists.
    pub clinic: Option<String>,
}

/// Extra top offset on pages after the first, so continuation pages do not
/// start flush against the header position of page one.
const CONTINUATION_OFFSET: f32 = 20.0;

const FOOTER_ACCENT: [u8; 3] = [25, 25, 112];

/// Transient per-render layout state: the surface, the cursor, margins, and
/// the footer metadata. Created at call start, discarded after `finish`.
pub struct RenderContext<S: Surface> {
    pub surface: S,
    margins: Margins,
    cursor_y: f32,
    footer: Option<FooterInfo>,
}

impl<S: Surface> RenderContext<S> {
    pub fn new(surface: S, margins: Margins, footer: Option<FooterInfo>) -> Self {
        let cursor_y = margins.top;
        Self {
            surface,
            margins,
            cursor_y,
            footer,
        }
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn left(&self) -> f32 {
        self.margins.left
    }

    pub fn content_width(&self) -> f32 {
        self.surface.page_width() - self.margins.left - self.margins.right
    }

    /// Baseline of the next line, in points from the top of the page.
    pub fn cursor(&self) -> f32 {
        self.cursor_y
    }

    /// Lowest Y a write may reach, leaving room for the footer block.
    fn bottom_limit(&self) -> f32 {
        self.surface.page_height() - self.margins.bottom - 20.0
    }

    pub fn advance(&mut self, height: f32) {
        self.cursor_y += height;
    }

    /// The page-break controller: if the projected write would cross the
    /// bottom margin, finish the current page (footer included) and reset
    /// the cursor on a fresh one. No write may land outside page bounds.
    pub fn ensure_room(&mut self, height: f32) -> Result<(), Error> {
        if self.cursor_y + height > self.bottom_limit() {
            self.break_page()?;
        }
        Ok(())
    }

    /// Forced page break: footer on the outgoing page, cursor reset with the
    /// continuation offset.
    pub fn break_page(&mut self) -> Result<(), Error> {
        self.draw_footer()?;
        self.surface.new_page()?;
        self.cursor_y = self.margins.top + CONTINUATION_OFFSET;
        Ok(())
    }

    /// Draw one already-wrapped line at the cursor and advance by `line_h`.
    /// Breaks the page first when the line would not fit.
    pub fn write_line(&mut self, text: &str, style: &TextStyle, line_h: f32) -> Result<(), Error> {
        self.ensure_room(line_h)?;
        self.surface
            .draw_text(text, self.margins.left, self.cursor_y, style)?;
        self.cursor_y += line_h;
        Ok(())
    }

    /// Wrap `text` to the full content width and write every line.
    pub fn write_paragraph(
        &mut self,
        text: &str,
        style: &TextStyle,
        line_h: f32,
    ) -> Result<(), Error> {
        let lines = wrap_text(&self.surface, text, style, self.content_width());
        for line in &lines {
            self.write_line(line, style, line_h)?;
        }
        Ok(())
    }

    /// Draw a centered line at the cursor and advance.
    pub fn write_centered(
        &mut self,
        text: &str,
        style: &TextStyle,
        line_h: f32,
    ) -> Result<(), Error> {
        self.ensure_room(line_h)?;
        let w = self.surface.measure_text(text, style);
        let x = self.margins.left + (self.content_width() - w).max(0.0) / 2.0;
        self.surface.draw_text(text, x, self.cursor_y, style)?;
        self.cursor_y += line_h;
        Ok(())
    }

    /// Full-width horizontal rule at the cursor; does not advance.
    pub fn rule(&mut self, thickness: f32) -> Result<(), Error> {
        let right = self.surface.page_width() - self.margins.right;
        self.surface
            .draw_rule(self.margins.left, right, self.cursor_y, thickness, None)
    }

    /// Footer block: timestamp left, page number right, document id centered,
    /// with a double separator rule above.
    fn draw_footer(&mut self) -> Result<(), Error> {
        let Some(info) = self.footer.clone() else {
            return Ok(());
        };
        let page_h = self.surface.page_height();
        let page_w = self.surface.page_width();
        let left = self.margins.left;
        let right = page_w - self.margins.right;
        let footer_y = page_h - self.margins.bottom + 6.0;

        self.surface
            .draw_rule(left, right, footer_y, 0.3, Some(FOOTER_ACCENT))?;
        self.surface
            .draw_rule(left, right, footer_y + 2.0, 1.0, Some(FOOTER_ACCENT))?;

        let meta = TextStyle::regular(8.0).with_color([100, 100, 100]);
        let text_y = footer_y + 12.0;

        let stamp = format!("Gerado em: {}", info.generated_at.format("%d/%m/%Y %H:%M"));
        self.surface.draw_text(&stamp, left, text_y, &meta)?;

        let page_label = format!("Página {}", self.surface.page_count());
        let w = self.surface.measure_text(&page_label, &meta);
        self.surface.draw_text(&page_label, right - w, text_y, &meta)?;

        let id_style = TextStyle::regular(7.0).with_color([100, 100, 100]);
        let doc_id = format!("ID: {}", info.document_id);
        let w = self.surface.measure_text(&doc_id, &id_style);
        self.surface
            .draw_text(&doc_id, (page_w - w) / 2.0, text_y, &id_style)?;

        if let Some(clinic) = &info.clinic {
            let w = self.surface.measure_text(clinic, &id_style);
            self.surface
                .draw_text(clinic, (page_w - w) / 2.0, text_y + 9.0, &id_style)?;
        }
        Ok(())
    }

    /// Stamp the footer on the last page and serialize.
    pub fn finish(mut self) -> Result<Vec<u8>, Error> {
        self.draw_footer()?;
        self.surface.finish()
    }
}

/// Split `text` into lines that fit `max_width` points.
///
/// Caller-intended newlines are preserved, then words are accumulated
/// greedily while the measured width stays within bounds. A single word wider
/// than `max_width` is emitted on its own line rather than looping forever.
pub fn wrap_text<S: Surface>(
    surface: &S,
    text: &str,
    style: &TextStyle,
    max_width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if surface.measure_text(&candidate, style) <= max_width {
                current = candidate;
            } else if current.is_empty() {
                // Over-wide single word: forced break.
                lines.push(word.to_string());
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}
