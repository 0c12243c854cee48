//! Renderers for the structured blocks of a letter and its annex pages.
//!
//! Each renderer draws one kind of content through a [PageManager], which takes
//! care of page breaks. Renderers never touch pages directly.

mod annex;
mod letter;

pub use annex::*;
pub use letter::*;

use crate::config::Align;
use crate::layout::{Marker, PageManager, TextStyle};
use crate::units::Pt;

/// How far bullet text is indented from its bullet
pub const BULLET_INDENT: Pt = Pt(15.0);

pub(crate) fn body_style(pages: &PageManager) -> TextStyle {
    TextStyle::regular(pages.config().font_size_body)
}

/// Draw a bold heading with half the paragraph spacing above and below. Level 1
/// headings use the larger heading size.
pub fn draw_heading(pages: &mut PageManager, text: &str, level: u8) {
    let config = pages.config();
    let size = if level <= 1 {
        config.font_size_heading1
    } else {
        config.font_size_heading2
    };
    let half_spacing = config.paragraph_spacing / 2.0;

    pages.move_down(half_spacing);
    pages.draw_paragraph(text, &TextStyle::bold(size), Align::Left, Pt(0.0));
    pages.move_down(half_spacing);
}

/// Draw a bulleted list in the body font, followed by paragraph spacing. An empty
/// list draws nothing.
pub fn draw_bullet_list<S: AsRef<str>>(pages: &mut PageManager, items: &[S]) {
    if items.is_empty() {
        return;
    }
    let style = body_style(pages);
    for item in items {
        pages.draw_marked_item(Marker::Bullet, item.as_ref(), &style, Pt(0.0), BULLET_INDENT);
    }
    let spacing = pages.config().paragraph_spacing;
    pages.move_down(spacing);
}
