//! Lays out UK legal correspondence (letters before claim, reminders, settlement
//! offers) from structured content and renders it to paginated A4 PDF.
//!
//! Content is described by a [LetterContent]: addresses, body paragraphs, an
//! optional label / value table, a signature and enclosures, plus an optional
//! information sheet and reply form which each start on a page of their own. A
//! [LetterRenderer] flows the content down pages according to a [LayoutConfig],
//! numbers the pages and writes the PDF.
//!
//! Layout produces an in-memory [Document] which can be inspected with
//! [LetterRenderer::layout] before (or instead of) writing it out.

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Cursor-based layout of text, rules, boxes and images across pages
pub mod layout;

mod model;
pub use model::*;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

/// Renderers for each block of a letter and its annexes
pub mod render;

mod renderer;
pub use renderer::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
