//! Flowing content down pages.
//!
//! Layout happens top to bottom with a single write cursor owned by the
//! [PageManager]. Each drawing method measures what it is about to place, asks the
//! manager to [ensure space](PageManager::ensure_space) for it (starting a new page
//! when it would cross the bottom margin) and then moves the cursor down past it.
//!
//! Text measurement and greedy word wrapping live in [wrap_text], which works
//! against any [FontMetrics](crate::FontMetrics) implementation.
//!
//! # Example
//!
//! ```
//! use letter_gen::{Document, FontSet, LayoutConfig, Pt, Align};
//! use letter_gen::layout::{PageManager, TextStyle};
//!
//! let mut document = Document::default();
//! let fonts = FontSet::standard(&mut document);
//! let mut pages = PageManager::new(document, fonts, LayoutConfig::default());
//!
//! pages.draw_line("Dear Ms Smith,", &TextStyle::regular(Pt(11.0)), Align::Left);
//! pages.draw_paragraph(
//!     "We write regarding your account.",
//!     &TextStyle::regular(Pt(11.0)),
//!     Align::Left,
//!     Pt(0.0),
//! );
//!
//! let document = pages.finish();
//! assert_eq!(document.page_count(), 1);
//! ```

mod cursor;
mod margins;
mod text;

pub use cursor::*;
pub use margins::*;
pub use text::*;
