//! Font metrics and embedding.
//!
//! A letter is typeset with three typeface roles (regular, bold and italic).
//! Each role is backed either by one of the standard PDF Helvetica faces, which
//! every PDF reader provides and which therefore need no embedding, or by a
//! TrueType / OpenType face supplied by the caller and embedded in its entirety.
//!
//! Fonts live in the [Document](crate::Document) and are referred to by their
//! [Id]. A [FontSet] is only obtainable by loading the faces into a document, so
//! text can never be measured against fonts that have not been initialised.

mod standard;
mod truetype;

pub use standard::*;
pub use truetype::*;

use crate::{
    refs::ObjectReferences, units::Pt, Document, LetterError,
};
use id_arena::Id;
use pdf_writer::Pdf;

/// Width and vertical extent queries for a face. All values are returned in page
/// units for the given font size.
pub trait FontMetrics {
    /// The advance width of `text` set at `size`. Newlines are not treated
    /// specially; callers measure one line at a time.
    fn width_of_text(&self, text: &str, size: Pt) -> Pt;

    /// Distance from the baseline to the top of the font
    fn ascent(&self, size: Pt) -> Pt;

    /// Distance from the baseline to the bottom of the font. Usually negative
    fn descent(&self, size: Pt) -> Pt;
}

/// A font stored in a [Document]
pub enum FontFace {
    Standard(StandardFont),
    TrueType(TrueTypeFont),
}

impl FontFace {
    /// Encode `text` into the bytes that are shown by the `Tj` operator for this face
    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            FontFace::Standard(font) => font.encode(text),
            FontFace::TrueType(font) => font.encode(text),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<FontFace>, writer: &mut Pdf) {
        match self {
            FontFace::Standard(font) => font.write(refs, id.index(), writer),
            FontFace::TrueType(font) => font.write(refs, id.index(), writer),
        }
    }
}

impl FontMetrics for FontFace {
    fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        match self {
            FontFace::Standard(font) => font.width_of_text(text, size),
            FontFace::TrueType(font) => font.width_of_text(text, size),
        }
    }

    fn ascent(&self, size: Pt) -> Pt {
        match self {
            FontFace::Standard(font) => font.ascent(size),
            FontFace::TrueType(font) => font.ascent(size),
        }
    }

    fn descent(&self, size: Pt) -> Pt {
        match self {
            FontFace::Standard(font) => font.descent(size),
            FontFace::TrueType(font) => font.descent(size),
        }
    }
}

/// The typeface role a piece of text is set in
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum FontRole {
    Regular,
    Bold,
    Italic,
}

/// The three faces a letter is set in, loaded into a document
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FontSet {
    pub regular: Id<FontFace>,
    pub bold: Id<FontFace>,
    pub italic: Id<FontFace>,
}

impl FontSet {
    /// Load the standard Helvetica family into the document
    pub fn standard(document: &mut Document) -> FontSet {
        FontSet {
            regular: document.add_font(FontFace::Standard(StandardFont::Helvetica)),
            bold: document.add_font(FontFace::Standard(StandardFont::HelveticaBold)),
            italic: document.add_font(FontFace::Standard(StandardFont::HelveticaOblique)),
        }
    }

    /// Parse and load three TrueType / OpenType faces into the document, returning an
    /// error if any of them cannot be parsed
    pub fn truetype(
        document: &mut Document,
        regular: Vec<u8>,
        bold: Vec<u8>,
        italic: Vec<u8>,
    ) -> Result<FontSet, LetterError> {
        let regular = TrueTypeFont::load(regular)?;
        let bold = TrueTypeFont::load(bold)?;
        let italic = TrueTypeFont::load(italic)?;

        Ok(FontSet {
            regular: document.add_font(FontFace::TrueType(regular)),
            bold: document.add_font(FontFace::TrueType(bold)),
            italic: document.add_font(FontFace::TrueType(italic)),
        })
    }

    pub fn id(&self, role: FontRole) -> Id<FontFace> {
        match role {
            FontRole::Regular => self.regular,
            FontRole::Bold => self.bold,
            FontRole::Italic => self.italic,
        }
    }
}
