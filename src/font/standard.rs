use super::FontMetrics;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Name, Pdf};

/// Advance widths (1/1000 em) of the printable ASCII range, ' ' through '~'
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width used for characters outside the tables
const DEFAULT_WIDTH: u16 = 556;

const ASCENDER: f32 = 718.0;
const DESCENDER: f32 = -207.0;

/// One of the standard PDF fonts. These are never embedded: readers supply their
/// own copy, so only the metrics are carried here. Text is encoded with
/// WinAnsiEncoding, which covers the pound and euro signs used in letters.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl StandardFont {
    /// The PostScript name readers use to find the font
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    fn is_bold(&self) -> bool {
        matches!(self, StandardFont::HelveticaBold)
    }

    /// Advance width of a single character, in 1/1000 em
    pub fn char_width(&self, ch: char) -> u16 {
        let bold = self.is_bold();
        match ch {
            ' '..='~' => {
                let index = ch as usize - ' ' as usize;
                if bold {
                    HELVETICA_BOLD_WIDTHS[index]
                } else {
                    HELVETICA_WIDTHS[index]
                }
            }
            '\u{a0}' => 278,
            '£' | '€' | '–' | '¥' => 556,
            '•' => 350,
            '‘' | '’' | '‚' => {
                if bold {
                    278
                } else {
                    222
                }
            }
            '“' | '”' => {
                if bold {
                    500
                } else {
                    333
                }
            }
            '—' | '…' | '™' => 1000,
            '©' | '®' => 737,
            '°' => 400,
            '§' => 556,
            _ => DEFAULT_WIDTH,
        }
    }

    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        text.chars().map(winansi).collect()
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(font_index));
        let mut font = writer.type1_font(id);
        font.base_font(Name(self.base_font().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

impl FontMetrics for StandardFont {
    fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text.chars().map(|ch| self.char_width(ch) as u32).sum();
        size * (units as f32 / 1000.0)
    }

    fn ascent(&self, size: Pt) -> Pt {
        size * (ASCENDER / 1000.0)
    }

    fn descent(&self, size: Pt) -> Pt {
        size * (DESCENDER / 1000.0)
    }
}

/// Map a character to its WinAnsiEncoding code, substituting '?' for anything the
/// encoding cannot represent
pub(crate) fn winansi(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        _ => b'?',
    }
}
