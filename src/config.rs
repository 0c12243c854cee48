use crate::layout::Margins;
use crate::pagesize::{self, PageSize};
use crate::units::Pt;
use crate::LetterError;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a line of text within the content box
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    /// Stretch the spaces so every line but the last of a paragraph fills the
    /// content width. Treated as [Align::Left] for single lines.
    Justify,
}

/// Page geometry and typography for a single letter. The configuration is fixed
/// for the whole document: every page shares the same size and margins.
///
/// The defaults approximate a UK business letter on A4: 72pt margins, 11pt body
/// text, a 1.6 line height multiplier and 12pt between paragraphs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub page_width: Pt,
    pub page_height: Pt,
    pub margin_top: Pt,
    pub margin_bottom: Pt,
    pub margin_left: Pt,
    pub margin_right: Pt,
    pub font_size_body: Pt,
    pub font_size_heading1: Pt,
    pub font_size_heading2: Pt,
    pub font_size_small: Pt,
    /// Multiplied by a font size to get the distance between baselines
    pub line_height: f32,
    pub paragraph_spacing: Pt,
    /// Alignment of the sender block and the date
    pub header_align: Align,
    /// Alignment of plain body paragraphs
    pub body_align: Align,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            page_width: pagesize::A4.0,
            page_height: pagesize::A4.1,
            margin_top: Pt(72.0),
            margin_bottom: Pt(72.0),
            margin_left: Pt(72.0),
            margin_right: Pt(72.0),
            font_size_body: Pt(11.0),
            font_size_heading1: Pt(16.0),
            font_size_heading2: Pt(13.0),
            font_size_small: Pt(9.0),
            line_height: 1.6,
            paragraph_spacing: Pt(12.0),
            header_align: Align::Right,
            body_align: Align::Left,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> LayoutConfig {
        LayoutConfig::default()
    }

    /// Set the page size, modifying `self`
    pub fn page_size(&mut self, size: PageSize) -> &mut Self {
        self.page_width = size.0;
        self.page_height = size.1;
        self
    }

    /// Set all four margins, modifying `self`
    pub fn margins(&mut self, margins: Margins) -> &mut Self {
        self.margin_top = margins.top;
        self.margin_right = margins.right;
        self.margin_bottom = margins.bottom;
        self.margin_left = margins.left;
        self
    }

    /// Set the body, heading and small font sizes, modifying `self`
    pub fn font_sizes(&mut self, body: Pt, heading1: Pt, heading2: Pt, small: Pt) -> &mut Self {
        self.font_size_body = body;
        self.font_size_heading1 = heading1;
        self.font_size_heading2 = heading2;
        self.font_size_small = small;
        self
    }

    /// Set the line height multiplier, modifying `self`
    pub fn line_height(&mut self, line_height: f32) -> &mut Self {
        self.line_height = line_height;
        self
    }

    /// Set the gap between paragraphs, modifying `self`
    pub fn paragraph_spacing(&mut self, spacing: Pt) -> &mut Self {
        self.paragraph_spacing = spacing;
        self
    }

    /// Set the header and body alignment, modifying `self`
    pub fn alignment(&mut self, header: Align, body: Align) -> &mut Self {
        self.header_align = header;
        self.body_align = body;
        self
    }

    pub fn page_size_value(&self) -> PageSize {
        (self.page_width, self.page_height)
    }

    pub fn margins_value(&self) -> Margins {
        Margins::trbl(
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_left,
        )
    }

    /// Page width less the left and right margins
    pub fn content_width(&self) -> Pt {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Page height less the top and bottom margins
    pub fn content_height(&self) -> Pt {
        self.page_height - self.margin_top - self.margin_bottom
    }

    /// The distance between baselines for text set at `size`
    pub fn line_height_for(&self, size: Pt) -> Pt {
        size * self.line_height
    }

    /// Check the configuration leaves room for content. A page that can't hold a
    /// single line of body text would make every page break loop forever.
    pub fn validate(&self) -> Result<(), LetterError> {
        let sizes = [
            self.font_size_body,
            self.font_size_heading1,
            self.font_size_heading2,
            self.font_size_small,
        ];
        let margins = [
            self.margin_top,
            self.margin_bottom,
            self.margin_left,
            self.margin_right,
        ];

        if self.content_width() <= Pt(0.0) {
            return Err(LetterError::InvalidConfig(format!(
                "content width must be positive, got {}",
                self.content_width()
            )));
        }
        if margins.iter().any(|margin| *margin < Pt(0.0)) {
            return Err(LetterError::InvalidConfig("margins can't be negative".into()));
        }
        if sizes.iter().any(|size| *size <= Pt(0.0)) {
            return Err(LetterError::InvalidConfig("font sizes must be positive".into()));
        }
        if self.line_height <= 0.0 || !self.line_height.is_finite() {
            return Err(LetterError::InvalidConfig(format!(
                "line height multiplier must be positive, got {}",
                self.line_height
            )));
        }
        if self.paragraph_spacing < Pt(0.0) {
            return Err(LetterError::InvalidConfig("paragraph spacing can't be negative".into()));
        }

        let tallest_line = sizes
            .iter()
            .map(|size| self.line_height_for(*size))
            .fold(Pt(0.0), Pt::max);
        if self.content_height() < tallest_line {
            return Err(LetterError::InvalidConfig(format!(
                "content height {} can't fit a line of text {} high",
                self.content_height(),
                tallest_line
            )));
        }

        Ok(())
    }
}
