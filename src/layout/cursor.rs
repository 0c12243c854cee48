use crate::colour::{colours, Colour};
use crate::config::{Align, LayoutConfig};
use crate::document::Document;
use crate::font::{FontFace, FontMetrics, FontRole, FontSet};
use crate::image::Image;
use crate::layout::text::{justify_line, wrap_text, wrap_text_lines};
use crate::page::*;
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::Id;

/// Side length of the empty square drawn for checkbox items
pub const CHECKBOX_SIZE: Pt = Pt(9.0);

/// Slack allowed when asserting nothing is placed below the bottom margin, to absorb
/// floating point error in accumulated cursor movements
const MARGIN_EPSILON: f32 = 0.01;

/// The font, size and colour a piece of text is drawn with
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TextStyle {
    pub role: FontRole,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    pub fn new(role: FontRole, size: Pt) -> TextStyle {
        TextStyle {
            role,
            size,
            colour: colours::BLACK,
        }
    }

    pub fn regular(size: Pt) -> TextStyle {
        TextStyle::new(FontRole::Regular, size)
    }

    pub fn bold(size: Pt) -> TextStyle {
        TextStyle::new(FontRole::Bold, size)
    }

    pub fn italic(size: Pt) -> TextStyle {
        TextStyle::new(FontRole::Italic, size)
    }

    pub fn with_colour(self, colour: Colour) -> TextStyle {
        TextStyle { colour, ..self }
    }
}

/// What is drawn in the hanging indent in front of a list item
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Marker {
    /// A bullet glyph
    Bullet,
    /// An empty square to be ticked by hand
    Checkbox,
}

/// Owns the document being laid out along with the write cursor: the current page
/// and the vertical position the next line will be written at.
///
/// The cursor position `y` is the top of the next line box, measured from the
/// bottom of the page. Drawing a line of text places its baseline one ascent below
/// `y` and then moves the cursor down by one line height.
///
/// [PageManager::ensure_space] is the only place a page break is decided. Every
/// drawing method reserves the height it needs through it before placing anything,
/// so no content ever runs past the bottom margin.
pub struct PageManager {
    document: Document,
    config: LayoutConfig,
    fonts: FontSet,
    current: Id<Page>,
    y: Pt,
}

impl PageManager {
    /// Start laying out into `document`, beginning with a fresh page. The fonts in
    /// `fonts` must have been loaded into `document`.
    pub fn new(mut document: Document, fonts: FontSet, config: LayoutConfig) -> PageManager {
        let current = document.add_page(Page::new(
            config.page_size_value(),
            &config.margins_value(),
        ));
        let y = config.page_height - config.margin_top;
        PageManager {
            document,
            config,
            fonts,
            current,
            y,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn fonts(&self) -> FontSet {
        self.fonts
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The current vertical write position
    pub fn y(&self) -> Pt {
        self.y
    }

    /// 0-based index of the current page
    pub fn page_index(&self) -> usize {
        self.document.page_count() - 1
    }

    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    /// Whether anything has been drawn on the current page yet
    pub fn is_page_empty(&self) -> bool {
        self.document.pages[self.current].contents.is_empty()
    }

    /// The x-coordinate of the left edge of the content box
    pub fn left(&self) -> Pt {
        self.config.margin_left
    }

    /// The x-coordinate of the right edge of the content box
    pub fn right(&self) -> Pt {
        self.config.page_width - self.config.margin_right
    }

    pub fn content_width(&self) -> Pt {
        self.config.content_width()
    }

    pub fn line_height(&self, style: &TextStyle) -> Pt {
        self.config.line_height_for(style.size)
    }

    /// Finish layout, handing back the document
    pub fn finish(self) -> Document {
        self.document
    }

    /// Make sure `height` more units fit above the bottom margin on the current page,
    /// starting a new page if they don't. Returns whether a new page was started.
    pub fn ensure_space(&mut self, height: Pt) -> bool {
        if self.y - height < self.config.margin_bottom {
            self.add_new_page();
            true
        } else {
            false
        }
    }

    /// Reserve `height` units (see [PageManager::ensure_space]) and return the top of
    /// the reserved block. The cursor is not moved.
    pub fn reserve(&mut self, height: Pt) -> Pt {
        self.ensure_space(height);
        self.y
    }

    /// Append a new page to the document, make it current and move the cursor to the
    /// top of its content box
    pub fn add_new_page(&mut self) -> Id<Page> {
        let page = Page::new(self.config.page_size_value(), &self.config.margins_value());
        self.current = self.document.add_page(page);
        self.y = self.config.page_height - self.config.margin_top;
        log::debug!("starting page {}", self.document.page_count());
        self.current
    }

    /// Move the cursor down. This never starts a new page by itself; the next draw
    /// will, if the cursor has passed the bottom margin.
    pub fn move_down(&mut self, amount: Pt) {
        self.y -= amount;
    }

    pub fn font(&self, role: FontRole) -> &FontFace {
        &self.document.fonts[self.fonts.id(role)]
    }

    /// Measure the width of `text` in the given style
    pub fn measure(&self, text: &str, style: &TextStyle) -> Pt {
        self.font(style.role).width_of_text(text, style.size)
    }

    /// Wrap `text` to `max_width` in the given style
    pub fn wrap(&self, text: &str, max_width: Pt, style: &TextStyle) -> Vec<String> {
        wrap_text(text, max_width, self.font(style.role), style.size)
    }

    /// Where the baseline sits for a line box whose top is at `top`
    pub fn baseline_below(&self, top: Pt, style: &TextStyle) -> Pt {
        top - self.font(style.role).ascent(style.size)
    }

    fn aligned_x(&self, text: &str, style: &TextStyle, align: Align, indent: Pt) -> Pt {
        let width = self.measure(text, style);
        match align {
            Align::Left | Align::Justify => self.left() + indent,
            Align::Right => self.right() - width,
            Align::Center => {
                let left = self.left() + indent;
                left + (self.right() - left - width) / 2.0
            }
        }
    }

    /// Draw a single line of text (no wrapping) aligned within the content box, then
    /// move down one line
    pub fn draw_line(&mut self, text: &str, style: &TextStyle, align: Align) {
        let x = self.aligned_x(text, style, align, Pt(0.0));
        self.draw_line_at(text, x, style);
    }

    /// Draw a single line of text (no wrapping) starting at `x`, then move down one line
    pub fn draw_line_at(&mut self, text: &str, x: Pt, style: &TextStyle) {
        let line_height = self.line_height(style);
        let top = self.reserve(line_height);
        let baseline = self.baseline_below(top, style);
        self.place_span(text, x, baseline, style);
        self.move_down(line_height);
    }

    /// Wrap `text` to the content width less `indent` and draw it line by line,
    /// checking for space before every line so a paragraph can flow across pages.
    /// Returns the number of lines drawn.
    pub fn draw_paragraph(
        &mut self,
        text: &str,
        style: &TextStyle,
        align: Align,
        indent: Pt,
    ) -> usize {
        let max_width = self.content_width() - indent;
        let lines = wrap_text_lines(text, max_width, self.font(style.role), style.size);
        let line_height = self.line_height(style);

        for line in lines.iter() {
            let top = self.reserve(line_height);
            let baseline = self.baseline_below(top, style);
            if align == Align::Justify && !line.ends_paragraph {
                let words = justify_line(&line.text, max_width, self.font(style.role), style.size);
                for (word, offset) in words {
                    self.place_span(&word, self.left() + indent + offset, baseline, style);
                }
            } else if !line.text.is_empty() {
                let x = self.aligned_x(&line.text, style, align, indent);
                self.place_span(&line.text, x, baseline, style);
            }
            self.move_down(line_height);
        }

        lines.len()
    }

    /// Draw a list item: a marker at `indent` from the left edge followed by the text
    /// wrapped with a hanging indent of `hang`, so continuation lines line up with the
    /// first. Items with no text draw nothing. Returns the number of lines drawn.
    pub fn draw_marked_item(
        &mut self,
        marker: Marker,
        text: &str,
        style: &TextStyle,
        indent: Pt,
        hang: Pt,
    ) -> usize {
        let text_x = self.left() + indent + hang;
        let lines = self.wrap(text, self.right() - text_x, style);
        let line_height = self.line_height(style);

        for (i, line) in lines.iter().enumerate() {
            let top = self.reserve(line_height);
            let baseline = self.baseline_below(top, style);
            if i == 0 {
                let marker_x = self.left() + indent;
                match marker {
                    Marker::Bullet => self.place_span("•", marker_x, baseline, style),
                    Marker::Checkbox => self.place_rect(RectLayout {
                        position: Rect::from_origin(
                            marker_x,
                            baseline - Pt(1.0),
                            CHECKBOX_SIZE,
                            CHECKBOX_SIZE,
                        ),
                        fill: None,
                        stroke: Some((style.colour, Pt(0.75))),
                    }),
                }
            }
            self.place_span(line, text_x, baseline, style);
            self.move_down(line_height);
        }

        lines.len()
    }

    /// Draw a horizontal rule at the cursor from `x1` to `x2`. The cursor is not moved.
    pub fn draw_rule(&mut self, x1: Pt, x2: Pt, thickness: Pt, colour: Colour) {
        let y = self.reserve(thickness);
        self.place_line(LineLayout {
            from: (x1, y),
            to: (x2, y),
            thickness,
            colour,
        });
    }

    /// Draw a box spanning the content width with its top at the cursor, returning its
    /// bounds. The cursor is not moved, so content can then be drawn inside the box.
    pub fn draw_box(&mut self, height: Pt, fill: Option<Colour>, stroke: Option<(Colour, Pt)>) -> Rect {
        let top = self.reserve(height);
        let position = Rect::from_origin(self.left(), top - height, self.content_width(), height);
        self.place_rect(RectLayout {
            position,
            fill,
            stroke,
        });
        position
    }

    /// Add an image to the document so it can be placed with [PageManager::draw_image]
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.document.add_image(image)
    }

    /// Draw an image with its top-left corner at (`x`, cursor), then move down past it
    pub fn draw_image(&mut self, image_id: Id<Image>, x: Pt, width: Pt, height: Pt) {
        let top = self.reserve(height);
        self.place_image(ImageLayout {
            image_id,
            position: Rect::from_origin(x, top - height, width, height),
        });
        self.move_down(height);
    }

    /// Place a span on the current page. Callers must have reserved the space with
    /// [PageManager::reserve] or [PageManager::ensure_space] first.
    pub(crate) fn place_span(&mut self, text: &str, x: Pt, baseline: Pt, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        self.push(PageContents::Text(vec![SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                id: self.fonts.id(style.role),
                size: style.size,
            },
            colour: style.colour,
            coords: (x, baseline),
        }]));
    }

    pub(crate) fn place_rect(&mut self, rect: RectLayout) {
        self.push(PageContents::Rectangle(rect));
    }

    pub(crate) fn place_line(&mut self, line: LineLayout) {
        self.push(PageContents::Line(line));
    }

    pub(crate) fn place_image(&mut self, image: ImageLayout) {
        self.push(PageContents::Image(image));
    }

    fn push(&mut self, content: PageContents) {
        debug_assert!(
            content
                .lowest_y()
                .map_or(true, |y| *y >= *self.config.margin_bottom - MARGIN_EPSILON),
            "content placed below the bottom margin: {content:?}"
        );
        self.document.pages[self.current].contents.push(content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> PageManager {
        let mut document = Document::default();
        let fonts = FontSet::standard(&mut document);
        PageManager::new(document, fonts, LayoutConfig::default())
    }

    fn all_contents(document: &Document) -> impl Iterator<Item = &PageContents> {
        document.iter_pages().flat_map(|page| page.contents.iter())
    }

    #[test]
    fn starts_at_the_top_margin_of_a_single_page() {
        let manager = manager();
        assert_eq!(manager.page_count(), 1);
        assert!((*manager.y() - (841.89 - 72.0)).abs() < 0.001);
        assert!(manager.is_page_empty());
    }

    #[test]
    fn ensure_space_keeps_the_page_when_there_is_room() {
        let mut manager = manager();
        assert!(!manager.ensure_space(Pt(100.0)));
        assert_eq!(manager.page_count(), 1);
    }

    #[test]
    fn ensure_space_breaks_when_the_bottom_margin_would_be_crossed() {
        let mut manager = manager();
        // leave exactly 20 units above the bottom margin
        let drop = manager.y() - Pt(72.0) - Pt(20.0);
        manager.move_down(drop);
        assert!(!manager.ensure_space(Pt(20.0)));
        assert!(manager.ensure_space(Pt(20.5)));
        assert_eq!(manager.page_count(), 2);
        assert_eq!(manager.page_index(), 1);
        assert!((*manager.y() - (841.89 - 72.0)).abs() < 0.001);
    }

    #[test]
    fn move_down_never_breaks_by_itself() {
        let mut manager = manager();
        manager.move_down(Pt(2000.0));
        assert_eq!(manager.page_count(), 1);
        manager.draw_line("after", &TextStyle::regular(Pt(11.0)), Align::Left);
        assert_eq!(manager.page_count(), 2);
    }

    #[test]
    fn draw_line_moves_down_one_line_height() {
        let mut manager = manager();
        let before = manager.y();
        manager.draw_line("Dear Sir", &TextStyle::regular(Pt(11.0)), Align::Left);
        assert!((*(before - manager.y()) - 17.6).abs() < 0.001);
    }

    #[test]
    fn baseline_sits_one_ascent_below_the_cursor() {
        let mut manager = manager();
        let top = manager.y();
        manager.draw_line("Dear Sir", &TextStyle::regular(Pt(10.0)), Align::Left);
        let document = manager.finish();
        let span = document.page(0).and_then(|p| p.find_span("Dear Sir")).expect("drawn");
        assert!((*(top - span.coords.1) - 7.18).abs() < 0.001);
        assert_eq!(span.coords.0, Pt(72.0));
    }

    #[test]
    fn right_alignment_ends_at_the_content_edge() {
        let mut manager = manager();
        let style = TextStyle::regular(Pt(11.0));
        let width = manager.measure("1 High Street", &style);
        manager.draw_line("1 High Street", &style, Align::Right);
        let right = manager.right();
        let document = manager.finish();
        let span = document.page(0).and_then(|p| p.find_span("1 High Street")).expect("drawn");
        assert!((*(span.coords.0 + width - right)).abs() < 0.001);
    }

    #[test]
    fn centred_lines_have_equal_space_either_side() {
        let mut manager = manager();
        let style = TextStyle::bold(Pt(16.0));
        let width = manager.measure("Reply Form", &style);
        manager.draw_line("Reply Form", &style, Align::Center);
        let (left, right) = (manager.left(), manager.right());
        let document = manager.finish();
        let span = document.page(0).and_then(|p| p.find_span("Reply Form")).expect("drawn");
        let left_gap = span.coords.0 - left;
        let right_gap = right - (span.coords.0 + width);
        assert!((*(left_gap - right_gap)).abs() < 0.001);
    }

    #[test]
    fn long_paragraphs_flow_onto_new_pages() {
        let mut manager = manager();
        let text = vec!["payment"; 2000].join(" ");
        let lines = manager.draw_paragraph(&text, &TextStyle::regular(Pt(11.0)), Align::Left, Pt(0.0));
        assert!(lines > 40);
        assert!(manager.page_count() >= 2);

        let margin_bottom = manager.config().margin_bottom;
        let document = manager.finish();
        for content in all_contents(&document) {
            assert!(content.lowest_y().expect("has a position") >= margin_bottom);
        }
    }

    #[test]
    fn justified_paragraphs_fill_all_but_the_last_line() {
        let mut manager = manager();
        let style = TextStyle::regular(Pt(11.0));
        let text = vec!["settlement"; 60].join(" ");
        manager.draw_paragraph(&text, &style, Align::Justify, Pt(0.0));
        let right = manager.right();
        let word_width = manager.measure("settlement", &style);
        let document = manager.finish();
        let page = document.page(0).expect("page");

        let first_line_y = page.spans().next().expect("span").coords.1;
        let last_on_first_line = page
            .spans()
            .filter(|span| span.coords.1 == first_line_y)
            .last()
            .expect("span");
        assert!((*(last_on_first_line.coords.0 + word_width - right)).abs() < 0.01);
    }

    #[test]
    fn bullet_items_hang_their_continuation_lines() {
        let mut manager = manager();
        let style = TextStyle::regular(Pt(11.0));
        let text = vec!["instalment"; 40].join(" ");
        let lines = manager.draw_marked_item(Marker::Bullet, &text, &style, Pt(0.0), Pt(15.0));
        assert!(lines > 1);
        let document = manager.finish();
        let page = document.page(0).expect("page");
        let bullets = page.spans().filter(|span| span.text == "•").count();
        assert_eq!(bullets, 1);
        for span in page.spans().filter(|span| span.text != "•") {
            assert_eq!(span.coords.0, Pt(72.0 + 15.0));
        }
    }

    #[test]
    fn checkbox_items_draw_a_square() {
        let mut manager = manager();
        manager.draw_marked_item(
            Marker::Checkbox,
            "I admit the debt",
            &TextStyle::regular(Pt(11.0)),
            Pt(0.0),
            Pt(18.0),
        );
        let document = manager.finish();
        let page = document.page(0).expect("page");
        let squares: Vec<&RectLayout> = page
            .contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Rectangle(rect) => Some(rect),
                _ => None,
            })
            .collect();
        assert_eq!(squares.len(), 1);
        assert!((*(squares[0].position.width() - CHECKBOX_SIZE)).abs() < 0.001);
        assert!((*(squares[0].position.height() - CHECKBOX_SIZE)).abs() < 0.001);
        assert!(squares[0].fill.is_none());
    }

    #[test]
    fn empty_items_draw_nothing() {
        let mut manager = manager();
        let before = manager.y();
        let lines = manager.draw_marked_item(
            Marker::Bullet,
            "   ",
            &TextStyle::regular(Pt(11.0)),
            Pt(0.0),
            Pt(15.0),
        );
        assert_eq!(lines, 0);
        assert_eq!(manager.y(), before);
        assert!(manager.is_page_empty());
    }

    #[test]
    fn boxes_that_do_not_fit_move_to_a_new_page() {
        let mut manager = manager();
        let drop = manager.y() - Pt(72.0) - Pt(30.0);
        manager.move_down(drop);
        let bounds = manager.draw_box(Pt(60.0), Some(colours::WHITE), None);
        assert_eq!(manager.page_count(), 2);
        assert!(bounds.y1 >= Pt(72.0));
        assert!((*(bounds.y2 - Pt(841.89 - 72.0))).abs() < 0.001);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "below the bottom margin")]
    fn placing_below_the_bottom_margin_is_caught() {
        let mut manager = manager();
        let style = TextStyle::regular(Pt(11.0));
        let left = manager.left();
        manager.place_span("overflow", left, Pt(10.0), &style);
    }
}
