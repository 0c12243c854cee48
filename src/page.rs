use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::FontFace;
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::LetterError;
use id_arena::{Arena, Id};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf};

/// The font and size a span of text is set in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<FontFace>,
    pub size: Pt,
}

/// A single run of text placed with its baseline starting at `coords`
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

/// A straight stroked line from `from` to `to`
#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub thickness: Pt,
    pub colour: Colour,
}

/// A rectangle, optionally filled and / or stroked
#[derive(Clone, PartialEq, Debug)]
pub struct RectLayout {
    pub position: Rect,
    pub fill: Option<Colour>,
    pub stroke: Option<(Colour, Pt)>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Image(ImageLayout),
    Line(LineLayout),
    Rectangle(RectLayout),
}

impl PageContents {
    /// The lowest y-coordinate this primitive touches
    pub fn lowest_y(&self) -> Option<Pt> {
        match self {
            PageContents::Text(spans) => spans
                .iter()
                .map(|span| span.coords.1)
                .reduce(Pt::min),
            PageContents::Image(image) => Some(image.position.y1),
            PageContents::Line(line) => Some(line.from.1.min(line.to.1)),
            PageContents::Rectangle(rect) => Some(rect.position.y1.min(rect.position.y2)),
        }
    }
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// Everything drawn on the page, in draw order
    pub contents: Vec<PageContents>,
    /// The page number line, set once all pages have been laid out
    pub footer: Option<SpanLayout>,
}

impl Page {
    pub fn new(size: PageSize, margins: &Margins) -> Page {
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: size.0,
                y2: size.1,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: size.0 - margins.right,
                y2: size.1 - margins.top,
            },
            contents: Vec::default(),
            footer: None,
        }
    }

    /// Iterate over every text span on the page, excluding the footer
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents
            .iter()
            .filter_map(|content| match content {
                PageContents::Text(spans) => Some(spans),
                _ => None,
            })
            .flatten()
    }

    /// Find the first span whose text is exactly `text`
    pub fn find_span(&self, text: &str) -> Option<&SpanLayout> {
        self.spans().find(|span| span.text == text)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<FontFace>,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<(), LetterError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(LetterError::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        if let Some(parent) = refs.get(RefType::PageTree) {
            page.parent(parent);
        }

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(font_id.index())) {
                resource_fonts.pair(Name(format!("F{}", font_id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        let mut resource_xobjects = resources.x_objects();
        for (image_id, _) in images.iter() {
            if let Some(image_ref) = refs.get(RefType::Image(image_id.index())) {
                resource_xobjects.pair(Name(format!("I{}", image_id.index()).as_bytes()), image_ref);
            }
        }
        resource_xobjects.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let mut rendered = render_contents(&self.contents, fonts)?;
        if let Some(footer) = &self.footer {
            rendered.extend(render_contents(
                &[PageContents::Text(vec![footer.clone()])],
                fonts,
            )?);
        }
        let compressed = compress_to_vec_zlib(&rendered, CompressionLevel::DefaultLevel as u8);
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}
