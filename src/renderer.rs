use crate::colour::colours;
use crate::config::LayoutConfig;
use crate::document::Document;
use crate::font::{FontMetrics, FontSet};
use crate::info::Info;
use crate::layout::PageManager;
use crate::model::LetterContent;
use crate::page::{SpanFont, SpanLayout};
use crate::render::{render_info_sheet, render_letter, render_reply_form};
use crate::units::Pt;
use crate::LetterError;

/// Distance of the page number below the bottom margin
pub const FOOTER_OFFSET: Pt = Pt(30.0);

/// TrueType / OpenType faces to set a letter in instead of Helvetica
#[derive(Clone, Debug)]
pub struct FontData {
    pub regular: Vec<u8>,
    pub bold: Vec<u8>,
    pub italic: Vec<u8>,
}

/// Lays out letters and renders them to PDF.
///
/// A renderer holds only configuration, so one instance can be shared between
/// threads and used for any number of letters. Every call builds its own
/// [Document].
///
/// ```
/// use letter_gen::{Address, LetterContent, LetterRenderer, Paragraph};
///
/// let content = LetterContent {
///     recipient: Address::new("Jane Smith").line("1 High Street").line("London"),
///     salutation: "Dear Ms Smith,".into(),
///     paragraphs: vec![Paragraph::plain("We write regarding your account.")],
///     closing: "Yours sincerely,".into(),
///     signer_name: "A. Solicitor".into(),
///     ..Default::default()
/// };
///
/// let pdf = LetterRenderer::default().render(&content).expect("can render");
/// assert!(pdf.starts_with(b"%PDF"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LetterRenderer {
    config: LayoutConfig,
    info: Info,
    fonts: Option<FontData>,
}

impl LetterRenderer {
    pub fn new(config: LayoutConfig) -> LetterRenderer {
        LetterRenderer {
            config,
            ..Default::default()
        }
    }

    /// Set the metadata written to the PDF, modifying `self`
    pub fn info(&mut self, info: Info) -> &mut Self {
        self.info = info;
        self
    }

    /// Use embedded TrueType faces instead of the standard Helvetica family,
    /// modifying `self`
    pub fn fonts(&mut self, fonts: FontData) -> &mut Self {
        self.fonts = Some(fonts);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn validate(&self, content: &LetterContent) -> Result<(), LetterError> {
        self.config.validate()?;
        if content.include_info_sheet && content.info_sheet.is_none() {
            return Err(LetterError::MissingAnnex {
                flag: "includeInfoSheet",
                payload: "infoSheet",
            });
        }
        if content.include_reply_form && content.reply_form.is_none() {
            return Err(LetterError::MissingAnnex {
                flag: "includeReplyForm",
                payload: "replyForm",
            });
        }
        Ok(())
    }

    /// Lay out a letter and its annexes into a numbered, bookmarked page tree
    /// without serialising it
    pub fn layout(&self, content: &LetterContent) -> Result<Document, LetterError> {
        self.validate(content)?;

        let mut document = Document::default();
        let fonts = match &self.fonts {
            Some(data) => FontSet::truetype(
                &mut document,
                data.regular.clone(),
                data.bold.clone(),
                data.italic.clone(),
            )?,
            None => FontSet::standard(&mut document),
        };

        let mut pages = PageManager::new(document, fonts, self.config.clone());
        let mut bookmarks = vec![("Letter", 0)];

        render_letter(&mut pages, content);

        if let Some(sheet) = content.info_sheet.as_ref().filter(|_| content.include_info_sheet) {
            // annexes always begin on a page of their own
            let first_page = pages.page_count();
            render_info_sheet(&mut pages, sheet);
            bookmarks.push(("Information Sheet", first_page));
        }
        if let Some(form) = content.reply_form.as_ref().filter(|_| content.include_reply_form) {
            let first_page = pages.page_count();
            render_reply_form(&mut pages, form);
            bookmarks.push(("Reply Form", first_page));
        }

        let mut document = pages.finish();
        number_pages(&mut document, &self.config, fonts);
        for (title, page_index) in bookmarks {
            document.add_bookmark(title, page_index);
        }

        Ok(document)
    }

    /// Lay out a letter and its annexes and render them to PDF bytes
    pub fn render(&self, content: &LetterContent) -> Result<Vec<u8>, LetterError> {
        let mut document = self.layout(content)?;
        let page_count = document.page_count();

        document.set_info(self.info.clone().with_letter_defaults(content));

        let bytes = document.to_bytes()?;
        log::info!("rendered letter: {page_count} pages, {} bytes", bytes.len());
        Ok(bytes)
    }
}

/// Put a centred "Page X of Y" footer on every page of the document. This must run
/// after all content has been laid out, so the total is known.
pub fn number_pages(document: &mut Document, config: &LayoutConfig, fonts: FontSet) {
    let total = document.page_count();
    let size = config.font_size_small;
    let y = (config.margin_bottom - FOOTER_OFFSET).max(size);
    let font = &document.fonts[fonts.regular];

    let footers: Vec<SpanLayout> = (1..=total)
        .map(|number| {
            let text = format!("Page {number} of {total}");
            let width = font.width_of_text(&text, size);
            SpanLayout {
                coords: ((config.page_width - width) / 2.0, y),
                text,
                font: SpanFont {
                    id: fonts.regular,
                    size,
                },
                colour: colours::DARK_GREY,
            }
        })
        .collect();

    for (id, footer) in document.page_order.iter().zip(footers) {
        document.pages[*id].footer = Some(footer);
    }
}
