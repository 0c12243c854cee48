use crate::colour::colours;
use crate::config::Align;
use crate::image::Image;
use crate::layout::{PageManager, TextStyle};
use crate::model::{Address, LetterContent, Paragraph, Table};
use crate::render::{body_style, draw_bullet_list, draw_heading};
use crate::units::Pt;

/// Width of the label column of a [Table], measured from the left margin
pub const TABLE_LABEL_WIDTH: Pt = Pt(200.0);
/// Space kept clear between a table label and its value
pub const TABLE_GUTTER: Pt = Pt(10.0);
/// The box a signature image is scaled down to fit, and the blank space left for a
/// wet signature when there is no image
pub const SIGNATURE_WIDTH: Pt = Pt(150.0);
pub const SIGNATURE_HEIGHT: Pt = Pt(40.0);
/// Length of the rule above the enclosures list
pub const ENCLOSURES_RULE_WIDTH: Pt = Pt(100.0);

/// Lay out the main body of a letter, from the sender's address through to the
/// enclosures list
pub fn render_letter(pages: &mut PageManager, content: &LetterContent) {
    let header_align = pages.config().header_align;

    draw_address(pages, &content.sender, header_align);
    draw_address(pages, &content.recipient, Align::Left);

    let body = body_style(pages);
    draw_header_line(pages, &content.date, &body, header_align);
    draw_header_line(pages, &content.reference, &TextStyle::bold(body.size), Align::Left);
    draw_header_line(pages, &content.salutation, &body, Align::Left);

    for paragraph in content.paragraphs.iter() {
        draw_body_paragraph(pages, paragraph);
    }

    if let Some(table) = &content.table {
        draw_table(pages, table);
    }

    draw_closing(
        pages,
        &content.closing,
        content.signature_image.as_deref(),
        &content.signer_name,
        content.signer_title.as_deref(),
    );

    draw_enclosures(pages, content.enclosures.as_slice());
}

/// Draw an address block: the name in bold, then the contact name and each address
/// line, followed by paragraph spacing. Long lines wrap within the content width.
/// An address with no name and no lines draws nothing.
pub fn draw_address(pages: &mut PageManager, address: &Address, align: Align) {
    if address.name.trim().is_empty() && address.lines.is_empty() {
        return;
    }

    let body = body_style(pages);
    pages.draw_paragraph(&address.name, &TextStyle::bold(body.size), align, Pt(0.0));
    if let Some(contact) = address.contact_name.as_deref() {
        pages.draw_paragraph(contact, &body, align, Pt(0.0));
    }
    for line in address.lines.iter() {
        pages.draw_paragraph(line, &body, align, Pt(0.0));
    }

    let spacing = pages.config().paragraph_spacing;
    pages.move_down(spacing);
}

/// A single unwrapped line (date, reference or salutation) followed by paragraph
/// spacing. Blank text is skipped entirely.
fn draw_header_line(pages: &mut PageManager, text: &str, style: &TextStyle, align: Align) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    pages.draw_line(text, style, align);
    let spacing = pages.config().paragraph_spacing;
    pages.move_down(spacing);
}

pub fn draw_body_paragraph(pages: &mut PageManager, paragraph: &Paragraph) {
    match paragraph {
        Paragraph::Plain { text, bold } => {
            let size = pages.config().font_size_body;
            let style = if *bold {
                TextStyle::bold(size)
            } else {
                TextStyle::regular(size)
            };
            let align = pages.config().body_align;
            if pages.draw_paragraph(text, &style, align, Pt(0.0)) > 0 {
                let spacing = pages.config().paragraph_spacing;
                pages.move_down(spacing);
            }
        }
        Paragraph::Heading { text, level } => draw_heading(pages, text, *level),
        Paragraph::BulletList { items } => draw_bullet_list(pages, items.as_slice()),
    }
}

/// Whether a table value is a sum of money, and so should line up on the right.
/// Values starting with a currency symbol count, ignoring leading whitespace.
pub fn is_currency_amount(value: &str) -> bool {
    matches!(value.trim_start().chars().next(), Some('£' | '$' | '€'))
}

/// Draw a label / value table. Labels wrap within the label column; amounts are
/// right aligned to the content edge, anything else wraps in the value column.
/// Each row is kept together on one page.
pub fn draw_table(pages: &mut PageManager, table: &Table) {
    let style = body_style(pages);
    let line_height = pages.line_height(&style);
    let label_x = pages.left();
    let value_x = label_x + TABLE_LABEL_WIDTH;
    let mut drew_rows = false;

    for row in table.rows.iter() {
        let labels = pages.wrap(&row.label, TABLE_LABEL_WIDTH - TABLE_GUTTER, &style);
        let amount = is_currency_amount(&row.value);
        let values = if amount {
            let value = row.value.trim();
            if value.is_empty() {
                Vec::new()
            } else {
                vec![value.to_string()]
            }
        } else {
            pages.wrap(&row.value, pages.right() - value_x, &style)
        };

        let line_count = labels.len().max(values.len());
        if line_count == 0 {
            continue;
        }

        let height = line_height * line_count as f32;
        // a row taller than a page can't be kept together, so it flows line by line
        let keep_together = height <= pages.config().content_height();
        let row_top = if keep_together { pages.reserve(height) } else { pages.y() };
        for i in 0..line_count {
            let top = if keep_together {
                row_top - line_height * i as f32
            } else {
                pages.reserve(line_height)
            };
            let baseline = pages.baseline_below(top, &style);
            if let Some(label) = labels.get(i) {
                pages.place_span(label, label_x, baseline, &style);
            }
            if let Some(value) = values.get(i) {
                let x = if amount {
                    pages.right() - pages.measure(value, &style)
                } else {
                    value_x
                };
                pages.place_span(value, x, baseline, &style);
            }
            if !keep_together {
                pages.move_down(line_height);
            }
        }
        if keep_together {
            pages.move_down(height);
        }
        drew_rows = true;
    }

    if drew_rows {
        let spacing = pages.config().paragraph_spacing;
        pages.move_down(spacing);
    }
}

/// Draw the closing phrase, the signature and the signer's name and title.
///
/// The signature slot is always [SIGNATURE_HEIGHT] tall, so the signer's name sits
/// in the same place whether or not an image is drawn. A signature that can't be
/// decoded is logged and left blank rather than failing the letter.
pub fn draw_closing(
    pages: &mut PageManager,
    closing: &str,
    signature: Option<&str>,
    signer_name: &str,
    signer_title: Option<&str>,
) {
    let body = body_style(pages);
    let closing = closing.trim();
    if !closing.is_empty() {
        pages.draw_line(closing, &body, Align::Left);
    }

    let top = pages.reserve(SIGNATURE_HEIGHT);
    match signature.map(Image::from_base64) {
        Some(Ok(image)) => {
            let (width, height) = image.fit_within(*SIGNATURE_WIDTH, *SIGNATURE_HEIGHT);
            let id = pages.add_image(image);
            let x = pages.left();
            pages.draw_image(id, x, Pt(width), Pt(height));
            // the image may have been scaled shorter than the slot
            pages.move_down(SIGNATURE_HEIGHT - Pt(height));
        }
        Some(Err(e)) => {
            log::warn!("signature image could not be decoded, leaving space blank: {e}");
            pages.move_down(SIGNATURE_HEIGHT);
        }
        None => pages.move_down(SIGNATURE_HEIGHT),
    }
    debug_assert!((*(top - pages.y() - SIGNATURE_HEIGHT)).abs() < 0.001);

    let signer_name = signer_name.trim();
    if !signer_name.is_empty() {
        pages.draw_line(signer_name, &TextStyle::bold(body.size), Align::Left);
    }
    if let Some(title) = signer_title.map(str::trim).filter(|title| !title.is_empty()) {
        pages.draw_line(title, &body, Align::Left);
    }
}

/// Draw the list of enclosed documents under a short rule. Nothing is drawn when
/// there are no enclosures.
pub fn draw_enclosures<S: AsRef<str>>(pages: &mut PageManager, enclosures: &[S]) {
    if enclosures.is_empty() {
        return;
    }

    let spacing = pages.config().paragraph_spacing;
    let body = body_style(pages);
    pages.move_down(spacing);
    let left = pages.left();
    pages.draw_rule(left, left + ENCLOSURES_RULE_WIDTH, Pt(0.5), colours::RULE_GREY);
    pages.move_down(spacing / 2.0);
    pages.draw_line("Enclosures:", &TextStyle::bold(body.size), Align::Left);
    draw_bullet_list(pages, enclosures);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::document::Document;
    use crate::font::{FontMetrics, FontSet};

    fn manager() -> PageManager {
        let mut document = Document::default();
        let fonts = FontSet::standard(&mut document);
        PageManager::new(document, fonts, LayoutConfig::default())
    }

    #[test]
    fn recognises_currency_amounts() {
        assert!(is_currency_amount("£1,234.56"));
        assert!(is_currency_amount("  $20"));
        assert!(is_currency_amount("€5"));
        assert!(!is_currency_amount("Draft"));
        assert!(!is_currency_amount("1,234.56 GBP"));
        assert!(!is_currency_amount(""));
    }

    #[test]
    fn amounts_align_right_and_text_aligns_to_the_value_column() {
        let mut pages = manager();
        let table = Table::default()
            .row("Principal sum", "£1,234.56")
            .row("Status", "Draft");
        draw_table(&mut pages, &table);

        let style = body_style(&pages);
        let amount_width = pages.measure("£1,234.56", &style);
        let document = pages.finish();
        let page = document.page(0).expect("page");

        let amount = page.find_span("£1,234.56").expect("amount drawn");
        assert!((*(amount.coords.0 + amount_width) - 523.28).abs() < 0.01);
        let status = page.find_span("Draft").expect("status drawn");
        assert_eq!(status.coords.0, Pt(272.0));
        let label = page.find_span("Principal sum").expect("label drawn");
        assert_eq!(label.coords.0, Pt(72.0));
        assert_eq!(label.coords.1, amount.coords.1);
    }

    #[test]
    fn empty_tables_draw_nothing() {
        let mut pages = manager();
        let before = pages.y();
        draw_table(&mut pages, &Table::default());
        assert_eq!(pages.y(), before);
        assert!(pages.is_page_empty());
    }

    #[test]
    fn long_labels_wrap_within_the_label_column() {
        let mut pages = manager();
        let table = Table::default().row(
            "Interest accrued under the Late Payment of Commercial Debts (Interest) Act 1998",
            "£12.00",
        );
        draw_table(&mut pages, &table);
        let style = body_style(&pages);
        let document = pages.finish();
        let page = document.page(0).expect("page");
        let labels: Vec<_> = page.spans().filter(|span| span.coords.0 == Pt(72.0)).collect();
        assert!(labels.len() > 1);
        for label in labels {
            let width = document.fonts[label.font.id].width_of_text(&label.text, style.size);
            assert!(width <= TABLE_LABEL_WIDTH - TABLE_GUTTER);
        }
    }

    #[test]
    fn bad_signatures_leave_the_same_space_as_no_signature() {
        let mut without = manager();
        draw_closing(&mut without, "Yours sincerely", None, "A. Solicitor", None);
        let mut corrupt = manager();
        draw_closing(&mut corrupt, "Yours sincerely", Some("not an image!"), "A. Solicitor", None);

        let y_without = without.y();
        let y_corrupt = corrupt.y();
        assert_eq!(y_without, y_corrupt);

        let document = corrupt.finish();
        let closing = document.page(0).and_then(|p| p.find_span("Yours sincerely")).expect("closing");
        let name = document.page(0).and_then(|p| p.find_span("A. Solicitor")).expect("name");
        // one body line plus the signature slot
        assert!((*(closing.coords.1 - name.coords.1) - (17.6 + 40.0)).abs() < 0.01);
    }

    #[test]
    fn headings_use_the_heading_sizes() {
        let mut pages = manager();
        draw_body_paragraph(&mut pages, &Paragraph::heading("Summary", 1));
        draw_body_paragraph(&mut pages, &Paragraph::heading("Details", 2));
        let document = pages.finish();
        let page = document.page(0).expect("page");
        assert_eq!(page.find_span("Summary").expect("drawn").font.size, Pt(16.0));
        assert_eq!(page.find_span("Details").expect("drawn").font.size, Pt(13.0));
    }

    #[test]
    fn enclosures_are_listed_under_a_rule() {
        let mut pages = manager();
        draw_enclosures(&mut pages, &["invoice-1041.pdf", "statement.pdf"]);
        let document = pages.finish();
        let page = document.page(0).expect("page");
        assert!(page.find_span("Enclosures:").is_some());
        assert_eq!(page.spans().filter(|span| span.text == "•").count(), 2);
        assert!(page
            .contents
            .iter()
            .any(|content| matches!(content, crate::page::PageContents::Line(_))));
    }

    #[test]
    fn rows_taller_than_a_page_flow_across_pages() {
        let mut pages = manager();
        let value = vec!["instalment"; 800].join(" ");
        let table = Table::default().row("Payment history", &value).row("Total", "£90.00");
        draw_table(&mut pages, &table);
        assert!(pages.page_count() >= 2);

        let margin_bottom = pages.config().margin_bottom;
        let document = pages.finish();
        for page in document.iter_pages() {
            for content in page.contents.iter() {
                let lowest = content.lowest_y().expect("drawn content has a bottom");
                assert!(lowest >= margin_bottom - Pt(0.01), "drawn at {lowest}");
            }
            for span in page.spans().filter(|span| span.text.starts_with("instalment")) {
                assert_eq!(span.coords.0, Pt(272.0));
            }
        }
        let first = document.page(0).expect("page");
        let label = first.find_span("Payment history").expect("label drawn");
        let value = first.spans().find(|span| span.text.starts_with("instalment")).expect("value drawn");
        assert_eq!(label.coords.1, value.coords.1);
        assert!(document.iter_pages().any(|page| page.find_span("£90.00").is_some()));
    }

    #[test]
    fn long_address_lines_wrap_within_the_content_width() {
        let mut pages = manager();
        let address = Address::new("Jane Smith").line(
            "Flat 12, Riverside Court, Unit 4 The Old Brewery Industrial Estate, Upper Thames Street, Kingston upon Thames",
        );
        draw_address(&mut pages, &address, Align::Right);
        let style = body_style(&pages);
        let document = pages.finish();
        let page = document.page(0).expect("page");

        let lines: Vec<_> = page.spans().filter(|span| span.text != "Jane Smith").collect();
        assert!(lines.len() > 1);
        for line in lines {
            let width = document.fonts[line.font.id].width_of_text(&line.text, style.size);
            assert!(line.coords.0 >= Pt(72.0) - Pt(0.01));
            assert!((*(line.coords.0 + width) - 523.28).abs() < 0.01);
        }
    }
}
