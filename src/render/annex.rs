use crate::colour::colours;
use crate::config::Align;
use crate::layout::{Marker, PageManager, TextStyle};
use crate::model::{HelpOrganization, InfoSheetContent, ReplyFormContent, ReplyFormSection};
use crate::render::{body_style, draw_bullet_list, draw_heading};
use crate::units::Pt;

/// Minimum height of the warning box at the top of the information sheet
pub const WARNING_BOX_HEIGHT: Pt = Pt(60.0);
pub const WARNING_BOX_PADDING: Pt = Pt(10.0);
/// Indent of a checkbox label from its checkbox, and of sub-options from their parent
pub const CHECKBOX_INDENT: Pt = Pt(18.0);
/// Offset of the reply form header values from the left margin
pub const REPLY_HEADER_LABEL_WIDTH: Pt = Pt(110.0);

const SIGNATURE_LINE: &str = "Signature: ________________________________";
const DATE_LINE: &str = "Date: ____________________";

/// Draw a centred bold title in the first heading size, followed by paragraph spacing
fn draw_title(pages: &mut PageManager, title: &str) {
    let size = pages.config().font_size_heading1;
    if pages.draw_paragraph(title, &TextStyle::bold(size), Align::Center, Pt(0.0)) > 0 {
        let spacing = pages.config().paragraph_spacing;
        pages.move_down(spacing);
    }
}

/// Lay out the information sheet annex on a new page
pub fn render_info_sheet(pages: &mut PageManager, sheet: &InfoSheetContent) {
    pages.add_new_page();
    log::debug!("information sheet starts on page {}", pages.page_index() + 1);

    draw_title(pages, &sheet.title);
    draw_warning_box(pages, &sheet.warning_text);

    if !sheet.help_organizations.is_empty() {
        draw_heading(pages, "Organisations that can help", 2);
        for organization in sheet.help_organizations.iter() {
            draw_organization(pages, organization);
        }
    }

    if !sheet.additional_info.is_empty() {
        draw_heading(pages, "Further information", 2);
        draw_bullet_list(pages, sheet.additional_info.as_slice());
    }
}

/// Draw the warning text in bold inside a tinted, bordered box. The box is at least
/// [WARNING_BOX_HEIGHT] tall and grows to fit the text. A warning too long to fit on
/// a single page is drawn as a plain bold paragraph instead.
fn draw_warning_box(pages: &mut PageManager, warning: &str) {
    let style = TextStyle::bold(pages.config().font_size_body);
    let spacing = pages.config().paragraph_spacing;
    let inner_width = pages.content_width() - WARNING_BOX_PADDING * 2.0;
    let lines = pages.wrap(warning, inner_width, &style);
    if lines.is_empty() {
        return;
    }

    let line_height = pages.line_height(&style);
    let text_height = line_height * lines.len() as f32;
    let box_height = WARNING_BOX_HEIGHT.max(text_height + WARNING_BOX_PADDING * 2.0);
    if box_height > pages.config().content_height() {
        log::warn!("warning text is too long for a single page, drawing it without a box");
        pages.draw_paragraph(warning, &style, Align::Left, Pt(0.0));
        pages.move_down(spacing);
        return;
    }

    let bounds = pages.draw_box(
        box_height,
        Some(colours::WARNING_FILL),
        Some((colours::WARNING_BORDER, Pt(1.0))),
    );
    let text_top = bounds.y2 - WARNING_BOX_PADDING;
    let text_x = bounds.x1 + WARNING_BOX_PADDING;
    for (i, line) in lines.iter().enumerate() {
        let baseline = pages.baseline_below(text_top - line_height * i as f32, &style);
        pages.place_span(line, text_x, baseline, &style);
    }
    pages.move_down(box_height + spacing);
}

fn draw_organization(pages: &mut PageManager, organization: &HelpOrganization) {
    let config = pages.config();
    let body = TextStyle::regular(config.font_size_body);
    let small = TextStyle::regular(config.font_size_small).with_colour(colours::DARK_GREY);
    let spacing = config.paragraph_spacing;

    pages.draw_paragraph(&organization.name, &TextStyle::bold(body.size), Align::Left, Pt(0.0));
    if let Some(phone) = organization.phone.as_deref().filter(|p| !p.trim().is_empty()) {
        pages.draw_paragraph(&format!("Tel: {}", phone.trim()), &body, Align::Left, Pt(0.0));
    }
    if let Some(website) = organization.website.as_deref().filter(|w| !w.trim().is_empty()) {
        pages.draw_paragraph(&format!("Web: {}", website.trim()), &body, Align::Left, Pt(0.0));
    }
    if let Some(description) = organization.description.as_deref() {
        pages.draw_paragraph(description, &small, Align::Left, Pt(0.0));
    }
    pages.move_down(spacing / 2.0);
}

/// Lay out the reply form annex on a new page
pub fn render_reply_form(pages: &mut PageManager, form: &ReplyFormContent) {
    pages.add_new_page();
    log::debug!("reply form starts on page {}", pages.page_index() + 1);

    draw_title(pages, &form.title);

    let fields = [
        ("Debtor name:", &form.debtor_name),
        ("Creditor name:", &form.creditor_name),
        ("Reference:", &form.reference),
        ("Date of letter:", &form.date_of_letter),
    ];
    let body = body_style(pages);
    let bold = TextStyle::bold(body.size);
    let line_height = pages.line_height(&body);
    let value_x = pages.left() + REPLY_HEADER_LABEL_WIDTH;
    for (label, value) in fields {
        let values = pages.wrap(value, pages.right() - value_x, &body);
        for i in 0..values.len().max(1) {
            let top = pages.reserve(line_height);
            let baseline = pages.baseline_below(top, &body);
            if i == 0 {
                let left = pages.left();
                pages.place_span(label, left, baseline, &bold);
            }
            if let Some(value) = values.get(i) {
                pages.place_span(value, value_x, baseline, &body);
            }
            pages.move_down(line_height);
        }
    }
    let spacing = pages.config().paragraph_spacing;
    pages.move_down(spacing);

    for section in form.sections.iter() {
        draw_reply_section(pages, section);
    }
}

fn draw_reply_section(pages: &mut PageManager, section: &ReplyFormSection) {
    let config = pages.config();
    let body = TextStyle::regular(config.font_size_body);
    let spacing = config.paragraph_spacing;

    pages.draw_paragraph(&section.title, &TextStyle::bold(body.size), Align::Left, Pt(0.0));
    if let Some(instructions) = section.instructions.as_deref() {
        pages.draw_paragraph(instructions, &TextStyle::italic(body.size), Align::Left, Pt(0.0));
    }
    pages.move_down(spacing / 2.0);

    for option in section.options.iter() {
        if option.has_checkbox {
            pages.draw_marked_item(Marker::Checkbox, &option.label, &body, Pt(0.0), CHECKBOX_INDENT);
        } else {
            pages.draw_paragraph(&option.label, &body, Align::Left, Pt(0.0));
        }
        for sub_option in option.sub_options.iter() {
            pages.draw_marked_item(
                Marker::Checkbox,
                sub_option,
                &body,
                CHECKBOX_INDENT,
                CHECKBOX_INDENT,
            );
        }
    }

    if section.has_signature_line {
        pages.move_down(spacing);
        pages.draw_line(SIGNATURE_LINE, &body, Align::Left);
    }
    if section.has_date_line {
        pages.move_down(spacing / 2.0);
        pages.draw_line(DATE_LINE, &body, Align::Left);
    }
    pages.move_down(spacing);
}
