mod common;

use common::*;
use letter_gen::*;

fn total_words(document: &Document) -> usize {
    document
        .iter_pages()
        .flat_map(|page| page.spans())
        .map(|span| span.text.split_whitespace().count())
        .sum()
}

#[test]
fn a_short_letter_fits_on_one_page() {
    let document = LetterRenderer::default()
        .layout(&short_letter())
        .expect("can lay out");
    assert_eq!(document.page_count(), 1);

    let page = document.page(0).expect("page");
    assert!(page.find_span("Jane Smith").is_some());
    assert!(page.find_span("Our ref: ACME/1041").is_some());
    assert!(page.find_span("A. Solicitor").is_some());
}

#[test]
fn long_paragraphs_flow_across_pages_within_the_content_box() {
    let text = lipsum::lipsum_words(2000);
    let mut content = short_letter();
    content.paragraphs = vec![Paragraph::plain(&text)];

    let config = LayoutConfig::default();
    let document = LetterRenderer::new(config.clone())
        .layout(&content)
        .expect("can lay out");
    assert!(document.page_count() >= 2);

    let right_edge = config.page_width - config.margin_right;
    for page in document.iter_pages() {
        for span in page.spans() {
            let width = document.fonts[span.font.id].width_of_text(&span.text, span.font.size);
            let overhangs = span.coords.0 + width > right_edge + Pt(0.01);
            assert!(
                !overhangs || !span.text.contains(' '),
                "{:?} runs past the right margin",
                span.text
            );
        }
    }

    // every word of the paragraph made it onto a page
    assert!(total_words(&document) >= 2000);
}

#[test]
fn nothing_is_drawn_below_the_bottom_margin() {
    let mut content = short_letter();
    content.paragraphs = (0..30)
        .map(|i| match i % 3 {
            0 => Paragraph::heading(format!("Heading {i}"), 1 + (i % 2) as u8),
            1 => Paragraph::bullets(&[lipsum::lipsum_words(30), lipsum::lipsum_words(12)]),
            _ => Paragraph::plain(lipsum::lipsum_words(80)),
        })
        .collect();
    content.enclosures = vec!["statement.pdf".into(), "invoice.pdf".into()];
    content.include_info_sheet = true;
    content.info_sheet = Some(info_sheet());
    content.include_reply_form = true;
    content.reply_form = Some(reply_form());

    let config = LayoutConfig::default();
    let document = LetterRenderer::new(config.clone())
        .layout(&content)
        .expect("can lay out");
    assert!(document.page_count() > 3);

    for lowest in lowest_points(&document) {
        assert!(lowest >= config.margin_bottom - Pt(0.01), "drawn at {lowest}");
    }
}

#[test]
fn every_page_is_numbered_once() {
    let mut content = short_letter();
    content.paragraphs = vec![Paragraph::plain(lipsum::lipsum_words(1500))];
    let document = LetterRenderer::default().layout(&content).expect("can lay out");
    let total = document.page_count();
    assert!(total > 1);

    for (i, page) in document.iter_pages().enumerate() {
        let footer = page.footer.as_ref().expect("page has a footer");
        assert_eq!(footer.text, format!("Page {} of {}", i + 1, total));
        assert_eq!(footer.coords.1, Pt(72.0 - 30.0));
        // footers are kept apart from the page contents
        assert!(page.find_span(&footer.text).is_none());
    }
}

#[test]
fn footers_never_fall_off_the_page() {
    let mut config = LayoutConfig::default();
    config.margins(layout::Margins::all(Pt(20.0)));
    let document = LetterRenderer::new(config)
        .layout(&short_letter())
        .expect("can lay out");
    let footer = document.page(0).and_then(|page| page.footer.as_ref()).expect("footer");
    assert_eq!(footer.coords.1, Pt(9.0));
}

#[test]
fn annexes_start_on_fresh_pages() {
    let mut content = short_letter();
    content.include_info_sheet = true;
    content.info_sheet = Some(info_sheet());
    content.include_reply_form = true;
    content.reply_form = Some(reply_form());

    let document = LetterRenderer::default().layout(&content).expect("can lay out");
    assert_eq!(document.page_count(), 3);

    let info_page = document.page(1).expect("info sheet page");
    let title = info_page.spans().next().expect("content");
    assert_eq!(title.text, "Information Sheet");

    let reply_page = document.page(2).expect("reply form page");
    assert_eq!(reply_page.spans().next().expect("content").text, "Reply Form");
    assert!(reply_page.find_span("Information Sheet").is_none());

    let bookmarks: Vec<(&str, usize)> = document
        .outline
        .entries
        .iter()
        .map(|entry| (entry.title.as_str(), entry.page_index))
        .collect();
    assert_eq!(
        bookmarks,
        vec![("Letter", 0), ("Information Sheet", 1), ("Reply Form", 2)]
    );
}

#[test]
fn annex_flags_without_content_are_rejected() {
    let mut content = short_letter();
    content.include_reply_form = true;
    let err = LetterRenderer::default()
        .layout(&content)
        .err()
        .expect("missing reply form is an error");
    assert!(matches!(
        err,
        LetterError::MissingAnnex {
            payload: "replyForm",
            ..
        }
    ));
}

#[test]
fn annex_content_without_its_flag_is_ignored() {
    let mut content = short_letter();
    content.info_sheet = Some(info_sheet());
    let document = LetterRenderer::default().layout(&content).expect("can lay out");
    assert_eq!(document.page_count(), 1);
}

#[test]
fn invalid_configurations_are_rejected() {
    let mut config = LayoutConfig::default();
    config.margins(layout::Margins::symmetric(Pt(72.0), Pt(400.0)));
    let result = LetterRenderer::new(config).layout(&short_letter());
    assert!(matches!(result, Err(LetterError::InvalidConfig(_))));
}

#[test]
fn empty_bodies_and_empty_lists_take_no_space() {
    let mut without_body = short_letter();
    without_body.paragraphs = Vec::new();
    let mut empty_list = short_letter();
    empty_list.paragraphs = vec![Paragraph::BulletList { items: Vec::new() }];

    let renderer = LetterRenderer::default();
    let plain = renderer.layout(&without_body).expect("a letter with no body lays out");
    let listed = renderer.layout(&empty_list).expect("an empty list lays out");

    for document in [&plain, &listed] {
        assert_eq!(document.page_count(), 1);
        let page = document.page(0).expect("page");
        assert!(page.find_span("•").is_none());
        assert!(page.find_span("£1,234.56").is_some());
    }

    let signer = |document: &Document| {
        document
            .page(0)
            .and_then(|page| page.find_span("A. Solicitor"))
            .expect("signer drawn")
            .coords
    };
    assert_eq!(signer(&plain), signer(&listed));
}
