#![allow(dead_code)]

use letter_gen::*;

pub fn recipient() -> Address {
    Address::new("Jane Smith")
        .line("1 High Street")
        .line("Anytown")
        .line("AB1 2CD")
}

/// A short letter: three line recipient, a forty word paragraph and a two row table
pub fn short_letter() -> LetterContent {
    LetterContent {
        sender: Address::new("Acme Recoveries Ltd")
            .line("10 Dock Road")
            .line("Portsmouth PO1 1AA"),
        recipient: recipient(),
        date: "1 March 2024".into(),
        reference: "Our ref: ACME/1041".into(),
        salutation: "Dear Ms Smith,".into(),
        paragraphs: vec![Paragraph::plain(
            "We write on behalf of our client regarding the outstanding balance on your \
             account. Despite previous reminders the sum below remains unpaid. Please \
             arrange payment within fourteen days of the date of this letter to avoid \
             further action being taken against you.",
        )],
        table: Some(
            Table::default()
                .row("Amount outstanding", "£1,234.56")
                .row("Status", "Draft"),
        ),
        closing: "Yours sincerely,".into(),
        signer_name: "A. Solicitor".into(),
        signer_title: Some("Solicitor".into()),
        ..Default::default()
    }
}

pub fn info_sheet() -> InfoSheetContent {
    InfoSheetContent {
        title: "Information Sheet".into(),
        warning_text: "If you do not reply, court proceedings may be started against you."
            .into(),
        help_organizations: vec![HelpOrganization {
            name: "National Debtline".into(),
            phone: Some("0808 808 4000".into()),
            website: Some("www.nationaldebtline.org".into()),
            description: None,
        }],
        additional_info: vec!["You can get free independent advice.".into()],
    }
}

pub fn reply_form() -> ReplyFormContent {
    ReplyFormContent {
        title: "Reply Form".into(),
        debtor_name: "Jane Smith".into(),
        creditor_name: "Acme Recoveries Ltd".into(),
        reference: "ACME/1041".into(),
        date_of_letter: "1 March 2024".into(),
        sections: vec![ReplyFormSection {
            title: "Section 1: The debt".into(),
            instructions: Some("Tick the box that applies.".into()),
            options: vec![
                ReplyOption::checkbox("I agree I owe the debt"),
                ReplyOption::checkbox("I dispute the debt"),
            ],
            has_signature_line: true,
            has_date_line: true,
        }],
    }
}

/// The lowest point of anything drawn on each page, excluding footers
pub fn lowest_points(document: &Document) -> Vec<Pt> {
    document
        .iter_pages()
        .flat_map(|page| page.contents.iter().filter_map(PageContents::lowest_y))
        .collect()
}
