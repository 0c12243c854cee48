use letter_gen::*;

fn main() {
    let content = LetterContent {
        sender: Address::new("Acme Recoveries Ltd")
            .line("10 Dock Road")
            .line("Portsmouth")
            .line("PO1 1AA"),
        recipient: Address::new("Jane Smith")
            .line("1 High Street")
            .line("Anytown")
            .line("AB1 2CD"),
        date: "1 March 2024".into(),
        reference: "Our ref: ACME/1041".into(),
        salutation: "Dear Ms Smith,".into(),
        paragraphs: vec![
            Paragraph::heading("Letter before claim", 1),
            Paragraph::plain(lipsum::lipsum_words(120)),
            Paragraph::heading("The debt", 2),
            Paragraph::bullets(&[
                "Invoice 1041 dated 1 December 2023",
                "Invoice 1042 dated 1 January 2024",
            ]),
            Paragraph::bold("Unless payment is received within 30 days we may start court proceedings."),
        ],
        table: Some(
            Table::default()
                .row("Principal sum", "£1,234.56")
                .row("Statutory interest", "£81.64")
                .row("Status", "Overdue"),
        ),
        closing: "Yours sincerely,".into(),
        signer_name: "A. Solicitor".into(),
        signer_title: Some("Solicitor, Acme Recoveries Ltd".into()),
        enclosures: vec!["invoice-1041.pdf".into(), "invoice-1042.pdf".into()],
        include_info_sheet: true,
        info_sheet: Some(InfoSheetContent {
            title: "Information Sheet".into(),
            warning_text: "You should read this letter and seek advice as soon as possible."
                .into(),
            help_organizations: vec![HelpOrganization {
                name: "Citizens Advice".into(),
                phone: Some("0800 144 8848".into()),
                website: Some("www.citizensadvice.org.uk".into()),
                description: Some("Free, independent and confidential advice.".into()),
            }],
            additional_info: vec!["Keep a copy of this letter and any reply.".into()],
        }),
        include_reply_form: true,
        reply_form: Some(ReplyFormContent {
            title: "Reply Form".into(),
            debtor_name: "Jane Smith".into(),
            creditor_name: "Acme Recoveries Ltd".into(),
            reference: "ACME/1041".into(),
            date_of_letter: "1 March 2024".into(),
            sections: vec![ReplyFormSection {
                title: "Section 1".into(),
                instructions: Some("Tick one box.".into()),
                options: vec![
                    ReplyOption::checkbox("I owe the full amount"),
                    ReplyOption {
                        label: "I dispute the debt because:".into(),
                        has_checkbox: true,
                        sub_options: vec!["I have already paid".into(), "Other".into()],
                    },
                ],
                has_signature_line: true,
                has_date_line: true,
            }],
        }),
        ..Default::default()
    };

    let mut renderer = LetterRenderer::default();
    renderer.info(
        Info::new()
            .title("Letter before claim")
            .author("Acme Recoveries Ltd")
            .subject("ACME/1041")
            .clone(),
    );

    let pdf = renderer.render(&content).expect("can render letter");
    std::fs::write("letter.pdf", pdf).expect("can write letter.pdf");
}
