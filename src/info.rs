use crate::model::LetterContent;
use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

const PRODUCER: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Document metadata written to the PDF info dictionary. Fields left as [None] are
/// omitted, except the creator which falls back to this crate's name and version.
#[derive(Default, Debug, Clone)]
pub struct Info {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Adobe Acrobat suggests a comma separated list
    pub keywords: Option<String>,
    pub creator: Option<String>,
}

impl Info {
    pub fn new() -> Info {
        Info::default()
    }

    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Fill the title from the letter's reference and the author from the sender's
    /// name, where they aren't already set and the letter has them
    pub fn with_letter_defaults(mut self, content: &LetterContent) -> Info {
        let reference = content.reference.trim();
        if self.title.is_none() && !reference.is_empty() {
            self.title = Some(reference.to_string());
        }
        let sender = content.sender.name.trim();
        if self.author.is_none() && !sender.is_empty() {
            self.author = Some(sender.to_string());
        }
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        let text_fields = [
            (&self.title, "Title"),
            (&self.author, "Author"),
            (&self.subject, "Subject"),
            (&self.keywords, "Keywords"),
        ];
        for (value, key) in text_fields {
            if let Some(value) = value {
                info.pair(pdf_writer::Name(key.as_bytes()), TextStr(value.as_str()));
            }
        }
        info.creator(TextStr(self.creator.as_deref().unwrap_or(PRODUCER)));
        info.producer(TextStr(PRODUCER));
        info.creation_date(creation_date(Local::now().fixed_offset()));
    }
}

/// Convert a timestamp to a PDF date, keeping its UTC offset
fn creation_date(now: DateTime<FixedOffset>) -> PDate {
    let offset = now.offset().local_minus_utc();
    let offset_hours = offset / (60 * 60);
    let offset_minutes = ((offset - offset_hours * 60 * 60) / 60).abs();
    PDate::new(now.year() as u16)
        .month(now.month() as u8)
        .day(now.day() as u8)
        .hour(now.hour() as u8)
        .minute(now.minute() as u8)
        .second(now.second() as u8)
        .utc_offset_hour(offset_hours as i8)
        .utc_offset_minute(offset_minutes as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Address;

    fn written(info: &Info) -> String {
        let mut writer = Pdf::new();
        info.write(&mut ObjectReferences::new(), &mut writer);
        String::from_utf8_lossy(&writer.finish()).to_string()
    }

    #[test]
    fn letter_defaults_fill_only_missing_fields() {
        let content = LetterContent {
            sender: Address::new("Acme Recoveries Ltd"),
            reference: " Our ref: ACME/1041 ".into(),
            ..Default::default()
        };
        let info = Info::new().with_letter_defaults(&content);
        assert_eq!(info.title.as_deref(), Some("Our ref: ACME/1041"));
        assert_eq!(info.author.as_deref(), Some("Acme Recoveries Ltd"));

        let mut preset = Info::new();
        preset.title("Letter before claim");
        let info = preset.with_letter_defaults(&content);
        assert_eq!(info.title.as_deref(), Some("Letter before claim"));
    }

    #[test]
    fn writes_set_fields_and_the_default_creator() {
        let mut info = Info::new();
        info.title("Letter before claim").subject("Debt recovery");
        let pdf = written(&info);
        assert!(pdf.contains("/Title (Letter before claim)"));
        assert!(pdf.contains("/Subject (Debt recovery)"));
        assert!(!pdf.contains("/Author"));
        assert!(pdf.contains(&format!("/Creator ({PRODUCER})")));
        assert!(pdf.contains("/CreationDate"));
    }

    #[test]
    fn creation_dates_keep_negative_offsets() {
        let now = DateTime::parse_from_rfc3339("2024-03-01T09:30:15-03:30").expect("valid date");
        let mut writer = Pdf::new();
        writer.document_info(pdf_writer::Ref::new(1)).creation_date(creation_date(now));
        let pdf = String::from_utf8_lossy(&writer.finish()).to_string();
        assert!(pdf.contains("D:20240301093015-03'30"));
    }
}
