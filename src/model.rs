//! The structured content of a letter and its optional annexes.
//!
//! Everything here is plain data supplied by the caller. All types deserialise
//! from JSON with camelCase field names, and optional fields may be omitted.

use serde::{Deserialize, Serialize};

/// A postal address block
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub name: String,
    /// For the attention of a particular person at the address
    pub contact_name: Option<String>,
    pub lines: Vec<String>,
}

impl Address {
    pub fn new<S: ToString>(name: S) -> Address {
        Address {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn contact<S: ToString>(mut self, contact_name: S) -> Address {
        self.contact_name = Some(contact_name.to_string());
        self
    }

    pub fn line<S: ToString>(mut self, line: S) -> Address {
        self.lines.push(line.to_string());
        self
    }
}

/// One block of the letter body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Paragraph {
    Plain {
        text: String,
        #[serde(default)]
        bold: bool,
    },
    Heading {
        text: String,
        #[serde(default = "default_heading_level")]
        level: u8,
    },
    BulletList {
        items: Vec<String>,
    },
}

fn default_heading_level() -> u8 {
    1
}

impl Paragraph {
    pub fn plain<S: ToString>(text: S) -> Paragraph {
        Paragraph::Plain {
            text: text.to_string(),
            bold: false,
        }
    }

    pub fn bold<S: ToString>(text: S) -> Paragraph {
        Paragraph::Plain {
            text: text.to_string(),
            bold: true,
        }
    }

    pub fn heading<S: ToString>(text: S, level: u8) -> Paragraph {
        Paragraph::Heading {
            text: text.to_string(),
            level,
        }
    }

    pub fn bullets<S: ToString>(items: &[S]) -> Paragraph {
        Paragraph::BulletList {
            items: items.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub label: String,
    pub value: String,
}

/// A two column label / value table, such as a breakdown of the sum claimed
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn row<L: ToString, V: ToString>(mut self, label: L, value: V) -> Table {
        self.rows.push(TableRow {
            label: label.to_string(),
            value: value.to_string(),
        });
        self
    }
}

/// An organisation the recipient can contact for free advice
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HelpOrganization {
    pub name: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
}

/// The information sheet annex sent alongside a letter before claim
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InfoSheetContent {
    pub title: String,
    pub warning_text: String,
    pub help_organizations: Vec<HelpOrganization>,
    pub additional_info: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplyOption {
    pub label: String,
    pub has_checkbox: bool,
    /// Indented checkbox choices under this option
    pub sub_options: Vec<String>,
}

impl ReplyOption {
    pub fn checkbox<S: ToString>(label: S) -> ReplyOption {
        ReplyOption {
            label: label.to_string(),
            has_checkbox: true,
            sub_options: Vec::new(),
        }
    }

    pub fn text<S: ToString>(label: S) -> ReplyOption {
        ReplyOption {
            label: label.to_string(),
            has_checkbox: false,
            sub_options: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplyFormSection {
    pub title: String,
    pub instructions: Option<String>,
    pub options: Vec<ReplyOption>,
    pub has_signature_line: bool,
    pub has_date_line: bool,
}

/// The reply form annex the recipient fills in and returns
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplyFormContent {
    pub title: String,
    pub debtor_name: String,
    pub creditor_name: String,
    pub reference: String,
    pub date_of_letter: String,
    pub sections: Vec<ReplyFormSection>,
}

/// Everything needed to lay out a letter
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LetterContent {
    pub sender: Address,
    pub recipient: Address,
    pub date: String,
    pub reference: String,
    pub salutation: String,
    pub paragraphs: Vec<Paragraph>,
    pub table: Option<Table>,
    pub closing: String,
    pub signer_name: String,
    pub signer_title: Option<String>,
    /// A PNG or JPEG signature, as plain base64 or a `data:` URL
    pub signature_image: Option<String>,
    /// File names of documents enclosed with the letter
    pub enclosures: Vec<String>,
    pub include_info_sheet: bool,
    pub info_sheet: Option<InfoSheetContent>,
    pub include_reply_form: bool,
    pub reply_form: Option<ReplyFormContent>,
}
