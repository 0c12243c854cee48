use thiserror::Error;

use crate::image::ImageError;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LetterError {
    #[error(transparent)]
    /// An I/O error occurred while writing the document
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse a supplied font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// An image could not be decoded or encoded
    Image(#[from] ImageError),

    #[error("invalid layout configuration: {0}")]
    /// The [crate::LayoutConfig] describes a page with no room for content
    InvalidConfig(String),

    #[error("`{flag}` is set but no `{payload}` was supplied")]
    /// An annex was requested without the content to render it
    MissingAnnex {
        flag: &'static str,
        payload: &'static str,
    },

    #[error("page is missing from the document")]
    /// The page order refers to a page that is not in the document
    PageMissing,
}
