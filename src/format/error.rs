//! Format engine errors

use super::value::ValueClass;

/// What went wrong while parsing or rendering a template
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatErrorKind {
    #[error("no closing curly brace for placeholder opened at byte {position}")]
    UnclosedPlaceholder { position: usize },

    #[error("no position marker provided in placeholder '{{{raw}}}'")]
    MissingIndex { raw: String },

    #[error("invalid position marker '{index}'")]
    InvalidIndex { index: String },

    #[error("format type '{ty}' is not allowed for {class} values")]
    IncompatibleType { ty: char, class: ValueClass },

    #[error("precision is not allowed for integral values")]
    PrecisionNotAllowed,

    #[error("precision not specified after '.'")]
    MissingPrecision,

    #[error("number '{digits}' in format specifier is too large")]
    NumberTooLarge { digits: String },

    #[error("unexpected trailing characters in format specifier '{spec}'")]
    TrailingCharacters { spec: String },
}

/// Error raised for a malformed template or a mismatched argument
///
/// Always carries the template text so the failing call site can be found
/// from the message alone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("error while formatting '{template}': {kind}")]
pub struct FormatError {
    pub template: String,
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub fn new(template: impl Into<String>, kind: FormatErrorKind) -> Self {
        Self {
            template: template.into(),
            kind,
        }
    }

    pub fn kind(&self) -> &FormatErrorKind {
        &self.kind
    }
}
