/// Error returned when a file name cannot be parsed.
///
/// Only the scanner can fail; once a name has been tokenized the parser
/// always produces a [`FilenameInfo`](super::FilenameInfo).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The scanner stopped on a character or bracket it could not accept.
    #[error("parse failed: {message}")]
    Lex {
        message: String,
        /// Byte offset of the offending input.
        position: usize,
    },
}

impl ParseError {
    pub fn lex<S: Into<String>>(message: S, position: usize) -> Self {
        Self::Lex {
            message: message.into(),
            position,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Self::Lex { position, .. } => *position,
        }
    }
}
