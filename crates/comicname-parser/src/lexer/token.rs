//! Token types produced by the file-name scanner.

use std::borrow::Cow;
use std::fmt;

/// Classification of a scanned token.
///
/// The set is closed: every character of a file name ends up in exactly one
/// of these, except after an [`TokenKind::Error`], which stops the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Lexing failed; the token text is the error message.
    Error,
    /// End of input. Always the last token of a successful scan.
    EndOfInput,
    /// A plain word.
    Text,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    /// A bare number, optionally with a decimal part or `'` prefix (`'89`).
    Number,
    /// A number preceded by `#`.
    IssueNumber,
    /// A run of spaces, tabs or single underscores.
    Space,
    Dot,
    /// Punctuation or symbol characters with no structural meaning.
    Symbol,
    /// A run of `-|:;/\`.
    Operator,
    /// A literal `--` or `__` hard separator.
    Skip,
    /// A month or weekday name.
    CalendarWord,
    /// `volume`, `vol`, `v`, `of`, `covers`.
    InfoSpecifier,
    /// Archive extension such as `cbz`.
    ArchiveType,
    /// `mr`, `ms`, `mrs`, `dr`.
    Honorific,
    /// `annual`, `book`, `tpb`.
    ComicType,
    Publisher,
    /// Free Comic Book Day marker.
    Fcbd,
    /// Cover-to-cover scan marker.
    C2c,
}

impl TokenKind {
    pub fn is_left_bracket(self) -> bool {
        matches!(self, Self::LeftParen | Self::LeftBrace | Self::LeftBracket)
    }

    pub fn is_right_bracket(self) -> bool {
        matches!(self, Self::RightParen | Self::RightBrace | Self::RightBracket)
    }

    /// Numbers with or without a `#` prefix.
    pub fn is_number(self) -> bool {
        matches!(self, Self::Number | Self::IssueNumber)
    }

    /// Short human-readable name, used by the `tokens` command.
    pub fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::EndOfInput => "eof",
            Self::Text => "text",
            Self::LeftParen => "left-paren",
            Self::RightParen => "right-paren",
            Self::LeftBrace => "left-brace",
            Self::RightBrace => "right-brace",
            Self::LeftBracket => "left-bracket",
            Self::RightBracket => "right-bracket",
            Self::Number => "number",
            Self::IssueNumber => "issue-number",
            Self::Space => "space",
            Self::Dot => "dot",
            Self::Symbol => "symbol",
            Self::Operator => "operator",
            Self::Skip => "skip",
            Self::CalendarWord => "calendar",
            Self::InfoSpecifier => "info-specifier",
            Self::ArchiveType => "archive-type",
            Self::Honorific => "honorific",
            Self::ComicType => "comic-type",
            Self::Publisher => "publisher",
            Self::Fcbd => "fcbd",
            Self::C2c => "c2c",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A classified, positioned slice of the input.
///
/// `text` borrows from the scanned name for every kind except
/// [`TokenKind::Error`], whose text is the owned error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Byte offset of the token in the scanned name.
    pub pos: usize,
    pub text: Cow<'src, str>,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, pos: usize, text: impl Into<Cow<'src, str>>) -> Self {
        Self {
            kind,
            pos,
            text: text.into(),
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Byte offset one past the end of the token.
    pub fn end(&self) -> usize {
        self.pos + self.text.len()
    }

    /// Case-insensitive comparison of the token text.
    pub fn text_eq(&self, word: &str) -> bool {
        self.text.eq_ignore_ascii_case(word)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4}  {:<14} {:?}", self.pos, self.kind.name(), self.text)
    }
}
