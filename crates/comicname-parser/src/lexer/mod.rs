//! Scanner for comic archive file names.
//!
//! The scanner walks the base name one character at a time, with a single
//! character of lookahead and a one-character backup, and moves between a
//! small set of states. Every token borrows its text from the input, so the
//! concatenated token texts of a successful scan reproduce the name exactly.
//! Number bodies (digits, decimal part, ordinal suffix) are recognised with
//! winnow combinators.

mod keywords;
mod token;

pub use keywords::{is_calendar_word, keyword};
pub use token::{Token, TokenKind};

use winnow::ascii::Caseless;
use winnow::combinator::{alt, not, opt};
use winnow::prelude::*;
use winnow::token::{literal, one_of, take_while};

use unicode_general_category::{get_general_category, GeneralCategory};

/// Scan a file name into tokens.
///
/// The result always ends with either [`TokenKind::EndOfInput`] or a single
/// [`TokenKind::Error`] token; nothing is produced after an error.
///
/// ```
/// use comicname_parser::lexer::{tokenize, TokenKind};
///
/// let tokens = tokenize("Batman #3.cbz");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Text,
///         TokenKind::Space,
///         TokenKind::IssueNumber,
///         TokenKind::Dot,
///         TokenKind::ArchiveType,
///         TokenKind::EndOfInput,
///     ]
/// );
/// ```
pub fn tokenize(name: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(name);
    lexer.run();
    lexer.tokens
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Filename,
    Space,
    Operator,
    Number,
    Text,
    Done,
}

struct Lexer<'src> {
    input: &'src str,
    /// Start of the pending token.
    start: usize,
    /// Byte offset of the next character.
    pos: usize,
    /// Width of the last character read, for `backup`.
    width: usize,
    paren_depth: usize,
    brace_depth: usize,
    bracket_depth: usize,
    tokens: Vec<Token<'src>>,
}

impl<'src> Lexer<'src> {
    fn new(input: &'src str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            width: 0,
            paren_depth: 0,
            brace_depth: 0,
            bracket_depth: 0,
            tokens: Vec::new(),
        }
    }

    fn run(&mut self) {
        let mut state = LexState::Filename;
        while state != LexState::Done {
            state = match state {
                LexState::Filename => self.lex_filename(),
                LexState::Space => self.lex_space(),
                LexState::Operator => self.lex_operator(),
                LexState::Number => self.lex_number(),
                LexState::Text => self.lex_text(),
                LexState::Done => LexState::Done,
            };
        }
    }

    fn next(&mut self) -> Option<char> {
        let c = self.input[self.pos..].chars().next();
        self.width = c.map_or(0, char::len_utf8);
        self.pos += self.width;
        c
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.input[self.pos..].chars().nth(1)
    }

    /// Step back over the last character read. Only one step is remembered.
    fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    fn emit(&mut self, kind: TokenKind) {
        let input = self.input;
        self.tokens
            .push(Token::new(kind, self.start, &input[self.start..self.pos]));
        self.start = self.pos;
    }

    fn error(&mut self, message: impl Into<String>) -> LexState {
        self.tokens
            .push(Token::new(TokenKind::Error, self.start, message.into()));
        LexState::Done
    }

    fn finish(&mut self) -> LexState {
        if self.paren_depth > 0 {
            return self.error("unclosed left paren");
        }
        if self.brace_depth > 0 {
            return self.error("unclosed left brace");
        }
        if self.bracket_depth > 0 {
            return self.error("unclosed left bracket");
        }
        self.emit(TokenKind::EndOfInput);
        LexState::Done
    }

    fn lex_filename(&mut self) -> LexState {
        let Some(c) = self.next() else {
            return self.finish();
        };

        match c {
            '_' if self.peek() == Some('_') => {
                self.next();
                self.emit(TokenKind::Skip);
            }
            c if is_space(c) => return LexState::Space,
            '.' => {
                let after_space = self.input[..self.start]
                    .chars()
                    .next_back()
                    .is_some_and(is_space);
                if after_space && self.peek().is_some_and(char::is_numeric) {
                    return LexState::Number;
                }
                self.emit(TokenKind::Dot);
            }
            '\'' => {
                if self.peek().is_some_and(char::is_numeric) {
                    return LexState::Number;
                }
                self.emit(TokenKind::Text);
            }
            '#' => {
                if self.peek().is_some_and(char::is_numeric) {
                    return LexState::Number;
                }
                self.emit(TokenKind::Symbol);
            }
            '-' if self.peek() == Some('-') => {
                self.next();
                self.emit(TokenKind::Skip);
            }
            c if is_operator(c) => return LexState::Operator,
            c if c.is_alphanumeric() => {
                self.backup();
                return if c.is_numeric() {
                    LexState::Number
                } else {
                    LexState::Text
                };
            }
            '(' => {
                self.paren_depth += 1;
                self.emit(TokenKind::LeftParen);
            }
            ')' => {
                if self.paren_depth == 0 {
                    return self.error("unexpected right paren");
                }
                self.paren_depth -= 1;
                self.emit(TokenKind::RightParen);
            }
            '{' => {
                self.brace_depth += 1;
                self.emit(TokenKind::LeftBrace);
            }
            '}' => {
                if self.brace_depth == 0 {
                    return self.error("unexpected right brace");
                }
                self.brace_depth -= 1;
                self.emit(TokenKind::RightBrace);
            }
            '[' => {
                self.bracket_depth += 1;
                self.emit(TokenKind::LeftBracket);
            }
            ']' => {
                if self.bracket_depth == 0 {
                    return self.error("unexpected right bracket");
                }
                self.bracket_depth -= 1;
                self.emit(TokenKind::RightBracket);
            }
            c if is_symbol(c) => {
                while self.peek().is_some_and(is_symbol) {
                    self.next();
                }
                self.emit(TokenKind::Symbol);
            }
            c => return self.error(format!("unrecognized character: {c:?}")),
        }

        LexState::Filename
    }

    /// One space character has already been read. A `__` pair ends the run.
    fn lex_space(&mut self) -> LexState {
        loop {
            match self.peek() {
                Some('_') if self.peek_second() == Some('_') => break,
                Some(c) if is_space(c) => {
                    self.next();
                }
                _ => break,
            }
        }
        self.emit(TokenKind::Space);
        LexState::Filename
    }

    fn lex_operator(&mut self) -> LexState {
        while let Some(c) = self.peek() {
            if !is_operator(c) || (c == '-' && self.peek_second() == Some('-')) {
                break;
            }
            self.next();
        }
        self.emit(TokenKind::Operator);
        LexState::Filename
    }

    /// Any `#`, `'` or `.` lead has already been read; digits come next.
    fn lex_number(&mut self) -> LexState {
        let input = self.input;
        let lead = input[self.start..].chars().next();
        let allow_fraction = lead != Some('.') && !input[..self.start].ends_with('.');

        let Some(body) = number_body(&input[self.pos..], allow_fraction) else {
            return self.error(format!(
                "bad number syntax: {}",
                &input[self.start..self.pos]
            ));
        };

        if self.start == self.pos {
            // bare digits may spell a keyword, e.g. `7z`
            let rest = &input[self.pos..];
            let run = rest
                .find(|c: char| !c.is_alphanumeric())
                .unwrap_or(rest.len());
            if run > body.numeric {
                if let Some(kind) = keyword(&rest[..run]) {
                    self.pos += run;
                    self.emit(kind);
                    return LexState::Filename;
                }
            }
        }

        self.pos += body.total;
        let text = &input[self.start..self.pos];
        let kind = if text.starts_with('#') {
            TokenKind::IssueNumber
        } else if text.ends_with(char::is_numeric) {
            TokenKind::Number
        } else {
            // 80th, 1960s
            TokenKind::Text
        };
        self.emit(kind);
        LexState::Filename
    }

    fn lex_text(&mut self) -> LexState {
        loop {
            match self.next() {
                Some(c) if c.is_alphanumeric() => {
                    if c.is_numeric() {
                        let word = &self.input[self.start..self.pos - c.len_utf8()];
                        if keyword(word) == Some(TokenKind::InfoSpecifier) {
                            self.backup();
                            self.emit(TokenKind::InfoSpecifier);
                            return LexState::Filename;
                        }
                    }
                }
                Some('\'') if matches!(self.peek(), Some('s' | 'S')) => {
                    self.next();
                    break;
                }
                Some(_) => {
                    self.backup();
                    break;
                }
                None => break,
            }
        }

        let word = &self.input[self.start..self.pos];
        match keyword(word) {
            Some(TokenKind::InfoSpecifier)
                if word.eq_ignore_ascii_case("vol") && self.peek() == Some('.') =>
            {
                self.next();
                self.emit(TokenKind::InfoSpecifier);
            }
            Some(kind) => self.emit(kind),
            None if is_calendar_word(word) => self.emit(TokenKind::CalendarWord),
            None => self.emit(TokenKind::Text),
        }
        LexState::Filename
    }
}

/// Byte lengths of a scanned number.
struct NumberBody {
    /// Digits plus any decimal part.
    numeric: usize,
    /// `numeric` plus any ordinal suffix.
    total: usize,
}

fn number_body(input: &str, allow_fraction: bool) -> Option<NumberBody> {
    let mut rest = input;
    integer_part.parse_next(&mut rest).ok()?;
    if allow_fraction {
        opt(fraction).parse_next(&mut rest).ok()?;
    }
    let numeric = input.len() - rest.len();
    opt(ordinal_suffix).parse_next(&mut rest).ok()?;
    Some(NumberBody {
        numeric,
        total: input.len() - rest.len(),
    })
}

fn integer_part(input: &mut &str) -> PResult<()> {
    take_while(1.., char::is_numeric).void().parse_next(input)
}

/// `.5` but not the first half of a dotted date like `08.04`.
fn fraction(input: &mut &str) -> PResult<()> {
    (
        '.',
        take_while(1.., |c: char| c.is_ascii_digit()),
        not(('.', one_of(|c: char| c.is_ascii_digit()))),
    )
        .void()
        .parse_next(input)
}

fn ordinal_suffix(input: &mut &str) -> PResult<()> {
    (
        alt((
            literal(Caseless("st")),
            literal(Caseless("nd")),
            literal(Caseless("rd")),
            literal(Caseless("th")),
            literal(Caseless("s")),
        )),
        not(one_of(char::is_alphanumeric)),
    )
        .void()
        .parse_next(input)
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '_')
}

fn is_operator(c: char) -> bool {
    matches!(c, '-' | '|' | ':' | ';' | '/' | '\\')
}

/// Punctuation and symbol characters that carry no structure of their own.
fn is_symbol(c: char) -> bool {
    let category = matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
            | GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    );
    category
        && !is_operator(c)
        && !matches!(c, '.' | '_' | '#' | '\'' | '(' | ')' | '[' | ']' | '{' | '}')
}
