//! State-machine parser over the token stream.
//!
//! A parse run owns a single [`ParserContext`]: a cursor over the tokens plus
//! the working collections (series and title runs, year candidates and the
//! used/irrelevant index sets). Each state inspects the cursor, updates the
//! context, and returns the next [`ParserState`]. Tokens are identified by
//! their index in the input slice throughout.

mod dispatch;
mod info;
mod number;
mod resolve;
mod series;

use std::collections::{HashMap, HashSet};

use crate::config::ParserConfig;
use crate::lexer::{Token, TokenKind};
use crate::model::FilenameInfo;

/// Parse an already tokenized file name.
///
/// Never fails: ambiguous input degrades to empty fields and ends up in
/// [`FilenameInfo::remainder`]. A stream containing an
/// [`TokenKind::Error`] token is parsed up to the error.
pub fn parse_tokens(tokens: &[Token<'_>], config: &ParserConfig) -> FilenameInfo {
    let mut ctx = ParserContext::new(tokens, config);
    ctx.run();
    ctx.finish()
}

/// Parser states. Every state except `Finish` acts on the token the cursor
/// last returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParserState {
    Dispatch,
    IssueNumber,
    Series(SeriesMode),
    InfoSpecifier,
    Finish,
}

/// Where a series run lands once it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SeriesMode {
    /// Series if none has been found yet, otherwise title.
    Standard,
    /// Appended to the existing series.
    Continue,
}

#[derive(Debug, Clone, Copy)]
struct YearCandidate {
    likely_year: bool,
    likely_issue: bool,
    index: usize,
}

pub(crate) struct ParserContext<'a, 'src> {
    tokens: &'a [Token<'src>],
    config: &'a ParserConfig,
    /// Index of the next token `get` returns.
    pos: usize,
    info: FilenameInfo,

    series_parts: Vec<usize>,
    title_parts: Vec<usize>,
    year_candidates: Vec<YearCandidate>,
    used: HashSet<usize>,
    irrelevant: HashSet<usize>,
    operator_rejected: HashSet<usize>,
    publisher_removed: HashSet<usize>,
    /// Replacement text for tokens joined into series/title, e.g. ` - `.
    overrides: HashMap<usize, String>,
    /// `of` tokens that already sent the cursor back to their number.
    rewound: HashSet<usize>,

    paren_depth: usize,
    brace_depth: usize,
    bracket_depth: usize,
    in_brackets: usize,

    /// Source offset of the token holding the issue number.
    issue_number_at: Option<usize>,
    /// Index of the token the volume was read from.
    volume_at: Option<usize>,
    alternate_pending: bool,
    skip: bool,
}

impl<'a, 'src> ParserContext<'a, 'src> {
    fn new(tokens: &'a [Token<'src>], config: &'a ParserConfig) -> Self {
        let issue_number_at = tokens
            .iter()
            .find(|t| t.is(TokenKind::IssueNumber))
            .map(|t| t.pos);

        Self {
            tokens,
            config,
            pos: 0,
            info: FilenameInfo::default(),
            series_parts: Vec::new(),
            title_parts: Vec::new(),
            year_candidates: Vec::new(),
            used: HashSet::new(),
            irrelevant: HashSet::new(),
            operator_rejected: HashSet::new(),
            publisher_removed: HashSet::new(),
            overrides: HashMap::new(),
            rewound: HashSet::new(),
            paren_depth: 0,
            brace_depth: 0,
            bracket_depth: 0,
            in_brackets: 0,
            issue_number_at,
            volume_at: None,
            alternate_pending: false,
            skip: false,
        }
    }

    /// Step through the states until `Finish`.
    fn run(&mut self) {
        let mut state = ParserState::Dispatch;
        loop {
            state = match state {
                ParserState::Dispatch => self.dispatch(),
                ParserState::IssueNumber => self.issue_number(),
                ParserState::Series(mode) => self.series(mode),
                ParserState::InfoSpecifier => self.info_specifier(),
                ParserState::Finish => return,
            };
        }
    }

    // Cursor

    fn get(&mut self) -> usize {
        let i = self.pos;
        self.pos += 1;
        i
    }

    fn current(&self) -> usize {
        self.pos.saturating_sub(1)
    }

    fn peek(&self) -> usize {
        self.pos
    }

    /// The token before the one `get` last returned.
    fn peek_back(&self) -> Option<usize> {
        self.pos.checked_sub(2)
    }

    fn backup(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    // Token access. Indices past the end read as end of input.

    fn kind(&self, i: usize) -> TokenKind {
        self.tokens.get(i).map_or(TokenKind::EndOfInput, |t| t.kind)
    }

    fn text(&self, i: usize) -> &'a str {
        let tokens = self.tokens;
        tokens.get(i).map_or("", |t| &*t.text)
    }

    fn text_eq(&self, i: usize, word: &str) -> bool {
        self.text(i).eq_ignore_ascii_case(word)
    }

    fn token_pos(&self, i: usize) -> usize {
        self.tokens.get(i).map_or(usize::MAX, |t| t.pos)
    }

    fn token_end(&self, i: usize) -> usize {
        self.tokens.get(i).map_or(usize::MAX, Token::end)
    }

    /// Text used when joining series/title parts.
    fn display_text(&self, i: usize) -> &str {
        match self.overrides.get(&i) {
            Some(text) => text.as_str(),
            None => self.text(i),
        }
    }

    /// `i`, or the token after it when `i` is a space.
    fn skip_space(&self, i: usize) -> usize {
        if self.kind(i) == TokenKind::Space {
            i + 1
        } else {
            i
        }
    }

    fn is_number_like(&self, i: usize) -> bool {
        match self.kind(i) {
            TokenKind::Number | TokenKind::IssueNumber => true,
            TokenKind::Text => number::word_to_number(self.text(i)).is_some(),
            _ => false,
        }
    }

    /// Numeric text of a number-like token, converting number words.
    fn number_value(&self, i: usize) -> String {
        let text = self.text(i);
        if self.kind(i) == TokenKind::Text {
            if let Some(value) = number::word_to_number(text) {
                return value.to_string();
            }
        }
        text.to_string()
    }

    fn is_book(&self, i: usize) -> bool {
        self.kind(i) == TokenKind::ComicType && self.text_eq(i, "book")
    }

    fn is_of(&self, i: usize) -> bool {
        self.kind(i) == TokenKind::InfoSpecifier && self.text_eq(i, "of")
    }

    // Context queries

    fn in_brackets(&self) -> bool {
        self.in_brackets > 0
    }

    fn issue_passed(&self, i: usize) -> bool {
        !self.info.issue.is_empty()
            || self
                .issue_number_at
                .is_some_and(|at| at < self.token_pos(i))
    }

    /// A run starting at `i` extends the series rather than starting a title.
    fn continues_series(&self, i: usize) -> bool {
        !self.series_parts.is_empty() && self.title_parts.is_empty() && !self.issue_passed(i)
    }

    fn placement(&self, i: usize) -> SeriesMode {
        if self.continues_series(i) {
            SeriesMode::Continue
        } else {
            SeriesMode::Standard
        }
    }

    fn adjacent_to_operator(&self, i: usize) -> bool {
        (i > 0 && self.kind(i - 1) == TokenKind::Operator)
            || self.kind(i + 1) == TokenKind::Operator
    }

    /// A calendar word next to another one (`Sep-Oct`, `Jan Feb`), looking
    /// past at most one space or operator on either side.
    fn is_paired_calendar(&self, i: usize) -> bool {
        let separator = |k: TokenKind| matches!(k, TokenKind::Space | TokenKind::Operator);

        let before = i.checked_sub(1).and_then(|j| {
            if separator(self.kind(j)) {
                j.checked_sub(1)
            } else {
                Some(j)
            }
        });
        let after = if separator(self.kind(i + 1)) { i + 2 } else { i + 1 };

        before.is_some_and(|j| self.kind(j) == TokenKind::CalendarWord)
            || self.kind(after) == TokenKind::CalendarWord
    }

    fn bracket_depth_mut(&mut self, kind: TokenKind) -> &mut usize {
        match kind {
            TokenKind::LeftParen | TokenKind::RightParen => &mut self.paren_depth,
            TokenKind::LeftBrace | TokenKind::RightBrace => &mut self.brace_depth,
            _ => &mut self.bracket_depth,
        }
    }

    fn open_bracket(&mut self, kind: TokenKind) {
        *self.bracket_depth_mut(kind) += 1;
        self.in_brackets += 1;
    }

    fn close_bracket(&mut self, kind: TokenKind) {
        let depth = self.bracket_depth_mut(kind);
        if *depth > 0 {
            *depth -= 1;
            self.in_brackets = self.in_brackets.saturating_sub(1);
        } else {
            // Unmatched close: counters never go negative.
            self.in_brackets += 1;
        }
    }

    /// Remove `i` from series/title and mark it used.
    fn claim(&mut self, i: usize) {
        self.series_parts.retain(|&p| p != i);
        self.title_parts.retain(|&p| p != i);
        self.used.insert(i);
    }
}
