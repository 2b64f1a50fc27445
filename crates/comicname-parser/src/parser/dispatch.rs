//! The dispatch state and the issue number state.

use tracing::trace;

use super::number::is_year_shaped;
use super::{ParserContext, ParserState, SeriesMode, YearCandidate};
use crate::lexer::TokenKind;

impl ParserContext<'_, '_> {
    /// Read the next token and decide which state handles it.
    pub(super) fn dispatch(&mut self) -> ParserState {
        let i = self.get();
        let kind = self.kind(i);
        trace!(index = i, kind = kind.name(), text = self.text(i), "dispatch");

        match kind {
            TokenKind::Number => self.dispatch_number(i),
            TokenKind::IssueNumber => ParserState::IssueNumber,
            TokenKind::Fcbd => {
                self.info.fcbd = true;
                ParserState::Dispatch
            }
            TokenKind::C2c => {
                self.info.c2c = true;
                ParserState::Dispatch
            }
            TokenKind::ArchiveType => {
                match self.peek_back() {
                    Some(dot) if self.kind(dot) == TokenKind::Dot => {
                        self.info.archive = self.text(i).to_lowercase();
                        self.used.insert(i);
                        self.used.insert(dot);
                        ParserState::Dispatch
                    }
                    _ => self.word(),
                }
            }
            TokenKind::Publisher => self.dispatch_publisher(i),
            TokenKind::ComicType => self.dispatch_comic_type(i),
            TokenKind::Text | TokenKind::Honorific => self.word(),
            TokenKind::InfoSpecifier => {
                if self.skip {
                    ParserState::Dispatch
                } else {
                    ParserState::InfoSpecifier
                }
            }
            TokenKind::Operator => {
                if !self.in_brackets() {
                    self.irrelevant.insert(i);
                }
                ParserState::Dispatch
            }
            TokenKind::CalendarWord => {
                if self.in_brackets() || self.is_paired_calendar(i) {
                    self.irrelevant.insert(i);
                    ParserState::Dispatch
                } else if self.skip {
                    ParserState::Dispatch
                } else {
                    ParserState::Series(SeriesMode::Standard)
                }
            }
            TokenKind::Skip => {
                self.skip = true;
                self.irrelevant.insert(i);
                ParserState::Dispatch
            }
            k if k.is_left_bracket() => {
                self.open_bracket(k);
                ParserState::Dispatch
            }
            k if k.is_right_bracket() => {
                self.close_bracket(k);
                ParserState::Dispatch
            }
            TokenKind::EndOfInput | TokenKind::Error => ParserState::Finish,
            _ => ParserState::Dispatch,
        }
    }

    /// A word outside brackets starts a series run.
    fn word(&self) -> ParserState {
        if self.in_brackets() || self.skip {
            ParserState::Dispatch
        } else {
            ParserState::Series(SeriesMode::Standard)
        }
    }

    /// Continue the current run with a number that is not the issue.
    fn number_in_run(&self, i: usize) -> ParserState {
        if self.in_brackets() || self.skip {
            ParserState::Dispatch
        } else {
            ParserState::Series(self.placement(i))
        }
    }

    fn dispatch_number(&mut self, i: usize) -> ParserState {
        if i == 0 && self.config.first_token_is_alternate_number {
            self.alternate_pending = true;
            return ParserState::IssueNumber;
        }

        let text = self.text(i);
        if is_year_shaped(text) {
            if self.consume_date(i) {
                return ParserState::Dispatch;
            }
            let in_brackets = self.in_brackets();
            self.year_candidates.push(YearCandidate {
                likely_year: in_brackets && self.kind(i + 1) != TokenKind::Text,
                likely_issue: !in_brackets && !text.starts_with('\''),
                index: i,
            });
            return self.number_in_run(i);
        }

        if self.adjacent_to_operator(i) {
            self.operator_rejected.insert(i);
            return self.number_in_run(i);
        }

        if !self.in_brackets()
            && !self.skip
            && self.issue_number_at.is_none()
            && !self.series_parts.is_empty()
        {
            return ParserState::IssueNumber;
        }

        ParserState::Dispatch
    }

    /// Consume a calendar date such as `2021-08-04` or `2021.08.04` starting
    /// at `i`.
    fn consume_date(&mut self, i: usize) -> bool {
        let separator = |k: TokenKind| matches!(k, TokenKind::Operator | TokenKind::Dot);
        let is_date = separator(self.kind(i + 1))
            && self.kind(i + 2) == TokenKind::Number
            && separator(self.kind(i + 3))
            && self.kind(i + 4) == TokenKind::Number;
        if is_date {
            self.used.extend(i..i + 5);
            self.pos = i + 5;
        }
        is_date
    }

    fn dispatch_publisher(&mut self, i: usize) -> ParserState {
        if self.info.publisher.is_empty() {
            self.info.publisher = self.text(i).to_string();
        }
        if self.in_brackets() {
            self.publisher_removed.insert(i);
            return ParserState::Dispatch;
        }
        if self.skip {
            return ParserState::Dispatch;
        }
        // A leading publisher is part of the series, e.g. `Marvel Previews`.
        if i > 0 {
            self.publisher_removed.insert(i);
        }
        ParserState::Series(SeriesMode::Standard)
    }

    fn dispatch_comic_type(&mut self, i: usize) -> ParserState {
        if self.skip {
            return ParserState::Dispatch;
        }
        let is_annual = self.text_eq(i, "annual");
        if self.in_brackets() {
            self.info.annual |= is_annual;
            return ParserState::Dispatch;
        }

        let n = self.skip_space(i + 1);
        if !self.is_number_like(n) {
            self.info.annual |= is_annual;
            return ParserState::Series(self.placement(i));
        }

        if is_annual {
            self.info.annual = true;
            self.used.insert(i);
            let text = self.text(n);
            if self.kind(n) == TokenKind::Number
                && is_year_shaped(text)
                && !text.starts_with('\'')
            {
                self.year_candidates.push(YearCandidate {
                    likely_year: true,
                    likely_issue: false,
                    index: n,
                });
                self.pos = n + 1;
            }
            ParserState::Dispatch
        } else if self.text_eq(i, "tpb") {
            let value = self.number_value(n);
            self.info.volume = value.clone();
            self.info.issue = value;
            self.used.insert(i);
            self.used.insert(n);
            self.pos = n + 1;
            ParserState::Dispatch
        } else {
            ParserState::Series(SeriesMode::Standard)
        }
    }

    /// Record the issue number (or the alternate number) at the cursor,
    /// with a `.suffix` such as `.BEY` when one follows.
    pub(super) fn issue_number(&mut self) -> ParserState {
        let i = self.current();
        let mut value = self.text(i).to_string();
        self.used.insert(i);

        let dot = self.peek();
        if self.kind(dot) == TokenKind::Dot
            && matches!(self.kind(dot + 1), TokenKind::Text | TokenKind::Number)
        {
            value.push('.');
            value.push_str(self.text(dot + 1));
            self.used.insert(dot);
            self.used.insert(dot + 1);
            self.pos += 2;
        }

        if self.info.issue.is_empty() && !self.alternate_pending {
            trace!(issue = %value, "issue number");
            self.info.issue = value;
            self.issue_number_at = Some(self.token_pos(i));
        } else {
            trace!(alternate = %value, "alternate number");
            self.info.alternate = value;
        }
        self.alternate_pending = false;
        ParserState::Dispatch
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ParserConfig;
    use crate::lexer::tokenize;
    use crate::parser::parse_tokens;

    fn parse(name: &str) -> crate::model::FilenameInfo {
        parse_tokens(&tokenize(name), &ParserConfig::default())
    }

    #[test]
    fn test_archive_after_dot() {
        let info = parse("Goblin (2021).CBZ");
        assert_eq!(info.archive, "cbz");
        assert_eq!(info.year, "2021");
        assert_eq!(info.series, "Goblin");
    }

    #[test]
    fn test_issue_suffix() {
        let info = parse("Amazing Spider-Man #078.BEY (2022) (Digital) (Zone-Empire)");
        assert_eq!(info.issue, "78.BEY");
        assert_eq!(info.remainder, "(Digital) (Zone-Empire)");
    }

    #[test]
    fn test_alternate_number_first() {
        let config = ParserConfig::builder()
            .first_token_is_alternate_number(true)
            .build();
        let info = parse_tokens(&tokenize("52 Monster_Island_v1_#2__repaired__c2c.cbz"), &config);
        assert_eq!(info.alternate, "52");
        assert_eq!(info.issue, "2");
        assert_eq!(info.series, "Monster Island");
    }

    #[test]
    fn test_tpb_number() {
        let info = parse("Saga TPB 3.cbz");
        assert_eq!(info.series, "Saga");
        assert_eq!(info.volume, "3");
        assert_eq!(info.issue, "3");
    }
}
