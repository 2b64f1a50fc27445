//! The info specifier state: `v1`, `vol. 2`, `volume three`, `(of 6)`.

use tracing::trace;

use super::number::count_value;
use super::{ParserContext, ParserState};
use crate::lexer::TokenKind;

impl ParserContext<'_, '_> {
    pub(super) fn info_specifier(&mut self) -> ParserState {
        let i = self.current();
        let word = self.text(i).to_lowercase();
        let n = self.skip_space(self.peek());

        match word.as_str() {
            "volume" | "vol" | "vol." | "v" => {
                if self.is_number_like(n) {
                    self.info.volume = self.number_value(n);
                    self.volume_at = Some(n);
                    trace!(volume = %self.info.volume, "volume");
                    self.used.insert(i);
                    self.used.insert(n);
                    self.pos = n + 1;
                    return ParserState::Dispatch;
                }
            }
            "of" => {
                if self.is_number_like(n) {
                    return self.count_of(i, n);
                }
            }
            _ => return ParserState::Dispatch,
        }

        if self.in_brackets() {
            ParserState::Dispatch
        } else {
            ParserState::Series(self.placement(i))
        }
    }

    /// `of` at `of` followed by the count at `n`: attach the count to the
    /// number before `of`.
    fn count_of(&mut self, of: usize, n: usize) -> ParserState {
        let count = count_value(&self.number_value(n));

        let Some(target) = self.count_target(of) else {
            return if self.in_brackets() {
                ParserState::Dispatch
            } else {
                ParserState::Series(self.placement(of))
            };
        };
        let target_pos = self.token_pos(target);

        if self.volume_at == Some(target) {
            trace!(count = %count, "volume count");
            self.info.volume_count = count;
            self.used.insert(of);
            self.used.insert(n);
            self.pos = n + 1;
            return ParserState::Dispatch;
        }

        if self.in_brackets() {
            if self.issue_number_at.map_or(true, |at| at == target_pos) {
                trace!(count = %count, "issue count");
                self.info.issue_count = count;
                self.used.insert(of);
                self.used.insert(n);
            } else if !self.used.contains(&target)
                && !self.series_parts.contains(&target)
                && !self.title_parts.contains(&target)
            {
                trace!(count = %count, "volume count");
                self.info.volume = self.text(target).to_string();
                self.volume_at = Some(target);
                self.info.volume_count = count;
                self.used.insert(target);
                self.used.insert(of);
                self.used.insert(n);
            }
            self.pos = n + 1;
            return ParserState::Dispatch;
        }

        if self.issue_number_at == Some(target_pos) {
            self.info.issue_count = count;
            self.used.insert(of);
            self.used.insert(n);
            self.pos = n + 1;
            ParserState::Dispatch
        } else if self.used.contains(&target) {
            // The number already belongs to a field; the count stays a plain
            // number.
            ParserState::Dispatch
        } else if self.rewound.insert(of) {
            // `Part 1 of 2`: go back and read the number as part of a run.
            self.pos = target + 1;
            ParserState::Series(self.placement(target))
        } else {
            ParserState::Series(self.placement(of))
        }
    }

    /// The number an `of` refers to, looking back past spaces and opening
    /// brackets.
    fn count_target(&self, of: usize) -> Option<usize> {
        let mut j = of;
        while j > 0 {
            j -= 1;
            match self.kind(j) {
                TokenKind::Space => continue,
                k if k.is_left_bracket() => continue,
                TokenKind::Number | TokenKind::IssueNumber => return Some(j),
                _ => return None,
            }
        }
        None
    }
}
