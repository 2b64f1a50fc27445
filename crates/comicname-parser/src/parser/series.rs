//! The series state: collect a run of words into the series or the title.

use tracing::trace;

use super::number::word_to_number;
use super::{ParserContext, ParserState, SeriesMode};
use crate::lexer::TokenKind;

impl ParserContext<'_, '_> {
    /// Collect words starting at the cursor until something that is not part
    /// of a name shows up.
    ///
    /// A separator followed by a space but not preceded by one (`Now: Anda`)
    /// splits the run into segments: the last segment becomes the title when
    /// there is more than one.
    pub(super) fn series(&mut self, mode: SeriesMode) -> ParserState {
        let first = self.current();
        let mut segments: Vec<Vec<usize>> = vec![vec![first]];
        let mut last = first;

        if self.kind(first) == TokenKind::Honorific && self.kind(self.peek()) == TokenKind::Dot {
            last = self.get();
            push(&mut segments, last);
        }

        let mut prev_space = false;
        loop {
            let i = self.get();
            let kind = self.kind(i);
            if kind == TokenKind::Space {
                prev_space = true;
                continue;
            }

            match kind {
                TokenKind::Text | TokenKind::Symbol => {
                    if kind == TokenKind::Text
                        && self.is_book(last)
                        && self.info.volume.is_empty()
                        && word_to_number(self.text(i)).is_some()
                    {
                        self.info.volume = self.number_value(i);
                    }
                    push(&mut segments, i);
                }
                TokenKind::ArchiveType
                    if self.peek_back().map(|p| self.kind(p)) != Some(TokenKind::Dot) =>
                {
                    push(&mut segments, i);
                }
                TokenKind::Honorific => {
                    push(&mut segments, i);
                    if self.kind(self.peek()) == TokenKind::Dot {
                        let dot = self.get();
                        push(&mut segments, dot);
                    }
                }
                TokenKind::Publisher => {
                    if self.info.publisher.is_empty() {
                        self.info.publisher = self.text(i).to_string();
                    }
                    push(&mut segments, i);
                }
                TokenKind::CalendarWord => {
                    if self.is_paired_calendar(i) {
                        self.backup();
                        break;
                    }
                    push(&mut segments, i);
                }
                TokenKind::InfoSpecifier => {
                    if self.is_of(i) {
                        push(&mut segments, i);
                    } else {
                        self.drop_trailing_separators(&mut segments);
                        self.backup();
                        break;
                    }
                }
                TokenKind::Operator => {
                    let next_is_space = self.kind(self.peek()) == TokenKind::Space;
                    if next_is_space && !prev_space {
                        push(&mut segments, i);
                        segments.push(Vec::new());
                    } else {
                        if next_is_space {
                            let spaced = format!(" {} ", self.text(i));
                            self.overrides.insert(i, spaced);
                        }
                        push(&mut segments, i);
                    }
                }
                TokenKind::Number => {
                    if self.is_book(last) {
                        if self.info.volume.is_empty() {
                            self.info.volume = self.text(i).to_string();
                        }
                        push(&mut segments, i);
                    } else if self.is_of(last) {
                        push(&mut segments, i);
                    } else if self.kind(i + 1) == TokenKind::Space && self.kind(i + 2).is_number() {
                        // `Blade Runner 2029 #006`: a number right before the
                        // issue belongs to the name.
                        push(&mut segments, i);
                        break;
                    } else {
                        self.backup();
                        break;
                    }
                }
                TokenKind::Dot => {
                    if self.kind(i + 1) == TokenKind::Text {
                        self.used.insert(i);
                    } else {
                        self.backup();
                        break;
                    }
                }
                _ => {
                    self.backup();
                    break;
                }
            }

            last = i;
            prev_space = false;
        }

        self.place_run(segments, mode);
        ParserState::Dispatch
    }

    /// Drop separators left dangling at the end of a run before a specifier.
    fn drop_trailing_separators(&mut self, segments: &mut [Vec<usize>]) {
        let Some(segment) = segments.last_mut() else {
            return;
        };
        while segment.len() > 1 {
            let Some(&tail) = segment.last() else {
                break;
            };
            if !matches!(
                self.kind(tail),
                TokenKind::Operator | TokenKind::Symbol | TokenKind::Dot
            ) {
                break;
            }
            segment.pop();
            self.irrelevant.insert(tail);
        }
    }

    fn place_run(&mut self, mut segments: Vec<Vec<usize>>, mode: SeriesMode) {
        if segments.len() > 1 && segments.last().is_some_and(Vec::is_empty) {
            segments.pop();
            if let Some(separator) = segments.last_mut().and_then(Vec::pop) {
                self.irrelevant.insert(separator);
            }
        }
        segments.retain(|segment| !segment.is_empty());

        let split = segments.len().saturating_sub(1);
        for segment in &segments[..split] {
            if let Some(&tail) = segment.last() {
                if self.kind(tail) == TokenKind::Operator {
                    let spaced = format!("{} ", self.text(tail));
                    self.overrides.insert(tail, spaced);
                }
            }
        }

        let title_only = mode == SeriesMode::Standard && !self.series_parts.is_empty();
        trace!(?segments, ?mode, title_only, "series run");

        if title_only || segments.len() == 1 {
            let parts = segments.into_iter().flatten();
            if title_only {
                self.title_parts.extend(parts);
            } else {
                self.series_parts.extend(parts);
            }
            return;
        }

        let Some(title) = segments.pop() else {
            return;
        };
        let mut series: Vec<usize> = segments.into_iter().flatten().collect();
        if let Some(separator) = series.pop() {
            self.used.insert(separator);
        }
        self.series_parts.extend(series);
        self.title_parts.extend(title);
    }
}

fn push(segments: &mut [Vec<usize>], i: usize) {
    if let Some(segment) = segments.last_mut() {
        segment.push(i);
    }
}
