//! Final resolution: year and issue fallbacks, joining the series and title
//! runs, and collecting the remainder.

use tracing::debug;

use super::number::normalize_number;
use super::ParserContext;
use crate::lexer::TokenKind;
use crate::model::FilenameInfo;

impl ParserContext<'_, '_> {
    pub(super) fn finish(mut self) -> FilenameInfo {
        self.resolve();

        if self.info.issue.is_empty() {
            if !self.info.alternate.is_empty() {
                self.info.issue = std::mem::take(&mut self.info.alternate);
            } else {
                self.info.issue = self.info.volume.clone();
            }
        }
        self.info.issue = normalize_number(&self.info.issue);
        self.info.volume = normalize_number(&self.info.volume);
        self.info.alternate = normalize_number(&self.info.alternate);

        if self.config.remove_publisher {
            let removed = &self.publisher_removed;
            self.series_parts.retain(|i| !removed.contains(i));
            self.title_parts.retain(|i| !removed.contains(i));
        }

        self.info.series = self.join(&self.series_parts);
        if self.info.series.is_empty() {
            self.info.series = self.info.issue.clone();
        }
        self.info.title = self.join(&self.title_parts);

        if self
            .info
            .series
            .to_lowercase()
            .contains("free comic book day")
        {
            self.info.fcbd = true;
        }

        self.used.extend(self.series_parts.iter().copied());
        self.used.extend(self.title_parts.iter().copied());
        self.info.remainder = self.remainder();

        debug!(
            series = %self.info.series,
            issue = %self.info.issue,
            year = %self.info.year,
            "parsed file name"
        );
        self.info
    }

    pub(super) fn resolve(&mut self) {
        self.resolve_year();
        self.resolve_issue();
    }

    /// Pick the year (and possibly issue and volume) from the year-shaped
    /// numbers seen. Bracketed years sort last and win.
    fn resolve_year(&mut self) {
        let used = &self.used;
        self.year_candidates.retain(|c| !used.contains(&c.index));
        self.year_candidates.sort_by_key(|c| c.likely_year);

        if self.info.issue.is_empty() {
            if let Some(first) = self.year_candidates.first().copied() {
                if first.likely_issue {
                    self.year_candidates.remove(0);
                    self.info.issue = self.text(first.index).to_string();
                    self.claim(first.index);
                    if self.year_candidates.is_empty() {
                        return;
                    }
                }
            }
        }

        let Some(year) = self.year_candidates.pop() else {
            return;
        };
        self.info.year = self.text(year.index).trim_start_matches('\'').to_string();
        self.claim(year.index);

        if self.info.volume.is_empty() {
            if let Some(volume) = self.year_candidates.last().copied() {
                if volume.likely_year {
                    self.year_candidates.pop();
                    self.info.volume = self.text(volume.index).trim_start_matches('\'').to_string();
                    self.claim(volume.index);
                }
            }
        }
    }

    /// Take a trailing number off the series as the issue when none was
    /// found, e.g. `Goblin 3`.
    fn resolve_issue(&mut self) {
        if !self.info.issue.is_empty() {
            return;
        }
        let Some(&last) = self.series_parts.last() else {
            return;
        };
        if self.kind(last) != TokenKind::Number
            || self.year_candidates.iter().any(|c| c.index == last)
        {
            return;
        }

        self.series_parts.pop();
        if self.operator_rejected.contains(&last)
            && self
                .series_parts
                .last()
                .is_some_and(|&prev| self.kind(prev) == TokenKind::Operator)
        {
            self.series_parts.push(last);
            return;
        }
        self.info.issue = self.text(last).to_string();
        self.used.insert(last);
    }

    fn join(&self, parts: &[usize]) -> String {
        let mut out = String::new();
        for (n, &i) in parts.iter().enumerate() {
            out.push_str(self.display_text(i));
            if let Some(&next) = parts.get(n + 1) {
                if self.needs_space(i, next) {
                    out.push(' ');
                }
            }
        }
        let out = out.trim();
        out.strip_suffix(',').unwrap_or(out).trim().to_string()
    }

    fn needs_space(&self, i: usize, next: usize) -> bool {
        let kind = self.kind(i);
        let next_kind = self.kind(next);
        if kind == TokenKind::Operator || next_kind == TokenKind::Operator {
            return false;
        }
        if matches!(kind, TokenKind::Honorific | TokenKind::Text) && next_kind == TokenKind::Dot {
            return false;
        }
        !(next_kind == TokenKind::Symbol && self.token_end(i) == self.token_pos(next))
    }

    /// Render every token no field claimed, dropping brackets left empty.
    fn remainder(&self) -> String {
        let mut kept: Vec<usize> = Vec::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if self.used.contains(&i) || self.irrelevant.contains(&i) {
                continue;
            }
            match token.kind {
                TokenKind::EndOfInput | TokenKind::Error => continue,
                TokenKind::C2c if self.config.remove_c2c => continue,
                TokenKind::Fcbd if self.config.remove_fcbd => continue,
                TokenKind::Publisher if self.config.remove_publisher => continue,
                k if k.is_right_bracket() => {
                    let open = kept
                        .iter()
                        .rposition(|&j| self.kind(j) != TokenKind::Space)
                        .filter(|&p| self.kind(kept[p]).is_left_bracket());
                    if let Some(p) = open {
                        kept.truncate(p);
                        continue;
                    }
                }
                _ => {}
            }
            kept.push(i);
        }

        let mut out = String::new();
        let mut pending_space = false;
        let mut last_end = 0;
        for i in kept {
            let token = &self.tokens[i];
            if token.kind == TokenKind::Space {
                pending_space = true;
                last_end = token.end();
                continue;
            }
            if token.pos > last_end {
                pending_space = true;
            }
            if pending_space
                && !out.is_empty()
                && !out.ends_with([' ', '(', '[', '{'])
                && !token.kind.is_right_bracket()
            {
                out.push(' ');
            }
            out.push_str(&token.text);
            pending_space = false;
            last_end = token.end();
        }

        out.trim_end_matches(['(', '[', '{', ' ']).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ParserConfig;
    use crate::lexer::tokenize;
    use crate::model::FilenameInfo;
    use crate::parser::parse_tokens;

    fn parse(name: &str) -> FilenameInfo {
        parse_tokens(&tokenize(name), &ParserConfig::default())
    }

    fn parse_removing(name: &str) -> FilenameInfo {
        let config = ParserConfig::builder()
            .remove_c2c(true)
            .remove_fcbd(true)
            .remove_publisher(true)
            .build();
        parse_tokens(&tokenize(name), &config)
    }

    #[test]
    fn test_two_years() {
        let info = parse("Super Strange Yarns (1957) #92 (1969)");
        assert_eq!(info.series, "Super Strange Yarns");
        assert_eq!(info.volume, "1957");
        assert_eq!(info.year, "1969");
        assert_eq!(info.issue, "92");
    }

    #[test]
    fn test_year_in_series_name() {
        let info = parse("Batman '89 (2021) (Webrip) (The Last Kryptonian-DCP)");
        assert_eq!(info.series, "Batman '89");
        assert_eq!(info.issue, "");
        assert_eq!(info.year, "2021");
    }

    #[test]
    fn test_issue_only_name_fills_series() {
        let info = parse_removing("#52.cbz");
        assert_eq!(info.issue, "52");
        assert_eq!(info.series, "52");
    }

    #[test]
    fn test_publisher_removal() {
        let info = parse_removing("batman #3 title (DC).cbz");
        assert_eq!(info.series, "batman");
        assert_eq!(info.title, "title");
        assert_eq!(info.publisher, "DC");
        assert_eq!(info.remainder, "");

        let info = parse_removing("batman #3 title DC.cbz");
        assert_eq!(info.title, "title DC");
    }

    #[test]
    fn test_calendar_months_are_dropped() {
        let info = parse_removing("Wonder Woman #49 DC Sep-Oct 1951 digital");
        assert_eq!(info.series, "Wonder Woman");
        assert_eq!(info.title, "digital");
        assert_eq!(info.year, "1951");

        let info = parse("Wonder Woman #49 DC Sep-Oct 1951 digital");
        assert_eq!(info.title, "DC digital");
    }

    #[test]
    fn test_skip_marker_moves_text_to_remainder() {
        let info = parse_removing("Monster_Island_v1_#2__repaired__c2c.cbz");
        assert_eq!(info.series, "Monster Island");
        assert_eq!(info.volume, "1");
        assert_eq!(info.issue, "2");
        assert_eq!(info.remainder, "repaired");
        assert!(info.c2c);

        let info = parse_removing("Monster Island v1 #3 (1957) -- The Revenge Of King Klong (noads)");
        assert_eq!(info.year, "1957");
        assert_eq!(info.remainder, "The Revenge Of King Klong (noads)");
    }

    #[test]
    fn test_empty_brackets_collapse_in_remainder() {
        let info = parse("The Magic Order 2 #06 (2022) (Digital) (Zone-Empire)[__913302__]");
        assert_eq!(info.series, "The Magic Order 2");
        assert_eq!(info.issue, "6");
        assert_eq!(info.year, "2022");
        assert_eq!(info.remainder, "(Digital) (Zone-Empire)[913302]");
    }

    #[test]
    fn test_date_inside_brackets() {
        let info = parse("Marvel Previews #002 (January 2022) (Digital-Empire)");
        assert_eq!(info.series, "Marvel Previews");
        assert_eq!(info.publisher, "Marvel");
        assert_eq!(info.year, "2022");
        assert_eq!(info.remainder, "(Digital-Empire)");
    }

    #[test]
    fn test_c2c_without_removal_stays_in_remainder() {
        let info = parse("Some Comic #1 (1999) c2c.cbz");
        assert!(info.c2c);
        assert_eq!(info.remainder, "c2c");
    }
}
