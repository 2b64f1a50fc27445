//! Static keyword and calendar tables.

use super::TokenKind;
use phf::{phf_map, phf_set};

/// Single-word keywords, keyed by their lowercase spelling.
static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "fcbd" => TokenKind::Fcbd,
    "freecomicbookday" => TokenKind::Fcbd,
    "cbr" => TokenKind::ArchiveType,
    "cbz" => TokenKind::ArchiveType,
    "cbt" => TokenKind::ArchiveType,
    "cb7" => TokenKind::ArchiveType,
    "rar" => TokenKind::ArchiveType,
    "zip" => TokenKind::ArchiveType,
    "tar" => TokenKind::ArchiveType,
    "7z" => TokenKind::ArchiveType,
    "annual" => TokenKind::ComicType,
    "book" => TokenKind::ComicType,
    "tpb" => TokenKind::ComicType,
    "volume" => TokenKind::InfoSpecifier,
    "vol" => TokenKind::InfoSpecifier,
    "vol." => TokenKind::InfoSpecifier,
    "v" => TokenKind::InfoSpecifier,
    "of" => TokenKind::InfoSpecifier,
    "covers" => TokenKind::InfoSpecifier,
    "dc" => TokenKind::Publisher,
    "marvel" => TokenKind::Publisher,
    "c2c" => TokenKind::C2c,
    "mr" => TokenKind::Honorific,
    "ms" => TokenKind::Honorific,
    "mrs" => TokenKind::Honorific,
    "dr" => TokenKind::Honorific,
};

/// English month and weekday names, full and abbreviated.
static CALENDAR: phf::Set<&'static str> = phf_set! {
    "january", "february", "march", "april", "may", "june", "july",
    "august", "september", "october", "november", "december",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
    "mon", "tue", "wed", "thu", "fri", "sat", "sun",
};

/// Look up a word in the keyword table, ignoring case.
pub fn keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS.get(word.to_lowercase().as_str()).copied()
}

/// Whether `word` names a month or a day of the week.
pub fn is_calendar_word(word: &str) -> bool {
    CALENDAR.contains(word.to_lowercase().as_str())
}
