//! # comicname-parser
//!
//! Parse comic book archive file names into structured metadata.
//!
//! A name such as `Wonder Woman v2 #49 (1991) (DC) (Digital).cbr` is first
//! split into tokens by the [`lexer`], then walked by a state-machine parser
//! that fills a [`FilenameInfo`]: series, title, issue, volume, year, counts,
//! publisher, archive type, and whatever is left over.
//!
//! ## Quick Start
//!
//! ```
//! use comicname_parser::parse_filename;
//!
//! let info = parse_filename("Wonder Woman v2 #49 (1991) (DC) (Digital).cbr").unwrap();
//!
//! assert_eq!(info.series, "Wonder Woman");
//! assert_eq!(info.volume, "2");
//! assert_eq!(info.issue, "49");
//! assert_eq!(info.year, "1991");
//! assert_eq!(info.archive, "cbr");
//! ```
//!
//! ## Configurable Parsing
//!
//! ```
//! use comicname_parser::Parser;
//! use comicname_parser::config::ParserConfig;
//!
//! let config = ParserConfig::builder()
//!     .remove_c2c(true)
//!     .build();
//!
//! let parser = Parser::new(config);
//! let info = parser.parse("Some Comic 01 (1999) -- c2c.cbr").unwrap();
//! assert!(info.c2c);
//! assert_eq!(info.remainder, "");
//! ```

pub mod config;
pub mod lexer;
pub mod model;

mod parser;

pub use lexer::{tokenize, Token, TokenKind};
pub use model::{FilenameInfo, ParseError};
pub use parser::parse_tokens;

use config::ParserConfig;

/// Parse a file name using default settings.
///
/// For more control, use [`Parser`] with a custom [`ParserConfig`].
///
/// # Errors
///
/// Returns [`ParseError::Lex`] when the name contains an unbalanced bracket
/// or a character the scanner does not accept.
pub fn parse_filename(name: &str) -> Result<FilenameInfo, ParseError> {
    Parser::default().parse(name)
}

/// A configurable file name parser.
///
/// ```
/// use comicname_parser::Parser;
/// use comicname_parser::config::ParserConfig;
///
/// let parser = Parser::new(ParserConfig::builder().remove_publisher(true).build());
/// let info = parser.parse("batman #3 title (DC).cbz").unwrap();
/// assert_eq!(info.publisher, "DC");
/// assert_eq!(info.remainder, "");
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Tokenize and parse a file name.
    ///
    /// Pass the base name only; directories are not stripped.
    pub fn parse(&self, name: &str) -> Result<FilenameInfo, ParseError> {
        let tokens = tokenize(name);
        if let Some(error) = tokens.iter().find(|t| t.is(TokenKind::Error)) {
            return Err(ParseError::lex(error.text.to_string(), error.pos));
        }
        Ok(parse_tokens(&tokens, &self.config))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}
