//! Parser configuration.

/// Options that change how a file name is parsed.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use comicname_parser::config::ParserConfig;
///
/// let config = ParserConfig::builder()
///     .remove_c2c(true)
///     .remove_publisher(true)
///     .build();
/// assert!(config.remove_c2c);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Treat a leading bare number as an alternate issue number.
    /// `52 Monster Island #2` → alternate `52`, issue `2`.
    pub first_token_is_alternate_number: bool,

    /// Leave `c2c` markers out of the remainder.
    pub remove_c2c: bool,

    /// Leave `fcbd` markers out of the remainder.
    pub remove_fcbd: bool,

    /// Strip publisher names that follow the series, and leave publisher
    /// tokens out of the remainder.
    pub remove_publisher: bool,
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    first_token_is_alternate_number: Option<bool>,
    remove_c2c: Option<bool>,
    remove_fcbd: Option<bool>,
    remove_publisher: Option<bool>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat a leading bare number as an alternate issue number.
    ///
    /// Default: false
    pub fn first_token_is_alternate_number(mut self, enabled: bool) -> Self {
        self.first_token_is_alternate_number = Some(enabled);
        self
    }

    /// Exclude `c2c` markers from the remainder.
    ///
    /// Default: false
    pub fn remove_c2c(mut self, enabled: bool) -> Self {
        self.remove_c2c = Some(enabled);
        self
    }

    /// Exclude `fcbd` markers from the remainder.
    ///
    /// Default: false
    pub fn remove_fcbd(mut self, enabled: bool) -> Self {
        self.remove_fcbd = Some(enabled);
        self
    }

    /// Strip publisher names from series/title and the remainder.
    ///
    /// A publisher that opens the file name (`Marvel Previews`) is part of
    /// the series and is kept.
    ///
    /// Default: false
    pub fn remove_publisher(mut self, enabled: bool) -> Self {
        self.remove_publisher = Some(enabled);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            first_token_is_alternate_number: self
                .first_token_is_alternate_number
                .unwrap_or_default(),
            remove_c2c: self.remove_c2c.unwrap_or_default(),
            remove_fcbd: self.remove_fcbd.unwrap_or_default(),
            remove_publisher: self.remove_publisher.unwrap_or_default(),
        }
    }
}
