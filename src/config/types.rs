use comicname_parser::config::ParserConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserSettings,

    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ParserSettings {
    /// Keep `c2c` out of the remainder
    #[serde(default)]
    pub remove_c2c: bool,

    /// Keep `fcbd` out of the remainder
    #[serde(default)]
    pub remove_fcbd: bool,

    /// Strip publisher names from series, title and remainder
    #[serde(default)]
    pub remove_publisher: bool,

    /// Read a leading bare number as the alternate issue number
    #[serde(default)]
    pub first_token_is_alternate_number: bool,

    /// Accepted for compatibility; has no effect
    #[serde(default)]
    pub allow_issue_start_with_letter: bool,

    /// Accepted for compatibility; has no effect
    #[serde(default)]
    pub protofolius_issue_number_scheme: bool,
}

impl ParserSettings {
    pub fn to_parser_config(&self) -> ParserConfig {
        ParserConfig::builder()
            .remove_c2c(self.remove_c2c)
            .remove_fcbd(self.remove_fcbd)
            .remove_publisher(self.remove_publisher)
            .first_token_is_alternate_number(self.first_token_is_alternate_number)
            .build()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// File extensions to pick up, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_true")]
    pub recursive: bool,

    #[serde(default = "default_true")]
    pub follow_links: bool,
}

fn default_extensions() -> Vec<String> {
    ["cbz", "cbr", "cb7", "cbt", "zip", "rar", "7z", "tar", "pdf"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            recursive: true,
            follow_links: true,
        }
    }
}

impl ScanConfig {
    /// Case-insensitive match against the configured extensions.
    pub fn matches_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}
