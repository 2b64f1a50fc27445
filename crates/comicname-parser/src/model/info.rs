/// Metadata extracted from a comic archive file name.
///
/// Every string field defaults to empty and every flag to `false`; a field
/// is only filled when the parser found evidence for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilenameInfo {
    pub series: String,
    pub title: String,
    /// Issue number without `#` or leading zeros, e.g. `78.BEY`.
    pub issue: String,
    pub volume: String,
    pub year: String,
    pub issue_count: String,
    pub volume_count: String,
    pub publisher: String,
    /// Lowercase archive extension.
    pub archive: String,
    /// Alternate issue number, when a name carries two.
    pub alternate: String,
    /// Text not claimed by any other field, such as scan-group tags.
    pub remainder: String,
    pub annual: bool,
    /// Free Comic Book Day edition.
    pub fcbd: bool,
    /// Cover-to-cover scan.
    pub c2c: bool,
}

impl FilenameInfo {
    /// All fields as `(name, value)` pairs, in declaration order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("series", self.series.clone()),
            ("title", self.title.clone()),
            ("issue", self.issue.clone()),
            ("volume", self.volume.clone()),
            ("year", self.year.clone()),
            ("issue_count", self.issue_count.clone()),
            ("volume_count", self.volume_count.clone()),
            ("publisher", self.publisher.clone()),
            ("archive", self.archive.clone()),
            ("alternate", self.alternate.clone()),
            ("remainder", self.remainder.clone()),
            ("annual", self.annual.to_string()),
            ("fcbd", self.fcbd.to_string()),
            ("c2c", self.c2c.to_string()),
        ]
    }
}
