//! Data model for parsed comic file names.

mod error;
mod info;

pub use error::ParseError;
pub use info::FilenameInfo;
