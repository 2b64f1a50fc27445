//! comicname - comic book archive file name parser
//!
//! This library crate exposes configuration loading and directory scanning
//! on top of `comicname-parser` for the binary and integration tests.

pub mod config;
pub mod scanner;
