//! Directory scanner.
//!
//! Walks a directory for comic archives and parses each file name.

use anyhow::{Context, Result};
use comicname_parser::config::ParserConfig;
use comicname_parser::{FilenameInfo, Parser};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ScanConfig;

/// Result of parsing a single file.
#[derive(Debug, Clone, Serialize)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub info: FilenameInfo,
    /// Parse error text when the name could not be tokenized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Scan a directory and parse every matching file name.
///
/// Results are sorted by path.
pub fn scan_directory(
    dir: &Path,
    scan: &ScanConfig,
    parser_config: &ParserConfig,
) -> Result<Vec<ScannedFile>> {
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {:?}", dir);
    }
    info!("Scanning directory: {:?}", dir);

    let mut walker = WalkDir::new(dir).follow_links(scan.follow_links);
    if !scan.recursive {
        walker = walker.max_depth(1);
    }

    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to read directory {:?}", dir))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| scan.matches_extension(e));
        if matches {
            paths.push(path);
        } else {
            debug!("Skipping {:?}", path);
        }
    }
    paths.sort();

    let results: Vec<ScannedFile> = paths
        .par_iter()
        .map(|path| parse_path(path, parser_config))
        .collect();

    info!(
        "Scan complete: {} files parsed from {:?}",
        results.len(),
        dir
    );
    Ok(results)
}

/// Parse the file name of `path`.
///
/// A name that fails to tokenize falls back to its stem as the series.
pub fn parse_path(path: &Path, parser_config: &ParserConfig) -> ScannedFile {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match Parser::new(*parser_config).parse(&name) {
        Ok(info) => ScannedFile {
            path: path.to_path_buf(),
            info,
            error: None,
        },
        Err(e) => {
            warn!("Failed to parse {:?}: {}", name, e);
            let series = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            ScannedFile {
                path: path.to_path_buf(),
                info: FilenameInfo {
                    series,
                    ..FilenameInfo::default()
                },
                error: Some(e.to_string()),
            }
        }
    }
}
