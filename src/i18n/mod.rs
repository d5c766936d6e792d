//! Locale loading and translation.
//!
//! Locale files are flat or nested JSON objects of strings, fetched from
//! `{base_path}{locale}.json?cache={token}`. The token changes on every
//! request so neither the browser nor any proxy can answer from a stale copy.

pub mod apply;
pub mod cache_token;
pub mod http;
pub mod loader;
pub mod translate;

pub use apply::apply_translations;
pub use cache_token::CacheTokenSource;
pub use http::{HttpClient, HttpResponse, ReqwestClient, StaticDirClient};
pub use loader::{LocaleLoader, LocaleRequest, LocaleResource};
pub use translate::{LanguageChange, Translator};

use crate::error::{Error, Result};
use std::path::Path;

/// Locale ids with a resource file in `dir`, sorted.
pub fn available_locales(dir: &Path) -> Result<Vec<String>> {
    let pattern = dir.join("*.json");
    let pattern = pattern.to_string_lossy();
    let paths = glob::glob(&pattern).map_err(|e| {
        Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))
    })?;

    let mut locales: Vec<String> = paths
        .filter_map(|entry| match entry {
            Ok(path) => path.file_stem().map(|s| s.to_string_lossy().into_owned()),
            Err(e) => {
                tracing::warn!("Skipping unreadable locale entry: {}", e);
                None
            }
        })
        .collect();
    locales.sort();
    Ok(locales)
}
