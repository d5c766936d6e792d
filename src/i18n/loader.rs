//! Locale resource loader with per-request cache busting.

use super::cache_token::CacheTokenSource;
use super::http::HttpClient;
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Where locale files are served from, relative to the page.
pub const DEFAULT_BASE_PATH: &str = "./assets/language-files/";
/// Appended to the locale id to form the file name.
pub const DEFAULT_SUFFIX: &str = ".json";

/// One fetch of one locale. Built per call, never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRequest {
    pub locale_id: String,
    pub cache_token: String,
}

impl LocaleRequest {
    /// `{base_path}{locale_id}{suffix}?cache={token}`
    pub fn url(&self, base_path: &str, suffix: &str) -> String {
        format!(
            "{}{}{}?cache={}",
            base_path, self.locale_id, suffix, self.cache_token
        )
    }
}

/// Translation key to localized string. Nested objects in the source JSON
/// are flattened into dot-path keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleResource {
    entries: BTreeMap<String, String>,
}

impl LocaleResource {
    /// Parse a locale document. Anything other than an object whose leaves
    /// are all strings is rejected.
    pub fn from_json(locale: &str, body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::unavailable(locale, format!("invalid JSON: {e}")))?;
        let Value::Object(map) = value else {
            return Err(Error::unavailable(locale, "expected a JSON object"));
        };

        let mut entries = BTreeMap::new();
        flatten(locale, "", &map, &mut entries)?;
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleResource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

fn flatten(
    locale: &str,
    prefix: &str,
    map: &Map<String, Value>,
    out: &mut BTreeMap<String, String>,
) -> Result<()> {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::String(s) => {
                out.insert(path, s.clone());
            }
            Value::Object(nested) => flatten(locale, &path, nested, out)?,
            other => {
                return Err(Error::unavailable(
                    locale,
                    format!("expected string at '{path}', found {}", json_kind(other)),
                ));
            }
        }
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Fetches `{base_path}{locale}.json?cache={token}` with a fresh token on
/// every call so no HTTP cache can answer from an earlier load.
#[derive(Debug)]
pub struct LocaleLoader<C> {
    client: C,
    base_path: String,
    suffix: String,
    tokens: &'static CacheTokenSource,
}

impl<C: HttpClient> LocaleLoader<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            base_path: DEFAULT_BASE_PATH.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            tokens: CacheTokenSource::global(),
        }
    }

    /// Serve from another directory. A trailing `/` is added when missing.
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        let mut base = base_path.to_string();
        if !base.is_empty() && !base.ends_with('/') {
            base.push('/');
        }
        self.base_path = base;
        self
    }

    pub fn with_token_source(mut self, tokens: &'static CacheTokenSource) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Build the request for `locale_id`, consuming one cache token.
    pub fn request(&self, locale_id: &str) -> LocaleRequest {
        LocaleRequest {
            locale_id: locale_id.to_string(),
            cache_token: self.tokens.next_token(),
        }
    }

    /// Fetch and parse one locale.
    ///
    /// Transport failures, non-2xx statuses and bodies that are not a string
    /// mapping all surface as [`Error::ResourceUnavailable`].
    pub async fn load(&self, locale_id: &str) -> Result<LocaleResource> {
        let request = self.request(locale_id);
        let url = request.url(&self.base_path, &self.suffix);
        tracing::debug!("Loading locale {} from {}", locale_id, url);

        let response = self
            .client
            .get(&url)
            .await
            .map_err(|e| Error::unavailable(locale_id, e.to_string()))?;
        if !response.is_success() {
            return Err(Error::unavailable(
                locale_id,
                format!("HTTP status: {}", response.status),
            ));
        }

        let resource = LocaleResource::from_json(locale_id, &response.body)?;
        tracing::debug!("Loaded {} keys for locale {}", resource.len(), locale_id);
        Ok(resource)
    }
}
