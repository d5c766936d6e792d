//! Translation facility: active language, default-language fallback and key lookup.

use super::http::HttpClient;
use super::loader::{LocaleLoader, LocaleResource};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Outcome of [`Translator::use_language`].
#[derive(Debug)]
pub enum LanguageChange {
    /// The requested language is now active.
    Applied(String),
    /// The requested language failed to load; the default is active instead.
    FellBack {
        requested: String,
        fallback: String,
        error: Error,
    },
}

impl LanguageChange {
    /// Language that ended up active.
    pub fn active(&self) -> &str {
        match self {
            Self::Applied(lang) => lang,
            Self::FellBack { fallback, .. } => fallback,
        }
    }
}

/// Holds the loaded mappings and decides which one answers lookups.
#[derive(Debug)]
pub struct Translator<C> {
    loader: LocaleLoader<C>,
    default_lang: Option<String>,
    current_lang: Option<String>,
    resources: HashMap<String, LocaleResource>,
}

impl<C: HttpClient> Translator<C> {
    pub fn new(loader: LocaleLoader<C>) -> Self {
        Self {
            loader,
            default_lang: None,
            current_lang: None,
            resources: HashMap::new(),
        }
    }

    pub fn loader(&self) -> &LocaleLoader<C> {
        &self.loader
    }

    pub fn default_lang(&self) -> Option<&str> {
        self.default_lang.as_deref()
    }

    pub fn current_lang(&self) -> Option<&str> {
        self.current_lang.as_deref()
    }

    pub fn resource(&self, lang: &str) -> Option<&LocaleResource> {
        self.resources.get(lang)
    }

    /// Record the fallback language and load its mapping unless already loaded.
    ///
    /// The language is recorded even when loading fails.
    pub async fn set_default_lang(&mut self, lang: &str) -> Result<()> {
        self.default_lang = Some(lang.to_string());
        if self.resources.contains_key(lang) {
            return Ok(());
        }
        let resource = self.loader.load(lang).await?;
        self.resources.insert(lang.to_string(), resource);
        self.evict_inactive();
        Ok(())
    }

    /// Fetch `lang` and make it active, replacing any earlier mapping for it.
    ///
    /// When the fetch fails and a different default language is configured,
    /// the default becomes active and the failure is reported in
    /// [`LanguageChange::FellBack`]. Without a usable default the error is
    /// returned and the previous language stays active.
    pub async fn use_language(&mut self, lang: &str) -> Result<LanguageChange> {
        let error = match self.loader.load(lang).await {
            Ok(resource) => {
                self.resources.insert(lang.to_string(), resource);
                self.current_lang = Some(lang.to_string());
                self.evict_inactive();
                tracing::info!("Language changed to {}", lang);
                return Ok(LanguageChange::Applied(lang.to_string()));
            }
            Err(e) => e,
        };

        let fallback = match self.default_lang.clone() {
            Some(default) if default != lang => default,
            _ => return Err(error),
        };
        tracing::warn!("{}; falling back to {}", error, fallback);

        if !self.resources.contains_key(&fallback) {
            match self.loader.load(&fallback).await {
                Ok(resource) => {
                    self.resources.insert(fallback.clone(), resource);
                }
                Err(e) => {
                    tracing::warn!("Fallback language failed too: {}", e);
                    return Err(error);
                }
            }
        }

        self.current_lang = Some(fallback.clone());
        self.evict_inactive();
        Ok(LanguageChange::FellBack {
            requested: lang.to_string(),
            fallback,
            error,
        })
    }

    /// Drop mappings of languages that are neither current nor default.
    fn evict_inactive(&mut self) {
        let (current, default) = (&self.current_lang, &self.default_lang);
        self.resources.retain(|lang, _| {
            current.as_deref() == Some(lang.as_str()) || default.as_deref() == Some(lang.as_str())
        });
    }

    /// Lookup without fallback to the key.
    pub fn get(&self, key: &str) -> Option<&str> {
        [self.current_lang.as_deref(), self.default_lang.as_deref()]
            .into_iter()
            .flatten()
            .filter_map(|lang| self.resources.get(lang))
            .find_map(|res| res.get(key))
    }

    /// Current language, then default language, then the key itself.
    pub fn instant(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}
