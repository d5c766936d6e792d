//! A running page: document, tooltip delegate and translator wired together.

use crate::config::AppConfig;
use crate::dom::{Document, ElementId};
use crate::error::{Error, Result};
use crate::event::{DomEvent, EventKind, EventQueue};
use crate::i18n::{apply_translations, HttpClient, LanguageChange, LocaleLoader, Translator};
use crate::tooltip::TooltipController;

pub struct Page<C> {
    document: Document,
    tooltips: TooltipController,
    translator: Translator<C>,
    queue: EventQueue,
}

impl<C: HttpClient> Page<C> {
    /// Bring a parsed document to life.
    ///
    /// Loads the default language, switches to the initial language (falling
    /// back to the default when it is unavailable), attaches the tooltip
    /// delegate to `body` and translates the document. A missing default
    /// language is logged and tolerated; a page with no language at all is
    /// still usable with untranslated keys.
    pub async fn start(document: Document, config: &AppConfig, client: C) -> Result<Self> {
        let loader = LocaleLoader::new(client).with_base_path(&config.i18n.base_path);
        let mut translator = Translator::new(loader);

        if let Err(e) = translator.set_default_lang(&config.i18n.default_lang).await {
            tracing::warn!("Default language unavailable: {}", e);
        }
        match translator.use_language(&config.i18n.initial_lang).await {
            Ok(LanguageChange::Applied(_)) => {}
            Ok(LanguageChange::FellBack { requested, fallback, error }) => {
                tracing::warn!("Started in {} instead of {}: {}", fallback, requested, error);
            }
            Err(e) => tracing::warn!("No language could be loaded: {}", e),
        }

        let mut page = Self {
            document,
            tooltips: TooltipController::new(config.tooltip.clone())?,
            translator,
            queue: EventQueue::new(),
        };
        let body = page.document.body();
        page.tooltips.initialize(&mut page.document, body)?;
        apply_translations(&mut page.document, body, &page.translator);

        tracing::info!(
            "Page started ({} elements, language {})",
            page.document.len(),
            page.translator.current_lang().unwrap_or("none")
        );
        Ok(page)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn tooltips(&self) -> &TooltipController {
        &self.tooltips
    }

    pub fn translator(&self) -> &Translator<C> {
        &self.translator
    }

    /// Route one event to the tooltip delegate immediately.
    pub fn dispatch(&mut self, event: DomEvent) -> bool {
        self.tooltips.handle_event(&mut self.document, &event)
    }

    /// Queue an event for the next [`Page::process_events`].
    pub fn push_event(&mut self, event: DomEvent) {
        self.queue.push(event);
    }

    /// Dispatch queued events in arrival order. Returns how many changed the
    /// tooltip's visibility.
    pub fn process_events(&mut self) -> usize {
        self.queue
            .drain()
            .into_iter()
            .filter(|event| self.tooltips.handle_event(&mut self.document, event))
            .count()
    }

    /// Pointer enters `element`.
    pub fn hover(&mut self, element: ElementId) -> Result<bool> {
        if !self.tooltips.is_initialized() {
            return Err(Error::NotInitialized);
        }
        if !self.document.is_connected(element) {
            return Err(Error::ElementNotFound(element));
        }
        Ok(self.dispatch(DomEvent::new(EventKind::MouseEnter, element)))
    }

    /// Switch language, then re-translate the document and the visible tooltip.
    pub async fn change_language(&mut self, lang: &str) -> Result<LanguageChange> {
        let change = self.translator.use_language(lang).await?;
        let body = self.document.body();
        apply_translations(&mut self.document, body, &self.translator);
        self.tooltips.refresh(&mut self.document);
        Ok(change)
    }

    /// Detach the tooltip delegate and hand the document back.
    pub fn teardown(mut self) -> Document {
        self.tooltips.destroy(&mut self.document);
        self.document
    }
}
