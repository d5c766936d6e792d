//! Shared test helpers.

use std::cell::RefCell;
use std::collections::HashMap;
use tippy_l10n::dom::{Document, ElementId, Selector};
use tippy_l10n::i18n::{HttpClient, HttpResponse};
use tippy_l10n::Result;

/// In-memory web server: answers by path (query string ignored) and records
/// every requested URL.
#[derive(Debug, Default)]
pub struct FakeHttpClient {
    routes: HashMap<String, HttpResponse>,
    requests: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl FakeHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 at `path`.
    pub fn with_file(mut self, path: &str, body: &str) -> Self {
        self.routes.insert(path.to_string(), HttpResponse::ok(body));
        self
    }

    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.routes.insert(path.to_string(), HttpResponse::status(status));
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl HttpClient for FakeHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(url.to_string());
        let path = url.split('?').next().unwrap_or_default();
        Ok(self
            .routes
            .get(path)
            .cloned()
            .unwrap_or_else(|| HttpResponse::status(404)))
    }
}

/// The two locale files shipped with the demo page.
#[allow(dead_code)]
pub fn demo_locales() -> FakeHttpClient {
    FakeHttpClient::new()
        .with_file(
            "./assets/language-files/en-us.json",
            r#"{"greeting":"Hello","save":{"label":"Save","hint":"Save the document"}}"#,
        )
        .with_file(
            "./assets/language-files/sv-se.json",
            r#"{"greeting":"Hej","save":{"label":"Spara","hint":"Spara dokumentet"}}"#,
        )
}

/// First element matching `selector`, panicking when there is none.
#[allow(dead_code)]
pub fn find(doc: &Document, selector: &str) -> ElementId {
    let selector = Selector::parse(selector).unwrap();
    doc.query_selector(doc.body(), &selector)
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}
