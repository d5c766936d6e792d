use thiserror::Error;

use crate::dom::ElementId;

#[derive(Error, Debug)]
pub enum Error {
    /// A locale resource could not be fetched or did not parse as a string mapping.
    #[error("Locale resource unavailable for '{locale}': {reason}")]
    ResourceUnavailable { locale: String, reason: String },

    /// Both hint attributes are present on an element that should hold exactly one.
    #[error("Hint attribute state violation on element {element}: both title and managed value are set")]
    AttributeStateViolation { element: ElementId },

    #[error("Delegated listener for '{selector}' already attached to element {root}")]
    DuplicateListener { root: ElementId, selector: String },

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),

    #[error("Tooltip controller is not initialized")]
    NotInitialized,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Markup error: {0}")]
    Markup(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn unavailable(locale: &str, reason: impl Into<String>) -> Self {
        Error::ResourceUnavailable {
            locale: locale.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Error::Markup(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
