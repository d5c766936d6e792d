//! Tooltip and locale simulator
//!
//! A headless page model for exercising delegated tooltips and locale
//! loading outside the browser. Pages are parsed from XHTML-style markup,
//! events are dispatched through delegated listeners, and translations are
//! fetched over HTTP or from a local directory.

pub mod config;
pub mod dom;
pub mod error;
pub mod event;
pub mod i18n;
pub mod markup;
pub mod page;
pub mod tooltip;

pub use error::{Error, Result};
pub use page::Page;
