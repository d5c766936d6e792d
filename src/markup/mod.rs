//! XHTML-style page markup: parsing into a [`Document`] and serializing back.
//!
//! The root element must be `<body>`; its attributes land on the document's
//! body. Text is leaf-only (mixed content is concatenated into the parent's
//! text). Comments, declarations and processing instructions are skipped.

mod parse;
mod write;

pub use parse::{parse_document, parse_document_file};
pub use write::to_markup;
