//! Compound selectors (`tag`, `.class`, `#id`, `*` and combinations thereof).

use super::Element;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A single compound selector such as `button.app-tippy` or `#menu`.
///
/// Combinators, attribute selectors and pseudo-classes are not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// `*`: matches every element.
    pub fn universal() -> Self {
        Self {
            tag: None,
            id: None,
            classes: Vec::new(),
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidSelector("empty selector".into()));
        }

        let mut tag = None;
        let mut id = None;
        let mut classes = Vec::new();

        // Split into (prefix, name) parts: "button.a#b" -> [("", "button"), (".", "a"), ("#", "b")]
        let mut rest = s;
        let mut first = true;
        while !rest.is_empty() {
            let (sigil, body) = match rest.as_bytes()[0] {
                b'.' => (Some('.'), &rest[1..]),
                b'#' => (Some('#'), &rest[1..]),
                _ if first => (None, rest),
                _ => return Err(Error::InvalidSelector(s.to_string())),
            };
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let name = &body[..end];
            let universal = sigil.is_none() && name == "*";
            if !universal && (name.is_empty() || !name.chars().all(is_name_char)) {
                return Err(Error::InvalidSelector(s.to_string()));
            }
            match sigil {
                None if name == "*" => {}
                None => tag = Some(name.to_ascii_lowercase()),
                Some('.') => classes.push(name.to_string()),
                Some(_) => {
                    if id.replace(name.to_string()).is_some() {
                        return Err(Error::InvalidSelector(s.to_string()));
                    }
                }
            }
            rest = &body[end..];
            first = false;
        }

        Ok(Self { tag, id, classes })
    }

    /// Whether `element` matches every part of this selector.
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag != *tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.dom_id() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| element.has_class(c))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{tag}")?,
            None if self.id.is_none() && self.classes.is_empty() => write!(f, "*")?,
            None => {}
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}
