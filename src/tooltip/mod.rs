//! Delegated tooltip layer.
//!
//! Any element carrying the marker class (`.app-tippy` by default) gets its
//! `title` hint shown in one shared tooltip widget instead of the browser's
//! native tooltip. While the widget is shown the hint lives in
//! [`MANAGED_HINT_ATTR`] so the two never render at once; dismissal puts it
//! back into `title`.

mod delegate;
pub mod hint;
mod instance;

pub use delegate::TooltipController;
pub use hint::HintState;
pub use instance::TooltipInstance;

use crate::dom::{Document, ElementId};
use serde::{Deserialize, Serialize};

/// The standard hint attribute.
pub const NATIVE_HINT_ATTR: &str = "title";
/// Where the hint is parked while the managed tooltip is shown.
pub const MANAGED_HINT_ATTR: &str = "data-tippy-value";
/// Marker selector for participating elements.
pub const DEFAULT_TARGET: &str = ".app-tippy";

/// Side of the reference element the widget is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// Interactions that show the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    MouseEnter,
    Focus,
    Click,
}

/// Where the shared widget's elements are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppendTarget {
    /// The element the delegate is attached to.
    #[default]
    Root,
    /// The document body, regardless of the delegation root.
    Body,
}

impl AppendTarget {
    /// Parent element for the widget of a delegate attached to `root`.
    pub fn container(self, doc: &Document, root: ElementId) -> ElementId {
        match self {
            Self::Root => root,
            Self::Body => doc.body(),
        }
    }
}

/// Fixed configuration of a delegated tooltip, set once at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipProps {
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default)]
    pub placement: Placement,
    #[serde(default)]
    pub append_to: AppendTarget,
    /// Whether touch input may show the tooltip.
    #[serde(default)]
    pub touch: bool,
    #[serde(default = "default_triggers")]
    pub triggers: Vec<Trigger>,
}

fn default_target() -> String {
    DEFAULT_TARGET.into()
}

fn default_triggers() -> Vec<Trigger> {
    vec![Trigger::MouseEnter, Trigger::Focus]
}

impl Default for TooltipProps {
    fn default() -> Self {
        Self {
            target: default_target(),
            placement: Placement::Right,
            append_to: AppendTarget::Root,
            touch: false,
            triggers: default_triggers(),
        }
    }
}

impl TooltipProps {
    pub fn has_trigger(&self, trigger: Trigger) -> bool {
        self.triggers.contains(&trigger)
    }
}
