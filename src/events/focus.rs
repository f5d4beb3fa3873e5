//! Focus transitions — live events → wire records.
//!
//! A focus transition names up to two elements: the one the event fired
//! on (`target`) and its counterpart in the transition
//! (`related_target`, the element focus came from or is moving to).
//! Either may already be gone by dispatch time; the serializer maps an
//! unresolvable element to an omitted field.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::element::{ElementRef, ResolveName};

/// Category of a focus transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FocusEventKind {
    /// Element gained focus (does not bubble).
    Focus,
    /// Element lost focus (does not bubble).
    Blur,
    /// Focus entered the element or a descendant.
    FocusIn,
    /// Focus left the element or a descendant.
    FocusOut,
}

impl FocusEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FocusEventKind::Focus => "focus",
            FocusEventKind::Blur => "blur",
            FocusEventKind::FocusIn => "focusin",
            FocusEventKind::FocusOut => "focusout",
        }
    }
}

impl fmt::Display for FocusEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Live focus transition delivered by the component layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusEvent {
    pub kind: FocusEventKind,
    pub target: Option<ElementRef>,
    pub related_target: Option<ElementRef>,
}

impl FocusEvent {
    pub fn new(kind: FocusEventKind) -> Self {
        Self {
            kind,
            target: None,
            related_target: None,
        }
    }

    pub fn with_target(mut self, target: ElementRef) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_related_target(mut self, related_target: ElementRef) -> Self {
        self.related_target = Some(related_target);
        self
    }
}

/// Transport-safe snapshot of a focus transition.
///
/// Single-use: built fresh per event, handed to the host callback,
/// discarded. `target`/`related_target` are omitted from the wire form
/// when the corresponding element has no resolvable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SerializedFocusEvent {
    #[serde(rename = "type")]
    pub kind: FocusEventKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_target: Option<String>,
}

/// Snapshot `event` into a transport-safe record.
///
/// Pure: resolution failures surface as omitted fields, the kind is
/// copied verbatim, and the event is left untouched.
pub fn serialize_focus_event(
    event: &FocusEvent,
    resolver: &dyn ResolveName,
) -> SerializedFocusEvent {
    SerializedFocusEvent {
        kind: event.kind,
        target: resolver.resolve(event.target.as_ref()),
        related_target: resolver.resolve(event.related_target.as_ref()),
    }
}
