//! Presses — live events → wire records.
//!
//! A press is the pointer-agnostic activation gesture (mouse, touch,
//! pen, keyboard activation, or an assistive-technology virtual click).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::element::{ElementRef, ResolveName};
use crate::events::Modifiers;

/// Phase of a press interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PressEventKind {
    /// Pointer went down on the element.
    PressStart,
    /// Press ended (released or moved off the element).
    PressEnd,
    /// Pointer released over the element.
    PressUp,
    /// Completed press (start + up over the same element).
    Press,
}

impl PressEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PressEventKind::PressStart => "pressstart",
            PressEventKind::PressEnd => "pressend",
            PressEventKind::PressUp => "pressup",
            PressEventKind::Press => "press",
        }
    }
}

impl fmt::Display for PressEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input modality that produced the press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
    Mouse,
    Pen,
    Touch,
    Keyboard,
    Virtual,
}

/// Live press delivered by the component layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressEvent {
    pub kind: PressEventKind,
    pub pointer_type: PointerType,
    pub target: Option<ElementRef>,
    pub modifiers: Modifiers,
}

impl PressEvent {
    pub fn new(kind: PressEventKind, pointer_type: PointerType) -> Self {
        Self {
            kind,
            pointer_type,
            target: None,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_target(mut self, target: ElementRef) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Transport-safe snapshot of a press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SerializedPressEvent {
    #[serde(rename = "type")]
    pub kind: PressEventKind,

    pub pointer_type: PointerType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(flatten)]
    pub modifiers: Modifiers,
}

/// Snapshot `event` into a transport-safe record.
pub fn serialize_press_event(
    event: &PressEvent,
    resolver: &dyn ResolveName,
) -> SerializedPressEvent {
    SerializedPressEvent {
        kind: event.kind,
        pointer_type: event.pointer_type,
        target: resolver.resolve(event.target.as_ref()),
        modifiers: event.modifiers,
    }
}
