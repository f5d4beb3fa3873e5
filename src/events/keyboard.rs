//! Key presses — live events → wire records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::element::{ElementRef, ResolveName};
use crate::events::Modifiers;

/// Category of a key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardEventKind {
    KeyDown,
    KeyUp,
}

impl KeyboardEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyboardEventKind::KeyDown => "keydown",
            KeyboardEventKind::KeyUp => "keyup",
        }
    }
}

impl fmt::Display for KeyboardEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Live key transition delivered by the component layer.
///
/// `key` is the logical key value ("a", "Enter", "ArrowDown"); `code`
/// is the physical key position when the host reports one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub kind: KeyboardEventKind,
    pub target: Option<ElementRef>,
    pub key: String,
    pub code: Option<String>,
    pub repeat: bool,
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    pub fn new(kind: KeyboardEventKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            target: None,
            key: key.into(),
            code: None,
            repeat: false,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_target(mut self, target: ElementRef) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }
}

/// Transport-safe snapshot of a key transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SerializedKeyboardEvent {
    #[serde(rename = "type")]
    pub kind: KeyboardEventKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    pub key: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub repeat: bool,

    #[serde(flatten)]
    pub modifiers: Modifiers,
}

/// Snapshot `event` into a transport-safe record.
pub fn serialize_keyboard_event(
    event: &KeyboardEvent,
    resolver: &dyn ResolveName,
) -> SerializedKeyboardEvent {
    SerializedKeyboardEvent {
        kind: event.kind,
        target: resolver.resolve(event.target.as_ref()),
        key: event.key.clone(),
        code: event.code.clone(),
        repeat: event.repeat,
        modifiers: event.modifiers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::AttributeNameResolver;

    #[test]
    fn key_and_modifiers_are_carried() {
        let event = KeyboardEvent::new(KeyboardEventKind::KeyDown, "Enter")
            .with_target(ElementRef::new().with_name("search-input"))
            .with_code("Enter")
            .with_modifiers(Modifiers::shift());

        let serialized = serialize_keyboard_event(&event, &AttributeNameResolver::default());
        assert_eq!(serialized.kind, KeyboardEventKind::KeyDown);
        assert_eq!(serialized.target.as_deref(), Some("search-input"));
        assert_eq!(serialized.key, "Enter");
        assert_eq!(serialized.code.as_deref(), Some("Enter"));
        assert!(serialized.modifiers.shift_key);
        assert!(!serialized.repeat);
    }

    #[test]
    fn wire_form_flattens_modifiers_and_omits_absent_fields() {
        let event = KeyboardEvent::new(KeyboardEventKind::KeyUp, "a");

        let serialized = serialize_keyboard_event(&event, &AttributeNameResolver::default());
        let json = serde_json::to_value(&serialized).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object["type"], "keyup");
        assert_eq!(object["key"], "a");
        assert_eq!(object["shiftKey"], false);
        assert!(!object.contains_key("target"));
        assert!(!object.contains_key("code"));
    }
}
