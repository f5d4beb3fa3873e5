//! Interaction events and their transport-safe records.
//!
//! Each family (focus, keyboard, press) pairs a live event type with a
//! flat serialized record and a pure serializer. Records replace live
//! element references with resolved string identifiers and use camelCase
//! field names on the wire, matching the host protocol. Optional fields
//! are omitted when absent, never encoded as null: the host reads a
//! missing key as "no identifiable element", which is different from an
//! element whose identifier is the empty string.

use schemars::schema::RootSchema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::Result;

pub mod focus;
pub mod keyboard;
pub mod press;

pub use focus::{serialize_focus_event, FocusEvent, FocusEventKind, SerializedFocusEvent};
pub use keyboard::{
    serialize_keyboard_event, KeyboardEvent, KeyboardEventKind, SerializedKeyboardEvent,
};
pub use press::{serialize_press_event, PointerType, PressEvent, PressEventKind, SerializedPressEvent};

/// Keyboard modifier snapshot carried by keyboard and press events.
///
/// Flattened into serialized records as `shiftKey`/`ctrlKey`/`metaKey`/
/// `altKey`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Modifiers {
    pub shift_key: bool,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub alt_key: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift_key: true,
            ..Self::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl_key: true,
            ..Self::default()
        }
    }
}

/// Records that cross the host boundary.
///
/// `to_wire` is the JSON text encoding; `wire_schema` exposes the JSON
/// Schema so hosts can discover the record shape without reading Rust.
pub trait WireRecord: Serialize + JsonSchema {
    /// Encode for the process boundary.
    fn to_wire(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// JSON Schema of this record's wire form.
    fn wire_schema() -> RootSchema
    where
        Self: Sized,
    {
        schemars::gen::SchemaGenerator::default().into_root_schema_for::<Self>()
    }
}

impl WireRecord for SerializedFocusEvent {}
impl WireRecord for SerializedKeyboardEvent {}
impl WireRecord for SerializedPressEvent {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_flatten_to_camel_case() {
        let json = serde_json::to_value(Modifiers::shift()).unwrap();
        assert_eq!(json["shiftKey"], true);
        assert_eq!(json["ctrlKey"], false);
        assert_eq!(json["metaKey"], false);
        assert_eq!(json["altKey"], false);
    }

    #[test]
    fn wire_schema_names_the_record() {
        let schema = SerializedFocusEvent::wire_schema();
        let title = schema.schema.metadata.as_ref().and_then(|m| m.title.clone());
        assert_eq!(title.as_deref(), Some("SerializedFocusEvent"));
    }
}
