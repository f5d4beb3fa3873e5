//! Memoizing adapters between serialized-event callbacks and component
//! event-handler props.
//!
//! A component exposes `on_focus`-style props that want a handler for
//! the *live* event; the host supplies (or omits) a callback for the
//! *serialized* record. [`HandlerCell`] bridges the two: no callback
//! means no handler at all, and an unchanged callback means the exact
//! same handler allocation as last time, so prop diffing by reference
//! identity does not re-subscribe.

use std::fmt;
use std::rc::Rc;

use crate::element::ResolveName;
use crate::events::{
    serialize_focus_event, serialize_keyboard_event, serialize_press_event, FocusEvent,
    KeyboardEvent, PressEvent, SerializedFocusEvent, SerializedKeyboardEvent,
    SerializedPressEvent,
};
use crate::memo::MemoCell;

/// Callback receiving the serialized record on the host side of a prop.
pub type EventCallback<S> = Rc<dyn Fn(&S)>;

/// Handler shape expected by a component's native event prop.
pub type EventHandler<E> = Rc<dyn Fn(&E)>;

/// Memoizing adapter for one event family.
///
/// Owns the resolver and the family serializer; caches the last wrapper
/// keyed by the callback's allocation. Single-threaded like the dispatch
/// cycle it serves.
pub struct HandlerCell<E: 'static, S: 'static> {
    family: &'static str,
    resolver: Rc<dyn ResolveName>,
    serialize: fn(&E, &dyn ResolveName) -> S,
    cell: MemoCell<EventCallback<S>, EventHandler<E>>,
}

impl HandlerCell<FocusEvent, SerializedFocusEvent> {
    /// Adapter for focus transition props.
    pub fn focus(resolver: Rc<dyn ResolveName>) -> Self {
        Self::with_serializer("focus", resolver, serialize_focus_event)
    }
}

impl HandlerCell<KeyboardEvent, SerializedKeyboardEvent> {
    /// Adapter for keyboard props.
    pub fn keyboard(resolver: Rc<dyn ResolveName>) -> Self {
        Self::with_serializer("keyboard", resolver, serialize_keyboard_event)
    }
}

impl HandlerCell<PressEvent, SerializedPressEvent> {
    /// Adapter for press props.
    pub fn press(resolver: Rc<dyn ResolveName>) -> Self {
        Self::with_serializer("press", resolver, serialize_press_event)
    }
}

impl<E, S> HandlerCell<E, S> {
    fn with_serializer(
        family: &'static str,
        resolver: Rc<dyn ResolveName>,
        serialize: fn(&E, &dyn ResolveName) -> S,
    ) -> Self {
        Self {
            family,
            resolver,
            serialize,
            cell: MemoCell::new(),
        }
    }

    /// Wrap `callback` into the component-facing handler.
    ///
    /// `None` callback returns `None` without constructing anything, so
    /// the component sees an unambiguous "no handler". The returned
    /// handler serializes the live event and invokes the callback with
    /// the record, synchronously, within the dispatch turn. While the
    /// callback allocation is unchanged, the same handler allocation is
    /// returned.
    pub fn handler(&self, callback: Option<EventCallback<S>>) -> Option<EventHandler<E>> {
        let callback = callback?;
        let deps = Rc::clone(&callback);
        let resolver = Rc::clone(&self.resolver);
        let serialize = self.serialize;
        let family = self.family;
        Some(self.cell.get_or_insert_with(deps, move || {
            tracing::debug!(family, "building serialized-event handler");
            let handler: EventHandler<E> = Rc::new(move |event: &E| {
                tracing::trace!(family, "forwarding serialized event to host callback");
                let record = serialize(event, resolver.as_ref());
                callback(&record);
            });
            handler
        }))
    }
}

impl<E, S> fmt::Debug for HandlerCell<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerCell")
            .field("family", &self.family)
            .field("cell", &self.cell)
            .finish_non_exhaustive()
    }
}
