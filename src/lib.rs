//! # UI Event Bridge - Serialized Interaction Events for Remote Hosts
//!
//! Serialization layer between a component library's live interaction
//! events and a remote application host that cannot hold live references
//! to UI nodes. Provides:
//! - Flat, transport-safe records for focus, keyboard, and press events
//! - Attribute-based element identification (name, then id)
//! - Memoizing handler adapters with pointer-stable wrappers
//! - JSON wire encoding and schema discoverability for the host protocol
//!
//! ## Event flow
//!
//! ```text
//!   component prop         handlers::HandlerCell           host boundary
//!  ┌──────────────┐   ┌─────────────────────────────┐   ┌──────────────┐
//!  │ live event   │ → │ serialize_* via ResolveName │ → │ callback     │
//!  │ (FocusEvent) │   │ (memoized per callback)     │   │ (JSON-ready) │
//!  └──────────────┘   └─────────────────────────────┘   └──────────────┘
//! ```
//!
//! Serialization is pure and synchronous: records are built and handed to
//! the callback within the same dispatch turn as the triggering event,
//! before the underlying element references are recycled by the host UI.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod element;
pub mod events;
pub mod handlers;
pub mod memo;
pub mod types;

// Internal utilities
pub mod observability;

pub use types::{Config, Error, Result};
