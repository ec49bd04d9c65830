//! A headless scroll-visibility engine.
//!
//! For adapter-level utilities (an in-memory document, an event-driven controller), see the
//! `emergence-adapter` crate.
//!
//! This crate answers one question on a throttled schedule: is each tracked element currently
//! within the visible scrollable region? It covers the geometry (absolute element boxes, window
//! or container viewports), the cushioned overlap test, a per-element state machine written back
//! to a marker attribute, and the single-timer throttle that coalesces scroll/resize/load events.
//!
//! It is UI-agnostic. A browser or layout layer is expected to provide, via [`Document`]:
//! - element offsets, sizes and offset parents
//! - viewport size and scroll offsets
//! - attribute reads/writes for the marker attribute
//! - timestamps (`now_ms`) for the throttle
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod document;
mod engine;
mod geometry;
mod handheld;
mod key;
mod options;
pub mod parse;
mod state;
mod throttle;
mod types;
mod visibility;


pub use document::Document;
pub use engine::Emergence;
pub use geometry::{element_bounds, is_ancestor_hidden, viewport_scroll, viewport_size};
pub use handheld::is_handheld_user_agent;
pub use options::{
    Callback, DEFAULT_ELEM_CUSHION, DEFAULT_MARKER, DEFAULT_ROOT_CLASS, DEFAULT_THROTTLE_MS,
    EmergenceOptions, RawOptions, RawValue,
};
pub use state::{ElementState, PassReport, Transition};
pub use throttle::Throttle;
pub use types::{Bounds, Edges, InitOutcome, Offsets, Point, Signal, Size, Viewport};
pub use visibility::{is_visible, overlaps, viewport_edges};

pub use key::NodeKey;
