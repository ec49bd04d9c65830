//! Adapter utilities for the `emergence` crate.
//!
//! The `emergence` crate is UI-agnostic and focuses on the visibility math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - An event-driven controller that owns the engine and its document
//! - An in-memory document for simulations, demos and tests
//!
//! This crate is intentionally framework-agnostic (no browser bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod sim;


pub use controller::Controller;
pub use sim::{NodeId, SimDocument};
