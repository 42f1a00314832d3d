//! Core systems for Lumen Typeahead.
//!
//! This crate provides the foundational plumbing for the Lumen Typeahead
//! widget behavior:
//!
//! - **Signal/Slot System**: Type-safe notification of field state changes
//! - **Logging**: `tracing` target constants for per-subsystem filtering
//!
//! The field behavior is single-threaded and cooperative: everything runs
//! synchronously on the thread that delivers host callbacks, so signals
//! dispatch directly with no event loop or queued invocations.
//!
//! # Signal/Slot Example
//!
//! ```
//! use lumen_typeahead_core::Signal;
//!
//! // Create a signal that notifies when the field text changes
//! let text_changed = Signal::<String>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! // Emit the signal
//! text_changed.emit("iPhone 5".to_string());
//!
//! // Disconnect when done
//! text_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
