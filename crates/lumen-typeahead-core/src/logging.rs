//! Logging facilities for Lumen Typeahead.
//!
//! Lumen Typeahead uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! All events are emitted under the targets listed in [`targets`], so
//! individual subsystems can be filtered with `tracing` directives, e.g.
//! `lumen_typeahead::keyboard=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "lumen_typeahead_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lumen_typeahead_core::signal";
    /// Field control target.
    pub const FIELD: &str = "lumen_typeahead::field";
    /// Layout policy target.
    pub const LAYOUT: &str = "lumen_typeahead::layout";
    /// Keyboard event and animation coordination target.
    pub const KEYBOARD: &str = "lumen_typeahead::keyboard";
}
