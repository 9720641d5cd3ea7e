//! Logging facilities for Horizon Dropdown.
//!
//! Horizon Dropdown uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_dropdown=trace")
//!         .init();
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_dropdown_core::signal";
    /// Document-level event hub target.
    pub const DOCUMENT: &str = "horizon_dropdown_core::document";
    /// Dropdown widget target.
    pub const DROPDOWN: &str = "horizon_dropdown::dropdown";
    /// Filter engine target.
    pub const FILTER: &str = "horizon_dropdown::filter";
    /// Panel placement target.
    pub const PLACEMENT: &str = "horizon_dropdown::placement";
}
