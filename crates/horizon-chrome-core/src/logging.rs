//! Logging facilities for Horizon Chrome.
//!
//! Horizon Chrome uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_chrome=debug")
//!         .init();
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Chrome policy decisions.
    pub const POLICY: &str = "horizon_chrome_core::policy";
    /// Signal emission.
    pub const SIGNAL: &str = "horizon_chrome_core::signal";
    /// Controller triggers and effects.
    pub const CONTROLLER: &str = "horizon_chrome::controller";
    /// Native message translation.
    pub const NATIVE: &str = "horizon_chrome::native";
    /// Platform collaborators (frame backend, dialogs, OS queries).
    pub const PLATFORM: &str = "horizon_chrome::platform";
}
