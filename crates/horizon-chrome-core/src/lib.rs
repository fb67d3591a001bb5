//! Core types for Horizon Chrome.
//!
//! This crate holds everything about custom window chrome that can be
//! expressed without a live window:
//!
//! - **Window state**: the mode (normal, minimized, maximized, full screen)
//!   and activation of the host window
//! - **Options and capability**: user toggles and the OS capability flags
//! - **Theme state**: the system colorization color and whether it is enabled
//! - **Chrome policy**: the pure function deciding borders and title bar colors
//! - **Signals**: a small direct-invocation signal/slot type
//!
//! # Policy Example
//!
//! ```
//! use horizon_chrome_core::{
//!     decide, ChromeOptions, Color, PlatformCapability, ThemeState, WindowMode, WindowState,
//! };
//!
//! let state = WindowState::new(WindowMode::Normal, true);
//! let options = ChromeOptions::default().with_extend_to_title_bar(false);
//! let theme = ThemeState::new(Color::from_hex("#336699").unwrap(), true);
//! let capability = PlatformCapability::new(true, true);
//!
//! let decision = decide(state, &options, &theme, capability);
//! assert!(decision.draw_border);
//! assert_eq!(decision.title_bar_foreground, Color::WHITE);
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod options;
pub mod policy;
pub mod signal;
pub mod state;
pub mod theme;

pub use color::Color;
pub use error::{ChromeError, ChromeResult};
pub use geometry::{Margins, Point, Rect, Size};
pub use options::{ChromeOption, ChromeOptions, OsVersion, PlatformCapability};
pub use policy::{
    BorderEvaluation, ChromeDecision, DEFAULT_ACTIVE_BORDER_COLOR, DEFAULT_INACTIVE_BORDER_COLOR,
    INACTIVE_TITLE_TEXT_COLOR, decide, draw_border,
};
pub use signal::{ConnectionId, Signal};
pub use state::{WindowMode, WindowState};
pub use theme::ThemeState;
