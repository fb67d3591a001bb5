//! Application-drawn window chrome for Horizon.
//!
//! Horizon Chrome replaces the operating system's title bar with one drawn
//! by the application, while keeping system theming, DPI changes and
//! backdrop effects (blur and acrylic) consistent with the window state.
//!
//! # Architecture
//!
//! - [`ChromeController`] is a state machine. Every input (user toggle,
//!   window-state change, system notification) is a [`ChromeTrigger`]; the
//!   controller plans a list of [`ChromeEffect`]s and executes them.
//! - The native frame is reached through the [`FrameBackend`] trait and the
//!   GUI toolkit through [`WindowHost`]. A Windows backend built on winit is
//!   available in [`platform`].
//! - [`TitleBarView`] and [`BorderRenderer`] turn a chrome decision into a
//!   stylesheet, icons and border strokes.
//! - [`NativeMessageAdapter`] and [`toolkit`] normalize raw platform
//!   messages and winit events into triggers.
//!
//! # Example
//!
//! ```ignore
//! use horizon_chrome::{ChromeConfig, ChromeController, SharedFrameFlags};
//! use horizon_chrome::platform::{self, windows::WindowsFrameBackend};
//!
//! let flags = SharedFrameFlags::new();
//! let mut frame = WindowsFrameBackend::new(window.clone(), flags.clone());
//! let theme = horizon_chrome::query_theme(&frame);
//!
//! let mut controller = ChromeController::new(
//!     ChromeConfig::default(),
//!     platform::detect_capability(),
//!     theme,
//!     flags,
//! );
//! controller.initialize(&mut frame, &mut host);
//!
//! // Later, from the event loop:
//! if let Some(trigger) = horizon_chrome::toolkit::trigger_for_window_event(&event, &mut tracker, &window) {
//!     controller.handle(trigger, &mut frame, &mut host);
//! }
//! ```

pub mod backend;
pub mod border;
pub mod config;
pub mod controller;
pub mod flags;
pub mod frame;
pub mod host;
pub mod native;
pub mod platform;
pub mod title_bar;
pub mod toolkit;

pub use backend::{FrameBackend, TitleBarControl, query_theme};
pub use border::{BORDER_WIDTH, BorderPainter, BorderRenderer};
pub use config::ChromeConfig;
pub use controller::{ChromeController, ChromeEffect, ChromeTrigger, TintSource};
pub use flags::{FrameFlag, FrameFlags, SharedFrameFlags};
pub use frame::{ChromeHitTestResult, FramelessHitTester};
pub use host::{Advisory, WindowBackground, WindowHost};
pub use native::{NativeMessage, NativeMessageAdapter, NativeNotification, ToolkitEvent};
pub use title_bar::{ButtonIcon, IconSet, TitleBarAppearance, TitleBarMetrics, TitleBarView};

pub use horizon_chrome_core::{
    BorderEvaluation, ChromeDecision, ChromeError, ChromeOption, ChromeOptions, ChromeResult,
    Color, Margins, PlatformCapability, Point, Rect, Size, ThemeState, WindowMode, WindowState,
    decide,
};
