//! Normalizing platform messages and toolkit events into controller triggers.
//!
//! Translation never consumes a message. Whoever feeds the adapter must still
//! pass every message on to the default window procedure (with a winit
//! message hook, return `false`).

use horizon_chrome_core::Color;
use horizon_chrome_core::logging::targets;

use crate::controller::ChromeTrigger;

/// Sent to top-level windows after the accent color or its opacity changed.
pub const WM_DWMCOLORIZATIONCOLORCHANGED: u32 = 0x0320;
/// Sent when the window moves to a monitor with a different DPI.
pub const WM_DPICHANGED: u32 = 0x02E0;
/// Sent when the non-client area must be painted.
pub const WM_NCPAINT: u32 = 0x0085;

/// A raw window message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeMessage {
    pub message: u32,
    pub wparam: usize,
    pub lparam: isize,
}

impl NativeMessage {
    pub const fn new(message: u32, wparam: usize, lparam: isize) -> Self {
        Self {
            message,
            wparam,
            lparam,
        }
    }
}

/// A platform notification the chrome reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeNotification {
    /// New colorization color, taken from the message as `0xAARRGGBB`.
    ColorizationChanged(Color),
    DpiChanged,
    NonClientPaint,
}

impl NativeNotification {
    /// The controller trigger for this notification.
    ///
    /// The colorization message only carries the color, so whether
    /// colorization is enabled has to be supplied by the caller. It is only
    /// queried for colorization changes.
    pub fn into_trigger<F>(self, colorization_enabled: F) -> ChromeTrigger
    where
        F: FnOnce() -> bool,
    {
        match self {
            Self::ColorizationChanged(color) => ChromeTrigger::ColorizationChanged {
                color,
                enabled: colorization_enabled(),
            },
            Self::DpiChanged => ChromeTrigger::DpiChanged,
            Self::NonClientPaint => ChromeTrigger::NonClientPaint,
        }
    }
}

/// Filters raw window messages down to chrome notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeMessageAdapter;

impl NativeMessageAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Translate one message.
    ///
    /// Messages are only interpreted while the title bar is customized;
    /// with the native title bar the system handles all of them.
    pub fn translate(&self, msg: &NativeMessage, customize_title_bar: bool) -> Option<NativeNotification> {
        if !customize_title_bar {
            return None;
        }

        let notification = match msg.message {
            WM_DWMCOLORIZATIONCOLORCHANGED => {
                NativeNotification::ColorizationChanged(Color::from_argb(msg.wparam as u32))
            }
            WM_DPICHANGED => NativeNotification::DpiChanged,
            WM_NCPAINT => NativeNotification::NonClientPaint,
            _ => return None,
        };
        tracing::trace!(
            target: targets::NATIVE,
            message = format_args!("{:#06x}", msg.message),
            ?notification,
            "translated native message"
        );
        Some(notification)
    }
}

/// Toolkit-level window events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolkitEvent {
    /// Minimized, maximized, restored or full screen changed.
    WindowStateChanged,
    /// The native window was recreated and has a new handle.
    WindowIdChanged,
    Activated,
    Deactivated,
}

impl ToolkitEvent {
    pub fn trigger(self) -> ChromeTrigger {
        match self {
            Self::WindowStateChanged => ChromeTrigger::WindowStateChanged,
            Self::WindowIdChanged => ChromeTrigger::WindowIdChanged,
            Self::Activated | Self::Deactivated => ChromeTrigger::ActivationChanged,
        }
    }
}
