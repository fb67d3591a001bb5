//! Bridging winit windows and events to the chrome controller.
//!
//! winit has no dedicated "window state changed" event, so minimize,
//! maximize and restore are detected by comparing the window mode after
//! every resize with the last one seen.
//!
//! ```ignore
//! let mut tracker = WindowStateTracker::new();
//!
//! // In ApplicationHandler::window_event:
//! if let Some(trigger) = trigger_for_window_event(&event, &mut tracker, &window) {
//!     controller.handle(trigger, &mut frame, &mut host);
//! }
//! ```

use horizon_chrome_core::logging::targets;
use horizon_chrome_core::{WindowMode, WindowState};
use winit::event::WindowEvent;
use winit::window::Window;

use crate::controller::ChromeTrigger;
use crate::native::ToolkitEvent;

/// The current mode of a winit window.
///
/// Platforms that cannot report minimization are treated as not minimized.
pub fn window_mode(window: &Window) -> WindowMode {
    WindowMode::from_flags(
        window.is_minimized().unwrap_or(false),
        window.is_maximized(),
        window.fullscreen().is_some(),
    )
}

/// Mode and activation of a winit window.
pub fn window_state(window: &Window) -> WindowState {
    WindowState::new(window_mode(window), window.has_focus())
}

/// Remembers the last window mode to turn resizes into state changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowStateTracker {
    last: Option<WindowMode>,
}

impl WindowStateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known mode.
    pub fn with_mode(mode: WindowMode) -> Self {
        Self { last: Some(mode) }
    }

    /// Record `mode`. Returns true if it differs from the last one recorded.
    ///
    /// The first observation only establishes the baseline.
    pub fn observe(&mut self, mode: WindowMode) -> bool {
        let changed = self.last.is_some_and(|last| last != mode);
        self.last = Some(mode);
        changed
    }

    pub fn last(&self) -> Option<WindowMode> {
        self.last
    }
}

/// Classify a window event, given the window's mode after the event.
///
/// `current_mode` is only called for events that can change the mode.
pub fn toolkit_event<F>(event: &WindowEvent, tracker: &mut WindowStateTracker, current_mode: F) -> Option<ToolkitEvent>
where
    F: FnOnce() -> WindowMode,
{
    match event {
        WindowEvent::Focused(true) => Some(ToolkitEvent::Activated),
        WindowEvent::Focused(false) => Some(ToolkitEvent::Deactivated),
        WindowEvent::Resized(_) => tracker
            .observe(current_mode())
            .then_some(ToolkitEvent::WindowStateChanged),
        _ => None,
    }
}

/// The controller trigger for a winit window event, if any.
pub fn trigger_for_window_event(
    event: &WindowEvent,
    tracker: &mut WindowStateTracker,
    window: &Window,
) -> Option<ChromeTrigger> {
    let trigger = match event {
        WindowEvent::ScaleFactorChanged { .. } => Some(ChromeTrigger::DpiChanged),
        _ => toolkit_event(event, tracker, || window_mode(window)).map(ToolkitEvent::trigger),
    };
    if let Some(trigger) = trigger {
        tracing::trace!(target: targets::NATIVE, ?trigger, "window event");
    }
    trigger
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn test_focus_events() {
        let mut tracker = WindowStateTracker::new();
        assert_eq!(
            toolkit_event(&WindowEvent::Focused(true), &mut tracker, || WindowMode::Normal),
            Some(ToolkitEvent::Activated)
        );
        assert_eq!(
            toolkit_event(&WindowEvent::Focused(false), &mut tracker, || WindowMode::Normal),
            Some(ToolkitEvent::Deactivated)
        );
    }

    #[test]
    fn test_resize_reports_mode_changes_only() {
        let mut tracker = WindowStateTracker::with_mode(WindowMode::Normal);
        let resized = WindowEvent::Resized(PhysicalSize::new(800, 600));

        assert_eq!(toolkit_event(&resized, &mut tracker, || WindowMode::Normal), None);
        assert_eq!(
            toolkit_event(&resized, &mut tracker, || WindowMode::Maximized),
            Some(ToolkitEvent::WindowStateChanged)
        );
        assert_eq!(toolkit_event(&resized, &mut tracker, || WindowMode::Maximized), None);
        assert_eq!(tracker.last(), Some(WindowMode::Maximized));
    }

    #[test]
    fn test_first_observation_is_baseline() {
        let mut tracker = WindowStateTracker::new();
        assert!(!tracker.observe(WindowMode::Maximized));
        assert!(tracker.observe(WindowMode::Normal));
    }
}
