//! The GUI toolkit collaborator.

use horizon_chrome_core::{ChromeOption, Color, Margins, WindowState};

use crate::title_bar::TitleBarAppearance;

/// How the toolkit fills the window background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowBackground {
    /// The toolkit's normal solid window color.
    #[default]
    Opaque,
    /// Nothing painted, so a backdrop effect shows through.
    Transparent,
}

/// An informational message for the user. Never blocks the action that
/// raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub title: String,
    pub text: String,
}

/// Toolkit operations used by the chrome controller.
///
/// All methods are called on the event-loop thread.
pub trait WindowHost {
    /// Current mode and activation of the window.
    fn window_state(&self) -> WindowState;

    /// Schedule a repaint of the whole window.
    fn request_repaint(&mut self);

    /// Inset the root layout, leaving room for the application border.
    fn set_content_inset(&mut self, inset: Margins);

    /// Show or hide the synthetic title bar.
    fn set_title_bar_visible(&mut self, visible: bool);

    /// Apply title bar icons and stylesheet.
    fn apply_title_bar(&mut self, appearance: &TitleBarAppearance);

    fn set_window_background(&mut self, background: WindowBackground);

    fn set_maximize_enabled(&mut self, enabled: bool);

    /// Fix the window size (no resize handles, no maximize).
    fn set_fixed_size(&mut self, fixed: bool);

    /// Re-show the window so a changed size constraint takes effect.
    fn show(&mut self);

    /// Enable or disable the user control for an option.
    fn set_option_available(&mut self, option: ChromeOption, available: bool);

    /// Modal color picker with alpha. `None` when the user cancels.
    fn pick_color(&mut self, initial: Color, title: &str) -> Option<Color>;

    fn show_advisory(&mut self, advisory: &Advisory);
}
