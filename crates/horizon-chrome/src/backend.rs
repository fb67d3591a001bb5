//! The native-frame collaborator.
//!
//! A [`FrameBackend`] owns everything that touches the platform's window
//! frame: metrics, frameless registration, colorization queries, backdrop
//! effects and the content-margin override. The controller never reaches
//! the native window handle through any other path.

use horizon_chrome_core::{ChromeResult, Color, Margins, ThemeState};

/// Child controls of the synthetic title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleBarControl {
    /// Window icon at the left edge.
    Icon,
    Minimize,
    Maximize,
    Close,
}

impl TitleBarControl {
    /// The system buttons, which must stay clickable inside the caption area.
    pub const SYSTEM_BUTTONS: [TitleBarControl; 3] = [
        TitleBarControl::Minimize,
        TitleBarControl::Maximize,
        TitleBarControl::Close,
    ];

    /// Stylesheet object name of the control's widget.
    pub fn object_name(self) -> &'static str {
        match self {
            Self::Icon => "iconButton",
            Self::Minimize => "minimizeButton",
            Self::Maximize => "maximizeButton",
            Self::Close => "closeButton",
        }
    }
}

/// Native-frame operations used by the chrome controller.
pub trait FrameBackend {
    /// Height of the system title bar in logical pixels.
    ///
    /// With `enlarged` set, the resize frame and padded border are included,
    /// which is the space a customized title bar has to reserve.
    fn title_bar_height(&self, enlarged: bool) -> u32;

    /// Take over the window's non-client area.
    fn register_frameless(&mut self) -> ChromeResult<()>;

    /// Give the non-client area back to the system.
    fn unregister_frameless(&mut self) -> ChromeResult<()>;

    /// Controls inside the caption that must receive input instead of
    /// starting a window drag.
    fn set_input_transparent_controls(&mut self, controls: &[TitleBarControl]);

    /// Whether the user shows the accent color on title bars and borders.
    fn is_colorization_enabled(&self) -> bool;

    /// The current colorization color.
    fn colorization_color(&self) -> Color;

    /// Turn the backdrop blur on or off. `tint` is blended over the blur.
    fn set_blur_effect(&mut self, enabled: bool, tint: Color) -> ChromeResult<()>;

    /// Whether the OS-wide transparency effect is on.
    fn is_transparency_effect_enabled(&self) -> bool;

    /// Reserve space at the window edges without a native frame.
    fn set_content_margins(&mut self, margins: Margins) -> ChromeResult<()>;

    /// Ask the platform to re-query the non-client metrics now.
    fn notify_frame_changed(&mut self) -> ChromeResult<()>;
}

/// Read the current theme state from a frame backend.
pub fn query_theme(frame: &dyn FrameBackend) -> ThemeState {
    ThemeState::new(frame.colorization_color(), frame.is_colorization_enabled())
}
