//! The chrome policy: pure decisions about borders and title bar colors.
//!
//! Everything here is a function of its arguments. The controller calls
//! [`decide`] again on every trigger instead of caching a decision, since
//! any of window state, options or theme may have moved in between.
//!
//! # Rules
//!
//! 1. A border is drawn when the platform supports themed chrome, the window
//!    is in normal mode, the frame is not preserved and the title bar is
//!    customized. The mode check can be skipped with
//!    [`BorderEvaluation::IgnoreWindowState`].
//! 2. The border is themed when it is drawn and colorization is enabled.
//! 3. The title bar is themed when the platform supports themed chrome and
//!    colorization is enabled.
//! 4. The active border uses the colorization color (or `#707070` without
//!    colorization); the inactive border is always `#aaaaaa`.
//! 5. The title bar background is transparent when the content extends under
//!    it, the colorization color when themed and active, white otherwise.
//! 6. Title text is `#999999` when inactive; otherwise white on a themed,
//!    non-extended title bar and black everywhere else.
//! 7. The title bar's top border line is only visible when the platform
//!    supports themed chrome, no window border is drawn and the window does
//!    not fill the screen.

use crate::color::Color;
use crate::logging::targets;
use crate::options::{ChromeOptions, PlatformCapability};
use crate::state::{WindowMode, WindowState};
use crate::theme::ThemeState;

/// Border color of an active window without colorization.
pub const DEFAULT_ACTIVE_BORDER_COLOR: Color = Color::rgb(0x70, 0x70, 0x70);
/// Border color of an inactive window.
pub const DEFAULT_INACTIVE_BORDER_COLOR: Color = Color::rgb(0xaa, 0xaa, 0xaa);
/// Title text color of an inactive window.
pub const INACTIVE_TITLE_TEXT_COLOR: Color = Color::rgb(0x99, 0x99, 0x99);

/// Whether the window mode takes part in the border decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderEvaluation {
    /// Only a normal-mode window gets a border.
    #[default]
    RespectWindowState,
    /// Decide as if the window were in normal mode.
    ///
    /// Used while handling a window-state change, where the margins for the
    /// new mode are chosen separately.
    IgnoreWindowState,
}

/// The derived chrome decision for one moment in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChromeDecision {
    /// Draw a 1px application border around the window.
    pub draw_border: bool,
    /// The border uses the colorization color.
    pub themed_border: bool,
    /// The title bar may use the colorization color.
    pub themed_title_bar: bool,
    /// Border color for the current activation.
    pub border_color: Color,
    /// Title bar background.
    pub title_bar_background: Color,
    /// Title text color.
    pub title_bar_foreground: Color,
    /// Color of the title bar's top border line.
    pub title_bar_border_color: Color,
}

/// Rule 1: whether the application draws its own window border.
pub fn draw_border(
    state: WindowState,
    options: &ChromeOptions,
    capability: PlatformCapability,
    evaluation: BorderEvaluation,
) -> bool {
    let mode_allows = match evaluation {
        BorderEvaluation::RespectWindowState => state.mode == WindowMode::Normal,
        BorderEvaluation::IgnoreWindowState => true,
    };
    capability.supports_themed_chrome
        && mode_allows
        && !options.preserve_frame
        && options.customize_title_bar
}

/// Compute the chrome decision.
pub fn decide(
    state: WindowState,
    options: &ChromeOptions,
    theme: &ThemeState,
    capability: PlatformCapability,
) -> ChromeDecision {
    let draw_border = draw_border(state, options, capability, BorderEvaluation::RespectWindowState);
    let themed_border = draw_border && theme.colorization_enabled;
    let themed_title_bar = capability.supports_themed_chrome && theme.colorization_enabled;

    let active_border_color = if theme.colorization_enabled {
        theme.colorization_color
    } else {
        DEFAULT_ACTIVE_BORDER_COLOR
    };
    let border_color = if state.active {
        active_border_color
    } else {
        DEFAULT_INACTIVE_BORDER_COLOR
    };

    let themed_and_active = themed_title_bar && state.active;
    let title_bar_background = if options.extend_to_title_bar {
        Color::TRANSPARENT
    } else if themed_and_active {
        theme.colorization_color
    } else {
        Color::WHITE
    };

    let title_bar_foreground = if !state.active {
        INACTIVE_TITLE_TEXT_COLOR
    } else if themed_title_bar && !options.extend_to_title_bar {
        Color::WHITE
    } else {
        Color::BLACK
    };

    let title_bar_border_color =
        if !capability.supports_themed_chrome || draw_border || state.mode.fills_screen() {
            Color::TRANSPARENT
        } else {
            border_color
        };

    let decision = ChromeDecision {
        draw_border,
        themed_border,
        themed_title_bar,
        border_color,
        title_bar_background,
        title_bar_foreground,
        title_bar_border_color,
    };
    tracing::trace!(target: targets::POLICY, ?state, ?decision, "chrome decision");
    decision
}
