//! Host window state as seen by the chrome policy.
//!
//! A [`WindowState`] is always derived from the live window when a trigger
//! is handled; nothing in this workspace keeps one around between triggers.

/// The sizing mode of a top-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowMode {
    /// Neither minimized, maximized nor full screen.
    #[default]
    Normal,
    /// Minimized to the taskbar.
    Minimized,
    /// Maximized on its monitor.
    Maximized,
    /// Full screen.
    FullScreen,
}

impl WindowMode {
    /// Returns true for [`WindowMode::Normal`].
    #[inline]
    pub fn is_normal(self) -> bool {
        self == Self::Normal
    }

    /// Returns true for [`WindowMode::Maximized`].
    #[inline]
    pub fn is_maximized(self) -> bool {
        self == Self::Maximized
    }

    /// Returns true when the window covers its whole monitor work area or screen.
    #[inline]
    pub fn fills_screen(self) -> bool {
        matches!(self, Self::Maximized | Self::FullScreen)
    }

    /// Derive the mode from the three toolkit queries.
    ///
    /// Minimized wins over the others, then full screen, then maximized,
    /// matching how window managers report a minimized maximized window.
    pub fn from_flags(minimized: bool, maximized: bool, full_screen: bool) -> Self {
        if minimized {
            Self::Minimized
        } else if full_screen {
            Self::FullScreen
        } else if maximized {
            Self::Maximized
        } else {
            Self::Normal
        }
    }
}

/// Snapshot of the host window: its mode and whether it is the active window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowState {
    /// The sizing mode.
    pub mode: WindowMode,
    /// Whether the window is the active (focused) top-level window.
    pub active: bool,
}

impl WindowState {
    /// Create a new window state.
    #[inline]
    pub const fn new(mode: WindowMode, active: bool) -> Self {
        Self { mode, active }
    }

    /// An active window in normal mode.
    #[inline]
    pub const fn active_normal() -> Self {
        Self::new(WindowMode::Normal, true)
    }

    /// Return a copy with a different mode.
    #[inline]
    pub const fn with_mode(self, mode: WindowMode) -> Self {
        Self { mode, ..self }
    }

    /// Return a copy with a different activation.
    #[inline]
    pub const fn with_active(self, active: bool) -> Self {
        Self { active, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(WindowMode::from_flags(false, false, false), WindowMode::Normal);
        assert_eq!(WindowMode::from_flags(true, true, false), WindowMode::Minimized);
        assert_eq!(WindowMode::from_flags(false, true, true), WindowMode::FullScreen);
        assert_eq!(WindowMode::from_flags(false, true, false), WindowMode::Maximized);
    }

    #[test]
    fn test_fills_screen() {
        assert!(WindowMode::Maximized.fills_screen());
        assert!(WindowMode::FullScreen.fills_screen());
        assert!(!WindowMode::Normal.fills_screen());
        assert!(!WindowMode::Minimized.fills_screen());
    }
}
