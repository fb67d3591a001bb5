//! System colorization state.

use crate::color::Color;

/// The system colorization (accent) color and whether window chrome uses it.
///
/// One value is owned per controlled window and passed by reference into
/// every policy call. It changes only when a colorization-changed
/// notification arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeState {
    /// The current colorization color.
    pub colorization_color: Color,
    /// Whether the user has "show accent color on title bars" turned on.
    pub colorization_enabled: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            colorization_color: Color::WHITE,
            colorization_enabled: false,
        }
    }
}

impl ThemeState {
    pub const fn new(colorization_color: Color, colorization_enabled: bool) -> Self {
        Self {
            colorization_color,
            colorization_enabled,
        }
    }

    /// Apply a colorization-changed notification.
    ///
    /// Returns true if anything changed.
    pub fn apply_notification(&mut self, color: Color, enabled: bool) -> bool {
        let changed = self.colorization_color != color || self.colorization_enabled != enabled;
        self.colorization_color = color;
        self.colorization_enabled = enabled;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_notification() {
        let mut theme = ThemeState::default();
        assert!(theme.apply_notification(Color::rgb(1, 2, 3), true));
        assert!(!theme.apply_notification(Color::rgb(1, 2, 3), true));
        assert_eq!(theme.colorization_color, Color::rgb(1, 2, 3));
        assert!(theme.colorization_enabled);
    }
}
