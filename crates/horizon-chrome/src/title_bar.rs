//! The synthetic title bar: icons, stylesheet and layout metrics.
//!
//! [`TitleBarView`] is stateless. Each call to [`TitleBarView::render`]
//! produces the complete appearance from a chrome decision, so applying it
//! again with the same inputs changes nothing.

use horizon_chrome_core::{ChromeDecision, Color, Rect, Size, WindowMode, WindowState};

use crate::backend::TitleBarControl;

const SYSTEM_BUTTONS_STYLESHEET: &str = r#"
#iconButton, #minimizeButton, #maximizeButton, #closeButton {
  border-style: none;
  background-color: transparent;
}

#minimizeButton:hover, #maximizeButton:hover {
  background-color: #80c7c7c7;
}

#minimizeButton:pressed, #maximizeButton:pressed {
  background-color: #80808080;
}

#closeButton:hover {
  background-color: #e81123;
}

#closeButton:pressed {
  background-color: #8c0a15;
}
"#;

/// Which icon artwork the system buttons use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconSet {
    /// Black glyphs, for light title bars.
    #[default]
    Dark,
    /// White glyphs, for colorized title bars.
    Light,
}

/// A system button glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonIcon {
    Minimize,
    Maximize,
    Restore,
    Close,
}

impl IconSet {
    /// Resource path of a glyph in this set.
    pub fn path(self, icon: ButtonIcon) -> &'static str {
        match (self, icon) {
            (Self::Dark, ButtonIcon::Minimize) => "images/button_minimize_black.svg",
            (Self::Dark, ButtonIcon::Maximize) => "images/button_maximize_black.svg",
            (Self::Dark, ButtonIcon::Restore) => "images/button_restore_black.svg",
            (Self::Dark, ButtonIcon::Close) => "images/button_close_black.svg",
            (Self::Light, ButtonIcon::Minimize) => "images/button_minimize_white.svg",
            (Self::Light, ButtonIcon::Maximize) => "images/button_maximize_white.svg",
            (Self::Light, ButtonIcon::Restore) => "images/button_restore_white.svg",
            (Self::Light, ButtonIcon::Close) => "images/button_close_white.svg",
        }
    }
}

/// Everything the toolkit needs to restyle the title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBarAppearance {
    pub icon_set: IconSet,
    /// Glyph of the maximize button: restore while maximized.
    pub maximize_icon: ButtonIcon,
    pub background: Color,
    pub foreground: Color,
    pub border_color: Color,
    /// Complete stylesheet for the title bar widget tree.
    pub stylesheet: String,
}

impl TitleBarAppearance {
    /// Resource path of the icon shown on `control`, if it has a system glyph.
    pub fn icon_path(&self, control: TitleBarControl) -> Option<&'static str> {
        let icon = match control {
            TitleBarControl::Icon => return None,
            TitleBarControl::Minimize => ButtonIcon::Minimize,
            TitleBarControl::Maximize => self.maximize_icon,
            TitleBarControl::Close => ButtonIcon::Close,
        };
        Some(self.icon_set.path(icon))
    }
}

/// Renders title bar appearances from chrome decisions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleBarView;

impl TitleBarView {
    /// Light glyphs only on an active, colorized, non-extended title bar.
    pub fn icon_set(decision: &ChromeDecision, state: WindowState, extend_to_title_bar: bool) -> IconSet {
        if decision.themed_title_bar && state.active && !extend_to_title_bar {
            IconSet::Light
        } else {
            IconSet::Dark
        }
    }

    pub fn maximize_icon(mode: WindowMode) -> ButtonIcon {
        if mode.is_maximized() {
            ButtonIcon::Restore
        } else {
            ButtonIcon::Maximize
        }
    }

    /// Build the full stylesheet for the given decision.
    pub fn stylesheet(decision: &ChromeDecision) -> String {
        let text = decision.title_bar_foreground;
        let background = decision.title_bar_background;
        let border = decision.title_bar_border_color;

        let mut sheet = String::with_capacity(SYSTEM_BUTTONS_STYLESHEET.len() + 192);
        sheet.push_str(SYSTEM_BUTTONS_STYLESHEET);
        sheet.push_str(&format!(
            "\n#titleLabel {{\n  color: rgb({}, {}, {});\n}}\n",
            text.r, text.g, text.b
        ));
        sheet.push_str(&format!(
            "\n#titleBarWidget {{\n  background-color: rgba({}, {}, {}, {});\n  border-top: 1px solid rgba({}, {}, {}, {});\n}}\n",
            background.r, background.g, background.b, background.a, border.r, border.g, border.b, border.a
        ));
        sheet
    }

    /// Render the title bar for a decision.
    pub fn render(decision: &ChromeDecision, state: WindowState, extend_to_title_bar: bool) -> TitleBarAppearance {
        TitleBarAppearance {
            icon_set: Self::icon_set(decision, state, extend_to_title_bar),
            maximize_icon: Self::maximize_icon(state.mode),
            background: decision.title_bar_background,
            foreground: decision.title_bar_foreground,
            border_color: decision.title_bar_border_color,
            stylesheet: Self::stylesheet(decision),
        }
    }
}

/// Layout metrics of the title bar, derived from the system caption height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleBarMetrics {
    height: f32,
}

impl TitleBarMetrics {
    /// Gap between the left edge and the window icon.
    pub const ICON_MARGIN: f32 = 3.0;

    pub fn new(height: u32) -> Self {
        Self {
            height: height as f32,
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// System buttons are one and a half caption heights wide.
    pub fn button_size(&self) -> Size {
        Size::new((self.height * 1.5).round(), self.height)
    }

    /// Where each control sits in a title bar `window_width` wide.
    ///
    /// The icon is a square at the left; minimize, maximize and close are
    /// packed against the right edge in that order.
    pub fn control_regions(&self, window_width: f32) -> Vec<(TitleBarControl, Rect)> {
        let button = self.button_size();
        let mut regions = vec![(
            TitleBarControl::Icon,
            Rect::new(Self::ICON_MARGIN, 0.0, self.height, self.height),
        )];
        for (slot, control) in [
            TitleBarControl::Close,
            TitleBarControl::Maximize,
            TitleBarControl::Minimize,
        ]
        .into_iter()
        .enumerate()
        {
            let x = window_width - button.width * (slot as f32 + 1.0);
            regions.push((control, Rect::new(x, 0.0, button.width, button.height)));
        }
        regions
    }
}
