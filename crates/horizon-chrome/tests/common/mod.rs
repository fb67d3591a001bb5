//! Recording collaborators for controller tests.

#![allow(dead_code)]

use std::cell::Cell;

use horizon_chrome::{
    Advisory, ChromeError, ChromeOption, ChromeResult, Color, FrameBackend, Margins,
    TitleBarAppearance, TitleBarControl, WindowBackground, WindowHost, WindowMode, WindowState,
};

/// Install a test subscriber once; honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A call made on one of the recording collaborators.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    RegisterFrameless,
    UnregisterFrameless,
    InputTransparent(Vec<TitleBarControl>),
    SetBlur(bool, Color),
    ContentMargins(Margins),
    FrameChanged,
    Repaint,
    ContentInset(Margins),
    TitleBarVisible(bool),
    ApplyTitleBar(TitleBarAppearance),
    Background(WindowBackground),
    MaximizeEnabled(bool),
    FixedSize(bool),
    Show,
    OptionAvailable(ChromeOption, bool),
    PickColor(Color, String),
    Advisory(Advisory),
}

pub struct RecordingFrame {
    pub calls: Vec<Call>,
    pub title_bar_height: u32,
    pub colorization_enabled: bool,
    pub colorization_color: Color,
    pub transparency_enabled: bool,
    pub fail_blur: bool,
    /// Number of colorization-enabled queries.
    pub colorization_queries: Cell<usize>,
}

impl Default for RecordingFrame {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            title_bar_height: 31,
            colorization_enabled: true,
            colorization_color: Color::rgb(0, 120, 215),
            transparency_enabled: false,
            fail_blur: false,
            colorization_queries: Cell::new(0),
        }
    }
}

impl FrameBackend for RecordingFrame {
    fn title_bar_height(&self, enlarged: bool) -> u32 {
        if enlarged {
            self.title_bar_height + 8
        } else {
            self.title_bar_height
        }
    }

    fn register_frameless(&mut self) -> ChromeResult<()> {
        self.calls.push(Call::RegisterFrameless);
        Ok(())
    }

    fn unregister_frameless(&mut self) -> ChromeResult<()> {
        self.calls.push(Call::UnregisterFrameless);
        Ok(())
    }

    fn set_input_transparent_controls(&mut self, controls: &[TitleBarControl]) {
        self.calls.push(Call::InputTransparent(controls.to_vec()));
    }

    fn is_colorization_enabled(&self) -> bool {
        self.colorization_queries.set(self.colorization_queries.get() + 1);
        self.colorization_enabled
    }

    fn colorization_color(&self) -> Color {
        self.colorization_color
    }

    fn set_blur_effect(&mut self, enabled: bool, tint: Color) -> ChromeResult<()> {
        self.calls.push(Call::SetBlur(enabled, tint));
        if self.fail_blur {
            return Err(ChromeError::Unsupported("blur".to_string()));
        }
        Ok(())
    }

    fn is_transparency_effect_enabled(&self) -> bool {
        self.transparency_enabled
    }

    fn set_content_margins(&mut self, margins: Margins) -> ChromeResult<()> {
        self.calls.push(Call::ContentMargins(margins));
        Ok(())
    }

    fn notify_frame_changed(&mut self) -> ChromeResult<()> {
        self.calls.push(Call::FrameChanged);
        Ok(())
    }
}

pub struct RecordingHost {
    pub calls: Vec<Call>,
    pub state: WindowState,
    /// Answer of the color picker; `None` cancels.
    pub picked_color: Option<Color>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            state: WindowState::new(WindowMode::Normal, true),
            picked_color: Some(Color::rgba(10, 20, 30, 127)),
        }
    }
}

impl RecordingHost {
    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|call| matches(call)).count()
    }

    pub fn last_inset(&self) -> Option<Margins> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::ContentInset(inset) => Some(*inset),
            _ => None,
        })
    }

    pub fn last_title_bar(&self) -> Option<&TitleBarAppearance> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::ApplyTitleBar(appearance) => Some(appearance),
            _ => None,
        })
    }
}

impl WindowHost for RecordingHost {
    fn window_state(&self) -> WindowState {
        self.state
    }

    fn request_repaint(&mut self) {
        self.calls.push(Call::Repaint);
    }

    fn set_content_inset(&mut self, inset: Margins) {
        self.calls.push(Call::ContentInset(inset));
    }

    fn set_title_bar_visible(&mut self, visible: bool) {
        self.calls.push(Call::TitleBarVisible(visible));
    }

    fn apply_title_bar(&mut self, appearance: &TitleBarAppearance) {
        self.calls.push(Call::ApplyTitleBar(appearance.clone()));
    }

    fn set_window_background(&mut self, background: WindowBackground) {
        self.calls.push(Call::Background(background));
    }

    fn set_maximize_enabled(&mut self, enabled: bool) {
        self.calls.push(Call::MaximizeEnabled(enabled));
    }

    fn set_fixed_size(&mut self, fixed: bool) {
        self.calls.push(Call::FixedSize(fixed));
    }

    fn show(&mut self) {
        self.calls.push(Call::Show);
    }

    fn set_option_available(&mut self, option: ChromeOption, available: bool) {
        self.calls.push(Call::OptionAvailable(option, available));
    }

    fn pick_color(&mut self, initial: Color, title: &str) -> Option<Color> {
        self.calls.push(Call::PickColor(initial, title.to_string()));
        self.picked_color
    }

    fn show_advisory(&mut self, advisory: &Advisory) {
        self.calls.push(Call::Advisory(advisory.clone()));
    }
}
