//! Exhaustive checks of the chrome policy over every window state, option
//! set, theme and capability combination.

use horizon_chrome_core::{
    BorderEvaluation, ChromeOptions, Color, DEFAULT_ACTIVE_BORDER_COLOR,
    DEFAULT_INACTIVE_BORDER_COLOR, PlatformCapability, ThemeState, WindowMode, WindowState,
    decide, draw_border,
};

const MODES: [WindowMode; 4] = [
    WindowMode::Normal,
    WindowMode::Minimized,
    WindowMode::Maximized,
    WindowMode::FullScreen,
];

const COLORS: [Color; 3] = [
    Color::rgb(0x33, 0x66, 0x99),
    Color::rgb(0x70, 0x70, 0x70),
    Color::rgba(0xff, 0x00, 0x80, 0xc0),
];

fn all_states() -> Vec<WindowState> {
    MODES
        .iter()
        .flat_map(|&mode| [true, false].map(|active| WindowState::new(mode, active)))
        .collect()
}

fn all_options() -> Vec<ChromeOptions> {
    (0u8..64)
        .map(|bits| ChromeOptions {
            customize_title_bar: bits & 1 != 0,
            preserve_frame: bits & 2 != 0,
            extend_to_title_bar: bits & 4 != 0,
            force_acrylic: bits & 8 != 0,
            resizable: bits & 16 != 0,
            blur_enabled: bits & 32 != 0,
        })
        .collect()
}

fn all_themes() -> Vec<ThemeState> {
    COLORS
        .iter()
        .flat_map(|&color| [true, false].map(|enabled| ThemeState::new(color, enabled)))
        .collect()
}

fn all_capabilities() -> [PlatformCapability; 4] {
    [
        PlatformCapability::new(false, false),
        PlatformCapability::new(true, false),
        PlatformCapability::new(true, true),
        PlatformCapability::new(false, true),
    ]
}

fn for_all(mut check: impl FnMut(WindowState, &ChromeOptions, &ThemeState, PlatformCapability)) {
    for state in all_states() {
        for options in all_options() {
            for theme in all_themes() {
                for capability in all_capabilities() {
                    check(state, &options, &theme, capability);
                }
            }
        }
    }
}

#[test]
fn test_decide_is_deterministic() {
    for_all(|state, options, theme, capability| {
        assert_eq!(
            decide(state, options, theme, capability),
            decide(state, options, theme, capability)
        );
    });
}

#[test]
fn test_border_only_in_normal_mode() {
    for_all(|state, options, theme, capability| {
        let decision = decide(state, options, theme, capability);
        if decision.draw_border {
            assert_eq!(state.mode, WindowMode::Normal);
            assert!(options.customize_title_bar);
            assert!(!options.preserve_frame);
            assert!(capability.supports_themed_chrome);
        }
    });
}

#[test]
fn test_themed_border_implies_border() {
    for_all(|state, options, theme, capability| {
        let decision = decide(state, options, theme, capability);
        if decision.themed_border {
            assert!(decision.draw_border);
            assert!(theme.colorization_enabled);
        }
        if decision.themed_title_bar {
            assert!(capability.supports_themed_chrome);
            assert!(theme.colorization_enabled);
        }
    });
}

#[test]
fn test_default_border_colors_without_colorization() {
    for_all(|state, options, theme, capability| {
        if theme.colorization_enabled {
            return;
        }
        let decision = decide(state, options, theme, capability);
        assert!(
            decision.border_color == DEFAULT_ACTIVE_BORDER_COLOR
                || decision.border_color == DEFAULT_INACTIVE_BORDER_COLOR
        );
        let expected = if state.active {
            DEFAULT_ACTIVE_BORDER_COLOR
        } else {
            DEFAULT_INACTIVE_BORDER_COLOR
        };
        assert_eq!(decision.border_color, expected);
    });
}

#[test]
fn test_extend_to_title_bar_always_transparent() {
    for_all(|state, options, theme, capability| {
        if !options.extend_to_title_bar {
            return;
        }
        let decision = decide(state, options, theme, capability);
        assert_eq!(decision.title_bar_background, Color::TRANSPARENT);
    });
}

#[test]
fn test_screen_filling_windows_hide_title_bar_border() {
    for_all(|state, options, theme, capability| {
        if !state.mode.fills_screen() {
            return;
        }
        let decision = decide(state, options, theme, capability);
        assert!(!decision.draw_border);
        assert_eq!(decision.title_bar_border_color, Color::TRANSPARENT);
    });
}

#[test]
fn test_ignoring_window_state_only_widens_border() {
    for_all(|state, options, _theme, capability| {
        let respect = draw_border(state, options, capability, BorderEvaluation::RespectWindowState);
        let ignore = draw_border(state, options, capability, BorderEvaluation::IgnoreWindowState);
        assert!(!respect || ignore);
        if state.mode == WindowMode::Normal {
            assert_eq!(respect, ignore);
        }
    });
}

#[test]
fn test_maximized_scenario() {
    let state = WindowState::new(WindowMode::Maximized, true);
    let options = ChromeOptions::default().with_extend_to_title_bar(false);
    let theme = ThemeState::new(Color::from_hex("#336699").unwrap(), true);
    let decision = decide(state, &options, &theme, PlatformCapability::new(true, false));
    assert!(!decision.draw_border);
    assert_eq!(decision.title_bar_border_color, Color::TRANSPARENT);
}
