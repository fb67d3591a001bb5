//! Triggers, effects and the planning half of the controller.
//!
//! Planning updates the controller's own state (options, theme, tint cycle)
//! and returns the side effects to run, without touching a collaborator.
//! Effects that depend on live values (title bar height, current window
//! state, OS transparency) carry no payload and resolve those values when
//! they are executed.

use horizon_chrome_core::logging::targets;
use horizon_chrome_core::{
    BorderEvaluation, ChromeOption, Color, Margins, WindowMode, WindowState, decide, draw_border,
};

use super::ChromeController;
use crate::flags::FrameFlag;
use crate::host::WindowBackground;

/// An input to the chrome state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeTrigger {
    SetCustomizeTitleBar(bool),
    SetPreserveFrame(bool),
    SetBlurEnabled(bool),
    SetExtendToTitleBar(bool),
    SetForceAcrylic(bool),
    SetResizable(bool),
    /// The window was minimized, maximized, restored or made full screen.
    WindowStateChanged,
    /// The window was activated or deactivated.
    ActivationChanged,
    /// The native window was recreated.
    WindowIdChanged,
    /// The system colorization color or its enabled state changed.
    ColorizationChanged { color: Color, enabled: bool },
    DpiChanged,
    NonClientPaint,
}

impl ChromeTrigger {
    /// The trigger that sets `option` to `value`.
    pub fn set_option(option: ChromeOption, value: bool) -> Self {
        match option {
            ChromeOption::CustomizeTitleBar => Self::SetCustomizeTitleBar(value),
            ChromeOption::PreserveFrame => Self::SetPreserveFrame(value),
            ChromeOption::BlurEnabled => Self::SetBlurEnabled(value),
            ChromeOption::ExtendToTitleBar => Self::SetExtendToTitleBar(value),
            ChromeOption::ForceAcrylic => Self::SetForceAcrylic(value),
            ChromeOption::Resizable => Self::SetResizable(value),
        }
    }

    /// The option and value this trigger sets, if it is a toggle.
    pub fn option(&self) -> Option<(ChromeOption, bool)> {
        let pair = match *self {
            Self::SetCustomizeTitleBar(v) => (ChromeOption::CustomizeTitleBar, v),
            Self::SetPreserveFrame(v) => (ChromeOption::PreserveFrame, v),
            Self::SetBlurEnabled(v) => (ChromeOption::BlurEnabled, v),
            Self::SetExtendToTitleBar(v) => (ChromeOption::ExtendToTitleBar, v),
            Self::SetForceAcrylic(v) => (ChromeOption::ForceAcrylic, v),
            Self::SetResizable(v) => (ChromeOption::Resizable, v),
            _ => return None,
        };
        Some(pair)
    }
}

/// Where the blur tint comes from when the blur is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TintSource {
    /// The configured default tint.
    Default,
    /// The tint picked for the current acrylic cycle, or the default if
    /// none was picked.
    Acrylic,
}

/// A side effect planned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeEffect {
    /// Reserve (or release) the title bar height through the content-margin
    /// override.
    ReserveTitleBar(bool),
    SetContentInset(Margins),
    SetTitleBarVisible(bool),
    SetFrameFlag(FrameFlag, bool),
    NotifyFrameChanged,
    /// Re-render the title bar for the window state at execution time.
    UpdateTitleBar,
    Repaint,
    /// Ask the user for the acrylic tint.
    PromptTint { initial: Color },
    SetWindowBackground(WindowBackground),
    SetBlur { enabled: bool, tint: TintSource },
    /// Warn about drag lag if the OS transparency effect is on.
    TransparencyAdvisory,
    SetMaximizeEnabled(bool),
    SetFixedSize(bool),
    ShowWindow,
    SetOptionAvailable(ChromeOption, bool),
    RegisterFrameless,
    /// Let the system buttons receive input inside the caption.
    MarkInputTransparent,
}

/// Inset that leaves room for a 1px application border.
const BORDER_INSET: Margins = Margins::uniform(1);

impl ChromeController {
    /// Plan the effects of `trigger` for a window in `state`.
    ///
    /// Setting an option to the value it already has plans nothing.
    pub fn plan(&mut self, trigger: ChromeTrigger, state: WindowState) -> Vec<ChromeEffect> {
        if let Some((option, value)) = trigger.option()
            && self.options.get(option) == value
        {
            tracing::trace!(target: targets::CONTROLLER, %option, value, "option unchanged");
            return Vec::new();
        }
        self.plan_apply(trigger, state)
    }

    /// Plan the effects of `trigger` even if it sets an option to the value
    /// it already has.
    pub fn plan_apply(&mut self, trigger: ChromeTrigger, state: WindowState) -> Vec<ChromeEffect> {
        let effects = match trigger {
            ChromeTrigger::SetCustomizeTitleBar(enable) => {
                self.options.customize_title_bar = enable;
                vec![
                    ChromeEffect::SetOptionAvailable(ChromeOption::PreserveFrame, enable),
                    ChromeEffect::ReserveTitleBar(enable),
                    ChromeEffect::SetTitleBarVisible(enable),
                    ChromeEffect::SetFrameFlag(FrameFlag::UseNativeTitleBar, !enable),
                    ChromeEffect::NotifyFrameChanged,
                    ChromeEffect::Repaint,
                ]
            }
            ChromeTrigger::SetPreserveFrame(enable) => {
                self.options.preserve_frame = enable;
                let inset = if !enable && self.decision(state).draw_border {
                    BORDER_INSET
                } else {
                    Margins::ZERO
                };
                vec![
                    ChromeEffect::SetFrameFlag(FrameFlag::PreserveFrame, enable),
                    ChromeEffect::SetContentInset(inset),
                    ChromeEffect::NotifyFrameChanged,
                    ChromeEffect::UpdateTitleBar,
                    ChromeEffect::Repaint,
                ]
            }
            ChromeTrigger::SetBlurEnabled(enable) => {
                self.options.blur_enabled = enable;
                self.plan_blur(enable)
            }
            ChromeTrigger::SetExtendToTitleBar(enable) => {
                self.options.extend_to_title_bar = enable;
                vec![ChromeEffect::UpdateTitleBar]
            }
            ChromeTrigger::SetForceAcrylic(enable) => {
                if !self.capability.supports_acrylic {
                    tracing::debug!(target: targets::CONTROLLER, "acrylic unsupported, ignoring force-acrylic");
                    return Vec::new();
                }
                self.options.force_acrylic = enable;
                let mut effects = vec![ChromeEffect::SetFrameFlag(FrameFlag::ForceAcrylic, enable)];
                effects.extend(self.plan_refresh_effect());
                effects
            }
            ChromeTrigger::SetResizable(enable) => {
                self.options.resizable = enable;
                vec![
                    ChromeEffect::SetMaximizeEnabled(enable),
                    ChromeEffect::SetFixedSize(!enable),
                    ChromeEffect::ShowWindow,
                ]
            }
            ChromeTrigger::WindowStateChanged => {
                let mut effects = Vec::with_capacity(2);
                if draw_border(state, &self.options, self.capability, BorderEvaluation::IgnoreWindowState) {
                    match state.mode {
                        WindowMode::Maximized => effects.push(ChromeEffect::SetContentInset(Margins::ZERO)),
                        WindowMode::Normal => effects.push(ChromeEffect::SetContentInset(BORDER_INSET)),
                        WindowMode::Minimized | WindowMode::FullScreen => {}
                    }
                }
                effects.push(ChromeEffect::UpdateTitleBar);
                effects
            }
            ChromeTrigger::ActivationChanged => vec![ChromeEffect::UpdateTitleBar],
            ChromeTrigger::WindowIdChanged => vec![ChromeEffect::RegisterFrameless],
            ChromeTrigger::ColorizationChanged { color, enabled } => {
                self.theme.apply_notification(color, enabled);
                if self.decision(state).themed_border {
                    vec![ChromeEffect::Repaint]
                } else {
                    Vec::new()
                }
            }
            ChromeTrigger::DpiChanged | ChromeTrigger::NonClientPaint => vec![ChromeEffect::Repaint],
        };

        tracing::debug!(
            target: targets::CONTROLLER,
            ?trigger,
            effect_count = effects.len(),
            "planned trigger"
        );
        effects
    }

    /// Plan turning the blur off and on again, so a changed acrylic
    /// preference takes effect. Plans nothing while the blur is off.
    pub(super) fn plan_refresh_effect(&mut self) -> Vec<ChromeEffect> {
        if !self.options.blur_enabled {
            return Vec::new();
        }
        let mut effects = self.plan_blur(false);
        effects.extend(self.plan_blur(true));
        effects
    }

    fn plan_blur(&mut self, enable: bool) -> Vec<ChromeEffect> {
        let use_acrylic = self.uses_acrylic();

        if !enable {
            // The next enable starts a new tint cycle.
            self.acrylic_tint = None;
            return vec![
                ChromeEffect::SetWindowBackground(WindowBackground::Opaque),
                ChromeEffect::SetBlur {
                    enabled: false,
                    tint: TintSource::Default,
                },
                ChromeEffect::Repaint,
            ];
        }

        let mut effects = Vec::with_capacity(5);
        if use_acrylic && self.prompts_enabled && self.acrylic_tint.is_none() {
            effects.push(ChromeEffect::PromptTint {
                initial: self.config.blur_tint(),
            });
        }
        effects.push(ChromeEffect::SetWindowBackground(WindowBackground::Transparent));
        effects.push(ChromeEffect::SetBlur {
            enabled: true,
            tint: if use_acrylic {
                TintSource::Acrylic
            } else {
                TintSource::Default
            },
        });
        effects.push(ChromeEffect::Repaint);
        if use_acrylic {
            effects.push(ChromeEffect::TransparencyAdvisory);
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChromeConfig;
    use crate::flags::SharedFrameFlags;
    use horizon_chrome_core::{ChromeOptions, PlatformCapability, ThemeState};

    fn controller(capability: PlatformCapability) -> ChromeController {
        ChromeController::new(
            ChromeConfig::default(),
            capability,
            ThemeState::new(Color::rgb(0, 120, 215), true),
            SharedFrameFlags::new(),
        )
    }

    fn normal() -> WindowState {
        WindowState::active_normal()
    }

    #[test]
    fn test_set_option_round_trip() {
        for option in ChromeOption::ALL {
            assert_eq!(ChromeTrigger::set_option(option, true).option(), Some((option, true)));
        }
        assert_eq!(ChromeTrigger::DpiChanged.option(), None);
    }

    #[test]
    fn test_unchanged_option_plans_nothing() {
        let mut c = controller(PlatformCapability::new(true, true));
        assert!(c.plan(ChromeTrigger::SetBlurEnabled(false), normal()).is_empty());
    }

    #[test]
    fn test_plan_apply_ignores_unchanged_value() {
        let mut c = controller(PlatformCapability::new(true, true));
        assert_eq!(
            c.plan_apply(ChromeTrigger::SetResizable(false), normal()),
            vec![
                ChromeEffect::SetMaximizeEnabled(false),
                ChromeEffect::SetFixedSize(true),
                ChromeEffect::ShowWindow,
            ]
        );
        assert!(
            c.plan_apply(ChromeTrigger::SetCustomizeTitleBar(false), normal())
                .contains(&ChromeEffect::SetFrameFlag(FrameFlag::UseNativeTitleBar, true))
        );
        assert_eq!(*c.options(), ChromeOptions::disabled());
    }

    #[test]
    fn test_customize_on_and_off() {
        let mut c = controller(PlatformCapability::new(true, true));
        assert_eq!(
            c.plan(ChromeTrigger::SetCustomizeTitleBar(true), normal()),
            vec![
                ChromeEffect::SetOptionAvailable(ChromeOption::PreserveFrame, true),
                ChromeEffect::ReserveTitleBar(true),
                ChromeEffect::SetTitleBarVisible(true),
                ChromeEffect::SetFrameFlag(FrameFlag::UseNativeTitleBar, false),
                ChromeEffect::NotifyFrameChanged,
                ChromeEffect::Repaint,
            ]
        );
        assert_eq!(
            c.plan(ChromeTrigger::SetCustomizeTitleBar(false), normal()),
            vec![
                ChromeEffect::SetOptionAvailable(ChromeOption::PreserveFrame, false),
                ChromeEffect::ReserveTitleBar(false),
                ChromeEffect::SetTitleBarVisible(false),
                ChromeEffect::SetFrameFlag(FrameFlag::UseNativeTitleBar, true),
                ChromeEffect::NotifyFrameChanged,
                ChromeEffect::Repaint,
            ]
        );
    }

    #[test]
    fn test_preserve_frame_inset() {
        let mut c = controller(PlatformCapability::new(true, true));
        c.plan(ChromeTrigger::SetCustomizeTitleBar(true), normal());

        let effects = c.plan(ChromeTrigger::SetPreserveFrame(true), normal());
        assert!(effects.contains(&ChromeEffect::SetContentInset(Margins::ZERO)));
        assert_eq!(effects[0], ChromeEffect::SetFrameFlag(FrameFlag::PreserveFrame, true));

        let effects = c.plan(ChromeTrigger::SetPreserveFrame(false), normal());
        assert!(effects.contains(&ChromeEffect::SetContentInset(Margins::uniform(1))));
    }

    #[test]
    fn test_blur_without_acrylic_never_prompts() {
        let mut c = controller(PlatformCapability::new(true, false));
        c.enable_prompts();
        let effects = c.plan(ChromeTrigger::SetBlurEnabled(true), normal());
        assert_eq!(
            effects,
            vec![
                ChromeEffect::SetWindowBackground(WindowBackground::Transparent),
                ChromeEffect::SetBlur {
                    enabled: true,
                    tint: TintSource::Default
                },
                ChromeEffect::Repaint,
            ]
        );
    }

    #[test]
    fn test_force_acrylic_ignored_without_capability() {
        let mut c = controller(PlatformCapability::new(true, false));
        assert!(c.plan(ChromeTrigger::SetForceAcrylic(true), normal()).is_empty());
        assert!(!c.options().force_acrylic);
    }

    #[test]
    fn test_force_acrylic_refreshes_blur() {
        let mut c = controller(PlatformCapability::new(true, true));
        c.enable_prompts();
        c.plan(ChromeTrigger::SetBlurEnabled(true), normal());

        let effects = c.plan(ChromeTrigger::SetForceAcrylic(true), normal());
        assert_eq!(effects[0], ChromeEffect::SetFrameFlag(FrameFlag::ForceAcrylic, true));
        assert!(effects.contains(&ChromeEffect::SetBlur {
            enabled: false,
            tint: TintSource::Default
        }));
        assert!(effects.contains(&ChromeEffect::PromptTint {
            initial: Color::rgba(0, 0, 0, 127)
        }));
        assert_eq!(effects.last(), Some(&ChromeEffect::TransparencyAdvisory));
    }

    #[test]
    fn test_window_state_changes_inset_only_with_border() {
        let mut c = controller(PlatformCapability::new(true, true));
        let maximized = normal().with_mode(WindowMode::Maximized);

        assert_eq!(
            c.plan(ChromeTrigger::WindowStateChanged, maximized),
            vec![ChromeEffect::UpdateTitleBar]
        );

        c.plan(ChromeTrigger::SetCustomizeTitleBar(true), normal());
        assert_eq!(
            c.plan(ChromeTrigger::WindowStateChanged, maximized),
            vec![ChromeEffect::SetContentInset(Margins::ZERO), ChromeEffect::UpdateTitleBar]
        );
        assert_eq!(
            c.plan(ChromeTrigger::WindowStateChanged, normal()),
            vec![ChromeEffect::SetContentInset(Margins::uniform(1)), ChromeEffect::UpdateTitleBar]
        );
        assert_eq!(
            c.plan(ChromeTrigger::WindowStateChanged, normal().with_mode(WindowMode::Minimized)),
            vec![ChromeEffect::UpdateTitleBar]
        );
    }

    #[test]
    fn test_colorization_repaints_themed_border_only() {
        let mut c = controller(PlatformCapability::new(true, true));
        let change = ChromeTrigger::ColorizationChanged {
            color: Color::rgb(200, 0, 0),
            enabled: true,
        };
        assert!(c.plan(change, normal()).is_empty());
        assert_eq!(c.theme().colorization_color, Color::rgb(200, 0, 0));

        c.plan(ChromeTrigger::SetCustomizeTitleBar(true), normal());
        assert_eq!(c.plan(change, normal()), vec![ChromeEffect::Repaint]);
        assert!(c.plan(change, normal().with_mode(WindowMode::Maximized)).is_empty());
    }

    #[test]
    fn test_options_recorded() {
        let mut c = controller(PlatformCapability::new(true, true));
        c.plan(ChromeTrigger::SetResizable(true), normal());
        c.plan(ChromeTrigger::SetExtendToTitleBar(true), normal());
        assert_eq!(
            *c.options(),
            ChromeOptions::disabled()
                .with_resizable(true)
                .with_extend_to_title_bar(true)
        );
    }
}
