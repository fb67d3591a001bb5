//! The chrome controller.
//!
//! [`ChromeController`] owns the chrome options, the theme state and the
//! acrylic tint cycle of one window. Every input goes through
//! [`ChromeController::handle`], which reads the window state from the host,
//! plans the effects of the trigger and executes them against the frame
//! backend and the host, in order.
//!
//! # Signals
//!
//! - `theme_changed`: the colorization color or its enabled state changed
//! - `title_bar_updated`: a new title bar appearance was applied
//! - `options_changed`: a toggle changed the chrome options

mod transition;

pub use transition::{ChromeEffect, ChromeTrigger, TintSource};

use horizon_chrome_core::logging::targets;
use horizon_chrome_core::{
    ChromeDecision, ChromeOption, ChromeOptions, ChromeResult, Color, Margins, PlatformCapability,
    Rect, Signal, ThemeState, WindowState, decide,
};

use crate::backend::{FrameBackend, TitleBarControl};
use crate::border::{BorderPainter, BorderRenderer};
use crate::config::ChromeConfig;
use crate::flags::SharedFrameFlags;
use crate::host::WindowHost;
use crate::native::{NativeMessage, NativeMessageAdapter, ToolkitEvent};
use crate::title_bar::{TitleBarAppearance, TitleBarView};

/// The window chrome state machine.
pub struct ChromeController {
    config: ChromeConfig,
    options: ChromeOptions,
    capability: PlatformCapability,
    theme: ThemeState,
    flags: SharedFrameFlags,
    adapter: NativeMessageAdapter,
    /// Tint picked for the current acrylic enable cycle.
    acrylic_tint: Option<Color>,
    prompt_open: bool,
    prompts_enabled: bool,
    advisory_shown: bool,
    initialized: bool,
    theme_changed: Signal<ThemeState>,
    title_bar_updated: Signal<TitleBarAppearance>,
    options_changed: Signal<ChromeOptions>,
}

impl ChromeController {
    /// Create a controller for a window that has not been initialized yet.
    ///
    /// All options start off; [`initialize`](Self::initialize) drives them
    /// to the configured values. `flags` must be shared with the frame
    /// backend.
    pub fn new(
        config: ChromeConfig,
        capability: PlatformCapability,
        theme: ThemeState,
        flags: SharedFrameFlags,
    ) -> Self {
        Self {
            config,
            options: ChromeOptions::disabled(),
            capability,
            theme,
            flags,
            adapter: NativeMessageAdapter::new(),
            acrylic_tint: None,
            prompt_open: false,
            prompts_enabled: false,
            advisory_shown: false,
            initialized: false,
            theme_changed: Signal::new(),
            title_bar_updated: Signal::new(),
            options_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    pub fn options(&self) -> &ChromeOptions {
        &self.options
    }

    pub fn capability(&self) -> PlatformCapability {
        self.capability
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn flags(&self) -> &SharedFrameFlags {
        &self.flags
    }

    /// The tint picked for the running acrylic cycle, if any.
    pub fn acrylic_tint(&self) -> Option<Color> {
        self.acrylic_tint
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether the blur uses acrylic: requested and supported.
    pub fn uses_acrylic(&self) -> bool {
        self.capability.supports_acrylic && self.options.force_acrylic
    }

    /// The chrome decision for a window in `state`.
    pub fn decision(&self, state: WindowState) -> ChromeDecision {
        decide(state, &self.options, &self.theme, self.capability)
    }

    pub fn theme_changed(&self) -> &Signal<ThemeState> {
        &self.theme_changed
    }

    pub fn title_bar_updated(&self) -> &Signal<TitleBarAppearance> {
        &self.title_bar_updated
    }

    pub fn options_changed(&self) -> &Signal<ChromeOptions> {
        &self.options_changed
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Bring a freshly created window to the configured chrome.
    ///
    /// Registers the window as frameless, lets the system buttons receive
    /// input, publishes which toggles are available and renders the title
    /// bar. Then every option is driven from off to its configured value,
    /// with the tint prompt suppressed. Returns every executed effect.
    pub fn initialize(&mut self, frame: &mut dyn FrameBackend, host: &mut dyn WindowHost) -> Vec<ChromeEffect> {
        if self.initialized {
            tracing::warn!(target: targets::CONTROLLER, "chrome controller already initialized");
            return Vec::new();
        }

        let mut executed = vec![
            ChromeEffect::RegisterFrameless,
            ChromeEffect::MarkInputTransparent,
            ChromeEffect::SetOptionAvailable(ChromeOption::ForceAcrylic, self.capability.supports_acrylic),
            ChromeEffect::UpdateTitleBar,
        ];
        for effect in &executed {
            self.execute(*effect, frame, host);
        }

        // Options configured off are applied too, so the frame flags and the
        // host start out matching the options.
        let target = *self.config.options();
        for option in ChromeOption::ALL {
            let trigger = ChromeTrigger::set_option(option, target.get(option));
            executed.extend(self.dispatch(trigger, true, frame, host));
        }

        let inset = if self.decision(host.window_state()).draw_border {
            Margins::uniform(1)
        } else {
            Margins::ZERO
        };
        let settle = ChromeEffect::SetContentInset(inset);
        self.execute(settle, frame, host);
        executed.push(settle);

        self.enable_prompts();
        self.initialized = true;
        tracing::debug!(
            target: targets::CONTROLLER,
            options = ?self.options,
            effect_count = executed.len(),
            "chrome initialized"
        );
        executed
    }

    /// Give the non-client area back to the system.
    pub fn shutdown(&mut self, frame: &mut dyn FrameBackend) -> ChromeResult<()> {
        self.initialized = false;
        frame.unregister_frameless()
    }

    fn enable_prompts(&mut self) {
        self.prompts_enabled = true;
    }

    // =========================================================================
    // Triggers
    // =========================================================================

    /// Plan and execute one trigger. Returns the executed effects.
    pub fn handle(
        &mut self,
        trigger: ChromeTrigger,
        frame: &mut dyn FrameBackend,
        host: &mut dyn WindowHost,
    ) -> Vec<ChromeEffect> {
        self.dispatch(trigger, false, frame, host)
    }

    /// With `apply_unchanged`, an option trigger is planned even when the
    /// option already has the requested value.
    fn dispatch(
        &mut self,
        trigger: ChromeTrigger,
        apply_unchanged: bool,
        frame: &mut dyn FrameBackend,
        host: &mut dyn WindowHost,
    ) -> Vec<ChromeEffect> {
        let state = host.window_state();
        let theme_before = self.theme;
        let options_before = self.options;

        let effects = if apply_unchanged {
            self.plan_apply(trigger, state)
        } else {
            self.plan(trigger, state)
        };
        for effect in &effects {
            self.execute(*effect, frame, host);
        }

        if self.theme != theme_before {
            self.theme_changed.emit(self.theme);
        }
        if self.options != options_before {
            self.options_changed.emit(self.options);
        }
        effects
    }

    /// Flip one option.
    pub fn toggle(
        &mut self,
        option: ChromeOption,
        frame: &mut dyn FrameBackend,
        host: &mut dyn WindowHost,
    ) -> Vec<ChromeEffect> {
        let value = !self.options.get(option);
        self.handle(ChromeTrigger::set_option(option, value), frame, host)
    }

    /// Re-apply the blur so a changed acrylic preference takes effect.
    ///
    /// Does nothing while the blur is off.
    pub fn refresh_effect(&mut self, frame: &mut dyn FrameBackend, host: &mut dyn WindowHost) -> Vec<ChromeEffect> {
        let effects = self.plan_refresh_effect();
        for effect in &effects {
            self.execute(*effect, frame, host);
        }
        effects
    }

    /// Feed a raw window message. Returns the executed effects, or `None`
    /// when the message is not a chrome notification.
    ///
    /// The caller still forwards the message to the default handler.
    pub fn handle_native_message(
        &mut self,
        msg: &NativeMessage,
        frame: &mut dyn FrameBackend,
        host: &mut dyn WindowHost,
    ) -> Option<Vec<ChromeEffect>> {
        let notification = self.adapter.translate(msg, self.options.customize_title_bar)?;
        let trigger = notification.into_trigger(|| frame.is_colorization_enabled());
        Some(self.handle(trigger, frame, host))
    }

    pub fn handle_toolkit_event(
        &mut self,
        event: ToolkitEvent,
        frame: &mut dyn FrameBackend,
        host: &mut dyn WindowHost,
    ) -> Vec<ChromeEffect> {
        self.handle(event.trigger(), frame, host)
    }

    /// Paint the window border after the content. Returns whether anything
    /// was drawn.
    pub fn paint_border(&self, state: WindowState, bounds: Rect, painter: &mut dyn BorderPainter) -> bool {
        BorderRenderer::paint(&self.decision(state), bounds, painter)
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Run one effect against the collaborators.
    ///
    /// Platform failures are logged and otherwise ignored; the chrome keeps
    /// working with whatever the platform managed to apply.
    pub fn execute(&mut self, effect: ChromeEffect, frame: &mut dyn FrameBackend, host: &mut dyn WindowHost) {
        tracing::trace!(target: targets::CONTROLLER, ?effect, "executing effect");
        match effect {
            ChromeEffect::ReserveTitleBar(reserve) => {
                let margins = if reserve {
                    Margins::top_only(frame.title_bar_height(true) as i32)
                } else {
                    Margins::ZERO
                };
                log_failure("set content margins", frame.set_content_margins(margins));
            }
            ChromeEffect::SetContentInset(inset) => host.set_content_inset(inset),
            ChromeEffect::SetTitleBarVisible(visible) => host.set_title_bar_visible(visible),
            ChromeEffect::SetFrameFlag(flag, value) => {
                self.flags.set(flag, value);
            }
            ChromeEffect::NotifyFrameChanged => {
                log_failure("notify frame changed", frame.notify_frame_changed());
            }
            ChromeEffect::UpdateTitleBar => {
                let state = host.window_state();
                let appearance =
                    TitleBarView::render(&self.decision(state), state, self.options.extend_to_title_bar);
                host.apply_title_bar(&appearance);
                self.title_bar_updated.emit(appearance);
            }
            ChromeEffect::Repaint => host.request_repaint(),
            ChromeEffect::PromptTint { initial } => {
                debug_assert!(!self.prompt_open, "tint prompt re-entered");
                if self.prompt_open {
                    return;
                }
                self.prompt_open = true;
                let picked = host.pick_color(initial, self.config.tint_prompt_title());
                self.prompt_open = false;
                tracing::debug!(target: targets::CONTROLLER, ?picked, "tint prompt closed");
                self.acrylic_tint = picked;
            }
            ChromeEffect::SetWindowBackground(background) => host.set_window_background(background),
            ChromeEffect::SetBlur { enabled, tint } => {
                let tint = match tint {
                    TintSource::Default => self.config.blur_tint(),
                    TintSource::Acrylic => self.acrylic_tint.unwrap_or(self.config.blur_tint()),
                };
                log_failure("set blur effect", frame.set_blur_effect(enabled, tint));
            }
            ChromeEffect::TransparencyAdvisory => {
                if !self.advisory_shown && frame.is_transparency_effect_enabled() {
                    self.advisory_shown = true;
                    host.show_advisory(&self.config.advisory());
                }
            }
            ChromeEffect::SetMaximizeEnabled(enabled) => host.set_maximize_enabled(enabled),
            ChromeEffect::SetFixedSize(fixed) => host.set_fixed_size(fixed),
            ChromeEffect::ShowWindow => host.show(),
            ChromeEffect::SetOptionAvailable(option, available) => host.set_option_available(option, available),
            ChromeEffect::RegisterFrameless => {
                log_failure("register frameless window", frame.register_frameless());
            }
            ChromeEffect::MarkInputTransparent => {
                frame.set_input_transparent_controls(&TitleBarControl::SYSTEM_BUTTONS);
            }
        }
    }
}

fn log_failure(operation: &str, result: ChromeResult<()>) {
    if let Err(e) = result {
        tracing::warn!(target: targets::CONTROLLER, error = %e, "{} failed", operation);
    }
}

impl std::fmt::Debug for ChromeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromeController")
            .field("options", &self.options)
            .field("capability", &self.capability)
            .field("theme", &self.theme)
            .field("acrylic_tint", &self.acrylic_tint)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}
