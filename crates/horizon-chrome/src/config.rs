//! Chrome configuration.
//!
//! `ChromeConfig` holds the options a window starts with and the texts and
//! colors used by the blur workflow. It can be built in code or read from
//! TOML:
//!
//! ```
//! use horizon_chrome::ChromeConfig;
//!
//! let config = ChromeConfig::from_toml_str(
//!     r##"
//!     blur_tint = "#10203080"
//!
//!     [options]
//!     extend_to_title_bar = false
//!     "##,
//! )
//! .unwrap();
//!
//! assert!(!config.options().extend_to_title_bar);
//! assert!(config.options().customize_title_bar);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use horizon_chrome_core::{ChromeError, ChromeOptions, ChromeResult, Color};

use crate::host::Advisory;

const DEFAULT_TINT_PROMPT_TITLE: &str = "Please select a gradient color";
const DEFAULT_ADVISORY_TITLE: &str = "Acrylic performance warning";
const DEFAULT_ADVISORY_TEXT: &str = "You have enabled the transparency effect in the personalize settings.\n\
     Dragging will be very laggy when the Acrylic effect is enabled.\n\
     Disabling the transparency effect can solve this issue temporarily.";

/// Configuration for a chrome controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Options applied when the controller is initialized.
    options: ChromeOptions,
    /// Tint blended over the blur, and the initial color of the tint prompt.
    blur_tint: Color,
    /// Title of the tint color prompt.
    tint_prompt_title: String,
    /// Title of the transparency advisory.
    advisory_title: String,
    /// Body of the transparency advisory.
    advisory_text: String,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            options: ChromeOptions::default(),
            blur_tint: Color::rgba(0, 0, 0, 127),
            tint_prompt_title: DEFAULT_TINT_PROMPT_TITLE.to_string(),
            advisory_title: DEFAULT_ADVISORY_TITLE.to_string(),
            advisory_text: DEFAULT_ADVISORY_TEXT.to_string(),
        }
    }
}

impl ChromeConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> ChromeResult<Self> {
        toml::from_str(source).map_err(|e| ChromeError::Config(e.to_string()))
    }

    /// Read a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> ChromeResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ChromeError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&source)
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_options(mut self, options: ChromeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_blur_tint(mut self, tint: Color) -> Self {
        self.blur_tint = tint;
        self
    }

    pub fn with_tint_prompt_title(mut self, title: impl Into<String>) -> Self {
        self.tint_prompt_title = title.into();
        self
    }

    pub fn with_advisory(mut self, title: impl Into<String>, text: impl Into<String>) -> Self {
        self.advisory_title = title.into();
        self.advisory_text = text.into();
        self
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn options(&self) -> &ChromeOptions {
        &self.options
    }

    pub fn blur_tint(&self) -> Color {
        self.blur_tint
    }

    pub fn tint_prompt_title(&self) -> &str {
        &self.tint_prompt_title
    }

    /// The transparency advisory shown when acrylic is turned on.
    pub fn advisory(&self) -> Advisory {
        Advisory {
            title: self.advisory_title.clone(),
            text: self.advisory_text.clone(),
        }
    }
}
