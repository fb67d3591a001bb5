//! User chrome options and platform capability flags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a single user-controlled chrome option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeOption {
    /// Draw the application's own title bar instead of the native one.
    CustomizeTitleBar,
    /// Keep the native window frame even when the title bar is customized.
    PreserveFrame,
    /// Let the content (and blur) extend under a transparent title bar.
    ExtendToTitleBar,
    /// Use the acrylic effect instead of plain blur where supported.
    ForceAcrylic,
    /// Allow the user to resize and maximize the window.
    Resizable,
    /// Blur the backdrop behind the window.
    BlurEnabled,
}

impl ChromeOption {
    /// All options, in the order they are applied during initialization.
    pub const ALL: [ChromeOption; 6] = [
        ChromeOption::ForceAcrylic,
        ChromeOption::PreserveFrame,
        ChromeOption::CustomizeTitleBar,
        ChromeOption::ExtendToTitleBar,
        ChromeOption::BlurEnabled,
        ChromeOption::Resizable,
    ];
}

impl fmt::Display for ChromeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CustomizeTitleBar => "customize-title-bar",
            Self::PreserveFrame => "preserve-frame",
            Self::ExtendToTitleBar => "extend-to-title-bar",
            Self::ForceAcrylic => "force-acrylic",
            Self::Resizable => "resizable",
            Self::BlurEnabled => "blur",
        };
        f.write_str(name)
    }
}

/// User-controlled chrome toggles.
///
/// The default is the configuration a window is shown with: everything on
/// except frame preservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeOptions {
    pub customize_title_bar: bool,
    pub preserve_frame: bool,
    pub extend_to_title_bar: bool,
    pub force_acrylic: bool,
    pub resizable: bool,
    pub blur_enabled: bool,
}

impl Default for ChromeOptions {
    fn default() -> Self {
        Self {
            customize_title_bar: true,
            preserve_frame: false,
            extend_to_title_bar: true,
            force_acrylic: true,
            resizable: true,
            blur_enabled: true,
        }
    }
}

impl ChromeOptions {
    /// Every option off. This is the state of a window before its options
    /// have been applied.
    pub const fn disabled() -> Self {
        Self {
            customize_title_bar: false,
            preserve_frame: false,
            extend_to_title_bar: false,
            force_acrylic: false,
            resizable: false,
            blur_enabled: false,
        }
    }

    /// Read one option.
    pub fn get(&self, option: ChromeOption) -> bool {
        match option {
            ChromeOption::CustomizeTitleBar => self.customize_title_bar,
            ChromeOption::PreserveFrame => self.preserve_frame,
            ChromeOption::ExtendToTitleBar => self.extend_to_title_bar,
            ChromeOption::ForceAcrylic => self.force_acrylic,
            ChromeOption::Resizable => self.resizable,
            ChromeOption::BlurEnabled => self.blur_enabled,
        }
    }

    /// Write one option.
    pub fn set(&mut self, option: ChromeOption, value: bool) {
        let slot = match option {
            ChromeOption::CustomizeTitleBar => &mut self.customize_title_bar,
            ChromeOption::PreserveFrame => &mut self.preserve_frame,
            ChromeOption::ExtendToTitleBar => &mut self.extend_to_title_bar,
            ChromeOption::ForceAcrylic => &mut self.force_acrylic,
            ChromeOption::Resizable => &mut self.resizable,
            ChromeOption::BlurEnabled => &mut self.blur_enabled,
        };
        *slot = value;
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_customize_title_bar(mut self, value: bool) -> Self {
        self.customize_title_bar = value;
        self
    }

    pub fn with_preserve_frame(mut self, value: bool) -> Self {
        self.preserve_frame = value;
        self
    }

    pub fn with_extend_to_title_bar(mut self, value: bool) -> Self {
        self.extend_to_title_bar = value;
        self
    }

    pub fn with_force_acrylic(mut self, value: bool) -> Self {
        self.force_acrylic = value;
        self
    }

    pub fn with_resizable(mut self, value: bool) -> Self {
        self.resizable = value;
        self
    }

    pub fn with_blur_enabled(mut self, value: bool) -> Self {
        self.blur_enabled = value;
        self
    }
}

/// An operating system version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl OsVersion {
    /// Windows 10, first release.
    pub const WINDOWS_10: Self = Self::new(10, 0, 10240);
    /// Windows 10 version 1803, the first release with acrylic blur.
    pub const WINDOWS_10_1803: Self = Self::new(10, 0, 17134);

    pub const fn new(major: u32, minor: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            build,
        }
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

/// What the running OS can do for window chrome.
///
/// Computed once at startup and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlatformCapability {
    /// The OS draws (and lets applications draw) themed window borders.
    pub supports_themed_chrome: bool,
    /// The compositor supports the acrylic backdrop.
    pub supports_acrylic: bool,
}

impl PlatformCapability {
    pub const fn new(supports_themed_chrome: bool, supports_acrylic: bool) -> Self {
        Self {
            supports_themed_chrome,
            supports_acrylic,
        }
    }

    /// No themed chrome and no acrylic.
    pub const fn unsupported() -> Self {
        Self::new(false, false)
    }

    /// Capability of a Windows release.
    ///
    /// Themed chrome needs Windows 10 (any build); acrylic needs 1803 or later.
    pub fn from_os_version(version: OsVersion) -> Self {
        let themed = version.major >= OsVersion::WINDOWS_10.major;
        Self::new(themed, themed && version >= OsVersion::WINDOWS_10_1803)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_enabled() {
        let options = ChromeOptions::default();
        assert!(options.customize_title_bar);
        assert!(!options.preserve_frame);
        assert!(options.extend_to_title_bar);
        assert!(options.blur_enabled);
        assert!(options.resizable);
    }

    #[test]
    fn test_get_set_roundtrip_each_option() {
        let mut options = ChromeOptions::disabled();
        for option in ChromeOption::ALL {
            assert!(!options.get(option));
            options.set(option, true);
            assert!(options.get(option), "{option} was not set");
        }
    }

    #[test]
    fn test_capability_from_version() {
        assert_eq!(
            PlatformCapability::from_os_version(OsVersion::new(6, 3, 9600)),
            PlatformCapability::unsupported()
        );
        assert_eq!(
            PlatformCapability::from_os_version(OsVersion::new(10, 0, 16299)),
            PlatformCapability::new(true, false)
        );
        assert_eq!(
            PlatformCapability::from_os_version(OsVersion::new(10, 0, 22631)),
            PlatformCapability::new(true, true)
        );
    }

    #[test]
    fn test_options_deserialize_partial() {
        let options: ChromeOptions = toml::from_str("preserve_frame = true").unwrap();
        assert!(options.preserve_frame);
        assert!(options.customize_title_bar);
    }
}
