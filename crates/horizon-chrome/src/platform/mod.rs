//! Platform detection and native collaborators.
//!
//! Capability detection works everywhere: platforms without themed chrome
//! report [`PlatformCapability::unsupported`], which makes the chrome fall
//! back to plain borders and the native look. The frame backend and the
//! native dialogs are only available on Windows.

#[cfg(target_os = "windows")]
pub mod windows;

use horizon_chrome_core::logging::targets;
use horizon_chrome_core::{OsVersion, PlatformCapability};

/// The running Windows version, or `None` on other platforms or if the
/// version query fails.
pub fn os_version() -> Option<OsVersion> {
    #[cfg(target_os = "windows")]
    {
        windows::query_os_version()
    }
    #[cfg(not(target_os = "windows"))]
    {
        None
    }
}

/// Detect what the running OS supports. Computed once per window.
pub fn detect_capability() -> PlatformCapability {
    let capability = match os_version() {
        Some(version) => PlatformCapability::from_os_version(version),
        None => PlatformCapability::unsupported(),
    };
    tracing::debug!(
        target: targets::PLATFORM,
        themed_chrome = capability.supports_themed_chrome,
        acrylic = capability.supports_acrylic,
        "detected platform capability"
    );
    capability
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_unsupported_off_windows() {
        assert_eq!(os_version(), None);
        assert_eq!(detect_capability(), PlatformCapability::unsupported());
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn test_capability_matches_version() {
        if let Some(version) = os_version() {
            assert_eq!(detect_capability(), PlatformCapability::from_os_version(version));
        }
    }
}
