//! Frame flags shared with the native-frame collaborator.
//!
//! The controller writes these when the matching option changes; the frame
//! backend reads them whenever it recomputes its non-client behavior (on
//! registration and on every frame-changed notification).

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// One boolean frame flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameFlag {
    /// Keep the native title bar (set while the custom title bar is off).
    UseNativeTitleBar,
    /// Keep the native window frame around the custom title bar.
    PreserveFrame,
    /// Prefer acrylic over plain blur.
    ForceAcrylic,
}

impl fmt::Display for FrameFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UseNativeTitleBar => "use-native-title-bar",
            Self::PreserveFrame => "preserve-frame",
            Self::ForceAcrylic => "force-acrylic",
        };
        f.write_str(name)
    }
}

/// The three frame flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameFlags {
    pub use_native_title_bar: bool,
    pub preserve_frame: bool,
    pub force_acrylic: bool,
}

impl FrameFlags {
    pub fn get(&self, flag: FrameFlag) -> bool {
        match flag {
            FrameFlag::UseNativeTitleBar => self.use_native_title_bar,
            FrameFlag::PreserveFrame => self.preserve_frame,
            FrameFlag::ForceAcrylic => self.force_acrylic,
        }
    }

    pub fn set(&mut self, flag: FrameFlag, value: bool) {
        match flag {
            FrameFlag::UseNativeTitleBar => self.use_native_title_bar = value,
            FrameFlag::PreserveFrame => self.preserve_frame = value,
            FrameFlag::ForceAcrylic => self.force_acrylic = value,
        }
    }
}

/// Frame flags shared between the controller and a frame backend.
///
/// Cloning shares the same underlying flags.
#[derive(Debug, Clone, Default)]
pub struct SharedFrameFlags {
    inner: Arc<RwLock<FrameFlags>>,
}

impl SharedFrameFlags {
    /// Create shared flags with every flag cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create shared flags from an initial value.
    pub fn with_flags(flags: FrameFlags) -> Self {
        Self {
            inner: Arc::new(RwLock::new(flags)),
        }
    }

    /// Copy of the current flags.
    pub fn snapshot(&self) -> FrameFlags {
        *self.inner.read()
    }

    /// Read one flag.
    pub fn get(&self, flag: FrameFlag) -> bool {
        self.inner.read().get(flag)
    }

    /// Write one flag. Returns true if the value changed.
    pub fn set(&self, flag: FrameFlag, value: bool) -> bool {
        let mut flags = self.inner.write();
        let changed = flags.get(flag) != value;
        flags.set(flag, value);
        changed
    }
}
