//! Windows frame backend and native dialogs.
//!
//! [`WindowsFrameBackend`] drives a winit window: it removes the native
//! decorations while the title bar is customized, keeps the DWM shadow,
//! hit-tests the synthetic title bar and applies blur or acrylic through
//! `window-vibrancy`.
//!
//! Raw window messages can be fed to the controller from a winit message
//! hook:
//!
//! ```ignore
//! use winit::platform::windows::EventLoopBuilderExtWindows;
//!
//! let queue = message_queue.clone();
//! let event_loop = EventLoop::builder()
//!     .with_msg_hook(move |msg| {
//!         if let Some(msg) = unsafe { native_message_from_msg(msg) } {
//!             queue.lock().push(msg);
//!         }
//!         false // always let the default handler run
//!     })
//!     .build()?;
//! ```

use std::ffi::c_void;
use std::sync::Arc;

use horizon_chrome_core::logging::targets;
use horizon_chrome_core::{ChromeError, ChromeResult, Color, Margins, OsVersion, Point, Size};
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use winit::dpi::PhysicalPosition;
use winit::window::Window;

use windows::Wdk::System::SystemServices::RtlGetVersion;
use windows::Win32::Foundation::{BOOL, COLORREF, ERROR_SUCCESS, HWND, LPARAM};
use windows::Win32::Graphics::Dwm::{DwmExtendFrameIntoClientArea, DwmGetColorizationColor};
use windows::Win32::System::Registry::{HKEY_CURRENT_USER, RRF_RT_REG_DWORD, RegGetValueW};
use windows::Win32::System::SystemInformation::OSVERSIONINFOW;
use windows::Win32::UI::Controls::Dialogs::{CC_ANYCOLOR, CC_FULLOPEN, CC_RGBINIT, CHOOSECOLORW, ChooseColorW};
use windows::Win32::UI::Controls::MARGINS;
use windows::Win32::UI::HiDpi::{GetDpiForWindow, GetSystemMetricsForDpi};
use windows::Win32::UI::WindowsAndMessaging::{
    MB_ICONWARNING, MB_OK, MSG, MessageBoxW, SM_CXPADDEDBORDER, SM_CYCAPTION, SM_CYSIZEFRAME,
    SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOOWNERZORDER, SWP_NOSIZE, SWP_NOZORDER,
    SetWindowPos,
};
use windows::core::{PCWSTR, w};

use crate::backend::{FrameBackend, TitleBarControl};
use crate::flags::SharedFrameFlags;
use crate::frame::{ChromeHitTestResult, FramelessHitTester};
use crate::host::Advisory;
use crate::native::NativeMessage;
use crate::title_bar::TitleBarMetrics;

const USER_DEFAULT_DPI: u32 = 96;
/// Caption height used when the window handle is unavailable.
const FALLBACK_TITLE_BAR_HEIGHT: u32 = 31;

/// Frame backend for a winit window on Windows.
pub struct WindowsFrameBackend {
    window: Arc<Window>,
    flags: SharedFrameFlags,
    hit_tester: FramelessHitTester,
    content_margins: Margins,
    registered: bool,
}

impl WindowsFrameBackend {
    /// Create a backend for `window`. `flags` must be shared with the
    /// controller.
    pub fn new(window: Arc<Window>, flags: SharedFrameFlags) -> Self {
        Self {
            window,
            flags,
            hit_tester: FramelessHitTester::new(),
            content_margins: Margins::ZERO,
            registered: false,
        }
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn hit_tester(&self) -> &FramelessHitTester {
        &self.hit_tester
    }

    /// The margins currently reserved by the content-margin override.
    pub fn content_margins(&self) -> Margins {
        self.content_margins
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Hit-test a cursor position reported by winit.
    pub fn hit_test(&mut self, position: PhysicalPosition<f64>) -> ChromeHitTestResult {
        let scale = self.window.scale_factor();
        let logical = position.to_logical::<f32>(scale);
        let size = self.window.inner_size().to_logical::<f32>(scale);
        self.hit_tester
            .set_resize_enabled(self.window.is_resizable() && !self.window.is_maximized());
        self.hit_tester
            .hit_test(Point::new(logical.x, logical.y), Size::new(size.width, size.height))
    }

    fn hwnd(&self) -> ChromeResult<HWND> {
        let handle = self
            .window
            .window_handle()
            .map_err(|e| ChromeError::HandleAccess(e.to_string()))?;
        match handle.as_raw() {
            RawWindowHandle::Win32(handle) => Ok(HWND(handle.hwnd.get() as *mut c_void)),
            other => Err(ChromeError::HandleAccess(format!(
                "expected a Win32 window handle, got {other:?}"
            ))),
        }
    }

    /// Whether the frame is currently left to the system.
    fn uses_native_frame(&self) -> bool {
        !self.registered || self.flags.snapshot().use_native_title_bar
    }

    /// Bring decorations, DWM frame and hit-testing in line with the flags.
    fn apply_frame_flags(&mut self) -> ChromeResult<()> {
        let flags = self.flags.snapshot();
        let native = self.uses_native_frame();
        self.window.set_decorations(native);

        let caption = (!native && self.content_margins.top > 0)
            .then(|| TitleBarMetrics::new(self.content_margins.top as u32));
        self.hit_tester.set_title_bar(caption);

        // A 1px DWM frame keeps the system shadow and, with a preserved
        // frame, the system border.
        let inset = if native || !flags.preserve_frame { 0 } else { 1 };
        let margins = MARGINS {
            cxLeftWidth: 0,
            cxRightWidth: 0,
            cyTopHeight: inset,
            cyBottomHeight: 0,
        };
        let hwnd = self.hwnd()?;
        // SAFETY: hwnd belongs to the live winit window owned by self.
        unsafe { DwmExtendFrameIntoClientArea(hwnd, &margins) }
            .map_err(|e| ChromeError::Platform(format!("DwmExtendFrameIntoClientArea failed: {e}")))?;

        tracing::trace!(
            target: targets::PLATFORM,
            native,
            preserve_frame = flags.preserve_frame,
            force_acrylic = flags.force_acrylic,
            "applied frame flags"
        );
        Ok(())
    }
}

impl FrameBackend for WindowsFrameBackend {
    fn title_bar_height(&self, enlarged: bool) -> u32 {
        let hwnd = match self.hwnd() {
            Ok(hwnd) => hwnd,
            Err(e) => {
                tracing::warn!(target: targets::PLATFORM, error = %e, "using fallback title bar height");
                return FALLBACK_TITLE_BAR_HEIGHT;
            }
        };

        // SAFETY: plain metric queries on a valid window handle.
        let (dpi, physical) = unsafe {
            let dpi = GetDpiForWindow(hwnd).max(USER_DEFAULT_DPI);
            let mut height = GetSystemMetricsForDpi(SM_CYCAPTION, dpi);
            if enlarged {
                height += GetSystemMetricsForDpi(SM_CYSIZEFRAME, dpi);
                height += GetSystemMetricsForDpi(SM_CXPADDEDBORDER, dpi);
            }
            (dpi, height.max(0) as u32)
        };
        physical * USER_DEFAULT_DPI / dpi
    }

    fn register_frameless(&mut self) -> ChromeResult<()> {
        self.registered = true;
        self.notify_frame_changed()
    }

    fn unregister_frameless(&mut self) -> ChromeResult<()> {
        self.registered = false;
        self.content_margins = Margins::ZERO;
        self.notify_frame_changed()
    }

    fn set_input_transparent_controls(&mut self, controls: &[TitleBarControl]) {
        self.hit_tester.set_input_transparent(controls);
    }

    fn is_colorization_enabled(&self) -> bool {
        read_dword(w!("Software\\Microsoft\\Windows\\DWM"), w!("ColorPrevalence")) == Some(1)
    }

    fn colorization_color(&self) -> Color {
        let mut color = 0u32;
        let mut opaque = BOOL::default();
        // SAFETY: both out-pointers refer to live locals.
        match unsafe { DwmGetColorizationColor(&mut color, &mut opaque) } {
            Ok(()) => Color::from_argb(color),
            Err(e) => {
                tracing::warn!(target: targets::PLATFORM, error = %e, "DwmGetColorizationColor failed");
                Color::WHITE
            }
        }
    }

    fn set_blur_effect(&mut self, enabled: bool, tint: Color) -> ChromeResult<()> {
        let window = self.window.as_ref();
        // Both effects are cleared first so switching between them works.
        let _ = window_vibrancy::clear_acrylic(window);
        let _ = window_vibrancy::clear_blur(window);
        if !enabled {
            return Ok(());
        }

        let rgba = (tint.r, tint.g, tint.b, tint.a);
        let result = if self.flags.snapshot().force_acrylic {
            window_vibrancy::apply_acrylic(window, Some(rgba))
        } else {
            window_vibrancy::apply_blur(window, Some(rgba))
        };
        result.map_err(|e| match e {
            window_vibrancy::Error::UnsupportedPlatformVersion(reason) => {
                ChromeError::Unsupported(reason.to_string())
            }
            other => ChromeError::Platform(other.to_string()),
        })
    }

    fn is_transparency_effect_enabled(&self) -> bool {
        read_dword(
            w!("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize"),
            w!("EnableTransparency"),
        ) == Some(1)
    }

    fn set_content_margins(&mut self, margins: Margins) -> ChromeResult<()> {
        self.content_margins = margins;
        self.apply_frame_flags()
    }

    fn notify_frame_changed(&mut self) -> ChromeResult<()> {
        self.apply_frame_flags()?;
        let hwnd = self.hwnd()?;
        // SAFETY: hwnd belongs to the live winit window owned by self.
        unsafe {
            SetWindowPos(
                hwnd,
                HWND::default(),
                0,
                0,
                0,
                0,
                SWP_FRAMECHANGED | SWP_NOACTIVATE | SWP_NOSIZE | SWP_NOMOVE | SWP_NOZORDER | SWP_NOOWNERZORDER,
            )
        }
        .map_err(|e| ChromeError::Platform(format!("SetWindowPos failed: {e}")))
    }
}

impl std::fmt::Debug for WindowsFrameBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowsFrameBackend")
            .field("window", &self.window.id())
            .field("flags", &self.flags.snapshot())
            .field("content_margins", &self.content_margins)
            .field("registered", &self.registered)
            .finish()
    }
}

fn read_dword(subkey: PCWSTR, value: PCWSTR) -> Option<u32> {
    let mut data = 0u32;
    let mut size = std::mem::size_of::<u32>() as u32;
    // SAFETY: data and size are live locals of the advertised size.
    let status = unsafe {
        RegGetValueW(
            HKEY_CURRENT_USER,
            subkey,
            value,
            RRF_RT_REG_DWORD,
            None,
            Some(&mut data as *mut u32 as *mut c_void),
            Some(&mut size),
        )
    };
    (status == ERROR_SUCCESS).then_some(data)
}

/// The running Windows version, bypassing the manifest-based version lie.
pub(crate) fn query_os_version() -> Option<OsVersion> {
    let mut info = OSVERSIONINFOW {
        dwOSVersionInfoSize: std::mem::size_of::<OSVERSIONINFOW>() as u32,
        ..Default::default()
    };
    // SAFETY: info is a properly sized OSVERSIONINFOW.
    let status = unsafe { RtlGetVersion(&mut info) };
    if status.is_err() {
        tracing::warn!(target: targets::PLATFORM, ?status, "RtlGetVersion failed");
        return None;
    }
    Some(OsVersion::new(info.dwMajorVersion, info.dwMinorVersion, info.dwBuildNumber))
}

/// Read a message passed to a winit message hook.
///
/// # Safety
///
/// `msg` must be null or point to a valid `MSG`, as winit guarantees for
/// the pointer handed to `with_msg_hook`.
pub unsafe fn native_message_from_msg(msg: *const c_void) -> Option<NativeMessage> {
    // SAFETY: guaranteed by the caller.
    let msg = unsafe { (msg as *const MSG).as_ref() }?;
    Some(NativeMessage::new(msg.message, msg.wParam.0, msg.lParam.0))
}

fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

fn owner_hwnd(owner: Option<&Window>) -> HWND {
    owner
        .and_then(|window| window.window_handle().ok())
        .and_then(|handle| match handle.as_raw() {
            RawWindowHandle::Win32(handle) => Some(HWND(handle.hwnd.get() as *mut c_void)),
            _ => None,
        })
        .unwrap_or_default()
}

/// Show the system color dialog.
///
/// The system dialog has no alpha channel, so the picked color keeps the
/// alpha of `initial`. Returns `None` when the user cancels.
pub fn pick_color(owner: Option<&Window>, initial: Color) -> Option<Color> {
    let mut custom_colors = [COLORREF(0); 16];
    let initial_rgb = COLORREF((initial.r as u32) | ((initial.g as u32) << 8) | ((initial.b as u32) << 16));

    let mut cc = CHOOSECOLORW {
        lStructSize: std::mem::size_of::<CHOOSECOLORW>() as u32,
        hwndOwner: owner_hwnd(owner),
        hInstance: HWND::default(),
        rgbResult: initial_rgb,
        lpCustColors: custom_colors.as_mut_ptr(),
        Flags: CC_ANYCOLOR | CC_FULLOPEN | CC_RGBINIT,
        lCustData: LPARAM(0),
        lpfnHook: None,
        lpTemplateName: PCWSTR::null(),
    };

    // SAFETY: cc and custom_colors outlive the modal dialog call.
    if !unsafe { ChooseColorW(&mut cc) }.as_bool() {
        return None;
    }
    let rgb = cc.rgbResult.0;
    Some(Color::rgba(
        (rgb & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        ((rgb >> 16) & 0xFF) as u8,
        initial.a,
    ))
}

/// Show an advisory as a warning message box.
pub fn show_advisory(owner: Option<&Window>, advisory: &Advisory) {
    let title = to_wide(&advisory.title);
    let text = to_wide(&advisory.text);
    // SAFETY: both strings are NUL-terminated and outlive the call.
    let _ = unsafe {
        MessageBoxW(
            owner_hwnd(owner),
            PCWSTR(text.as_ptr()),
            PCWSTR(title.as_ptr()),
            MB_ICONWARNING | MB_OK,
        )
    };
}
