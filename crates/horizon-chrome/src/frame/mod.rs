//! Frameless window interaction.
//!
//! Once the native frame is gone the window manager no longer knows where
//! the caption and the resize edges are. [`FramelessHitTester`] answers that
//! from the title bar metrics, and [`begin_frame_drag`] hands a press on the
//! caption or an edge back to the window manager.
//!
//! ```ignore
//! let result = hit_tester.hit_test(cursor, window_size);
//! window.set_cursor(horizon_chrome::frame::cursor_for_result(result));
//! if pressed {
//!     horizon_chrome::frame::begin_frame_drag(&window, result)?;
//! }
//! ```


pub use hit_test::{ChromeHitTestResult, FramelessHitTester};
pub use winit::window::ResizeDirection;

use horizon_chrome_core::{ChromeError, ChromeResult};
use winit::window::{CursorIcon, Window};

/// Start a window move or resize for a press at `result`.
///
/// Does nothing for results the toolkit handles itself.
pub fn begin_frame_drag(window: &Window, result: ChromeHitTestResult) -> ChromeResult<()> {
    match result {
        ChromeHitTestResult::Caption => window
            .drag_window()
            .map_err(|e| ChromeError::Platform(format!("drag_window failed: {e}"))),
        ChromeHitTestResult::ResizeBorder(direction) => window
            .drag_resize_window(direction)
            .map_err(|e| ChromeError::Platform(format!("drag_resize_window failed: {e}"))),
        _ => Ok(()),
    }
}

/// Cursor to show while hovering `result`.
pub fn cursor_for_result(result: ChromeHitTestResult) -> CursorIcon {
    match result {
        ChromeHitTestResult::ResizeBorder(direction) => match direction {
            ResizeDirection::North | ResizeDirection::South => CursorIcon::NsResize,
            ResizeDirection::East | ResizeDirection::West => CursorIcon::EwResize,
            ResizeDirection::NorthWest | ResizeDirection::SouthEast => CursorIcon::NwseResize,
            ResizeDirection::NorthEast | ResizeDirection::SouthWest => CursorIcon::NeswResize,
        },
        _ => CursorIcon::Default,
    }
}
