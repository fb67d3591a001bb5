//! The application-drawn window border.

use horizon_chrome_core::{ChromeDecision, Color, Point, Rect};

/// Stroke width of the border lines.
pub const BORDER_WIDTH: f32 = 1.5;

/// Line-drawing surface for the border.
///
/// Implemented by whatever paints the window after its content.
pub trait BorderPainter {
    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f32);
}

/// Paints the four-sided window border.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderRenderer;

impl BorderRenderer {
    /// Stroke the border along `bounds` if the decision asks for one.
    ///
    /// Must run after the window content has been painted so the lines end
    /// up on top. Returns whether anything was drawn.
    pub fn paint(decision: &ChromeDecision, bounds: Rect, painter: &mut dyn BorderPainter) -> bool {
        if !decision.draw_border {
            return false;
        }

        let color = decision.border_color;
        let top_left = Point::new(bounds.left(), bounds.top());
        let top_right = Point::new(bounds.right(), bounds.top());
        let bottom_left = Point::new(bounds.left(), bounds.bottom());
        let bottom_right = Point::new(bounds.right(), bounds.bottom());

        painter.stroke_line(top_left, top_right, color, BORDER_WIDTH);
        painter.stroke_line(top_left, bottom_left, color, BORDER_WIDTH);
        painter.stroke_line(top_right, bottom_right, color, BORDER_WIDTH);
        painter.stroke_line(bottom_left, bottom_right, color, BORDER_WIDTH);
        true
    }
}
