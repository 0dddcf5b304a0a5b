//! Graph-space to device-space projection.
//!
//! Pure functions of the view window and the canvas size. Device row 0 is
//! the top of the canvas while graph y grows upward, so the y projection is
//! flipped. The window invariant guarantees the spans divided by here are
//! never zero.

use super::window::ViewWindow;
use crate::Real;

/// Pixel dimensions of the drawing canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// Projects graph coordinates onto one canvas under one view window.
///
/// Both projections return unrounded device coordinates so callers can
/// classify off-screen and non-finite values before committing to pixels;
/// NaN in means NaN out.
#[derive(Debug, Clone, Copy)]
pub struct CanvasTransform {
    pub window: ViewWindow,
    pub size: CanvasSize,
}

impl CanvasTransform {
    pub fn new(window: ViewWindow, size: CanvasSize) -> Self {
        Self { window, size }
    }

    pub fn device_x(&self, graph_x: Real) -> Real {
        (graph_x - self.window.x_min) / self.window.span_x() * self.size.width as Real
    }

    pub fn device_y(&self, graph_y: Real) -> Real {
        self.size.height as Real
            - (graph_y - self.window.y_min) / self.window.span_y() * self.size.height as Real
    }
}
