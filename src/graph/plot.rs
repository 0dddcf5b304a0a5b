//! Sampling and rasterization: turning equations into device-space line
//! segments.
//!
//! One sample per device column. Consecutive valid samples become polyline
//! segments unless the vertical pixel jump between them is large enough to
//! look like a pole rather than a steep slope; that heuristic is what keeps
//! asymptotes (tan near pi/2, 1/x near 0) from being bridged by a bogus
//! vertical line.

#[cfg(not(test))]
use crate::Vec;

use super::slots::MAX_SLOTS;
use super::transform::{CanvasSize, CanvasTransform};
use crate::Real;
use crate::engine::evaluate_with_variable;

/// One device-space line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

/// One per-column sample: graph coordinates, device coordinates, and
/// whether the point participates in rendering.
///
/// Produced during a plot pass and consumed immediately; only the previous
/// sample is retained across iterations.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub graph_x: Real,
    pub graph_y: Real,
    pub device_x: i32,
    pub device_y: i32,
    pub valid: bool,
}

/// The trace cursor's rendered position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceMark {
    pub device_x: i32,
    pub device_y: i32,
    pub slot: usize,
}

impl TraceMark {
    /// Full-height and full-width crosshair lines through the mark.
    pub fn crosshair(&self, size: CanvasSize) -> [Segment; 2] {
        [
            Segment {
                x0: self.device_x,
                y0: 0,
                x1: self.device_x,
                y1: size.height as i32,
            },
            Segment {
                x0: 0,
                y0: self.device_y,
                x1: size.width as i32,
                y1: self.device_y,
            },
        ]
    }
}

/// Everything the external rasterizer needs for one frame, regenerated on
/// every state-changing event.
#[derive(Debug, Clone)]
pub struct DrawList {
    pub grid: Vec<Segment>,
    pub axes: Vec<Segment>,
    pub curves: [Vec<Segment>; MAX_SLOTS],
    pub trace: Option<TraceMark>,
}

/// Evaluate one equation at one graph x and classify the result.
///
/// A sample is valid when the value is finite and its device y lands within
/// a generous off-screen margin (one canvas height above, one below), so
/// steep but connectable segments survive while runaway values do not.
pub fn sample(equation: &str, graph_x: Real, transform: &CanvasTransform) -> Sample {
    let height = transform.size.height as Real;
    let graph_y = evaluate_with_variable(equation, graph_x);
    let device_x = transform.device_x(graph_x);
    let device_y = transform.device_y(graph_y);
    let valid = graph_y.is_finite() && device_y >= -height && device_y <= 2.0 * height;
    Sample {
        graph_x,
        graph_y,
        device_x: device_x as i32,
        device_y: device_y as i32,
        valid,
    }
}

/// Plot one equation across the full window width.
///
/// An equation with no valid samples anywhere yields an empty segment list;
/// it never aborts the draw pass for other slots.
pub fn plot_curve(equation: &str, transform: &CanvasTransform) -> Vec<Segment> {
    let width = transform.size.width;
    let break_threshold = transform.size.height as i32 * 2;
    let step = transform.window.span_x() / width as Real;

    let mut segments = Vec::new();
    let mut previous: Option<Sample> = None;

    for column in 0..=width {
        let graph_x = transform.window.x_min + step * column as Real;
        let current = sample(equation, graph_x, transform);

        if current.valid {
            if let Some(prev) = previous {
                if prev.valid {
                    let jump = (current.device_y - prev.device_y).abs();
                    if jump < break_threshold {
                        segments.push(Segment {
                            x0: prev.device_x,
                            y0: prev.device_y,
                            x1: current.device_x,
                            y1: current.device_y,
                        });
                    }
                }
            }
        }
        previous = Some(current);
    }

    segments
}

/// Axis lines, drawn only when the zero coordinate is inside the window on
/// that axis.
pub fn axis_lines(transform: &CanvasTransform) -> Vec<Segment> {
    let window = &transform.window;
    let mut lines = Vec::new();

    if window.x_min <= 0.0 && window.x_max >= 0.0 {
        let axis_x = transform.device_x(0.0) as i32;
        lines.push(Segment {
            x0: axis_x,
            y0: 0,
            x1: axis_x,
            y1: transform.size.height as i32,
        });
    }

    if window.y_min <= 0.0 && window.y_max >= 0.0 {
        let axis_y = transform.device_y(0.0) as i32;
        lines.push(Segment {
            x0: 0,
            y0: axis_y,
            x1: transform.size.width as i32,
            y1: axis_y,
        });
    }

    lines
}

/// Grid lines at the shared tick spacing, culled to the canvas.
///
/// Ticks within ±0.001 of zero are skipped; that line is the axis.
pub fn grid_lines(transform: &CanvasTransform) -> Vec<Segment> {
    let window = &transform.window;
    let tick = window.tick_spacing();
    let width = transform.size.width as i32;
    let height = transform.size.height as i32;
    let mut lines = Vec::new();

    let mut graph_x = (window.x_min / tick) as i64 as Real * tick;
    while graph_x <= window.x_max {
        if !(graph_x > -0.001 && graph_x < 0.001) {
            let device_x = transform.device_x(graph_x) as i32;
            if device_x >= 0 && device_x < width {
                lines.push(Segment {
                    x0: device_x,
                    y0: 0,
                    x1: device_x,
                    y1: height,
                });
            }
        }
        graph_x += tick;
    }

    let mut graph_y = (window.y_min / tick) as i64 as Real * tick;
    while graph_y <= window.y_max {
        if !(graph_y > -0.001 && graph_y < 0.001) {
            let device_y = transform.device_y(graph_y) as i32;
            if device_y >= 0 && device_y < height {
                lines.push(Segment {
                    x0: 0,
                    y0: device_y,
                    x1: width,
                    y1: device_y,
                });
            }
        }
        graph_y += tick;
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::window::ViewWindow;

    fn transform() -> CanvasTransform {
        CanvasTransform::new(
            ViewWindow::default(),
            CanvasSize {
                width: 320,
                height: 200,
            },
        )
    }

    #[test]
    fn test_constant_function_is_one_unbroken_polyline() {
        let segments = plot_curve("1", &transform());
        assert_eq!(segments.len(), 320); // 321 samples, all connected
        for s in &segments {
            assert_eq!(s.y0, s.y1);
        }
    }

    #[test]
    fn test_error_equation_draws_nothing() {
        assert!(plot_curve("nonsense", &transform()).is_empty());
        assert!(plot_curve("", &transform()).is_empty());
    }

    #[test]
    fn test_pole_produces_a_gap() {
        // 1/x has a pole at x = 0, inside the default window
        let segments = plot_curve("1/x", &transform());
        assert!(!segments.is_empty());
        // no segment may bridge the pole column
        let pole_x = transform().device_x(0.0) as i32;
        for s in &segments {
            assert!(
                s.x1 < pole_x || s.x0 > pole_x,
                "segment {:?} bridges the pole at column {}",
                s,
                pole_x
            );
        }
    }

    #[test]
    fn test_offscreen_samples_are_invalid() {
        let t = transform();
        // x^2 at x = 10 is y = 100, far above the window's top margin
        assert!(!sample("x^2", 10.0, &t).valid);
        assert!(sample("x^2", 0.5, &t).valid);
    }

    #[test]
    fn test_axes_drawn_only_when_zero_visible() {
        let mut t = transform();
        assert_eq!(axis_lines(&t).len(), 2);

        t.window.x_min = 1.0;
        t.window.x_max = 21.0;
        assert_eq!(axis_lines(&t).len(), 1); // y axis is out of view

        t.window.y_min = 1.0;
        t.window.y_max = 21.0;
        assert!(axis_lines(&t).is_empty());
    }

    #[test]
    fn test_grid_skips_the_axis_tick() {
        let t = transform();
        let axis_x = t.device_x(0.0) as i32;
        let axis_y = t.device_y(0.0) as i32;
        for line in grid_lines(&t) {
            let vertical = line.x0 == line.x1;
            if vertical {
                assert_ne!(line.x0, axis_x);
            } else {
                assert_ne!(line.y0, axis_y);
            }
        }
    }
}
