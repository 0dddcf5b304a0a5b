//! The graph engine: function slots, view window, trace cursor, and the
//! screen state machine that drives them from host navigation events.
//!
//! The host UI owns widgets and input hardware; this module owns every
//! decision. Events come in through [`GraphSession::handle_event`], which
//! returns a [`Redraw`] set telling the host what to repaint, and the
//! regenerated [`DrawList`] comes back out through [`GraphSession::draw`].
//! Everything is synchronous: a state-changing event is fully applied by the
//! time `handle_event` returns.

pub mod plot;
pub mod slots;
pub mod trace;
pub mod transform;
pub mod window;

pub use plot::{DrawList, Sample, Segment, TraceMark};
pub use slots::{EQUATION_CAPACITY, FunctionSlot, MAX_SLOTS, SLOT_COLORS, SlotSet};
pub use trace::TraceState;
pub use transform::{CanvasSize, CanvasTransform};
pub use window::ViewWindow;

extern crate alloc;

#[cfg(not(test))]
use crate::{String, Vec};
#[cfg(not(test))]
use alloc::format;
#[cfg(test)]
use std::string::String;
#[cfg(test)]
use std::vec::Vec;

use crate::Real;
use crate::engine::{evaluate_with_variable, format_result};
use bitflags::bitflags;
use core::array;

/// Which screen of the graph application is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Editing which slots are enabled and what equations they hold.
    FunctionList,
    /// Rendering the enabled functions over the current view window.
    GraphView,
}

/// A navigation event from the host UI.
///
/// These are already abstract: the host maps its keypad or encoder to these
/// before calling in. `Confirm` doubles as start-edit on the function list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Back,
    ToggleEnabled,
    CommitEdit(&'a str),
    CancelEdit,
    ToggleTrace,
    ZoomIn,
    ZoomOut,
    ResetView,
    ShowGraph,
}

bitflags! {
    /// What the host must repaint after an event. Empty means the event
    /// changed nothing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Redraw: u8 {
        /// The function list UI (selection, checkboxes, equation labels).
        const LIST = 1;
        /// The graph canvas (grid, axes, curves, trace cursor).
        const CANVAS = 2;
        /// The info readouts (window bounds, trace coordinates).
        const INFO = 4;
    }
}

/// One graphing session: slots, window, trace, and screen state.
pub struct GraphSession {
    slots: SlotSet,
    window: ViewWindow,
    trace: TraceState,
    screen: Screen,
    selected: usize,
    editing: Option<usize>,
    canvas: CanvasSize,
}

impl GraphSession {
    /// Start a session for a canvas of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            slots: SlotSet::default(),
            window: ViewWindow::default(),
            trace: TraceState::default(),
            screen: Screen::FunctionList,
            selected: 0,
            editing: None,
            canvas: CanvasSize { width, height },
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn window(&self) -> &ViewWindow {
        &self.window
    }

    pub fn slots(&self) -> &SlotSet {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut SlotSet {
        &mut self.slots
    }

    pub fn trace(&self) -> &TraceState {
        &self.trace
    }

    /// Selection cursor on the function list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The slot being edited, if the list is in edit mode.
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    /// Apply one navigation event and report what needs repainting.
    pub fn handle_event(&mut self, event: Event<'_>) -> Redraw {
        match self.screen {
            Screen::FunctionList => self.handle_list_event(event),
            Screen::GraphView => self.handle_graph_event(event),
        }
    }

    fn handle_list_event(&mut self, event: Event<'_>) -> Redraw {
        if let Some(index) = self.editing {
            return match event {
                Event::CommitEdit(text) => {
                    self.slots.slot_mut(index).set_equation(text);
                    self.editing = None;
                    Redraw::LIST
                }
                Event::CancelEdit | Event::Back => {
                    self.editing = None;
                    Redraw::LIST
                }
                _ => Redraw::empty(),
            };
        }

        match event {
            Event::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                    Redraw::LIST
                } else {
                    Redraw::empty()
                }
            }
            Event::Down => {
                if self.selected < MAX_SLOTS - 1 {
                    self.selected += 1;
                    Redraw::LIST
                } else {
                    Redraw::empty()
                }
            }
            Event::Confirm => {
                self.editing = Some(self.selected);
                Redraw::LIST
            }
            Event::ToggleEnabled => {
                let slot = self.slots.slot_mut(self.selected);
                slot.enabled = !slot.enabled;
                Redraw::LIST
            }
            Event::ShowGraph | Event::Right => {
                self.screen = Screen::GraphView;
                Redraw::CANVAS | Redraw::INFO
            }
            _ => Redraw::empty(),
        }
    }

    fn handle_graph_event(&mut self, event: Event<'_>) -> Redraw {
        match event {
            Event::Left => {
                if self.trace.enabled {
                    self.trace.step_left(&self.window);
                } else {
                    self.window.pan_left();
                }
            }
            Event::Right => {
                if self.trace.enabled {
                    self.trace.step_right(&self.window);
                } else {
                    self.window.pan_right();
                }
            }
            Event::Up => {
                if self.trace.enabled {
                    self.trace.cycle_next(&self.slots);
                } else {
                    self.window.pan_up();
                }
            }
            Event::Down => {
                if self.trace.enabled {
                    self.trace.cycle_prev(&self.slots);
                } else {
                    self.window.pan_down();
                }
            }
            Event::ZoomIn => self.window.zoom_in(),
            Event::ZoomOut => self.window.zoom_out(),
            Event::ToggleTrace => self.trace.toggle(&self.slots, &self.window),
            Event::ResetView => {
                self.window.reset();
                self.trace.x = 0.0;
            }
            Event::Back => {
                // leaving the graph always drops trace mode
                self.trace.enabled = false;
                self.screen = Screen::FunctionList;
                return Redraw::LIST;
            }
            _ => return Redraw::empty(),
        }
        Redraw::CANVAS | Redraw::INFO
    }

    /// Regenerate the full draw list for the current state.
    pub fn draw(&self) -> DrawList {
        let transform = CanvasTransform::new(self.window, self.canvas);

        let mut curves: [Vec<Segment>; MAX_SLOTS] = array::from_fn(|_| Vec::new());
        for (index, slot) in self.slots.iter().enumerate() {
            if slot.is_plottable() {
                curves[index] = plot::plot_curve(slot.equation(), &transform);
            }
        }

        DrawList {
            grid: plot::grid_lines(&transform),
            axes: plot::axis_lines(&transform),
            curves,
            trace: self.trace_mark(&transform),
        }
    }

    fn trace_mark(&self, transform: &CanvasTransform) -> Option<TraceMark> {
        if !self.trace.enabled || !self.slots.slot(self.trace.slot).is_plottable() {
            return None;
        }
        let equation = self.slots.slot(self.trace.slot).equation();
        let graph_y = evaluate_with_variable(equation, self.trace.x);
        if !graph_y.is_finite() {
            return None;
        }
        let device_x = transform.device_x(self.trace.x);
        let device_y = transform.device_y(graph_y);
        let on_canvas = device_x >= 0.0
            && device_x < self.canvas.width as Real
            && device_y >= 0.0
            && device_y < self.canvas.height as Real;
        if !on_canvas {
            return None;
        }
        Some(TraceMark {
            device_x: device_x as i32,
            device_y: device_y as i32,
            slot: self.trace.slot,
        })
    }

    /// The traced slot, cursor x, and function value there, when tracing.
    ///
    /// The value may be NaN or infinite; readout callers classify it.
    pub fn trace_value(&self) -> Option<(usize, Real, Real)> {
        if !self.trace.enabled {
            return None;
        }
        let equation = self.slots.slot(self.trace.slot).equation();
        let graph_y = evaluate_with_variable(equation, self.trace.x);
        Some((self.trace.slot, self.trace.x, graph_y))
    }

    /// Window bounds readout for the info bar.
    pub fn window_readout(&self) -> String {
        format!(
            "x:[{},{}] y:[{},{}]",
            format_result(self.window.x_min),
            format_result(self.window.x_max),
            format_result(self.window.y_min),
            format_result(self.window.y_max)
        )
    }

    /// Trace readout for the info bar, when tracing.
    pub fn trace_readout(&self) -> Option<String> {
        self.trace_value().map(|(slot, x, y)| {
            format!(
                "y{}: ({}, {})",
                slot + 1,
                format_result(x),
                format_result(y)
            )
        })
    }
}
