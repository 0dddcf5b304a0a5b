//! The trace cursor: an interactive readout tracking one function's value
//! at a movable x position during graph viewing.

use super::slots::{MAX_SLOTS, SlotSet};
use super::window::ViewWindow;
use crate::Real;

/// Fraction of the x-range the cursor moves per step.
const STEP_FRACTION: Real = 0.02;

/// Trace cursor state.
///
/// `slot` references an enabled, non-empty slot whenever `enabled` is true;
/// the toggle refuses to turn on when no slot qualifies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceState {
    pub enabled: bool,
    pub x: Real,
    pub slot: usize,
}

impl Default for TraceState {
    fn default() -> Self {
        Self {
            enabled: false,
            x: 0.0,
            slot: 0,
        }
    }
}

impl TraceState {
    /// Toggle tracing. Turning on selects the lowest-index eligible slot and
    /// places the cursor at the window center; with no eligible slot the
    /// trace stays off.
    pub fn toggle(&mut self, slots: &SlotSet, window: &ViewWindow) {
        if self.enabled {
            self.enabled = false;
            return;
        }
        match slots.first_plottable() {
            Some(index) => {
                self.enabled = true;
                self.slot = index;
                self.x = (window.x_min + window.x_max) / 2.0;
            }
            None => self.enabled = false,
        }
    }

    /// Cycle to the next eligible slot, wrapping, skipping disabled or
    /// empty slots. With a single eligible slot this lands back on it.
    pub fn cycle_next(&mut self, slots: &SlotSet) {
        for offset in 1..=MAX_SLOTS {
            let candidate = (self.slot + offset) % MAX_SLOTS;
            if slots.slot(candidate).is_plottable() {
                self.slot = candidate;
                break;
            }
        }
    }

    /// Cycle to the previous eligible slot, wrapping.
    pub fn cycle_prev(&mut self, slots: &SlotSet) {
        for offset in 1..=MAX_SLOTS {
            let candidate = (self.slot + 2 * MAX_SLOTS - offset) % MAX_SLOTS;
            if slots.slot(candidate).is_plottable() {
                self.slot = candidate;
                break;
            }
        }
    }

    /// Move the cursor left by 2% of the x-range, clamped to the window.
    pub fn step_left(&mut self, window: &ViewWindow) {
        self.x -= window.span_x() * STEP_FRACTION;
        if self.x < window.x_min {
            self.x = window.x_min;
        }
    }

    /// Move the cursor right by 2% of the x-range, clamped to the window.
    pub fn step_right(&mut self, window: &ViewWindow) {
        self.x += window.span_x() * STEP_FRACTION;
        if self.x > window.x_max {
            self.x = window.x_max;
        }
    }
}
