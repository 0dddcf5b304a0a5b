//! Function slots: the equations the graph screen plots.
//!
//! Fixed capacity, array-indexed, no dynamic growth — the domain caps at
//! four graph slots and equation text lives in bounded heapless strings so
//! the whole set has a known memory footprint.

use heapless::String as HString;

/// Number of function slots in a session.
pub const MAX_SLOTS: usize = 4;

/// Capacity of one equation buffer, in bytes.
pub const EQUATION_CAPACITY: usize = 256;

/// Display color per slot (0xRRGGBB), fixed for the life of the session.
pub const SLOT_COLORS: [u32; MAX_SLOTS] = [
    0x00FF00, // Green
    0xFF0000, // Red
    0x00AAFF, // Blue
    0xFFAA00, // Orange
];

/// One graph function: bounded equation text plus an enabled flag.
///
/// Slots are never destroyed individually, only cleared or disabled.
#[derive(Debug, Clone, Default)]
pub struct FunctionSlot {
    equation: HString<EQUATION_CAPACITY>,
    pub enabled: bool,
}

impl FunctionSlot {
    pub fn new(equation: &str, enabled: bool) -> Self {
        let mut slot = Self {
            equation: HString::new(),
            enabled,
        };
        slot.set_equation(equation);
        slot
    }

    pub fn equation(&self) -> &str {
        self.equation.as_str()
    }

    /// Replace the equation text, truncating at the capacity on a char
    /// boundary.
    pub fn set_equation(&mut self, text: &str) {
        self.equation.clear();
        for c in text.chars() {
            if self.equation.push(c).is_err() {
                break;
            }
        }
    }

    pub fn clear(&mut self) {
        self.equation.clear();
        self.enabled = false;
    }

    /// A slot participates in plotting and tracing only when it is enabled
    /// and holds equation text.
    pub fn is_plottable(&self) -> bool {
        self.enabled && !self.equation.is_empty()
    }
}

/// The fixed array of four function slots.
#[derive(Debug, Clone)]
pub struct SlotSet {
    slots: [FunctionSlot; MAX_SLOTS],
}

impl Default for SlotSet {
    /// Session-start contents: two demonstration equations enabled, the
    /// rest empty.
    fn default() -> Self {
        Self {
            slots: [
                FunctionSlot::new("x^2", true),
                FunctionSlot::new("sin(x)*3", true),
                FunctionSlot::default(),
                FunctionSlot::default(),
            ],
        }
    }
}

impl SlotSet {
    pub fn slot(&self, index: usize) -> &FunctionSlot {
        &self.slots[index]
    }

    pub fn slot_mut(&mut self, index: usize) -> &mut FunctionSlot {
        &mut self.slots[index]
    }

    pub fn iter(&self) -> core::slice::Iter<'_, FunctionSlot> {
        self.slots.iter()
    }

    /// Lowest-index slot eligible for plotting/tracing, if any.
    pub fn first_plottable(&self) -> Option<usize> {
        self.slots.iter().position(FunctionSlot::is_plottable)
    }
}
