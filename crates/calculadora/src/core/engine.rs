//! The calculator engine state machine
//!
//! One [`Engine`] value is the whole calculator. It consumes the key events
//! a host forwards and keeps the two strings the host renders after every
//! event. Events never fail, never panic, and never touch anything outside
//! the engine's own fields.
//!
//! State transitions follow a chain-as-you-go model: pressing an operator
//! while a calculation is already pending computes that calculation first,
//! so `4 + 3 - 1 =` evaluates strictly left to right and shows `6`.

use serde::{Deserialize, Serialize};

use crate::core::format::format_value;
use crate::core::operator::Operator;
use crate::core::CalcError;
use crate::keypad::Key;

/// Display text after a division by zero
const ERROR_TEXT: &str = "Error";

/// Display text while the pending operand is empty
const EMPTY_DISPLAY: &str = "0";

/// The two strings a host renders after every event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Primary display: the pending operand, the last result, or `"Error"`
    pub display: String,
    /// Operation preview: `"<first> <op>"`, the last result, or empty
    pub preview: String,
}

/// Arithmetic input state machine
///
/// Accumulates typed characters into a pending operand, holds at most one
/// pending binary operator together with its first operand, and remembers
/// the most recent result so calculations chain.
///
/// The pending operator is `Some` only while the first operand is `Some`;
/// every transition preserves that.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Operand being typed: digits, at most one point, optional leading sign
    pending: String,
    /// Pending binary operator
    operator: Option<Operator>,
    /// First operand, captured when an operator is pressed
    first_operand: Option<f64>,
    /// Most recent computed result
    last_result: Option<f64>,
    /// Set after equals or clear: the next digit starts fresh input
    new_calculation: bool,
    display: String,
    preview: String,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in its initial cleared state
    ///
    /// The display shows `"0"` and the preview is empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: String::new(),
            operator: None,
            first_operand: None,
            last_result: None,
            new_calculation: true,
            display: EMPTY_DISPLAY.to_string(),
            preview: String::new(),
        }
    }

    // ===== Observable strings =====

    /// Returns the primary display string
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the operation preview string
    #[must_use]
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Returns both observable strings as one owned value
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            preview: self.preview.clone(),
        }
    }

    // ===== State accessors =====

    /// Returns the operand currently being typed
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Returns the pending binary operator, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Returns the captured first operand, if any
    #[must_use]
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// Returns the most recent computed result, if any
    #[must_use]
    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Returns true when the next digit press starts fresh input
    #[must_use]
    pub fn is_new_calculation(&self) -> bool {
        self.new_calculation
    }

    // ===== Key events =====

    /// Dispatches one key event
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.press_digit(digit),
            Key::Decimal => self.press_decimal(),
            Key::Sign => self.toggle_sign(),
            Key::Operator(op) => self.press_operator(op),
            Key::Equals => self.press_equals(),
            Key::Clear => self.clear(),
            Key::ClearEntry => self.clear_entry(),
            Key::Backspace => self.backspace(),
        }
        tracing::debug!(?key, display = %self.display, preview = %self.preview, "key handled");
    }

    /// Appends a digit to the pending operand
    ///
    /// Right after equals or clear, typing restarts the operand instead of
    /// appending to the shown result. Values above 9 are ignored.
    pub fn press_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.new_calculation {
            self.pending.clear();
            self.new_calculation = false;
        }
        self.pending.push(ch);
        self.refresh_display();
    }

    /// Appends the decimal point, seeding `"0"` for an empty operand
    ///
    /// A second point in the same operand is ignored.
    pub fn press_decimal(&mut self) {
        if self.pending.contains('.') {
            return;
        }
        if self.pending.is_empty() || self.new_calculation {
            self.pending.clear();
            self.pending.push('0');
            self.new_calculation = false;
        }
        self.pending.push('.');
        self.refresh_display();
    }

    /// Toggles the leading minus sign of the pending operand
    ///
    /// With nothing typed, the negated last result becomes the pending
    /// operand and stays editable; with no last result either, nothing
    /// happens.
    pub fn toggle_sign(&mut self) {
        if !self.pending.is_empty() {
            self.pending = match self.pending.strip_prefix('-') {
                Some(rest) => rest.to_string(),
                None => format!("-{}", self.pending),
            };
            self.refresh_display();
        } else if let Some(last) = self.last_result {
            self.pending = format_value(-last);
            self.last_result = None;
            self.new_calculation = false;
            self.refresh_display();
        }
    }

    /// Stores a binary operator, computing any pending calculation first
    ///
    /// Pressing a second operator before typing the second operand replaces
    /// the stored one. With no operand material at all (nothing typed, no
    /// last result, no first operand), the press is ignored.
    pub fn press_operator(&mut self, op: Operator) {
        if self.pending.is_empty() && self.last_result.is_none() {
            // No operand material; at most the pending operator changes.
            if self.first_operand.is_some() {
                self.operator = Some(op);
                self.refresh_preview();
            }
            return;
        }
        if self.first_operand.is_none() {
            if let Some(value) = self.operand_value() {
                self.first_operand = Some(value);
                self.operator = Some(op);
                self.pending.clear();
                self.new_calculation = false;
            }
        } else {
            self.press_equals();
            // A division by zero just wiped the state; an operator without a
            // first operand is unrepresentable, so drop the press.
            if self.first_operand.is_some() {
                self.operator = Some(op);
            }
        }
        self.refresh_preview();
    }

    /// Computes the pending calculation
    ///
    /// Needs a first operand, an operator, and a second operand (the typed
    /// text, or the last result when nothing is typed); otherwise the press
    /// does nothing. On success the formatted result takes over the display
    /// and the next calculation chains from it. Division by zero resets
    /// everything and shows `"Error"`.
    pub fn press_equals(&mut self) {
        let (Some(first), Some(op)) = (self.first_operand, self.operator) else {
            return;
        };
        let Some(second) = self.operand_value() else {
            return;
        };
        match op.apply(first, second) {
            Ok(result) => {
                self.display = format_value(result);
                self.last_result = Some(result);
                self.first_operand = Some(result);
                self.pending.clear();
                self.operator = None;
                self.new_calculation = true;
                self.refresh_preview();
            }
            Err(CalcError::DivisionByZero) => {
                self.clear();
                self.display = ERROR_TEXT.to_string();
            }
        }
    }

    /// Resets every field to its initial state
    pub fn clear(&mut self) {
        self.pending.clear();
        self.operator = None;
        self.first_operand = None;
        self.last_result = None;
        self.new_calculation = true;
        self.refresh_display();
        self.refresh_preview();
    }

    /// Clears only the operand being typed
    ///
    /// The pending operator, first operand, and last result all survive.
    pub fn clear_entry(&mut self) {
        self.pending.clear();
        self.refresh_display();
    }

    /// Removes the last character of the pending operand
    ///
    /// With nothing typed this is a no-op; it never erases a shown result.
    pub fn backspace(&mut self) {
        if self.pending.pop().is_some() {
            self.refresh_display();
        }
    }

    // ===== Internals =====

    /// Resolves an operand: typed text first, last result as the fallback
    ///
    /// Text that does not parse (a bare `-` left over from sign toggling and
    /// backspacing) resolves to 0.0 rather than failing.
    fn operand_value(&self) -> Option<f64> {
        if self.pending.is_empty() {
            self.last_result
        } else {
            Some(self.pending.parse().unwrap_or(0.0))
        }
    }

    fn refresh_display(&mut self) {
        self.display = if self.pending.is_empty() {
            EMPTY_DISPLAY.to_string()
        } else {
            self.pending.clone()
        };
    }

    fn refresh_preview(&mut self) {
        self.preview = match (self.first_operand, self.operator) {
            (Some(first), Some(op)) => format!("{} {}", format_value(first), op.symbol()),
            _ => self.last_result.map(format_value).unwrap_or_default(),
        };
    }
}
