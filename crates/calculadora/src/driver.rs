//! Unified keypad driver
//!
//! Logic that exercises the engine through its host boundary is written once
//! against [`KeypadDriver`] and reused by every host. The in-process
//! [`EngineDriver`] backs unit and integration tests; a GUI or terminal host
//! implements the same trait over its own event plumbing and inherits the
//! acceptance checks below unchanged.

use crate::core::engine::{Engine, Snapshot};
use crate::keypad::Key;

/// Host-side view of the engine: press keys, read the two strings
pub trait KeypadDriver {
    /// Forwards one key press
    fn press(&mut self, key: Key);

    /// Returns the primary display string
    fn display(&self) -> String;

    /// Returns the operation preview string
    fn preview(&self) -> String;

    /// Resets the calculator
    fn reset(&mut self);

    /// Presses each character of `keys` through [`Key::from_char`]
    ///
    /// Unmapped characters are skipped, so sequences may contain spaces for
    /// readability: `"2 + 3 ="`.
    fn press_keys(&mut self, keys: &str) {
        for ch in keys.chars() {
            if let Some(key) = Key::from_char(ch) {
                self.press(key);
            }
        }
    }
}

/// Driver backed directly by an in-process engine
#[derive(Debug, Clone, Default)]
pub struct EngineDriver {
    engine: Engine,
}

impl EngineDriver {
    /// Creates a driver with a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the underlying engine mutably
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Returns both observable strings
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }
}

impl KeypadDriver for EngineDriver {
    fn press(&mut self, key: Key) {
        self.engine.press(key);
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn preview(&self) -> String {
        self.engine.preview().to_string()
    }

    fn reset(&mut self) {
        self.engine.clear();
    }
}

// ===== Unified acceptance checks =====
//
// Each check runs against any KeypadDriver implementation and leaves the
// driver reset when it returns.

/// Verifies that typed characters render verbatim in the display
pub fn verify_digit_entry<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("12.5");
    assert_eq!(driver.display(), "12.5");
    driver.press_keys("b");
    assert_eq!(driver.display(), "12.");
    driver.reset();
    assert_eq!(driver.display(), "0");
}

/// Verifies the four operators and left-to-right chaining
pub fn verify_arithmetic<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("2+3=");
    assert_eq!(driver.display(), "5");

    driver.reset();
    driver.press_keys("10-4=");
    assert_eq!(driver.display(), "6");

    driver.reset();
    driver.press_keys("6x7=");
    assert_eq!(driver.display(), "42");

    driver.reset();
    driver.press_keys("20/4=");
    assert_eq!(driver.display(), "5");

    // No precedence: strictly left to right
    driver.reset();
    driver.press_keys("4+3-1=");
    assert_eq!(driver.display(), "6");
    driver.reset();
}

/// Verifies the division-by-zero policy
pub fn verify_division_by_zero<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("5/0=");
    assert_eq!(driver.display(), "Error");
    assert_eq!(driver.preview(), "");

    // The next digit starts a fresh calculation
    driver.press_keys("7");
    assert_eq!(driver.display(), "7");
    driver.reset();
}

/// Verifies result formatting through the display
pub fn verify_result_formatting<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("10/4=");
    assert_eq!(driver.display(), "2.5");

    driver.reset();
    driver.press_keys("9/3=");
    assert_eq!(driver.display(), "3");

    driver.reset();
    driver.press_keys("1/3=");
    assert_eq!(driver.display(), "0.33333333");
    driver.reset();
}

/// Runs every acceptance check in sequence
///
/// # Panics
///
/// Each check asserts on the observable strings and panics on deviation.
pub fn verify_all<D: KeypadDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_arithmetic(driver);
    verify_division_by_zero(driver);
    verify_result_formatting(driver);
}
