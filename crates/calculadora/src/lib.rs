//! Calculadora - an event-driven calculator engine
//!
//! The engine consumes the discrete key events a host keypad produces
//! (digits, decimal point, sign toggle, the four binary operators, equals,
//! clear, clear-entry, backspace) and exposes two observable strings after
//! every event: the primary display and the operation preview. Hosts own
//! rendering and input devices; the engine owns every rule about what those
//! two strings contain.
//!
//! # Example
//!
//! ```rust
//! use calculadora::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.press_digit(2);
//! engine.press_operator(Operator::Add);
//! engine.press_digit(3);
//! engine.press_equals();
//!
//! assert_eq!(engine.display(), "5");
//! assert_eq!(engine.preview(), "5");
//! ```
//!
//! Key events never fail and never panic. Division by zero is absorbed: the
//! display reads `"Error"` and the engine returns to its initial state.
//! Hosts that work in characters instead of [`keypad::Key`] values can
//! script the engine through [`driver::KeypadDriver::press_keys`]:
//!
//! ```rust
//! use calculadora::prelude::*;
//!
//! let mut driver = EngineDriver::new();
//! driver.press_keys("4+3-1=");
//! assert_eq!(driver.display(), "6");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

#[cfg(feature = "currency")]
pub mod currency;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::format::format_value;
    pub use crate::core::{CalcError, CalcResult, Engine, Operator, Snapshot};
    pub use crate::driver::{EngineDriver, KeypadDriver};
    pub use crate::keypad::Key;

    #[cfg(feature = "currency")]
    pub use crate::currency::{convert, format_amount, Currency, ParseCurrencyError};
}
