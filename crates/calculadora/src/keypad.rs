//! Keypad key vocabulary
//!
//! Hosts translate whatever input they receive (touch targets, terminal
//! characters, DOM events) into [`Key`] values and feed them to the engine
//! one at a time.

use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// One discrete key press a host forwards to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// A digit, 0 through 9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// The sign toggle (`±`)
    Sign,
    /// One of the four binary operators
    Operator(Operator),
    /// Compute the pending calculation
    Equals,
    /// Reset everything
    Clear,
    /// Clear only the operand being typed
    ClearEntry,
    /// Remove the last typed character
    Backspace,
}

impl Key {
    /// Maps one input character to a key
    ///
    /// Digits and operators map through their obvious characters; the
    /// remaining keys use letters (`c` clear, `e` clear entry, `n` sign,
    /// `b` backspace), case-insensitive. Unmapped characters, whitespace
    /// included, return `None` and hosts skip them.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if let Some(digit) = ch.to_digit(10) {
            return Some(Self::Digit(digit as u8));
        }
        if let Some(op) = Operator::from_char(ch) {
            return Some(Self::Operator(op));
        }
        match ch {
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            'n' | 'N' | '±' => Some(Self::Sign),
            'c' | 'C' => Some(Self::Clear),
            'e' | 'E' => Some(Self::ClearEntry),
            'b' | 'B' | '⌫' => Some(Self::Backspace),
            _ => None,
        }
    }

    /// Returns the button caption a host renders for this key
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Sign => "±".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ClearEntry => "CE".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== from_char tests =====

    #[test]
    fn test_digits_map() {
        for d in 0..=9u8 {
            let ch = char::from(b'0' + d);
            assert_eq!(Key::from_char(ch), Some(Key::Digit(d)));
        }
    }

    #[test]
    fn test_operators_map() {
        assert_eq!(Key::from_char('+'), Some(Key::Operator(Operator::Add)));
        assert_eq!(Key::from_char('-'), Some(Key::Operator(Operator::Subtract)));
        assert_eq!(Key::from_char('x'), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_char('×'), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_char('/'), Some(Key::Operator(Operator::Divide)));
        assert_eq!(Key::from_char('÷'), Some(Key::Operator(Operator::Divide)));
    }

    #[test]
    fn test_editing_keys_map() {
        assert_eq!(Key::from_char('.'), Some(Key::Decimal));
        assert_eq!(Key::from_char('='), Some(Key::Equals));
        assert_eq!(Key::from_char('n'), Some(Key::Sign));
        assert_eq!(Key::from_char('c'), Some(Key::Clear));
        assert_eq!(Key::from_char('e'), Some(Key::ClearEntry));
        assert_eq!(Key::from_char('b'), Some(Key::Backspace));
    }

    #[test]
    fn test_letters_are_case_insensitive() {
        assert_eq!(Key::from_char('C'), Key::from_char('c'));
        assert_eq!(Key::from_char('E'), Key::from_char('e'));
        assert_eq!(Key::from_char('N'), Key::from_char('n'));
        assert_eq!(Key::from_char('B'), Key::from_char('b'));
        assert_eq!(Key::from_char('X'), Key::from_char('x'));
    }

    #[test]
    fn test_unmapped_characters_return_none() {
        assert_eq!(Key::from_char(' '), None);
        assert_eq!(Key::from_char('\n'), None);
        assert_eq!(Key::from_char('q'), None);
        assert_eq!(Key::from_char('%'), None);
        assert_eq!(Key::from_char('('), None);
    }

    #[test]
    fn test_non_ascii_digits_return_none() {
        // Arabic-Indic three
        assert_eq!(Key::from_char('٣'), None);
    }

    // ===== Label tests =====

    #[test]
    fn test_labels() {
        assert_eq!(Key::Digit(7).label(), "7");
        assert_eq!(Key::Decimal.label(), ".");
        assert_eq!(Key::Sign.label(), "±");
        assert_eq!(Key::Operator(Operator::Divide).label(), "÷");
        assert_eq!(Key::Equals.label(), "=");
        assert_eq!(Key::Clear.label(), "C");
        assert_eq!(Key::ClearEntry.label(), "CE");
        assert_eq!(Key::Backspace.label(), "⌫");
    }

    #[test]
    fn test_single_char_labels_round_trip() {
        let keys = [
            Key::Digit(0),
            Key::Digit(9),
            Key::Decimal,
            Key::Sign,
            Key::Operator(Operator::Add),
            Key::Operator(Operator::Multiply),
            Key::Equals,
            Key::Clear,
            Key::Backspace,
        ];
        for key in keys {
            let label = key.label();
            let mut chars = label.chars();
            let ch = chars.next().unwrap();
            assert!(chars.next().is_none());
            assert_eq!(Key::from_char(ch), Some(key));
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let key = Key::Operator(Operator::Divide);
        let json = serde_json::to_string(&key).unwrap();
        let back: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
