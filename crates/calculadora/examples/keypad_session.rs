//! Scripted keypad session, printed step by step.
//!
//! ```bash
//! cargo run -p calculadora --example keypad_session
//! ```

use calculadora::prelude::*;

fn main() {
    let script = "12+7.5=x2=/0=9-4=";
    let mut engine = Engine::new();

    println!("{:<4} {:>14}   {}", "key", "display", "preview");
    for ch in script.chars() {
        let Some(key) = Key::from_char(ch) else {
            continue;
        };
        engine.press(key);
        println!(
            "{:<4} {:>14}   {}",
            key.label(),
            engine.display(),
            engine.preview()
        );
    }
}
