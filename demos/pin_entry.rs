// SPDX-License-Identifier: GPL-3.0-only

//! PIN entry demo
//!
//! Builds a styled numeric pad, wires a digit accumulator to the standard
//! keys and delete/clear handlers to the auxiliary keys, then replays a
//! short pointer session.
//!
//! Run with:
//!
//! ```sh
//! RUST_LOG=padview=debug cargo run --example pin_entry
//! ```

use padview::{Color, Content, Key, KeyPad, Margins, PadStyle, Template};
use std::cell::RefCell;
use std::rc::Rc;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("padview=debug".parse().unwrap()),
        )
        .init();

    let style = PadStyle::new()
        .with_keys_text_size(24.0)
        .with_keys_text_color(Color::rgb(0xEC, 0xEF, 0xF1))
        .with_keys_background("round-key")
        .with_margins(Margins::new(4.0, 6.0, 4.0, 6.0))
        .with_left_key_text("clear")
        .with_right_key_icon("backspace");

    let mut pad = KeyPad::with_style(&Template::numeric(), &style);

    let entered: Rc<RefCell<String>> = Rc::new(RefCell::new(String::new()));

    let sink = Rc::clone(&entered);
    pad.on_click(move |key: &Key| {
        sink.borrow_mut().push_str(key.text());
    });

    let sink = Rc::clone(&entered);
    pad.right_key_mut().set_on_click(Rc::new(move |_: &Key| {
        sink.borrow_mut().pop();
    }));

    let sink = Rc::clone(&entered);
    pad.left_key_mut().set_on_click(Rc::new(move |_: &Key| {
        sink.borrow_mut().clear();
    }));

    render(&pad);

    tracing::info!("Replaying a pointer session on pad '{}'", pad.name());

    // Type 1 3 3 8, delete the 8, then type 7.
    for position in [0usize, 2, 2, 7] {
        pad.click(position);
    }
    pad.right_key().click();
    pad.click(6);

    println!("Entered PIN: {}", entered.borrow());

    pad.left_key().click();
    println!("After clear: '{}'", entered.borrow());
}

/// Prints the pad the way a host toolkit would lay it out.
fn render(pad: &KeyPad) {
    println!("Pad '{}' with {} keys:", pad.name(), pad.len());
    for key in pad.keys() {
        println!("  [{}] {}", key.position(), face(key));
    }
    describe_aux("left", pad.left_key());
    describe_aux("right", pad.right_key());
}

fn describe_aux(side: &str, key: &Key) {
    if key.is_visible() {
        println!("  {} key: {}", side, face(key));
    } else {
        println!("  {} key: hidden", side);
    }
}

fn face(key: &Key) -> String {
    match key.content() {
        Content::Text(text) => format!("text '{}'", text),
        Content::Icon(icon) => format!("icon '{}'", icon),
        Content::Empty => "empty".to_string(),
    }
}
