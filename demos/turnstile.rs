//! Turnstile driven from a JSON configuration, with undo/redo.
//!
//! Run with `RUST_LOG=rewind=trace cargo run --example turnstile` to see
//! every move the machine makes.

use rewind::{ConfigError, FiniteStateMachine};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
    "initial": "Locked",
    "states": {
        "Locked": { "transitions": { "coin": "Unlocked", "push": "Locked" } },
        "Unlocked": { "transitions": { "push": "Locked", "coin": "Unlocked" } },
        "Broken": {}
    }
}"#;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Turnstile ===\n");

    let mut turnstile: FiniteStateMachine = FiniteStateMachine::from_json(CONFIG)?;
    println!("States: {:?}", turnstile.states());
    println!("States accepting coins: {:?}", turnstile.states_with_event("coin"));
    println!("Start: {}\n", turnstile.current_state());

    for event in ["coin", "push", "coin", "kick"] {
        match turnstile.trigger(event) {
            Ok(()) => println!("{event:>5} -> {}", turnstile.current_state()),
            Err(e) => println!("{event:>5} -> rejected: {e}"),
        }
    }

    if turnstile.change_state("Broken").is_ok() {
        println!("\nvandalised -> {}", turnstile.current_state());
    }

    println!("\nHistory: {:?}", turnstile.history());
    while turnstile.undo() {
        println!("undo -> {}", turnstile.current_state());
    }
    while turnstile.redo() {
        println!("redo -> {}", turnstile.current_state());
    }

    turnstile.reset();
    println!("\nreset -> {}", turnstile.current_state());
    turnstile.clear_history();
    println!("undo available after clear: {}", turnstile.can_undo());

    Ok(())
}
