//! Page Widgets Demo
//!
//! Drives the reference page through a scripted session on the mock DOM.
//!
//! Run with: RUST_LOG=debug cargo run --example page_demo

use page_widgets::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> PageResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Page Widgets Demo - Mock DOM");
    println!("============================");

    let mut page = PageDriver::new();
    page.load()?;
    println!("loaded: theme={:?} result={:?}", page.active_theme(), page.result_text());

    let script = ["1", "2", "+", "3", "0", "calculate", "calculate", "delete"];
    for key in script {
        page.press(key)?;
        println!("  press {key:>9} -> {:?}", page.result_text().unwrap_or_default());
    }

    for value in ["2", "3", "7"] {
        page.select_theme(value)?;
        println!("  theme {value:>9} -> {:?}", page.active_theme());
    }

    println!();
    println!("events delivered: {}", page.dom().event_history().len());
    Ok(())
}
