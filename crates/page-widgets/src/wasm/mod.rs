//! Host adapter layer
//!
//! The mock DOM and [`PageDriver`] wire the widgets natively for tests; the
//! `wasm` feature adds the real browser binding.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;

#[cfg(feature = "wasm")]
pub use browser::{mount, start};
pub use dom::{button_id, DomElement, DomEvent, MockDom};
pub use driver::PageDriver;
