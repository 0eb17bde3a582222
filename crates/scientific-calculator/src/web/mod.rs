//! Browser front end
//!
//! [`MockDom`] models the calculator page and implements the presenter, so
//! the browser behavior is testable natively. The `wasm` feature adds the
//! real `wasm-bindgen` bridge.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{
    DomElement, DomEvent, MockDom, BACK_ID, CONTAINER_ID, EXPRESSION_ID, HELP_TEXT_ID,
    MINIMISE_ID, MINIMIZED_ICON, MINIMIZED_WIDTH, NORMAL_ICON, NORMAL_WIDTH, RESULT_ID,
};
pub use driver::DomDriver;
