// Crate root library declaration and module exports.
pub mod config;
pub mod context;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;
