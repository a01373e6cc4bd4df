//! Configuration types
//!
//! Every timing constant and identifier the drivers use lives here so a board
//! can override it without touching driver code.

pub mod types;

pub use types::*;
