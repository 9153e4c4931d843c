//! Core library components.
//!
//! Parsing, validation, option resolution and the vault adapter. Nothing
//! here prints; the `cli` module owns all terminal output.

pub mod constants;
pub mod domain;
pub mod env;
pub mod launcher;
pub mod scope;
pub mod secrets;
pub mod source;
pub mod validation;
pub mod vault;
