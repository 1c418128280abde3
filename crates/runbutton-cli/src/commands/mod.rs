//! CLI command implementations.

pub mod buttons;
pub mod hex_utils;
pub mod replay;
