//! Foundation types for termsim.
//!
//! This crate holds the pieces shared by every other termsim crate: the
//! error taxonomy surfaced at the command boundary and the shell
//! configuration loaded from TOML.

pub mod config;
pub mod error;
