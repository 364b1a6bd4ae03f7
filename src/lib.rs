//! Rackforge - rack bring-up tooling
//!
//! This library crate exposes the binary's configuration and input handling
//! for integration testing.

pub mod config;
pub mod properties;
