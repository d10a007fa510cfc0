//! Core types and definitions for the Quilly Jumper simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, entity kinds, configuration, errors, and constants.
//! It has no dependency on any rendering or windowing framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod types;
