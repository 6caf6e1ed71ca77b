//! Foundation types for folio.
//!
//! This crate contains the renderer-agnostic types shared by all folio
//! crates: terminal input events, configuration, and error types.

pub mod config;
pub mod error;
pub mod input;
