//! Core utilities for the scene math workspace.
//!
//! This crate provides foundational types used across the workspace:
//! - Error types and result aliases
//! - Logging initialization
//! - Frame timing

mod clock;
mod error;
mod logging;

pub use clock::FrameClock;
pub use error::{Error, Result};
pub use logging::init_logging;
