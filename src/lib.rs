//! Build-time generator for the macOS DMG installer background.
//!
//! Composes a gradient backdrop, radial highlight, icon glow spots, a drag
//! arrow, and bitmap-font labels into an RGBA pixel buffer, then encodes
//! the buffer as a baseline PNG. One run, one file.

pub mod backdrop;
pub mod config;
pub mod display;
pub mod error;
pub mod png;
