//! Configuration schema for a multi-backend MIDI synthesizer.
//!
//! Each backend gets a plain parameter bundle with working defaults, and every
//! tunable gets a stable key so a config manager can address them generically.

pub mod backends;
pub use backends::*;

pub mod instruments;

pub mod keys;
pub use keys::{ConfigKey, FloatConfigKey, IntConfigKey, StringConfigKey};

pub mod messages;

pub mod reader;
