//! Video player contract.
//!
//! The player itself is an external SDK. This module only describes what
//! the shell hands to it and what it may call back.

pub mod config;

pub use config::{PlayerConfig, PlayerConfigError};

/// A running player instance.
pub trait VideoPlayer {
    /// Stop playback and release the stream.
    fn stop(&mut self);
}
