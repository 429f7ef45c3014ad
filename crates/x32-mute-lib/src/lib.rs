//! x32-mute — mute and unmute Behringer X32 channels over OSC.

pub mod command;
pub mod config;
pub mod error;
pub mod message;
pub mod mute;
pub mod protocol;
pub mod transport;

pub use error::X32MuteError;
