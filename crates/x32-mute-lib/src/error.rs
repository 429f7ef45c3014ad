//! Unified error type for the x32-mute-lib crate.
//!
//! [`X32MuteError`] wraps module-specific errors (`CommandError`,
//! `TransportError`). `From` impls allow `?` to propagate across module
//! boundaries.

use std::fmt;

use crate::command::CommandError;
use crate::transport::TransportError;

/// Unified error type for x32-mute-lib operations.
#[derive(Debug)]
pub enum X32MuteError {
    /// The requested command token was not recognized.
    Command(CommandError),
    /// Address resolution, socket or send failure.
    Transport(TransportError),
}

impl fmt::Display for X32MuteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            X32MuteError::Command(e) => write!(f, "{e}"),
            X32MuteError::Transport(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for X32MuteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            X32MuteError::Command(e) => Some(e),
            X32MuteError::Transport(e) => Some(e),
        }
    }
}

impl From<CommandError> for X32MuteError {
    fn from(e: CommandError) -> Self {
        X32MuteError::Command(e)
    }
}

impl From<TransportError> for X32MuteError {
    fn from(e: TransportError) -> Self {
        X32MuteError::Transport(e)
    }
}

/// Crate-level Result alias using [`X32MuteError`].
pub type Result<T> = std::result::Result<T, X32MuteError>;
