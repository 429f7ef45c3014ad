//! Mute command — the single action requested on the command line.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::protocol::{MIX_ON_MUTED, MIX_ON_UNMUTED};

/// Command parsing errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// The token was neither `yes` nor `no`.
    InvalidToken(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidToken(token) => {
                write!(f, "Invalid argument: {token}. Use 'yes' or 'no'.")
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Requested channel state.
///
/// Parsed from the literal tokens `yes` (mute) and `no` (unmute),
/// case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MuteCommand {
    Mute,
    Unmute,
}

impl MuteCommand {
    /// Command-line token for this command.
    pub fn token(self) -> &'static str {
        match self {
            MuteCommand::Mute => "yes",
            MuteCommand::Unmute => "no",
        }
    }

    /// Value written to the channel's `mix/on` parameter.
    pub fn mix_on_value(self) -> i32 {
        match self {
            MuteCommand::Mute => MIX_ON_MUTED,
            MuteCommand::Unmute => MIX_ON_UNMUTED,
        }
    }
}

impl FromStr for MuteCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(MuteCommand::Mute),
            "no" => Ok(MuteCommand::Unmute),
            other => Err(CommandError::InvalidToken(other.to_string())),
        }
    }
}

impl fmt::Display for MuteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
