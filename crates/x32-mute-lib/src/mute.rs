//! Mute sequence — build the channel message and send it once.

use std::fmt;

use serde::Serialize;

use crate::command::MuteCommand;
use crate::config::MixerConfig;
use crate::error::Result;
use crate::message::MuteMessage;
use crate::protocol::X32_PORT;
use crate::transport::{MixerLink, UdpLink};

/// What was (or would be) sent, for the status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MuteReport {
    pub action: MuteCommand,
    pub channel: i64,
    pub address: String,
    pub port: u16,
    pub osc_address: String,
    pub value: i32,
}

impl MuteReport {
    pub fn new(command: MuteCommand, config: &MixerConfig, message: &MuteMessage) -> Self {
        MuteReport {
            action: command,
            channel: config.channel,
            address: config.address.clone(),
            port: X32_PORT,
            osc_address: message.address().to_string(),
            value: message.value(),
        }
    }
}

impl fmt::Display for MuteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully sent {} command to channel {} on server {}.",
            self.action, self.channel, self.address
        )
    }
}

/// Send `command` for the configured channel over `link`. One attempt only.
pub fn send_mute(
    link: &impl MixerLink,
    command: MuteCommand,
    config: &MixerConfig,
) -> Result<MuteReport> {
    let message = MuteMessage::new(command, config.channel);
    log::debug!(
        "{} channel {} via {}",
        if command == MuteCommand::Mute { "Muting" } else { "Unmuting" },
        config.channel,
        link.peer()
    );
    link.send(&message)?;
    Ok(MuteReport::new(command, config, &message))
}

/// Open a UDP link to the configured mixer, send once, and close it.
pub fn send_mute_udp(command: MuteCommand, config: &MixerConfig) -> Result<MuteReport> {
    let link = UdpLink::connect(&config.address, X32_PORT)?;
    send_mute(&link, command, config)
}

/// Describe what [`send_mute`] would send, without touching the network.
pub fn preview(command: MuteCommand, config: &MixerConfig) -> MuteReport {
    let message = MuteMessage::new(command, config.channel);
    MuteReport::new(command, config, &message)
}
