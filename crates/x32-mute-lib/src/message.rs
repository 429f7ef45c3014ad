//! OSC message for a channel's `mix/on` parameter.

use rosc::{OscMessage, OscPacket, OscType, encoder};

use crate::command::MuteCommand;
use crate::protocol;

/// One `/ch/NN/mix/on` message carrying a single `int32` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuteMessage {
    address: String,
    value: i32,
}

impl MuteMessage {
    pub fn new(command: MuteCommand, channel: i64) -> Self {
        MuteMessage {
            address: protocol::channel_on_address(channel),
            value: command.mix_on_value(),
        }
    }

    /// OSC address pattern, e.g. `/ch/05/mix/on`.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The `mix/on` value carried by the message.
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn to_osc(&self) -> OscMessage {
        OscMessage {
            addr: self.address.clone(),
            args: vec![OscType::Int(self.value)],
        }
    }

    /// Encode to OSC wire bytes, ready for a single UDP datagram.
    pub fn encode(&self) -> Result<Vec<u8>, rosc::OscError> {
        encoder::encode(&OscPacket::Message(self.to_osc()))
    }
}
