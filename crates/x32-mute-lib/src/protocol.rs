//! Protocol constants for the Behringer X32 OSC control surface.
//!
//! The X32 listens for OSC over UDP on a fixed port. Channel strips are
//! addressed as `/ch/NN/...` with `NN` zero-padded to two digits.
//!
//! ## Mute polarity
//!
//! Muting is done through the channel's `mix/on` parameter, so the values
//! read backwards: `0` turns the strip off (muted), `1` turns it on
//! (unmuted). This is the console's wire convention.

use std::path::Path;

/// UDP port the X32 listens on for OSC. Not configurable.
pub const X32_PORT: u16 = 10023;

/// Mixer address used when the config file does not provide one.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";

/// Channel used when the config file does not provide one.
pub const DEFAULT_CHANNEL: i64 = 37;

/// Well-known config file location.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/default/x32-mute";

/// `mix/on` value that mutes a channel.
pub const MIX_ON_MUTED: i32 = 0;

/// `mix/on` value that unmutes a channel.
pub const MIX_ON_UNMUTED: i32 = 1;

/// Fixed config path as a [`Path`].
pub fn default_config_path() -> &'static Path {
    Path::new(DEFAULT_CONFIG_PATH)
}

/// OSC address of a channel's `mix/on` parameter.
///
/// No bounds check: channel 100 yields `/ch/100/mix/on`, which the console
/// ignores.
pub fn channel_on_address(channel: i64) -> String {
    format!("/ch/{channel:02}/mix/on")
}
