//! Mixer configuration — INI file at a fixed path, best-effort.
//!
//! ```ini
//! [x32]
//! ip = 192.168.1.50
//!
//! [channel]
//! number = 12
//! ```
//!
//! Every key is optional and overrides its default independently. Loading
//! never fails: problems are reported as warnings and defaults are kept.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ini::Ini;

use crate::protocol::{self, DEFAULT_ADDRESS, DEFAULT_CHANNEL};

const SECTION_MIXER: &str = "x32";
const KEY_ADDRESS: &str = "ip";
const SECTION_CHANNEL: &str = "channel";
const KEY_CHANNEL_NUMBER: &str = "number";

/// Where to send the command and which channel it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixerConfig {
    /// Mixer IP address or hostname.
    pub address: String,
    /// 1-based channel strip number. Not range-checked.
    pub channel: i64,
}

impl Default for MixerConfig {
    fn default() -> Self {
        MixerConfig {
            address: DEFAULT_ADDRESS.into(),
            channel: DEFAULT_CHANNEL,
        }
    }
}

/// Result of a best-effort config load.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: MixerConfig,
    /// File the config was read from (or would have been).
    pub path: PathBuf,
    /// Whether the file existed.
    pub found: bool,
    /// Non-fatal problems encountered while loading.
    pub warnings: Vec<String>,
}

impl MixerConfig {
    /// Load from the fixed system path.
    pub fn load() -> LoadedConfig {
        Self::load_from(protocol::default_config_path())
    }

    /// Load from an arbitrary path.
    ///
    /// A missing file is not a warning: it is logged at info level and the
    /// defaults are returned. Read errors and INI syntax errors produce a
    /// single warning and the defaults.
    pub fn load_from(path: &Path) -> LoadedConfig {
        let mut loaded = LoadedConfig {
            config: MixerConfig::default(),
            path: path.to_path_buf(),
            found: false,
            warnings: Vec::new(),
        };

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("Config file not found, using defaults.");
                return loaded;
            }
            Err(e) => {
                loaded.found = path.exists();
                loaded.warnings.push(format!(
                    "Error loading config file ({}), using defaults: {e}",
                    path.display()
                ));
                return loaded;
            }
        };
        loaded.found = true;

        match Self::from_ini_str(&contents) {
            (Some(config), warnings) => {
                loaded.config = config;
                loaded.warnings = warnings;
            }
            (None, reasons) => loaded.warnings.push(format!(
                "Error loading config file ({}), using defaults: {}",
                path.display(),
                reasons.join("; ")
            )),
        }
        log::debug!(
            "Loaded config from {}: address={}, channel={}",
            path.display(),
            loaded.config.address,
            loaded.config.channel
        );
        loaded
    }

    /// Parse INI text, overriding defaults with whatever keys are present.
    ///
    /// Returns `(None, [reason])` when the text is not valid INI. Otherwise
    /// returns the config plus a warning for each value that could not be
    /// used.
    pub fn from_ini_str(contents: &str) -> (Option<Self>, Vec<String>) {
        let ini = match Ini::load_from_str(contents) {
            Ok(ini) => ini,
            Err(e) => return (None, vec![e.to_string()]),
        };

        let mut config = MixerConfig::default();
        let mut warnings = Vec::new();

        if let Some(address) = last_value(&ini, SECTION_MIXER, KEY_ADDRESS) {
            config.address = address.to_string();
        }

        if let Some(raw) = last_value(&ini, SECTION_CHANNEL, KEY_CHANNEL_NUMBER) {
            match raw.parse::<i64>() {
                Ok(channel) => config.channel = channel,
                Err(e) => warnings.push(format!(
                    "Invalid channel value in config ({raw:?}), using {DEFAULT_CHANNEL}: {e}"
                )),
            }
        }

        (Some(config), warnings)
    }

    /// `host:port` string for the mixer's OSC endpoint.
    pub fn target(&self) -> String {
        format!("{}:{}", self.address, protocol::X32_PORT)
    }
}

/// Last value of `key` across every `[section]` block, with any inline
/// `;` or `#` comment removed. Later assignments override earlier ones.
fn last_value<'a>(ini: &'a Ini, section: &str, key: &str) -> Option<&'a str> {
    ini.section_all(Some(section))
        .flat_map(|props| props.get_all(key))
        .last()
        .map(strip_inline_comment)
}

fn strip_inline_comment(value: &str) -> &str {
    let end = value.find([';', '#']).unwrap_or(value.len());
    value[..end].trim()
}
