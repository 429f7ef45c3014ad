//! Command flow — parse the token, load config, send, report.

use std::path::PathBuf;

use serde::Serialize;

use x32_mute_lib::command::MuteCommand;
use x32_mute_lib::config::{LoadedConfig, MixerConfig};
use x32_mute_lib::error::Result;
use x32_mute_lib::mute::{self, MuteReport};

pub struct Options {
    pub config: Option<PathBuf>,
    pub dry_run: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct ReportJson<'a> {
    sent: bool,
    config_file: String,
    config_file_exists: bool,
    #[serde(flatten)]
    report: &'a MuteReport,
}

pub fn run(state: &str, opts: &Options) -> Result<()> {
    // Reject bad tokens before touching config or the network.
    let command: MuteCommand = state.parse()?;

    let loaded = load_config(opts);
    let config = &loaded.config;

    let (report, sent) = if opts.dry_run {
        (mute::preview(command, config), false)
    } else {
        (mute::send_mute_udp(command, config)?, true)
    };

    if opts.json {
        let output = ReportJson {
            sent,
            config_file: loaded.path.display().to_string(),
            config_file_exists: loaded.found,
            report: &report,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => log::error!("Failed to serialize report: {e}"),
        }
    } else if sent {
        println!("{report}");
    } else {
        println!("{}", format_preview(&report));
    }
    Ok(())
}

fn load_config(opts: &Options) -> LoadedConfig {
    let loaded = match &opts.config {
        Some(path) => MixerConfig::load_from(path),
        None => MixerConfig::load(),
    };
    for w in &loaded.warnings {
        log::warn!("{w}");
    }
    loaded
}

fn format_preview(report: &MuteReport) -> String {
    format!(
        "Would send {} ,i {} to {}:{} ({} command, channel {}).",
        report.osc_address, report.value, report.address, report.port, report.action, report.channel
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(command: MuteCommand, address: &str, channel: i64) -> MuteReport {
        let config = MixerConfig {
            address: address.into(),
            channel,
        };
        mute::preview(command, &config)
    }

    #[test]
    fn preview_line_shows_wire_message() {
        let line = format_preview(&report(MuteCommand::Mute, "10.0.0.5", 12));
        assert_eq!(
            line,
            "Would send /ch/12/mix/on ,i 0 to 10.0.0.5:10023 (yes command, channel 12)."
        );
    }

    #[test]
    fn invalid_token_fails_before_config_load() {
        let opts = Options {
            config: Some(PathBuf::from("/nonexistent/x32-mute")),
            dry_run: false,
            json: false,
        };
        let err = run("maybe", &opts).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: maybe. Use 'yes' or 'no'.");
    }

    #[test]
    fn json_report_flattens_fields() {
        let r = report(MuteCommand::Unmute, "127.0.0.1", 37);
        let output = ReportJson {
            sent: false,
            config_file: "/etc/default/x32-mute".into(),
            config_file_exists: false,
            report: &r,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["sent"], false);
        assert_eq!(json["action"], "unmute");
        assert_eq!(json["channel"], 37);
        assert_eq!(json["port"], 10023);
        assert_eq!(json["osc_address"], "/ch/37/mix/on");
        assert_eq!(json["value"], 1);
    }
}
