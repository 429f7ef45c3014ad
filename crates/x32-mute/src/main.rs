//! x32-mute — send a single mute or unmute command to a Behringer X32 channel.

use std::path::PathBuf;

use clap::Parser;

mod cli;

#[derive(Parser)]
#[command(
    name = "x32-mute",
    version,
    about = "Mute or unmute a Behringer X32 channel over OSC"
)]
struct Args {
    /// "yes" mutes the channel, "no" unmutes it
    #[arg(value_name = "yes|no")]
    state: String,

    /// Read settings from this file instead of /etc/default/x32-mute
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the message that would be sent without sending it
    #[arg(long)]
    dry_run: bool,

    /// Output the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let opts = cli::Options {
        config: args.config,
        dry_run: args.dry_run,
        json: args.json,
    };

    if let Err(e) = cli::run(&args.state, &opts) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
