use anyhow::Context;
use clap::Parser;
use indicatif::ProgressBar;
use ow_playtime::analysis::extract::extract_all_modes_time;
use ow_playtime::api::client::OverwatchApiClient;
use ow_playtime::config::Config;
use ow_playtime::display::output::{
    display_account_summary, display_error, display_info, display_role_report, display_warning,
};
use ow_playtime::store::HeroTimeStore;
use ow_playtime::tracker::Tracker;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "OW Playtime")]
#[command(about = "Track time played per hero across Overwatch accounts", long_about = None)]
struct Args {
    /// BattleTag to track (Name-1234 or Name#1234), repeatable.
    /// Overrides OW_BATTLETAGS and the built-in list
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Platform (default: pc)
    #[arg(short, long)]
    platform: Option<String>,

    /// Region (default: us)
    #[arg(short, long)]
    region: Option<String>,

    /// Directory holding the per-account <tag>.csv files (default: .)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Fetch and report without writing any account file
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env().context("loading configuration")?;
    if !args.tags.is_empty() {
        config.battletags = args.tags;
    }
    if let Some(platform) = args.platform {
        config.platform = platform;
    }
    if let Some(region) = args.region {
        config.region = region;
    }
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    let config = config.validate().context("checking configuration")?;

    display_info(&format!(
        "Tracking {} accounts on {}/{} (data in {})",
        config.battletags.len(),
        config.platform,
        config.region,
        config.data_dir.display()
    ));

    let client = OverwatchApiClient::new(config.clone());
    let tracker = Tracker::new(HeroTimeStore::new(&config.data_dir), args.dry_run);

    let pb = ProgressBar::new(config.battletags.len() as u64);
    pb.set_message("Fetching career stats");
    let mut private_profiles = Vec::new();

    let (runs, totals) = tracker.track_accounts_with(
        &config.battletags,
        |tag| {
            let stats = client.get_complete_stats(tag)?;
            if stats.private == Some(true) {
                private_profiles.push(tag.to_string());
            }
            Ok(extract_all_modes_time(&stats))
        },
        |_| pb.inc(1),
    );

    pb.finish_with_message("✓ Career stats fetched");

    for tag in &private_profiles {
        display_warning(&format!("{}: profile is private, stats may be incomplete", tag));
    }
    display_account_summary(&runs);
    display_role_report(&totals);

    Ok(())
}
