//! A dashboard of per-project health metrics gathered from GitHub, RubyGems, and Travis CI.
//!
//! # Overview
//!
//! `project-dashboard` reads a list of tracked projects, fetches source-control activity,
//! package release, and CI build metrics for each of them concurrently, and keeps the
//! results in an in-memory cache that is reset on a fixed schedule.
//!
//! # Configuration
//!
//! The project list is read from `--config <PATH>` or, failing that, from the first of
//! `repos.yml`, `repos.yaml`, `repos.toml`, `repos.json` in the current directory:
//!
//! ```yaml
//! orgs:
//!   - acme
//! repos:
//!   - acme/widget
//!   - other/gadget
//! refresh_interval_minutes: 30
//! provider_timeout_secs: 30
//! ```
//!
//! Every repository in an organization listed under `orgs` is tracked too. GitHub metrics
//! need a token, provided through `GITHUB_ACCESS_TOKEN` or `--github-token`.
//!
//! # Usage
//!
//! ```bash
//! project-dashboard all              # fetch and print every project
//! project-dashboard show widget      # fetch and print a single project
//! project-dashboard list             # print the tracked projects without fetching
//! project-dashboard watch --every 60 # keep refreshing, print once a minute
//! project-dashboard validate         # check the configuration
//! ```

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use project_dashboard::Result;

mod commands;

use crate::commands::{
    AllArgs, ListArgs, ShowArgs, ValidateArgs, WatchArgs, list_projects, show_all, show_project, validate_config, watch,
};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "project-dashboard", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: DashboardSubcommand,
}

#[derive(Subcommand, Debug)]
enum DashboardSubcommand {
    /// Fetch and print the metrics of a single project
    Show(ShowArgs),
    /// Fetch and print the metrics of every project
    All(AllArgs),
    /// Print the tracked projects without fetching anything
    List(ListArgs),
    /// Keep the cache refreshing and print every project periodically
    Watch(WatchArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    match &Cli::parse().command {
        DashboardSubcommand::Show(args) => show_project(args).await,
        DashboardSubcommand::All(args) => show_all(args).await,
        DashboardSubcommand::List(args) => list_projects(args).await,
        DashboardSubcommand::Watch(args) => watch(args).await,
        DashboardSubcommand::Validate(args) => validate_config(args),
    }
}
