use crate::commands::common::{Common, CommonArgs};
use clap::Args;
use core::time::Duration;
use ohno::IntoAppError;
use project_dashboard::Result;
use project_dashboard::dashboard::RefreshScheduler;
use std::sync::Arc;
use tokio::time::MissedTickBehavior;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Seconds between printouts [default: the configured refresh interval]
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub every: Option<u64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Keep the cache refreshing in the background and print every project on each display tick, until Ctrl-C.
pub async fn watch(args: &WatchArgs) -> Result<()> {
    let common = Common::new(&args.common).await?;
    let scheduler = RefreshScheduler::start(Arc::clone(&common.dashboard), common.config.refresh_interval());

    let every = args.every.map_or(scheduler.period(), Duration::from_secs);
    let mut display = tokio::time::interval(every);
    display.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = display.tick() => {
                let projects = common.dashboard.get_all_projects().await;
                common.print_all(&projects)?;
            }
            signal = tokio::signal::ctrl_c() => {
                signal.into_app_err("could not listen for Ctrl-C")?;
                break;
            }
        }
    }

    scheduler.stop();
    Ok(())
}
