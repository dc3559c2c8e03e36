use crate::commands::common::print_warnings;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use project_dashboard::Result;
use project_dashboard::config::Config;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the project list [default: one of repos.[yml|yaml|toml|json] ]
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

#[expect(clippy::unnecessary_wraps, reason = "Consistent interface with other subcommands")]
pub fn validate_config(args: &ValidateArgs) -> Result<()> {
    match Config::load(Utf8Path::new("."), args.config.as_ref()) {
        Ok((config, warnings)) => {
            println!("Configuration validation successful");
            println!(
                "{} explicit repositories, {} organizations, refresh every {} minutes",
                config.repos.len(),
                config.orgs.len(),
                config.refresh_interval_minutes
            );
            print_warnings(&warnings);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Configuration validation failed: {e}");
            std::process::exit(1);
        }
    }
}
