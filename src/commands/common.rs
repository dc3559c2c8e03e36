//! Setup shared by every command that needs a dashboard.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use project_dashboard::Result;
use project_dashboard::config::Config;
use project_dashboard::dashboard::{Dashboard, ProjectSnapshot};
use project_dashboard::facts::hosting::ACCESS_TOKEN_ENV_VAR;
use project_dashboard::reports::{generate_json, generate_json_one};
use std::sync::Arc;

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

/// Arguments shared by every dashboard command
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// GitHub access token; GitHub metrics are disabled without one
    #[arg(long, value_name = "TOKEN", env = ACCESS_TOKEN_ENV_VAR, hide_env_values = true)]
    pub github_token: Option<String>,

    /// Path to the project list [default: one of repos.[yml|yaml|toml|json] ]
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Print single-line JSON instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Debug)]
pub struct Common {
    pub dashboard: Arc<Dashboard>,
    pub config: Config,
    pretty: bool,
}

impl Common {
    /// Initialize logging, load the configuration, and build the dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unreadable or malformed, or if the providers cannot be created
    pub async fn new(args: &CommonArgs) -> Result<Self> {
        init_logging(args.log_level);

        let (config, warnings) = Config::load(Utf8Path::new("."), args.config.as_ref())?;
        print_warnings(&warnings);

        let dashboard = Dashboard::new(&config, args.github_token.as_deref()).await?;

        Ok(Self {
            dashboard: Arc::new(dashboard),
            config,
            pretty: !args.compact,
        })
    }

    pub fn print_all(&self, projects: &[ProjectSnapshot]) -> Result<()> {
        let mut out = String::new();
        generate_json(projects, self.pretty, &mut out)?;
        print!("{out}");
        Ok(())
    }

    pub fn print_one(&self, project: &ProjectSnapshot) -> Result<()> {
        let mut out = String::new();
        generate_json_one(project, self.pretty, &mut out)?;
        print!("{out}");
        Ok(())
    }
}

pub fn print_warnings(warnings: &[String]) {
    if !warnings.is_empty() {
        eprintln!("\n⚠️  Configuration validation warnings:");
        for warning in warnings {
            eprintln!("   {warning}");
        }
        eprintln!();
    }
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}
