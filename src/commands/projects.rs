use crate::commands::common::{Common, CommonArgs};
use clap::Args;
use ohno::bail;
use project_dashboard::Result;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Name of the project (its repository name)
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct AllArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn show_project(args: &ShowArgs) -> Result<()> {
    let common = Common::new(&args.common).await?;

    let Some(project) = common.dashboard.get_project(&args.name).await else {
        bail!("no project named '{}' is tracked", args.name);
    };

    common.print_one(&project)
}

pub async fn show_all(args: &AllArgs) -> Result<()> {
    let common = Common::new(&args.common).await?;
    let projects = common.dashboard.get_all_projects().await;
    common.print_all(&projects)
}

pub async fn list_projects(args: &ListArgs) -> Result<()> {
    let common = Common::new(&args.common).await?;
    let projects = common.dashboard.get_projects().await;
    common.print_all(&projects)
}
