use crate::session::PartSession;
use clap::{Args, ValueEnum};
use partkit_go::PartPlugin;
use starbase_styles::color;
use tracing::info;

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum CleanStep {
    Build,
    Pull,
}

#[derive(Args, Clone, Debug, Default)]
pub struct CleanArgs {
    #[arg(
        long,
        value_enum,
        help = "Only clean the artifacts of this step (cleans both when omitted)"
    )]
    pub step: Option<CleanStep>,
}

#[tracing::instrument(skip_all)]
pub fn clean(session: &PartSession, args: &CleanArgs) -> miette::Result<()> {
    let plugin = session.load_plugin()?;

    if args.step.is_none_or(|step| step == CleanStep::Build) {
        plugin.clean_build()?;
    }

    if args.step.is_none_or(|step| step == CleanStep::Pull) {
        plugin.clean_pull()?;
    }

    info!("Cleaned part {}", color::id(&plugin.context.part_name));

    Ok(())
}
