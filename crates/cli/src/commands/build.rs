use crate::session::PartSession;
use partkit_go::{PartPlugin, SystemCommandRunner};
use starbase_styles::color;
use tracing::info;

#[tracing::instrument(skip_all)]
pub fn build(session: &PartSession) -> miette::Result<()> {
    let plugin = session.load_plugin()?;

    session.check_toolchain();
    plugin.build(&SystemCommandRunner)?;

    info!(
        "Built part {} into {}",
        color::id(&plugin.context.part_name),
        color::path(&plugin.install_bin_dir)
    );

    Ok(())
}
