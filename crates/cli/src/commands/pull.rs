use crate::session::PartSession;
use partkit_go::{PartPlugin, SystemCommandRunner};
use starbase_styles::color;
use tracing::info;

#[tracing::instrument(skip_all)]
pub fn pull(session: &PartSession) -> miette::Result<()> {
    let plugin = session.load_plugin()?;

    session.check_toolchain();
    plugin.pull(&SystemCommandRunner)?;

    info!("Pulled part {}", color::id(&plugin.context.part_name));

    Ok(())
}
