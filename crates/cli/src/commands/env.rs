use crate::session::PartSession;
use partkit_go::PartPlugin;

/// Print the toolchain environment as `KEY=value` lines, followed by
/// what the host must install before pulling.
#[tracing::instrument(skip_all)]
pub fn env(session: &PartSession) -> miette::Result<()> {
    let plugin = session.load_plugin()?;

    for (key, value) in plugin.create_environment()? {
        println!("{key}={value}");
    }

    for package in plugin.get_build_packages() {
        println!("# build-package: {package}");
    }

    for snap in plugin.get_build_snaps() {
        println!("# build-snap: {snap}");
    }

    Ok(())
}
