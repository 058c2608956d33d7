//! hostname-sync CLI binary entry point

fn main() -> anyhow::Result<()> {
    hostname_sync::run()
}
