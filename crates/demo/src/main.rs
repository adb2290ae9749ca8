use std::io::Write;

use anyhow::Context;

use itembox_demo::DemoConfig;

fn main() {
    itembox_observability::init();

    let config = DemoConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!("invalid configuration ({err}); using defaults");
        DemoConfig::default()
    });

    // The walkthrough always exits successfully; output failures are only logged.
    if let Err(err) = run(config) {
        tracing::error!("demo output failed: {err:#}");
    }
}

fn run(config: DemoConfig) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    itembox_demo::run(config, &mut out).context("failed to write demo transcript")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
