use anyhow::Context;

fn main() -> anyhow::Result<()> {
    solid_observability::init();

    let config = solid_demo::DemoConfig::from_env().context("invalid demo configuration")?;
    tracing::info!(
        principles = ?config.principles.iter().map(|p| p.code()).collect::<Vec<_>>(),
        "starting walkthrough"
    );

    let reports = solid_demo::run(&config)?;

    tracing::info!(walkthroughs = reports.len(), "done");
    Ok(())
}
