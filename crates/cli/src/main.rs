use stockroom_cli::{Config, run_demo};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = Config::from_env();
    tracing::info!(
        path = %config.inventory_path.display(),
        threshold = config.low_stock_threshold,
        "starting inventory demo"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_demo(&config, &mut out)?;

    Ok(())
}
