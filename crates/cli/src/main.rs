use anyhow::Context;

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let arg = std::env::args().nth(1);
    let env = std::env::var(gildedrose_cli::DAYS_ENV).ok();
    let days = gildedrose_cli::resolve_days(arg.as_deref(), env.as_deref())?;

    let mut items = gildedrose_cli::fixture_items().context("building fixture stock")?;
    tracing::info!(days, items = items.len(), "running text fixture");

    print!("{}", gildedrose_cli::render(&mut items, days));
    Ok(())
}
