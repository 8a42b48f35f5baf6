use tracing::info;

use crate::chain::{aggregate_puts, enrich, filter_relevant, sort_by_expiry};
use crate::cli::Args;
use crate::config::Config;
use crate::error::Result;
use crate::providers::yahoo::YahooApi;
use crate::providers::MarketData;
use crate::render::render_table;

/// One full screener run: fetch, aggregate, enrich, filter, sort, print.
/// No state survives between runs; any fetch failure surfaces immediately.
pub async fn run(args: Args, config: Config) -> Result<()> {
    let symbol = args.symbol.trim().to_uppercase();
    let source = YahooApi::new(&config.yahoo)?;

    info!("Downloading stock closing price...");
    let spot = source.latest_close_price(&symbol).await?;

    info!("Downloading stock data...");
    let dates = source.expiry_dates(&symbol).await?;

    let contracts = aggregate_puts(&source, &symbol, dates, args.expiry_dates).await?;

    let rows = sort_by_expiry(filter_relevant(enrich(contracts, spot)?));
    info!("{} put contracts kept for {}", rows.len(), symbol);

    println!("{}", render_table(&rows));

    Ok(())
}
