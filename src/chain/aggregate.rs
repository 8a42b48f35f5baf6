use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::info;

use super::table::PutContract;
use crate::error::Result;
use crate::providers::MarketData;

/// Builds the aggregated put table for the closest `num_expiry_dates`
/// expiry dates (0 selects all). Dates are processed ascending, one fetch
/// per date; a failed fetch aborts the whole aggregation.
pub async fn aggregate_puts<D>(
    source: &D,
    symbol: &str,
    mut dates: Vec<NaiveDate>,
    num_expiry_dates: usize,
) -> Result<Vec<PutContract>>
where
    D: MarketData + ?Sized,
{
    dates.sort_unstable();

    let total = dates.len();
    let take = if num_expiry_dates == 0 || num_expiry_dates >= total {
        total
    } else {
        num_expiry_dates
    };
    let (selected, skipped) = dates.split_at(take);

    info!(
        "Downloading stock options for [{} / {}] expiry dates...",
        take, total
    );

    let mut batches = Vec::with_capacity(selected.len());
    for &date in selected {
        info!("    Building option data for {} expiry date...", date);
        let quotes = source.put_contracts(symbol, date).await?;
        batches.push((date, quotes));
    }

    info!(
        "Skipped option data for remaining expiry dates: {:?}",
        skipped
    );

    // Flatten once into a pre-sized table. The key set drops exact
    // re-fetches of a chain; first occurrence wins, so per-date source
    // order is preserved.
    let total_rows: usize = batches.iter().map(|(_, quotes)| quotes.len()).sum();
    let mut seen: HashSet<(NaiveDate, String)> = HashSet::with_capacity(total_rows);
    let mut contracts = Vec::with_capacity(total_rows);

    for (date, quotes) in batches {
        for quote in quotes {
            if seen.insert((date, quote.contract_symbol.clone())) {
                contracts.push(PutContract {
                    expiry_date: date,
                    quote,
                });
            }
        }
    }

    Ok(contracts)
}
