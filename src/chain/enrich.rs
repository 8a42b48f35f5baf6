use super::table::{PutContract, PutRow};
use crate::constants::CONTRACT_MULTIPLIER;
use crate::error::{Error, Result};

/// Adds the derived columns (distanceOTM, percentOTM, value) from a single
/// spot price and drops the source-only metadata columns. The spot price
/// must be finite and positive; it divides percentOTM.
pub fn enrich(contracts: Vec<PutContract>, spot: f64) -> Result<Vec<PutRow>> {
    if !spot.is_finite() || spot <= 0.0 {
        return Err(Error::SpotPrice(spot));
    }

    let rows = contracts
        .into_iter()
        .map(|contract| {
            let quote = contract.quote;
            let distance_otm = spot - quote.strike;

            PutRow {
                index: 0,
                expiry_date: contract.expiry_date,
                strike: quote.strike,
                last_price: quote.last_price,
                distance_otm,
                percent_otm: distance_otm / spot * 100.0,
                bid: quote.bid,
                ask: quote.ask,
                change: quote.change,
                percent_change: quote.percent_change,
                volume: quote.volume,
                open_interest: quote.open_interest,
                implied_volatility: quote.implied_volatility,
                in_the_money: quote.in_the_money,
                value: quote.open_interest as f64 * quote.last_price * CONTRACT_MULTIPLIER,
            }
        })
        .collect();

    Ok(rows)
}
