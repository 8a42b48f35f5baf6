use super::table::PutRow;
use crate::constants::MIN_LAST_PRICE;

/// Keeps a contract only if it has open interest worth something, trades
/// above the minimum premium, and is out of the money.
pub fn filter_relevant(rows: Vec<PutRow>) -> Vec<PutRow> {
    rows.into_iter()
        .filter(|row| row.value > 0.0 && row.last_price > MIN_LAST_PRICE && !row.in_the_money)
        .collect()
}
