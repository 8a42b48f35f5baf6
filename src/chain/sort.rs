use super::table::PutRow;

/// Orders the table by expiry date ascending and reassigns a dense
/// zero-based index. The sort is stable, so contracts sharing an expiry
/// date keep the order they entered the aggregated table in.
pub fn sort_by_expiry(mut rows: Vec<PutRow>) -> Vec<PutRow> {
    rows.sort_by_key(|row| row.expiry_date);

    for (index, row) in rows.iter_mut().enumerate() {
        row.index = index;
    }

    rows
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn row(expiry: &str, strike: f64) -> PutRow {
        PutRow {
            index: 0,
            expiry_date: expiry.parse::<NaiveDate>().unwrap(),
            strike,
            last_price: 1.0,
            distance_otm: 0.0,
            percent_otm: 0.0,
            bid: None,
            ask: None,
            change: None,
            percent_change: None,
            volume: None,
            open_interest: 1,
            implied_volatility: None,
            in_the_money: false,
            value: 100.0,
        }
    }

    #[test]
    fn orders_by_expiry_ascending() {
        let rows = sort_by_expiry(vec![
            row("2024-03-15", 80.0),
            row("2024-01-19", 90.0),
            row("2024-02-16", 85.0),
        ]);

        let dates: Vec<_> = rows.iter().map(|r| r.expiry_date).collect();
        assert!(dates.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let rows = sort_by_expiry(vec![
            row("2024-02-16", 50.0),
            row("2024-01-19", 90.0),
            row("2024-01-19", 85.0),
            row("2024-01-19", 80.0),
        ]);

        let january: Vec<f64> = rows
            .iter()
            .filter(|r| r.expiry_date == "2024-01-19".parse::<NaiveDate>().unwrap())
            .map(|r| r.strike)
            .collect();
        assert_eq!(january, vec![90.0, 85.0, 80.0]);
    }

    #[test]
    fn reassigns_a_dense_index() {
        let rows = sort_by_expiry(vec![
            row("2024-03-15", 80.0),
            row("2024-01-19", 90.0),
        ]);

        let indices: Vec<usize> = rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn empty_table_sorts_to_empty() {
        assert!(sort_by_expiry(vec![]).is_empty());
    }
}
