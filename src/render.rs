use crate::chain::PutRow;

/// Renders the final table as right-aligned fixed-width columns. Absent
/// optional values print as "-".
pub fn render_table(rows: &[PutRow]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:>5}  {:>10}  {:>8}  {:>9}  {:>11}  {:>10}  {:>7}  {:>7}  {:>7}  {:>13}  {:>7}  {:>12}  {:>17}  {:>10}  {:>12}\n",
        "",
        "expiryDate",
        "strike",
        "lastPrice",
        "distanceOTM",
        "percentOTM",
        "bid",
        "ask",
        "change",
        "percentChange",
        "volume",
        "openInterest",
        "impliedVolatility",
        "inTheMoney",
        "value",
    ));

    for row in rows {
        out.push_str(&format!(
            "{:>5}  {:>10}  {:>8.2}  {:>9.2}  {:>11.2}  {:>10.2}  {:>7}  {:>7}  {:>7}  {:>13}  {:>7}  {:>12}  {:>17}  {:>10}  {:>12.2}\n",
            row.index,
            row.expiry_date.to_string(),
            row.strike,
            row.last_price,
            row.distance_otm,
            row.percent_otm,
            fmt_price(row.bid),
            fmt_price(row.ask),
            fmt_price(row.change),
            fmt_price(row.percent_change),
            fmt_count(row.volume),
            row.open_interest,
            fmt_volatility(row.implied_volatility),
            row.in_the_money,
            row.value,
        ));
    }

    out.push_str(&format!("\n[{} rows x 14 columns]\n", rows.len()));
    out
}

fn fmt_price(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}

fn fmt_count(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn fmt_volatility(value: Option<f64>) -> String {
    value.map(|v| format!("{:.4}", v)).unwrap_or_else(|| "-".to_string())
}
