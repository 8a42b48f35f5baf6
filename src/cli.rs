use clap::Parser;

/// Get options chain data for a single stock.
#[derive(Parser, Debug)]
#[command(name = "putscan", version, about)]
pub struct Args {
    /// Number of expiry dates in options chain (0 = all).
    #[arg(short = 'd', long, default_value_t = 0)]
    pub expiry_dates: usize,

    /// Stock ticker symbol.
    #[arg(short = 's', long)]
    pub symbol: String,
}
