pub const YAHOO_BASE_URL: &str = "https://query2.finance.yahoo.com";

// Yahoo rejects requests carrying the default client UA.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/119.0";

// Contracts trading at or below this premium are noise.
pub const MIN_LAST_PRICE: f64 = 0.10;

// Standard equity option multiplier.
pub const CONTRACT_MULTIPLIER: f64 = 100.0;
