use crate::constants::{DEFAULT_USER_AGENT, YAHOO_BASE_URL};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub yahoo: YahooConfig,
}

#[derive(Debug, Clone)]
pub struct YahooConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let base_url = std::env::var("YAHOO_BASE_URL")
            .unwrap_or_else(|_| YAHOO_BASE_URL.to_string());

        let user_agent = std::env::var("YAHOO_USER_AGENT")
            .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let timeout_secs = match std::env::var("YAHOO_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| Error::Config(format!("YAHOO_TIMEOUT_SECS is not a number: {}", raw)))?,
            Err(_) => 30,
        };

        Ok(Config {
            yahoo: YahooConfig {
                base_url,
                user_agent,
                timeout_secs,
            },
        })
    }
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: YAHOO_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}
