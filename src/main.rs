use clap::Parser;

use putscan::app::run;
use putscan::cli::Args;
use putscan::config::Config;
use putscan::error::Result;
use putscan::logging::init;

#[tokio::main]
async fn main() -> Result<()> {
    init();

    let args = Args::parse();
    let config = Config::from_env()?;

    run(args, config).await
}
