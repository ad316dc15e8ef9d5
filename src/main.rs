use gtd::commands::Cli;
use gtd::libs::config::Config;
use gtd::libs::logging::{self, DEFAULT_FILTER};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // A broken config file must not prevent `init --force` from running.
    let filter = Config::read().map(|config| config.log.filter).unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    logging::init(&filter);

    Cli::menu().await
}
