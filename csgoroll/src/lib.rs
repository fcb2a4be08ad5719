//! Polls the CSGORoll GraphQL trade list and prints the listed skins with
//! their price and markup against the market.
pub mod config;
mod decode;
mod error;
mod http;
mod poller;
mod printer;
mod query;
mod retry;
mod schema;

pub use config::{Config, Pagination};
pub use decode::decode_trades;
pub use error::Error;
pub use http::{HttpClient, BASE_URL};
pub use poller::Poller;
pub use printer::print_page;
pub use query::{trade_list, TRADE_LIST_QUERY};
pub use retry::{RetryPolicy, Retryable};
pub use schema::{PersistedQuery, TradeItem, TradeNode, TradePage};

pub type Result<T> = std::result::Result<T, Error>;

use env_logger::{Builder, Env};

/// Loads variables from a `.env` file if present and initializes the logger
/// with a default filter level of "info".
pub fn setup_env() {
    dotenvy::dotenv().ok();
    Builder::from_env(Env::default().default_filter_or("info")).init();
}
