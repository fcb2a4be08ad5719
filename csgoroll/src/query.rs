use crate::schema::PersistedQuery;
use serde_json::{json, Value};

pub const OPERATION_NAME: &str = "TradeList";

pub const TRADE_LIST_QUERY: PersistedQuery = PersistedQuery {
    version: 1,
    sha256_hash: "0f3a1ea7529016eaa9d8daee8fa24661e437d1a80d81670003b9484dc47bcb4c",
};

const PAGE_SIZE: u32 = 50;
const ORDER_BY: &str = "BEST_DEALS";
const STATUS: &str = "LISTED";
const STEAM_APP_NAME: &str = "CSGO";
const TIMESTAMP: &str = "1734586625135";

/// Request body for the persisted `TradeList` query, starting after `after`.
pub fn trade_list(after: Option<&str>) -> Value {
    json!({
        "operationName": OPERATION_NAME,
        "variables": {
            "first": PAGE_SIZE,
            "orderBy": ORDER_BY,
            "status": STATUS,
            "steamAppName": STEAM_APP_NAME,
            "t": TIMESTAMP,
            "after": after,
        },
        "extensions": {
            "persistedQuery": TRADE_LIST_QUERY,
        },
    })
}
