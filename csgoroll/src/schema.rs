use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedQuery {
    pub version: u32,
    pub sha256_hash: &'static str,
}

/// Top-level GraphQL response object.
#[derive(Deserialize, Debug)]
pub(crate) struct Envelope {
    pub data: Option<Data>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct GraphQlError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Data {
    pub trades: Option<Trades>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Trades {
    pub edges: Option<Vec<Edge>>,
    pub page_info: Option<PageInfo>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Edge {
    pub node: TradeNode,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: Option<bool>,
}

/// One trade listing.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TradeNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "tradeItems", default, deserialize_with = "null_as_default")]
    pub items: Vec<TradeItem>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub market_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub markup_percent: f64,
}

/// The decoded `trades` field of one response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradePage {
    pub edges: Vec<TradeNode>,
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
