use crate::schema::{Envelope, TradePage, Trades};
use crate::{Error, Result};
use log::warn;

/// Decodes a GraphQL response body into the page held in `data.trades`.
pub fn decode_trades(body: &str) -> Result<TradePage> {
    let envelope: Envelope = serde_json::from_str(body)?;

    for error in envelope.errors.iter().flatten() {
        warn!("GraphQL error: {}", error.message);
    }

    let trades = envelope
        .data
        .ok_or_else(|| Error::UnexpectedShape("missing `data`".into()))?
        .trades
        .ok_or_else(|| Error::UnexpectedShape("missing `data.trades`".into()))?;

    flatten(trades)
}

fn flatten(trades: Trades) -> Result<TradePage> {
    let edges = trades
        .edges
        .ok_or_else(|| Error::UnexpectedShape("missing `data.trades.edges`".into()))?;

    let (end_cursor, has_next_page) = match trades.page_info {
        Some(info) => {
            let has_next = info.has_next_page.unwrap_or(info.end_cursor.is_some());
            (info.end_cursor, has_next)
        }
        None => (None, false),
    };

    Ok(TradePage {
        edges: edges.into_iter().map(|edge| edge.node).collect(),
        end_cursor,
        has_next_page,
    })
}
