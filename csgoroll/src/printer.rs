use crate::schema::{TradeItem, TradePage};
use std::io::{self, Write};

pub fn print_page<W: Write>(out: &mut W, page: &TradePage) -> io::Result<()> {
    for node in &page.edges {
        writeln!(out, "Trade ID: {}", node.id)?;
        for item in &node.items {
            print_item(out, item)?;
        }
        writeln!(out)?;
    }
    out.flush()
}

fn print_item<W: Write>(out: &mut W, item: &TradeItem) -> io::Result<()> {
    writeln!(out, " - Skin Name: {}", item.market_name)?;
    writeln!(out, "   Price: {}", item.value)?;
    writeln!(out, "   Price Compared to Market: {}%", item.markup_percent)
}
