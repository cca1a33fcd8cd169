/// Warm-and-query example: pre-establish the connection, then page through
/// open orders by building each URL with the query builders.
///
/// Requires network access. Prints the raw response bodies.
use clob_http::{
    is_end_cursor, BalanceAllowanceParams, ClobApi, ClobConfig, Network, OpenOrderParams,
    SignatureType, TradeParams,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api = ClobApi::new(ClobConfig::from_network(Network::Polygon));

    // 1. Pay the TCP/TLS handshake before the first real request
    api.warm().await;
    println!("Warmed connection to {}", api.config().host);

    // 2. Server time over the warm connection
    let time = api.get_server_time().await?;
    println!("Server time: {time}");

    // 3. URLs for the lookup endpoints
    let trades = TradeParams::new().with_market("0xabc").with_after(1_450_000);
    println!("Trades URL: {}", api.trades_url(Some(&trades), None));

    let balance = BalanceAllowanceParams::conditional("222")
        .with_signature_type(SignatureType::PolyGnosisSafe);
    println!("Balance URL: {}", api.balance_allowance_url(Some(&balance)));

    // 4. Page through open orders until the server returns the end cursor
    let params = OpenOrderParams::new().with_market("0xabc");
    let mut cursor: Option<String> = None;
    for page in 0..3 {
        let url = api.open_orders_url(Some(&params), cursor.as_deref());
        let body = match api.get(&url).await {
            Ok(body) => body,
            Err(e) => {
                println!("Page {page} failed: {e}");
                break;
            }
        };
        let value: serde_json::Value = serde_json::from_str(&body)?;
        let next = value
            .get("next_cursor")
            .and_then(|c| c.as_str())
            .map(String::from);
        println!("Page {page}: next_cursor={next:?}");
        match next {
            Some(next) if !is_end_cursor(&next) => cursor = Some(next),
            _ => break,
        }
    }

    Ok(())
}
