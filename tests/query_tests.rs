/// Unit tests for the query string builders.
///
/// Covers the append primitive, field order and conditional inclusion for
/// every endpoint family, and pagination cursor placement.

use clob_http::query::*;
use clob_http::*;

#[test]
fn test_build_query_params_after_question_mark() {
    assert_eq!(
        build_query_params("http://tracker?", "q1", "a"),
        "http://tracker?q1=a"
    );
}

#[test]
fn test_build_query_params_after_existing_pair() {
    assert_eq!(
        build_query_params("http://tracker?q1=a", "q2", "b"),
        "http://tracker?q1=a&q2=b"
    );
}

#[test]
fn test_build_query_params_does_not_escape() {
    assert_eq!(
        build_query_params("http://tracker?", "ids", "a=b,c d"),
        "http://tracker?ids=a=b,c d"
    );
}

// ---------------------------------------------------------------------------
// Trades
// ---------------------------------------------------------------------------

#[test]
fn test_trade_params_all_fields_in_order() {
    let params = TradeParams {
        market: Some("10000".into()),
        after: Some(1450000),
        before: Some(1460000),
        asset_id: Some("100".into()),
        maker_address: Some("0x0".into()),
        id: Some("aa-bb".into()),
    };
    let url = add_query_trade_params("http://tracker", Some(&params), Some("AA=="));
    assert_eq!(
        url,
        "http://tracker?market=10000&asset_id=100&after=1450000&before=1460000&maker_address=0x0&id=aa-bb&next_cursor=AA=="
    );
}

#[test]
fn test_trade_params_absent_object_cursor_only() {
    let url = add_query_trade_params("http://tracker", None, Some("AA=="));
    assert_eq!(url, "http://tracker?next_cursor=AA==");
}

#[test]
fn test_trade_params_skips_absent_fields() {
    let params = TradeParams::new().with_asset_id("100").with_before(9);
    let url = add_query_trade_params("http://tracker", Some(&params), None);
    assert_eq!(url, "http://tracker?asset_id=100&before=9");
}

#[test]
fn test_trade_params_empty_cursor_still_appended() {
    let url = add_query_trade_params("http://tracker", None, Some(""));
    assert_eq!(url, "http://tracker?next_cursor=");
}

#[test]
fn test_trade_params_nothing_supplied_returns_base() {
    assert_eq!(add_query_trade_params("http://tracker", None, None), "http://tracker");
}

#[test]
fn test_trade_params_zero_timestamp_is_present() {
    let params = TradeParams::new().with_after(0);
    let url = add_query_trade_params("http://tracker", Some(&params), None);
    assert_eq!(url, "http://tracker?after=0");
}

// ---------------------------------------------------------------------------
// Open orders
// ---------------------------------------------------------------------------

#[test]
fn test_open_orders_default_cursor() {
    let params = OpenOrderParams::new()
        .with_market("10000")
        .with_asset_id("100")
        .with_id("aa-bb");
    let url = add_query_open_orders_params("http://tracker", Some(&params), None);
    assert_eq!(
        url,
        "http://tracker?market=10000&asset_id=100&id=aa-bb&next_cursor=MA=="
    );
}

#[test]
fn test_open_orders_absent_object_with_cursor() {
    let url = add_query_open_orders_params("http://tracker", None, Some("AA=="));
    assert_eq!(url, "http://tracker?next_cursor=AA==");
}

#[test]
fn test_open_orders_absent_everything_uses_initial_cursor() {
    let url = add_query_open_orders_params("http://tracker", None, None);
    assert_eq!(url, format!("http://tracker?next_cursor={INITIAL_CURSOR}"));
}

#[test]
fn test_open_orders_base_with_existing_query() {
    let params = OpenOrderParams::new().with_market("m");
    let url = add_query_open_orders_params("http://tracker?x=1", Some(&params), Some("AA=="));
    assert_eq!(url, "http://tracker?x=1&market=m&next_cursor=AA==");
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[test]
fn test_drop_notifications_ids() {
    let params = DropNotificationParams::new(["1", "2", "3"]);
    let url = drop_notifications_query_params("http://tracker", Some(&params));
    assert_eq!(url, "http://tracker?ids=1,2,3");
}

#[test]
fn test_drop_notifications_empty_list_is_present() {
    let params = DropNotificationParams::new(Vec::<String>::new());
    let url = drop_notifications_query_params("http://tracker", Some(&params));
    assert_eq!(url, "http://tracker?ids=");
}

#[test]
fn test_drop_notifications_absent_ids_omitted() {
    let params = DropNotificationParams { ids: None };
    let url = drop_notifications_query_params("http://tracker", Some(&params));
    assert_eq!(url, "http://tracker?");
}

// ---------------------------------------------------------------------------
// Balance / allowance
// ---------------------------------------------------------------------------

#[test]
fn test_balance_allowance_collateral() {
    let params = BalanceAllowanceParams::collateral().with_signature_type(SignatureType::Eoa);
    let url = add_balance_allowance_params_to_url("http://tracker", Some(&params));
    assert_eq!(url, "http://tracker?asset_type=COLLATERAL&signature_type=0");
}

#[test]
fn test_balance_allowance_conditional() {
    let params =
        BalanceAllowanceParams::conditional("222").with_signature_type(SignatureType::PolyProxy);
    let url = add_balance_allowance_params_to_url("http://tracker", Some(&params));
    assert_eq!(
        url,
        "http://tracker?asset_type=CONDITIONAL&token_id=222&signature_type=1"
    );
}

#[test]
fn test_balance_allowance_absent_object() {
    assert_eq!(
        add_balance_allowance_params_to_url("http://tracker", None),
        "http://tracker"
    );
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[test]
fn test_order_scoring() {
    let params = OrderScoringParams::new("0x0123abc");
    let url = add_order_scoring_params_to_url("http://tracker", Some(&params));
    assert_eq!(url, "http://tracker?order_id=0x0123abc");
}

#[test]
fn test_orders_scoring() {
    let params = OrdersScoringParams::new(["0x0", "0x1", "0x2"]);
    let url = add_orders_scoring_params_to_url("http://tracker", Some(&params));
    assert_eq!(url, "http://tracker?order_ids=0x0,0x1,0x2");
}

// ---------------------------------------------------------------------------
// Endpoint composition
// ---------------------------------------------------------------------------

#[test]
fn test_api_urls_join_host_and_path() {
    let config = ClobConfig::default().with_host("http://tracker/").unwrap();
    let api = ClobApi::new(config);

    assert_eq!(
        api.trades_url(None, Some("AA==")),
        "http://tracker/data/trades?next_cursor=AA=="
    );
    assert_eq!(
        api.open_orders_url(None, None),
        "http://tracker/data/orders?next_cursor=MA=="
    );
    assert_eq!(
        api.drop_notifications_url(Some(&DropNotificationParams::new(["9"]))),
        "http://tracker/notifications?ids=9"
    );
    assert_eq!(
        api.balance_allowance_url(Some(&BalanceAllowanceParams::collateral())),
        "http://tracker/balance-allowance?asset_type=COLLATERAL"
    );
    assert_eq!(
        api.order_scoring_url(Some(&OrderScoringParams::new("0x1"))),
        "http://tracker/order-scoring?order_id=0x1"
    );
    assert_eq!(
        api.orders_scoring_url(Some(&OrdersScoringParams::new(["0x1", "0x2"]))),
        "http://tracker/orders-scoring?order_ids=0x1,0x2"
    );
}

#[test]
fn test_config_rejects_non_http_host() {
    assert!(ClobConfig::default().with_host("ftp://tracker").is_err());
    assert!(ClobConfig::default().with_host("not a url").is_err());
}
