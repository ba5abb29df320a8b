use ebay_inventory::ReqwestClient;
use http_native::*;

fn http_client() -> ReqwestClient {
    ReqwestClient::new().unwrap()
}

#[test]
fn test_get_stock_returns_quantity() {
    get_stock_returns_quantity(http_client()).unwrap();
}

#[test]
fn test_get_inventory_item_returns_record() {
    get_inventory_item_returns_record(http_client()).unwrap();
}

#[test]
fn test_get_stock_not_found() {
    get_stock_not_found(http_client()).unwrap();
}

#[test]
fn test_error_statuses_are_distinguishable() {
    error_statuses_are_distinguishable(http_client()).unwrap();
}

#[test]
fn test_get_stock_invalid_json() {
    get_stock_invalid_json(http_client()).unwrap();
}

#[test]
fn test_empty_item_id_is_not_rejected() {
    empty_item_id_is_not_rejected(http_client()).unwrap();
}

#[test]
fn test_unusual_item_ids_reach_the_server() {
    unusual_item_ids_reach_the_server(http_client()).unwrap();
}

#[test]
fn test_update_stock_no_content() {
    update_stock_no_content(http_client()).unwrap();
}

#[test]
fn test_update_stock_ok() {
    update_stock_ok(http_client()).unwrap();
}

#[test]
fn test_update_stock_conflict() {
    update_stock_conflict(http_client()).unwrap();
}

#[test]
fn test_repeated_updates_are_sent_twice() {
    repeated_updates_are_sent_twice(http_client()).unwrap();
}

#[test]
fn test_credential_sent_unchanged() {
    credential_sent_unchanged(http_client()).unwrap();
}

#[test]
fn test_timeout_is_reported() {
    timeout_is_reported(|secs| ReqwestClient::with_timeout(secs).unwrap()).unwrap();
}

#[test]
fn test_connection_refused_is_reported() {
    connection_refused_is_reported(http_client()).unwrap();
}
