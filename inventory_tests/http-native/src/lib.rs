//! Shared scenarios run against every bundled transport.
//!
//! Each scenario drives a real `HttpClient` implementation against a wiremock
//! server. The server is set up on its own tokio runtime; the blocking client
//! calls happen outside of it.

use std::{net::TcpListener, time::Duration};

use ebay_inventory::{Error, HttpClient, InventoryClient, Quantity};
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

pub const TOKEN: &str = "test-token";
pub const ITEM_PATH: &str = "/sell/inventory/v1/inventory_item/";

pub struct MockInventory {
    // dropped before the runtime that started it
    server: MockServer,
    runtime: Runtime,
}

impl MockInventory {
    pub fn start() -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let server = runtime.block_on(MockServer::start());
        Ok(Self { server, runtime })
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.uri(), ITEM_PATH)
    }

    pub fn requests(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    pub fn verify(&self) {
        self.runtime.block_on(self.server.verify());
    }

    pub fn client<H: HttpClient>(&self, http_client: H) -> anyhow::Result<InventoryClient<H>> {
        Ok(InventoryClient::new(&self.base_url(), TOKEN, http_client)?)
    }
}

/// Base URL on a local port nothing listens on.
pub fn refused_base_url() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(format!("http://127.0.0.1:{}{}", port, ITEM_PATH))
}

fn item_path(item_id: &str) -> String {
    format!("{}{}", ITEM_PATH, item_id)
}

fn header_value<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}

pub fn get_stock_returns_quantity<H: HttpClient>(http_client: H) -> anyhow::Result<()> {
    let mock = MockInventory::start()?;
    mock.mount(
        Mock::given(method("GET"))
            .and(path(item_path("TEST123")))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "quantity": 42 })))
            .expect(1),
    );

    let quantity = mock.client(http_client)?.get_stock("TEST123")?;
    assert_eq!(quantity, Quantity::Int(42));
    mock.verify();
    Ok(())
}

pub fn get_inventory_item_returns_record<H: HttpClient>(http_client: H) -> anyhow::Result<()> {
    let mock = MockInventory::start()?;
    let body = json!({
        "sku": "TEST123",
        "condition": "NEW",
        "availability": { "ship_to_location_availability": { "quantity": 10 } }
    });
    mock.mount(
        Mock::given(method("GET"))
            .and(path(item_path("TEST123")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone())),
    );

    let record = mock.client(http_client)?.get_inventory_item("TEST123")?;
    assert_eq!(record.sku.as_deref(), Some("TEST123"));
    assert_eq!(record.quantity(), Some(Quantity::Int(10)));
    assert_eq!(serde_json::to_value(&record)?, body);
    Ok(())
}

pub fn get_stock_not_found<H: HttpClient>(http_client: H) -> anyhow::Result<()> {
    let mock = MockInventory::start()?;
    mock.mount(
        Mock::given(method("GET"))
            .and(path(item_path("MISSING1")))
            .respond_with(ResponseTemplate::new(404).set_body_string("Item not found")),
    );

    let err = mock.client(http_client)?.get_stock("MISSING1").unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err:?}");
    match err {
        Error::Status { body, .. } => assert_eq!(body, "Item not found"),
        other => panic!("expected status error, got {other:?}"),
    }
    Ok(())
}

pub fn error_statuses_are_distinguishable<H: HttpClient>(http_client: H) -> anyhow::Result<()> {
    let mock = MockInventory::start()?;
    let statuses = [400u16, 401, 403, 404, 409, 429, 500, 503];
    for status in statuses {
        mock.mount(
            Mock::given(path(item_path(&format!("S{status}"))))
                .respond_with(ResponseTemplate::new(status).set_body_string("rejected")),
        );
    }

    let client = mock.client(http_client)?;
    for status in statuses {
        let item_id = format!("S{status}");
        let err = client.get_stock(&item_id).unwrap_err();
        assert_eq!(err.status(), Some(status), "GET {item_id}: {err:?}");
        let err = client.update_stock(&item_id, 1).unwrap_err();
        assert_eq!(err.status(), Some(status), "PUT {item_id}: {err:?}");
    }
    Ok(())
}

pub fn get_stock_invalid_json<H: HttpClient>(http_client: H) -> anyhow::Result<()> {
    let mock = MockInventory::start()?;
    mock.mount(
        Mock::given(method("GET"))
            .and(path(item_path("BROKEN")))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>")),
    );

    let err = mock.client(http_client)?.get_stock("BROKEN").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)), "unexpected error: {err:?}");
    Ok(())
}

pub fn empty_item_id_is_not_rejected<H: HttpClient>(http_client: H) -> anyhow::Result<()> {
    let mock = MockInventory::start()?;
    mock.mount(
        Mock::given(method("GET"))
            .and(path(ITEM_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "quantity": 1 })))
            .expect(1),
    );

    assert_eq!(mock.client(http_client)?.get_stock("")?, Quantity::Int(1));
    mock.verify();
    Ok(())
}

pub fn unusual_item_ids_reach_the_server<H: HttpClient>(http_client: H) -> anyhow::Result<()> {
    let mock = MockInventory::start()?;
    mock.mount(
        Mock::given(method("GET"))
            .and(path(item_path("ITEM-123_ABC@test")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "quantity": 5 }))),
    );
    mock.mount(
        Mock::given(method("GET"))
            .and(path(item_path("caf%C3%A9")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "quantity": 6 }))),
    );

    let client = mock.client(http_client)?;
    assert_eq!(client.get_stock("ITEM-123_ABC@test")?, Quantity::Int(5));
    assert_eq!(client.get_stock("caf\u{e9}")?, Quantity::Int(6));
    Ok(())
}

pub fn update_stock_no_content<H: HttpClient>(http_client: H) -> anyhow::Result<()> {
    let mock = MockInventory::start()?;
    mock.mount(
        Mock::given(method("PUT"))
            .and(path(item_path("ITEM001")))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({
                "availability": { "ship_to_location_availability": { "quantity": 0 } }
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1),
    );

    mock.client(http_client)?.update_stock("ITEM001", 0)?;
    mock.verify();
    Ok(())
}

pub fn update_stock_ok<H: HttpClient>(http_client: H) -> anyhow::Result<()> {
    let mock = MockInventory::start()?;
    mock.mount(
        Mock::given(method("PUT"))
            .and(path(item_path("ITEM001")))
            .and(body_json(json!({
                "availability": { "ship_to_location_availability": { "quantity": 10.5 } }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "warnings": [] })))
            .expect(1),
    );

    mock.client(http_client)?.update_stock("ITEM001", 10.5)?;
    mock.verify();
    Ok(())
}

pub fn update_stock_conflict<H: HttpClient>(http_client: H) -> anyhow::Result<()> {
    let mock = MockInventory::start()?;
    mock.mount(
        Mock::given(method("PUT"))
            .and(path(item_path("ITEM001")))
            .and(body_json(json!({
                "availability": { "ship_to_location_availability": { "quantity": -5 } }
            })))
            .respond_with(ResponseTemplate::new(409).set_body_string("Conflict")),
    );

    let err = mock
        .client(http_client)?
        .update_stock("ITEM001", -5)
        .unwrap_err();
    assert!(err.is_conflict(), "unexpected error: {err:?}");
    Ok(())
}

pub fn repeated_updates_are_sent_twice<H: HttpClient>(http_client: H) -> anyhow::Result<()> {
    let mock = MockInventory::start()?;
    mock.mount(
        Mock::given(method("PUT"))
            .and(path(item_path("ITEM001")))
            .respond_with(ResponseTemplate::new(200))
            .expect(2),
    );

    let client = mock.client(http_client)?;
    client.update_stock("ITEM001", 7)?;
    client.update_stock("ITEM001", 7)?;
    mock.verify();
    Ok(())
}

pub fn credential_sent_unchanged<H: HttpClient>(http_client: H) -> anyhow::Result<()> {
    let mock = MockInventory::start()?;
    mock.mount(
        Mock::given(path(item_path("TEST123")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "quantity": 3 }))),
    );

    let client = mock.client(http_client)?;
    client.get_stock("TEST123")?;
    client.update_stock("TEST123", 4)?;

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(
            header_value(request, "authorization"),
            Some("Bearer test-token")
        );
    }
    assert_eq!(requests[0].method.as_str(), "GET");
    assert_eq!(requests[1].method.as_str(), "PUT");
    Ok(())
}

pub fn timeout_is_reported<H, F>(make_client: F) -> anyhow::Result<()>
where
    H: HttpClient,
    F: Fn(u64) -> H,
{
    let mock = MockInventory::start()?;
    mock.mount(
        Mock::given(path(item_path("SLOW")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "quantity": 1 }))
                    .set_delay(Duration::from_secs(3)),
            ),
    );

    let client = mock.client(make_client(1))?;
    let err = client.get_stock("SLOW").unwrap_err();
    assert!(matches!(err, Error::Timeout(_)), "unexpected error: {err:?}");
    let err = client.update_stock("SLOW", 1).unwrap_err();
    assert!(matches!(err, Error::Timeout(_)), "unexpected error: {err:?}");
    Ok(())
}

pub fn connection_refused_is_reported<H: HttpClient>(http_client: H) -> anyhow::Result<()> {
    let client = InventoryClient::new(&refused_base_url()?, TOKEN, http_client)?;

    let err = client.get_stock("TEST123").unwrap_err();
    assert!(matches!(err, Error::Connection(_)), "unexpected error: {err:?}");
    let err = client.update_stock("TEST123", 1).unwrap_err();
    assert!(matches!(err, Error::Connection(_)), "unexpected error: {err:?}");
    Ok(())
}
