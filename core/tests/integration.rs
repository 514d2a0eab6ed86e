//! End-to-end calls against the mock registry over real HTTP.
//!
//! # Design
//! Starts the mock server on a random port, then drives `OdbClient` with the
//! default `UreqTransport`. Validates URL building, key injection, status
//! handling and decoding against an actual server.

use std::net::SocketAddr;

use mock_server::{API_KEY, KNOWN_CODE, KNOWN_DECISION, KNOWN_FOP};
use odb_core::endpoints::{InstitutionsParams, RegistrationsParams};
use odb_core::{with_api_key, with_base_url, ApiError, OdbClient};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn client(addr: SocketAddr, api_key: &str) -> OdbClient {
    OdbClient::new([
        with_api_key(api_key),
        with_base_url(format!("http://{addr}/api/v2")),
    ])
}

#[test]
fn registry_lookups() {
    let addr = start_server();
    let client = client(addr, API_KEY);

    // Step 1: state ownership lookup.
    let owned = client.government_company(KNOWN_CODE).unwrap();
    assert_eq!(owned.status, "ok");
    assert_eq!(owned.data.count, 1);
    assert_eq!(owned.data.items[0].code, KNOWN_CODE);

    let not_owned = client.government_company("00000000").unwrap();
    assert_eq!(not_owned.data.count, 0);
    assert!(not_owned.data.items.is_empty());

    // Step 2: company card comes back as a bare array, null ceo_name included.
    let companies = client.company(KNOWN_CODE).unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].code, KNOWN_CODE);
    assert_eq!(companies[0].ceo_name, "");
    assert_eq!(companies[0].beneficiaries[0].capital, 1_000_000);

    // Step 3: sole proprietor without envelope.
    let fop = client.dpa(KNOWN_FOP).unwrap();
    assert_eq!(fop.code, KNOWN_FOP);
    assert_eq!(fop.phones, vec!["+380441234567".to_string()]);

    // Step 4: string counter and filters.
    let params = RegistrationsParams {
        kind: Some("company".to_string()),
        limit: Some(1),
        ..Default::default()
    };
    let registrations = client.registrations(&params).unwrap();
    assert_eq!(registrations.count, 2);
    assert_eq!(registrations.items.len(), 1);
    assert_eq!(registrations.items[0].kind, "company");

    // Step 5: court decision by id.
    let decision = client.court_decision(KNOWN_DECISION).unwrap();
    assert_eq!(decision.cause_number, "761/1234/19");
    assert_eq!(decision.court_code, 2610);
    assert_eq!(decision.doc_id, 86301431);

    // Step 6: quota statistics.
    let stats = client.statistics().unwrap();
    assert_eq!(stats.company.used, 12);
    assert_eq!(stats.fop.balance, 497);
    assert_eq!(stats.customer_id, "42");
}

#[test]
fn unknown_identifier_is_not_found() {
    let addr = start_server();
    let client = client(addr, API_KEY);

    let err = client.company("00000000").unwrap_err();
    assert_eq!(
        err,
        ApiError::HttpStatus {
            status: 404,
            reason: "Not Found".to_string()
        }
    );

    let err = client.court_decision("1").unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[test]
fn wrong_key_is_forbidden() {
    let addr = start_server();
    let client = client(addr, "wrong");

    let err = client.statistics().unwrap_err();
    assert_eq!(
        err,
        ApiError::HttpStatus {
            status: 403,
            reason: "Forbidden".to_string()
        }
    );
}

#[test]
fn public_endpoints_work_without_key() {
    let addr = start_server();
    let client = client(addr, "");

    let regions = client.koatuu_regions().unwrap();
    assert_eq!(regions.status, "ok");
    assert_eq!(regions.data.len(), 2);
    assert_eq!(regions.data[0].code, "8000000000");
    assert_eq!(regions.data[0].kind, "region");

    let params = InstitutionsParams {
        name: Some("апеляційний".to_string()),
        ..Default::default()
    };
    let courts = client.institutions(&params).unwrap();
    assert_eq!(courts.data.count, 1);
    assert_eq!(courts.data.items[0].code, "4856");

    // Keyed endpoints refuse before any request is made.
    let err = client.statistics().unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[test]
fn unreachable_server_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(addr, API_KEY).statistics().unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
}
