//! End-to-end tests of the HTTP API with Horizon and friendbot served by
//! wiremock. A custom network pointing at the mock server is added and
//! selected through the repository before each test.
use std::{sync::Arc, time::Duration};

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use stellar_chef::{
    api::routes::configure_routes,
    models::{AppState, NetworkConfig},
    repositories::{AssetRepository, NetworkRepository, Storage},
};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ISSUER_SECRET: &str = "SAAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQC5MY";
const ISSUER_PUBLIC: &str = "GCFIRY65OQE7DFP5KLNS2PF2LVZMUZYJX4OZIEQ36N2IQANUB5XVYOJR";
const HOLDER_PUBLIC: &str = "GCATS5YOVB6ROX2WUNKGNQ2MP3GMXDMKSG2O4N5CLX3A6W4PZGZZI55U";

async fn state_for(server: &MockServer) -> AppState {
    let storage = Arc::new(Storage::new_in_memory());
    let networks = NetworkRepository::new(storage.clone());
    networks
        .add(NetworkConfig {
            name: "mock".to_string(),
            horizon_url: server.uri(),
            passphrase: "Test SDF Network ; September 2015".to_string(),
            friendbot_url: Some(format!("{}/friendbot", server.uri())),
            explorer_network: "testnet".to_string(),
        })
        .await
        .unwrap();
    networks.select(3).await.unwrap();

    AppState {
        network_repository: Arc::new(networks),
        asset_repository: Arc::new(AssetRepository::new(storage)),
        horizon_timeout: Duration::from_secs(5),
    }
}

fn account_json(id: &str, balances: Value) -> Value {
    json!({ "account_id": id, "sequence": "4294967296", "balances": balances })
}

async fn mount_account(server: &MockServer, id: &str, balances: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_json(id, balances)))
        .mount(server)
        .await;
}

async fn mount_submission(server: &MockServer, hash: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hash": hash,
            "ledger": 42,
            "successful": true
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::ThinData($state))
                .service(web::scope("/api/v1").configure(configure_routes)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let server = MockServer::start().await;
    let app = init_app!(state_for(&server).await);

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_freeze_recipe_end_to_end() {
    let server = MockServer::start().await;
    mount_account(&server, ISSUER_PUBLIC, json!([])).await;
    mount_account(&server, HOLDER_PUBLIC, json!([])).await;
    mount_submission(&server, "abcd", 1).await;
    let app = init_app!(state_for(&server).await);

    let req = test::TestRequest::post()
        .uri("/api/v1/recipes/freeze")
        .set_json(json!({
            "assetCode": "testAsset",
            "issuerSecretKey": ISSUER_SECRET,
            "assetHolderPublicKey": HOLDER_PUBLIC,
            "freeze": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["state"], "success");
    assert_eq!(body["data"]["message"], "Asset frozen successfully!");
    assert_eq!(
        body["data"]["links"][0]["url"],
        "https://stellar.expert/explorer/testnet/tx/abcd"
    );
}

#[actix_web::test]
async fn test_freeze_missing_holder_account() {
    let server = MockServer::start().await;
    mount_account(&server, ISSUER_PUBLIC, json!([])).await;
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{}", HOLDER_PUBLIC)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "title": "Resource Missing"
        })))
        .mount(&server)
        .await;
    mount_submission(&server, "never", 0).await;
    let app = init_app!(state_for(&server).await);

    let req = test::TestRequest::post()
        .uri("/api/v1/recipes/freeze")
        .set_json(json!({
            "assetCode": "testAsset",
            "issuerSecretKey": ISSUER_SECRET,
            "assetHolderPublicKey": HOLDER_PUBLIC,
            "freeze": false
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Error: Failed to load account"));
}

#[actix_web::test]
async fn test_clawback_rejection_surfaces_result_codes() {
    let server = MockServer::start().await;
    mount_account(&server, ISSUER_PUBLIC, json!([])).await;
    mount_account(
        &server,
        HOLDER_PUBLIC,
        json!([{
            "balance": "25.0000000",
            "asset_type": "credit_alphanum12",
            "asset_code": "testCoin",
            "asset_issuer": ISSUER_PUBLIC
        }]),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/transactions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "title": "Transaction Failed",
            "extras": {
                "result_codes": {
                    "transaction": "tx_failed",
                    "operations": ["op_not_clawback_enabled"]
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let app = init_app!(state_for(&server).await);

    let req = test::TestRequest::post()
        .uri("/api/v1/recipes/clawback")
        .set_json(json!({
            "assetCode": "testCoin",
            "issuerSecretKey": ISSUER_SECRET,
            "clawbackAccount": HOLDER_PUBLIC,
            "amount": "10"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: Value = test::read_body_json(resp).await;
    let message = body["data"]["message"].as_str().unwrap();
    assert!(message.starts_with("Error: Clawback of 10.0000000 testCoin failed."));
    assert!(message.contains("op_not_clawback_enabled"));
}

#[actix_web::test]
async fn test_asset_issuance_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/friendbot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "hash": "f" })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex("^/accounts/G[A-Z2-7]{55}$"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(account_json(ISSUER_PUBLIC, json!([]))),
        )
        .mount(&server)
        .await;
    // issuer flags, then trust + payment
    mount_submission(&server, "1551", 2).await;
    let state = state_for(&server).await;
    let assets = state.asset_repository.clone();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/recipes/asset-issuance")
        .set_json(json!({
            "assetCode": "USDC",
            "distributorPaymentAmount": "500",
            "clawbackEnabled": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["data"]["message"],
        "Transaction successful. Distributor account balance: 0.0000000 USDC"
    );
    let accounts = body["data"]["accounts"].as_array().unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0]["role"], "issuer");

    let stored = assets.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].code, "USDC");
    assert_eq!(stored[0].issuer, accounts[0]["publicKey"].as_str().unwrap());

    let req = test::TestRequest::get().uri("/api/v1/assets").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["data"][0]["code"], "USDC");
}

#[actix_web::test]
async fn test_claimable_balances() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/claimable_balances"))
        .and(query_param("claimant", HOLDER_PUBLIC))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": {
                "records": [{
                    "id": "00000000da0d57da7d4850e7fc10d2a9d0ebc731f7afb40574c03395b17d49149b91f5be",
                    "asset": "native",
                    "amount": "5.0000000",
                    "claimants": [{ "destination": HOLDER_PUBLIC }]
                }]
            }
        })))
        .mount(&server)
        .await;
    let app = init_app!(state_for(&server).await);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/accounts/{}/claimable-balances", HOLDER_PUBLIC))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"][0]["amount"], "5.0000000");
}

#[actix_web::test]
async fn test_operation_dry_run_needs_no_network() {
    let server = MockServer::start().await;
    let app = init_app!(state_for(&server).await);

    let req = test::TestRequest::post()
        .uri("/api/v1/operations/set_options")
        .set_json(json!({ "homeDomain": "example.com" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["operation"], "set-options");
    assert!(server.received_requests().await.unwrap().is_empty());
}
