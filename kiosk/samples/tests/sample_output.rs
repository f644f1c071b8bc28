//! Runs each generated sample against a mocked Display service and checks
//! what it writes.

use kiosk_client::DisplayClient;
use kiosk_client::messages::{Kiosk, Sign};
use kiosk_samples::{SampleError, run_sample};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn lobby_kiosk() -> serde_json::Value {
    json!({
        "id": 1024,
        "name": "Lobby",
        "size": { "width": 1080, "height": 1920 }
    })
}

async fn mock_get_kiosk(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/kiosks/1024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lobby_kiosk()))
        .expect(1)
        .mount(server)
        .await;
}

async fn mock_list_signs(server: &MockServer, signs: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/signs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "signs": signs })))
        .expect(1)
        .mount(server)
        .await;
}

async fn run(name: &str, server: &MockServer) -> Result<String, SampleError> {
    let client = DisplayClient::with_base_url(&server.uri()).expect("valid mock uri");
    let mut out = Vec::new();
    run_sample(name, &client, &mut out).await?;
    Ok(String::from_utf8(out).expect("sample output is UTF-8"))
}

fn expected_kiosk_line() -> String {
    let kiosk: Kiosk = serde_json::from_value(lobby_kiosk()).unwrap();
    format!("Response: {}\n", kiosk)
}

#[tokio::test]
async fn get_kiosk_request_prints_single_response_line() {
    let server = MockServer::start().await;
    mock_get_kiosk(&server).await;

    let output = run("get_kiosk_request", &server).await.unwrap();

    assert_eq!(output, expected_kiosk_line());
    assert_eq!(
        output,
        "Response: id: 1024 name: \"Lobby\" size { width: 1080 height: 1920 }\n"
    );
}

#[tokio::test]
async fn get_kiosk_callable_matches_request_form() {
    let server = MockServer::start().await;
    mock_get_kiosk(&server).await;

    let output = run("get_kiosk_callable", &server).await.unwrap();

    assert_eq!(output, expected_kiosk_line());
}

#[tokio::test]
async fn samples_resolve_by_sample_name() {
    let server = MockServer::start().await;
    mock_get_kiosk(&server).await;

    let output = run("GetKioskCallableCallableGetKioskMethodSample", &server)
        .await
        .unwrap();

    assert_eq!(output.lines().count(), 1);
}

#[tokio::test]
async fn empty_sign_list_prints_nothing() {
    for name in ["list_signs_request", "list_signs_callable"] {
        let server = MockServer::start().await;
        mock_list_signs(&server, json!([])).await;

        let output = run(name, &server).await.unwrap();
        assert_eq!(output, "", "{} printed output for an empty list", name);
    }
}

#[tokio::test]
async fn sign_list_prints_one_line_per_sign_in_server_order() {
    let signs = json!([
        { "id": 3, "name": "Exit", "text": "This way out" },
        { "id": 1, "name": "Welcome", "text": "Hello" },
        { "id": 1, "name": "Welcome", "text": "Hello" }
    ]);
    let expected: Vec<String> = serde_json::from_value::<Vec<Sign>>(signs.clone())
        .unwrap()
        .iter()
        .map(|sign| format!("Sign: {}", sign))
        .collect();

    for name in ["list_signs_request", "list_signs_callable"] {
        let server = MockServer::start().await;
        mock_list_signs(&server, signs.clone()).await;

        let output = run(name, &server).await.unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, expected, "{} output differs", name);
    }
}

#[tokio::test]
async fn service_errors_propagate_to_the_caller() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/kiosks/1024"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such kiosk"))
        .mount(&server)
        .await;

    for name in ["get_kiosk_request", "get_kiosk_callable"] {
        let err = run(name, &server).await.unwrap_err();
        match err {
            SampleError::Client(client_err) => assert_eq!(client_err.status_code(), Some(404)),
            other => panic!("Expected client error, got {:?}", other),
        }
    }
}
