//! Runs `k` commands against a mocked Display service.

use std::fs;

use kiosk_cli::commands::{CreateCommand, DeleteCommand, GetCommand, ListCommand, SetCommand};
use kiosk_cli::{CliError, Command, execute};
use kiosk_client::DisplayClient;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run(server: &MockServer, command: Command) -> Result<String, CliError> {
    let client = DisplayClient::with_base_url(&server.uri()).expect("mock server uri should be valid");
    let mut out = Vec::new();
    execute(&command, &client, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn create_kiosk_prints_the_enrolled_kiosk() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/kiosks"))
        .and(body_json(json!({ "id": 0, "name": "Lobby" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5, "name": "Lobby" })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(
        &server,
        Command::Create(CreateCommand::Kiosk {
            name: "Lobby".to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(output, "id: 5 name: \"Lobby\"\n");
}

#[tokio::test]
async fn create_sign_encodes_image_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/signs"))
        .and(body_json(json!({
            "id": 0,
            "name": "Welcome",
            "text": "Hello",
            "image": "UE5H"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9,
            "name": "Welcome",
            "text": "Hello",
            "image": "UE5H"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let image = dir.path().join("welcome.png");
    fs::write(&image, b"PNG").unwrap();

    let output = run(
        &server,
        Command::Create(CreateCommand::Sign {
            name: "Welcome".to_string(),
            text: Some("Hello".to_string()),
            image: Some(image),
        }),
    )
    .await
    .unwrap();

    assert_eq!(output, "id: 9 name: \"Welcome\" text: \"Hello\"\n");
}

#[tokio::test]
async fn missing_image_file_is_reported_before_calling() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = run(
        &server,
        Command::Create(CreateCommand::Sign {
            name: "Welcome".to_string(),
            text: None,
            image: Some("/nonexistent/welcome.png".into()),
        }),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CliError::ReadImage { .. }));
}

#[tokio::test]
async fn list_kiosks_prints_one_line_each() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/kiosks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kiosks": [{ "id": 2, "name": "B" }, { "id": 1, "name": "A" }]
        })))
        .mount(&server)
        .await;

    let output = run(&server, Command::List(ListCommand::Kiosks)).await.unwrap();

    assert_eq!(output, "id: 2 name: \"B\"\nid: 1 name: \"A\"\n");
}

#[tokio::test]
async fn list_signs_with_no_signs_prints_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/signs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let output = run(&server, Command::List(ListCommand::Signs)).await.unwrap();

    assert!(output.is_empty());
}

#[tokio::test]
async fn get_sign_for_kiosk_prints_sign_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/kiosks/4/sign"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "signId": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(
        &server,
        Command::Get(GetCommand::Sign {
            sign_id: None,
            for_kiosk: Some(4),
        }),
    )
    .await
    .unwrap();

    assert_eq!(output, "sign_id: 7\n");
}

#[tokio::test]
async fn get_sign_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/signs/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "name": "Exit",
            "text": "This way"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(
        &server,
        Command::Get(GetCommand::Sign {
            sign_id: Some(3),
            for_kiosk: None,
        }),
    )
    .await
    .unwrap();

    assert_eq!(output, "id: 3 name: \"Exit\" text: \"This way\"\n");
}

#[tokio::test]
async fn delete_kiosk_reports_deleted() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/kiosks/6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(&server, Command::Delete(DeleteCommand::Kiosk { kiosk_id: 6 }))
        .await
        .unwrap();

    assert_eq!(output, "deleted\n");
}

#[tokio::test]
async fn set_sign_for_one_kiosk() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/signs/2"))
        .and(body_json(json!({ "kioskIds": [1], "signId": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(
        &server,
        Command::Set(SetCommand::Sign {
            sign_id: 2,
            kiosk: Some(1),
            all: false,
        }),
    )
    .await
    .unwrap();

    assert_eq!(output, "Successfully set kiosk 1 to sign 2\n");
}

#[tokio::test]
async fn set_sign_for_all_kiosks_sends_no_ids() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/signs/2"))
        .and(body_json(json!({ "kioskIds": [], "signId": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(
        &server,
        Command::Set(SetCommand::Sign {
            sign_id: 2,
            kiosk: None,
            all: true,
        }),
    )
    .await
    .unwrap();

    assert_eq!(output, "Successfully set all kiosks to sign 2\n");
}

#[tokio::test]
async fn service_errors_propagate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/kiosks/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("kiosk not found"))
        .mount(&server)
        .await;

    let err = run(&server, Command::Get(GetCommand::Kiosk { kiosk_id: 404 }))
        .await
        .unwrap_err();

    match err {
        CliError::Client(e) => assert_eq!(e.status_code(), Some(404)),
        other => panic!("Expected client error, got {:?}", other),
    }
}
