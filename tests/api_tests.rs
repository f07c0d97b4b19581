//! HTTP surface driven through the router without a socket.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use common::{bare_router, can_bind_localhost, corrupt_jpeg, encoded_image, json_request, router_with, send};
use httpmock::Method::POST;
use httpmock::MockServer;
use image::ImageFormat;
use serde_json::json;
use site_toolkit::AppConfig;
use site_toolkit::config::{EmailConfig, OpenAiConfig};

// ── Utilities ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_check() {
    let (status, body) = json_request(&bare_router(), "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn base64_text_round_trip() {
    let router = bare_router();
    let (status, body) =
        json_request(&router, "POST", "/api/tools/base64/encode", Some(json!({ "text": "日本語" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "5pel5pys6Kqe");

    let (status, body) =
        json_request(&router, "POST", "/api/tools/base64/decode", Some(json!({ "text": "5pel5pys6Kqe" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "日本語");
}

#[tokio::test]
async fn invalid_base64_is_a_decode_error() {
    let (status, body) =
        json_request(&bare_router(), "POST", "/api/tools/base64/decode", Some(json!({ "text": "%%%" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "decode");
    assert!(body["error"].as_str().unwrap().contains("Invalid Base64"));
}

#[tokio::test]
async fn file_round_trip_preserves_bytes() {
    let router = bare_router();
    let original: Vec<u8> = vec![0x00, 0xFF, 0x10, 0x80, 0x7F];
    let request = Request::builder()
        .method("POST")
        .uri("/api/tools/base64/file/encode")
        .body(Body::from(original.clone()))
        .unwrap();
    let (status, _, bytes) = send(&router, request).await;
    assert_eq!(status, StatusCode::OK);
    let encoded: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(encoded["size"], 5);

    let request = Request::builder()
        .method("POST")
        .uri("/api/tools/base64/file/decode")
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "data": encoded["result"] }).to_string()))
        .unwrap();
    let (status, headers, bytes) = send(&router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, original);
    assert_eq!(headers[header::CONTENT_TYPE], "application/octet-stream");
    assert!(headers[header::CONTENT_DISPOSITION].to_str().unwrap().contains("decoded_file"));
}

#[tokio::test]
async fn palette_has_five_hex_swatches() {
    let (status, body) = json_request(
        &bare_router(),
        "POST",
        "/api/tools/palette",
        Some(json!({ "mode": "harmonious", "seed": "#3366cc" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let swatches = body["swatches"].as_array().unwrap();
    assert_eq!(swatches.len(), 5);
    for swatch in swatches {
        let hex = swatch["hex"].as_str().unwrap();
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[tokio::test]
async fn fully_locked_palette_is_unchanged() {
    let swatches: Vec<_> = ["#112233", "#445566", "#778899", "#aabbcc", "#ddeeff"]
        .iter()
        .map(|hex| json!({ "hex": hex, "locked": true }))
        .collect();
    let (status, body) = json_request(
        &bare_router(),
        "POST",
        "/api/tools/palette",
        Some(json!({ "mode": "random", "swatches": swatches })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let hexes: Vec<&str> = body["swatches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["hex"].as_str().unwrap())
        .collect();
    assert_eq!(hexes, ["#112233", "#445566", "#778899", "#aabbcc", "#ddeeff"]);
}

#[tokio::test]
async fn password_defaults_and_empty_charset() {
    let router = bare_router();
    let (status, body) = json_request(&router, "POST", "/api/tools/password", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["password"].as_str().unwrap().chars().count(), 16);
    assert_eq!(body["strength"]["score"], 8);
    assert_eq!(body["strength"]["band"], "strong");

    let none = json!({ "uppercase": false, "lowercase": false, "numbers": false, "symbols": false });
    let (status, body) = json_request(&router, "POST", "/api/tools/password", Some(none)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "empty_charset");
}

#[tokio::test]
async fn json_tools() {
    let router = bare_router();
    let (status, body) = json_request(
        &router,
        "POST",
        "/api/tools/json/format",
        Some(json!({ "input": "{\"a\":1,}", "indent": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "syntax");
    assert_eq!(body["line"], 1);

    let (status, body) = json_request(
        &router,
        "POST",
        "/api/tools/json/format",
        Some(json!({ "input": "{\"a\":1}", "indent": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "{\n    \"a\": 1\n}");

    let (status, body) = json_request(
        &router,
        "POST",
        "/api/tools/json/minify",
        Some(json!({ "input": "{ \"b\": [1, 2] }" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "{\"b\":[1,2]}");
}

#[tokio::test]
async fn qr_renders_or_suppresses() {
    let router = bare_router();
    let request = |payload: serde_json::Value| {
        Request::builder()
            .method("POST")
            .uri("/api/tools/qr")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    };

    let wifi = json!({
        "payload": { "kind": "wifi", "ssid": "Home", "password": "secret1", "encryption": "WPA" },
        "options": { "size": 200 }
    });
    let (status, headers, bytes) = send(&router, request(wifi)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/png");
    let image = image::load_from_memory(&bytes).unwrap();
    assert_eq!(image.width(), 200);

    let empty = json!({ "payload": { "kind": "wifi", "ssid": "", "password": "secret1" } });
    let (status, _, bytes) = send(&router, request(empty)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let svg = json!({ "payload": { "kind": "url", "url": "example.com" }, "options": { "format": "svg" } });
    let (status, headers, _) = send(&router, request(svg)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/svg+xml");
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/tools/json/minify")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _, bytes) = send(&bare_router(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let mut config = AppConfig::default();
    config.server.max_body_bytes = 1024;
    let router = router_with(config);

    let images = json!([{ "id": "1", "name": "big.png", "data": "A".repeat(4096) }]);
    let (status, body) =
        json_request(&router, "POST", "/api/tools/images/compress", Some(json!({ "images": images }))).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["code"], "payload_too_large");
}

// ── Image batches ────────────────────────────────────────────────────────────

#[tokio::test]
async fn image_batch_isolates_corrupt_files() {
    let images = json!([
        { "id": "1", "name": "one.png", "mimeType": "image/png", "data": BASE64.encode(encoded_image(64, 64, ImageFormat::Png)) },
        { "id": "2", "name": "bad.jpg", "mimeType": "image/jpeg", "data": BASE64.encode(corrupt_jpeg()) },
        { "id": "3", "name": "three.jpg", "mimeType": "image/jpeg", "data": BASE64.encode(encoded_image(64, 32, ImageFormat::Jpeg)) },
        { "id": "4", "name": "garbled.png", "data": "@@not base64@@" }
    ]);
    let (status, body) = json_request(
        &bare_router(),
        "POST",
        "/api/tools/images/compress",
        Some(json!({ "settings": { "quality": 60, "maxWidth": 32 }, "images": images })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let results = body["results"].as_array().unwrap();
    let statuses: Vec<&str> = results.iter().map(|r| r["status"].as_str().unwrap()).collect();
    assert_eq!(statuses, ["done", "error", "done", "error"]);

    assert_eq!(results[0]["originalWidth"], 64);
    assert_eq!(results[0]["width"], 32);
    assert_eq!(results[0]["downloadName"], "compressed_one.png");
    let png = BASE64.decode(results[0]["data"].as_str().unwrap()).unwrap();
    assert_eq!(image::guess_format(&png).unwrap(), ImageFormat::Png);
    assert_eq!(results[2]["height"], 16);
    assert!(results[1]["data"].is_null());
    assert!(results[3]["error"].as_str().unwrap().contains("Invalid Base64"));

    assert_eq!(body["summary"]["doneCount"], 2);
    assert_eq!(body["summary"]["errorCount"], 2);
}

// ── Upstream proxies ─────────────────────────────────────────────────────────

#[tokio::test]
async fn chat_validation_and_missing_provider() {
    let router = bare_router();
    let (status, body) = json_request(&router, "POST", "/api/ai/chat", Some(json!({ "messages": [] }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let assistant_last = json!({ "messages": [
        { "role": "user", "content": "hi" },
        { "role": "assistant", "content": "hello" }
    ]});
    let (status, _) = json_request(&router, "POST", "/api/ai/chat", Some(assistant_last)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let valid = json!({ "messages": [{ "role": "user", "content": "hi" }] });
    let (status, body) = json_request(&router, "POST", "/api/ai/chat", Some(valid)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "misconfigured");
}

#[tokio::test]
async fn image_prompt_validation() {
    let router = bare_router();
    let (status, _) = json_request(&router, "POST", "/api/ai/image", Some(json!({ "prompt": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let long = "x".repeat(1001);
    let (status, _) = json_request(&router, "POST", "/api/ai/image", Some(json!({ "prompt": long }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = json_request(&router, "POST", "/api/ai/image", Some(json!({ "prompt": "a cat" }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn suggest_falls_back_without_provider() {
    let router = bare_router();
    let (status, body) =
        json_request(&router, "POST", "/api/ai-suggest", Some(json!({ "projectType": "Mobile App" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["suggestion"].as_str().unwrap().contains("MVP"));

    let (status, _) = json_request(&router, "POST", "/api/ai-suggest", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_validation_and_missing_provider() {
    let router = bare_router();
    let incomplete = json!({ "name": "Ana", "email": "ana@example.com", "projectType": "Consulting" });
    let (status, _) = json_request(&router, "POST", "/api/contact", Some(incomplete)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let bad_email = json!({ "name": "Ana", "email": "ana-at-example", "projectType": "Consulting", "message": "hi" });
    let (status, body) = json_request(&router, "POST", "/api/contact", Some(bad_email)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "validation");

    let valid = json!({ "name": "Ana", "email": "ana@example.com", "projectType": "Consulting", "message": "hi" });
    let (status, _) = json_request(&router, "POST", "/api/contact", Some(valid)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn proxies_reach_configured_providers() {
    if !can_bind_localhost() {
        eprintln!("Skipping httpmock tests: cannot bind to localhost");
        return;
    }
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .json_body_partial(r#"{"max_tokens":2000}"#);
            then.status(200)
                .json_body(json!({ "choices": [{ "message": { "content": "Sure!" } }] }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .json_body_partial(r#"{"max_tokens":200}"#);
            then.status(429).json_body(json!({ "error": { "message": "slow down" } }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/images/generations");
            then.status(429).json_body(json!({ "error": { "message": "slow down" } }));
        })
        .await;
    let email = server
        .mock_async(|when, then| {
            when.method(POST).path("/emails");
            then.status(200).json_body(json!({ "id": "email-1" }));
        })
        .await;

    let mut openai = OpenAiConfig::new("sk-test");
    openai.base_url = server.url("/v1");
    let mut mail = EmailConfig::new("re-test");
    mail.base_url = server.base_url();
    let router = router_with(AppConfig {
        openai: Some(openai),
        email: Some(mail),
        ..Default::default()
    });

    let chat = json!({ "messages": [{ "role": "user", "content": "Can you help?" }] });
    let (status, body) = json_request(&router, "POST", "/api/ai/chat", Some(chat)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Sure!");

    let (status, body) = json_request(&router, "POST", "/api/ai/image", Some(json!({ "prompt": "a logo" }))).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], "rate_limited");

    // Upstream failure never reaches the caller
    let (status, body) =
        json_request(&router, "POST", "/api/ai-suggest", Some(json!({ "projectType": "Cybersecurity" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["suggestion"].as_str().unwrap().contains("MFA"));

    let contact = json!({ "name": "Ana", "email": "ana@example.com", "projectType": "Consulting", "message": "hi" });
    let (status, body) = json_request(&router, "POST", "/api/contact", Some(contact)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "Email sent" }));
    email.assert_async().await;
}

fn router_for(server: &MockServer) -> axum::Router {
    let mut openai = OpenAiConfig::new("sk-test");
    openai.base_url = server.url("/v1");
    let mut mail = EmailConfig::new("re-test");
    mail.base_url = server.base_url();
    router_with(AppConfig {
        openai: Some(openai),
        email: Some(mail),
        ..Default::default()
    })
}

const CONTACT: &str = r#"{"name":"Ana","email":"ana@example.com","projectType":"Consulting","message":"hi"}"#;

#[tokio::test]
async fn provider_refusals_are_server_errors_for_chat_and_contact() {
    if !can_bind_localhost() {
        eprintln!("Skipping httpmock tests: cannot bind to localhost");
        return;
    }
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(400)
                .json_body(json!({ "error": { "message": "context_length_exceeded" } }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/emails");
            then.status(400).json_body(json!({ "message": "invalid from address" }));
        })
        .await;
    let router = router_for(&server);

    let chat = json!({ "messages": [{ "role": "user", "content": "hi" }] });
    let (status, body) = json_request(&router, "POST", "/api/ai/chat", Some(chat)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "upstream_error");
    assert!(!body["error"].as_str().unwrap().contains("context_length_exceeded"));

    let contact: serde_json::Value = serde_json::from_str(CONTACT).unwrap();
    let (status, body) = json_request(&router, "POST", "/api/contact", Some(contact)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "delivery_failed");
}

#[tokio::test]
async fn rate_limited_delivery_is_a_server_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping httpmock tests: cannot bind to localhost");
        return;
    }
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/emails");
            then.status(429).json_body(json!({ "message": "slow down" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(500).body("server exploded");
        })
        .await;
    let router = router_for(&server);

    let contact: serde_json::Value = serde_json::from_str(CONTACT).unwrap();
    let (status, body) = json_request(&router, "POST", "/api/contact", Some(contact)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to send email", "code": "delivery_failed" }));

    let chat = json!({ "messages": [{ "role": "user", "content": "hi" }] });
    let (status, body) = json_request(&router, "POST", "/api/ai/chat", Some(chat)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["error"].as_str().unwrap().contains("server exploded"));
}
