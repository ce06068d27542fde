use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use diet_planner_rs::config::SuggestionConfig;
use diet_planner_rs::models::Macros;
use diet_planner_rs::suggestions::{
    DeepSeekClient, FALLBACK_MESSAGE, MealSuggester, SYSTEM_PROMPT, SuggestionError,
    SuggestionFilters, SuggestionRequest, fetch_or_fallback,
};

fn test_client(server: &MockServer) -> DeepSeekClient {
    let mut config = SuggestionConfig::new("sk-test");
    config.base_url = format!("{}/v1", server.uri());
    config.timeout = Duration::from_secs(5);
    DeepSeekClient::new(config).unwrap()
}

fn sample_request() -> SuggestionRequest {
    SuggestionRequest {
        daily_calories: 2128,
        macros: Macros {
            protein: 154,
            carbs: 213,
            fat: 71,
        },
        filters: SuggestionFilters {
            allergies: vec!["peanuts".to_string()],
            ..Default::default()
        },
    }
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "deepseek-chat",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_suggest_returns_first_choice_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "deepseek-chat",
            "messages": [{"role": "system", "content": SYSTEM_PROMPT}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Breakfast: oats")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let text = client.suggest(&sample_request()).await.unwrap();
    assert_eq!(text, "Breakfast: oats");
}

#[tokio::test]
async fn test_request_carries_plan_and_filters() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client.suggest(&sample_request()).await.unwrap();

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert_eq!(body["messages"][1]["role"], "user");
    assert!(user.contains("with 2128 calories"));
    assert!(user.contains("Protein 154g, Carbs 213g, Fat 71g"));
    assert!(user.contains("Exclude: peanuts."));
}

#[tokio::test]
async fn test_service_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Authentication Fails", "type": "authentication_error"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.suggest(&sample_request()).await.unwrap_err();
    match err {
        SuggestionError::Status { status, message } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(message, "Authentication Fails");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.suggest(&sample_request()).await.unwrap_err();
    assert!(matches!(err, SuggestionError::Parse(_)));
}

#[tokio::test]
async fn test_empty_choices_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.suggest(&sample_request()).await.unwrap_err();
    assert!(matches!(err, SuggestionError::EmptyResponse));
}

#[tokio::test]
async fn test_fallback_on_server_error_single_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let text = fetch_or_fallback(&client, &sample_request()).await;
    assert_eq!(text, FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_fallback_on_connection_failure() {
    let mut config = SuggestionConfig::new("sk-test");
    // Nothing listens on the discard port.
    config.base_url = "http://127.0.0.1:9/v1".to_string();
    config.timeout = Duration::from_secs(2);
    let client = DeepSeekClient::new(config).unwrap();

    let text = fetch_or_fallback(&client, &sample_request()).await;
    assert_eq!(text, FALLBACK_MESSAGE);
}
