//! Integration tests for live brief generation using wiremock HTTP mocks.

use briefgen_core::{CampaignRequest, Goal, LlmSettings, Platform, Tone};
use briefgen_llm::{BriefGenerator, LlmError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn live_generator(base_url: &str) -> BriefGenerator {
    let settings = LlmSettings {
        api_key: Some("test-key".to_string()),
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..LlmSettings::stub()
    };
    BriefGenerator::from_settings(&settings).expect("generator construction should not fail")
}

fn acme() -> CampaignRequest {
    CampaignRequest {
        brand_name: "Acme".to_string(),
        platform: Platform::TikTok,
        goal: Goal::Conversions,
        tone: Tone::Friendly,
    }
}

fn completion_with_arguments(arguments: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": {
                        "name": "generate_campaign_brief",
                        "arguments": arguments
                    }
                }]
            }
        }],
        "usage": { "prompt_tokens": 142, "completion_tokens": 231, "total_tokens": 373 }
    })
}

#[tokio::test]
async fn generate_returns_parsed_brief_and_token_counts() {
    let server = MockServer::start().await;
    let arguments = serde_json::json!({
        "brief": "Acme is launching on TikTok. It wants sales. Creators will help. Tone stays friendly.",
        "angles": ["Unboxing", "Day in the life", "Duet challenge"],
        "criteria": ["10k+ followers", "Friendly voice", "Proven conversions"]
    })
    .to_string();

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-4o-mini",
            "max_tokens": 800,
            "tool_choice": {
                "type": "function",
                "function": { "name": "generate_campaign_brief" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_with_arguments(&arguments)))
        .expect(1)
        .mount(&server)
        .await;

    let generated = live_generator(&server.uri())
        .generate(&acme())
        .await
        .expect("should parse brief");

    assert!(generated.brief.brief.starts_with("Acme is launching on TikTok."));
    assert_eq!(generated.brief.angles[1], "Day in the life");
    assert_eq!(generated.brief.criteria[2], "Proven conversions");
    assert_eq!(generated.metrics.tokens_in, 142);
    assert_eq!(generated.metrics.tokens_out, 231);
}

#[tokio::test]
async fn request_carries_system_and_user_prompts() {
    let server = MockServer::start().await;
    let arguments = r#"{"brief":"B.","angles":["a","b","c"],"criteria":["x","y","z"]}"#;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_with_arguments(arguments)))
        .mount(&server)
        .await;

    live_generator(&server.uri())
        .generate(&acme())
        .await
        .expect("should succeed");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).expect("json body");
    let messages = body["messages"].as_array().expect("messages array");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");
    let user = messages[1]["content"].as_str().expect("user content");
    assert!(user.contains("Create a campaign brief for Acme."));
    assert!(user.contains("Platform: TikTok"));
    assert!(user.contains("Goal: Conversions"));
    assert!(user.contains("Tone: Friendly"));
    assert_eq!(body["tools"][0]["function"]["name"], "generate_campaign_brief");
}

#[tokio::test]
async fn missing_usage_reports_zero_tokens() {
    let server = MockServer::start().await;
    let mut body = completion_with_arguments(
        r#"{"brief":"B.","angles":["a","b","c"],"criteria":["x","y","z"]}"#,
    );
    body.as_object_mut().expect("object").remove("usage");

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let generated = live_generator(&server.uri())
        .generate(&acme())
        .await
        .expect("should succeed without usage");
    assert_eq!(generated.metrics.tokens_in, 0);
    assert_eq!(generated.metrics.tokens_out, 0);
}

#[tokio::test]
async fn reply_without_tool_calls_is_no_tool_calls() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": "Here is a brief..." } }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let err = live_generator(&server.uri())
        .generate(&acme())
        .await
        .expect_err("no tool calls");
    assert!(matches!(err, LlmError::NoToolCalls), "got {err:?}");
    assert_eq!(err.to_string(), "No tool calls returned by API");
}

#[tokio::test]
async fn non_json_arguments_are_invalid() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_with_arguments("{\"brief\": \"cut off")),
        )
        .mount(&server)
        .await;

    let err = live_generator(&server.uri())
        .generate(&acme())
        .await
        .expect_err("invalid arguments");
    assert!(matches!(err, LlmError::InvalidArguments { .. }), "got {err:?}");
    assert_eq!(err.to_string(), "Invalid JSON response from API");
}

#[tokio::test]
async fn arguments_missing_keys_are_incomplete() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_with_arguments(r#"{"brief":"Only a brief."}"#)),
        )
        .mount(&server)
        .await;

    let err = live_generator(&server.uri())
        .generate(&acme())
        .await
        .expect_err("incomplete");
    assert!(matches!(err, LlmError::Incomplete { .. }), "got {err:?}");
    assert_eq!(err.to_string(), "Incomplete response from API");
}

#[tokio::test]
async fn unauthorized_surfaces_provider_message() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "error": {
            "message": "Incorrect API key provided: test-key.",
            "type": "invalid_request_error",
            "code": "invalid_api_key"
        }
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let err = live_generator(&server.uri())
        .generate(&acme())
        .await
        .expect_err("401 should fail");
    match err {
        LlmError::Api { status, ref message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided: test-key.");
        }
        ref other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(1)
        .mount(&server)
        .await;

    let err = live_generator(&server.uri())
        .generate(&acme())
        .await
        .expect_err("429 should fail");
    assert!(
        matches!(err, LlmError::Api { status: 429, .. }),
        "got {err:?}"
    );
    assert!(err.to_string().contains("slow down"));
}

#[tokio::test]
async fn garbage_envelope_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = live_generator(&server.uri())
        .generate(&acme())
        .await
        .expect_err("html should fail");
    assert!(matches!(err, LlmError::Deserialize { .. }), "got {err:?}");
}
