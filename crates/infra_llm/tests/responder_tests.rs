//! Responder behaviour against an unreachable backend

use std::net::TcpListener;
use std::time::Duration;

use core_kernel::{LanguageModel, PortError, Prompt};
use infra_llm::{build_responder, ChatClient, LlmConfig, LlmError, OpenAiResponder};
use proptest::prelude::*;

fn unreachable_config() -> LlmConfig {
    LlmConfig::default()
        .with_api_key("sk-test")
        .with_base_url("http://127.0.0.1:9/v1")
        .with_request_timeout(Duration::from_secs(2))
}

#[test]
fn test_unreachable_backend_falls_back_to_placeholder() {
    let responder = build_responder(&unreachable_config());
    let answer = responder.respond(&Prompt::new("Summarize the claim"));

    assert!(answer.starts_with("[LLM unavailable"));
    assert!(answer.contains("Summarize the claim"));
}

#[test]
fn test_unreachable_backend_surfaces_connection_error() {
    let client = ChatClient::new(&unreachable_config()).unwrap();
    let responder = OpenAiResponder::new(client);

    let err = responder.try_respond(&Prompt::new("hi")).unwrap_err();
    assert!(matches!(err, PortError::Connection { .. }));
}

#[test]
fn test_silent_backend_surfaces_timeout() {
    // Connections complete through the listen backlog but never get an answer
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let config = LlmConfig::default()
        .with_api_key("sk-test")
        .with_base_url(format!("http://{}/v1", addr))
        .with_request_timeout(Duration::from_millis(300));
    let responder = OpenAiResponder::new(ChatClient::new(&config).unwrap());

    let err = responder.try_respond(&Prompt::new("hi")).unwrap_err();

    assert!(
        matches!(err, PortError::Timeout { duration_ms: 300, .. }),
        "expected timeout, got {:?}",
        err
    );
    assert!(err.is_transient());
    drop(listener);
}

#[test]
fn test_silent_backend_answers_with_placeholder() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let config = LlmConfig::default()
        .with_api_key("sk-test")
        .with_base_url(format!("http://{}/v1", listener.local_addr().unwrap()))
        .with_request_timeout(Duration::from_millis(300));

    let answer = build_responder(&config).respond(&Prompt::new("Summarize the claim"));

    assert!(answer.starts_with("[LLM unavailable"));
    drop(listener);
}

#[test]
fn test_client_requires_key() {
    let err = ChatClient::new(&LlmConfig::default()).unwrap_err();
    assert!(matches!(err, LlmError::Config(_)));
}

#[test]
fn test_client_debug_hides_key() {
    let client = ChatClient::new(&unreachable_config()).unwrap();
    assert!(!format!("{:?}", client).contains("sk-test"));
}

#[test]
fn test_error_mapping() {
    let unauthorized: PortError = LlmError::Api { status: 401, message: "bad key".into() }.into();
    assert!(matches!(unauthorized, PortError::Unauthorized { .. }));

    let server: PortError = LlmError::Api { status: 500, message: "boom".into() }.into();
    assert!(matches!(server, PortError::Internal { .. }));

    let parse: PortError = LlmError::Parse("no choices".into()).into();
    assert!(matches!(parse, PortError::Transformation { .. }));

    let timeout: PortError = LlmError::Timeout { duration_ms: 60_000 }.into();
    assert!(matches!(timeout, PortError::Timeout { duration_ms: 60_000, .. }));

    let config: PortError = LlmError::Config("no key".into()).into();
    assert!(matches!(config, PortError::Disabled { .. }));
}

proptest! {
    #[test]
    fn placeholder_never_exceeds_prompt_head(user in ".{0,400}") {
        let responder = build_responder(&LlmConfig::default());
        let answer = responder.respond(&Prompt::new(user.clone()));
        let head: String = user.chars().take(200).collect();
        prop_assert!(answer.starts_with("[LLM disabled] Would have answered based on: "));
        let expected_tail = format!("{:?}", head);
        prop_assert!(answer.ends_with(&expected_tail));
    }
}
