use super::*;
use std::collections::HashMap;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_to_gemini() {
    let cfg = LlmConfig::from_vars(vars(&[])).unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::Gemini);
    assert_eq!(cfg.model, "gemini-2.5-flash");
    assert_eq!(cfg.api_key_env, DEFAULT_API_KEY_ENV);
    assert_eq!(cfg.base_url, DEFAULT_GEMINI_BASE_URL);
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: None, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS });
}

#[test]
fn parses_anthropic_overrides() {
    let cfg = LlmConfig::from_vars(vars(&[
        ("LLM_PROVIDER", "anthropic"),
        ("LLM_API_KEY_ENV", "ANTHROPIC_API_KEY"),
        ("LLM_BASE_URL", "https://example.test/v1/"),
        ("LLM_REQUEST_TIMEOUT_SECS", "42"),
        ("LLM_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::Anthropic);
    assert_eq!(cfg.model, "claude-sonnet-4-5-20250929");
    assert_eq!(cfg.api_key_env, "ANTHROPIC_API_KEY");
    assert_eq!(cfg.base_url, "https://example.test/v1");
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: Some(42), connect_secs: 7 });
}

#[test]
fn model_override_wins() {
    let cfg = LlmConfig::from_vars(vars(&[("LLM_MODEL", "gemini-2.0-flash")])).unwrap();
    assert_eq!(cfg.model, "gemini-2.0-flash");
}

#[test]
fn unknown_provider_errors() {
    let err = LlmConfig::from_vars(vars(&[("LLM_PROVIDER", "bad")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("unknown LLM_PROVIDER"));
}

#[test]
fn non_numeric_timeout_errors() {
    let err = LlmConfig::from_vars(vars(&[("LLM_REQUEST_TIMEOUT_SECS", "soon")])).unwrap_err();
    assert!(matches!(err, LlmError::ConfigParse(ref msg) if msg.contains("LLM_REQUEST_TIMEOUT_SECS")));
}
