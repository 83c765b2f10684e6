use super::*;
use crate::catalog::find_product;

// =========================================================================
// build_context
// =========================================================================

#[test]
fn script_context_on_login_mentions_vendor_login() {
    let context = build_context(Screen::Login, None, AssistKind::Script);
    assert!(context.starts_with("Current Screen: login. "));
    assert!(context.contains("Vendor login screen"));
    assert!(!context.contains("Heuristic Evaluation"));
}

#[test]
fn analyze_context_requests_three_improvements() {
    let context = build_context(Screen::Checkout, None, AssistKind::Analyze);
    assert!(context.contains("Checkout screen"));
    assert!(context.contains("Heuristic Evaluation"));
    assert!(context.contains("suggest 3 improvements"));
}

#[test]
fn product_detail_context_embeds_selected_product() {
    let product = find_product("4").unwrap();
    let context = build_context(Screen::ProductDetail, Some(product), AssistKind::Script);
    assert!(context.contains("Product detail for Pan Artesanal de Masa Madre"));
    assert!(context.contains("price 2.5, original 5, "));
    assert!(context.contains("expiry 25 Oct 2024, 20:00h"));
}

#[test]
fn product_detail_context_prints_prices_without_padding() {
    let product = find_product("1").unwrap();
    let context = build_context(Screen::ProductDetail, Some(product), AssistKind::Script);
    assert!(context.contains("price 2, original 4.5, "));
    assert!(!context.contains("2.00"));
}

#[test]
fn product_detail_context_without_selection_falls_back_to_description() {
    let context = build_context(Screen::ProductDetail, None, AssistKind::Script);
    assert!(context.contains(Screen::ProductDetail.description()));
}

#[test]
fn every_screen_builds_a_context() {
    for screen in Screen::ALL {
        let context = build_context(screen, None, AssistKind::Script);
        assert!(context.contains(screen.slug()));
        assert!(context.len() > "Current Screen: . ".len() + screen.slug().len());
    }
}

// =========================================================================
// prompts
// =========================================================================

#[test]
fn script_prompt_wraps_context() {
    let prompt = build_script_prompt("Current Screen: login.");
    assert!(prompt.contains("Screen Description/Flow: Current Screen: login."));
    assert!(prompt.contains("User Testing Script (3-5 questions)"));
    assert!(prompt.contains("Format: Markdown."));
}

#[test]
fn screenshot_prompt_asks_for_three_improvements() {
    let prompt = build_screenshot_prompt("checkout form");
    assert!(prompt.contains("Description provided: checkout form."));
    assert!(prompt.contains("3 specific heuristic improvements"));
}

#[test]
fn strip_data_url_removes_header() {
    assert_eq!(strip_data_url("data:image/png;base64,AAAA"), "AAAA");
}

#[test]
fn strip_data_url_keeps_raw_payload() {
    assert_eq!(strip_data_url("AAAA"), "AAAA");
}

// =========================================================================
// AssistantState / AssistError
// =========================================================================

#[test]
fn assistant_state_default_is_idle_and_empty() {
    let state = AssistantState::default();
    assert_eq!(state, AssistantState::Idle);
    assert_eq!(state.output(), "");
}

#[test]
fn assistant_state_serializes_with_status_tag() {
    let json = serde_json::to_value(AssistantState::Resolved { text: "hi".into() }).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "resolved", "text": "hi" }));
    let json = serde_json::to_value(AssistantState::Pending).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "pending" }));
}

#[test]
fn missing_credential_message_names_api_key() {
    assert!(AssistError::MissingCredential.user_message().contains("API Key not found"));
    assert!(AssistError::MissingCredential.screenshot_message().contains("API Key not found"));
}

#[test]
fn provider_and_empty_share_script_message() {
    let provider = AssistError::Provider(LlmError::ApiRequest("boom".into()));
    assert_eq!(provider.user_message(), GENERATION_FAILED_MESSAGE);
    assert_eq!(AssistError::EmptyResponse.user_message(), GENERATION_FAILED_MESSAGE);
}

#[test]
fn screenshot_messages_distinguish_empty() {
    let provider = AssistError::Provider(LlmError::ApiParse("bad".into()));
    assert_eq!(provider.screenshot_message(), SCREENSHOT_FAILED_MESSAGE);
    assert_eq!(AssistError::EmptyResponse.screenshot_message(), SCREENSHOT_EMPTY_MESSAGE);
}

#[test]
fn error_codes_are_stable() {
    assert_eq!(AssistError::MissingCredential.error_code(), "E_MISSING_CREDENTIAL");
    assert_eq!(AssistError::EmptyResponse.error_code(), "E_EMPTY_RESPONSE");
    assert_eq!(AssistError::Provider(LlmError::ApiResponse { status: 500, body: String::new() }).error_code(), "E_API_RESPONSE");
}
