use std::sync::Arc;

use super::*;
use crate::assistant::{API_KEY_MISSING_MESSAGE, GENERATION_FAILED_MESSAGE, SCREENSHOT_FAILED_MESSAGE};
use crate::screen::Screen;
use crate::state::test_helpers::{GatedGenerator, MockGenerator, test_app_state, test_app_state_without_key};

// =========================================================================
// request_assistance
// =========================================================================

#[tokio::test]
async fn script_on_login_sends_login_context() {
    let mock = MockGenerator::replying("1. Was the login clear?");
    let state = test_app_state(mock.clone());

    let result = request_assistance(&state, AssistKind::Script).await;

    assert_eq!(result, AssistantState::Resolved { text: "1. Was the login clear?".into() });
    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].prompt.contains("Vendor login screen"));
    assert_eq!(requests[0].system.as_deref(), Some(UX_RESEARCHER_INSTRUCTION));
    assert_eq!(requests[0].temperature, Some(SCRIPT_TEMPERATURE));
    assert!(requests[0].image.is_none());
}

#[tokio::test]
async fn analyze_asks_for_three_improvements() {
    let mock = MockGenerator::replying("improvements");
    let state = test_app_state(mock.clone());
    state.session.lock().await.navigate(Screen::Payment);

    request_assistance(&state, AssistKind::Analyze).await;

    let prompt = &mock.requests()[0].prompt;
    assert!(prompt.contains("Heuristic Evaluation"));
    assert!(prompt.contains("suggest 3 improvements"));
}

#[tokio::test]
async fn product_detail_context_reaches_generator() {
    let mock = MockGenerator::replying("ok");
    let state = test_app_state(mock.clone());
    state.session.lock().await.select_product_by_id("1").unwrap();

    request_assistance(&state, AssistKind::Script).await;

    let prompt = &mock.requests()[0].prompt;
    assert!(prompt.contains("Product detail for Yogurt Griego Natural"));
    assert!(prompt.contains("expiry Vence en 18 horas"));
}

#[tokio::test]
async fn missing_key_skips_outbound_call() {
    for kind in [AssistKind::Script, AssistKind::Analyze] {
        let mock = MockGenerator::replying("never");
        let state = test_app_state_without_key(mock.clone());

        let result = request_assistance(&state, kind).await;

        assert_eq!(result.output(), API_KEY_MISSING_MESSAGE);
        assert!(result.output().contains("API Key not found"));
        assert!(mock.requests().is_empty());
    }
}

#[tokio::test]
async fn provider_failure_resolves_to_error_text() {
    let state = test_app_state(MockGenerator::failing());
    state.session.lock().await.navigate(Screen::ConsumerHome);

    let result = request_assistance(&state, AssistKind::Script).await;

    assert_eq!(result, AssistantState::Resolved { text: GENERATION_FAILED_MESSAGE.into() });
    // The controller keeps working afterwards.
    let mut session = state.session.lock().await;
    session.navigate(Screen::Login);
    assert_eq!(session.screen(), Screen::Login);
}

#[tokio::test]
async fn empty_response_resolves_to_error_text() {
    let state = test_app_state(MockGenerator::replying("   "));
    let result = request_assistance(&state, AssistKind::Analyze).await;
    assert_eq!(result.output(), GENERATION_FAILED_MESSAGE);
}

#[tokio::test]
async fn new_request_clears_previous_output() {
    let gate = Arc::new(tokio::sync::Notify::new());
    let state = test_app_state(Arc::new(GatedGenerator { gate: gate.clone(), text: "second".into() }));
    state.session.lock().await.resolve_assist(0, "first".into());

    let task = tokio::spawn({
        let state = state.clone();
        async move { request_assistance(&state, AssistKind::Script).await }
    });
    while !matches!(state.session.lock().await.assistant(), AssistantState::Pending) {
        tokio::task::yield_now().await;
    }
    assert_eq!(state.session.lock().await.assistant().output(), "");

    gate.notify_one();
    let result = task.await.unwrap();
    assert_eq!(result.output(), "second");
}

// =========================================================================
// reset_assistant
// =========================================================================

#[tokio::test]
async fn reset_after_resolution_returns_to_idle() {
    let state = test_app_state(MockGenerator::replying("script"));
    request_assistance(&state, AssistKind::Script).await;

    let result = reset_assistant(&state).await;

    assert_eq!(result, AssistantState::Idle);
    assert_eq!(state.session.lock().await.assistant().output(), "");
}

#[tokio::test]
async fn reset_while_pending_discards_late_response() {
    let gate = Arc::new(tokio::sync::Notify::new());
    let state = test_app_state(Arc::new(GatedGenerator { gate: gate.clone(), text: "late".into() }));

    let task = tokio::spawn({
        let state = state.clone();
        async move { request_assistance(&state, AssistKind::Script).await }
    });
    while !matches!(state.session.lock().await.assistant(), AssistantState::Pending) {
        tokio::task::yield_now().await;
    }

    reset_assistant(&state).await;
    gate.notify_one();
    let result = task.await.unwrap();

    assert_eq!(result, AssistantState::Idle);
}

// =========================================================================
// analyze_screenshot
// =========================================================================

#[tokio::test]
async fn screenshot_sends_stripped_image() {
    let mock = MockGenerator::replying("1. bigger buttons");
    let state = test_app_state(mock.clone());

    let text = analyze_screenshot(&state, "data:image/png;base64,QUJD", "payment form").await;

    assert_eq!(text, "1. bigger buttons");
    let request = &mock.requests()[0];
    let image = request.image.as_ref().unwrap();
    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.data, "QUJD");
    assert!(request.prompt.contains("Description provided: payment form."));
    assert_eq!(state.session.lock().await.assistant(), &AssistantState::Idle);
}

#[tokio::test]
async fn screenshot_failure_text() {
    let state = test_app_state(MockGenerator::failing());
    let text = analyze_screenshot(&state, "QUJD", "x").await;
    assert_eq!(text, SCREENSHOT_FAILED_MESSAGE);
}

#[tokio::test]
async fn screenshot_without_key_skips_call() {
    let mock = MockGenerator::replying("never");
    let state = test_app_state_without_key(mock.clone());
    let text = analyze_screenshot(&state, "QUJD", "x").await;
    assert_eq!(text, API_KEY_MISSING_MESSAGE);
    assert!(mock.requests().is_empty());
}
