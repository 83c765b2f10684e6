use super::*;
use crate::state::test_helpers::{MockGenerator, test_app_state};

fn state() -> AppState {
    test_app_state(MockGenerator::replying("unused"))
}

#[test]
fn session_error_to_status_maps_not_found() {
    let err = SessionError::ProductNotFound("x".into());
    assert_eq!(session_error_to_status(err), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn navigate_switches_screen() {
    let state = state();
    let Json(snap) = navigate(State(state.clone()), Json(NavigateBody { screen: "vendorHome".into() }))
        .await
        .unwrap();
    assert_eq!(snap.screen, Screen::VendorHome);
    assert_eq!(state.session.lock().await.screen(), Screen::VendorHome);
}

#[tokio::test]
async fn navigate_unknown_screen_is_bad_request() {
    let state = state();
    let err = navigate(State(state.clone()), Json(NavigateBody { screen: "cart".into() }))
        .await
        .unwrap_err();
    assert_eq!(err, StatusCode::BAD_REQUEST);
    assert_eq!(state.session.lock().await.screen(), Screen::Login);
}

#[tokio::test]
async fn select_product_opens_detail() {
    let state = state();
    let Json(snap) = select_product(State(state), Path("2".into())).await.unwrap();
    assert_eq!(snap.screen, Screen::ProductDetail);
    assert_eq!(snap.selected_product.unwrap().id, "2");
}

#[tokio::test]
async fn select_unknown_product_is_not_found() {
    let err = select_product(State(state()), Path("42".into()))
        .await
        .unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_product_found_and_missing() {
    let Json(product) = get_product(Path("3".into())).await.unwrap();
    assert_eq!(product.name, "Pan de Molde Integral");
    assert_eq!(get_product(Path("0".into())).await.unwrap_err(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_products_returns_catalog() {
    let Json(products) = list_products().await;
    assert_eq!(products.len(), 4);
}

#[tokio::test]
async fn page_renders_active_screen() {
    let state = state();
    state.session.lock().await.navigate(Screen::ConsumerHome);
    let Html(html) = page(State(state)).await;
    assert!(html.contains("data-screen=\"consumerHome\""));
    assert!(!html.contains("data-screen=\"login\""));
}

#[tokio::test]
async fn back_and_forward_follow_literal_targets() {
    let state = state();
    let Json(snap) = forward(State(state.clone())).await;
    assert_eq!(snap.screen, Screen::VendorHome);
    let Json(snap) = back(State(state)).await;
    assert_eq!(snap.screen, Screen::Login);
}

#[tokio::test]
async fn scroll_then_navigate_resets_offset() {
    let state = state();
    let Json(snap) = scroll(State(state.clone()), Json(ScrollBody { offset: 480 })).await;
    assert_eq!(snap.scroll_top, 480);
    let Json(snap) = navigate(State(state), Json(NavigateBody { screen: "checkout".into() }))
        .await
        .unwrap();
    assert_eq!(snap.scroll_top, 0);
}

#[tokio::test]
async fn draft_flow() {
    let state = state();
    let patch = DraftPatch { name: Some("Croissants".into()), stock: Some(-3), ..DraftPatch::default() };
    let Json(draft) = patch_draft(State(state.clone()), Json(patch)).await;
    assert_eq!(draft.name, "Croissants");
    assert_eq!(draft.stock, 0);

    let Json(draft) = decrement_stock(State(state.clone())).await;
    assert_eq!(draft.stock, 0);
    let Json(draft) = increment_stock(State(state.clone())).await;
    assert_eq!(draft.stock, 1);

    let Json(snap) = publish_draft(State(state.clone())).await;
    assert_eq!(snap.screen, Screen::VendorHome);
    let Json(draft) = get_draft(State(state)).await;
    assert_eq!(draft, DraftProduct::default());
}

#[tokio::test]
async fn get_state_reports_snapshot() {
    let state = state();
    state.session.lock().await.select_product_by_id("1").unwrap();
    let Json(snap) = get_state(State(state)).await;
    assert_eq!(snap.screen, Screen::ProductDetail);
    assert!(!snap.assistant_open);
}
