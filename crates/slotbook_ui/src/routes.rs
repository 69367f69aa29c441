// --- File: crates/slotbook_ui/src/routes.rs ---

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use slotbook_common::SlotApi;
use slotbook_config::AppConfig;

use crate::handlers::{
    cancel_slot_handler, close_booking_handler, confirm_cancel_handler, customer_page_handler,
    dismiss_cancel_handler, manager_page_handler, request_cancel_handler, select_slot_handler,
    submit_booking_handler, UiState,
};
use crate::session::SessionStore;

/// Creates the router for the customer booking and sales manager pages.
/// All page state lives in sessions created by this router.
pub fn routes(config: Arc<AppConfig>, api: Arc<dyn SlotApi>) -> Router {
    let state = Arc::new(UiState {
        sessions: SessionStore::new(api, &config.session),
    });

    Router::new()
        .route("/", get(customer_page_handler))
        .route("/slots/{slot_id}/select", post(select_slot_handler))
        .route("/slots/{slot_id}/cancel", post(cancel_slot_handler))
        .route("/booking", post(submit_booking_handler))
        .route("/booking/close", post(close_booking_handler))
        .route("/manager", get(manager_page_handler))
        .route("/manager/slots/{slot_id}/cancel", post(request_cancel_handler))
        .route("/manager/confirm", post(confirm_cancel_handler))
        .route("/manager/dismiss", post(dismiss_cancel_handler))
        .with_state(state)
}
