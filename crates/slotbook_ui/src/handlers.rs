// --- File: crates/slotbook_ui/src/handlers.rs ---
use std::sync::Arc;

use axum::{
    extract::{Form, Path, Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::format::parse_iso_date;
use crate::pages::{customer, manager};
use crate::session::{with_cookie, SessionStore};
use crate::shell::{layout, Page};

// Shared state for the page handlers
pub struct UiState {
    pub sessions: SessionStore,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub name: String,
}

fn back_to(page: Page) -> Redirect {
    Redirect::to(page.path())
}

/// `GET /?date=YYYY-MM-DD`. Mounts the customer page on arrival. An explicit
/// date always re-selects that day; a plain reload re-fetches unless it is the
/// redirect after a form action. Unparseable dates are ignored.
#[axum::debug_handler]
pub async fn customer_page_handler(
    State(state): State<Arc<UiState>>,
    headers: HeaderMap,
    Query(query): Query<DateQuery>,
) -> Response {
    let (session, cookie) = state.sessions.resolve(&headers).await;
    let requested = query.date.as_deref().and_then(parse_iso_date);

    let (page, mounted) = session
        .open_customer(requested.unwrap_or_else(|| Utc::now().date_naive()))
        .await;
    let redirected = session.take_acted();
    if mounted {
        page.refresh().await;
    } else if let Some(date) = requested {
        page.select_date(date).await;
    } else if !redirected {
        page.refresh().await;
    }

    let body = customer::render(&page.snapshot().await);
    with_cookie(
        Html(layout(Page::Booking, "Book an Appointment", &body)).into_response(),
        cookie,
    )
}

/// `POST /slots/{slot_id}/select`
pub async fn select_slot_handler(
    State(state): State<Arc<UiState>>,
    headers: HeaderMap,
    Path(slot_id): Path<String>,
) -> Response {
    let (session, cookie) = state.sessions.resolve(&headers).await;
    session.mark_acted();
    if let Some(page) = session.customer().await {
        page.select_slot(&slot_id).await;
    }
    with_cookie(back_to(Page::Booking).into_response(), cookie)
}

/// `POST /booking/close`
pub async fn close_booking_handler(
    State(state): State<Arc<UiState>>,
    headers: HeaderMap,
) -> Response {
    let (session, cookie) = state.sessions.resolve(&headers).await;
    session.mark_acted();
    if let Some(page) = session.customer().await {
        page.close_dialog().await;
    }
    with_cookie(back_to(Page::Booking).into_response(), cookie)
}

/// `POST /booking` with form field `name`
#[axum::debug_handler]
pub async fn submit_booking_handler(
    State(state): State<Arc<UiState>>,
    headers: HeaderMap,
    Form(form): Form<BookingForm>,
) -> Response {
    let (session, cookie) = state.sessions.resolve(&headers).await;
    session.mark_acted();
    if let Some(page) = session.customer().await {
        let outcome = page.submit_booking(&form.name).await;
        debug!("Booking submission: {:?}", outcome);
    }
    with_cookie(back_to(Page::Booking).into_response(), cookie)
}

/// `POST /slots/{slot_id}/cancel`
pub async fn cancel_slot_handler(
    State(state): State<Arc<UiState>>,
    headers: HeaderMap,
    Path(slot_id): Path<String>,
) -> Response {
    let (session, cookie) = state.sessions.resolve(&headers).await;
    session.mark_acted();
    if let Some(page) = session.customer().await {
        let outcome = page.cancel_booking(&slot_id).await;
        debug!("Cancel of slot {}: {:?}", slot_id, outcome);
    }
    with_cookie(back_to(Page::Booking).into_response(), cookie)
}

/// `GET /manager` mounts the manager page, or reloads it unless this is the
/// redirect after a form action.
#[axum::debug_handler]
pub async fn manager_page_handler(
    State(state): State<Arc<UiState>>,
    headers: HeaderMap,
) -> Response {
    let (session, cookie) = state.sessions.resolve(&headers).await;
    let redirected = session.take_acted();
    let (page, mounted) = session.open_manager().await;
    if mounted || !redirected {
        page.load().await;
    }

    let body = manager::render(&page.snapshot().await);
    with_cookie(
        Html(layout(Page::Manager, "Booked Appointments", &body)).into_response(),
        cookie,
    )
}

/// `POST /manager/slots/{slot_id}/cancel` opens the confirmation dialog.
pub async fn request_cancel_handler(
    State(state): State<Arc<UiState>>,
    headers: HeaderMap,
    Path(slot_id): Path<String>,
) -> Response {
    let (session, cookie) = state.sessions.resolve(&headers).await;
    session.mark_acted();
    if let Some(page) = session.manager().await {
        page.request_cancel(&slot_id).await;
    }
    with_cookie(back_to(Page::Manager).into_response(), cookie)
}

/// `POST /manager/confirm`
pub async fn confirm_cancel_handler(
    State(state): State<Arc<UiState>>,
    headers: HeaderMap,
) -> Response {
    let (session, cookie) = state.sessions.resolve(&headers).await;
    session.mark_acted();
    if let Some(page) = session.manager().await {
        let outcome = page.confirm_cancel().await;
        debug!("Manager cancel confirmation: {:?}", outcome);
    }
    with_cookie(back_to(Page::Manager).into_response(), cookie)
}

/// `POST /manager/dismiss`
pub async fn dismiss_cancel_handler(
    State(state): State<Arc<UiState>>,
    headers: HeaderMap,
) -> Response {
    let (session, cookie) = state.sessions.resolve(&headers).await;
    session.mark_acted();
    if let Some(page) = session.manager().await {
        page.dismiss_cancel().await;
    }
    with_cookie(back_to(Page::Manager).into_response(), cookie)
}
