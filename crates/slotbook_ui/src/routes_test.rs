// --- File: crates/slotbook_ui/src/routes_test.rs ---
#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use slotbook_common::{ApiError, Slot, SlotApi};
    use slotbook_config::{ApiConfig, AppConfig, LoggingConfig, ServerConfig, SessionConfig};
    use tower::ServiceExt;

    use crate::routes::routes;
    use crate::test_support::{at, FakeSlotApi};

    fn config() -> Arc<AppConfig> {
        Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            api: ApiConfig {
                base_url: "http://localhost:5000/api".to_string(),
                timeout_secs: 30,
            },
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
        })
    }

    fn app() -> (Router, Arc<FakeSlotApi>) {
        let api = Arc::new(FakeSlotApi::with_slots(vec![
            Slot::available("1", at(5, 9, 0)),
            Slot::booked("2", at(5, 9, 30), "Grace"),
            Slot::available("3", at(5, 10, 15)),
        ]));
        (routes(config(), api.clone()), api)
    }

    async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> (StatusCode, Option<String>, String) {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let response = app
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .map(|v| v.to_str().unwrap().split(';').next().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, set_cookie, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn post(app: &Router, uri: &str, cookie: &str, form: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::COOKIE, cookie)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        (response.status(), location)
    }

    #[tokio::test]
    async fn test_customer_page_sets_session_cookie_and_lists_slots() {
        let (app, _) = app();
        let (status, cookie, body) = get(&app, "/?date=2024-03-05", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(cookie.unwrap().starts_with("slotbook_session="));
        assert!(body.contains("Book an Appointment"));
        assert!(body.contains("9:00 AM"));
        assert!(body.contains("Booked by: Grace"));
        assert!(body.contains(r#"aria-current="page">Book Appointment"#));
    }

    #[tokio::test]
    async fn test_booking_flow_over_http() {
        let (app, api) = app();
        let (_, cookie, _) = get(&app, "/?date=2024-03-05", None).await;
        let cookie = cookie.unwrap();

        let (status, location) = post(&app, "/slots/1/select", &cookie, "").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "/");
        let (_, _, body) = get(&app, "/", Some(&cookie)).await;
        assert!(body.contains("Confirm Booking"));

        post(&app, "/booking", &cookie, "name=").await;
        let (_, _, body) = get(&app, "/", Some(&cookie)).await;
        assert!(body.contains("Please enter your name"));
        assert_eq!(FakeSlotApi::calls(&api.book_slot_calls), 0);

        let (status, _) = post(&app, "/booking", &cookie, "name=Ada+Lovelace").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        let (_, _, body) = get(&app, "/", Some(&cookie)).await;
        assert!(!body.contains("Confirm Booking"));
        assert!(body.contains("Booked by: Ada Lovelace"));
        assert_eq!(
            api.slot("1").unwrap().booked_customer_name.as_deref(),
            Some("Ada Lovelace")
        );
    }

    #[tokio::test]
    async fn test_error_banner_after_failed_cancel() {
        let (app, api) = app();
        let (_, cookie, _) = get(&app, "/?date=2024-03-05", None).await;
        let cookie = cookie.unwrap();
        api.fail("cancel_booking", ApiError::Transport("reset".into()));

        post(&app, "/slots/2/cancel", &cookie, "").await;
        let (_, _, body) = get(&app, "/", Some(&cookie)).await;

        assert!(body.contains("Failed to cancel booking. Please try again later."));
        assert!(body.contains("Booked by: Grace"));
    }

    #[tokio::test]
    async fn test_manager_cancel_flow() {
        let (app, api) = app();
        let (status, cookie, body) = get(&app, "/manager", None).await;
        let cookie = cookie.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Grace"));

        let (status, location) = post(&app, "/manager/slots/2/cancel", &cookie, "").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "/manager");
        let (_, _, body) = get(&app, "/manager", Some(&cookie)).await;
        assert!(body.contains("Are you sure you want to cancel this appointment?"));

        post(&app, "/manager/confirm", &cookie, "").await;
        let (_, _, body) = get(&app, "/manager", Some(&cookie)).await;
        assert!(body.contains("No booked appointments"));
        assert!(!body.contains("Are you sure"));
        assert!(!api.slot("2").unwrap().is_booked);
    }

    #[tokio::test]
    async fn test_navigating_back_remounts_page() {
        let (app, api) = app();
        let (_, cookie, _) = get(&app, "/?date=2024-03-05", None).await;
        let cookie = cookie.unwrap();
        post(&app, "/slots/1/select", &cookie, "").await;
        let (_, _, body) = get(&app, "/", Some(&cookie)).await;
        assert!(body.contains("Confirm Booking"));
        assert_eq!(FakeSlotApi::calls(&api.slots_for_date_calls), 1);

        get(&app, "/manager", Some(&cookie)).await;
        let (_, _, body) = get(&app, "/?date=2024-03-05", Some(&cookie)).await;
        assert!(!body.contains("Confirm Booking"));
        assert_eq!(FakeSlotApi::calls(&api.slots_for_date_calls), 2);
    }

    #[tokio::test]
    async fn test_reload_shows_bookings_made_elsewhere() {
        let (app, api) = app();
        let (_, cookie, _) = get(&app, "/?date=2024-03-05", None).await;
        let cookie = cookie.unwrap();

        api.book_slot("1", "Linus").await.unwrap();
        let (_, _, body) = get(&app, "/", Some(&cookie)).await;

        assert!(body.contains("Booked by: Linus"));
        assert_eq!(FakeSlotApi::calls(&api.slots_for_date_calls), 2);
    }

    #[tokio::test]
    async fn test_picking_the_same_date_refetches() {
        let (app, api) = app();
        let (_, cookie, _) = get(&app, "/?date=2024-03-05", None).await;
        let cookie = cookie.unwrap();

        api.book_slot("3", "Linus").await.unwrap();
        let (_, _, body) = get(&app, "/?date=2024-03-05", Some(&cookie)).await;

        assert!(body.contains("Booked by: Linus"));
        assert_eq!(FakeSlotApi::calls(&api.slots_for_date_calls), 2);
    }

    #[tokio::test]
    async fn test_only_the_redirect_after_an_action_skips_the_fetch() {
        let (app, api) = app();
        let (_, cookie, _) = get(&app, "/?date=2024-03-05", None).await;
        let cookie = cookie.unwrap();

        post(&app, "/booking/close", &cookie, "").await;
        get(&app, "/", Some(&cookie)).await;
        assert_eq!(FakeSlotApi::calls(&api.slots_for_date_calls), 1);

        get(&app, "/", Some(&cookie)).await;
        assert_eq!(FakeSlotApi::calls(&api.slots_for_date_calls), 2);
    }

    #[tokio::test]
    async fn test_manager_reload_shows_new_bookings() {
        let (app, api) = app();
        let (_, cookie, body) = get(&app, "/manager", None).await;
        let cookie = cookie.unwrap();
        assert!(!body.contains("Linus"));

        api.book_slot("3", "Linus").await.unwrap();
        let (_, _, body) = get(&app, "/manager", Some(&cookie)).await;
        assert!(body.contains("Linus"));
        assert_eq!(FakeSlotApi::calls(&api.booked_slots_calls), 2);

        post(&app, "/manager/dismiss", &cookie, "").await;
        get(&app, "/manager", Some(&cookie)).await;
        assert_eq!(FakeSlotApi::calls(&api.booked_slots_calls), 2);
    }

    #[tokio::test]
    async fn test_actions_for_unmounted_page_just_redirect() {
        let (app, api) = app();
        let (_, cookie, _) = get(&app, "/manager", None).await;
        let cookie = cookie.unwrap();

        let (status, location) = post(&app, "/slots/1/select", &cookie, "").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location, "/");
        assert_eq!(FakeSlotApi::calls(&api.slots_for_date_calls), 0);
    }
}
