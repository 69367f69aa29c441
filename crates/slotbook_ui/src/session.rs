// --- File: crates/slotbook_ui/src/session.rs ---
//! Browser sessions.
//!
//! A session owns the controller of the page it is currently on. Switching
//! pages drops the other controller, so returning to a page mounts it afresh.
//! Sessions idle for longer than the configured TTL are pruned whenever a
//! request resolves its session.
//!
//! A page GET re-fetches unless it is the redirect that follows a form POST;
//! POST handlers mark the session so the next GET renders without fetching.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use axum::http::header::{COOKIE, SET_COOKIE};
use cookie::{Cookie, CookieJar, SameSite};
use axum::http::{HeaderMap, HeaderValue};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use slotbook_common::SlotApi;
use slotbook_config::SessionConfig;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::pages::{CustomerBookingPage, SalesManagerPage};

enum ActivePage {
    None,
    Booking(Arc<CustomerBookingPage>),
    Manager(Arc<SalesManagerPage>),
}

pub struct Session {
    id: Uuid,
    api: Arc<dyn SlotApi>,
    page: Mutex<ActivePage>,
    last_seen: AtomicI64,
    acted: AtomicBool,
}

impl Session {
    fn new(id: Uuid, api: Arc<dyn SlotApi>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            api,
            page: Mutex::new(ActivePage::None),
            last_seen: AtomicI64::new(now.timestamp()),
            acted: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&self, now: DateTime<Utc>) {
        self.last_seen.store(now.timestamp(), Ordering::Relaxed);
    }

    fn idle_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_seen.load(Ordering::Relaxed) < cutoff.timestamp()
    }

    /// Records that a form action ran; the following page GET is its redirect.
    pub fn mark_acted(&self) {
        self.acted.store(true, Ordering::SeqCst);
    }

    /// Clears the action marker, returning whether it was set.
    pub fn take_acted(&self) -> bool {
        self.acted.swap(false, Ordering::SeqCst)
    }

    /// Customer page controller, creating one for `date` if the session is
    /// elsewhere. The flag is true for a new controller, which has not fetched
    /// yet.
    pub async fn open_customer(&self, date: NaiveDate) -> (Arc<CustomerBookingPage>, bool) {
        let mut active = self.page.lock().await;
        if let ActivePage::Booking(page) = &*active {
            return (page.clone(), false);
        }
        debug!("Session {} mounting customer page for {}", self.id, date);
        let page = Arc::new(CustomerBookingPage::new(self.api.clone(), date));
        *active = ActivePage::Booking(page.clone());
        (page, true)
    }

    /// Manager page controller, creating one if the session is elsewhere.
    pub async fn open_manager(&self) -> (Arc<SalesManagerPage>, bool) {
        let mut active = self.page.lock().await;
        if let ActivePage::Manager(page) = &*active {
            return (page.clone(), false);
        }
        debug!("Session {} mounting manager page", self.id);
        let page = Arc::new(SalesManagerPage::new(self.api.clone()));
        *active = ActivePage::Manager(page.clone());
        (page, true)
    }

    /// The mounted customer page, if that is where the session is.
    pub async fn customer(&self) -> Option<Arc<CustomerBookingPage>> {
        match &*self.page.lock().await {
            ActivePage::Booking(page) => Some(page.clone()),
            _ => None,
        }
    }

    pub async fn manager(&self) -> Option<Arc<SalesManagerPage>> {
        match &*self.page.lock().await {
            ActivePage::Manager(page) => Some(page.clone()),
            _ => None,
        }
    }
}

pub struct SessionStore {
    api: Arc<dyn SlotApi>,
    sessions: Mutex<HashMap<Uuid, Arc<Session>>>,
    ttl: Duration,
    cookie_name: String,
}

impl SessionStore {
    pub fn new(api: Arc<dyn SlotApi>, config: &SessionConfig) -> Self {
        Self {
            api,
            sessions: Mutex::new(HashMap::new()),
            // Out-of-range TTLs never expire a session
            ttl: Duration::try_minutes(config.ttl_minutes).unwrap_or(Duration::MAX),
            cookie_name: config.cookie_name.clone(),
        }
    }

    /// Finds the session named by the request's cookie or starts a new one.
    /// A `Set-Cookie` value is returned only for a new session.
    pub async fn resolve(&self, headers: &HeaderMap) -> (Arc<Session>, Option<HeaderValue>) {
        self.resolve_at(headers, Utc::now()).await
    }

    async fn resolve_at(
        &self,
        headers: &HeaderMap,
        now: DateTime<Utc>,
    ) -> (Arc<Session>, Option<HeaderValue>) {
        let mut sessions = self.sessions.lock().await;
        if let Some(cutoff) = now.checked_sub_signed(self.ttl) {
            let before = sessions.len();
            sessions.retain(|_, session| !session.idle_since(cutoff));
            if sessions.len() < before {
                debug!("Pruned {} idle sessions", before - sessions.len());
            }
        }

        if let Some(session) = self
            .session_id(headers)
            .and_then(|id| sessions.get(&id))
            .cloned()
        {
            session.touch(now);
            return (session, None);
        }

        let id = Uuid::new_v4();
        let session = Arc::new(Session::new(id, self.api.clone(), now));
        sessions.insert(id, session.clone());
        info!("Created session {}", id);
        (session, self.set_cookie(id))
    }

    fn session_id(&self, headers: &HeaderMap) -> Option<Uuid> {
        let mut jar = CookieJar::new();
        for header in headers.get_all(COOKIE) {
            let Ok(header) = header.to_str() else {
                continue;
            };
            for cookie in Cookie::split_parse(header).flatten() {
                jar.add_original(cookie.into_owned());
            }
        }
        let cookie = jar.get(&self.cookie_name)?;
        Uuid::parse_str(cookie.value_trimmed()).ok()
    }

    fn set_cookie(&self, id: Uuid) -> Option<HeaderValue> {
        let cookie = Cookie::build((self.cookie_name.clone(), id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        HeaderValue::from_str(&cookie.to_string()).ok()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Attaches a new session's cookie to a response.
pub fn with_cookie(mut response: axum::response::Response, cookie: Option<HeaderValue>) -> axum::response::Response {
    if let Some(cookie) = cookie {
        response.headers_mut().append(SET_COOKIE, cookie);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{march, FakeSlotApi};

    fn store(ttl_minutes: i64) -> SessionStore {
        SessionStore::new(
            Arc::new(FakeSlotApi::default()),
            &SessionConfig {
                ttl_minutes,
                cookie_name: "slotbook_session".into(),
            },
        )
    }

    fn cookie_header(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[tokio::test]
    async fn test_new_session_sets_cookie() {
        let store = store(120);
        let (session, cookie) = store.resolve(&HeaderMap::new()).await;

        let cookie = cookie.expect("new session sets a cookie");
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with(&format!("slotbook_session={}", session.id())));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_cookie_resolves_existing_session() {
        let store = store(120);
        let (first, _) = store.resolve(&HeaderMap::new()).await;

        let headers = cookie_header(&format!("theme=dark; slotbook_session={}", first.id()));
        let (second, cookie) = store.resolve(&headers).await;

        assert_eq!(first.id(), second.id());
        assert!(cookie.is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_or_garbled_cookie_starts_fresh() {
        let store = store(120);
        let (_, cookie) = store
            .resolve(&cookie_header(&format!("slotbook_session={}", Uuid::new_v4())))
            .await;
        assert!(cookie.is_some());
        let (_, cookie) = store.resolve(&cookie_header("slotbook_session=nope")).await;
        assert!(cookie.is_some());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_quoted_cookie_value_resolves() {
        let store = store(120);
        let (first, _) = store.resolve(&HeaderMap::new()).await;

        let headers = cookie_header(&format!("slotbook_session=\"{}\"; lang=en", first.id()));
        let (second, cookie) = store.resolve(&headers).await;

        assert_eq!(first.id(), second.id());
        assert!(cookie.is_none());
    }

    #[tokio::test]
    async fn test_huge_ttl_never_prunes() {
        let store = store(200_000_000_000);
        let start = Utc::now();
        let (session, _) = store.resolve_at(&HeaderMap::new(), start).await;

        let (again, cookie) = store
            .resolve_at(
                &cookie_header(&format!("slotbook_session={}", session.id())),
                start + Duration::days(3650),
            )
            .await;

        assert_eq!(session.id(), again.id());
        assert!(cookie.is_none());
    }

    #[tokio::test]
    async fn test_action_marker_is_one_shot() {
        let store = store(120);
        let (session, _) = store.resolve(&HeaderMap::new()).await;

        assert!(!session.take_acted());
        session.mark_acted();
        assert!(session.take_acted());
        assert!(!session.take_acted());
    }

    #[tokio::test]
    async fn test_idle_sessions_are_pruned() {
        let store = store(30);
        let start = Utc::now();
        let (idle, _) = store.resolve_at(&HeaderMap::new(), start).await;

        let later = start + Duration::minutes(31);
        let (_, cookie) = store
            .resolve_at(&cookie_header(&format!("slotbook_session={}", idle.id())), later)
            .await;

        assert!(cookie.is_some(), "expired session is replaced");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_switching_pages_remounts() {
        let store = store(120);
        let (session, _) = store.resolve(&HeaderMap::new()).await;

        let (booking, mounted) = session.open_customer(march(5)).await;
        assert!(mounted);
        let (again, mounted) = session.open_customer(march(6)).await;
        assert!(!mounted);
        assert!(Arc::ptr_eq(&booking, &again));
        assert!(session.manager().await.is_none());

        let (_, mounted) = session.open_manager().await;
        assert!(mounted);
        assert!(session.customer().await.is_none());

        let (fresh, mounted) = session.open_customer(march(5)).await;
        assert!(mounted);
        assert!(!Arc::ptr_eq(&booking, &fresh));
    }
}
