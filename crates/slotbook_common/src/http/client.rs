// --- File: crates/slotbook_common/src/http/client.rs ---
use reqwest::{redirect::Policy, Client, Error as ReqwestError};
use std::time::Duration;

const USER_AGENT: &str = concat!("slotbook/", env!("CARGO_PKG_VERSION"));

/// Builds the `reqwest` client used for booking API calls.
///
/// `timeout` bounds each whole request, connect through body. Redirects are
/// followed with reqwest's default limit unless `follow_redirects` is false.
pub fn create_client(timeout: Duration, follow_redirects: bool) -> Result<Client, ReqwestError> {
    let redirects = if follow_redirects {
        Policy::default()
    } else {
        Policy::none()
    };

    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .redirect(redirects)
        .build()
}
