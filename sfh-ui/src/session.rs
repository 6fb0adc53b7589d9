//! Process-wide login state.
//!
//! Provided once per app with `use_context_provider(SessionState::new)` and
//! initialised with [`SessionState::init`]. The notification bell starts
//! the poller when it mounts; logging out drops it.

use crate::poller::Poller;
use dioxus::prelude::*;
use log::{info, warn};
use sfh_core::auth::{LoginRequest, Session};
use sfh_core::backend::{AuthBackend, CommunityBackend};
use sfh_core::client::HttpClient;
use sfh_core::error::Result;
use sfh_presenter::board::{Inbox, NOTIFICATION_POLL_INTERVAL};

#[derive(Clone, Copy)]
pub struct SessionState {
    /// The logged-in user, if any
    pub user: Signal<Option<Session>>,
    /// Set once the initial `check_login` has answered
    pub checked: Signal<bool>,
    /// Notifications shown under the bell
    pub inbox: Signal<Inbox>,
    poller: Signal<Option<Poller>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: Signal::new(None),
            checked: Signal::new(false),
            inbox: Signal::new(Inbox::default()),
            poller: Signal::new(None),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.read().is_some()
    }

    /// Ask the server whether the session cookie is still valid.
    pub fn init(self, client: HttpClient) {
        let mut this = self;
        spawn(async move {
            match client.check_login().await {
                Ok(status) => {
                    let session = status.into_session();
                    if let Some(user) = &session {
                        info!("Resuming session of {}", user.user_id);
                    }
                    this.user.set(session);
                }
                Err(e) => warn!("Login check failed: {}", e),
            }
            this.checked.set(true);
        });
    }

    pub async fn login(mut self, client: &HttpClient, id: &str, password: &str) -> Result<()> {
        let request = LoginRequest {
            id: id.trim().to_string(),
            password: password.to_string(),
        };
        let response = client.login(&request).await?;
        info!("Logged in as {}", response.user_id);
        self.user.set(Some(response.into()));
        Ok(())
    }

    /// Log out. Local state is torn down even if the server call fails.
    pub async fn logout(mut self, client: &HttpClient) {
        if let Err(e) = client.logout().await {
            warn!("Logout request failed: {}", e);
        }
        self.poller.set(None);
        self.inbox.write().clear();
        self.user.set(None);
        info!("Logged out");
    }

    /// Delete a clicked notification and return its target URL.
    pub async fn open_notification(mut self, client: &HttpClient, notification_id: i64) -> Option<String> {
        if let Err(e) = client.dismiss_notification(notification_id).await {
            warn!("Failed to delete notification {}: {}", notification_id, e);
        }
        self.inbox.write().dismiss(notification_id)
    }

    /// Poll notifications now and every minute after. The task lives in
    /// the calling component's scope and stops on logout.
    pub fn start_notifications(&mut self, client: HttpClient) {
        let inbox = self.inbox;
        let poller = Poller::start(NOTIFICATION_POLL_INTERVAL, move || {
            let client = client.clone();
            let mut inbox = inbox;
            async move {
                let notifications = client.notifications().await;
                inbox.write().apply(notifications);
            }
        });
        self.poller.set(Some(poller));
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
