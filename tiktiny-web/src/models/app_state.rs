use shared::Session;
use yewdux::{Dispatch, Store};

use crate::config::FrontendConfig;
use crate::storage::BrowserStorage;

/// Application-wide store. Owns the session; every component that selects
/// from it re-renders when sign-in or sign-out replaces the session.
#[derive(Clone, Debug, PartialEq, Store)]
pub struct AppState {
    pub session: Session,
}

impl Default for AppState {
    fn default() -> Self {
        let config = FrontendConfig::default();
        Self {
            session: Session::restore(&BrowserStorage::shared(), config.api_base()),
        }
    }
}

impl AppState {
    /// Publish a session that has just been authenticated and persisted.
    pub fn sign_in(dispatch: &Dispatch<Self>, session: Session) {
        log::info!(
            "signed in as {}",
            session.user().map_or("?", |user| user.email.as_str())
        );
        dispatch.set(Self { session });
    }

    /// Forget the stored identity and notify subscribers.
    pub fn sign_out(dispatch: &Dispatch<Self>) {
        let mut session = dispatch.get().session.clone();
        session.logout(&BrowserStorage::shared());
        log::info!("signed out");
        dispatch.set(Self { session });
    }
}
