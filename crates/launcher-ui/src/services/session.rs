use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::{
    bridge::Backend,
    error::BridgeError,
    models::{UserData, UserLookup},
    redraw::RedrawSignal,
};

/// Holds the current user and mediates login state with the backend.
pub struct SessionService {
    backend: Backend,
    redraw: RedrawSignal,
    user: watch::Sender<Option<UserData>>,
}

impl SessionService {
    pub fn new(backend: Backend, redraw: RedrawSignal) -> Self {
        let (user, _) = watch::channel(None);

        Self { backend, redraw, user }
    }

    /// Adopts the user of an existing backend session, if there is one.
    ///
    /// Returns `true` when a user was adopted.
    pub async fn check_auto_login(&self) -> Result<bool, BridgeError> {
        let Some(session) = self.backend.check_session().await? else {
            tracing::info!("No saved session");
            return Ok(false);
        };

        match self.backend.load_user_data(&session.username).await? {
            UserLookup::Found(user) => {
                tracing::info!(username = %user.username, "Session restored");
                self.set_user(Some(user));
                Ok(true)
            }
            UserLookup::MissingStatus(_) => {
                tracing::warn!(username = %session.username, "Session user has no status, ignoring");
                Ok(false)
            }
            UserLookup::NotFound => {
                tracing::warn!(username = %session.username, "Session user does not exist");
                Ok(false)
            }
        }
    }

    /// Replaces the current user. Observers see the new value before this returns.
    pub fn set_user(&self, user: Option<UserData>) {
        self.user.send_replace(user);
        self.redraw.request();
    }

    /// Invalidates the backend session and clears the local user even when the
    /// backend call fails. The backend result is returned afterwards.
    pub async fn logout(&self) -> Result<(), BridgeError> {
        let result = self.backend.logout().await;

        if let Err(error) = &result {
            tracing::warn!(%error, "Backend logout failed, clearing local session anyway");
        }

        self.set_user(None);
        result
    }

    pub fn current_user(&self) -> Option<UserData> {
        self.user.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<UserData>> {
        self.user.subscribe()
    }

    /// Stream of the current user: yields the present value first, then every change.
    pub fn user_stream(&self) -> WatchStream<Option<UserData>> {
        WatchStream::new(self.subscribe())
    }
}
