use std::sync::Arc;

use crate::{models::UserData, services::SessionService, AppContext};

/// Landing page. Only reads the session.
pub struct PlayView {
    session: Arc<SessionService>,
}

impl PlayView {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            session: ctx.session.clone(),
        }
    }

    pub fn player(&self) -> Option<UserData> {
        self.session.current_user()
    }
}
