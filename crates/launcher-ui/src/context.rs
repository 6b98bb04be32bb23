use std::sync::Arc;

use crate::{
    bridge::{Backend, Bridge},
    platform::{Dialogs, Notice, Process},
    redraw::RedrawSignal,
    services::{OptionsBridge, SessionService},
};

/// Everything a view is allowed to touch, injected at construction.
#[derive(Clone)]
pub struct AppContext {
    pub backend: Backend,
    pub options: Arc<OptionsBridge>,
    pub session: Arc<SessionService>,
    pub dialogs: Arc<dyn Dialogs>,
    pub process: Arc<dyn Process>,
    pub redraw: RedrawSignal,
}

impl AppContext {
    pub fn new(bridge: Arc<dyn Bridge>, dialogs: Arc<dyn Dialogs>, process: Arc<dyn Process>) -> Self {
        let backend = Backend::new(bridge);
        let redraw = RedrawSignal::new();

        Self {
            options: Arc::new(OptionsBridge::new(backend.clone(), process.clone(), redraw.clone())),
            session: Arc::new(SessionService::new(backend.clone(), redraw.clone())),
            backend,
            dialogs,
            process,
            redraw,
        }
    }

    pub async fn notify(&self, notice: Notice) {
        self.dialogs.message(notice).await;
    }
}
