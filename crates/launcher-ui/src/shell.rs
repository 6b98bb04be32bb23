use crate::{
    error::StartupError,
    views::{AccountView, ConfigView, Outcome, PlayView, Route, SidebarView, UpdatesView, VmView},
    AppContext,
};

/// Root of the UI: boots the services, then owns every page.
pub struct Shell {
    ctx: AppContext,
    loaded: bool,

    pub sidebar: SidebarView,
    pub play: PlayView,
    pub config: ConfigView,
    pub vm: VmView,
    pub updates: UpdatesView,
    pub account: AccountView,
}

impl Shell {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            sidebar: SidebarView::new(&ctx),
            play: PlayView::new(&ctx),
            config: ConfigView::new(&ctx),
            vm: VmView::new(&ctx),
            updates: UpdatesView::new(&ctx),
            account: AccountView::new(&ctx),
            loaded: false,
            ctx,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// `false` until [`Shell::start`] finished; nothing should be drawn before.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Loads options, then restores a saved session, then reveals the UI.
    pub async fn start(&mut self) -> Result<(), StartupError> {
        self.ctx.options.init_options().await?;

        match self.ctx.session.check_auto_login().await {
            Ok(true) => {}
            Ok(false) => tracing::info!("Starting without a session"),
            Err(error) => tracing::warn!(%error, "Session check failed, starting signed out"),
        }

        self.loaded = true;
        self.ctx.redraw.request();
        tracing::info!("Launcher UI ready");

        Ok(())
    }

    /// Switches page. Opening the VM page loads its data.
    pub async fn navigate(&mut self, route: Route) -> Outcome {
        self.sidebar.navigate(route);

        match route {
            Route::Vm => self.vm.load().await,
            Route::Play | Route::Config | Route::Updates | Route::Account => Outcome::Done,
        }
    }
}
