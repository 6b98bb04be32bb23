use crate::{error::EXIT_NORMAL, AppContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Play,
    Config,
    Vm,
    Updates,
    Account,
}

impl Route {
    pub const ALL: [Route; 5] = [Route::Play, Route::Config, Route::Vm, Route::Updates, Route::Account];

    pub fn title(self) -> &'static str {
        match self {
            Route::Play => "Play",
            Route::Config => "Settings",
            Route::Vm => "Java VM",
            Route::Updates => "Updates",
            Route::Account => "Account",
        }
    }
}

pub struct SidebarView {
    ctx: AppContext,
    route: Route,
}

impl SidebarView {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            ctx: ctx.clone(),
            route: Route::default(),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            tracing::debug!(?route, "Navigating");
            self.route = route;
            self.ctx.redraw.request();
        }
    }

    pub fn exit_app(&self) {
        self.ctx.process.exit(EXIT_NORMAL);
    }
}
