use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    bridge::Backend,
    error::{BridgeError, StartupError},
    models::{GameOptions, LauncherOptions},
    platform::Process,
    redraw::RedrawSignal,
};

#[derive(Default)]
struct OptionsState {
    launcher: Option<LauncherOptions>,
    game: Option<GameOptions>,
}

/// Owns the in-memory launcher and game options and mediates every read and
/// save of them.
pub struct OptionsBridge {
    backend: Backend,
    process: Arc<dyn Process>,
    redraw: RedrawSignal,
    state: RwLock<OptionsState>,
}

impl OptionsBridge {
    pub fn new(backend: Backend, process: Arc<dyn Process>, redraw: RedrawSignal) -> Self {
        Self {
            backend,
            process,
            redraw,
            state: RwLock::new(OptionsState::default()),
        }
    }

    /// Loads launcher options, then the game options that depend on them.
    ///
    /// Both failure modes ask the process to exit before returning the error.
    pub async fn init_options(&self) -> Result<(), StartupError> {
        let result = self.load().await;

        if let Err(error) = &result {
            tracing::error!(%error, "Cannot start without options");
            self.process.exit(error.exit_code());
        }

        result
    }

    async fn load(&self) -> Result<(), StartupError> {
        let launcher = self
            .backend
            .read_options()
            .await?
            .ok_or(StartupError::MissingOptions)?;
        tracing::info!(?launcher, "Launcher options loaded");

        let game = self.backend.read_game_options(&launcher).await?;
        tracing::info!(?game, "Game options loaded");

        {
            let mut state = self.state.write();
            state.launcher = Some(launcher);
            state.game = Some(game);
        }
        self.redraw.request();

        Ok(())
    }

    pub fn launcher(&self) -> Option<LauncherOptions> {
        self.state.read().launcher.clone()
    }

    pub fn game(&self) -> Option<GameOptions> {
        self.state.read().game.clone()
    }

    pub fn is_loaded(&self) -> bool {
        let state = self.state.read();
        state.launcher.is_some() && state.game.is_some()
    }

    /// Applies `f` to the launcher options. Returns `None` if they are not loaded.
    pub fn update_launcher<R>(&self, f: impl FnOnce(&mut LauncherOptions) -> R) -> Option<R> {
        let result = self.state.write().launcher.as_mut().map(f);
        if result.is_some() {
            self.redraw.request();
        }
        result
    }

    /// Applies `f` to the game options. Returns `None` if they are not loaded.
    pub fn update_game<R>(&self, f: impl FnOnce(&mut GameOptions) -> R) -> Option<R> {
        let result = self.state.write().game.as_mut().map(f);
        if result.is_some() {
            self.redraw.request();
        }
        result
    }

    pub async fn save_options(&self) -> Result<bool, BridgeError> {
        let launcher = self.launcher().ok_or(BridgeError::NotLoaded("launcher options"))?;

        let saved = self.backend.save_options(&launcher).await?;
        tracing::info!(saved, "Launcher options sent");

        Ok(saved)
    }

    pub async fn save_game_options(&self) -> Result<bool, BridgeError> {
        let (game, launcher) = {
            let state = self.state.read();
            (state.game.clone(), state.launcher.clone())
        };
        let game = game.ok_or(BridgeError::NotLoaded("game options"))?;
        let launcher = launcher.ok_or(BridgeError::NotLoaded("launcher options"))?;

        let saved = self.backend.save_game_options(&game, &launcher).await?;
        tracing::info!(saved, "Game options sent");

        Ok(saved)
    }
}
