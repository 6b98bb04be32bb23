use crate::{
    models::LauncherFlag,
    platform::{FolderRequest, Notice},
    views::{report_save, Outcome},
    AppContext,
};

/// Launcher settings page.
pub struct ConfigView {
    ctx: AppContext,
}

impl ConfigView {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    /// Lets the user choose the game directory. Returns `true` if it changed.
    pub async fn change_game_dir(&self) -> bool {
        let Some(path) = self.ctx.dialogs.pick_folder(FolderRequest::SINGLE_DIRECTORY).await else {
            return false;
        };

        tracing::debug!(path = %path.display(), "Game directory picked");
        self.ctx
            .options
            .update_launcher(|options| options.game_dir = Some(path))
            .is_some()
    }

    pub fn set_flag(&self, flag: LauncherFlag, value: bool) {
        self.ctx.options.update_launcher(|options| options.set_flag(flag, value));
    }

    pub async fn save_config(&self) -> Outcome {
        let result = self.ctx.options.save_options().await;
        report_save(
            &self.ctx,
            result,
            "Save Options",
            "Options saved successfully",
            "Failed to save options.",
        )
        .await
    }

    pub async fn reset_config(&self) -> Outcome {
        let game_dir = match self.ctx.backend.return_default_game_dir().await {
            Ok(dir) => dir,
            Err(error) => {
                self.ctx.notify(Notice::error("Reset Options", error.to_string())).await;
                return Outcome::Failed;
            }
        };

        if self
            .ctx
            .options
            .update_launcher(|options| options.reset_to_defaults(game_dir))
            .is_none()
        {
            return Outcome::Skipped;
        }

        let result = self.ctx.options.save_options().await;
        report_save(
            &self.ctx,
            result,
            "Reset Options",
            "Options reset successfully",
            "Failed to reset options.",
        )
        .await
    }
}
