use crate::{models::LauncherFlag, platform::Notice, views::Outcome, AppContext};

/// Update and notification switches. Each toggle is saved immediately.
pub struct UpdatesView {
    ctx: AppContext,
}

impl UpdatesView {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn toggle_update(&self) -> Outcome {
        self.toggle(LauncherFlag::AutoUpdate).await
    }

    pub async fn toggle_notifications(&self) -> Outcome {
        self.toggle(LauncherFlag::Notifications).await
    }

    async fn toggle(&self, flag: LauncherFlag) -> Outcome {
        let Some(value) = self.ctx.options.update_launcher(|options| options.toggle_flag(flag)) else {
            return Outcome::Skipped;
        };
        tracing::debug!(?flag, value, "Toggled");

        // Only success is announced; failures go to the log.
        match self.ctx.options.save_options().await {
            Ok(true) => {
                self.ctx.notify(Notice::info("Success", "Saved successfully")).await;
                Outcome::Done
            }
            Ok(false) => {
                tracing::warn!(?flag, "Backend refused to save options");
                Outcome::Refused
            }
            Err(error) => {
                tracing::warn!(?flag, %error, "Cannot save options");
                Outcome::Failed
            }
        }
    }
}
