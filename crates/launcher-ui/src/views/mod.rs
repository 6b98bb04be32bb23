use crate::{error::BridgeError, platform::Notice, AppContext};

pub mod account;
pub mod config;
pub mod play;
pub mod sidebar;
pub mod updates;
pub mod vm;

pub use account::AccountView;
pub use config::ConfigView;
pub use play::PlayView;
pub use sidebar::{Route, SidebarView};
pub use updates::UpdatesView;
pub use vm::VmView;

/// How a user action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The backend answered `false`.
    Refused,
    /// Local validation failed; the backend was not called.
    Invalid,
    /// The backend call was rejected or its reply could not be read.
    Failed,
    /// Nothing to act on, e.g. options are not loaded.
    Skipped,
}

/// Announces the result of a save with the page's wording.
pub(crate) async fn report_save(
    ctx: &AppContext,
    result: Result<bool, BridgeError>,
    title: &str,
    saved: &str,
    refused: &str,
) -> Outcome {
    let (notice, outcome) = match result {
        Ok(true) => (Notice::info(title, saved), Outcome::Done),
        Ok(false) => (Notice::error(title, refused), Outcome::Refused),
        Err(error) => (Notice::error(title, error.to_string()), Outcome::Failed),
    };

    ctx.notify(notice).await;
    outcome
}
