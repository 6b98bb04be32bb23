use crate::bridge::Command;

/// Failure of a single backend call as seen from the UI.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The backend rejected the call. The message is shown to the user verbatim.
    #[error("{message}")]
    Rejected { command: Command, message: String },

    #[error("cannot encode arguments for `{command}`: {source}")]
    Encode {
        command: Command,
        #[source]
        source: serde_json::Error,
    },

    #[error("`{command}` returned an unexpected payload: {source}")]
    Decode {
        command: Command,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} are not loaded yet")]
    NotLoaded(&'static str),
}

pub const EXIT_NORMAL: i32 = 0;
pub const EXIT_LOAD_FAILURE: i32 = 1;

/// Unrecoverable startup condition. The process has already been asked to exit
/// with [`StartupError::exit_code`] by the time this is returned.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("the backend returned no launcher options")]
    MissingOptions,

    #[error("cannot load options: {0}")]
    Load(#[from] BridgeError),
}

impl StartupError {
    pub fn exit_code(&self) -> i32 {
        match self {
            StartupError::MissingOptions => EXIT_NORMAL,
            StartupError::Load(_) => EXIT_LOAD_FAILURE,
        }
    }
}
