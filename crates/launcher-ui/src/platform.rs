//! Native collaborators of the UI: modal messages, the folder picker and process exit.

use std::path::PathBuf;

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A blocking modal message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind,
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FolderRequest {
    pub multiple: bool,
    pub directory: bool,
}

impl FolderRequest {
    pub const SINGLE_DIRECTORY: FolderRequest = FolderRequest {
        multiple: false,
        directory: true,
    };
}

#[async_trait]
pub trait Dialogs: Send + Sync {
    /// Shows `notice` and resolves once the user dismissed it.
    async fn message(&self, notice: Notice);

    /// Returns `None` when the user cancelled the picker.
    async fn pick_folder(&self, request: FolderRequest) -> Option<PathBuf>;
}

pub trait Process: Send + Sync {
    fn exit(&self, code: i32);
}

/// Terminates the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcess;

impl Process for SystemProcess {
    fn exit(&self, code: i32) {
        tracing::info!(code, "Exiting");
        std::process::exit(code)
    }
}
