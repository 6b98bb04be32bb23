#![allow(dead_code)]

use std::{
    collections::{HashMap, VecDeque},
    path::PathBuf,
    sync::Arc,
};

use async_trait::async_trait;
use launcher_ui::{
    bridge::Bridge,
    models::UserData,
    platform::{Dialogs, FolderRequest, Notice, NoticeKind, Process},
    AppContext,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::sync::watch;

/// Scripted backend. Each command answers from its queue; the last answer sticks.
#[derive(Default)]
pub struct MockBridge {
    replies: Mutex<HashMap<String, VecDeque<Result<Value, String>>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockBridge {
    pub fn reply(&self, command: &str, value: Value) -> &Self {
        self.push(command, Ok(value))
    }

    pub fn reject(&self, command: &str, message: &str) -> &Self {
        self.push(command, Err(message.to_owned()))
    }

    fn push(&self, command: &str, reply: Result<Value, String>) -> &Self {
        self.replies
            .lock()
            .entry(command.to_owned())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(command, _)| command.clone()).collect()
    }

    pub fn calls_of(&self, command: &str) -> Vec<Value> {
        self.calls
            .lock()
            .iter()
            .filter(|(name, _)| name == command)
            .map(|(_, args)| args.clone())
            .collect()
    }

    pub fn last_args(&self, command: &str) -> Option<Value> {
        self.calls_of(command).pop()
    }

    pub fn was_called(&self, command: &str) -> bool {
        !self.calls_of(command).is_empty()
    }
}

#[async_trait]
impl Bridge for MockBridge {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, String> {
        self.calls.lock().push((command.to_owned(), args));

        let mut replies = self.replies.lock();
        let queue = replies
            .get_mut(command)
            .ok_or_else(|| format!("unexpected command `{command}`"))?;

        match queue.len() {
            0 => Err(format!("no reply scripted for `{command}`")),
            1 => queue.front().cloned().expect("queue is not empty"),
            _ => queue.pop_front().expect("queue is not empty"),
        }
    }
}

#[derive(Default)]
pub struct RecordingDialogs {
    notices: Mutex<Vec<Notice>>,
    folder: Mutex<Option<PathBuf>>,
    requests: Mutex<Vec<FolderRequest>>,
    observed: Mutex<Option<watch::Receiver<Option<UserData>>>>,
    users_at_notice: Mutex<Vec<Option<String>>>,
}

impl RecordingDialogs {
    pub fn pick(&self, folder: Option<&str>) {
        *self.folder.lock() = folder.map(PathBuf::from);
    }

    /// Remembers who was signed in each time a notice is shown.
    pub fn observe_user(&self, receiver: watch::Receiver<Option<UserData>>) {
        *self.observed.lock() = Some(receiver);
    }

    pub fn users_at_notice(&self) -> Vec<Option<String>> {
        self.users_at_notice.lock().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.notices.lock().last().cloned()
    }

    pub fn last_kind(&self) -> Option<NoticeKind> {
        self.last_notice().map(|notice| notice.kind)
    }

    pub fn folder_requests(&self) -> Vec<FolderRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Dialogs for RecordingDialogs {
    async fn message(&self, notice: Notice) {
        if let Some(receiver) = self.observed.lock().as_ref() {
            let user = receiver.borrow().as_ref().map(|user| user.username.clone());
            self.users_at_notice.lock().push(user);
        }
        self.notices.lock().push(notice);
    }

    async fn pick_folder(&self, request: FolderRequest) -> Option<PathBuf> {
        self.requests.lock().push(request);
        self.folder.lock().clone()
    }
}

#[derive(Default)]
pub struct RecordingProcess {
    exits: Mutex<Vec<i32>>,
}

impl RecordingProcess {
    pub fn exits(&self) -> Vec<i32> {
        self.exits.lock().clone()
    }
}

impl Process for RecordingProcess {
    fn exit(&self, code: i32) {
        self.exits.lock().push(code);
    }
}

pub struct Harness {
    pub bridge: Arc<MockBridge>,
    pub dialogs: Arc<RecordingDialogs>,
    pub process: Arc<RecordingProcess>,
    pub ctx: AppContext,
}

impl Harness {
    pub fn new() -> Self {
        let bridge = Arc::new(MockBridge::default());
        let dialogs = Arc::new(RecordingDialogs::default());
        let process = Arc::new(RecordingProcess::default());

        let ctx = AppContext::new(bridge.clone(), dialogs.clone(), process.clone());

        Self {
            bridge,
            dialogs,
            process,
            ctx,
        }
    }

    /// A harness whose options are already loaded.
    pub async fn loaded() -> Self {
        let harness = Self::new();
        harness
            .bridge
            .reply("read_options", launcher_options())
            .reply("read_game_options", game_options());

        harness.ctx.options.init_options().await.expect("options load");
        harness
    }
}

pub fn launcher_options() -> Value {
    json!({
        "launcher_dir": "/home/steve/.config/.Permadeath-Launcher",
        "game_dir": "/home/steve/.local/share/.Permadeath",
        "init_on_start": true,
        "auto_update": false,
        "notification_enabled": false,
        "debug_console": true,
        "automatic_backup": false,
    })
}

pub fn game_options() -> Value {
    json!({
        "max_ram": 4096,
        "vm_flags": ["-XX:+AlwaysPreTouch", "-XX:+UseStringDeduplication"],
        "garbage_collector": "G1GC",
        "custom_java_path": "",
    })
}

pub fn user_record() -> Value {
    json!({
        "status": true,
        "survived_days": 7,
        "last_login": "2026-10-17 21:04",
        "server_role": "player",
    })
}
