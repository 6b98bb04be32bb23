//! Request/response access to the native backend.
//!
//! [`Bridge`] is the raw transport: a command name plus JSON arguments in, a JSON
//! value or a rejection message out. [`Backend`] is the typed surface the services
//! and views use.

use std::{fmt::Display, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};

use crate::{
    error::BridgeError,
    models::{GameOptions, LauncherOptions, Session, UserData, UserLookup},
};

#[async_trait]
pub trait Bridge: Send + Sync {
    /// Dispatches `command` and waits for the backend's reply.
    /// A rejected call yields the backend's error message.
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ReadOptions,
    ReadGameOptions,
    SaveOptions,
    SaveGameOptions,
    ReturnDefaultGameDir,
    GetGarbageCollectors,
    GetBaseJvmFlags,
    CheckSession,
    LoadUserData,
    LoginUser,
    RegisterUser,
    Logout,
}

impl Command {
    pub const fn name(self) -> &'static str {
        match self {
            Command::ReadOptions => "read_options",
            Command::ReadGameOptions => "read_game_options",
            Command::SaveOptions => "save_options",
            Command::SaveGameOptions => "save_game_options",
            Command::ReturnDefaultGameDir => "return_default_game_dir",
            Command::GetGarbageCollectors => "get_garbage_collectors",
            Command::GetBaseJvmFlags => "get_base_jvm_flags",
            Command::CheckSession => "check_session",
            Command::LoadUserData => "load_user_data",
            Command::LoginUser => "login_user",
            Command::RegisterUser => "register_user",
            Command::Logout => "logout",
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone)]
pub struct Backend {
    bridge: Arc<dyn Bridge>,
}

impl Backend {
    pub fn new(bridge: Arc<dyn Bridge>) -> Self {
        Self { bridge }
    }

    async fn raw(&self, command: Command, args: Value) -> Result<Value, BridgeError> {
        tracing::debug!(%command, "Invoking backend");

        self.bridge.invoke(command.name(), args).await.map_err(|message| {
            tracing::warn!(%command, %message, "Backend rejected the call");
            BridgeError::Rejected { command, message }
        })
    }

    async fn call<T>(&self, command: Command, args: Value) -> Result<T, BridgeError>
    where
        T: DeserializeOwned,
    {
        let value = self.raw(command, args).await?;
        serde_json::from_value(value).map_err(|source| BridgeError::Decode { command, source })
    }

    pub async fn read_options(&self) -> Result<Option<LauncherOptions>, BridgeError> {
        self.call(Command::ReadOptions, Value::Null).await
    }

    pub async fn read_game_options(&self, launcher: &LauncherOptions) -> Result<GameOptions, BridgeError> {
        let command = Command::ReadGameOptions;
        let args = json!({ "launcherOptions": encode(command, launcher)? });
        self.call(command, args).await
    }

    pub async fn save_options(&self, options: &LauncherOptions) -> Result<bool, BridgeError> {
        let command = Command::SaveOptions;
        let args = json!({ "options": encode(command, options)? });
        self.call(command, args).await
    }

    pub async fn save_game_options(&self, game: &GameOptions, launcher: &LauncherOptions) -> Result<bool, BridgeError> {
        let command = Command::SaveGameOptions;
        let args = json!({
            "gameOptions": encode(command, game)?,
            "launcherOptions": encode(command, launcher)?,
        });
        self.call(command, args).await
    }

    pub async fn return_default_game_dir(&self) -> Result<PathBuf, BridgeError> {
        self.call(Command::ReturnDefaultGameDir, Value::Null).await
    }

    pub async fn get_garbage_collectors(&self) -> Result<Vec<String>, BridgeError> {
        self.call(Command::GetGarbageCollectors, Value::Null).await
    }

    pub async fn get_base_jvm_flags(&self) -> Result<Vec<String>, BridgeError> {
        self.call(Command::GetBaseJvmFlags, Value::Null).await
    }

    pub async fn check_session(&self) -> Result<Option<Session>, BridgeError> {
        self.call(Command::CheckSession, Value::Null).await
    }

    /// Loads the record of `username`, merging the name into it.
    pub async fn load_user_data(&self, username: &str) -> Result<UserLookup, BridgeError> {
        let command = Command::LoadUserData;
        let value = self.raw(command, json!({ "username": username })).await?;
        decode_user(command, value, username)
    }

    pub async fn login_user(&self, username: &str, password: &str) -> Result<bool, BridgeError> {
        self.call(
            Command::LoginUser,
            json!({ "username": username, "password": password }),
        )
        .await
    }

    /// Returns the backend's status message on success.
    pub async fn register_user(&self, username: &str, password: &str, invite_code: &str) -> Result<String, BridgeError> {
        self.call(
            Command::RegisterUser,
            json!({
                "username": username,
                "password": password,
                "inviteCode": invite_code,
            }),
        )
        .await
    }

    pub async fn logout(&self) -> Result<(), BridgeError> {
        self.raw(Command::Logout, Value::Null).await.map(drop)
    }
}

fn encode<T>(command: Command, value: &T) -> Result<Value, BridgeError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(value).map_err(|source| BridgeError::Encode { command, source })
}

fn decode_user(command: Command, value: Value, username: &str) -> Result<UserLookup, BridgeError> {
    let mut record = match value {
        Value::Null => return Ok(UserLookup::NotFound),
        Value::Object(record) => record,
        other => {
            return serde_json::from_value::<UserData>(other)
                .map(UserLookup::Found)
                .map_err(|source| BridgeError::Decode { command, source })
        }
    };

    // An explicit `null` still counts as a status.
    let has_status = record.contains_key("status");
    record.insert("username".to_owned(), Value::String(username.to_owned()));

    let user = serde_json::from_value(Value::Object(record))
        .map_err(|source| BridgeError::Decode { command, source })?;

    if has_status {
        Ok(UserLookup::Found(user))
    } else {
        tracing::debug!(username, "User record has no status");
        Ok(UserLookup::MissingStatus(user))
    }
}
