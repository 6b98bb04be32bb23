use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings of the launcher application itself.
///
/// The backend creates this at startup and owns the durable copy; the UI edits
/// its in-memory copy and sends it back wholesale on save.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct LauncherOptions {
    pub launcher_dir: Option<PathBuf>,
    pub game_dir: Option<PathBuf>,
    pub init_on_start: bool,
    pub auto_update: bool,
    pub notification_enabled: bool,
    pub debug_console: bool,
    pub automatic_backup: bool,
}

/// Boolean switches of [`LauncherOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LauncherFlag {
    InitOnStart,
    AutoUpdate,
    Notifications,
    DebugConsole,
    AutomaticBackup,
}

impl LauncherFlag {
    pub const ALL: [LauncherFlag; 5] = [
        LauncherFlag::InitOnStart,
        LauncherFlag::AutoUpdate,
        LauncherFlag::Notifications,
        LauncherFlag::DebugConsole,
        LauncherFlag::AutomaticBackup,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LauncherFlag::InitOnStart => "Start with the system",
            LauncherFlag::AutoUpdate => "Automatic updates",
            LauncherFlag::Notifications => "Notifications",
            LauncherFlag::DebugConsole => "Debug console",
            LauncherFlag::AutomaticBackup => "Automatic backup",
        }
    }
}

impl LauncherOptions {
    pub fn flag(&self, flag: LauncherFlag) -> bool {
        match flag {
            LauncherFlag::InitOnStart => self.init_on_start,
            LauncherFlag::AutoUpdate => self.auto_update,
            LauncherFlag::Notifications => self.notification_enabled,
            LauncherFlag::DebugConsole => self.debug_console,
            LauncherFlag::AutomaticBackup => self.automatic_backup,
        }
    }

    pub fn set_flag(&mut self, flag: LauncherFlag, value: bool) {
        let slot = match flag {
            LauncherFlag::InitOnStart => &mut self.init_on_start,
            LauncherFlag::AutoUpdate => &mut self.auto_update,
            LauncherFlag::Notifications => &mut self.notification_enabled,
            LauncherFlag::DebugConsole => &mut self.debug_console,
            LauncherFlag::AutomaticBackup => &mut self.automatic_backup,
        };
        *slot = value;
    }

    /// Flips `flag` and returns its new value.
    pub fn toggle_flag(&mut self, flag: LauncherFlag) -> bool {
        let value = !self.flag(flag);
        self.set_flag(flag, value);
        value
    }

    /// Restores the startup behaviour flags and points the game at `game_dir`.
    ///
    /// Update and notification preferences are left alone.
    pub fn reset_to_defaults(&mut self, game_dir: PathBuf) {
        self.init_on_start = false;
        self.debug_console = false;
        self.automatic_backup = true;
        self.game_dir = Some(game_dir);
    }
}

/// JVM settings of the launched game.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct GameOptions {
    pub max_ram: u32,
    pub vm_flags: Vec<String>,
    #[serde(default)]
    pub garbage_collector: String,
    #[serde(default)]
    pub custom_java_path: String,
}
