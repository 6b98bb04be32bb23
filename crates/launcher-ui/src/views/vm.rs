use itertools::Itertools;

use crate::{
    models::JavaVersion,
    platform::Notice,
    views::{report_save, Outcome},
    AppContext,
};

const DEFAULT_MAX_RAM: &str = "4096MB";
const RAM_SUFFIX: &str = "MB";

/// Parses a RAM field such as `"4096MB"` or `"2048"` into megabytes.
///
/// Anything that is not a positive integer, optionally followed by `MB`, is rejected.
pub fn parse_max_ram(input: &str) -> Option<u32> {
    let input = input.trim();
    let digits = input.strip_suffix(RAM_SUFFIX).unwrap_or(input).trim_end();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse::<u32>().ok().filter(|ram| *ram > 0)
}

pub fn format_max_ram(megabytes: u32) -> String {
    format!("{megabytes}{RAM_SUFFIX}")
}

/// Splits a flags field on whitespace, dropping empty tokens.
pub fn parse_vm_flags(input: &str) -> Vec<String> {
    input.split_whitespace().map(ToOwned::to_owned).collect()
}

pub fn join_vm_flags(flags: &[String]) -> String {
    flags.iter().join(" ")
}

/// Java virtual machine page.
pub struct VmView {
    ctx: AppContext,
    garbage_collectors: Vec<String>,
    /// RAM field as typed by the user.
    pub max_ram: String,
    /// Space separated JVM flags as typed by the user.
    pub jvm_args: String,
}

impl VmView {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            ctx: ctx.clone(),
            garbage_collectors: Vec::new(),
            max_ram: DEFAULT_MAX_RAM.to_owned(),
            jvm_args: String::new(),
        }
    }

    pub fn garbage_collectors(&self) -> &[String] {
        &self.garbage_collectors
    }

    pub fn java_versions(&self) -> &'static [JavaVersion] {
        &JavaVersion::ALL
    }

    /// Fetches the collector list and seeds the text fields from the game options.
    pub async fn load(&mut self) -> Outcome {
        let outcome = match self.ctx.backend.get_garbage_collectors().await {
            Ok(collectors) => {
                self.garbage_collectors = collectors;
                Outcome::Done
            }
            Err(error) => {
                self.ctx.notify(Notice::error("Java VM", error.to_string())).await;
                Outcome::Failed
            }
        };

        if let Some(game) = self.ctx.options.game() {
            self.max_ram = format_max_ram(game.max_ram);
            self.jvm_args = join_vm_flags(&game.vm_flags);
        }

        self.ctx.redraw.request();
        outcome
    }

    pub fn select_garbage_collector(&self, collector: &str) {
        self.ctx
            .options
            .update_game(|game| collector.clone_into(&mut game.garbage_collector));
    }

    pub fn set_custom_java_path(&self, path: &str) {
        self.ctx
            .options
            .update_game(|game| path.clone_into(&mut game.custom_java_path));
    }

    pub async fn save_vm_options(&mut self) -> Outcome {
        if !self.ctx.options.is_loaded() {
            return Outcome::Skipped;
        }

        let Some(max_ram) = parse_max_ram(&self.max_ram) else {
            tracing::debug!(input = %self.max_ram, "Rejected RAM value");
            self.ctx
                .notify(Notice::error(
                    "Invalid Input",
                    "Please enter a valid positive number for maximum RAM.",
                ))
                .await;
            return Outcome::Invalid;
        };

        let flags = parse_vm_flags(&self.jvm_args);
        self.ctx.options.update_game(|game| {
            game.max_ram = max_ram;
            game.vm_flags = flags;
        });

        let result = self.ctx.options.save_game_options().await;
        report_save(
            &self.ctx,
            result,
            "Save Game Options",
            "Game options saved successfully",
            "Failed to save game options.",
        )
        .await
    }

    pub async fn reset_defaults(&mut self) -> Outcome {
        let flags = match self.ctx.backend.get_base_jvm_flags().await {
            Ok(flags) => flags,
            Err(error) => {
                self.ctx
                    .notify(Notice::error("Reset Game Options", error.to_string()))
                    .await;
                return Outcome::Failed;
            }
        };

        self.jvm_args = join_vm_flags(&flags);
        self.ctx.redraw.request();

        if self.ctx.options.update_game(|game| game.vm_flags = flags).is_none() {
            return Outcome::Skipped;
        }

        let result = self.ctx.options.save_game_options().await;
        report_save(
            &self.ctx,
            result,
            "Reset Game Options",
            "Game options reset successfully",
            "Failed to reset game options.",
        )
        .await
    }
}
