use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::settings::ClientSettings;

/// Installs the global subscriber: pretty stdout output and an hourly rolling log file.
///
/// Keep the returned guard alive for as long as logs should reach the file.
pub fn init(settings: &ClientSettings) -> anyhow::Result<WorkerGuard> {
    let filter = EnvFilter::try_new(&settings.log_level)
        .with_context(|| format!("invalid log level `{}`", settings.log_level))?;

    let appender = tracing_appender::rolling::hourly(&settings.log_dir, "launcher.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false).compact();

    let stdout_layer = settings
        .stdout_logs
        .then(|| fmt::layer().with_writer(std::io::stdout).pretty().boxed());

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("a global subscriber is already installed")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_level() {
        let settings = ClientSettings {
            log_level: "launcher_ui=notalevel".to_owned(),
            ..Default::default()
        };

        assert!(init(&settings).is_err());
    }

    #[test]
    fn installs_only_once() {
        let settings = ClientSettings {
            log_dir: std::env::temp_dir().join("launcher-ui-logging-test"),
            stdout_logs: false,
            ..Default::default()
        };

        let _guard = init(&settings).unwrap();
        tracing::info!("logging initialised");

        assert!(init(&settings).is_err());
    }
}
