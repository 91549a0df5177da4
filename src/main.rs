//! Entry point for the `locale-merge` command.

use std::io::{
    self,
    Write,
};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use locale_merge::Cli;
use locale_merge::error::AppError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{
    RollingFileAppender,
    Rotation,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut stderr = io::stderr().lock();

    let _guard = match init_logging(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(error) => {
            let _ = writeln!(stderr, "❌ {error}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    match locale_merge::cli::execute(&cli, &mut stdout) {
        // Per-language failures are already on stdout and do not change the exit status.
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            let _ = writeln!(stderr, "❌ {error}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the tracing subscriber. `RUST_LOG` overrides the `warn` default.
///
/// The returned guard flushes the log file on drop.
fn init_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>, AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let Some(log_file) = log_file else {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
        return Ok(None);
    };

    let file_name = log_file
        .file_name()
        .ok_or_else(|| AppError::Logging(format!("{} is not a file path", log_file.display())))?;
    let directory = log_file.parent().filter(|dir| !dir.as_os_str().is_empty()).unwrap_or(Path::new("."));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .map_err(|e| AppError::Logging(e.to_string()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).init();

    Ok(Some(guard))
}
