use crate::domain::models::RunStats;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use env_logger::{Builder, Target};
use log::{Level, info};
use std::io::{self, Write};

pub const LOG_LEVEL_ENV: &str = "GITCAT_LOG_LEVEL";

/// Verbosity 0 still shows skip records (`info`) and read failures (`warn`).
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let env = env_logger::Env::default().filter_or(LOG_LEVEL_ENV, level_for(verbosity));

    Builder::from_env(env)
        .target(Target::Stderr)
        .format(|buf, record| {
            let level_color = match record.level() {
                Level::Error => "31", // Red
                Level::Warn => "33",  // Yellow
                Level::Info => "32",  // Green
                Level::Debug => "36", // Cyan
                Level::Trace => "35", // Magenta
            };

            writeln!(
                buf,
                "\x1B[{}m[{}]\x1B[0m [{}] {}",
                level_color,
                record.level(),
                buf.timestamp(),
                record.args()
            )
        })
        .format_timestamp_secs()
        .try_init()
}

/// Prints the end-of-run summary on stderr, away from the data stream.
pub fn print_summary(stats: &RunStats, skipped: usize) -> io::Result<()> {
    let mut stderr = io::stderr();

    writeln!(stderr)?;
    stderr.execute(SetForegroundColor(Color::Cyan))?;
    writeln!(stderr, "✓ {} files included, {} skipped", stats.file_count, skipped)?;
    stderr.execute(ResetColor)?;
    writeln!(stderr, "🧠 Estimated tokens: ~{}", stats.estimated_tokens)?;

    Ok(())
}

pub fn log_summary(stats: &RunStats, skipped: usize) {
    info!(
        "Rendered {} files (~{} tokens), skipped {}",
        stats.file_count, stats.estimated_tokens, skipped
    );
}
