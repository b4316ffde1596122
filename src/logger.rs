use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LOG_ENV: &str = "RPCLOAD_LOG";

/// Installs the global subscriber. Logs go to stderr so printed tables on
/// stdout stay machine-readable.
pub fn init_logging(verbose: bool) {
    let configured = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(resolve_filter(configured.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

fn resolve_filter(configured: Option<&str>, verbose: bool) -> EnvFilter {
    match configured {
        Some(value) => EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("info"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(false);
        init_logging(true);
    }

    #[test]
    fn verbose_selects_debug_without_configured_filter() -> AppResult<()> {
        let filter = resolve_filter(None, true).to_string();
        if filter != "debug" {
            return Err(AppError::validation(format!("Unexpected filter {}", filter)));
        }
        let configured = resolve_filter(Some("rpcload=trace"), true).to_string();
        if configured != "rpcload=trace" {
            return Err(AppError::validation(format!("Unexpected filter {}", configured)));
        }
        Ok(())
    }
}
