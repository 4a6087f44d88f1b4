use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered by `RUST_LOG`, or at `info` when it is
/// unset or invalid. Returns false if a global subscriber was already set.
pub fn init_tracing() -> bool {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter_from(directives.as_deref()))
        .try_init()
        .is_ok()
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_level_is_not_capped_at_info() {
        assert_eq!(filter_from(Some("debug")).to_string(), "debug");
        assert_eq!(
            filter_from(Some("rtd_tx_core=trace")).to_string(),
            "rtd_tx_core=trace"
        );
    }

    #[test]
    fn missing_or_invalid_directives_fall_back_to_info() {
        assert_eq!(filter_from(None).to_string(), "info");
        assert_eq!(filter_from(Some("rtd_tx_core=loud")).to_string(), "info");
    }
}
