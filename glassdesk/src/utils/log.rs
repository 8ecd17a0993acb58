use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

/// Build the subscriber for `level_regex`, falling back to `info` when the
/// filter does not parse. The parse error is handed back for reporting.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::default().add_directive(LevelFilter::INFO.into())
        });
    (get_subscribers(filter), parse_err)
}

/// Stdout carries shell actions, so log lines go to stderr.
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    )
}

/// Install the global subscriber for `level_regex`.
pub fn setup_logging(level_regex: &str) {
    let (subscriber, parse_err) = parse_log_level(level_regex);
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
        return;
    }
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log level {:?}: {}", level_regex, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_filters_are_reported() {
        let (_, err) = parse_log_level("glassdesk=verbose=loud");
        assert!(err.is_some());
    }

    #[test]
    fn module_filters_parse() {
        let (_, err) = parse_log_level("info,glassdesk_core=debug");
        assert!(err.is_none());
    }
}
