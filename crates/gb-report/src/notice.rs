use std::io::Write;

/// Sink for informational engine messages.
///
/// Notices are fire-and-forget: no state is retained, no value is returned,
/// and delivery failures are swallowed.
pub trait NoticeSink: Send + Sync {
    fn notice(&self, msg: &str);
}

/// Writes `NOTICE: <msg>` lines to stderr, matching the convention the
/// engine's own command-line tools use. This is the default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotices;

impl NoticeSink for StderrNotices {
    fn notice(&self, msg: &str) {
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "NOTICE: {msg}");
    }
}

/// Forwards notices to the `tracing` subscriber instead of stderr, for
/// applications that already route diagnostics through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotices;

impl NoticeSink for TracingNotices {
    fn notice(&self, msg: &str) {
        tracing::info!(target: "geobridge", "{msg}");
    }
}
