//! Metrics collection and exposition.
//!
//! # Metrics
//! - `shell_renders_total` (counter): renders by route and outcome
//! - `shell_render_duration_seconds` (histogram): render latency
//! - `shell_navigations_total` (counter): in-process navigations by kind
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::error::ShellError;

/// Install the Prometheus recorder with an HTTP listener on `addr`.
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), ShellError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| ShellError::Metrics(e.to_string()))?;

    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one render of the layout shell.
pub fn record_render(route: &str, outcome: &'static str, start: Instant) {
    metrics::counter!(
        "shell_renders_total",
        "route" => route.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("shell_render_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record one in-process navigation.
pub fn record_navigation(kind: &'static str) {
    metrics::counter!("shell_navigations_total", "kind" => kind).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_and_labels() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            record_render("/simulation", "matched", Instant::now());
            record_navigation("push");
        });

        let output = handle.render();
        let renders = output
            .lines()
            .find(|l| l.starts_with("shell_renders_total{"))
            .unwrap();
        assert!(renders.contains(r#"route="/simulation""#));
        assert!(renders.contains(r#"outcome="matched""#));
        assert!(output.contains("shell_render_duration_seconds"));
        assert!(output.contains(r#"shell_navigations_total{kind="push"} 1"#));
    }
}
