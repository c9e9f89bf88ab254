//! Metrics collection.
//!
//! # Metrics
//! - `route_editor_loads_total` (counter): session loads by outcome
//! - `route_editor_submits_total` (counter): submits by mode and outcome
//! - `route_editor_suggestions_resolved_total` (counter): resolutions by hit/miss
//! - `route_editor_validation_failures_total` (counter): rejected finalizations
//!
//! # Design Decisions
//! - Facade only; the host installs a recorder/exporter
//! - Without a recorder every call is a no-op

pub fn record_load(outcome: &'static str) {
    metrics::counter!("route_editor_loads_total", "outcome" => outcome).increment(1);
}

pub fn record_submit(mode: &'static str, outcome: &'static str) {
    metrics::counter!(
        "route_editor_submits_total",
        "mode" => mode,
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_suggestions(hit: bool) {
    let hit = if hit { "hit" } else { "miss" };
    metrics::counter!("route_editor_suggestions_resolved_total", "hit" => hit).increment(1);
}

pub fn record_validation_failure(error_count: usize) {
    metrics::counter!("route_editor_validation_failures_total").increment(1);
    tracing::trace!(error_count, "Validation failure recorded");
}
