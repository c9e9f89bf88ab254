//! Opening an editor against the gateway.
//!
//! # Responsibilities
//! - Fetch the API definition and the component catalog concurrently
//! - Build a controller and hydrate it from the route being edited
//!
//! # Design Decisions
//! - Both fetches must succeed; a failed load yields no controller at all
//! - No timeouts and no retries; the host reloads to try again

use std::sync::Arc;

use thiserror::Error;

use crate::config::EditorConfig;
use crate::editor::controller::RouteFormController;
use crate::editor::submit::SubmitMode;
use crate::gateway::{GatewayError, GatewayService};
use crate::model::{Route, RouteKey};
use crate::observability::metrics;

/// Why an editor could not be opened.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load API '{name}' version '{version}': {source}")]
    Api {
        name: String,
        version: String,
        source: GatewayError,
    },

    #[error("failed to load component catalog: {0}")]
    Catalog(#[source] GatewayError),
}

/// Open an editor that saves straight into the stored API definition.
///
/// With a `target`, the draft is hydrated from that route when it exists.
pub async fn open_immediate<G: GatewayService>(
    gateway: &G,
    config: &EditorConfig,
    api_name: &str,
    version: &str,
    target: Option<&RouteKey>,
) -> Result<RouteFormController, LoadError> {
    tracing::debug!(api = %api_name, version = %version, "Loading route editor");

    let (api, catalog) = tokio::join!(
        gateway.fetch_api_version(api_name, version),
        gateway.fetch_component_catalog()
    );
    let loaded = api
        .map_err(|source| LoadError::Api {
            name: api_name.to_string(),
            version: version.to_string(),
            source,
        })
        .and_then(|api| catalog.map(|c| (api, c)).map_err(LoadError::Catalog));

    let (api, catalog) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!(error = %e, "Route editor failed to load");
            record_load(config, "failure");
            return Err(e);
        }
    };

    let mode = SubmitMode::immediate(api_name, version);
    let mut controller = RouteFormController::new(Arc::new(catalog), config, mode);
    controller.loaded_revision = Some(api.revision);
    if let Some(key) = target {
        controller.hydrate(&api.routes, key);
    }

    tracing::info!(
        api = %api_name,
        version = %version,
        routes = api.routes.len(),
        editing = controller.is_editing(),
        "Route editor loaded"
    );
    record_load(config, "success");
    Ok(controller)
}

/// Open an editor whose submits are handed to `on_add_route`.
///
/// Only the catalog is fetched; the routes come from the caller, who owns
/// them until it decides to persist.
pub async fn open_deferred<G, F>(
    gateway: &G,
    config: &EditorConfig,
    routes: &[Route],
    target: Option<&RouteKey>,
    on_add_route: F,
) -> Result<RouteFormController, LoadError>
where
    G: GatewayService,
    F: FnMut(Route) + Send + Sync + 'static,
{
    let catalog = match gateway.fetch_component_catalog().await {
        Ok(catalog) => catalog,
        Err(e) => {
            let e = LoadError::Catalog(e);
            tracing::error!(error = %e, "Route editor failed to load");
            record_load(config, "failure");
            return Err(e);
        }
    };

    let mut controller =
        RouteFormController::new(Arc::new(catalog), config, SubmitMode::deferred(on_add_route));
    if let Some(key) = target {
        controller.hydrate(routes, key);
    }
    record_load(config, "success");
    Ok(controller)
}

fn record_load(config: &EditorConfig, outcome: &'static str) {
    if config.observability.metrics_enabled {
        metrics::record_load(outcome);
    }
}
