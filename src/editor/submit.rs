//! Draft submission.
//!
//! # Data Flow
//! ```text
//! Deferred:
//!     finalize → on_add_route(route) → reset draft
//!
//! Immediate:
//!     finalize
//!     → fetch_api (re-read current document)
//!     → conflict check
//!     → reconcile::merge(old routes, route, original key)
//!     → save_api (whole document)
//!     → remember saved revision → reset draft → NavigationSignal
//! ```
//!
//! # Design Decisions
//! - All or nothing: the draft is only reset after the last step succeeded
//! - The read-modify-write is not atomic; a write that landed since the
//!   draft was loaded is overwritten (logged, not prevented)
//! - No retries; the caller resubmits

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::editor::controller::RouteFormController;
use crate::editor::validation::ValidationErrors;
use crate::gateway::{GatewayError, GatewayService};
use crate::model::{Method, Route, RouteKey};
use crate::observability::metrics;
use crate::routing::reconcile;

/// Where a finalized route goes.
pub enum SubmitMode {
    /// Hand the route to the caller; nothing is written.
    Deferred(Box<dyn FnMut(Route) + Send + Sync>),
    /// Merge the route into a stored API definition.
    Immediate { api_name: String, version: String },
}

impl SubmitMode {
    pub fn deferred<F>(on_add_route: F) -> Self
    where
        F: FnMut(Route) + Send + Sync + 'static,
    {
        SubmitMode::Deferred(Box::new(on_add_route))
    }

    pub fn immediate(api_name: impl Into<String>, version: impl Into<String>) -> Self {
        SubmitMode::Immediate {
            api_name: api_name.into(),
            version: version.into(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SubmitMode::Deferred(_) => "deferred",
            SubmitMode::Immediate { .. } => "immediate",
        }
    }
}

impl fmt::Debug for SubmitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitMode::Deferred(_) => f.write_str("Deferred"),
            SubmitMode::Immediate { api_name, version } => f
                .debug_struct("Immediate")
                .field("api_name", api_name)
                .field("version", version)
                .finish(),
        }
    }
}

/// Tells the host which route to show after an immediate submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSignal {
    pub api_name: String,
    pub version: String,
    pub path: String,
    pub method: Option<Method>,
    /// Fresh per submit so the host re-reads its route listing.
    pub reload_token: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The route was handed to the deferred callback.
    Deferred { key: RouteKey },
    /// The route was saved; navigate to it.
    Saved(NavigationSignal),
}

/// Why a submit failed. The draft is untouched in every case.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("API '{name}' version '{version}' no longer exists")]
    ApiNotFound { name: String, version: String },

    #[error("a route already exists at {0}")]
    Conflict(RouteKey),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl SubmitError {
    /// Field-scoped errors, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            SubmitError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl RouteFormController {
    /// Finalize the draft and deliver it according to the submit mode.
    pub async fn submit<G: GatewayService>(
        &mut self,
        gateway: &G,
    ) -> Result<SubmitOutcome, SubmitError> {
        let mode = self.mode.label();
        tracing::debug!(mode, route = ?self.original_key, "Submitting route");

        let target = match &self.mode {
            SubmitMode::Deferred(_) => None,
            SubmitMode::Immediate { api_name, version } => Some((api_name.clone(), version.clone())),
        };
        let result = match target {
            None => self.submit_deferred(),
            Some((api_name, version)) => self
                .submit_immediate(gateway, api_name, version)
                .await
                .map(|(signal, revision)| {
                    self.loaded_revision = Some(revision);
                    SubmitOutcome::Saved(signal)
                }),
        };

        match &result {
            Ok(_) => {
                if self.metrics_enabled {
                    metrics::record_submit(mode, "success");
                }
                self.reset();
            }
            Err(e) => {
                tracing::warn!(mode, error = %e, "Route submit failed, draft kept");
                if self.metrics_enabled {
                    metrics::record_submit(mode, "failure");
                }
            }
        }
        result
    }

    fn submit_deferred(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let route = self.finalize()?;
        let key = route.key();
        if let SubmitMode::Deferred(on_add_route) = &mut self.mode {
            on_add_route(route);
        }
        tracing::info!(route = %key, "Route handed to caller");
        Ok(SubmitOutcome::Deferred { key })
    }

    async fn submit_immediate<G: GatewayService>(
        &self,
        gateway: &G,
        api_name: String,
        version: String,
    ) -> Result<(NavigationSignal, u64), SubmitError> {
        let route = self.finalize()?;

        let api = gateway
            .fetch_api(&api_name)
            .await?
            .into_iter()
            .find(|a| a.version == version)
            .ok_or_else(|| SubmitError::ApiNotFound {
                name: api_name.clone(),
                version: version.clone(),
            })?;

        if let Some(loaded) = self.loaded_revision {
            if loaded != api.revision {
                tracing::warn!(
                    api = %api_name,
                    version = %version,
                    loaded_revision = loaded,
                    current_revision = api.revision,
                    "API changed since the editor loaded it; saving over the newer revision"
                );
            }
        }

        if self.settings.reject_conflicting_routes {
            if let Some(existing) =
                reconcile::find_conflict(&api.routes, &route, self.original_key.as_ref())
            {
                return Err(SubmitError::Conflict(existing.key()));
            }
        }

        let new_key = route.key();
        let original = self.original_key.clone().unwrap_or_else(|| new_key.clone());
        let api_id = api.id.clone();
        let mut updated = api;
        updated.routes = reconcile::merge(std::mem::take(&mut updated.routes), route, &original);

        let saved = gateway.save_api(&api_id, &version, updated).await?;
        tracing::info!(
            api = %api_name,
            version = %version,
            route = %new_key,
            replaced = %original,
            revision = saved.revision,
            "Route saved"
        );

        let signal = NavigationSignal {
            api_name,
            version,
            path: new_key.path,
            method: new_key.method,
            reload_token: Uuid::new_v4(),
        };
        Ok((signal, saved.revision))
    }
}
