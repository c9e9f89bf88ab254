//! Collaborator services the editor reads from and writes to.
//!
//! # Responsibilities
//! - Define the API-definition and component-catalog operations the
//!   editor consumes
//! - Provide an in-process store implementing them
//!
//! # Design Decisions
//! - Whole-document writes: `save_api` replaces the API definition
//! - No locking or compare-and-swap; the last write wins
//! - Transport is the implementor's concern

use std::future::Future;

use thiserror::Error;

use crate::model::{Api, ComponentCatalog};

pub mod memory;

pub use memory::InMemoryGateway;

/// Errors reported by a gateway implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The requested API or version does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The write was refused.
    #[error("write rejected: {0}")]
    Rejected(String),

    /// The service could not be reached.
    #[error("gateway unavailable: {0}")]
    Unavailable(String),
}

/// API-definition and component-catalog operations.
pub trait GatewayService: Send + Sync {
    /// Every version of the API called `name`.
    fn fetch_api(&self, name: &str) -> impl Future<Output = Result<Vec<Api>, GatewayError>> + Send;

    /// One version of the API called `name`.
    fn fetch_api_version(
        &self,
        name: &str,
        version: &str,
    ) -> impl Future<Output = Result<Api, GatewayError>> + Send;

    fn fetch_component_catalog(
        &self,
    ) -> impl Future<Output = Result<ComponentCatalog, GatewayError>> + Send;

    /// Replace the stored API definition `id` at `version` with `api`.
    fn save_api(
        &self,
        id: &str,
        version: &str,
        api: Api,
    ) -> impl Future<Output = Result<Api, GatewayError>> + Send;
}
