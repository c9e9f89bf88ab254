//! In-process gateway store.

use std::sync::Arc;

use arc_swap::ArcSwap;
use dashmap::DashMap;

use crate::gateway::{GatewayError, GatewayService};
use crate::model::{Api, ComponentCatalog};

/// Thread-safe store of API definitions plus the current catalog.
///
/// Keyed by (api id, version). Each accepted save bumps the stored
/// revision by one.
#[derive(Clone, Default)]
pub struct InMemoryGateway {
    apis: Arc<DashMap<(String, String), Api>>,
    catalog: Arc<ArcSwap<ComponentCatalog>>,
}

impl InMemoryGateway {
    pub fn new(catalog: ComponentCatalog) -> Self {
        Self {
            apis: Arc::new(DashMap::new()),
            catalog: Arc::new(ArcSwap::from_pointee(catalog)),
        }
    }

    /// Insert or overwrite an API definition without touching its revision.
    pub fn insert_api(&self, api: Api) {
        self.apis.insert((api.id.clone(), api.version.clone()), api);
    }

    /// Replace the catalog snapshot served to new readers.
    pub fn publish_catalog(&self, catalog: ComponentCatalog) {
        self.catalog.store(Arc::new(catalog));
        tracing::debug!("Component catalog published");
    }

    pub fn api(&self, id: &str, version: &str) -> Option<Api> {
        self.apis
            .get(&(id.to_string(), version.to_string()))
            .map(|r| r.value().clone())
    }

    fn apis_named(&self, name: &str) -> Vec<Api> {
        let mut apis: Vec<Api> = self
            .apis
            .iter()
            .filter(|r| r.value().name == name)
            .map(|r| r.value().clone())
            .collect();
        apis.sort_by(|a, b| a.version.cmp(&b.version));
        apis
    }
}

impl GatewayService for InMemoryGateway {
    async fn fetch_api(&self, name: &str) -> Result<Vec<Api>, GatewayError> {
        Ok(self.apis_named(name))
    }

    async fn fetch_api_version(&self, name: &str, version: &str) -> Result<Api, GatewayError> {
        self.apis_named(name)
            .into_iter()
            .find(|a| a.version == version)
            .ok_or_else(|| GatewayError::NotFound(format!("API '{}' version '{}'", name, version)))
    }

    async fn fetch_component_catalog(&self) -> Result<ComponentCatalog, GatewayError> {
        Ok(ComponentCatalog::clone(&self.catalog.load()))
    }

    async fn save_api(&self, id: &str, version: &str, mut api: Api) -> Result<Api, GatewayError> {
        let key = (id.to_string(), version.to_string());
        let mut stored = self
            .apis
            .get_mut(&key)
            .ok_or_else(|| GatewayError::NotFound(format!("API id '{}' version '{}'", id, version)))?;

        api.id = id.to_string();
        api.version = version.to_string();
        api.revision = stored.revision + 1;
        *stored = api.clone();

        tracing::debug!(
            api = %api.name,
            version = %version,
            revision = api.revision,
            routes = api.routes.len(),
            "API definition saved"
        );
        Ok(api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_by_name_and_version() {
        let gateway = InMemoryGateway::default();
        gateway.insert_api(Api::new("id-1", "shop", "0.2.0"));
        gateway.insert_api(Api::new("id-1", "shop", "0.1.0"));
        gateway.insert_api(Api::new("id-2", "other", "0.1.0"));

        let versions = gateway.fetch_api("shop").await.unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].version, "0.1.0");

        let api = gateway.fetch_api_version("shop", "0.2.0").await.unwrap();
        assert_eq!(api.id, "id-1");

        let missing = gateway.fetch_api_version("shop", "9.9.9").await;
        assert!(matches!(missing, Err(GatewayError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_save_bumps_revision() {
        let gateway = InMemoryGateway::default();
        gateway.insert_api(Api::new("id-1", "shop", "0.1.0"));

        let api = gateway.fetch_api_version("shop", "0.1.0").await.unwrap();
        let saved = gateway.save_api("id-1", "0.1.0", api.clone()).await.unwrap();
        assert_eq!(saved.revision, 1);

        // A second writer holding the stale copy still wins.
        let saved = gateway.save_api("id-1", "0.1.0", api).await.unwrap();
        assert_eq!(saved.revision, 2);
        assert_eq!(gateway.api("id-1", "0.1.0").unwrap().revision, 2);
    }

    #[tokio::test]
    async fn test_save_unknown_api_is_not_found() {
        let gateway = InMemoryGateway::default();
        let result = gateway
            .save_api("nope", "0.1.0", Api::new("nope", "x", "0.1.0"))
            .await;
        assert!(matches!(result, Err(GatewayError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_publish_catalog() {
        let gateway = InMemoryGateway::new(ComponentCatalog::default());
        assert!(gateway.fetch_component_catalog().await.unwrap().components.is_empty());

        let mut catalog = ComponentCatalog::default();
        catalog.components.push(crate::model::ComponentEntry {
            id: "c".into(),
            name: "cart".into(),
            versions: vec![],
        });
        gateway.publish_catalog(catalog);
        assert_eq!(gateway.fetch_component_catalog().await.unwrap().components.len(), 1);
    }
}
