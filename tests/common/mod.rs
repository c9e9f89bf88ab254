//! Shared fixtures for integration tests.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use route_binder::gateway::{GatewayError, GatewayService, InMemoryGateway};
use route_binder::model::catalog::{
    ComponentEntry, ComponentVersionEntry, ExportedFunction, ExportedInterface, FunctionParameter,
    ValueType,
};
use route_binder::model::{Api, Binding, ComponentCatalog, ComponentRef, Method, Route};

pub const API_NAME: &str = "shop";
pub const API_ID: &str = "api-shop";
pub const API_VERSION: &str = "0.1.0";

/// Catalog with a `cart` component: v0 exports nothing, v2 exports `api.checkout`.
pub fn cart_catalog() -> ComponentCatalog {
    let checkout = ExportedFunction {
        name: "checkout".into(),
        parameters: vec![FunctionParameter {
            name: "items".into(),
            typ: ValueType::List {
                inner: Box::new(ValueType::Str),
            },
        }],
    };
    ComponentCatalog::new(vec![ComponentEntry {
        id: "c-cart".into(),
        name: "cart".into(),
        versions: vec![
            ComponentVersionEntry {
                version: 0,
                exports: vec![],
            },
            ComponentVersionEntry {
                version: 2,
                exports: vec![ExportedInterface {
                    name: "api".into(),
                    functions: vec![checkout],
                }],
            },
        ],
    }])
}

pub fn worker_route(method: Method, path: &str) -> Route {
    Route {
        path: path.into(),
        method: Some(method),
        binding: Binding {
            component: Some(ComponentRef {
                name: "cart".into(),
                version: 2,
            }),
            worker_name: "cart-${request.path.id}".into(),
            response: "${ { status: 200u64 } }".into(),
            ..Binding::default()
        },
        cors: None,
        security: None,
    }
}

/// Gateway holding `shop@0.1.0` with GET /a and POST /b.
pub fn seeded_gateway() -> InMemoryGateway {
    let gateway = InMemoryGateway::new(cart_catalog());
    let mut api = Api::new(API_ID, API_NAME, API_VERSION);
    api.routes = vec![worker_route(Method::Get, "/a"), worker_route(Method::Post, "/b")];
    gateway.insert_api(api);
    gateway
}

/// Wraps the in-memory gateway with switchable faults.
#[derive(Clone, Default)]
pub struct FaultyGateway {
    pub inner: InMemoryGateway,
    fail_reads: Arc<AtomicBool>,
    fail_catalog: Arc<AtomicBool>,
    reject_writes: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl FaultyGateway {
    pub fn new(inner: InMemoryGateway) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, on: bool) {
        self.fail_reads.store(on, Ordering::SeqCst);
    }

    pub fn fail_catalog(&self, on: bool) {
        self.fail_catalog.store(on, Ordering::SeqCst);
    }

    pub fn reject_writes(&self, on: bool) {
        self.reject_writes.store(on, Ordering::SeqCst);
    }
}

impl GatewayService for FaultyGateway {
    async fn fetch_api(&self, name: &str) -> Result<Vec<Api>, GatewayError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(GatewayError::Unavailable("injected read failure".into()));
        }
        self.inner.fetch_api(name).await
    }

    async fn fetch_api_version(&self, name: &str, version: &str) -> Result<Api, GatewayError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(GatewayError::Unavailable("injected read failure".into()));
        }
        self.inner.fetch_api_version(name, version).await
    }

    async fn fetch_component_catalog(&self) -> Result<ComponentCatalog, GatewayError> {
        if self.fail_catalog.load(Ordering::SeqCst) {
            return Err(GatewayError::Unavailable("injected catalog failure".into()));
        }
        self.inner.fetch_component_catalog().await
    }

    async fn save_api(&self, id: &str, version: &str, api: Api) -> Result<Api, GatewayError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(GatewayError::Rejected("injected write rejection".into()));
        }
        self.inner.save_api(id, version, api).await
    }
}

/// Collects formatted log output for assertions.
///
/// Install with `tracing::subscriber::set_default(capture.subscriber())`;
/// the guard scopes it to the current thread.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl LogCapture {
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        let writer = self.clone();
        tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.contents().matches(needle).count()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
