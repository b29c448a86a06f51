pub mod api;
pub mod model;
pub mod resolver;
pub mod service;

use std::sync::Arc;

use axum::Router;
use formbase_core::Module;

use service::FormsService;

/// Forms Module — form schemas, dynamic fields, column preferences, and
/// render-plan resolution.
pub struct FormsModule {
    service: Arc<FormsService>,
}

impl FormsModule {
    pub fn new(service: FormsService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Module for FormsModule {
    fn name(&self) -> &str {
        "forms"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
