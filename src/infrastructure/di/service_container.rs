//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::ProcedureService;
use crate::config::Settings;
use crate::infrastructure::traits::{HttpClient, RealHttpClient};
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// HTTP abstraction
    pub http: Arc<dyn HttpClient>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let http = RealHttpClient::new(&settings)?;
        Ok(Self::with_deps(settings, Arc::new(http)))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, http: Arc<dyn HttpClient>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, http }
    }

    /// Procedure catalogue service.
    pub fn procedure_service(&self) -> ProcedureService {
        ProcedureService::new(self.http.clone(), self.settings.clone())
    }
}
