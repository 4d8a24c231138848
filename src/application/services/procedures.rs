//! Procedure catalogue service
//!
//! Fetches the procedure list from the configured endpoint and prints the
//! names. Failures are reported on the error stream and never propagated.

use std::io::Write;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::Procedure;
use crate::infrastructure::traits::HttpClient;

/// Service for reading the remote procedure catalogue.
pub struct ProcedureService {
    http: Arc<dyn HttpClient>,
    settings: Arc<Settings>,
}

impl ProcedureService {
    /// Create a new procedure service.
    pub fn new(http: Arc<dyn HttpClient>, settings: Arc<Settings>) -> Self {
        Self { http, settings }
    }

    /// Fetch all procedures, in response order.
    ///
    /// # Errors
    /// - `RequestFailed` if the endpoint answers with a non-2xx status
    /// - `OperationFailed` if the request cannot be completed
    /// - `Domain(InvalidRecord)` if the body is not a list of procedures
    #[instrument(skip(self), fields(url = %self.settings.endpoint))]
    pub fn fetch(&self) -> ApplicationResult<Vec<Procedure>> {
        let url = self.settings.endpoint.as_str();
        let response = self.http.get(url).with_url_context("Failed to get", url)?;

        if !response.is_success() {
            return Err(ApplicationError::RequestFailed {
                url: url.to_string(),
                status: response.status,
            });
        }

        let procedures = Procedure::parse_list(&response.body)?;
        debug!("fetch: {} procedures", procedures.len());
        Ok(procedures)
    }

    /// Write every procedure name to `out`, one per line.
    ///
    /// On failure a single diagnostic line goes to `err` and nothing is
    /// written to `out`. Always returns normally.
    pub fn print_names<W, E>(&self, out: &mut W, err: &mut E)
    where
        W: Write + ?Sized,
        E: Write + ?Sized,
    {
        match self.fetch() {
            Ok(procedures) => {
                for procedure in &procedures {
                    if let Err(e) = writeln!(out, "{}", procedure.name) {
                        warn!("print_names: stdout write failed: {}", e);
                        return;
                    }
                }
            }
            Err(e) => {
                warn!("print_names: {}", e);
                if let Err(write_err) = writeln!(err, "{}", e) {
                    warn!("print_names: stderr write failed: {}", write_err);
                }
            }
        }
    }
}
