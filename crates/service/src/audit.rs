use std::sync::Arc;

use common::audit::{category, AuditLevel, AuditLog, TracingAuditLog};
use tracing::error;

use crate::outcome::ServiceResult;

/// Writes operation outcomes to the audit sink under `"<Action> - <Level>"`.
#[derive(Clone)]
pub struct Auditor {
    sink: Arc<dyn AuditLog>,
}

impl Default for Auditor {
    fn default() -> Self { Self::new(Arc::new(TracingAuditLog)) }
}

impl Auditor {
    pub fn new(sink: Arc<dyn AuditLog>) -> Self { Self { sink } }

    pub fn access(&self, action: &str, message: &str) { self.emit(action, AuditLevel::Access, message) }

    pub fn success(&self, action: &str, message: &str) { self.emit(action, AuditLevel::Success, message) }

    pub fn warning(&self, action: &str, message: &str) { self.emit(action, AuditLevel::Warning, message) }

    /// Record a failed result; passes the result through unchanged.
    pub fn settle<T>(&self, action: &str, res: ServiceResult<T>) -> ServiceResult<T> {
        if let Err(e) = &res {
            error!(action, error = %e, "operation failed");
            self.emit(action, AuditLevel::Error, &e.to_string());
        }
        res
    }

    fn emit(&self, action: &str, level: AuditLevel, message: &str) {
        self.sink.record(&category(action, level), message);
    }
}
