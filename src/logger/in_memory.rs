use crate::logger::AuditLogger;
use crate::models::AuditLogEntry;

pub struct InMemoryAuditLogger {
    entries: Vec<AuditLogEntry>,
}

impl InMemoryAuditLogger {
    pub fn new() -> Self {
        InMemoryAuditLogger {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[AuditLogEntry] {
        &self.entries
    }
}

impl Default for InMemoryAuditLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditLogger for InMemoryAuditLogger {
    fn log(&mut self, entry: AuditLogEntry) {
        self.entries.push(entry);
    }
}
