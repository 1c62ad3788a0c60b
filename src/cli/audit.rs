//! Audit log CLI command

use crate::audit::AuditLogger;
use crate::error::AuthStateResult;

/// Print the most recent `limit` audit entries
pub fn handle_audit_command(logger: &AuditLogger, limit: usize) -> AuthStateResult<()> {
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No preference changes recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
