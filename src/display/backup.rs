//! Backup scheduling status formatting

use chrono::{DateTime, Utc};

use crate::backup::{BackupRequirement, TriggerOutcome};

/// Snapshot of the scheduling state for display
#[derive(Debug, Clone)]
pub struct BackupStatus {
    pub auto_backup_enabled: bool,
    pub auto_restore_enabled: bool,
    pub target: Option<String>,
    pub password_protected: Option<bool>,
    pub requirement: BackupRequirement,
    pub backup_trigger: bool,
    pub restore_trigger: bool,
    pub restore_completed: bool,
    pub most_recent_backup_modified_at: i64,
}

/// Format the scheduling state as a status report
pub fn format_backup_status(status: &BackupStatus) -> String {
    let on_off = |b: bool| if b { "on" } else { "off" };
    let protected = match status.password_protected {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unknown",
    };

    let mut output = String::new();
    output.push_str("Backup Status\n");
    output.push_str("=============\n");
    output.push_str(&format!("Auto backup:        {}\n", on_off(status.auto_backup_enabled)));
    output.push_str(&format!("Auto restore:       {}\n", on_off(status.auto_restore_enabled)));
    output.push_str(&format!(
        "Target:             {}\n",
        status.target.as_deref().unwrap_or("(none)")
    ));
    output.push_str(&format!("Password protected: {}\n", protected));
    output.push_str(&format!("Requirement:        {}\n", status.requirement));
    output.push_str(&format!(
        "Pending triggers:   {}\n",
        pending_triggers(status.backup_trigger, status.restore_trigger)
    ));
    output.push_str(&format!(
        "Restore completed:  {}\n",
        if status.restore_completed { "yes" } else { "no" }
    ));
    output.push_str(&format!(
        "Last backup:        {}\n",
        format_modified_at(status.most_recent_backup_modified_at)
    ));
    output
}

fn pending_triggers(backup: bool, restore: bool) -> &'static str {
    match (backup, restore) {
        (true, true) => "backup, restore",
        (true, false) => "backup",
        (false, true) => "restore",
        (false, false) => "none",
    }
}

/// Format an epoch-millisecond timestamp, `never` for zero
pub fn format_modified_at(millis: i64) -> String {
    if millis == 0 {
        return "never".to_string();
    }
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{} (out of range)", millis),
    }
}

pub fn format_trigger_outcome(outcome: &TriggerOutcome) -> String {
    match outcome {
        TriggerOutcome::NotTriggered => "No trigger pending.".to_string(),
        TriggerOutcome::Skipped(reason) => {
            format!("Trigger cleared without running ({:?}).", reason)
        }
        TriggerOutcome::Completed => "Job completed; trigger cleared.".to_string(),
        TriggerOutcome::JobFailed(e) => format!("Job failed: {}; trigger cleared.", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status() -> BackupStatus {
        BackupStatus {
            auto_backup_enabled: true,
            auto_restore_enabled: false,
            target: None,
            password_protected: None,
            requirement: BackupRequirement::WhenPossible,
            backup_trigger: true,
            restore_trigger: false,
            restore_completed: false,
            most_recent_backup_modified_at: 0,
        }
    }

    #[test]
    fn test_status_report() {
        let report = format_backup_status(&status());
        assert!(report.contains("Auto backup:        on"));
        assert!(report.contains("Target:             (none)"));
        assert!(report.contains("Password protected: unknown"));
        assert!(report.contains("Requirement:        when-possible"));
        assert!(report.contains("Pending triggers:   backup\n"));
        assert!(report.contains("Last backup:        never"));
    }

    #[test]
    fn test_modified_at_format() {
        assert_eq!(format_modified_at(0), "never");
        assert_eq!(format_modified_at(86_400_000), "1970-01-02 00:00:00 UTC");
    }
}
