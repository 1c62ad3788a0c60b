//! Trigger consumption for automatic backup and restore
//!
//! Producers set a trigger flag; `TriggerConsumer` is the one party that
//! reads it, runs the job, records the result and clears the flag. A clear
//! that fails to commit is returned as an error, never as a finished run,
//! so scheduling state cannot drift from what actually happened.

use std::fmt::Display;

use tracing::{info, warn};

use crate::error::AuthStateResult;
use crate::preferences::UriRef;
use crate::storage::PreferenceBackend;

use super::state::{BackupRequirement, BackupSchedulingState};

/// Where and how a scheduled job should run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupTarget {
    pub uri: UriRef,
    /// `None` when it is not yet known whether the backup is encrypted
    pub password_protected: Option<bool>,
}

/// Why a raised trigger was consumed without running its job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The matching auto-backup/auto-restore toggle is off
    Disabled,
    /// No backup location is configured
    NoTarget,
}

/// Result of one consumption attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The trigger was not raised; nothing was touched
    NotTriggered,
    /// The trigger was cleared without running the job
    Skipped(SkipReason),
    /// The job succeeded, its result was recorded and the trigger cleared
    Completed,
    /// The job failed; the trigger was cleared and the failure is reported
    JobFailed(String),
}

/// Consumes backup and restore triggers
pub struct TriggerConsumer<'a, B> {
    state: BackupSchedulingState<'a, B>,
}

impl<'a, B: PreferenceBackend> TriggerConsumer<'a, B> {
    pub fn new(state: BackupSchedulingState<'a, B>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &BackupSchedulingState<'a, B> {
        &self.state
    }

    /// Ask the consumer to run a backup on its next pass
    pub fn request_backup(&self) -> AuthStateResult<()> {
        self.state.set_auto_backup_trigger(true)
    }

    /// Ask the consumer to run a restore on its next pass
    pub fn request_restore(&self) -> AuthStateResult<()> {
        self.state.set_auto_restore_trigger(true)
    }

    /// Record a successful backup whose file was last modified at `modified_at`
    ///
    /// The stored timestamp never moves backwards, and the backup
    /// requirement drops to `NotRequired`.
    pub fn record_backup(&self, modified_at: i64) -> AuthStateResult<()> {
        if modified_at > self.state.most_recent_backup_modified_at()? {
            self.state.set_most_recent_backup_modified_at(modified_at)?;
        }
        self.state.set_backup_required(BackupRequirement::NotRequired)
    }

    /// Run `job` if the backup trigger is raised
    ///
    /// `job` returns the modification time (epoch ms) of the file it wrote.
    pub fn consume_backup_trigger<F, E>(&self, job: F) -> AuthStateResult<TriggerOutcome>
    where
        F: FnOnce(&BackupTarget) -> Result<i64, E>,
        E: Display,
    {
        if !self.state.auto_backup_trigger()? {
            return Ok(TriggerOutcome::NotTriggered);
        }

        let outcome = match self.target(self.state.auto_backup_enabled()?)? {
            Err(reason) => TriggerOutcome::Skipped(reason),
            Ok(target) => match job(&target) {
                Ok(modified_at) => {
                    self.record_backup(modified_at)?;
                    TriggerOutcome::Completed
                }
                Err(e) => {
                    warn!(error = %e, "automatic backup failed");
                    TriggerOutcome::JobFailed(e.to_string())
                }
            },
        };

        self.state.set_auto_backup_trigger(false)?;
        info!(?outcome, "consumed backup trigger");
        Ok(outcome)
    }

    /// Run `job` if the restore trigger is raised
    ///
    /// A successful restore sets the sticky restore-completed flag.
    pub fn consume_restore_trigger<F, E>(&self, job: F) -> AuthStateResult<TriggerOutcome>
    where
        F: FnOnce(&BackupTarget) -> Result<(), E>,
        E: Display,
    {
        if !self.state.auto_restore_trigger()? {
            return Ok(TriggerOutcome::NotTriggered);
        }

        let outcome = match self.target(self.state.auto_restore_enabled()?)? {
            Err(reason) => TriggerOutcome::Skipped(reason),
            Ok(target) => match job(&target) {
                Ok(()) => {
                    self.state.set_auto_restore_completed(true)?;
                    TriggerOutcome::Completed
                }
                Err(e) => {
                    warn!(error = %e, "automatic restore failed");
                    TriggerOutcome::JobFailed(e.to_string())
                }
            },
        };

        self.state.set_auto_restore_trigger(false)?;
        info!(?outcome, "consumed restore trigger");
        Ok(outcome)
    }

    fn target(&self, enabled: bool) -> AuthStateResult<Result<BackupTarget, SkipReason>> {
        if !enabled {
            return Ok(Err(SkipReason::Disabled));
        }

        let Some(uri) = self.state.auto_backup_uri()? else {
            return Ok(Err(SkipReason::NoTarget));
        };

        Ok(Ok(BackupTarget {
            uri,
            password_protected: self.state.auto_backup_password_protected()?,
        }))
    }
}
