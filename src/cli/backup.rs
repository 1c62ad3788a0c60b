//! Backup scheduling CLI commands

use clap::Subcommand;

use crate::backup::{BackupRequirement, BackupSchedulingState, TriggerConsumer, TriggerOutcome};
use crate::display::{
    format_backup_status, format_modified_at, format_trigger_outcome, BackupStatus,
};
use crate::error::{AuthStateError, AuthStateResult};
use crate::preferences::{keys, TypedSettingsStore, UriRef};
use crate::storage::PreferenceBackend;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Show the scheduling state
    Status,

    /// Turn automatic backup or restore on or off
    Enable {
        /// Which job to toggle
        #[arg(value_parser = ["backup", "restore"])]
        job: String,
        /// Whether the job is enabled
        #[arg(action = clap::ArgAction::Set, default_value = "true")]
        enabled: bool,
    },

    /// Request an automatic backup on the next scheduler pass
    Trigger,

    /// Request an automatic restore on the next scheduler pass
    #[command(name = "trigger-restore")]
    TriggerRestore,

    /// Set the current backup requirement
    Requirement {
        /// not-required, when-possible or required
        requirement: String,
    },

    /// Set or clear the backup target location
    Target {
        /// Target URI
        uri: Option<String>,
        /// Remove the configured target
        #[arg(long, conflicts_with = "uri")]
        clear: bool,
    },

    /// Set whether the backup is password protected
    Protected {
        /// true, false or unknown
        state: String,
    },

    /// Record a finished backup, consuming a pending trigger if any
    Completed {
        /// Modification time of the backup file (epoch milliseconds)
        modified_at: i64,
    },
}

/// Handle a backup command
pub fn handle_backup_command<B: PreferenceBackend>(
    store: &TypedSettingsStore<B>,
    cmd: BackupCommands,
) -> AuthStateResult<()> {
    let state = BackupSchedulingState::new(store);

    match cmd {
        BackupCommands::Status => {
            println!("{}", format_backup_status(&snapshot(&state)?));
        }
        BackupCommands::Enable { job, enabled } => {
            if job == "restore" {
                state.set_auto_restore_enabled(enabled)?;
            } else {
                state.set_auto_backup_enabled(enabled)?;
            }
            println!(
                "Automatic {} {}",
                job,
                if enabled { "enabled" } else { "disabled" }
            );
        }
        BackupCommands::Trigger => {
            TriggerConsumer::new(state).request_backup()?;
            println!("Backup requested.");
        }
        BackupCommands::TriggerRestore => {
            TriggerConsumer::new(state).request_restore()?;
            println!("Restore requested.");
        }
        BackupCommands::Requirement { requirement } => {
            let requirement: BackupRequirement = requirement.parse()?;
            state.set_backup_required(requirement)?;
            println!("Backup requirement set to {}", requirement);
        }
        BackupCommands::Target { uri, clear } => match (uri, clear) {
            (_, true) => {
                state.set_auto_backup_uri(None)?;
                println!("Backup target cleared.");
            }
            (Some(raw), false) => {
                let uri = UriRef::parse(&raw).map_err(|reason| AuthStateError::MalformedReference {
                    key: keys::AUTO_BACKUP_URI.to_string(),
                    value: raw.clone(),
                    reason,
                })?;
                state.set_auto_backup_uri(Some(&uri))?;
                println!("Backup target set to {}", uri);
            }
            (None, false) => {
                return Err(AuthStateError::Config(
                    "Provide a target URI or --clear".into(),
                ));
            }
        },
        BackupCommands::Protected { state: raw } => {
            let value = match raw.to_lowercase().as_str() {
                "true" | "yes" => Some(true),
                "false" | "no" => Some(false),
                "unknown" | "none" => None,
                other => {
                    return Err(AuthStateError::Config(format!(
                        "'{}' is not one of true, false, unknown",
                        other
                    )))
                }
            };
            state.set_auto_backup_password_protected(value)?;
            println!("Password protection: {}", raw.to_lowercase());
        }
        BackupCommands::Completed { modified_at } => {
            let consumer = TriggerConsumer::new(state);
            let outcome = consumer
                .consume_backup_trigger(|_| Ok::<_, std::convert::Infallible>(modified_at))?;
            // A skipped trigger still means a backup exists at `modified_at`.
            if outcome != TriggerOutcome::Completed {
                consumer.record_backup(modified_at)?;
            }
            println!("{}", format_trigger_outcome(&outcome));
            println!(
                "Last backup: {}",
                format_modified_at(consumer.state().most_recent_backup_modified_at()?)
            );
        }
    }

    Ok(())
}

/// Read every scheduling property
pub fn snapshot<B: PreferenceBackend>(
    state: &BackupSchedulingState<'_, B>,
) -> AuthStateResult<BackupStatus> {
    Ok(BackupStatus {
        auto_backup_enabled: state.auto_backup_enabled()?,
        auto_restore_enabled: state.auto_restore_enabled()?,
        target: state.auto_backup_uri()?.map(|u| u.to_string()),
        password_protected: state.auto_backup_password_protected()?,
        requirement: state.backup_required()?,
        backup_trigger: state.auto_backup_trigger()?,
        restore_trigger: state.auto_restore_trigger()?,
        restore_completed: state.auto_restore_completed()?,
        most_recent_backup_modified_at: state.most_recent_backup_modified_at()?,
    })
}
