//! Automatic backup and restore scheduling
//!
//! # Architecture
//!
//! - `BackupSchedulingState`: typed properties over the backup keys, one
//!   store operation per getter/setter and no hidden side effects
//! - `TriggerConsumer`: the scheduler side of the one-shot trigger flags,
//!   which runs a job and then clears the flag it acted on
//!
//! Producers (UI toggles, data-change hooks) raise a trigger. The consumer
//! observes it, runs the job, records the outcome and clears it. Clearing
//! is the consumer's job; a trigger that is read and left set fires again
//! on every pass.
//!
//! # Example
//!
//! ```rust,ignore
//! use authenticator::backup::{BackupSchedulingState, TriggerConsumer};
//!
//! let consumer = TriggerConsumer::new(BackupSchedulingState::new(&store));
//! let outcome = consumer.consume_backup_trigger(|target| write_backup(&target.uri))?;
//! ```

mod scheduler;
mod state;

pub use scheduler::{BackupTarget, SkipReason, TriggerConsumer, TriggerOutcome};
pub use state::{BackupRequirement, BackupSchedulingState};
