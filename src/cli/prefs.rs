//! Preference CLI commands
//!
//! Raw access to the key-value store, for inspection and repair.

use clap::{Subcommand, ValueEnum};

use crate::display::{format_preference_table, format_raw_value};
use crate::error::{AuthStateError, AuthStateResult};
use crate::preferences::TypedSettingsStore;
use crate::storage::{PreferenceBackend, PrimitiveValue};

/// Primitive type of a value given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    Bool,
    String,
    Int,
}

/// Preference subcommands
#[derive(Subcommand)]
pub enum PrefsCommands {
    /// List every stored key
    List,

    /// Show the raw value of a key
    Get {
        key: String,
    },

    /// Store a raw value
    Set {
        key: String,
        value: String,
        /// Primitive type to store the value as
        #[arg(short = 't', long = "type", value_enum, default_value = "string")]
        kind: ValueKind,
    },

    /// Remove a key so it reads as its default
    Clear {
        key: String,
    },
}

/// Handle a preference command
pub fn handle_prefs_command<B: PreferenceBackend>(
    store: &TypedSettingsStore<B>,
    cmd: PrefsCommands,
) -> AuthStateResult<()> {
    match cmd {
        PrefsCommands::List => {
            println!("{}", format_preference_table(&store.entries()?));
        }
        PrefsCommands::Get { key } => {
            println!("{}", format_raw_value(&key, store.get_raw(&key)?.as_ref()));
        }
        PrefsCommands::Set { key, value, kind } => {
            let value = parse_value(&value, kind)?;
            store.put_raw(&key, value.clone())?;
            println!("{}", format_raw_value(&key, Some(&value)));
        }
        PrefsCommands::Clear { key } => {
            store.remove(&key)?;
            println!("Cleared {}", key);
        }
    }

    Ok(())
}

/// Parse a command-line value into a primitive
pub fn parse_value(raw: &str, kind: ValueKind) -> AuthStateResult<PrimitiveValue> {
    match kind {
        ValueKind::String => Ok(PrimitiveValue::from(raw)),
        ValueKind::Bool => raw.parse::<bool>().map(PrimitiveValue::Bool).map_err(|_| {
            AuthStateError::Config(format!("'{}' is not a boolean (use true or false)", raw))
        }),
        ValueKind::Int => raw
            .parse::<i64>()
            .map(PrimitiveValue::Long)
            .map_err(|e| AuthStateError::Config(format!("'{}' is not an integer: {}", raw, e))),
    }
}
