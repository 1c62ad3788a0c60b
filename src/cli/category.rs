//! Category sync CLI commands
//!
//! Compare or merge two category lists exported as JSON arrays of
//! `{"categoryId", "name", "ranking"}` objects.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::display::format_category_diff;
use crate::error::{AuthStateError, AuthStateResult};
use crate::models::CategoryRecord;
use crate::services::{merge, CategoryDiff};
use crate::storage::write_json_atomic;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Show records added and removed between two lists
    Diff {
        /// Local (phone) list
        local: PathBuf,
        /// Remote (wearable) list
        remote: PathBuf,
    },

    /// Print the merged list as JSON
    Merge {
        local: PathBuf,
        remote: PathBuf,
    },

    /// Append a new category with a generated id to a list file
    Add {
        /// List to append to; created if missing
        list: PathBuf,
        /// Display name
        name: String,
        /// Position in the list (defaults to after the last record)
        #[arg(short, long)]
        ranking: Option<i32>,
    },
}

/// Handle a category command
pub fn handle_category_command(cmd: CategoryCommands) -> AuthStateResult<()> {
    match cmd {
        CategoryCommands::Diff { local, remote } => {
            let diff = CategoryDiff::between(&load_records(&local)?, &load_records(&remote)?);
            println!("{}", format_category_diff(&diff));
        }
        CategoryCommands::Merge { local, remote } => {
            let merged = merge(&load_records(&local)?, &load_records(&remote)?);
            println!("{}", serde_json::to_string_pretty(&merged)?);
        }
        CategoryCommands::Add {
            list,
            name,
            ranking,
        } => {
            let record = add_record(&list, &name, ranking)?;
            println!("Added {}", record);
        }
    }

    Ok(())
}

/// Load a JSON array of category records
pub fn load_records(path: &Path) -> AuthStateResult<Vec<CategoryRecord>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AuthStateError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    serde_json::from_str(&contents)
        .map_err(|e| AuthStateError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Append a freshly identified record to the list at `path`
pub fn add_record(
    path: &Path,
    name: &str,
    ranking: Option<i32>,
) -> AuthStateResult<CategoryRecord> {
    let mut records = if path.exists() {
        load_records(path)?
    } else {
        Vec::new()
    };

    let ranking = ranking.unwrap_or_else(|| {
        records
            .iter()
            .map(|r| r.ranking)
            .max()
            .map_or(0, |max| max.saturating_add(1))
    });
    let record = CategoryRecord::create(name, ranking);
    records.push(record.clone());

    write_json_atomic(path, &records).map_err(AuthStateError::Io)?;
    Ok(record)
}
