use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use authenticator::audit::AuditLogger;
use authenticator::cli::{
    handle_audit_command, handle_backup_command, handle_category_command, handle_prefs_command,
};
use authenticator::config::AppPaths;
use authenticator::preferences::TypedSettingsStore;
use authenticator::storage::JsonFileBackend;

#[derive(Parser)]
#[command(
    name = "authstate",
    version,
    about = "Inspect and edit authenticator preferences and backup scheduling state",
    long_about = "authstate reads and writes the durable preference store shared by the \
                  authenticator and its wearable companion, shows the automatic backup \
                  scheduling state, and compares category lists the way the sync merge does."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Raw preference access
    #[command(subcommand, alias = "pref")]
    Prefs(authenticator::cli::PrefsCommands),

    /// Backup scheduling state
    #[command(subcommand)]
    Backup(authenticator::cli::BackupCommands),

    /// Category list comparison
    #[command(subcommand)]
    Category(authenticator::cli::CategoryCommands),

    /// Show recent preference changes
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = AppPaths::new()?;
    paths.ensure_directories()?;
    let audit = AuditLogger::new(paths.audit_log());

    match cli.command {
        Some(Commands::Prefs(cmd)) => {
            handle_prefs_command(&open_store(&paths, &audit)?, cmd)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&open_store(&paths, &audit)?, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&audit, limit)?;
        }
        Some(Commands::Config) => {
            println!("authstate Configuration");
            println!("=======================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Preferences file: {}", paths.preferences_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
        }
        None => {
            println!("authstate - authenticator preference and backup state");
            println!();
            println!("Run 'authstate --help' for usage information.");
        }
    }

    Ok(())
}

fn open_store(
    paths: &AppPaths,
    audit: &AuditLogger,
) -> Result<TypedSettingsStore<JsonFileBackend>> {
    let backend = JsonFileBackend::open(paths.preferences_file())?;
    Ok(TypedSettingsStore::new(backend).with_audit(audit.clone()))
}
