//! CLI module for phonebookd
//!
//! Provides the command-line interface for the phonebook service.

pub mod serve;

use clap::{Parser, Subcommand};

/// phonebookd - Audited, role-gated phonebook record service
#[derive(Parser, Debug)]
#[command(name = "phonebookd")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    PHONEBOOKD_HOST                Bind address (default: 0.0.0.0)
    PHONEBOOKD_PORT                Listen port (default: 8000)
    PHONEBOOKD_LOG_LEVEL           Log level (default: info)
    PHONEBOOKD_LOG_DIR             Enable daily-rotated file logs in this directory
    PHONEBOOKD_DATABASE_URL        Database URL (default: sqlite:phonebook.db)
    PHONEBOOKD_JWT_SECRET          JWT signing key (ephemeral key generated if not set)
    PHONEBOOKD_TOKEN_TTL_MINUTES   Token lifetime in minutes (default: 30)
    PHONEBOOKD_AUDIT_LOG           Audit log file (default: audit.log)
    PHONEBOOKD_READ_PASSWORD       First-boot password for the read-only user
    PHONEBOOKD_RW_PASSWORD         First-boot password for the read-write user
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the phonebook server
    Serve(serve::ServeArgs),
}
