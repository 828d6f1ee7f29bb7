//! Command line arguments and subcommand dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use farm_client::{
    load_config, BatchId, Config, Controller, ExpenseForm, FeedingForm, LoginForm, MortalityForm,
    RecordKind, RegisterForm,
};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "farm")]
#[command(about = "Farm management client")]
#[command(version)]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Where the access token is kept (overrides config file)
    #[arg(long)]
    pub session_file: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Command,
}

// Form fields default to empty so missing values reach the same checks the
// browser forms go through.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create an account
    Register {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Log in and remember the access token
    Login {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Forget the access token
    Logout,
    /// List your batches
    Batches,
    /// Add a feeding record to a batch
    Feeding {
        batch_id: BatchId,
        #[arg(long, default_value = "")]
        bags: String,
        #[arg(long, default_value = "")]
        amount: String,
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Add an expense record to a batch
    Expense {
        batch_id: BatchId,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        amount: String,
    },
    /// Report deaths in a batch
    Mortality {
        batch_id: BatchId,
        #[arg(long, default_value = "")]
        count: String,
        #[arg(long)]
        reason: Option<String>,
    },
}

impl Args {
    /// Config file (or defaults) with command line overrides applied
    pub fn resolve_config(&self) -> farm_client::Result<Config> {
        let mut config = if let Some(config_path) = &self.config {
            tracing::debug!("Loading configuration from {:?}", config_path);
            load_config(config_path)?
        } else {
            tracing::debug!("Using default configuration");
            Config::default()
        };

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(session_file) = &self.session_file {
            config.session.path = session_file.clone();
        }
        Ok(config)
    }
}

/// Run one subcommand against the controller
///
/// Record subcommands open the matching form for the batch first, the
/// same way the dashboard buttons do.
pub async fn execute(command: Command, controller: &Controller) {
    match command {
        Command::Register {
            email,
            username,
            password,
        } => {
            let form = RegisterForm {
                email,
                username,
                password,
            };
            controller.register_user(&form).await;
        }
        Command::Login { username, password } => {
            controller.login(&LoginForm { username, password }).await;
        }
        Command::Logout => controller.logout(),
        Command::Batches => controller.load_batches().await,
        Command::Feeding {
            batch_id,
            bags,
            amount,
            note,
        } => {
            controller.open_modal(RecordKind::Feeding, batch_id);
            controller
                .submit_feeding(&FeedingForm { bags, amount, note })
                .await;
        }
        Command::Expense {
            batch_id,
            description,
            amount,
        } => {
            controller.open_modal(RecordKind::Expense, batch_id);
            controller
                .submit_expense(&ExpenseForm {
                    description,
                    amount,
                })
                .await;
        }
        Command::Mortality {
            batch_id,
            count,
            reason,
        } => {
            controller.open_modal(RecordKind::Mortality, batch_id);
            let form = MortalityForm {
                count,
                reason: reason.unwrap_or_default(),
            };
            controller.submit_mortality(&form).await;
        }
    }
}
