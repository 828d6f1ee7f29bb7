//! Farm CLI
//!
//! Command-line client for registering, logging in and keeping batch records.

mod cli;
mod terminal;

use std::rc::Rc;

use clap::Parser;
use farm_client::io::ReqwestHttpClient;
use farm_client::storage::FileTokenStore;
use farm_client::Controller;

use crate::cli::Args;
use crate::terminal::TerminalView;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, base_url={:?}, session_file={:?}, log_level={:?}",
        args.config,
        args.base_url,
        args.session_file,
        args.log_level
    );

    let config = args.resolve_config()?;
    tracing::debug!(
        "Using API at {}, session file {:?}",
        config.api.base_url,
        config.session.path
    );

    let controller = Controller::new(
        &config,
        Rc::new(ReqwestHttpClient::default()),
        Rc::new(FileTokenStore::new(
            &config.session.path,
            config.session.token_key.clone(),
        )),
        Rc::new(TerminalView),
    );

    cli::execute(args.command, &controller).await;

    Ok(())
}
