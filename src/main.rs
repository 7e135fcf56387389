//! phonebookd Server Entry Point

use clap::Parser;
use phonebookd::cli::{Cli, Commands};
use phonebookd::{bootstrap, logging, server};

#[tokio::main]
async fn main() {
    logging::init().expect("failed to initialize logging");

    let cli = Cli::parse();

    let args = match cli.command {
        Some(Commands::Serve(args)) => args,
        // サブコマンドなしはデフォルト設定でserve
        None => phonebookd::cli::serve::ServeArgs::default(),
    };

    let state = match bootstrap::initialize().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    server::run(state, &args.bind_addr()).await;
}
