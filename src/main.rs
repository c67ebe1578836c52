// modex - Module Exporter
// Main CLI entry point

use clap::Parser;
use std::process;
use modex::cli::{Cli, CliDispatcher};
use modex::utils::error::UserError;
use modex::utils::logging::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(None);

    let result = CliDispatcher::execute(cli.command).await;

    if let Err(err) = result {
        let user_error = UserError::from_export_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
