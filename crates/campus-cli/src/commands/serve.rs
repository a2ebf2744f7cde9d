//! Server start command.

use clap::Args;

use campus_core::error::AppError;
use campus_database::Stores;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the bind port
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Start the HTTP server in the foreground
pub async fn execute(args: &ServeArgs, env: &str) -> Result<(), AppError> {
    let mut config = super::load_config(env)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let stores = Stores::connect(&config.database).await?;
    campus_api::serve(config, stores).await
}
