//! Development token issuing.
//!
//! The server only verifies tokens; these commands mint them with the shared
//! secret so the API can be exercised locally.

use clap::{Args, Subcommand};
use serde::Serialize;

use campus_auth::jwt::JwtEncoder;
use campus_core::error::AppError;
use campus_entity::Id;
use campus_entity::user::UserRole;

use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Issue a signed access token
    Issue {
        /// User ID placed in `sub`
        #[arg(long)]
        user_id: Id,
        /// Role: student, admin, or superadmin
        #[arg(long, default_value = "student")]
        role: String,
        /// Username claim
        #[arg(long)]
        username: String,
    },
}

#[derive(Debug, Serialize)]
struct IssuedToken {
    access_token: String,
    token_type: &'static str,
    expires_at: String,
}

/// Execute token commands
pub async fn execute(args: &TokenArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;

    match &args.command {
        TokenCommand::Issue {
            user_id,
            role,
            username,
        } => {
            let role: UserRole = role.parse()?;
            let encoder = JwtEncoder::new(&config.auth);
            let (access_token, expires_at) =
                encoder.generate_access_token(*user_id, role, username)?;

            match format {
                OutputFormat::Table => {
                    output::print_kv("Subject", &user_id.to_string());
                    output::print_kv("Role", role.as_str());
                    output::print_kv("Expires", &expires_at.to_rfc3339());
                    println!("{access_token}");
                }
                OutputFormat::Json => output::print_item(
                    &IssuedToken {
                        access_token,
                        token_type: "Bearer",
                        expires_at: expires_at.to_rfc3339(),
                    },
                    format,
                ),
            }
        }
    }

    Ok(())
}
