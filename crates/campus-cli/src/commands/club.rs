//! Club inspection commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_core::types::PageRequest;
use campus_core::types::pagination::MAX_PAGE_SIZE;
use campus_database::Stores;
use campus_entity::Id;
use campus_entity::membership::ClubMembership;

use crate::output::{self, OutputFormat};

/// Arguments for club commands
#[derive(Debug, Args)]
pub struct ClubArgs {
    /// Club subcommand
    #[command(subcommand)]
    pub command: ClubCommand,
}

/// Club subcommands
#[derive(Debug, Subcommand)]
pub enum ClubCommand {
    /// List clubs
    List {
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Page size
        #[arg(long, default_value_t = 25)]
        per_page: u64,
    },
    /// List the members of a club
    Members {
        /// Club ID
        club_id: Id,
    },
}

/// Club display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ClubRow {
    id: Id,
    name: String,
    description: String,
    created_at: String,
}

/// Membership display row for table output
#[derive(Debug, Serialize, Tabled)]
struct MemberRow {
    id: Id,
    student_id: Id,
    role: String,
    joined_at: String,
}

/// Execute club commands
pub async fn execute(args: &ClubArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let stores = super::open_stores(&config).await?;

    match &args.command {
        ClubCommand::List { page, per_page } => {
            let page = stores
                .clubs
                .list(&PageRequest::new(*page, *per_page))
                .await?;

            let rows: Vec<ClubRow> = page
                .items
                .into_iter()
                .map(|c| ClubRow {
                    id: c.id,
                    name: c.name,
                    description: c.description.unwrap_or_default(),
                    created_at: c.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                println!("Page {} of {} ({} clubs)", page.page, page.total_pages, page.total_items);
            }
        }
        ClubCommand::Members { club_id } => {
            stores
                .clubs
                .find_by_id(*club_id)
                .await?
                .ok_or_else(|| AppError::not_found("Club not found."))?;

            let members = all_members(&stores, *club_id).await?;
            let total = members.len();

            let rows: Vec<MemberRow> = members
                .into_iter()
                .map(|m| MemberRow {
                    id: m.id,
                    student_id: m.student_id,
                    role: m.role.as_str().to_string(),
                    joined_at: m.joined_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                println!("{total} members");
            }
        }
    }

    stores.close().await;
    Ok(())
}

/// Fetch every membership of a club, one page at a time.
async fn all_members(stores: &Stores, club_id: Id) -> AppResult<Vec<ClubMembership>> {
    let mut members = Vec::new();
    let mut page_no = 1;
    loop {
        let page = stores
            .memberships
            .list_by_club(club_id, &PageRequest::new(page_no, MAX_PAGE_SIZE))
            .await?;
        members.extend(page.items);
        if !page.has_next {
            return Ok(members);
        }
        page_no += 1;
    }
}
