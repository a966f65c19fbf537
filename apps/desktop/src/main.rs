use anyhow::Result;
use catalog::CatalogClient;
use clap::Parser;
use client_core::AppCore;
use tracing::info;

mod config;

use config::{load_settings, validate_base_url};

/// Walks the whole flow once from the terminal: log in, browse a page of
/// the catalog, open the team builder and fill a roster.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
    /// Overrides the configured catalog base address.
    #[arg(long)]
    api_url: Option<String>,
    /// Catalog page size.
    #[arg(long, default_value_t = 12)]
    limit: u32,
    #[arg(long, default_value_t = 0)]
    offset: u32,
    /// How many creatures from the page to put on the demo team.
    #[arg(long, default_value_t = 3)]
    pick: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(api_url) = args.api_url {
        settings.catalog_base_url = api_url;
    }
    validate_base_url(&settings.catalog_base_url)?;
    info!(base_url = %settings.catalog_base_url, "using catalog api");

    let mut app = AppCore::new(CatalogClient::new(&settings.catalog_base_url));
    app.login(&args.username, &args.password).await?;
    let username = app
        .session
        .current()
        .map(|identity| identity.username.clone())
        .unwrap_or_default();
    println!("Logged in as {username}");

    let summaries = app.browse_catalog(args.limit, args.offset).await?;
    println!("Catalog page (limit {}, offset {}):", args.limit, args.offset);
    for summary in &summaries {
        println!("  #{:<4} {:<14} [{}]", summary.id.0, summary.name, summary.types.join(", "));
    }

    let team_id = app.open_team_builder(None);
    for summary in summaries.iter().take(args.pick) {
        app.add_creature_to_team(team_id, summary.id).await?;
    }

    app.roster.rename_team(team_id, format!("{username}'s picks"));
    let entries = app.roster.team(team_id).map(|t| t.entries().to_vec()).unwrap_or_default();
    if entries.len() >= 2 {
        // Drag the lead creature to the back, like a reorder in the builder.
        app.roster
            .reorder_entries(team_id, entries[0].id, entries[entries.len() - 1].id);
    }

    if let Some(team) = app.roster.team(team_id) {
        println!("\nTeam \"{}\" ({}/{}):", team.name(), team.entries().len(), roster::Team::MAX_ENTRIES);
        for entry in team.entries() {
            println!(
                "  {:<14} hp {:>3}  atk {:>3}  def {:>3}  spa {:>3}  spd {:>3}  spe {:>3}",
                entry.name,
                entry.stats.hp,
                entry.stats.attack,
                entry.stats.defense,
                entry.stats.special_attack,
                entry.stats.special_defense,
                entry.stats.speed,
            );
            if !entry.moves.is_empty() {
                println!("      moves: {}", entry.moves.join(", "));
            }
        }
    }

    Ok(())
}
