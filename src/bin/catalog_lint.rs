use std::path::PathBuf;

use anyhow::{Context, Result};

use tipsheet_terminal::config::{self, Settings};
use tipsheet_terminal::logging;
use tipsheet_terminal::registry::ViewRegistry;
use tipsheet_terminal::render::missing_restricted_categories;

fn main() -> Result<()> {
    config::load_dotenv();
    let mut settings = Settings::from_env();
    if let Some(path) = parse_catalog_arg() {
        settings.catalog_path = Some(path);
    }
    logging::init(&settings)?;

    let catalog = settings.load_catalog().context("catalog failed validation")?;
    match &settings.catalog_path {
        Some(path) => println!("Catalog: {}", path.display()),
        None => println!("Catalog: built-in"),
    }

    let mut categories = catalog.categories().collect::<Vec<_>>();
    categories.sort_unstable();
    for category in categories {
        let tally = catalog.tally(category);
        println!(
            "{category}: {} tips (pending={} won={} lost={})",
            tally.total, tally.pending, tally.won, tally.lost
        );
    }

    let missing = missing_restricted_categories(&ViewRegistry::standard(), &catalog);
    for (view, category) in &missing {
        log::warn!("view {view} reads absent category {category}");
        println!("warning: view {view} reads category {category} which is absent (renders empty)");
    }

    Ok(())
}

fn parse_catalog_arg() -> Option<PathBuf> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix("--catalog=") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == "--catalog" {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            let trimmed = next.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
    }
    None
}
