use std::collections::BTreeMap;

use tipsheet_terminal::catalog::{Catalog, Odds, TipRecord, TipStatus};
use tipsheet_terminal::registry::ViewRegistry;
use tipsheet_terminal::render::{
    EMPTY_SECTION, LOCK_MARK, Renderer, missing_restricted_categories, plain_lines, tip_section,
};

fn tip(status: TipStatus, score: Option<&str>) -> TipRecord {
    TipRecord {
        league: "Premier League".to_string(),
        time: "15:00".to_string(),
        team_a: "Brentford".to_string(),
        team_b: "Fulham".to_string(),
        is_live: true,
        prediction: "Over 1.5 Goals".to_string(),
        odds: Odds::Number(1.32),
        status,
        score: score.map(str::to_string),
    }
}

fn catalog() -> Catalog {
    let mut categories = BTreeMap::new();
    categories.insert(
        "ultimate".to_string(),
        vec![tip(TipStatus::Won, Some("2-1")), tip(TipStatus::Pending, None)],
    );
    categories.insert("btts".to_string(), Vec::new());
    Catalog::new(categories).expect("valid catalog")
}

fn joined(lines: &[String]) -> String {
    lines.join("\n")
}

#[test]
fn tip_cards_show_pick_odds_status_and_score() {
    let registry = ViewRegistry::standard();
    let catalog = catalog();
    let text = Renderer::new(&registry, &catalog).render("ultimate", true);
    let out = joined(&plain_lines(&text));
    assert!(out.contains("Ultimate VIP Selections"));
    assert!(out.contains("PREMIER LEAGUE"));
    assert!(out.contains("LIVE"));
    assert!(out.contains("Brentford vs Fulham"));
    assert!(out.contains("Prediction: Over 1.5 Goals"));
    assert!(out.contains("Odds: 1.32"));
    assert!(out.contains("[WON] Score: 2-1"));
    assert!(out.contains("[PENDING]"));
}

#[test]
fn empty_and_absent_categories_render_placeholder() {
    let registry = ViewRegistry::standard();
    let catalog = catalog();
    let renderer = Renderer::new(&registry, &catalog);
    for key in ["btts", "over-under", "free-tips"] {
        let out = joined(&plain_lines(&renderer.render(key, true)));
        assert!(out.contains(EMPTY_SECTION), "{key} should show placeholder");
    }
}

#[test]
fn restricted_view_without_unlock_renders_locked_page() {
    let registry = ViewRegistry::standard();
    let catalog = catalog();
    let out = joined(&plain_lines(&Renderer::new(&registry, &catalog).render("ultimate", false)));
    assert!(out.contains(LOCK_MARK));
    assert!(!out.contains("Brentford"));
}

#[test]
fn unknown_key_renders_home() {
    let registry = ViewRegistry::standard();
    let catalog = catalog();
    let out = joined(&plain_lines(&Renderer::new(&registry, &catalog).render("missing", false)));
    assert!(out.contains("Welcome to FOOTBALL SIMPLE GAMES"));
}

#[test]
fn menu_marks_locked_entries_until_unlocked() {
    let registry = ViewRegistry::standard();
    let catalog = catalog();
    let renderer = Renderer::new(&registry, &catalog);

    let locked = renderer
        .menu(false, "home")
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>();
    assert_eq!(locked.len(), registry.all().len());
    for (view, line) in registry.all().iter().zip(&locked) {
        assert!(line.contains(view.title));
        assert_eq!(line.contains(LOCK_MARK), view.restricted, "{line}");
    }

    let unlocked = renderer.menu(true, "home");
    for line in &unlocked {
        let text = line.spans.iter().map(|s| s.content.as_ref()).collect::<String>();
        assert!(!text.contains(LOCK_MARK));
    }
}

#[test]
fn home_tiles_follow_unlock_state() {
    let registry = ViewRegistry::standard();
    let catalog = catalog();
    let renderer = Renderer::new(&registry, &catalog);
    let locked = joined(&plain_lines(&renderer.render("home", false)));
    let unlocked = joined(&plain_lines(&renderer.render("home", true)));
    assert!(locked.contains(LOCK_MARK));
    assert!(!unlocked.contains(LOCK_MARK));
    assert!(unlocked.contains("[4]"));
}

#[test]
fn support_lists_contact_channels() {
    let registry = ViewRegistry::standard();
    let catalog = catalog();
    let out = joined(&plain_lines(&Renderer::new(&registry, &catalog).render("support", false)));
    assert!(out.contains("TELEGRAM CHAT"));
    assert!(out.contains("WHATSAPP LINE"));
    assert!(out.contains("EMAIL"));
}

#[test]
fn sections_map_views_to_categories() {
    assert_eq!(tip_section("free-tips").map(|s| s.category), Some("free"));
    assert_eq!(tip_section("top-secret").map(|s| s.category), Some("topSecret"));
    assert_eq!(tip_section("over-under").map(|s| s.category), Some("overUnder"));
    assert_eq!(tip_section("home"), None);
}

#[test]
fn reports_restricted_views_without_a_category() {
    let registry = ViewRegistry::standard();
    let catalog = catalog();
    let missing = missing_restricted_categories(&registry, &catalog);
    assert_eq!(
        missing,
        vec![("top-secret", "topSecret"), ("over-under", "overUnder")]
    );

    let mut categories = BTreeMap::new();
    for category in ["topSecret", "ultimate", "overUnder"] {
        categories.insert(category.to_string(), Vec::new());
    }
    let without_btts = Catalog::new(categories).expect("valid catalog");
    assert_eq!(
        missing_restricted_categories(&registry, &without_btts),
        vec![("btts", "btts")]
    );

    let full = Catalog::builtin().expect("built-in catalog");
    assert!(missing_restricted_categories(&registry, full).is_empty());
}
