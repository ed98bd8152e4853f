use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use once_cell::sync::OnceCell;
use serde::Deserialize;

const BUILTIN_JSON: &str = include_str!("../data/catalog.json");

static BUILTIN: OnceCell<Catalog> = OnceCell::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipStatus {
    Pending,
    Won,
    Lost,
}

impl TipStatus {
    pub fn label(self) -> &'static str {
        match self {
            TipStatus::Pending => "PENDING",
            TipStatus::Won => "WON",
            TipStatus::Lost => "LOST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Odds {
    Number(f64),
    Text(String),
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Odds::Number(value) => write!(f, "{value}"),
            Odds::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipRecord {
    pub league: String,
    pub time: String,
    pub team_a: String,
    pub team_b: String,
    #[serde(default)]
    pub is_live: bool,
    pub prediction: String,
    pub odds: Odds,
    pub status: TipStatus,
    #[serde(default)]
    pub score: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTally {
    pub total: usize,
    pub pending: usize,
    pub won: usize,
    pub lost: usize,
}

/// Category key -> tips in display order. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: BTreeMap<String, Vec<TipRecord>>,
}

impl Catalog {
    pub fn new(categories: BTreeMap<String, Vec<TipRecord>>) -> Result<Self> {
        let catalog = Self { categories };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn builtin() -> Result<&'static Catalog> {
        BUILTIN.get_or_try_init(|| {
            Catalog::from_json_str(BUILTIN_JSON).context("built-in catalog is invalid")
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(raw).context("catalog json did not parse")?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("invalid catalog {}", path.display()))
    }

    /// A scored tip must already be settled.
    pub fn validate(&self) -> Result<()> {
        for (category, tips) in &self.categories {
            for (idx, tip) in tips.iter().enumerate() {
                if tip.status == TipStatus::Pending && tip.score.is_some() {
                    bail!(
                        "{category}[{idx}] ({} vs {}) is pending but has a score",
                        tip.team_a,
                        tip.team_b
                    );
                }
            }
        }
        Ok(())
    }

    /// Absent categories read as empty.
    pub fn tips(&self, category: &str) -> &[TipRecord] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn tally(&self, category: &str) -> CategoryTally {
        let mut tally = CategoryTally::default();
        for tip in self.tips(category) {
            tally.total += 1;
            match tip.status {
                TipStatus::Pending => tally.pending += 1,
                TipStatus::Won => tally.won += 1,
                TipStatus::Lost => tally.lost += 1,
            }
        }
        tally
    }
}
