use std::collections::HashSet;

use anyhow::{Result, anyhow, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub restricted: bool,
}

pub const HOME: &str = "home";

pub static STANDARD_VIEWS: [View; 7] = [
    View {
        key: HOME,
        title: "Home",
        icon: "⌂",
        restricted: false,
    },
    View {
        key: "free-tips",
        title: "Free Daily Tips",
        icon: "✚",
        restricted: false,
    },
    View {
        key: "top-secret",
        title: "Top Secret VIP",
        icon: "◆",
        restricted: true,
    },
    View {
        key: "ultimate",
        title: "Ultimate VIP",
        icon: "♛",
        restricted: true,
    },
    View {
        key: "over-under",
        title: "Over/Under",
        icon: "↕",
        restricted: true,
    },
    View {
        key: "btts",
        title: "BTTS Bets",
        icon: "⇄",
        restricted: true,
    },
    View {
        key: "support",
        title: "Support & Contact",
        icon: "☎",
        restricted: false,
    },
];

/// Fixed, ordered set of navigable views. Order is menu order.
#[derive(Debug, Clone, Copy)]
pub struct ViewRegistry {
    views: &'static [View],
    default_index: usize,
}

impl ViewRegistry {
    /// Keys must be unique and the default view must exist and be public.
    pub fn new(views: &'static [View], default_key: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        for view in views {
            if !seen.insert(view.key) {
                bail!("duplicate view key {:?}", view.key);
            }
        }
        let default_index = views
            .iter()
            .position(|v| v.key == default_key)
            .ok_or_else(|| anyhow!("default view {default_key:?} is not registered"))?;
        if views[default_index].restricted {
            bail!("default view {default_key:?} must be public");
        }
        Ok(Self {
            views,
            default_index,
        })
    }

    pub fn standard() -> Self {
        Self {
            views: &STANDARD_VIEWS,
            default_index: 0,
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&'static View> {
        self.views.iter().find(|v| v.key == key)
    }

    pub fn all(&self) -> &'static [View] {
        self.views
    }

    pub fn default_view(&self) -> &'static View {
        &self.views[self.default_index]
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.views.iter().position(|v| v.key == key)
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
