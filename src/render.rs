use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::catalog::{Catalog, TipRecord, TipStatus};
use crate::registry::{View, ViewRegistry};

pub const EMPTY_SECTION: &str = "No games available for this section yet.";
pub const LOCK_MARK: &str = "[locked]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipSection {
    pub category: &'static str,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub accent: Color,
}

pub fn tip_section(view_key: &str) -> Option<TipSection> {
    let section = match view_key {
        "free-tips" => TipSection {
            category: "free",
            heading: "Free Daily Tips",
            subtitle: "Enjoy today's best free selections from our analysts.",
            accent: Color::Green,
        },
        "top-secret" => TipSection {
            category: "topSecret",
            heading: "Top Secret VIP Access",
            subtitle: "The most exclusive and secured picks with maximum confidence.",
            accent: Color::Gray,
        },
        "ultimate" => TipSection {
            category: "ultimate",
            heading: "Ultimate VIP Selections",
            subtitle: "Our highest value tips, carefully researched for serious players.",
            accent: Color::Yellow,
        },
        "over-under" => TipSection {
            category: "overUnder",
            heading: "Over/Under Specialists",
            subtitle: "Precise predictions on total goals scored in a match.",
            accent: Color::Cyan,
        },
        "btts" => TipSection {
            category: "btts",
            heading: "Both Teams To Score (BTTS)",
            subtitle: "Focusing on matches where both sides are highly likely to find the net.",
            accent: Color::Red,
        },
        _ => return None,
    };
    Some(section)
}

/// Restricted views whose tip category is absent from the catalog. They
/// still render, as an empty section.
pub fn missing_restricted_categories(
    registry: &ViewRegistry,
    catalog: &Catalog,
) -> Vec<(&'static str, &'static str)> {
    registry
        .all()
        .iter()
        .filter(|view| view.restricted)
        .filter_map(|view| tip_section(view.key).map(|section| (view.key, section.category)))
        .filter(|(_, category)| !catalog.contains(category))
        .collect()
}

/// Pure view renderer. Output depends only on the view key, the catalog and
/// the unlock state passed in.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    registry: &'a ViewRegistry,
    catalog: &'a Catalog,
}

impl<'a> Renderer<'a> {
    pub fn new(registry: &'a ViewRegistry, catalog: &'a Catalog) -> Self {
        Self { registry, catalog }
    }

    pub fn render(&self, view_key: &str, authenticated: bool) -> Text<'static> {
        let view = self
            .registry
            .lookup(view_key)
            .unwrap_or_else(|| self.registry.default_view());
        if view.restricted && !authenticated {
            return locked_page(view);
        }
        if let Some(section) = tip_section(view.key) {
            return tip_list(section, self.catalog.tips(section.category));
        }
        match view.key {
            "support" => support_page(),
            _ => self.home_page(authenticated),
        }
    }

    /// Menu entries in registry order. Recomputed on every draw.
    pub fn menu(&self, authenticated: bool, active: &str) -> Vec<Line<'static>> {
        self.registry
            .all()
            .iter()
            .enumerate()
            .map(|(idx, view)| menu_line(idx, view, authenticated, view.key == active))
            .collect()
    }

    fn home_page(&self, authenticated: bool) -> Text<'static> {
        let mut lines = vec![
            Line::from(Span::styled(
                "Welcome to FOOTBALL SIMPLE GAMES",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Your source for simple, high-value football predictions and analysis.",
                Style::default().fg(Color::Gray),
            )),
            Line::default(),
        ];

        const TILES: [(&str, &str); 5] = [
            ("free-tips", "Daily picks for everyone"),
            ("ultimate", "Top premium selections"),
            ("over-under", "Goal line predictions"),
            ("btts", "Both teams to score picks"),
            ("support", "Contact support"),
        ];
        for (key, blurb) in TILES {
            let (Some(view), Some(idx)) = (self.registry.lookup(key), self.registry.position(key))
            else {
                continue;
            };
            let mut spans = vec![
                Span::styled(
                    format!(" [{}] ", idx + 1),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{} {}", view.icon, view.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {blurb}"), Style::default().fg(Color::DarkGray)),
            ];
            if view.restricted && !authenticated {
                spans.push(Span::styled(
                    format!("  {LOCK_MARK}"),
                    Style::default().fg(Color::Yellow),
                ));
            }
            lines.push(Line::from(spans));
        }
        Text::from(lines)
    }
}

fn menu_line(idx: usize, view: &View, authenticated: bool, active: bool) -> Line<'static> {
    let locked = view.restricted && !authenticated;
    let icon_style = if locked {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let title_style = if active {
        Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
    };
    let mut spans = vec![
        Span::raw(format!("{} ", idx + 1)),
        Span::styled(format!("{} ", view.icon), icon_style),
        Span::styled(view.title.to_string(), title_style),
    ];
    if locked {
        spans.push(Span::styled(
            format!(" {LOCK_MARK}"),
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}

fn tip_list(section: TipSection, tips: &[TipRecord]) -> Text<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            section.heading,
            Style::default()
                .fg(section.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            section.subtitle,
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
    ];
    if tips.is_empty() {
        lines.push(Line::from(Span::styled(
            EMPTY_SECTION,
            Style::default().fg(Color::DarkGray),
        )));
        return Text::from(lines);
    }
    for tip in tips {
        lines.extend(tip_card(tip));
        lines.push(Line::default());
    }
    Text::from(lines)
}

pub fn tip_card(tip: &TipRecord) -> Vec<Line<'static>> {
    let mut header = vec![Span::styled(
        tip.league.to_uppercase(),
        Style::default().fg(Color::DarkGray),
    )];
    if tip.is_live {
        header.push(Span::styled(
            "  LIVE",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    header.push(Span::styled(
        format!("  {}", tip.time),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let teams = Line::from(vec![
        Span::styled(
            format!("  {}", tip.team_a),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" vs ", Style::default().fg(Color::Red)),
        Span::styled(
            tip.team_b.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    let pick = Line::from(vec![
        Span::raw("  Prediction: "),
        Span::styled(
            tip.prediction.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Odds: "),
        Span::styled(tip.odds.to_string(), Style::default().fg(Color::Green)),
    ]);

    let mut outcome = vec![Span::styled(
        format!("  [{}]", tip.status.label()),
        status_style(tip.status),
    )];
    if let Some(score) = &tip.score {
        outcome.push(Span::raw(format!(" Score: {score}")));
    }

    vec![Line::from(header), teams, pick, Line::from(outcome)]
}

fn status_style(status: TipStatus) -> Style {
    let color = match status {
        TipStatus::Pending => Color::Yellow,
        TipStatus::Won => Color::Green,
        TipStatus::Lost => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn locked_page(view: &View) -> Text<'static> {
    Text::from(vec![
        Line::from(Span::styled(
            format!("{} {}", view.icon, view.title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("{LOCK_MARK} Enter the VIP password to view these picks."),
            Style::default().fg(Color::Yellow),
        )),
    ])
}

fn support_page() -> Text<'static> {
    const CHANNELS: [(&str, &str); 3] = [
        ("Telegram Chat", "@masterbetrealfixed  https://t.me/masterbetrealfixed"),
        ("WhatsApp Line", "+1 234 567 890  https://wa.me/1234567890"),
        ("Email", "masterbetrealfixed@gmail.com"),
    ];
    let mut lines = vec![
        Line::from(Span::styled(
            "Support & Contact",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Need help with your subscription or have a question about our picks? Contact us here.",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
    ];
    for (label, value) in CHANNELS {
        lines.push(Line::from(Span::styled(
            label.to_uppercase(),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(format!("  {value}")));
    }
    Text::from(lines)
}

/// Flattens rendered text to plain lines, mainly for tests and the lint tool.
pub fn plain_lines(text: &Text<'_>) -> Vec<String> {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect()
}
