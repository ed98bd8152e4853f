use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use tipsheet_terminal::app::App;

const DRAWER_WIDTH: u16 = 34;

pub fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(app))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let content = Paragraph::new(app.content.clone())
        .wrap(Wrap { trim: false })
        .scroll((app.content_scroll, 0));
    frame.render_widget(content, chunks[1]);

    let console = Paragraph::new(console_text(app))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(app));
    frame.render_widget(footer, chunks[3]);

    if app.drawer.open {
        render_drawer(frame, chunks[1], app);
    }
    if app.help_overlay {
        render_help_overlay(frame, frame.size());
    }
    if app.prompt.is_some() {
        render_prompt(frame, frame.size(), app);
    }
}

fn header_text(app: &App) -> String {
    let lock = if app.navigator().is_authenticated() {
        "VIP UNLOCKED"
    } else {
        "VIP LOCKED"
    };
    let line1 = format!("  (o)  {} | {}", app.header_title, lock);
    let line2 = "  /|\\  FOOTBALL SIMPLE GAMES".to_string();
    format!("{line1}\n{line2}")
}

fn footer_text(app: &App) -> String {
    if app.prompt.is_some() {
        "Type password | Enter Submit | Esc Cancel".to_string()
    } else if app.drawer.open {
        "j/k/↑/↓ Move | Enter Open | Esc/m Close | q Quit".to_string()
    } else {
        "m Menu | 1-7 Views | h Home | j/k Scroll | r Refresh | ? Help | q Quit".to_string()
    }
}

fn console_text(app: &App) -> String {
    if app.logs.is_empty() {
        return "No activity yet".to_string();
    }
    let start = app.logs.len().saturating_sub(3);
    app.logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_drawer(frame: &mut Frame, area: Rect, app: &App) {
    let width = DRAWER_WIDTH.min(area.width);
    let drawer_area = Rect {
        x: area.x,
        y: area.y,
        width,
        height: area.height,
    };
    frame.render_widget(Clear, drawer_area);

    let lines = app
        .menu_lines()
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            if idx == app.drawer.selected {
                Line {
                    style: Style::default().bg(Color::DarkGray),
                    ..line
                }
            } else {
                line
            }
        })
        .collect::<Vec<_>>();
    let menu = Paragraph::new(lines).block(Block::default().title("Menu").borders(Borders::ALL));
    frame.render_widget(menu, drawer_area);
}

fn render_prompt(frame: &mut Frame, area: Rect, app: &App) {
    let Some(prompt) = &app.prompt else {
        return;
    };
    let popup_area = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup_area);

    let masked = "*".repeat(prompt.input.chars().count());
    let mut lines = vec![
        Line::from(Span::styled(
            "VIP access required",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Enter the password to unlock VIP sections."),
        Line::default(),
        Line::from(format!("Password: {masked}_")),
    ];
    if prompt.error {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Incorrect password. Try again.",
            Style::default().fg(Color::Red),
        )));
    }
    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Password").borders(Borders::ALL));
    frame.render_widget(popup, popup_area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Tipsheet - Help",
        "",
        "Global:",
        "  m / Tab      Toggle menu",
        "  1-7          Open view by menu position",
        "  h            Home",
        "  j/k or ↑/↓   Scroll",
        "  r            Re-render current view",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Password prompt:",
        "  Enter        Submit",
        "  Esc          Cancel (back to Home)",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
