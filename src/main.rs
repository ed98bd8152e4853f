use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::prelude::*;

use tipsheet_terminal::app::App;
use tipsheet_terminal::config::{self, Settings};
use tipsheet_terminal::logging;
use tipsheet_terminal::registry::ViewRegistry;

mod ui;

fn main() -> Result<()> {
    config::load_dotenv();
    let settings = Settings::from_env();
    logging::init(&settings)?;

    let catalog = settings.load_catalog()?;
    log::info!("catalog loaded with {} categories", catalog.categories().count());

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(ViewRegistry::standard(), catalog);
    let res = run_app(&mut terminal, &mut app, &settings);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err:#}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, settings: &Settings) -> Result<()> {
    let tick_rate = settings.tick_rate;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
