use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Text};

use crate::catalog::Catalog;
use crate::navigator::{Navigator, Phase, Signal};
use crate::registry::ViewRegistry;
use crate::render::Renderer;

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialPrompt {
    pub input: String,
    pub error: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Drawer {
    pub open: bool,
    pub selected: usize,
}

/// Terminal-side adapter: feeds key presses to the navigator and carries out
/// the signals it returns.
pub struct App {
    navigator: Navigator,
    catalog: Catalog,
    pub content: Text<'static>,
    pub content_scroll: u16,
    pub header_title: String,
    pub drawer: Drawer,
    pub prompt: Option<CredentialPrompt>,
    pub help_overlay: bool,
    pub logs: VecDeque<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(registry: ViewRegistry, catalog: Catalog) -> Self {
        let mut app = Self {
            navigator: Navigator::new(registry),
            catalog,
            content: Text::default(),
            content_scroll: 0,
            header_title: String::new(),
            drawer: Drawer::default(),
            prompt: None,
            help_overlay: false,
            logs: VecDeque::new(),
            should_quit: false,
        };
        let home = registry.default_view().key;
        let signals = app.navigator.request_navigate(home);
        app.apply(&signals);
        app
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn menu_lines(&self) -> Vec<Line<'static>> {
        Renderer::new(self.navigator.registry(), &self.catalog).menu(
            self.navigator.is_authenticated(),
            self.navigator.current_view(),
        )
    }

    pub fn navigate(&mut self, target: &str) {
        let signals = self.navigator.request_navigate(target);
        self.apply(&signals);
    }

    pub fn submit_credential(&mut self) {
        let candidate = self
            .prompt
            .as_ref()
            .map(|prompt| prompt.input.clone())
            .unwrap_or_default();
        let signals = self.navigator.submit_credential(&candidate);
        self.apply(&signals);
    }

    pub fn cancel_credential(&mut self) {
        let signals = self.navigator.cancel_credential();
        self.apply(&signals);
    }

    pub fn apply(&mut self, signals: &[Signal]) {
        for signal in signals {
            match *signal {
                Signal::CloseDrawer => self.drawer.open = false,
                Signal::ScrollToTop => self.content_scroll = 0,
                Signal::Render { view } => self.render(view),
                Signal::ShowPrompt { pending } => {
                    self.prompt = Some(CredentialPrompt::default());
                    self.help_overlay = false;
                    self.push_log(format!("[INFO] {pending} is VIP only, password required"));
                }
                Signal::HidePrompt => self.prompt = None,
                Signal::CredentialRejected => {
                    if let Some(prompt) = self.prompt.as_mut() {
                        prompt.input.clear();
                        prompt.error = true;
                    }
                    self.push_log("[WARN] Incorrect password");
                }
            }
        }
    }

    fn render(&mut self, view_key: &'static str) {
        let registry = self.navigator.registry();
        let authenticated = self.navigator.is_authenticated();
        self.content = Renderer::new(registry, &self.catalog).render(view_key, authenticated);
        if let Some(view) = registry.lookup(view_key) {
            self.header_title = view.title.to_uppercase();
            if let Some(idx) = registry.position(view_key) {
                self.drawer.selected = idx;
            }
        }
        self.push_log(format!("[INFO] Showing {view_key}"));
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if matches!(self.navigator.phase(), Phase::AwaitingCredential { .. }) {
            self.on_prompt_key(key);
            return;
        }
        if self.drawer.open {
            self.on_drawer_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('m') | KeyCode::Tab => self.drawer.open = true,
            KeyCode::Char('h') => {
                let home = self.navigator.registry().default_view().key;
                self.navigate(home);
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.content_scroll = self.content_scroll.saturating_add(1)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.content_scroll = self.content_scroll.saturating_sub(1)
            }
            KeyCode::Char('r') => {
                let current = self.navigator.current_view();
                self.navigate(current);
            }
            KeyCode::Char('?') => self.help_overlay = !self.help_overlay,
            KeyCode::Char(c) if c.is_ascii_digit() => self.navigate_to_index(c),
            _ => {}
        }
    }

    fn on_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_credential(),
            KeyCode::Esc => self.cancel_credential(),
            KeyCode::Backspace => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.input.push(c);
                }
            }
            _ => {}
        }
    }

    fn on_drawer_key(&mut self, key: KeyEvent) {
        let count = self.navigator.registry().all().len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Tab => self.drawer.open = false,
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                if count > 0 {
                    self.drawer.selected = (self.drawer.selected + 1) % count;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if count > 0 {
                    self.drawer.selected = (self.drawer.selected + count - 1) % count;
                }
            }
            KeyCode::Enter => {
                if let Some(view) = self.navigator.registry().all().get(self.drawer.selected) {
                    self.navigate(view.key);
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => self.navigate_to_index(c),
            _ => {}
        }
    }

    fn navigate_to_index(&mut self, digit: char) {
        let Some(n) = digit.to_digit(10) else {
            return;
        };
        let Some(idx) = (n as usize).checked_sub(1) else {
            return;
        };
        if let Some(view) = self.navigator.registry().all().get(idx) {
            self.navigate(view.key);
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        self.logs.push_back(format!("{stamp} {}", msg.into()));
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}
