use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::catalog::{self, ScriptKind};
use crate::config::Config;
use crate::session::drill::{DrillState, Mode};
use crate::session::input::{self, Judgment};
use crate::ui::components::menu::Menu;
use crate::ui::recent::RecentList;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Menu,
    Drill,
    Settings,
}

const SHAKE_DURATION: Duration = Duration::from_millis(450);

pub struct App {
    pub screen: AppScreen,
    pub script: ScriptKind,
    pub drill: Option<DrillState>,
    pub recent: RecentList,
    pub revealed: bool,
    pub shake_until: Option<Instant>,
    pub menu: Menu<'static>,
    pub theme: &'static Theme,
    pub config: Config,
    pub should_quit: bool,
    pub settings_selected: usize,
    rng: SmallRng,
}

impl App {
    pub fn new() -> Self {
        let mut config = Config::load().unwrap_or_default();
        config.normalize_script();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));
        let mut menu = Menu::new(theme);
        menu.set_quick_mode(config.quick_mode);
        let script =
            ScriptKind::from_name(&config.script).unwrap_or(ScriptKind::Hiragana);

        let mut app = Self {
            screen: AppScreen::Menu,
            script,
            drill: None,
            recent: RecentList::new(),
            revealed: false,
            shake_until: None,
            menu,
            theme,
            config,
            should_quit: false,
            settings_selected: 0,
            rng: SmallRng::from_entropy(),
        };
        app.select_script(script);
        app
    }

    /// Point the script selector at `script`. The config, the drill
    /// header, and the preselected menu entry all follow it, so a plain
    /// Enter on the menu starts the configured script.
    pub fn select_script(&mut self, script: ScriptKind) {
        self.script = script;
        self.config.script = script.as_str().to_string();
        self.menu.selected = match script {
            ScriptKind::Hiragana => 0,
            ScriptKind::Katakana => 1,
        };
    }

    pub fn start_drill(&mut self, script: ScriptKind) {
        let mode = if self.config.quick_mode {
            Mode::Quick
        } else {
            Mode::Normal
        };
        let drill = DrillState::with_random_start(catalog::full_pool(), mode, &mut self.rng);
        self.recent.start(drill.current().copied());
        self.drill = Some(drill);
        self.select_script(script);
        self.revealed = false;
        self.shake_until = None;
        self.screen = AppScreen::Drill;
    }

    pub fn type_char(&mut self, ch: char) {
        if let Some(ref mut drill) = self.drill {
            let judgment = input::process_char(drill, ch, &mut self.rng);
            self.apply_judgment(judgment);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(ref mut drill) = self.drill {
            input::process_backspace(drill);
        }
    }

    pub fn submit(&mut self) {
        if let Some(ref mut drill) = self.drill {
            let judgment = input::process_enter(drill, &mut self.rng);
            self.apply_judgment(judgment);
        }
    }

    /// Feed a judged transition into the presentation list. The drill
    /// state itself has already moved on.
    fn apply_judgment(&mut self, judgment: Option<Judgment>) {
        let Some(judgment) = judgment else { return };
        let next = self.drill.as_ref().and_then(|d| d.current().copied());

        match judgment {
            Judgment::Correct => {
                self.revealed = false;
                self.recent.advance(Some(true), next);
            }
            Judgment::Missed => {
                self.revealed = false;
                self.recent.advance(Some(false), next);
            }
            Judgment::Skipped => {
                self.revealed = false;
                self.recent.advance(None, next);
            }
            Judgment::Retry => {
                self.shake_until = Some(Instant::now() + SHAKE_DURATION);
            }
        }
    }

    pub fn reset_drill(&mut self) {
        if let Some(ref mut drill) = self.drill {
            drill.reset(&mut self.rng);
            self.recent.start(drill.current().copied());
            self.revealed = false;
            self.shake_until = None;
        }
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn toggle_quick_mode(&mut self) {
        self.config.quick_mode = !self.config.quick_mode;
        self.menu.set_quick_mode(self.config.quick_mode);
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_until.is_some_and(|until| Instant::now() < until)
    }

    /// Cosmetic upkeep between inputs: expire the shake cue and drop
    /// cards whose exit delay has elapsed.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if self.shake_until.is_some_and(|until| now >= until) {
            self.shake_until = None;
        }
        self.recent.prune(now);
    }

    pub fn go_to_menu(&mut self) {
        self.screen = AppScreen::Menu;
        self.drill = None;
        self.recent.start(None);
        self.shake_until = None;
    }

    pub fn go_to_settings(&mut self) {
        self.settings_selected = 0;
        self.screen = AppScreen::Settings;
    }

    pub fn settings_cycle_forward(&mut self) {
        match self.settings_selected {
            0 => {
                let themes = Theme::available_themes();
                if let Some(idx) = themes.iter().position(|t| *t == self.config.theme) {
                    let next = (idx + 1) % themes.len();
                    self.config.theme = themes[next].clone();
                } else if let Some(first) = themes.first() {
                    self.config.theme = first.clone();
                }
                if let Some(new_theme) = Theme::load(&self.config.theme) {
                    let theme: &'static Theme = Box::leak(Box::new(new_theme));
                    self.theme = theme;
                    self.menu.theme = theme;
                }
            }
            1 => {
                let next = match self.script {
                    ScriptKind::Hiragana => ScriptKind::Katakana,
                    ScriptKind::Katakana => ScriptKind::Hiragana,
                };
                self.select_script(next);
            }
            2 => self.toggle_quick_mode(),
            _ => {}
        }
    }

    pub fn settings_cycle_backward(&mut self) {
        match self.settings_selected {
            0 => {
                let themes = Theme::available_themes();
                if let Some(idx) = themes.iter().position(|t| *t == self.config.theme) {
                    let next = if idx == 0 { themes.len() - 1 } else { idx - 1 };
                    self.config.theme = themes[next].clone();
                } else if let Some(first) = themes.first() {
                    self.config.theme = first.clone();
                }
                if let Some(new_theme) = Theme::load(&self.config.theme) {
                    let theme: &'static Theme = Box::leak(Box::new(new_theme));
                    self.theme = theme;
                    self.menu.theme = theme;
                }
            }
            // Two-valued fields cycle the same way in both directions.
            1 | 2 => self.settings_cycle_forward(),
            _ => {}
        }
    }
}
