mod app;
mod catalog;
mod config;
mod event;
mod session;
mod ui;

use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use app::{App, AppScreen};
use catalog::ScriptKind;
use event::{AppEvent, EventHandler};
use ui::components::answer_input::AnswerInput;
use ui::components::card_row::CardRow;
use ui::components::progress_bar::ProgressBar;
use ui::layout::AppLayout;

#[derive(Parser)]
#[command(name = "kanadr", version, about = "Terminal flashcard drill for the Japanese kana")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Script to practice (hiragana, katakana)")]
    script: Option<String>,

    #[arg(short, long, help = "Quick mode: judge as soon as the answer length matches")]
    quick: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new();

    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.theme = theme;
            app.menu.theme = theme;
        }
    }
    if let Some(script) = cli.script.as_deref().and_then(ScriptKind::from_name) {
        app.select_script(script);
    }
    if cli.quick && !app.config.quick_mode {
        app.toggle_quick_mode();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new();

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => app.tick(),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Only process Press events; Repeat would inflate the input buffer
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Menu => handle_menu_key(app, key),
        AppScreen::Drill => handle_drill_key(app, key),
        AppScreen::Settings => handle_settings_key(app, key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('1') => app.start_drill(ScriptKind::Hiragana),
        KeyCode::Char('2') => app.start_drill(ScriptKind::Katakana),
        KeyCode::Char('m') => app.toggle_quick_mode(),
        KeyCode::Char('c') => app.go_to_settings(),
        KeyCode::Up | KeyCode::Char('k') => app.menu.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.menu.next(),
        KeyCode::Enter => match app.menu.selected {
            0 => app.start_drill(ScriptKind::Hiragana),
            1 => app.start_drill(ScriptKind::Katakana),
            2 => app.toggle_quick_mode(),
            3 => app.go_to_settings(),
            _ => {}
        },
        _ => {}
    }
}

fn handle_drill_key(app: &mut App, key: KeyEvent) {
    let complete = app.drill.as_ref().is_some_and(|d| d.is_complete());

    if complete {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => app.reset_drill(),
            KeyCode::Esc | KeyCode::Char('q') => app.go_to_menu(),
            _ => {}
        }
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('r') {
        app.reset_drill();
        return;
    }

    match key.code {
        KeyCode::Esc => app.go_to_menu(),
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Tab => app.toggle_reveal(),
        KeyCode::Char(ch) => app.type_char(ch),
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            let _ = app.config.save();
            app.go_to_menu();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if app.settings_selected > 0 {
                app.settings_selected -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.settings_selected < 2 {
                app.settings_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            app.settings_cycle_forward();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.settings_cycle_backward();
        }
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Menu => render_menu(frame, app),
        AppScreen::Drill => render_drill(frame, app),
        AppScreen::Settings => render_settings(frame, app),
    }
}

fn render_menu(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let mode = if app.config.quick_mode { "quick" } else { "normal" };
    let header_info = format!(" {} | {mode} mode", app.script.as_str());
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " kanadr ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            &*header_info,
            Style::default()
                .fg(colors.text_pending())
                .bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout[0]);

    let menu_area = ui::layout::centered_rect(50, 80, layout[1]);
    frame.render_widget(&app.menu, menu_area);

    let footer = Paragraph::new(Line::from(vec![Span::styled(
        " [1/2] Start  [m] Mode  [c] Settings  [q] Quit ",
        Style::default().fg(colors.text_pending()),
    )]));
    frame.render_widget(footer, layout[2]);
}

fn render_drill(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let Some(ref drill) = app.drill else { return };

    let app_layout = AppLayout::new(area);
    let tier = app_layout.tier;

    let header_text = format!(
        " {} | {} | Correct: {}  Wrong: {} ",
        app.script.as_str(),
        drill.mode.as_str(),
        drill.correct_count,
        drill.wrong_count,
    );
    let header = Paragraph::new(Line::from(Span::styled(
        &*header_text,
        Style::default()
            .fg(colors.header_fg())
            .bg(colors.header_bg())
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, app_layout.header);

    if drill.is_complete() {
        render_complete(frame, app, app_layout.main);
        let footer = Paragraph::new(Line::from(Span::styled(
            " [Enter/r] Practice again  [ESC] Menu ",
            Style::default().fg(colors.text_pending()),
        )));
        frame.render_widget(footer, app_layout.footer);
        return;
    }

    let mut constraints: Vec<Constraint> = vec![Constraint::Min(4), Constraint::Length(3)];
    if tier.show_progress_bar() {
        constraints.push(Constraint::Length(1));
    }

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(app_layout.main);

    let cards = CardRow::new(app.recent.items(), app.script, app.theme)
        .revealed(app.revealed)
        .shaking(app.is_shaking())
        .show_history(tier.show_history());
    frame.render_widget(cards, main_layout[0]);

    let input = AnswerInput::new(&drill.input, app.theme);
    frame.render_widget(input, main_layout[1]);

    if tier.show_progress_bar() {
        let progress = ProgressBar::new(drill.answered(), drill.catalog_len(), app.theme);
        frame.render_widget(progress, main_layout[2]);
    }

    let submit_hint = match drill.mode {
        session::drill::Mode::Normal => "[Enter] Submit  ",
        session::drill::Mode::Quick => "",
    };
    let footer_text =
        format!(" {submit_hint}[Tab] Reveal  [Ctrl+R] Restart  [ESC] Menu ");
    let footer = Paragraph::new(Line::from(Span::styled(
        &*footer_text,
        Style::default().fg(colors.text_pending()),
    )));
    frame.render_widget(footer, app_layout.footer);
}

fn render_complete(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;
    let centered = ui::layout::centered_rect(60, 60, area);

    let block = Block::bordered()
        .border_style(Style::default().fg(colors.border()))
        .style(Style::default().bg(colors.bg()));
    let inner = block.inner(centered);
    frame.render_widget(block, centered);

    let (total, wrong) = app
        .drill
        .as_ref()
        .map(|d| (d.catalog_len(), d.wrong_count))
        .unwrap_or((0, 0));
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Congrats!",
            Style::default()
                .fg(colors.success())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("All {total} kana answered, {wrong} wrong guesses along the way."),
            Style::default().fg(colors.fg()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to practice again",
            Style::default().fg(colors.accent()),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn render_settings(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let centered = ui::layout::centered_rect(60, 80, area);

    let block = Block::bordered()
        .title(" Settings ")
        .border_style(Style::default().fg(colors.accent()))
        .style(Style::default().bg(colors.bg()));
    let inner = block.inner(centered);
    block.render(centered, frame.buffer_mut());

    let fields: Vec<(String, String)> = vec![
        ("Theme".to_string(), app.config.theme.clone()),
        ("Script".to_string(), app.script.as_str().to_string()),
        (
            "Quick mode".to_string(),
            if app.config.quick_mode { "on" } else { "off" }.to_string(),
        ),
    ];

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(fields.len() as u16 * 3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(inner);

    let header = Paragraph::new(Line::from(Span::styled(
        "  Use arrows to navigate, Enter/Right to change, ESC to save & exit",
        Style::default().fg(colors.text_pending()),
    )));
    header.render(layout[0], frame.buffer_mut());

    let field_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            fields
                .iter()
                .map(|_| Constraint::Length(3))
                .collect::<Vec<_>>(),
        )
        .split(layout[1]);

    for (i, (label, value)) in fields.iter().enumerate() {
        let is_selected = i == app.settings_selected;
        let indicator = if is_selected { " > " } else { "   " };

        let label_text = format!("{indicator}{label}:");
        let value_text = format!("  < {value} >");

        let label_style = Style::default()
            .fg(if is_selected {
                colors.accent()
            } else {
                colors.fg()
            })
            .add_modifier(if is_selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            });

        let value_style = Style::default().fg(if is_selected {
            colors.accent()
        } else {
            colors.text_pending()
        });

        let lines = vec![
            Line::from(Span::styled(label_text, label_style)),
            Line::from(Span::styled(value_text, value_style)),
        ];
        Paragraph::new(lines).render(field_layout[i], frame.buffer_mut());
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        "  [ESC] Save & back  [Enter/arrows] Change value",
        Style::default().fg(colors.accent()),
    )));
    footer.render(layout[3], frame.buffer_mut());
}
