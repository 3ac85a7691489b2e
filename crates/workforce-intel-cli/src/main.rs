mod app;
mod view;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};
use workforce_intel_config::Config;
use workforce_intel_engine::io;

use app::{App, Section, Source};

const PAGE: u16 = 10;

enum Mode {
    Dashboard(Source),
    Answer(PathBuf),
    Simulation(PathBuf),
}

fn usage(program: &str) {
    eprintln!("Usage: {program} [agent-result.json]");
    eprintln!("       {program} --sample");
    eprintln!("       {program} --answer <agent-result.json>");
    eprintln!("       {program} --simulation <agent-result.json>");
}

/// Logger filtered by the `var` environment variable, `warn` when it is unset.
fn logger(var: &str) -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(var, "warn"))
}

fn main() -> Result<()> {
    logger("RUST_LOG").init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("workforce-intel-cli");

    let mode = match args.get(1..).unwrap_or_default() {
        [flag] if flag == "--sample" => Mode::Dashboard(Source::Sample),
        [flag, path] if flag == "--answer" => Mode::Answer(PathBuf::from(path)),
        [flag, path] if flag == "--simulation" => Mode::Simulation(PathBuf::from(path)),
        [path] if !path.starts_with("--") => {
            let path = PathBuf::from(path);
            remember_result_path(&path);
            Mode::Dashboard(Source::File(path))
        }
        [] => Mode::Dashboard(source_from_config(program)),
        _ => {
            usage(program);
            process::exit(1);
        }
    };

    match mode {
        Mode::Answer(path) => print_answer(&path),
        Mode::Simulation(path) => print_simulation(&path),
        Mode::Dashboard(source) => run_dashboard(&source),
    }
}

/// Picks the dashboard source when no argument is given.
fn source_from_config(program: &str) -> Source {
    let config_path = Config::config_path();
    match Config::load() {
        Ok(Some(config)) => match config.result_path {
            Some(path) if path.exists() || !config.show_sample => Source::File(path),
            _ if config.show_sample => Source::Sample,
            _ => {
                eprintln!(
                    "Error: No result_path or show_sample in config file '{}'",
                    config_path.display()
                );
                process::exit(1);
            }
        },
        Ok(None) => {
            eprintln!("Error: No agent result provided and no config file found");
            usage(program);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            usage(program);
            process::exit(1);
        }
    }
}

/// Writes a config pointing at `path` if there is no config file yet.
fn remember_result_path(path: &Path) {
    let config_path = Config::config_path();
    if !matches!(Config::load(), Ok(None)) {
        return;
    }

    let result_path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let config = Config {
        result_path: Some(result_path),
        show_sample: false,
    };
    match config.save_to_path(&config_path) {
        Ok(()) => log::info!("Created config file at {}", config_path.display()),
        Err(e) => log::warn!("Failed to create config file: {e}"),
    }
}

/// Prints the conversational answer held in an agent result, one line per block.
fn print_answer(path: &Path) -> Result<()> {
    let raw = io::read_agent_result(path)
        .with_context(|| format!("reading agent result {}", path.display()))?;
    for line in app::answer_lines(&raw) {
        println!("{line}");
    }
    Ok(())
}

/// Prints the outcome of a scenario simulation held in an agent result.
fn print_simulation(path: &Path) -> Result<()> {
    let raw = io::read_agent_result(path)
        .with_context(|| format!("reading simulation result {}", path.display()))?;
    for line in app::simulation_lines(&raw).map_err(anyhow::Error::msg)? {
        println!("{line}");
    }
    Ok(())
}

fn run_dashboard(source: &Source) -> Result<()> {
    let mut app = App::load(source);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_section(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_section(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(PAGE),
                KeyCode::PageUp => app.scroll_up(PAGE),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)].as_ref())
        .split(rows[0]);

    // Section list panel
    let section_items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| ListItem::new(Line::from(section.title())))
        .collect();

    let sections = List::new(section_items)
        .block(Block::default().borders(Borders::ALL).title("Sections"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(sections, chunks[0], &mut app.section_state);

    // Content panel
    let title = format!("{} · {}", app.section().title(), app.source_label);
    let content = Paragraph::new(app.section_lines())
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    // Instructions
    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("PgUp/PgDn: Scroll"),
    ]));

    f.render_widget(help, rows[1]);
}
