mod markdown;
mod preview;
mod settings;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_config::Config;
use folio_engine::io;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::{
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

use preview::{App, section_title};

/// Preview how a homepage document splits into sections.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Homepage markdown file, or a content directory holding `homepage.mdx`.
    /// Falls back to `content_path` from the config file.
    path: Option<PathBuf>,

    /// Print the rendered section list as JSON instead of opening the previewer
    #[arg(long)]
    json: bool,

    /// Save DIR as the default content directory in the config file and exit
    #[arg(long, value_name = "DIR", conflicts_with_all = ["path", "json"])]
    set_content_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    log::info!("folio starting up");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    if let Some(dir) = cli.set_content_path {
        match settings::set_content_path(&dir, &config_path) {
            Ok(config) => {
                println!("Content path set to {}", config.content_path.display());
                return Ok(());
            }
            Err(e) => {
                eprintln!("Error: {e:#}");
                process::exit(1);
            }
        }
    }

    // Determine document path from CLI args or config file
    let (path, from_config) = match cli.path {
        Some(path) => (path, false),
        None => match Config::load() {
            Ok(Some(config)) => (config.content_path, true),
            Ok(None) => {
                eprintln!("Error: No content path provided and no config file found");
                eprintln!("Usage: folio <homepage-file-or-content-dir>");
                eprintln!("Or run: folio --set-content-path <content-dir>");
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: folio <homepage-file-or-content-dir>");
                process::exit(1);
            }
        },
    };
    log::info!("Content path: {}", path.display());

    let homepage = match io::load_homepage(&path) {
        Ok(homepage) => homepage,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!("Error: Path '{}'{} is invalid: {e}", path.display(), source);
            process::exit(1);
        }
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&homepage.render_sections())?
        );
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&homepage);

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
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_section(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_section(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // Section list panel
    let section_items: Vec<ListItem> = app
        .sections
        .iter()
        .map(|section| ListItem::new(Line::from(section_title(section))))
        .collect();

    let section_list = List::new(section_items)
        .block(Block::default().borders(Borders::ALL).title("Sections"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(section_list, chunks[0], &mut app.section_list_state);

    // Detail panel
    let content_text: Vec<Line> = if app.sections.is_empty() {
        vec![Line::from("The document has no sections")]
    } else {
        app.current_content
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]));

    f.render_widget(help, rows[1]);
}
