mod app;
mod event;
mod ui;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use crossterm::execute;
use crossterm::style::Print;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use mathdrill::Config;
use mathdrill::generator::problem::Mode;
use mathdrill::session::{Theme, messages};
use mathdrill::store::json_store::default_data_dir;
use mathdrill::store::schema::newest_first;
use mathdrill::store::{AchievementStore, JsonStore, KeyValueStore, MemoryStore};

use app::App;
use event::{AppEvent, EventHandler};
use ui::components::achievement_list::AchievementList;
use ui::components::progress_bar::ProgressBar;
use ui::components::question_card::QuestionCard;
use ui::components::scoreboard::Scoreboard;
use ui::layout::{AppLayout, centered_rect, pack_hint_lines};
use ui::theme::Palette;

const HINTS: &[&str] = &[
    "[0-9] answer",
    "[Enter] submit",
    "[Bksp] erase",
    "[c] clear",
    "[m] multiply",
    "[d] divide",
    "[f] fast mode",
    "[t] theme",
    "[q] quit",
];

#[derive(Parser)]
#[command(name = "mathdrill", version, about = "Times-table and division drill for the terminal")]
struct Cli {
    #[arg(short, long, help = "Mascot theme (panda, squirtle)")]
    theme: Option<String>,

    #[arg(short, long, help = "Starting mode (multiplication, division)")]
    mode: Option<String>,

    #[arg(short, long, help = "Start with fast mode on")]
    fast: bool,

    #[arg(long, help = "Don't ring the terminal bell on correct answers")]
    no_sound: bool,

    #[arg(long, help = "Directory holding the achievement log")]
    data_dir: Option<PathBuf>,

    #[arg(long, help = "Print the achievement log and exit")]
    achievements: bool,

    #[arg(long, help = "Write the effective settings to the config file and exit")]
    save_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let json_store = JsonStore::with_base_dir(data_dir.clone());
    if let Err(err) = init_logging(&data_dir) {
        eprintln!("logging disabled: {err:#}");
    }

    let mut config = Config::load().unwrap_or_else(|err| {
        log::warn!("ignoring unreadable config {}: {err:#}", Config::config_path().display());
        Config::default()
    });
    apply_cli(&mut config, &cli)?;

    if cli.save_config {
        config.save()?;
        println!("Saved settings to {}", Config::config_path().display());
        return Ok(());
    }

    if cli.achievements {
        print_achievements(&AchievementStore::new(json_store?), config.achievement_step);
        return Ok(());
    }

    let store: Box<dyn KeyValueStore> = match json_store {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("achievements won't be saved this session: {err:#}");
            Box::new(MemoryStore::new())
        }
    };
    let mut app = App::new(config, store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(50));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// The terminal UI owns the screen, so log lines go to a file.
fn init_logging(data_dir: &Path) -> Result<()> {
    let path = data_dir.join("mathdrill.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn apply_cli(config: &mut Config, cli: &Cli) -> Result<()> {
    if let Some(name) = &cli.theme {
        config.theme = Theme::from_name(name).ok_or_else(|| anyhow!("unknown theme: {name}"))?;
    }
    if let Some(name) = &cli.mode {
        config.mode = Mode::from_name(name).ok_or_else(|| anyhow!("unknown mode: {name}"))?;
    }
    if cli.fast {
        config.fast_mode = true;
    }
    if cli.no_sound {
        config.sound = false;
    }
    Ok(())
}

fn print_achievements<S: KeyValueStore>(store: &AchievementStore<S>, step: u32) {
    let records = newest_first(&store.load());
    if records.is_empty() {
        println!("{}", messages::no_achievements(step));
        return;
    }
    for record in records {
        println!("{}  (Date: {})", record.summary(), record.date);
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;
        if app.ring_bell {
            app.ring_bell = false;
            execute!(terminal.backend_mut(), Print('\u{7}'))?;
        }

        match events.next()? {
            AppEvent::Key(key) => app.handle_key(key, Instant::now()),
            AppEvent::Tick | AppEvent::Resize => {}
        }
        app.tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut Frame, app: &App) {
    let state = app.session.state();
    let config = app.session.config();
    let colors = Palette::for_theme(state.theme);
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(colors.bg())), area);

    let hint_lines = pack_hint_lines(HINTS, area.width as usize);
    let layout = AppLayout::new(area, hint_lines.len() as u16);

    let mut header_spans = vec![Span::styled(
        state.theme.title(),
        Style::default()
            .fg(colors.header_fg())
            .add_modifier(Modifier::BOLD),
    )];
    if !layout.tier.show_sidebar() {
        header_spans.push(Span::styled(
            format!("   {}/{} correct", state.correct_count, state.total_count),
            Style::default().fg(colors.header_fg()),
        ));
    }
    let header = Paragraph::new(Line::from(header_spans))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(colors.accent())))
        .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    let confetti_frame = app.confetti_until.map(|until| {
        until.saturating_duration_since(Instant::now()).as_millis() as u64 / 120
    });
    frame.render_widget(
        QuestionCard::new(
            state,
            app.flash,
            app.motivation.as_deref(),
            confetti_frame,
            colors,
        ),
        layout.main,
    );

    if let Some(sidebar) = layout.sidebar {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(3)])
            .split(sidebar);
        frame.render_widget(Scoreboard::new(state, colors), parts[0]);
        frame.render_widget(
            AchievementList::new(&app.achievements, config.achievement_step, colors),
            parts[1],
        );
    }

    frame.render_widget(
        ProgressBar::toward_next_milestone(
            state.correct_count,
            app.session.milestones().last_persisted,
            config.achievement_step,
            colors,
        ),
        layout.progress,
    );

    let footer_lines: Vec<Line> = hint_lines
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(colors.text_pending()))))
        .collect();
    frame.render_widget(Paragraph::new(footer_lines), layout.footer);

    if let Some(record) = &app.unlocked {
        let popup = centered_rect(48, 5, layout.main);
        frame.render_widget(Clear, popup);
        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                record.summary(),
                Style::default()
                    .fg(colors.warning())
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .title(" \u{1f3c6} Achievement Unlocked ")
                .border_style(Style::default().fg(colors.warning())),
        )
        .style(Style::default().bg(colors.bg()));
        frame.render_widget(body, popup);
    }
}
